use leptos::prelude::*;
use std::fmt::Debug;
use std::time::Duration;

/// Something a `RepeatingTimer` can cancel
pub trait Interval: Send + Sync + 'static {
    fn cancel(&self);
}

impl Interval for IntervalHandle {
    fn cancel(&self) {
        self.clear();
    }
}

/// Owned handle to one recurring browser timer.
///
/// Starting always clears the previous interval first, so a logical animation
/// never has two timers ticking at once. The handle is `Copy` and can be
/// stopped from inside its own tick.
pub struct RepeatingTimer<H = IntervalHandle> {
    handle: StoredValue<Option<H>>,
}

impl<H> Clone for RepeatingTimer<H> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<H> Copy for RepeatingTimer<H> {}

impl RepeatingTimer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn start(&self, period: Duration, tick: impl Fn() + 'static) {
        self.start_with(|| set_interval_with_handle(tick, period));
    }
}

impl<H: Interval> RepeatingTimer<H> {
    /// Clear the running interval, then install the one `schedule` returns
    pub fn start_with<E: Debug>(&self, schedule: impl FnOnce() -> Result<H, E>) {
        self.stop();
        match schedule() {
            Ok(handle) => self.handle.set_value(Some(handle)),
            Err(e) => leptos::logging::warn!("could not start timer: {e:?}"),
        }
    }

    pub fn stop(&self) {
        self.handle.update_value(|handle| {
            if let Some(handle) = handle.take() {
                handle.cancel();
            }
        });
    }
}

impl<H: Interval> Default for RepeatingTimer<H> {
    fn default() -> Self {
        Self {
            handle: StoredValue::new(None),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::{Arc, Mutex};

    #[derive(Clone, Default)]
    struct Cleared(Arc<Mutex<Vec<u32>>>);

    impl Cleared {
        fn ids(&self) -> Vec<u32> {
            self.0.lock().unwrap().clone()
        }
    }

    struct FakeInterval {
        id: u32,
        cleared: Cleared,
    }

    impl Interval for FakeInterval {
        fn cancel(&self) {
            self.cleared.0.lock().unwrap().push(self.id);
        }
    }

    fn schedule(id: u32, cleared: &Cleared) -> impl FnOnce() -> Result<FakeInterval, ()> {
        let cleared = cleared.clone();
        move || Ok(FakeInterval { id, cleared })
    }

    #[test]
    fn test_restart_clears_previous_interval_first() {
        let owner = Owner::new();
        owner.set();
        let cleared = Cleared::default();
        let timer = RepeatingTimer::<FakeInterval>::default();

        timer.start_with(schedule(1, &cleared));
        assert!(cleared.ids().is_empty());

        timer.start_with(schedule(2, &cleared));
        assert_eq!(cleared.ids(), vec![1]);

        timer.stop();
        assert_eq!(cleared.ids(), vec![1, 2]);
    }

    #[test]
    fn test_stop_is_idempotent() {
        let owner = Owner::new();
        owner.set();
        let cleared = Cleared::default();
        let timer = RepeatingTimer::<FakeInterval>::default();

        timer.stop();
        timer.start_with(schedule(7, &cleared));
        timer.stop();
        timer.stop();
        assert_eq!(cleared.ids(), vec![7]);
    }

    #[test]
    fn test_failed_start_leaves_nothing_running() {
        let owner = Owner::new();
        owner.set();
        let cleared = Cleared::default();
        let timer = RepeatingTimer::<FakeInterval>::default();

        timer.start_with(schedule(1, &cleared));
        timer.start_with(|| Err::<FakeInterval, _>("no window"));
        assert_eq!(cleared.ids(), vec![1]);

        timer.stop();
        assert_eq!(cleared.ids(), vec![1]);
    }
}
