//! Bounce-stats section: staggered entrance on first view, counters replayed
//! on every re-entry.

/// Fraction of the stats container that must be visible
pub const STATS_THRESHOLD: f64 = 0.3;
/// Delay between consecutive block entrances
pub const ENTRANCE_STAGGER_MS: u64 = 150;
/// Delay before counters start on the very first view
pub const FIRST_VIEW_COUNTER_DELAY_MS: u64 = 400;

/// Whether counters replay each time the section comes back into view
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CounterReplay {
    #[default]
    EveryEntry,
    FirstEntryOnly,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatsPhase {
    /// Never intersected the viewport
    Unseen,
    /// In view for the first time; entrance animation running
    SeenOnce,
    /// Back in view after having left
    InView,
    OutOfView,
}

/// Side effect the view layer must carry out after a visibility change
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StatsAction {
    /// Add `fade-in-right` to block `index` after `delay_ms`
    RevealBlock { index: usize, delay_ms: u64 },
    /// Stop any running counter, show "0" and drop the animated markers
    ResetCounters,
    /// Start every counter after `delay_ms`, unless `epoch` is stale by then
    StartCounters { delay_ms: u64, epoch: u64 },
}

#[derive(Debug, Clone)]
pub struct BounceStats {
    phase: StatsPhase,
    block_count: usize,
    replay: CounterReplay,
    epoch: u64,
}

impl BounceStats {
    pub fn new(block_count: usize) -> Self {
        Self::with_replay(block_count, CounterReplay::default())
    }

    pub fn with_replay(block_count: usize, replay: CounterReplay) -> Self {
        Self {
            phase: StatsPhase::Unseen,
            block_count,
            replay,
            epoch: 0,
        }
    }

    pub fn phase(&self) -> StatsPhase {
        self.phase
    }

    /// True once the entrance animation has been scheduled; never reverts
    pub fn entrance_applied(&self) -> bool {
        self.phase != StatsPhase::Unseen
    }

    /// A delayed counter start is only honoured if nothing happened since it
    /// was scheduled. Counters that animate once finish even off screen.
    pub fn is_current(&self, epoch: u64) -> bool {
        if self.epoch != epoch {
            return false;
        }
        self.replay == CounterReplay::FirstEntryOnly
            || matches!(self.phase, StatsPhase::SeenOnce | StatsPhase::InView)
    }

    /// Feed an intersection change and get back what the view must do
    pub fn on_visibility(&mut self, visible: bool) -> Vec<StatsAction> {
        match (self.phase, visible) {
            (StatsPhase::Unseen, true) => {
                self.phase = StatsPhase::SeenOnce;
                self.epoch += 1;
                let mut actions: Vec<StatsAction> = (0..self.block_count)
                    .map(|index| StatsAction::RevealBlock {
                        index,
                        delay_ms: index as u64 * ENTRANCE_STAGGER_MS,
                    })
                    .collect();
                actions.push(StatsAction::ResetCounters);
                actions.push(StatsAction::StartCounters {
                    delay_ms: FIRST_VIEW_COUNTER_DELAY_MS,
                    epoch: self.epoch,
                });
                actions
            }
            (StatsPhase::SeenOnce | StatsPhase::InView, false) => {
                self.phase = StatsPhase::OutOfView;
                match self.replay {
                    CounterReplay::EveryEntry => {
                        self.epoch += 1;
                        vec![StatsAction::ResetCounters]
                    }
                    CounterReplay::FirstEntryOnly => Vec::new(),
                }
            }
            (StatsPhase::OutOfView, true) => {
                self.phase = StatsPhase::InView;
                match self.replay {
                    CounterReplay::EveryEntry => {
                        self.epoch += 1;
                        vec![
                            StatsAction::ResetCounters,
                            StatsAction::StartCounters {
                                delay_ms: 0,
                                epoch: self.epoch,
                            },
                        ]
                    }
                    CounterReplay::FirstEntryOnly => Vec::new(),
                }
            }
            // repeated notifications for the state we are already in
            _ => Vec::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::behaviors::counter::CounterAnimation;

    fn start_epoch(actions: &[StatsAction]) -> Option<(u64, u64)> {
        actions.iter().find_map(|a| match a {
            StatsAction::StartCounters { delay_ms, epoch } => Some((*delay_ms, *epoch)),
            _ => None,
        })
    }

    #[test]
    fn test_first_entry_staggers_blocks_and_delays_counters() {
        let mut stats = BounceStats::new(4);
        let actions = stats.on_visibility(true);

        assert_eq!(stats.phase(), StatsPhase::SeenOnce);
        assert_eq!(
            &actions[..4],
            &[
                StatsAction::RevealBlock { index: 0, delay_ms: 0 },
                StatsAction::RevealBlock { index: 1, delay_ms: 150 },
                StatsAction::RevealBlock { index: 2, delay_ms: 300 },
                StatsAction::RevealBlock { index: 3, delay_ms: 450 },
            ]
        );
        assert!(actions.contains(&StatsAction::ResetCounters));
        assert_eq!(start_epoch(&actions).map(|(d, _)| d), Some(400));
    }

    #[test]
    fn test_not_visible_before_first_entry_does_nothing() {
        let mut stats = BounceStats::new(4);
        assert!(stats.on_visibility(false).is_empty());
        assert_eq!(stats.phase(), StatsPhase::Unseen);
        assert!(!stats.entrance_applied());
    }

    #[test]
    fn test_leaving_resets_counters_but_keeps_entrance() {
        let mut stats = BounceStats::new(4);
        stats.on_visibility(true);
        let actions = stats.on_visibility(false);

        assert_eq!(actions, vec![StatsAction::ResetCounters]);
        assert_eq!(stats.phase(), StatsPhase::OutOfView);
        assert!(stats.entrance_applied());
    }

    #[test]
    fn test_reentry_replays_without_entrance_or_delay() {
        let mut stats = BounceStats::new(4);
        stats.on_visibility(true);
        stats.on_visibility(false);
        let actions = stats.on_visibility(true);

        assert_eq!(stats.phase(), StatsPhase::InView);
        assert!(!actions
            .iter()
            .any(|a| matches!(a, StatsAction::RevealBlock { .. })));
        assert_eq!(actions[0], StatsAction::ResetCounters);
        assert_eq!(start_epoch(&actions).map(|(d, _)| d), Some(0));
    }

    fn apply(actions: Vec<StatsAction>, counter: &mut CounterAnimation, text: &mut String) {
        for action in actions {
            match action {
                StatsAction::ResetCounters => {
                    counter.reset();
                    *text = "0".to_string();
                }
                StatsAction::StartCounters { .. } => {
                    while !counter.is_done() {
                        *text = counter.tick().text;
                    }
                }
                StatsAction::RevealBlock { .. } => {}
            }
        }
    }

    #[test]
    fn test_reentry_shows_zero_then_replays_to_completion() {
        let mut stats = BounceStats::new(1);
        let mut counter = CounterAnimation::new(500);
        let mut text = counter.display();

        apply(stats.on_visibility(true), &mut counter, &mut text);
        assert_eq!(text, "500+");

        apply(stats.on_visibility(false), &mut counter, &mut text);
        assert_eq!(text, "0");

        let actions = stats.on_visibility(true);
        assert_eq!(actions[0], StatsAction::ResetCounters);
        apply(actions, &mut counter, &mut text);
        assert_eq!(text, "500+");
    }

    #[test]
    fn test_pending_start_is_stale_after_leaving() {
        let mut stats = BounceStats::new(2);
        let (_, epoch) = start_epoch(&stats.on_visibility(true)).unwrap();
        assert!(stats.is_current(epoch));

        stats.on_visibility(false);
        assert!(!stats.is_current(epoch));

        let (_, next) = start_epoch(&stats.on_visibility(true)).unwrap();
        assert!(!stats.is_current(epoch));
        assert!(stats.is_current(next));
    }

    #[test]
    fn test_duplicate_visible_is_ignored() {
        let mut stats = BounceStats::new(3);
        stats.on_visibility(true);
        assert!(stats.on_visibility(true).is_empty());
    }

    #[test]
    fn test_first_entry_only_policy_never_replays() {
        let mut stats = BounceStats::with_replay(2, CounterReplay::FirstEntryOnly);
        assert!(start_epoch(&stats.on_visibility(true)).is_some());
        assert!(stats.on_visibility(false).is_empty());
        assert!(stats.on_visibility(true).is_empty());
        assert_eq!(stats.phase(), StatsPhase::InView);
    }

    #[test]
    fn test_first_entry_only_start_survives_quick_exit() {
        let mut stats = BounceStats::with_replay(2, CounterReplay::FirstEntryOnly);
        let (_, epoch) = start_epoch(&stats.on_visibility(true)).unwrap();
        stats.on_visibility(false);
        assert!(stats.is_current(epoch));
    }
}
