/// Time each hero slide stays up, long enough for its zoom animation
pub const SLIDE_INTERVAL_MS: u64 = 8000;

/// Cursor over the hero slides, plus whether auto-advance is on.
///
/// Ticks that arrive while paused are ignored, so a late interval callback
/// after a hover cannot move the slides.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Slideshow {
    len: usize,
    current: usize,
    running: bool,
}

impl Slideshow {
    pub fn new(len: usize) -> Self {
        Self {
            len,
            current: 0,
            running: false,
        }
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn current(&self) -> usize {
        self.current
    }

    /// Show slide `index`; out of range is ignored
    pub fn show(&mut self, index: usize) -> bool {
        if index >= self.len {
            return false;
        }
        self.current = index;
        true
    }

    /// Move to the following slide, wrapping around
    pub fn advance(&mut self) -> usize {
        if self.len > 0 {
            self.current = (self.current + 1) % self.len;
        }
        self.current
    }

    /// Timer tick: advance only while running
    pub fn tick(&mut self) -> Option<usize> {
        self.running.then(|| self.advance())
    }

    /// Turn auto-advance on. Returns true when the caller must (re)arm its
    /// interval; an empty slideshow never runs.
    pub fn start(&mut self) -> bool {
        self.running = !self.is_empty();
        self.running
    }

    pub fn stop(&mut self) {
        self.running = false;
    }

    /// Navigation dot click: jump, then restart the countdown. Returns true
    /// when the interval must be re-armed.
    pub fn select(&mut self, index: usize) -> bool {
        if !self.show(index) {
            return false;
        }
        self.stop();
        self.start()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_advance_wraps_after_len_ticks() {
        let mut slides = Slideshow::new(4);
        assert!(slides.start());
        for _ in 0..slides.len() {
            slides.tick();
        }
        assert_eq!(slides.current(), 0);
    }

    #[test]
    fn test_advance_visits_every_slide_in_order() {
        let mut slides = Slideshow::new(3);
        slides.start();
        let seen: Vec<Option<usize>> = (0..5).map(|_| slides.tick()).collect();
        assert_eq!(seen, vec![Some(1), Some(2), Some(0), Some(1), Some(2)]);
    }

    #[test]
    fn test_ticks_while_paused_are_ignored() {
        let mut slides = Slideshow::new(3);
        slides.start();
        slides.tick();
        slides.stop();
        assert_eq!(slides.tick(), None);
        assert_eq!(slides.current(), 1);

        assert!(slides.start());
        assert_eq!(slides.tick(), Some(2));
    }

    #[test]
    fn test_select_shows_slide_and_rearms() {
        let mut slides = Slideshow::new(4);
        slides.start();
        slides.tick();

        assert!(slides.select(2));
        assert_eq!(slides.current(), 2);
        assert_eq!(slides.tick(), Some(3));
    }

    #[test]
    fn test_select_while_paused_resumes() {
        let mut slides = Slideshow::new(4);
        assert_eq!(slides.tick(), None);
        assert!(slides.select(3));
        assert_eq!(slides.tick(), Some(0));
    }

    #[test]
    fn test_select_out_of_range_is_ignored() {
        let mut slides = Slideshow::new(2);
        slides.start();
        assert!(!slides.select(5));
        assert_eq!(slides.current(), 0);
        assert_eq!(slides.tick(), Some(1));
    }

    #[test]
    fn test_empty_slideshow_never_runs() {
        let mut slides = Slideshow::new(0);
        assert!(slides.is_empty());
        assert!(!slides.start());
        assert_eq!(slides.tick(), None);
        assert!(!slides.show(0));
    }
}
