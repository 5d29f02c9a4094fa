/// Number of ticks a counter takes to reach its goal
pub const COUNTER_TICKS: u32 = 60;
/// Milliseconds between counter ticks
pub const COUNTER_TICK_MS: u64 = 30;

/// Parse a `data-target` attribute the way an integer parse of markup would:
/// leading whitespace is skipped, leading digits are read, anything else
/// stops the parse. No digits (or a missing attribute) yields 0.
pub fn parse_target(raw: Option<&str>) -> u32 {
    let Some(raw) = raw else {
        return 0;
    };
    let digits: String = raw
        .trim_start()
        .chars()
        .take_while(|c| c.is_ascii_digit())
        .collect();
    digits.parse().unwrap_or(0)
}

/// Final label shown once a counter reaches its goal
pub fn final_label(target: u32) -> String {
    match target {
        20 | 500 => format!("{target}+"),
        24 => "24/7".to_string(),
        100 => format!("{target}%"),
        _ => target.to_string(),
    }
}

/// One step of a running counter
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CounterFrame {
    pub text: String,
    pub done: bool,
}

/// Linear count-up from zero to a target over a fixed number of ticks.
///
/// The displayed value is derived from the elapsed tick count rather than an
/// accumulated float, so the last tick lands exactly on the target and the
/// value never decreases.
#[derive(Debug, Clone, PartialEq)]
pub struct CounterAnimation {
    target: u32,
    elapsed: u32,
}

impl CounterAnimation {
    pub fn new(target: u32) -> Self {
        Self { target, elapsed: 0 }
    }

    pub fn target(&self) -> u32 {
        self.target
    }

    pub fn is_done(&self) -> bool {
        self.elapsed >= COUNTER_TICKS
    }

    /// Current value, floored to a whole number
    pub fn value(&self) -> u32 {
        if self.is_done() {
            return self.target;
        }
        let exact = f64::from(self.target) * f64::from(self.elapsed) / f64::from(COUNTER_TICKS);
        exact.floor() as u32
    }

    /// Text to display for the current state
    pub fn display(&self) -> String {
        if self.is_done() {
            final_label(self.target)
        } else {
            self.value().to_string()
        }
    }

    /// Advance one tick
    pub fn tick(&mut self) -> CounterFrame {
        if self.target == 0 {
            self.elapsed = COUNTER_TICKS;
        } else if !self.is_done() {
            self.elapsed += 1;
        }
        CounterFrame {
            text: self.display(),
            done: self.is_done(),
        }
    }

    /// Back to zero, as if never started
    pub fn reset(&mut self) {
        self.elapsed = 0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run_to_end(target: u32) -> (Vec<String>, CounterFrame) {
        let mut anim = CounterAnimation::new(target);
        let mut seen = Vec::new();
        loop {
            let frame = anim.tick();
            if frame.done {
                return (seen, frame);
            }
            seen.push(frame.text);
            assert!(seen.len() <= COUNTER_TICKS as usize, "counter never finished");
        }
    }

    #[test]
    fn test_known_targets_end_with_suffix() {
        assert_eq!(run_to_end(20).1.text, "20+");
        assert_eq!(run_to_end(500).1.text, "500+");
        assert_eq!(run_to_end(24).1.text, "24/7");
        assert_eq!(run_to_end(100).1.text, "100%");
    }

    #[test]
    fn test_other_target_ends_with_plain_number() {
        assert_eq!(run_to_end(37).1.text, "37");
    }

    #[test]
    fn test_finishes_in_exactly_sixty_ticks() {
        let mut anim = CounterAnimation::new(500);
        for _ in 0..COUNTER_TICKS - 1 {
            assert!(!anim.tick().done);
        }
        assert!(anim.tick().done);
    }

    #[test]
    fn test_values_never_decrease() {
        let mut anim = CounterAnimation::new(100);
        let mut last = 0;
        while !anim.tick().done {
            assert!(anim.value() >= last);
            last = anim.value();
        }
        assert_eq!(anim.value(), 100);
    }

    #[test]
    fn test_intermediate_text_is_floored() {
        let mut anim = CounterAnimation::new(20);
        // 20 / 60 per tick: first ticks floor to 0
        assert_eq!(anim.tick().text, "0");
        assert_eq!(anim.tick().text, "0");
        assert_eq!(anim.tick().text, "1");
    }

    #[test]
    fn test_zero_target_finishes_immediately() {
        let mut anim = CounterAnimation::new(0);
        let frame = anim.tick();
        assert!(frame.done);
        assert_eq!(frame.text, "0");
    }

    #[test]
    fn test_ticks_after_done_are_stable() {
        let (_, last) = run_to_end(24);
        let mut anim = CounterAnimation::new(24);
        while !anim.tick().done {}
        assert_eq!(anim.tick(), last);
    }

    #[test]
    fn test_reset_returns_to_zero() {
        let mut anim = CounterAnimation::new(100);
        for _ in 0..30 {
            anim.tick();
        }
        anim.reset();
        assert_eq!(anim.display(), "0");
        assert!(!anim.is_done());
    }

    #[test]
    fn test_parse_target() {
        assert_eq!(parse_target(Some("500")), 500);
        assert_eq!(parse_target(Some("  24")), 24);
        assert_eq!(parse_target(Some("20x")), 20);
        assert_eq!(parse_target(Some("abc")), 0);
        assert_eq!(parse_target(Some("")), 0);
        assert_eq!(parse_target(Some("-5")), 0);
        assert_eq!(parse_target(None), 0);
    }
}
