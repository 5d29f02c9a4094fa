//! Scroll-linked decoration: circuit dot positions, glow, navbar auto-hide,
//! and a once-per-frame gate for coalescing scroll bursts.

use std::f64::consts::PI;
use std::ops::Range;

/// Scroll offset below which the navbar is never hidden
pub const NAVBAR_HIDE_OFFSET: f64 = 100.0;

/// Scroll distance per sample that saturates the glow
const GLOW_SATURATION_PX: f64 = 20.0;

/// Fraction of the scrollable range already scrolled, in `[0, 1]`.
///
/// When the document is no taller than the viewport there is nothing to
/// scroll and progress is 0.
pub fn scroll_progress(scroll_y: f64, document_height: f64, viewport_height: f64) -> f64 {
    let scrollable = document_height - viewport_height;
    if scrollable <= 0.0 || !scrollable.is_finite() {
        return 0.0;
    }
    (scroll_y / scrollable).clamp(0.0, 1.0)
}

/// Horizontal position of circuit dot `index`, as a percentage of its track
pub fn dot_left_percent(progress: f64, index: usize) -> f64 {
    let index = index as f64;
    let dot_progress = (progress + index * 0.1) % 1.0;
    let base = 10.0 + dot_progress * 80.0;
    let oscillation = (progress * PI * 2.0 + index * PI / 2.0).sin() * 5.0;
    base + oscillation
}

/// Glow strength in `[0, 1]` from the distance scrolled since the last sample
pub fn glow_intensity(scroll_y: f64, last_scroll_y: f64) -> f64 {
    ((scroll_y - last_scroll_y).abs() / GLOW_SATURATION_PX).min(1.0)
}

/// `box-shadow` value for a dot glowing at `glow`
pub fn glow_shadow(glow: f64) -> String {
    format!(
        "0 0 {}px rgba(6, 182, 212, {}), inset 0 2px 4px rgba(255, 255, 255, 0.3)",
        20.0 + glow * 15.0,
        0.8 + glow * 0.2
    )
}

/// Viewport measurements taken when a frame runs
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScrollMetrics {
    pub scroll_y: f64,
    pub document_height: f64,
    pub viewport_height: f64,
}

/// Style for one circuit dot
#[derive(Debug, Clone, PartialEq)]
pub struct DotStyle {
    pub left_percent: f64,
    pub box_shadow: String,
}

impl DotStyle {
    pub fn left(&self) -> String {
        format!("{}%", self.left_percent)
    }
}

/// Remembers the previous scroll offset so glow can follow scroll speed
#[derive(Debug, Clone, Default)]
pub struct ScrollTracker {
    last_scroll_y: f64,
}

impl ScrollTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Styles for the dots numbered `dots`. Numbering runs across the whole
    /// page so dots in different dividers keep distinct phases.
    pub fn sample(&mut self, metrics: ScrollMetrics, dots: Range<usize>) -> Vec<DotStyle> {
        let progress = scroll_progress(
            metrics.scroll_y,
            metrics.document_height,
            metrics.viewport_height,
        );
        let glow = glow_intensity(metrics.scroll_y, self.last_scroll_y);
        let box_shadow = glow_shadow(glow);
        self.last_scroll_y = metrics.scroll_y;

        dots.map(|index| DotStyle {
            left_percent: dot_left_percent(progress, index),
            box_shadow: box_shadow.clone(),
        })
        .collect()
    }
}

/// At most one pending animation frame, however many scroll events arrive
#[derive(Debug, Clone, Copy, Default)]
pub struct FrameGate {
    pending: bool,
}

impl FrameGate {
    /// Returns true when the caller should request a new frame
    pub fn request(&mut self) -> bool {
        if self.pending {
            return false;
        }
        self.pending = true;
        true
    }

    /// Called from the frame callback once work is done
    pub fn complete(&mut self) {
        self.pending = false;
    }

    pub fn is_pending(&self) -> bool {
        self.pending
    }
}

/// Hides the navbar and contact bar while scrolling down, shows them on any
/// upward scroll.
#[derive(Debug, Clone, Copy, Default)]
pub struct NavbarAutoHide {
    last_scroll_top: f64,
    hidden: bool,
}

impl NavbarAutoHide {
    pub fn is_hidden(&self) -> bool {
        self.hidden
    }

    /// Feed the current scroll offset; returns whether the bars are hidden
    pub fn on_scroll(&mut self, scroll_top: f64) -> bool {
        if scroll_top > self.last_scroll_top && scroll_top > NAVBAR_HIDE_OFFSET {
            self.hidden = true;
        } else if scroll_top < self.last_scroll_top {
            self.hidden = false;
        }
        self.last_scroll_top = scroll_top;
        self.hidden
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn test_progress_is_clamped() {
        assert_eq!(scroll_progress(0.0, 2000.0, 1000.0), 0.0);
        assert_eq!(scroll_progress(500.0, 2000.0, 1000.0), 0.5);
        assert_eq!(scroll_progress(1500.0, 2000.0, 1000.0), 1.0);
        assert_eq!(scroll_progress(-40.0, 2000.0, 1000.0), 0.0);
    }

    #[test]
    fn test_progress_without_scrollable_content() {
        assert_eq!(scroll_progress(0.0, 800.0, 800.0), 0.0);
        assert_eq!(scroll_progress(10.0, 600.0, 800.0), 0.0);
    }

    #[test]
    fn test_dot_positions_at_top() {
        // progress 0: dot 0 at 10%, dot 1 shifted by 8% plus a full +5 swing
        assert!(approx(dot_left_percent(0.0, 0), 10.0));
        assert!(approx(dot_left_percent(0.0, 1), 23.0));
        assert!(approx(dot_left_percent(0.0, 2), 26.0));
    }

    #[test]
    fn test_dot_positions_stay_on_track() {
        for step in 0..=100 {
            let progress = f64::from(step) / 100.0;
            for index in 0..12 {
                let left = dot_left_percent(progress, index);
                assert!((5.0..=95.0).contains(&left), "dot {index} at {left}");
            }
        }
    }

    #[test]
    fn test_glow_saturates() {
        assert_eq!(glow_intensity(100.0, 100.0), 0.0);
        assert!(approx(glow_intensity(110.0, 100.0), 0.5));
        assert_eq!(glow_intensity(0.0, 500.0), 1.0);
    }

    #[test]
    fn test_glow_shadow_format() {
        assert_eq!(
            glow_shadow(0.0),
            "0 0 20px rgba(6, 182, 212, 0.8), inset 0 2px 4px rgba(255, 255, 255, 0.3)"
        );
        assert_eq!(
            glow_shadow(1.0),
            "0 0 35px rgba(6, 182, 212, 1), inset 0 2px 4px rgba(255, 255, 255, 0.3)"
        );
    }

    #[test]
    fn test_tracker_uses_previous_sample_for_glow() {
        let mut tracker = ScrollTracker::new();
        let metrics = |scroll_y| ScrollMetrics {
            scroll_y,
            document_height: 3000.0,
            viewport_height: 1000.0,
        };

        let first = tracker.sample(metrics(0.0), 0..3);
        assert_eq!(first.len(), 3);
        assert_eq!(first[0].box_shadow, glow_shadow(0.0));

        let moving = tracker.sample(metrics(40.0), 0..3);
        assert_eq!(moving[0].box_shadow, glow_shadow(1.0));

        let still = tracker.sample(metrics(40.0), 0..3);
        assert_eq!(still[2].box_shadow, glow_shadow(0.0));
    }

    #[test]
    fn test_second_divider_continues_page_numbering() {
        let metrics = ScrollMetrics {
            scroll_y: 300.0,
            document_height: 3000.0,
            viewport_height: 1000.0,
        };
        let first = ScrollTracker::new().sample(metrics, 0..3);
        let second = ScrollTracker::new().sample(metrics, 3..5);

        assert_eq!(second.len(), 2);
        assert!(approx(second[0].left_percent, dot_left_percent(0.15, 3)));
        assert!(approx(second[1].left_percent, dot_left_percent(0.15, 4)));
        assert!(!approx(second[0].left_percent, first[0].left_percent));
    }

    #[test]
    fn test_frame_gate_coalesces_bursts() {
        let mut gate = FrameGate::default();
        assert!(gate.request());
        assert!(!gate.request());
        assert!(!gate.request());
        assert!(gate.is_pending());

        gate.complete();
        assert!(gate.request());
    }

    #[test]
    fn test_navbar_hides_past_threshold_only() {
        let mut nav = NavbarAutoHide::default();
        assert!(!nav.on_scroll(50.0));
        assert!(!nav.on_scroll(100.0));
        assert!(nav.on_scroll(150.0));
        assert!(nav.on_scroll(400.0));
    }

    #[test]
    fn test_navbar_shows_on_upward_scroll() {
        let mut nav = NavbarAutoHide::default();
        nav.on_scroll(300.0);
        assert!(nav.is_hidden());
        assert!(!nav.on_scroll(290.0));
        // holding still keeps the current state
        assert!(!nav.on_scroll(290.0));
    }
}
