/// Session storage key set once the splash has been dismissed
pub const LOADING_COMPLETED_KEY: &str = "loadingCompleted";
/// Settling time after the window `load` event before fading
pub const LOAD_SETTLE_MS: u64 = 200;
/// Upper bound on how long the splash may stay up
pub const LOAD_FALLBACK_MS: u64 = 5000;
/// Length of the fade-out transition
pub const FADE_OUT_MS: u64 = 500;
/// Id of the overlay element
pub const OVERLAY_ID: &str = "loadingOverlay";

/// Inline script placed right after the server-rendered overlay. On later
/// loads in the same session it hides the overlay while the page is still
/// parsing, before the wasm bundle hydrates.
pub fn repeat_visit_script() -> String {
    format!(
        "try{{if(sessionStorage.getItem('{LOADING_COMPLETED_KEY}')){{\
         document.getElementById('{OVERLAY_ID}').style.display='none';}}}}catch(e){{}}"
    )
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SplashPhase {
    Visible,
    FadingOut,
    Hidden,
}

/// Loading overlay shown on the first page of a browser session
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoadingSplash {
    phase: SplashPhase,
}

impl LoadingSplash {
    /// `completed_in_session` is the `loadingCompleted` session flag
    pub fn new(completed_in_session: bool) -> Self {
        let phase = if completed_in_session {
            SplashPhase::Hidden
        } else {
            SplashPhase::Visible
        };
        Self { phase }
    }

    pub fn phase(&self) -> SplashPhase {
        self.phase
    }

    pub fn is_displayed(&self) -> bool {
        self.phase != SplashPhase::Hidden
    }

    pub fn is_fading(&self) -> bool {
        self.phase == SplashPhase::FadingOut
    }

    /// Start the fade. Both the load trigger and the fallback call this; only
    /// the first one counts.
    pub fn begin_fade(&mut self) -> bool {
        if self.phase != SplashPhase::Visible {
            return false;
        }
        self.phase = SplashPhase::FadingOut;
        true
    }

    /// Fade finished; the caller records the session flag when this is true
    pub fn finish(&mut self) -> bool {
        if self.phase != SplashPhase::FadingOut {
            return false;
        }
        self.phase = SplashPhase::Hidden;
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_skipped_when_session_flag_set() {
        let mut splash = LoadingSplash::new(true);
        assert!(!splash.is_displayed());
        assert!(!splash.begin_fade());
    }

    #[test]
    fn test_fades_then_hides() {
        let mut splash = LoadingSplash::new(false);
        assert_eq!(splash.phase(), SplashPhase::Visible);
        assert!(splash.begin_fade());
        assert!(splash.is_fading());
        assert!(splash.is_displayed());
        assert!(splash.finish());
        assert!(!splash.is_displayed());
    }

    #[test]
    fn test_load_and_fallback_fade_once() {
        let mut splash = LoadingSplash::new(false);
        assert!(splash.begin_fade());
        assert!(!splash.begin_fade());
        assert!(splash.finish());
        assert!(!splash.finish());
    }

    #[test]
    fn test_repeat_visit_script_checks_session_flag() {
        let script = repeat_visit_script();
        assert!(script.contains("sessionStorage.getItem('loadingCompleted')"));
        assert!(script.contains("getElementById('loadingOverlay').style.display='none'"));
        assert_eq!(script.matches('{').count(), script.matches('}').count());
        assert!(!script.contains('\n'));
    }

    #[test]
    fn test_finish_requires_fade() {
        let mut splash = LoadingSplash::new(false);
        assert!(!splash.finish());
        assert_eq!(splash.phase(), SplashPhase::Visible);
    }
}
