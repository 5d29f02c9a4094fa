mod anchor_link;
mod circuit_divider;
mod cookie_consent;
mod fade_in;
mod footer;
mod loading_overlay;
mod nav;
mod slideshow;
mod stats;

pub use anchor_link::AnchorLink;
pub use circuit_divider::CircuitDivider;
pub use cookie_consent::CookieConsent;
pub use fade_in::FadeIn;
pub use footer::Footer;
pub use loading_overlay::LoadingOverlay;
pub use nav::Nav;
pub use slideshow::{HeroSlideshow, Slide};
pub use stats::{StatBlock, StatsSection};
