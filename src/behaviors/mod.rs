//! Browser-independent state behind the page behaviours.
//!
//! Each type here is a small state machine fed by events (ticks, scroll
//! samples, intersection changes, clicks) and consulted by the components.
//! None of them touch the DOM, so they run under plain `cargo test`.

pub mod counter;
pub mod filter;
pub mod modal;
pub mod scroll;
pub mod slideshow;
pub mod splash;
pub mod stats;

pub use counter::{final_label, parse_target, CounterAnimation, CounterFrame};
pub use filter::CategoryFilter;
pub use modal::{CloseEffect, MediaKind, MediaModal, MediaSelection};
pub use scroll::{DotStyle, FrameGate, NavbarAutoHide, ScrollMetrics, ScrollTracker};
pub use slideshow::Slideshow;
pub use splash::{LoadingSplash, SplashPhase};
pub use stats::{BounceStats, CounterReplay, StatsAction, StatsPhase};
