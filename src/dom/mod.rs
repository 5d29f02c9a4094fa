//! Thin wrappers over browser APIs used by the components. Hydrate only.

mod observer;

pub use observer::{intersection_supported, observe_visibility, ObserverOptions};

use leptos::web_sys;

use crate::behaviors::ScrollMetrics;

fn document() -> Option<web_sys::Document> {
    web_sys::window()?.document()
}

/// Current scroll offset and page/viewport heights
pub fn scroll_metrics() -> Option<ScrollMetrics> {
    let window = web_sys::window()?;
    let root = window.document()?.document_element()?;
    Some(ScrollMetrics {
        scroll_y: window.scroll_y().unwrap_or(0.0),
        document_height: f64::from(root.scroll_height()),
        viewport_height: window.inner_height().ok()?.as_f64()?,
    })
}

pub fn scroll_y() -> f64 {
    web_sys::window()
        .and_then(|w| w.scroll_y().ok())
        .unwrap_or(0.0)
}

/// Whether the window `load` event has already fired
pub fn page_loaded() -> bool {
    document()
        .and_then(|d| js_sys::Reflect::get(&d, &"readyState".into()).ok())
        .and_then(|state| state.as_string())
        .is_some_and(|state| state == "complete")
}

/// Smoothly scroll the element with `id` to the top of the viewport.
/// Unknown ids are ignored.
pub fn scroll_to_anchor(id: &str) {
    let Some(target) = document().and_then(|d| d.get_element_by_id(id)) else {
        return;
    };
    let options = web_sys::ScrollIntoViewOptions::new();
    options.set_behavior(web_sys::ScrollBehavior::Smooth);
    options.set_block(web_sys::ScrollLogicalPosition::Start);
    target.scroll_into_view_with_scroll_into_view_options(&options);
}

/// Set `overflow` on `<body>`
pub fn set_body_overflow(value: &str) {
    if let Some(body) = document().and_then(|d| d.body()) {
        let _ = body.style().set_property("overflow", value);
    }
}

/// Pause a video and rewind it to the start
pub fn stop_video(video: &web_sys::HtmlVideoElement) {
    let _ = video.pause();
    video.set_current_time(0.0);
}
