//! Viewport intersection, wrapped so that browsers without
//! `IntersectionObserver` simply get no animation.

use leptos::web_sys;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;

#[derive(Debug, Clone, Copy)]
pub struct ObserverOptions {
    /// Fraction of the target that must be visible
    pub threshold: f64,
    pub root_margin: Option<&'static str>,
    /// Stop observing after the first intersection
    pub once: bool,
}

impl ObserverOptions {
    pub fn threshold(threshold: f64) -> Self {
        Self {
            threshold,
            root_margin: None,
            once: false,
        }
    }
}

pub fn intersection_supported() -> bool {
    web_sys::window()
        .and_then(|w| js_sys::Reflect::has(&w, &JsValue::from_str("IntersectionObserver")).ok())
        .unwrap_or(false)
}

/// Call `on_change` with the intersecting flag each time `target` crosses the
/// threshold. Returns `None` when the primitive is missing.
///
/// The observer lives as long as the page, so the callback is leaked.
pub fn observe_visibility(
    target: &web_sys::Element,
    options: ObserverOptions,
    mut on_change: impl FnMut(bool) + 'static,
) -> Option<web_sys::IntersectionObserver> {
    if !intersection_supported() {
        return None;
    }

    let once = options.once;
    let callback = Closure::<dyn FnMut(js_sys::Array, web_sys::IntersectionObserver)>::new(
        move |entries: js_sys::Array, observer: web_sys::IntersectionObserver| {
            for entry in entries.iter() {
                let Ok(entry) = entry.dyn_into::<web_sys::IntersectionObserverEntry>() else {
                    continue;
                };
                let visible = entry.is_intersecting();
                on_change(visible);
                if once && visible {
                    observer.unobserve(&entry.target());
                }
            }
        },
    );

    let init = web_sys::IntersectionObserverInit::new();
    init.set_threshold(&JsValue::from_f64(options.threshold));
    if let Some(margin) = options.root_margin {
        init.set_root_margin(margin);
    }

    let observer = match web_sys::IntersectionObserver::new_with_options(
        callback.as_ref().unchecked_ref(),
        &init,
    ) {
        Ok(observer) => observer,
        Err(e) => {
            leptos::logging::warn!("IntersectionObserver unavailable: {e:?}");
            return None;
        }
    };
    observer.observe(target);
    callback.forget();
    Some(observer)
}
