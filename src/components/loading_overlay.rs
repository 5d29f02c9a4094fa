use leptos::prelude::*;

use crate::behaviors::splash::{repeat_visit_script, OVERLAY_ID};
use crate::behaviors::LoadingSplash;

/// Splash shown on the first page of a session until the window has loaded.
/// The server always renders it; the inline script hides it again before
/// hydration when the session has already seen it.
#[component]
pub fn LoadingOverlay() -> impl IntoView {
    let splash = RwSignal::new(LoadingSplash::new(false));

    #[cfg(feature = "hydrate")]
    {
        Effect::new(move |_| {
            use crate::behaviors::splash::{
                FADE_OUT_MS, LOADING_COMPLETED_KEY, LOAD_FALLBACK_MS, LOAD_SETTLE_MS,
            };
            use crate::storage::{BrowserStorage, KeyValueStore};
            use std::time::Duration;

            let completed = BrowserStorage::session()
                .get(LOADING_COMPLETED_KEY)
                .is_some_and(|v| !v.is_empty());
            if completed {
                splash.set(LoadingSplash::new(true));
                return;
            }

            let hide = move || {
                if !splash.try_update(|s| s.begin_fade()).unwrap_or(false) {
                    return;
                }
                set_timeout(
                    move || {
                        if splash.try_update(|s| s.finish()).unwrap_or(false) {
                            let session = BrowserStorage::session();
                            if let Err(e) = session.set(LOADING_COMPLETED_KEY, "true") {
                                leptos::logging::warn!("could not remember splash: {e}");
                            }
                        }
                    },
                    Duration::from_millis(FADE_OUT_MS),
                );
            };

            let settle = Duration::from_millis(LOAD_SETTLE_MS);
            if crate::dom::page_loaded() {
                set_timeout(hide, settle);
            } else {
                let handle =
                    window_event_listener(leptos::ev::load, move |_| set_timeout(hide, settle));
                on_cleanup(move || handle.remove());
            }

            // never keep the splash up longer than the fallback
            set_timeout(hide, Duration::from_millis(LOAD_FALLBACK_MS));
        });
    }

    view! {
        <div
            id=OVERLAY_ID
            class="loading-overlay"
            class=("fade-out", move || splash.get().is_fading())
            style:display=move || if splash.get().is_displayed() { "flex" } else { "none" }
        >
            <div class="loading-content">
                <div class="loading-logo">"Kestrel"</div>
                <div class="loading-spinner"></div>
                <p class="loading-text">"Powering up..."</p>
            </div>
        </div>
        <script inner_html=repeat_visit_script()></script>
    }
}
