use leptos::prelude::*;

use crate::behaviors::DotStyle;

/// Decorative circuit trace between sections. Its dots slide along the trace
/// as the page scrolls and glow brighter the faster it scrolls.
///
/// `first_dot` is the page-wide number of this divider's first dot; a second
/// divider on the same page starts where the previous one ended.
#[component]
pub fn CircuitDivider(
    #[prop(default = 3)] dots: usize,
    #[prop(optional)] first_dot: usize,
) -> impl IntoView {
    let styles = RwSignal::new(Vec::<DotStyle>::new());

    #[cfg(feature = "hydrate")]
    {
        use crate::behaviors::{FrameGate, ScrollTracker};

        let tracker = StoredValue::new(ScrollTracker::new());
        let gate = StoredValue::new(FrameGate::default());

        let update = move || {
            if let Some(metrics) = crate::dom::scroll_metrics() {
                let numbers = first_dot..first_dot + dots;
                if let Some(next) = tracker.try_update_value(|t| t.sample(metrics, numbers)) {
                    styles.set(next);
                }
            }
            gate.update_value(FrameGate::complete);
        };

        Effect::new(move |_| update());

        let handle = window_event_listener(leptos::ev::scroll, move |_| {
            if gate.try_update_value(FrameGate::request).unwrap_or(false) {
                request_animation_frame(update);
            }
        });
        on_cleanup(move || handle.remove());
    }
    #[cfg(not(feature = "hydrate"))]
    let _ = first_dot;

    let style_of = move |index: usize, f: fn(&DotStyle) -> String| {
        styles.with(|s| s.get(index).map(f).unwrap_or_default())
    };

    view! {
        <div class="circuit-divider" aria-hidden="true">
            <div class="circuit-line"></div>
            {(0..dots)
                .map(|index| {
                    view! {
                        <span
                            class="circuit-moving-dot"
                            style:left=move || style_of(index, DotStyle::left)
                            style:box-shadow=move || style_of(index, |d| d.box_shadow.clone())
                        ></span>
                    }
                })
                .collect_view()}
        </div>
    }
}
