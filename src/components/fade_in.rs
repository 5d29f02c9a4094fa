use leptos::html;
use leptos::prelude::*;

/// Wraps children in a `.fade-in` block that gains `visible` the first time it
/// scrolls into view. Without intersection support the block stays as rendered.
#[component]
pub fn FadeIn(
    #[prop(optional, into)] class: String,
    #[prop(optional)] id: Option<&'static str>,
    children: Children,
) -> impl IntoView {
    let node = NodeRef::<html::Div>::new();
    let visible = RwSignal::new(false);

    #[cfg(feature = "hydrate")]
    {
        use crate::dom::{observe_visibility, ObserverOptions};

        Effect::new(move |_| {
            let Some(el) = node.get() else {
                return;
            };
            let options = ObserverOptions {
                root_margin: Some("0px 0px -50px 0px"),
                once: true,
                ..ObserverOptions::threshold(0.1)
            };
            observe_visibility(&el, options, move |is_visible| {
                if is_visible {
                    visible.set(true);
                }
            });
        });
    }

    view! {
        <div node_ref=node id=id class=format!("fade-in {class}") class:visible=move || visible.get()>
            {children()}
        </div>
    }
}
