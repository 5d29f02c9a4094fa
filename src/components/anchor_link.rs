use leptos::prelude::*;

/// In-page link to `#target` that scrolls smoothly instead of jumping
#[component]
pub fn AnchorLink(
    target: &'static str,
    #[prop(optional, into)] class: String,
    children: Children,
) -> impl IntoView {
    let on_click = move |ev: leptos::ev::MouseEvent| {
        ev.prevent_default();
        #[cfg(feature = "hydrate")]
        crate::dom::scroll_to_anchor(target);
    };

    view! {
        <a href=format!("#{target}") class=class on:click=on_click>
            {children()}
        </a>
    }
}
