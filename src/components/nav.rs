use leptos::prelude::*;
use leptos_router::components::A;

#[component]
pub fn Nav() -> impl IntoView {
    let hidden = RwSignal::new(false);

    // Both bars slide away while scrolling down and come back on any upward scroll
    #[cfg(feature = "hydrate")]
    {
        use crate::behaviors::NavbarAutoHide;

        let auto_hide = StoredValue::new(NavbarAutoHide::default());
        let handle = window_event_listener(leptos::ev::scroll, move |_| {
            let scroll_top = crate::dom::scroll_y();
            let now_hidden = auto_hide
                .try_update_value(|state| state.on_scroll(scroll_top))
                .unwrap_or(false);
            if hidden.get_untracked() != now_hidden {
                hidden.set(now_hidden);
            }
        });
        on_cleanup(move || handle.remove());
    }

    view! {
        <div id="contactBar" class="contact-bar" class:hidden=move || hidden.get()>
            <a href="tel:+27110000000">"+27 11 000 0000"</a>
            <a href="mailto:info@kestrel.co.za">"info@kestrel.co.za"</a>
        </div>
        <nav id="navbar" class="navbar" class:hidden=move || hidden.get()>
            <div class="nav-brand">
                <A href="/">"Kestrel Technologies"</A>
            </div>

            <div class="nav-links">
                <A href="/">"Home"</A>
                <A href="/gallery">"Gallery"</A>
                <A href="/news">"News"</A>
                <A href="/team">"Team"</A>
                <A href="/contact" attr:class="btn btn-small">"Contact Us"</A>
            </div>
        </nav>
    }
}
