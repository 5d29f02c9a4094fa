use leptos::prelude::*;

use crate::models::{ConsentStore, CookiePreferences};
use crate::storage::{BrowserStorage, StorageError};

fn consent_store() -> ConsentStore<BrowserStorage> {
    ConsentStore::new(BrowserStorage::local())
}

fn report(result: Result<(), StorageError>, outcome: &str) {
    match result {
        Ok(()) => leptos::logging::log!("{outcome}"),
        Err(e) => leptos::logging::warn!("{outcome}, but not saved: {e}"),
    }
}

/// Floating cookie button with the consent popup and inline preferences
#[component]
pub fn CookieConsent() -> impl IntoView {
    let button_visible = RwSignal::new(true);
    let popup_open = RwSignal::new(false);
    let show_preferences = RwSignal::new(false);
    let statistics = RwSignal::new(false);
    let marketing = RwSignal::new(false);

    Effect::new(move |_| {
        button_visible.set(consent_store().button_visible());
    });

    let close_popup = move || popup_open.set(false);
    let decided = move || {
        close_popup();
        button_visible.set(false);
    };

    let on_accept = move |_| {
        report(consent_store().accept(), "Cookies accepted");
        decided();
    };
    let on_deny = move |_| {
        report(consent_store().deny(), "Cookies denied");
        decided();
    };
    let on_preferences = move |_| {
        if show_preferences.get_untracked() {
            return;
        }
        let CookiePreferences {
            statistics: stored_statistics,
            marketing: stored_marketing,
            ..
        } = consent_store().preferences();
        statistics.set(stored_statistics);
        marketing.set(stored_marketing);
        show_preferences.set(true);
    };
    let on_save = move |_| {
        match consent_store().save_preferences(statistics.get_untracked(), marketing.get_untracked())
        {
            Ok(saved) => leptos::logging::log!("Cookie preferences saved: {saved:?}"),
            Err(e) => leptos::logging::warn!("cookie preferences not saved: {e}"),
        }
        show_preferences.set(false);
        decided();
    };

    view! {
        <button
            id="cookiesButton"
            class="cookies-button"
            aria-label="Cookie settings"
            style:display=move || if button_visible.get() { "flex" } else { "none" }
            on:click=move |_| popup_open.set(true)
        >
            "🍪"
        </button>

        <div
            id="cookiesOverlay"
            class="cookies-overlay"
            class:active=move || popup_open.get()
            on:click=move |_| close_popup()
        ></div>

        <div id="cookiesPopup" class="cookies-popup" class:active=move || popup_open.get()>
            <button id="closeCookies" class="cookies-close" aria-label="Close" on:click=move |_| close_popup()>
                "×"
            </button>
            <h3>"We value your privacy"</h3>
            <p>
                "We use cookies to keep the site working and, with your permission, "
                "to understand how it is used."
            </p>

            <div
                id="mainCookieButtons"
                class="cookie-buttons"
                style:display=move || if show_preferences.get() { "none" } else { "block" }
            >
                <button id="acceptCookies" class="btn btn-primary" on:click=on_accept>
                    "Accept All"
                </button>
                <button id="denyCookies" class="btn btn-secondary" on:click=on_deny>
                    "Deny"
                </button>
                <button id="preferencesCookies" class="btn btn-link" on:click=on_preferences>
                    "Preferences"
                </button>
            </div>

            <div
                id="cookiePreferencesSection"
                class="cookie-preferences"
                style:display=move || if show_preferences.get() { "block" } else { "none" }
            >
                <CookieCategory
                    name="functional"
                    title="Functional"
                    description="Required for the site to work. These cannot be switched off."
                >
                    <input type="checkbox" checked=true disabled=true/>
                </CookieCategory>
                <CookieCategory
                    name="statistics"
                    title="Statistics"
                    description="Help us understand which pages are visited so we can improve them."
                >
                    <input
                        type="checkbox"
                        id="statisticsCookies"
                        prop:checked=move || statistics.get()
                        on:change=move |ev| statistics.set(event_target_checked(&ev))
                    />
                </CookieCategory>
                <CookieCategory
                    name="marketing"
                    title="Marketing"
                    description="Used to show relevant offers on other websites."
                >
                    <input
                        type="checkbox"
                        id="marketingCookies"
                        prop:checked=move || marketing.get()
                        on:change=move |ev| marketing.set(event_target_checked(&ev))
                    />
                </CookieCategory>

                <div class="cookie-buttons">
                    <button class="btn btn-secondary" on:click=move |_| show_preferences.set(false)>
                        "Back"
                    </button>
                    <button class="btn btn-primary" on:click=on_save>
                        "Save Preferences"
                    </button>
                </div>
            </div>
        </div>
    }
}

/// One expandable row in the preferences list. The description element is
/// `<name>-description`.
#[component]
fn CookieCategory(
    name: &'static str,
    title: &'static str,
    description: &'static str,
    children: Children,
) -> impl IntoView {
    let expanded = RwSignal::new(false);

    view! {
        <div class="cookie-category">
            <div class="cookie-category-header">
                <button
                    class="cookie-expand"
                    aria-expanded=move || expanded.get().to_string()
                    on:click=move |_| expanded.update(|open| *open = !*open)
                >
                    <span>{title}</span>
                    <svg
                        width="12"
                        height="12"
                        viewBox="0 0 12 12"
                        style:transform=move || {
                            if expanded.get() { "rotate(180deg)" } else { "rotate(0deg)" }
                        }
                    >
                        <path d="M2 4l4 4 4-4" fill="none" stroke="currentColor"/>
                    </svg>
                </button>
                {children()}
            </div>
            <p
                id=format!("{name}-description")
                class="cookie-category-description"
                style:display=move || if expanded.get() { "block" } else { "none" }
            >
                {description}
            </p>
        </div>
    }
}
