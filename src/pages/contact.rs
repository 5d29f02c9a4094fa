use leptos::prelude::*;
use std::time::Duration;

use crate::components::FadeIn;
use crate::models::{ContactForm, FormMessage, MESSAGE_DISMISS_MS, SUBMIT_DELAY_MS};

const SERVICES: [(&str, &str); 5] = [
    ("networking", "Networking & Wi-Fi"),
    ("security", "CCTV & Access Control"),
    ("solar", "Solar Installation"),
    ("backup", "Backup Power & Inverters"),
    ("other", "Something else"),
];

#[component]
pub fn ContactPage() -> impl IntoView {
    let form = RwSignal::new(ContactForm::default());
    let message = RwSignal::new(Option::<FormMessage>::None);
    let sending = RwSignal::new(false);
    // Bumped per message so an older dismiss timer leaves a newer message alone
    let message_generation = StoredValue::new(0u64);

    let show_message = move |msg: FormMessage| {
        let generation = message_generation
            .try_update_value(|g| {
                *g += 1;
                *g
            })
            .unwrap_or_default();
        message.set(Some(msg));
        set_timeout(
            move || {
                if message_generation.try_get_value() == Some(generation) {
                    message.set(None);
                }
            },
            Duration::from_millis(MESSAGE_DISMISS_MS),
        );
    };

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if sending.get_untracked() {
            return;
        }

        let data = form.get_untracked();
        if let Err(e) = data.validate() {
            show_message(FormMessage::error(&e));
            return;
        }

        // No backend yet: stand in for the round trip with a fixed delay
        sending.set(true);
        set_timeout(
            move || {
                show_message(FormMessage::success(data.success_message()));
                form.set(ContactForm::default());
                sending.set(false);
            },
            Duration::from_millis(SUBMIT_DELAY_MS),
        );
    };

    view! {
        <div class="contact-page">
            <section class="page-header">
                <h1>"Get in Touch"</h1>
                <p class="subtitle">"Tell us about your site and we'll put together a quote."</p>
            </section>

            <FadeIn class="contact-form-wrapper">
                <form id="contactForm" class="contact-form" novalidate=true on:submit=on_submit>
                    <div class="form-row">
                        <div class="form-group">
                            <label for="firstName">"First Name *"</label>
                            <input
                                type="text"
                                id="firstName"
                                name="firstName"
                                prop:value=move || form.with(|f| f.first_name.clone())
                                on:input=move |ev| form.update(|f| f.first_name = event_target_value(&ev))
                            />
                        </div>
                        <div class="form-group">
                            <label for="lastName">"Last Name *"</label>
                            <input
                                type="text"
                                id="lastName"
                                name="lastName"
                                prop:value=move || form.with(|f| f.last_name.clone())
                                on:input=move |ev| form.update(|f| f.last_name = event_target_value(&ev))
                            />
                        </div>
                    </div>

                    <div class="form-row">
                        <div class="form-group">
                            <label for="email">"Email *"</label>
                            <input
                                type="email"
                                id="email"
                                name="email"
                                prop:value=move || form.with(|f| f.email.clone())
                                on:input=move |ev| form.update(|f| f.email = event_target_value(&ev))
                            />
                        </div>
                        <div class="form-group">
                            <label for="phone">"Phone"</label>
                            <input
                                type="tel"
                                id="phone"
                                name="phone"
                                prop:value=move || form.with(|f| f.phone.clone())
                                on:input=move |ev| form.update(|f| f.phone = event_target_value(&ev))
                            />
                        </div>
                    </div>

                    <div class="form-group">
                        <label for="service">"Service"</label>
                        <select
                            id="service"
                            name="service"
                            prop:value=move || form.with(|f| f.service.clone())
                            on:change=move |ev| form.update(|f| f.service = event_target_value(&ev))
                        >
                            <option value="">"Select a service"</option>
                            {SERVICES
                                .into_iter()
                                .map(|(value, label)| view! { <option value=value>{label}</option> })
                                .collect_view()}
                        </select>
                    </div>

                    <div class="form-group">
                        <label for="message">"Message *"</label>
                        <textarea
                            id="message"
                            name="message"
                            rows="5"
                            prop:value=move || form.with(|f| f.message.clone())
                            on:input=move |ev| form.update(|f| f.message = event_target_value(&ev))
                        ></textarea>
                    </div>

                    <button type="submit" class="btn btn-primary submit-btn" disabled=move || sending.get()>
                        {move || if sending.get() { "Sending..." } else { "Send Message" }}
                    </button>

                    <div
                        id="formMessage"
                        class=move || {
                            message
                                .with(|m| m.as_ref().map(FormMessage::class))
                                .unwrap_or_else(|| "form-message".to_string())
                        }
                        style:display=move || if message.with(Option::is_some) { "block" } else { "none" }
                    >
                        {move || message.with(|m| m.as_ref().map(|m| m.text.clone()))}
                    </div>
                </form>
            </FadeIn>
        </div>
    }
}
