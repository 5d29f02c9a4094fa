use leptos::prelude::*;
use leptos_router::components::A;

#[component]
pub fn Footer() -> impl IntoView {
    view! {
        <footer class="site-footer">
            <div class="footer-grid">
                <div class="footer-brand">
                    <h4>"Kestrel Technologies"</h4>
                    <p>"Networks, security and solar power for homes and businesses."</p>
                </div>
                <div class="footer-links">
                    <h4>"Explore"</h4>
                    <A href="/gallery">"Our Work"</A>
                    <A href="/news">"Industry News"</A>
                    <A href="/team">"Meet the Team"</A>
                    <A href="/contact">"Get a Quote"</A>
                </div>
                <div class="footer-contact">
                    <h4>"Contact"</h4>
                    <a href="tel:+27110000000">"+27 11 000 0000"</a>
                    <a href="mailto:info@kestrel.co.za">"info@kestrel.co.za"</a>
                </div>
            </div>
            <p class="footer-copy">"© Kestrel Technologies. All rights reserved."</p>
        </footer>
    }
}
