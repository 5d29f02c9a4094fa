use leptos::prelude::*;
use leptos_meta::*;
use leptos_router::{
    components::{Route, Router, Routes},
    path,
};

use crate::components::{CookieConsent, Footer, LoadingOverlay, Nav};
use crate::pages::*;

// Keyframes for items revealed by the gallery and news filters
const FILTER_KEYFRAMES: &str = "@keyframes fadeIn {
    from { opacity: 0; transform: translateY(20px); }
    to { opacity: 1; transform: translateY(0); }
}";

#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    view! {
        <Stylesheet id="leptos" href="/pkg/marketing_site.css"/>
        <Style>{FILTER_KEYFRAMES}</Style>
        <Title text="Kestrel Technologies - ICT, Solar & Power Solutions"/>
        <Meta name="description" content="Networking, security and solar power installations for homes and businesses"/>

        <Router>
            <LoadingOverlay/>
            <Nav/>
            <main>
                <Routes fallback=|| view! { <h1>"404 - Page Not Found"</h1> }>
                    <Route path=path!("/") view=HomePage/>
                    <Route path=path!("/contact") view=ContactPage/>
                    <Route path=path!("/gallery") view=GalleryPage/>
                    <Route path=path!("/news") view=NewsPage/>
                    <Route path=path!("/team") view=TeamPage/>
                </Routes>
            </main>
            <Footer/>
            <CookieConsent/>
        </Router>
    }
}
