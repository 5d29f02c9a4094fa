use leptos::prelude::*;
use leptos_router::components::A;

use crate::components::{
    AnchorLink, CircuitDivider, FadeIn, HeroSlideshow, Slide, StatBlock, StatsSection,
};

fn hero_slides() -> Vec<Slide> {
    vec![
        Slide {
            image: "/media/hero/solar-farm.jpg",
            title: "Solar & Backup Power",
            subtitle: "Keep the lights on through load shedding",
        },
        Slide {
            image: "/media/hero/network-cabinet.jpg",
            title: "Business Networking",
            subtitle: "Fibre, Wi-Fi and structured cabling that just works",
        },
        Slide {
            image: "/media/hero/cctv.jpg",
            title: "Security Systems",
            subtitle: "CCTV and access control you can check from anywhere",
        },
    ]
}

fn stats() -> Vec<StatBlock> {
    vec![
        StatBlock {
            target: "20",
            label: "Years of experience",
        },
        StatBlock {
            target: "500",
            label: "Projects completed",
        },
        StatBlock {
            target: "24",
            label: "Support",
        },
        StatBlock {
            target: "100",
            label: "Client satisfaction",
        },
    ]
}

const SERVICES: [(&str, &str); 4] = [
    (
        "ICT Infrastructure",
        "Network design, structured cabling, Wi-Fi and fibre links for offices and campuses.",
    ),
    (
        "Solar Installations",
        "Grid-tied and hybrid systems sized to your consumption, from homes to warehouses.",
    ),
    (
        "Backup Power",
        "Inverters and lithium battery banks that switch over before you notice.",
    ),
    (
        "Security",
        "IP cameras, remote monitoring and access control integrated with your network.",
    ),
];

#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <div class="home-page">
            <HeroSlideshow slides=hero_slides()>
                <h1>"Powering and Connecting South Africa"</h1>
                <p class="subtitle">"ICT, solar and power solutions from one trusted team"</p>
                <div class="cta-buttons">
                    <AnchorLink target="services" class="btn btn-primary">"Our Services"</AnchorLink>
                    <A href="/contact" attr:class="btn btn-secondary">"Get a Quote"</A>
                </div>
            </HeroSlideshow>

            <section id="services" class="services">
                <FadeIn class="section-title">
                    <h2>"What We Do"</h2>
                </FadeIn>
                <div class="services-grid">
                    {SERVICES
                        .into_iter()
                        .map(|(title, description)| {
                            view! {
                                <FadeIn class="service-card">
                                    <h3>{title}</h3>
                                    <p>{description}</p>
                                </FadeIn>
                            }
                        })
                        .collect_view()}
                </div>
            </section>

            <CircuitDivider/>

            <section class="stats">
                <StatsSection blocks=stats()/>
            </section>

            <CircuitDivider dots=2 first_dot=3/>

            <FadeIn class="cta-banner">
                <h2>"Ready to go off-grid?"</h2>
                <p>"Book a free site assessment and we'll design a system around your needs."</p>
                <A href="/contact" attr:class="btn btn-primary">"Contact Us"</A>
            </FadeIn>
        </div>
    }
}
