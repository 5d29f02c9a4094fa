use leptos::prelude::*;

use crate::components::{CircuitDivider, FadeIn};

struct Member {
    name: &'static str,
    role: &'static str,
    photo: &'static str,
    bio: &'static str,
}

const TEAM: [Member; 4] = [
    Member {
        name: "Thabo Nkosi",
        role: "Founder & Technical Director",
        photo: "/media/team/thabo.jpg",
        bio: "Two decades of network engineering across mining, retail and government.",
    },
    Member {
        name: "Anneke Botha",
        role: "Solar Design Lead",
        photo: "/media/team/anneke.jpg",
        bio: "PV GreenCard certified; sizes every system from a year of usage data.",
    },
    Member {
        name: "Sipho Dlamini",
        role: "Field Operations",
        photo: "/media/team/sipho.jpg",
        bio: "Runs the installation crews and keeps projects on schedule.",
    },
    Member {
        name: "Priya Naidoo",
        role: "Client Support",
        photo: "/media/team/priya.jpg",
        bio: "First point of contact for quotes, callouts and maintenance plans.",
    },
];

#[component]
pub fn TeamPage() -> impl IntoView {
    view! {
        <div class="team-page">
            <section class="page-header">
                <h1>"Meet the Team"</h1>
                <p class="subtitle">"The people behind every installation"</p>
            </section>

            <CircuitDivider/>

            <div class="team-grid">
                {TEAM
                    .into_iter()
                    .map(|member| {
                        view! {
                            <FadeIn class="team-card">
                                <img src=member.photo alt=member.name loading="lazy"/>
                                <h3>{member.name}</h3>
                                <p class="team-role">{member.role}</p>
                                <p>{member.bio}</p>
                            </FadeIn>
                        }
                    })
                    .collect_view()}
            </div>
        </div>
    }
}
