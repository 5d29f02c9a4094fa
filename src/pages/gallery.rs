use leptos::html;
use leptos::prelude::*;

use crate::behaviors::{CategoryFilter, CloseEffect, MediaKind, MediaModal, MediaSelection};
use crate::components::FadeIn;

struct GalleryEntry {
    kind: MediaKind,
    src: &'static str,
    thumb: &'static str,
    title: &'static str,
    description: &'static str,
    category: &'static str,
}

impl GalleryEntry {
    fn selection(&self) -> MediaSelection {
        MediaSelection {
            kind: self.kind,
            src: self.src.to_string(),
            title: self.title.to_string(),
            description: self.description.to_string(),
        }
    }
}

const FILTERS: [(&str, &str); 4] = [
    ("all", "All Projects"),
    ("solar", "Solar"),
    ("networking", "Networking"),
    ("security", "Security"),
];

static ENTRIES: [GalleryEntry; 6] = [
    GalleryEntry {
        kind: MediaKind::Image,
        src: "/media/gallery/rooftop-array.jpg",
        thumb: "/media/gallery/thumbs/rooftop-array.jpg",
        title: "Rooftop Array",
        description: "A 12 kW grid-tied system on a warehouse roof in Midrand.",
        category: "solar",
    },
    GalleryEntry {
        kind: MediaKind::Video,
        src: "/media/gallery/inverter-install.mp4",
        thumb: "/media/gallery/thumbs/inverter-install.jpg",
        title: "Inverter Installation",
        description: "Hybrid inverter and lithium battery bank going in.",
        category: "solar",
    },
    GalleryEntry {
        kind: MediaKind::Image,
        src: "/media/gallery/server-rack.jpg",
        thumb: "/media/gallery/thumbs/server-rack.jpg",
        title: "Server Rack",
        description: "Structured cabling and patching for a 60-seat office.",
        category: "networking",
    },
    GalleryEntry {
        kind: MediaKind::Image,
        src: "/media/gallery/wifi-survey.jpg",
        thumb: "/media/gallery/thumbs/wifi-survey.jpg",
        title: "Wi-Fi Survey",
        description: "Heat-mapping a school campus before the access point rollout.",
        category: "networking",
    },
    GalleryEntry {
        kind: MediaKind::Image,
        src: "/media/gallery/cctv-mast.jpg",
        thumb: "/media/gallery/thumbs/cctv-mast.jpg",
        title: "CCTV Mast",
        description: "Solar-powered camera mast covering an estate entrance.",
        category: "security",
    },
    GalleryEntry {
        kind: MediaKind::Video,
        src: "/media/gallery/access-control.mp4",
        thumb: "/media/gallery/thumbs/access-control.jpg",
        title: "Access Control",
        description: "Biometric readers and turnstiles at a logistics depot.",
        category: "security",
    },
];

#[component]
pub fn GalleryPage() -> impl IntoView {
    let filter = RwSignal::new(CategoryFilter::default());
    let modal = RwSignal::new(MediaModal::default());
    let video_ref = NodeRef::<html::Video>::new();

    let after_close = move |effect: Option<CloseEffect>| {
        if let Some(CloseEffect { stop_video: true }) = effect {
            #[cfg(feature = "hydrate")]
            {
                if let Some(video) = video_ref.get_untracked() {
                    crate::dom::stop_video(&video);
                }
            }
        }
    };
    let close = move || after_close(modal.try_update(MediaModal::close).flatten());
    let open = move |selection: MediaSelection| modal.update(|m| m.open(selection));

    #[cfg(feature = "hydrate")]
    {
        // Lock page scrolling while the modal is up
        Effect::new(move |was_open: Option<bool>| {
            let (open, overflow) = modal.with(|m| (m.is_open(), m.body_overflow()));
            if was_open.is_some() || open {
                crate::dom::set_body_overflow(overflow);
            }
            open
        });

        let handle = window_event_listener(leptos::ev::keydown, move |ev| {
            if !modal.with_untracked(MediaModal::is_open) {
                return;
            }
            after_close(modal.try_update(|m| m.on_key(&ev.key())).flatten());
        });
        on_cleanup(move || {
            handle.remove();
            crate::dom::set_body_overflow("auto");
        });
    }

    let selected = move |f: fn(&MediaSelection) -> String| {
        modal.with(|m| m.selection().map(f).unwrap_or_default())
    };
    let showing = move |kind: MediaKind| modal.with(|m| m.selection().is_some_and(|s| s.kind == kind));
    let display = |visible: bool| if visible { "block" } else { "none" };

    view! {
        <div class="gallery-page">
            <section class="page-header">
                <h1>"Our Work"</h1>
                <p class="subtitle">"A selection of recent installations"</p>
            </section>

            <div class="gallery-filters">
                {FILTERS
                    .into_iter()
                    .map(|(value, label)| {
                        view! {
                            <button
                                class="filter-btn"
                                class:active=move || filter.with(|f| f.as_str() == value)
                                data-filter=value
                                on:click=move |_| filter.set(CategoryFilter::parse(value))
                            >
                                {label}
                            </button>
                        }
                    })
                    .collect_view()}
            </div>

            <FadeIn class="gallery-grid">
                {ENTRIES
                    .iter()
                    .map(|entry| {
                        let category = entry.category;
                        let shown = move || filter.with(|f| f.matches(Some(category)));
                        let for_item = entry.selection();
                        let for_button = entry.selection();
                        view! {
                            <div
                                class="gallery-item"
                                data-category=category
                                style:display=move || display(shown())
                                style:animation=move || if shown() { "fadeIn 0.5s ease-in-out" } else { "" }
                                on:click=move |_| open(for_item.clone())
                            >
                                <img src=entry.thumb alt=entry.title loading="lazy"/>
                                <div class="gallery-overlay">
                                    <h3>{entry.title}</h3>
                                    <p>{entry.description}</p>
                                    <button
                                        class="view-btn"
                                        data-src=entry.src
                                        data-type=entry.kind.as_str()
                                        on:click=move |ev| {
                                            ev.stop_propagation();
                                            open(for_button.clone());
                                        }
                                    >
                                        {match entry.kind {
                                            MediaKind::Image => "View Image",
                                            MediaKind::Video => "Play Video",
                                        }}
                                    </button>
                                </div>
                            </div>
                        }
                    })
                    .collect_view()}
            </FadeIn>

            <div
                id="mediaModal"
                class="media-modal"
                style:display=move || display(modal.with(MediaModal::is_open))
                on:click=move |_| after_close(modal.try_update(|m| m.on_backdrop_click(true)).flatten())
            >
                <div class="modal-content" on:click=|ev| ev.stop_propagation()>
                    <button class="modal-close" aria-label="Close" on:click=move |_| close()>
                        "×"
                    </button>
                    <img
                        id="modalImage"
                        src=move || selected(|s| if s.kind == MediaKind::Image { s.src.clone() } else { String::new() })
                        alt=move || selected(|s| s.title.clone())
                        style:display=move || display(showing(MediaKind::Image))
                    />
                    <video
                        id="modalVideo"
                        node_ref=video_ref
                        controls=true
                        src=move || selected(|s| if s.kind == MediaKind::Video { s.src.clone() } else { String::new() })
                        style:display=move || display(showing(MediaKind::Video))
                    ></video>
                    <h3 id="modalTitle">{move || selected(|s| s.title.clone())}</h3>
                    <p id="modalDescription">{move || selected(|s| s.description.clone())}</p>
                </div>
            </div>
        </div>
    }
}
