use leptos::prelude::*;
use std::time::Duration;

use crate::behaviors::slideshow::SLIDE_INTERVAL_MS;
use crate::behaviors::Slideshow;
use crate::timer::RepeatingTimer;

#[derive(Debug, Clone, Copy)]
pub struct Slide {
    pub image: &'static str,
    pub title: &'static str,
    pub subtitle: &'static str,
}

/// Auto-advancing hero. Hovering pauses it; a dot jumps to its slide and
/// restarts the countdown.
#[component]
pub fn HeroSlideshow(slides: Vec<Slide>, children: Children) -> impl IntoView {
    let state = RwSignal::new(Slideshow::new(slides.len()));
    let timer = RepeatingTimer::new();

    let arm = move || {
        timer.start(Duration::from_millis(SLIDE_INTERVAL_MS), move || {
            state.update(|s| {
                s.tick();
            });
        });
    };
    let start = move || {
        if state.try_update(Slideshow::start).unwrap_or(false) {
            arm();
        }
    };
    let stop = move || {
        state.update(Slideshow::stop);
        timer.stop();
    };
    let select = move |index: usize| {
        if state.try_update(|s| s.select(index)).unwrap_or(false) {
            arm();
        }
    };

    // timers only exist in the browser; effects never run on the server
    Effect::new(move |_| start());
    on_cleanup(move || timer.stop());

    let count = slides.len();

    view! {
        <section class="hero" on:mouseenter=move |_| stop() on:mouseleave=move |_| start()>
            {slides
                .into_iter()
                .enumerate()
                .map(|(index, slide)| {
                    view! {
                        <div
                            class="slide"
                            class:active=move || state.with(|s| s.current() == index)
                            style:background-image=format!("url('{}')", slide.image)
                        >
                            <div class="slide-caption">
                                <h2>{slide.title}</h2>
                                <p>{slide.subtitle}</p>
                            </div>
                        </div>
                    }
                })
                .collect_view()}

            <div class="hero-content">{children()}</div>

            <div class="slide-nav">
                {(0..count)
                    .map(|index| {
                        view! {
                            <button
                                class="nav-dot"
                                class:active=move || state.with(|s| s.current() == index)
                                aria-label=format!("Show slide {}", index + 1)
                                on:click=move |_| select(index)
                            ></button>
                        }
                    })
                    .collect_view()}
            </div>
        </section>
    }
}
