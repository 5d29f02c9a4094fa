use leptos::prelude::*;

use crate::behaviors::CategoryFilter;
use crate::components::FadeIn;
use crate::models::{NewsCategory, NewsItem};
use crate::server_fns::get_news;

const FILTERS: [(&str, &str); 3] = [
    ("all", "All News"),
    ("ict", "ICT"),
    ("solar", "Solar & Power"),
];

#[component]
pub fn NewsPage() -> impl IntoView {
    let feed = Resource::new(|| (), |_| get_news());
    let filter = RwSignal::new(CategoryFilter::default());

    Effect::new(move |_| {
        leptos::logging::log!("News feeds initialized. Ready for API integration.");
    });

    view! {
        <div class="news-page">
            <section class="page-header">
                <h1>"Industry News"</h1>
                <p class="subtitle">"The latest from the ICT and solar sectors in South Africa"</p>
            </section>

            <div class="news-filters">
                {FILTERS
                    .into_iter()
                    .map(|(value, label)| {
                        view! {
                            <button
                                class="news-filter-btn"
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

            <Suspense fallback=move || view! { <p class="hint">"Loading news..."</p> }>
                {move || {
                    feed.get()
                        .map(|result| match result {
                            Ok(feed) if feed.is_empty() => {
                                view! { <p class="hint">"No articles yet. Check back soon."</p> }.into_any()
                            }
                            Ok(feed) => {
                                view! {
                                    <FadeIn class="news-grid">
                                        {feed
                                            .items()
                                            .cloned()
                                            .map(|item| view! { <NewsCard item=item filter=filter/> })
                                            .collect_view()}
                                    </FadeIn>
                                }
                                    .into_any()
                            }
                            Err(e) => view! { <p class="error">{e.to_string()}</p> }.into_any(),
                        })
                }}
            </Suspense>
        </div>
    }
}

#[component]
fn NewsCard(item: NewsItem, filter: RwSignal<CategoryFilter>) -> impl IntoView {
    let category = item.category.as_str();
    let shown = move || filter.with(|f| f.matches(Some(category)));
    let badge = match item.category {
        NewsCategory::Solar => "badge badge-solar",
        NewsCategory::Ict | NewsCategory::General => "badge badge-ict",
    };

    view! {
        <article
            class="news-item"
            data-category=category
            style:display=move || if shown() { "block" } else { "none" }
            style:animation=move || if shown() { "fadeIn 0.5s ease-in-out" } else { "" }
        >
            <span class=badge>{item.category.label()}</span>
            <h3>
                <a href=item.url target="_blank" rel="noopener noreferrer">{item.title}</a>
            </h3>
            <p>{item.summary}</p>
            <div class="news-meta">
                <span class="news-source">{item.source}</span>
                <span class="news-time">{item.time_ago}</span>
            </div>
        </article>
    }
}
