use leptos::prelude::*;

use crate::models::NewsFeed;

/// Latest active articles for both news columns
#[server]
pub async fn get_news() -> Result<NewsFeed, ServerFnError> {
    use crate::{services::news, state::AppState};
    use axum::Extension;
    use leptos_axum::extract;

    let Extension(state) = extract::<Extension<AppState>>()
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?;

    news::load_feed(&state.db, state.config.news_per_category, chrono::Utc::now())
        .await
        .map_err(|e| {
            tracing::error!("failed to load news feed: {e}");
            ServerFnError::new(e.to_string())
        })
}
