use chrono::{DateTime, Duration, Utc};
use serde::Deserialize;
use std::path::Path;

use crate::db::{self, Db, NewArticle};
use crate::models::{
    categorize, mentions_ict, NewsArticle, NewsCategory, NewsFeed, NewsItem, NewsSource,
};

#[derive(Debug, thiserror::Error)]
pub enum NewsError {
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),
    #[error("Could not read seed file {path}: {source}")]
    SeedRead {
        path: String,
        source: std::io::Error,
    },
    #[error("Invalid seed file: {0}")]
    SeedFormat(#[from] serde_json::Error),
}

/// One entry of a seed file
#[derive(Debug, Clone, Deserialize)]
pub struct SeedArticle {
    pub title: String,
    #[serde(default)]
    pub summary: String,
    pub url: String,
    #[serde(default = "manual_source")]
    pub source: NewsSource,
    pub published_date: DateTime<Utc>,
    #[serde(default)]
    pub category: Option<NewsCategory>,
}

fn manual_source() -> NewsSource {
    NewsSource::Manual
}

impl SeedArticle {
    fn into_new_article(self) -> NewArticle {
        let category = self
            .category
            .unwrap_or_else(|| categorize(&self.title, &self.summary));
        NewArticle {
            title: self.title,
            summary: self.summary,
            url: self.url,
            source: self.source,
            category,
            published_date: self.published_date,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ImportSummary {
    pub inserted: usize,
    pub duplicates: usize,
    pub solar: usize,
    pub ict: usize,
}

pub fn parse_seed(json: &str) -> Result<Vec<SeedArticle>, NewsError> {
    Ok(serde_json::from_str(json)?)
}

/// Insert seed articles, skipping ones already stored
pub async fn import_articles(
    db: &Db,
    articles: Vec<SeedArticle>,
    now: DateTime<Utc>,
) -> Result<ImportSummary, NewsError> {
    let mut summary = ImportSummary::default();

    for seed in articles {
        let guessed = seed.category.is_none();
        let article = seed.into_new_article();
        if guessed
            && article.category == NewsCategory::Ict
            && !mentions_ict(&article.title, &article.summary)
        {
            tracing::debug!(title = %article.title, "no topic keywords, filing under ICT");
        }
        if db::insert_article(db, &article, now).await? {
            summary.inserted += 1;
            match article.category {
                NewsCategory::Solar => summary.solar += 1,
                NewsCategory::Ict => summary.ict += 1,
                NewsCategory::General => {}
            }
        } else {
            summary.duplicates += 1;
        }
    }

    Ok(summary)
}

pub async fn import_seed_file(db: &Db, path: &Path) -> Result<ImportSummary, NewsError> {
    let json = tokio::fs::read_to_string(path)
        .await
        .map_err(|source| NewsError::SeedRead {
            path: path.display().to_string(),
            source,
        })?;
    let articles = parse_seed(&json)?;
    import_articles(db, articles, Utc::now()).await
}

/// Delete articles imported more than `retention_days` ago
pub async fn cleanup_old_articles(
    db: &Db,
    retention_days: i64,
    now: DateTime<Utc>,
) -> Result<u64, NewsError> {
    let removed = db::delete_scraped_before(db, now - Duration::days(retention_days)).await?;
    if removed > 0 {
        tracing::info!(removed, "cleaned up old news articles");
    }
    Ok(removed)
}

/// Active articles per news column
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ActiveCounts {
    pub ict: i64,
    pub solar: i64,
}

pub async fn active_counts(db: &Db) -> Result<ActiveCounts, NewsError> {
    Ok(ActiveCounts {
        ict: db::count_active(db, NewsCategory::Ict).await?,
        solar: db::count_active(db, NewsCategory::Solar).await?,
    })
}

/// Both columns of the news page
pub async fn load_feed(
    db: &Db,
    per_category: i64,
    now: DateTime<Utc>,
) -> Result<NewsFeed, NewsError> {
    let to_items = |articles: Vec<NewsArticle>| {
        articles
            .into_iter()
            .map(|a| NewsItem::from_article(a, now))
            .collect::<Vec<_>>()
    };

    Ok(NewsFeed {
        ict: to_items(db::get_active_articles(db, NewsCategory::Ict, per_category).await?),
        solar: to_items(db::get_active_articles(db, NewsCategory::Solar, per_category).await?),
    })
}
