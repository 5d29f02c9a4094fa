use chrono::{DateTime, Utc};
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use sqlx::{FromRow, Pool, Sqlite};
use std::str::FromStr;

use crate::models::{NewsArticle, NewsCategory, NewsSource};

pub type Db = Pool<Sqlite>;

// Row as stored; enums are kept as text
#[derive(Debug, Clone, FromRow)]
struct NewsArticleRow {
    id: i64,
    title: String,
    summary: String,
    url: String,
    source: String,
    category: String,
    published_date: DateTime<Utc>,
    scraped_date: DateTime<Utc>,
    is_active: bool,
}

impl NewsArticleRow {
    fn into_article(self) -> Option<NewsArticle> {
        Some(NewsArticle {
            id: self.id,
            source: self.source.parse().ok()?,
            category: self.category.parse().ok()?,
            title: self.title,
            summary: self.summary,
            url: self.url,
            published_date: self.published_date,
            scraped_date: self.scraped_date,
            is_active: self.is_active,
        })
    }
}

/// Fields of an article to be inserted
#[derive(Debug, Clone, PartialEq)]
pub struct NewArticle {
    pub title: String,
    pub summary: String,
    pub url: String,
    pub source: NewsSource,
    pub category: NewsCategory,
    pub published_date: DateTime<Utc>,
}

// Create connection pool, creating the database file if needed
pub async fn create_pool(url: &str) -> Result<Db, sqlx::Error> {
    let options = SqliteConnectOptions::from_str(url)?.create_if_missing(true);
    SqlitePoolOptions::new()
        .max_connections(20)
        .connect_with(options)
        .await
}

// Run migrations (create tables if not exist)
pub async fn run_migrations(db: &Db) -> Result<(), sqlx::Error> {
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS news_articles (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            title TEXT NOT NULL,
            summary TEXT NOT NULL,
            url TEXT NOT NULL,
            source TEXT NOT NULL,
            category TEXT NOT NULL,
            published_date TEXT NOT NULL,
            scraped_date TEXT NOT NULL,
            is_active INTEGER NOT NULL DEFAULT 1,
            UNIQUE (title, source)
        )
        "#,
    )
    .execute(db)
    .await?;

    sqlx::query(
        "CREATE INDEX IF NOT EXISTS idx_news_category_published \
         ON news_articles (category, is_active, published_date DESC)",
    )
    .execute(db)
    .await?;

    Ok(())
}

// News queries
pub async fn get_active_articles(
    db: &Db,
    category: NewsCategory,
    limit: i64,
) -> Result<Vec<NewsArticle>, sqlx::Error> {
    let rows: Vec<NewsArticleRow> = sqlx::query_as(
        "SELECT * FROM news_articles WHERE category = ? AND is_active = 1 \
         ORDER BY published_date DESC LIMIT ?",
    )
    .bind(category.as_str())
    .bind(limit)
    .fetch_all(db)
    .await?;

    Ok(rows.into_iter().filter_map(NewsArticleRow::into_article).collect())
}

/// Insert unless an article with the same title and source exists.
/// Returns whether a row was added.
pub async fn insert_article(
    db: &Db,
    article: &NewArticle,
    scraped_at: DateTime<Utc>,
) -> Result<bool, sqlx::Error> {
    let result = sqlx::query(
        "INSERT OR IGNORE INTO news_articles \
         (title, summary, url, source, category, published_date, scraped_date, is_active) \
         VALUES (?, ?, ?, ?, ?, ?, ?, 1)",
    )
    .bind(&article.title)
    .bind(&article.summary)
    .bind(&article.url)
    .bind(article.source.as_str())
    .bind(article.category.as_str())
    .bind(article.published_date)
    .bind(scraped_at)
    .execute(db)
    .await?;
    Ok(result.rows_affected() > 0)
}

/// Remove articles imported before `cutoff`; returns how many went
pub async fn delete_scraped_before(db: &Db, cutoff: DateTime<Utc>) -> Result<u64, sqlx::Error> {
    let result = sqlx::query("DELETE FROM news_articles WHERE scraped_date < ?")
        .bind(cutoff)
        .execute(db)
        .await?;
    Ok(result.rows_affected())
}

pub async fn count_active(db: &Db, category: NewsCategory) -> Result<i64, sqlx::Error> {
    let (count,): (i64,) = sqlx::query_as(
        "SELECT COUNT(*) FROM news_articles WHERE category = ? AND is_active = 1",
    )
    .bind(category.as_str())
    .fetch_one(db)
    .await?;
    Ok(count)
}
