//! Server configuration from environment variables.
//!
//! Call `dotenvy::dotenv()` before [`SiteConfig::from_env`] to pick up a
//! `.env` file.

use std::path::PathBuf;

const DEFAULT_DATABASE_URL: &str = "sqlite:site.db";
const DEFAULT_RETENTION_DAYS: i64 = 30;
const DEFAULT_PER_CATEGORY: i64 = 10;

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{name} must be a positive whole number, got {value:?}")]
    InvalidNumber { name: &'static str, value: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SiteConfig {
    /// SQLite URL, e.g. `sqlite:site.db`
    pub database_url: String,
    /// Optional JSON file of articles imported at startup
    pub news_seed_path: Option<PathBuf>,
    /// Articles imported longer ago than this are deleted at startup
    pub news_retention_days: i64,
    /// Articles shown per news column
    pub news_per_category: i64,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            database_url: DEFAULT_DATABASE_URL.to_string(),
            news_seed_path: None,
            news_retention_days: DEFAULT_RETENTION_DAYS,
            news_per_category: DEFAULT_PER_CATEGORY,
        }
    }
}

impl SiteConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Build from any variable source; empty values count as unset
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let get = |name: &str| lookup(name).filter(|v| !v.trim().is_empty());
        let defaults = Self::default();

        Ok(Self {
            database_url: get("DATABASE_URL").unwrap_or(defaults.database_url),
            news_seed_path: get("NEWS_SEED_PATH").map(PathBuf::from),
            news_retention_days: positive(
                "NEWS_RETENTION_DAYS",
                get("NEWS_RETENTION_DAYS"),
                defaults.news_retention_days,
            )?,
            news_per_category: positive(
                "NEWS_PER_CATEGORY",
                get("NEWS_PER_CATEGORY"),
                defaults.news_per_category,
            )?,
        })
    }
}

fn positive(name: &'static str, value: Option<String>, default: i64) -> Result<i64, ConfigError> {
    let Some(value) = value else {
        return Ok(default);
    };
    match value.trim().parse::<i64>() {
        Ok(n) if n > 0 => Ok(n),
        _ => Err(ConfigError::InvalidNumber { name, value }),
    }
}
