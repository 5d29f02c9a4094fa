use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

const POWER_SOLAR_KEYWORDS: &[&str] = &[
    "solar", "power", "energy", "eskom", "electric", "electricity", "battery", "batteries", "ups",
    "generator", "renewable", "grid", "load shedding", "loadshedding", "outage", "voltage", "watt",
    "kwh", "solar panel", "inverter", "backup power", "power supply", "electrical", "hydro",
    "wind power", "coal", "nuclear power", "utility", "power grid",
];

const ICT_KEYWORDS: &[&str] = &[
    "technology", "tech", "software", "hardware", "computer", "laptop", "server", "network",
    "internet", "cyber", "digital", "programming", "coding", "app", "mobile", "smartphone", "ai",
    "artificial intelligence", "machine learning", "cloud", "data", "security", "blockchain",
    "cryptocurrency", "bitcoin", "fintech", "startup", "innovation", "telecommunications",
    "telecom", "fiber", "broadband", "5g", "4g", "wireless",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NewsCategory {
    Ict,
    Solar,
    General,
}

impl NewsCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            NewsCategory::Ict => "ict",
            NewsCategory::Solar => "solar",
            NewsCategory::General => "general",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            NewsCategory::Ict => "ICT",
            NewsCategory::Solar => "Solar & Power",
            NewsCategory::General => "General",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NewsSource {
    News24,
    MyBroadband,
    Manual,
}

impl NewsSource {
    pub fn as_str(&self) -> &'static str {
        match self {
            NewsSource::News24 => "news24",
            NewsSource::MyBroadband => "mybroadband",
            NewsSource::Manual => "manual",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            NewsSource::News24 => "News24",
            NewsSource::MyBroadband => "MyBroadband",
            NewsSource::Manual => "Manual Entry",
        }
    }
}

/// A stored enum column held a value this build does not know
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown {kind} `{value}`")]
pub struct UnknownVariant {
    kind: &'static str,
    value: String,
}

impl FromStr for NewsCategory {
    type Err = UnknownVariant;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "ict" => Ok(NewsCategory::Ict),
            "solar" => Ok(NewsCategory::Solar),
            "general" => Ok(NewsCategory::General),
            _ => Err(UnknownVariant {
                kind: "news category",
                value: s.to_string(),
            }),
        }
    }
}

impl FromStr for NewsSource {
    type Err = UnknownVariant;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "news24" => Ok(NewsSource::News24),
            "mybroadband" => Ok(NewsSource::MyBroadband),
            "manual" => Ok(NewsSource::Manual),
            _ => Err(UnknownVariant {
                kind: "news source",
                value: s.to_string(),
            }),
        }
    }
}

/// Pick a category from the article text.
///
/// Energy stories show up on tech sites too, so any power/solar keyword wins.
/// Everything else is treated as ICT.
pub fn categorize(title: &str, summary: &str) -> NewsCategory {
    let text = format!("{title} {summary}").to_lowercase();
    let matches = |keywords: &[&str]| keywords.iter().filter(|k| text.contains(*k)).count();

    if matches(POWER_SOLAR_KEYWORDS) > 0 {
        NewsCategory::Solar
    } else {
        NewsCategory::Ict
    }
}

/// Whether any ICT keyword appears; used for logging import statistics
pub fn mentions_ict(title: &str, summary: &str) -> bool {
    let text = format!("{title} {summary}").to_lowercase();
    ICT_KEYWORDS.iter().any(|k| text.contains(k))
}

fn plural(n: i64, unit: &str) -> String {
    if n == 1 {
        format!("{n} {unit} ago")
    } else {
        format!("{n} {unit}s ago")
    }
}

/// "3 days ago", "1 hour ago", "12 minutes ago"
pub fn time_since(published: DateTime<Utc>, now: DateTime<Utc>) -> String {
    let diff = now - published;
    let days = diff.num_days();
    let seconds_in_day = (diff - chrono::Duration::days(days)).num_seconds();

    if days > 0 {
        plural(days, "day")
    } else if seconds_in_day > 3600 {
        plural(seconds_in_day / 3600, "hour")
    } else {
        plural(seconds_in_day.max(0) / 60, "minute")
    }
}

/// Article as stored
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewsArticle {
    pub id: i64,
    pub title: String,
    pub summary: String,
    pub url: String,
    pub source: NewsSource,
    pub category: NewsCategory,
    pub published_date: DateTime<Utc>,
    pub scraped_date: DateTime<Utc>,
    pub is_active: bool,
}

/// Article as shown on the news page
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewsItem {
    pub title: String,
    pub summary: String,
    pub url: String,
    pub source: String,
    pub category: NewsCategory,
    pub time_ago: String,
}

impl NewsItem {
    pub fn from_article(article: NewsArticle, now: DateTime<Utc>) -> Self {
        Self {
            time_ago: time_since(article.published_date, now),
            source: article.source.label().to_string(),
            category: article.category,
            title: article.title,
            summary: article.summary,
            url: article.url,
        }
    }
}

/// Both news columns
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct NewsFeed {
    pub ict: Vec<NewsItem>,
    pub solar: Vec<NewsItem>,
}

impl NewsFeed {
    pub fn is_empty(&self) -> bool {
        self.ict.is_empty() && self.solar.is_empty()
    }

    pub fn items(&self) -> impl Iterator<Item = &NewsItem> {
        self.ict.iter().chain(self.solar.iter())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone};

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 3, 10, 12, 0, 0).unwrap()
    }

    #[test]
    fn test_power_keywords_win() {
        assert_eq!(
            categorize("Eskom announces stage 4", "Cloud providers brace for outages"),
            NewsCategory::Solar
        );
        assert_eq!(
            categorize("New inverter rebate", "Residential installs"),
            NewsCategory::Solar
        );
    }

    #[test]
    fn test_tech_stories_are_ict() {
        assert_eq!(
            categorize("Fibre rollout reaches Soweto", "Broadband prices drop"),
            NewsCategory::Ict
        );
    }

    #[test]
    fn test_unmatched_defaults_to_ict() {
        assert_eq!(categorize("Rugby results", "Weekend round-up"), NewsCategory::Ict);
        assert!(!mentions_ict("Rugby results", "Weekend round-up"));
    }

    #[test]
    fn test_time_since_days() {
        assert_eq!(time_since(now() - Duration::days(1), now()), "1 day ago");
        assert_eq!(time_since(now() - Duration::days(3), now()), "3 days ago");
    }

    #[test]
    fn test_time_since_hours() {
        assert_eq!(
            time_since(now() - Duration::minutes(61), now()),
            "1 hour ago"
        );
        assert_eq!(time_since(now() - Duration::hours(5), now()), "5 hours ago");
    }

    #[test]
    fn test_time_since_minutes() {
        assert_eq!(
            time_since(now() - Duration::minutes(1), now()),
            "1 minute ago"
        );
        // exactly one hour is still reported in minutes
        assert_eq!(
            time_since(now() - Duration::hours(1), now()),
            "60 minutes ago"
        );
        assert_eq!(time_since(now(), now()), "0 minutes ago");
    }

    #[test]
    fn test_category_strings() {
        assert_eq!("SOLAR".parse::<NewsCategory>(), Ok(NewsCategory::Solar));
        assert_eq!(NewsCategory::Solar.label(), "Solar & Power");
        assert_eq!("mybroadband".parse::<NewsSource>(), Ok(NewsSource::MyBroadband));
        assert_eq!(NewsSource::News24.label(), "News24");
    }

    #[test]
    fn test_unknown_stored_values_are_rejected() {
        let err = "weather".parse::<NewsCategory>().unwrap_err();
        assert_eq!(err.to_string(), "unknown news category `weather`");
        assert!("rss".parse::<NewsSource>().is_err());
    }

    #[test]
    fn test_feed_items_chain_columns() {
        let item = |title: &str, category| NewsItem {
            title: title.into(),
            summary: String::new(),
            url: String::new(),
            source: "News24".into(),
            category,
            time_ago: "1 day ago".into(),
        };
        let feed = NewsFeed {
            ict: vec![item("a", NewsCategory::Ict)],
            solar: vec![item("b", NewsCategory::Solar)],
        };
        let titles: Vec<_> = feed.items().map(|i| i.title.as_str()).collect();
        assert_eq!(titles, vec!["a", "b"]);
        assert!(!feed.is_empty());
        assert!(NewsFeed::default().is_empty());
    }
}
