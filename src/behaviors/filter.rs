/// `data-filter` value that matches every item
pub const FILTER_ALL: &str = "all";

/// Active category filter of the gallery and news grids
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum CategoryFilter {
    #[default]
    All,
    Only(String),
}

impl CategoryFilter {
    /// From a button's `data-filter` attribute
    pub fn parse(value: &str) -> Self {
        if value == FILTER_ALL {
            CategoryFilter::All
        } else {
            CategoryFilter::Only(value.to_string())
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            CategoryFilter::All => FILTER_ALL,
            CategoryFilter::Only(category) => category,
        }
    }

    /// Whether an item with `data-category` = `category` is shown
    pub fn matches(&self, category: Option<&str>) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::Only(wanted) => category == Some(wanted.as_str()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_shows_everything() {
        let filter = CategoryFilter::parse("all");
        assert_eq!(filter, CategoryFilter::All);
        assert!(filter.matches(Some("solar")));
        assert!(filter.matches(None));
    }

    #[test]
    fn test_category_shows_exact_matches() {
        let filter = CategoryFilter::parse("solar");
        assert!(filter.matches(Some("solar")));
        assert!(!filter.matches(Some("ict")));
        assert!(!filter.matches(Some("Solar")));
        assert!(!filter.matches(None));
    }

    #[test]
    fn test_round_trips_attribute() {
        assert_eq!(CategoryFilter::parse("ict").as_str(), "ict");
        assert_eq!(CategoryFilter::default().as_str(), "all");
    }
}
