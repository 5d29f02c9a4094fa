use serde::{Deserialize, Serialize};

use crate::storage::{KeyValueStore, StorageError};

pub const CONSENT_KEY: &str = "cookiesConsent";
pub const PREFERENCES_KEY: &str = "cookiePreferences";

/// The visitor's overall cookie decision
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConsentStatus {
    Accepted,
    Denied,
    Customized,
}

impl ConsentStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            ConsentStatus::Accepted => "accepted",
            ConsentStatus::Denied => "denied",
            ConsentStatus::Customized => "customized",
        }
    }
}

/// Optional cookie categories. `functional` is required and always true.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CookiePreferences {
    pub functional: bool,
    pub statistics: bool,
    pub marketing: bool,
}

impl Default for CookiePreferences {
    fn default() -> Self {
        Self {
            functional: true,
            statistics: false,
            marketing: false,
        }
    }
}

impl CookiePreferences {
    pub fn new(statistics: bool, marketing: bool) -> Self {
        Self {
            functional: true,
            statistics,
            marketing,
        }
    }

    /// Corrupt or missing JSON falls back to everything optional off
    pub fn parse(raw: Option<&str>) -> Self {
        let parsed = raw
            .and_then(|s| serde_json::from_str::<CookiePreferences>(s).ok())
            .unwrap_or_default();
        Self::new(parsed.statistics, parsed.marketing)
    }
}

/// Consent decision and preferences persisted in local storage
pub struct ConsentStore<S> {
    storage: S,
}

impl<S: KeyValueStore> ConsentStore<S> {
    pub fn new(storage: S) -> Self {
        Self { storage }
    }

    /// Any non-empty stored value counts as a decision
    pub fn decision_recorded(&self) -> bool {
        self.storage
            .get(CONSENT_KEY)
            .is_some_and(|v| !v.is_empty())
    }

    /// The floating cookie button is shown until a decision is recorded
    pub fn button_visible(&self) -> bool {
        !self.decision_recorded()
    }

    pub fn accept(&self) -> Result<(), StorageError> {
        self.storage
            .set(CONSENT_KEY, ConsentStatus::Accepted.as_str())
    }

    pub fn deny(&self) -> Result<(), StorageError> {
        self.storage.set(CONSENT_KEY, ConsentStatus::Denied.as_str())
    }

    pub fn preferences(&self) -> CookiePreferences {
        CookiePreferences::parse(self.storage.get(PREFERENCES_KEY).as_deref())
    }

    /// Store the chosen categories and mark consent as customized
    pub fn save_preferences(
        &self,
        statistics: bool,
        marketing: bool,
    ) -> Result<CookiePreferences, StorageError> {
        let preferences = CookiePreferences::new(statistics, marketing);
        let json = serde_json::to_string(&preferences)
            .map_err(|_| StorageError::WriteRejected(PREFERENCES_KEY.to_string()))?;
        self.storage.set(PREFERENCES_KEY, &json)?;
        self.storage
            .set(CONSENT_KEY, ConsentStatus::Customized.as_str())?;
        Ok(preferences)
    }
}
