//! String key-value storage, the shape of the browser's `localStorage` and
//! `sessionStorage`. Components use [`BrowserStorage`]; tests use
//! [`MemoryStore`].

use std::cell::RefCell;
use std::collections::HashMap;

#[cfg(feature = "hydrate")]
use leptos::web_sys;

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum StorageError {
    #[error("Storage is not available")]
    Unavailable,
    #[error("Storage rejected write to {0}")]
    WriteRejected(String),
}

pub trait KeyValueStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str) -> Result<(), StorageError>;
}

/// In-memory store
#[derive(Debug, Default)]
pub struct MemoryStore {
    items: RefCell<HashMap<String, String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_item(key: &str, value: &str) -> Self {
        let store = Self::new();
        store.items.borrow_mut().insert(key.to_string(), value.to_string());
        store
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.items.borrow().get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        self.items
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }
}

impl<S: KeyValueStore + ?Sized> KeyValueStore for &S {
    fn get(&self, key: &str) -> Option<String> {
        (**self).get(key)
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        (**self).set(key, value)
    }
}

/// `localStorage` or `sessionStorage` of the current window.
///
/// Outside the browser (server rendering, tests) there is no backing store:
/// reads return nothing and writes fail with [`StorageError::Unavailable`].
#[derive(Clone)]
pub struct BrowserStorage {
    #[cfg(feature = "hydrate")]
    inner: Option<web_sys::Storage>,
}

impl BrowserStorage {
    pub fn local() -> Self {
        Self {
            #[cfg(feature = "hydrate")]
            inner: web_sys::window().and_then(|w| w.local_storage().ok().flatten()),
        }
    }

    pub fn session() -> Self {
        Self {
            #[cfg(feature = "hydrate")]
            inner: web_sys::window().and_then(|w| w.session_storage().ok().flatten()),
        }
    }
}

impl KeyValueStore for BrowserStorage {
    fn get(&self, key: &str) -> Option<String> {
        #[cfg(feature = "hydrate")]
        {
            self.inner.as_ref()?.get_item(key).ok().flatten()
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = key;
            None
        }
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        #[cfg(feature = "hydrate")]
        {
            let storage = self.inner.as_ref().ok_or(StorageError::Unavailable)?;
            storage
                .set_item(key, value)
                .map_err(|_| StorageError::WriteRejected(key.to_string()))
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (key, value);
            Err(StorageError::Unavailable)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_store_round_trip() {
        let store = MemoryStore::new();
        assert_eq!(store.get("cookiesConsent"), None);
        store.set("cookiesConsent", "accepted").unwrap();
        assert_eq!(store.get("cookiesConsent").as_deref(), Some("accepted"));
    }

    #[test]
    fn test_store_through_reference() {
        let store = MemoryStore::with_item("loadingCompleted", "true");
        let by_ref: &MemoryStore = &store;
        assert_eq!(KeyValueStore::get(&by_ref, "loadingCompleted").as_deref(), Some("true"));
    }

    #[cfg(not(feature = "hydrate"))]
    #[test]
    fn test_browser_storage_is_inert_off_browser() {
        let store = BrowserStorage::local();
        assert_eq!(store.get("cookiesConsent"), None);
        assert_eq!(store.set("cookiesConsent", "denied"), Err(StorageError::Unavailable));
    }
}
