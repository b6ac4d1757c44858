//! Persistence port for the browser's `localStorage` mirror.
//!
//! SYSTEM CONTEXT
//! ==============
//! Stores never touch `web_sys` directly. They hold a [`SharedStorage`] and go
//! through [`load_json`]/[`save_json`]. [`default_storage`] picks
//! `LocalStorage` in the csr build and [`MemoryStorage`] elsewhere.
//!
//! ERROR HANDLING
//! ==============
//! Missing storage, missing keys, and malformed JSON all read as "nothing
//! saved". Write failures are logged and dropped.

#[cfg(test)]
#[path = "storage_test.rs"]
mod storage_test;

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use serde::Serialize;
use serde::de::DeserializeOwned;

/// String key/value storage with `localStorage` semantics.
pub trait KeyValueStore: Send + Sync {
    fn get_item(&self, key: &str) -> Option<String>;
    fn set_item(&self, key: &str, value: &str);
    fn remove_item(&self, key: &str);
}

/// Handle injected into stores that persist state.
pub type SharedStorage = Arc<dyn KeyValueStore>;

/// Load a JSON value stored under `key`.
pub fn load_json<T: DeserializeOwned>(storage: &dyn KeyValueStore, key: &str) -> Option<T> {
    let raw = storage.get_item(key)?;
    match serde_json::from_str(&raw) {
        Ok(value) => Some(value),
        Err(e) => {
            leptos::logging::warn!("ignoring malformed saved state for {key}: {e}");
            None
        }
    }
}

/// Save a JSON value under `key`.
pub fn save_json<T: Serialize>(storage: &dyn KeyValueStore, key: &str, value: &T) {
    match serde_json::to_string(value) {
        Ok(raw) => storage.set_item(key, &raw),
        Err(e) => leptos::logging::warn!("failed to encode state for {key}: {e}"),
    }
}

/// Storage backing the running app.
pub fn default_storage() -> SharedStorage {
    #[cfg(feature = "csr")]
    {
        Arc::new(LocalStorage)
    }
    #[cfg(not(feature = "csr"))]
    {
        Arc::new(MemoryStorage::new())
    }
}

/// The browser's `window.localStorage`.
#[cfg(feature = "csr")]
#[derive(Clone, Copy, Debug, Default)]
struct LocalStorage;

#[cfg(feature = "csr")]
fn browser_storage() -> Option<web_sys::Storage> {
    web_sys::window().and_then(|w| w.local_storage().ok().flatten())
}

#[cfg(feature = "csr")]
impl KeyValueStore for LocalStorage {
    fn get_item(&self, key: &str) -> Option<String> {
        browser_storage()?.get_item(key).ok().flatten()
    }

    fn set_item(&self, key: &str, value: &str) {
        let Some(storage) = browser_storage() else {
            return;
        };
        if storage.set_item(key, value).is_err() {
            leptos::logging::warn!("localStorage write failed for {key}");
        }
    }

    fn remove_item(&self, key: &str) {
        if let Some(storage) = browser_storage() {
            let _ = storage.remove_item(key);
        }
    }
}

/// In-process storage used by tests and non-browser builds.
#[derive(Debug, Default)]
pub struct MemoryStorage {
    items: Mutex<HashMap<String, String>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }
}

#[cfg(test)]
impl MemoryStorage {
    /// Number of stored keys.
    pub fn len(&self) -> usize {
        self.items.lock().map_or(0, |items| items.len())
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl KeyValueStore for MemoryStorage {
    fn get_item(&self, key: &str) -> Option<String> {
        self.items.lock().ok()?.get(key).cloned()
    }

    fn set_item(&self, key: &str, value: &str) {
        if let Ok(mut items) = self.items.lock() {
            items.insert(key.to_owned(), value.to_owned());
        }
    }

    fn remove_item(&self, key: &str) {
        if let Ok(mut items) = self.items.lock() {
            items.remove(key);
        }
    }
}
