//! # Browser `localStorage` session store
//!
//! [`LocalStore`] is the [`SessionStore`] used on the **web platform**. The whole
//! session lives under a single `localStorage` key ([`SESSION_KEY`] by default),
//! so one `setItem` call replaces it.
//!
//! ## Error handling
//!
//! Reads and removals swallow browser errors (private mode, disabled storage):
//! a store that cannot be read behaves as "signed out". Writes report
//! [`StoreError::Unavailable`] so the login view can tell the student the session
//! could not be kept.

use crate::error::StoreError;
use crate::repo::{SessionStore, SESSION_KEY};

/// `localStorage`-backed SessionStore for the web platform.
#[derive(Clone, Debug)]
pub struct LocalStore {
    key: String,
}

impl Default for LocalStore {
    fn default() -> Self {
        Self::new()
    }
}

impl LocalStore {
    pub fn new() -> Self {
        Self {
            key: SESSION_KEY.to_string(),
        }
    }

    fn storage() -> Option<web_sys::Storage> {
        web_sys::window()?.local_storage().ok().flatten()
    }
}

impl SessionStore for LocalStore {
    fn load(&self) -> Option<String> {
        Self::storage()?.get_item(&self.key).ok().flatten()
    }

    fn save(&self, record: &str) -> Result<(), StoreError> {
        let storage = Self::storage()
            .ok_or_else(|| StoreError::Unavailable("localStorage is not available".to_string()))?;
        storage
            .set_item(&self.key, record)
            .map_err(|e| StoreError::Unavailable(format!("{e:?}")))
    }

    fn clear(&self) {
        if let Some(storage) = Self::storage() {
            let _ = storage.remove_item(&self.key);
        }
    }
}
