use std::sync::{Arc, Mutex};

use crate::error::StoreError;
use crate::repo::SessionStore;

/// In-memory SessionStore for testing and as a fallback when no storage exists.
#[derive(Clone, Debug, Default)]
pub struct MemoryStore {
    record: Arc<Mutex<Option<String>>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn slot(&self) -> std::sync::MutexGuard<'_, Option<String>> {
        // A poisoned lock still holds a complete record.
        self.record.lock().unwrap_or_else(|e| e.into_inner())
    }
}

impl SessionStore for MemoryStore {
    fn load(&self) -> Option<String> {
        self.slot().clone()
    }

    fn save(&self, record: &str) -> Result<(), StoreError> {
        *self.slot() = Some(record.to_string());
        Ok(())
    }

    fn clear(&self) {
        *self.slot() = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Profile, Session};
    use crate::repo::Sessions;
    use serde_json::json;

    fn ana() -> Profile {
        Profile::from_value(json!({"nombres": "Ana", "rol": "estudiante", "dni": "12345678"}))
    }

    #[test]
    fn test_set_and_get_session() {
        let sessions = Sessions::new(MemoryStore::new());

        // Initially unauthenticated
        assert_eq!(sessions.get_session(), Session::default());
        assert!(!sessions.is_authenticated());

        sessions
            .set_session(ana(), Some("abc".to_string()))
            .unwrap();

        let session = sessions.get_session();
        assert!(session.authenticated);
        assert_eq!(session.token.as_deref(), Some("abc"));
        assert_eq!(session.profile, ana());
        assert_eq!(sessions.token().as_deref(), Some("abc"));
    }

    #[test]
    fn test_clear_session() {
        let sessions = Sessions::new(MemoryStore::new());
        sessions.set_session(ana(), Some("abc".to_string())).unwrap();

        sessions.clear_session();

        let session = sessions.get_session();
        assert!(!session.authenticated);
        assert!(session.token.is_none());
        assert!(session.profile.is_empty());
    }

    #[test]
    fn test_session_without_token() {
        let sessions = Sessions::new(MemoryStore::new());
        sessions.set_session(ana(), None).unwrap();

        assert!(sessions.is_authenticated());
        assert!(sessions.token().is_none());
        assert_eq!(sessions.profile().first_name(), "Ana");
    }

    #[test]
    fn test_malformed_record_reads_as_default() {
        let store = MemoryStore::new();
        store.save("{not json").unwrap();

        let sessions = Sessions::new(store);
        assert_eq!(sessions.get_session(), Session::default());
    }

    #[test]
    fn test_partial_record_fills_defaults() {
        let store = MemoryStore::new();
        store.save(r#"{"authenticated": true}"#).unwrap();

        let session = Sessions::new(store).get_session();
        assert!(session.authenticated);
        assert!(session.token.is_none());
        assert!(session.profile.is_empty());
    }

    #[test]
    fn test_single_record_is_stored() {
        let store = MemoryStore::new();
        let sessions = Sessions::new(store.clone());
        sessions.set_session(ana(), Some("abc".to_string())).unwrap();

        let raw: serde_json::Value = serde_json::from_str(&store.load().unwrap()).unwrap();
        assert_eq!(raw["authenticated"], json!(true));
        assert_eq!(raw["token"], json!("abc"));
        assert_eq!(raw["profile"]["nombres"], json!("Ana"));
    }
}
