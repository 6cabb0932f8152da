//! # Sessions — the session record on top of an abstract key-value store
//!
//! [`Sessions`] reads and writes the portal's [`Session`] through the
//! [`SessionStore`] trait, so the same logic runs against browser `localStorage`
//! (web), a JSON file (desktop) or plain memory (tests).
//!
//! ## One record, one write
//!
//! The session is serialised as a single JSON document stored under
//! [`SESSION_KEY`]. Setting, reading and clearing a session are each one store
//! operation, so a reader never sees the authentication flag without the token
//! and profile that came with it.
//!
//! ## Reading is infallible
//!
//! [`Sessions::get_session`] never fails: a missing record and a malformed one both
//! produce [`Session::default`] (unauthenticated, empty profile). Malformed records
//! are logged and otherwise ignored; the next login overwrites them.

use crate::error::StoreError;
use crate::models::{Profile, Session};

/// Storage key of the serialised session record.
pub const SESSION_KEY: &str = "cepre.session";

/// Synchronous storage for the serialised session record.
pub trait SessionStore {
    /// The stored record, if any.
    fn load(&self) -> Option<String>;
    /// Replace the stored record.
    fn save(&self, record: &str) -> Result<(), StoreError>;
    /// Remove the stored record. Removing a missing record is not an error.
    fn clear(&self);
}

/// Session repository backed by a [`SessionStore`].
#[derive(Clone, Debug)]
pub struct Sessions<S: SessionStore> {
    store: S,
}

impl<S: SessionStore> Sessions<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Persist a signed-in session for `profile`.
    pub fn set_session(
        &self,
        profile: Profile,
        token: Option<String>,
    ) -> Result<Session, StoreError> {
        let session = Session::signed_in(profile, token);
        let record = serde_json::to_string(&session)?;
        self.store.save(&record)?;
        Ok(session)
    }

    /// Current session, or the default one if nothing usable is stored.
    pub fn get_session(&self) -> Session {
        let Some(record) = self.store.load() else {
            return Session::default();
        };
        match serde_json::from_str(&record) {
            Ok(session) => session,
            Err(e) => {
                tracing::warn!("Ignoring malformed session record: {}", e);
                Session::default()
            }
        }
    }

    pub fn clear_session(&self) {
        self.store.clear();
    }

    pub fn is_authenticated(&self) -> bool {
        self.get_session().authenticated
    }

    pub fn token(&self) -> Option<String> {
        self.get_session().token
    }

    pub fn profile(&self) -> Profile {
        self.get_session().profile
    }
}
