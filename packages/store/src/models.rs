//! # Session and profile models
//!
//! Defines what the portal remembers about the signed-in student. Both types are
//! `Serialize + Deserialize` because the whole [`Session`] is persisted as a single
//! JSON record by [`crate::Sessions`].
//!
//! ## Types
//!
//! | Struct | Represents |
//! |--------|-----------|
//! | [`Profile`] | The `estudiante` object returned by the login endpoint, merged with the granted `rol`. The backend owns its schema, so it is kept as an open JSON object and read through accessors. |
//! | [`Session`] | The authentication flag, the optional bearer token and the profile. |
//!
//! Missing profile fields are not an error: the display helpers fall back to the
//! same placeholder text the dashboard shows (`"Estudiante"`, `"ES"`).

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Placeholder shown wherever the student's name is unknown.
pub const DEFAULT_DISPLAY_NAME: &str = "Estudiante";

/// Backend-supplied student profile.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Profile(pub Map<String, Value>);

impl Profile {
    /// Build a profile from an arbitrary JSON value. Non-objects give an empty profile.
    pub fn from_value(value: Value) -> Self {
        match value {
            Value::Object(map) => Self(map),
            _ => Self::default(),
        }
    }

    /// Read a field as a string. Numbers and booleans are rendered, blanks are `None`.
    pub fn get_str(&self, key: &str) -> Option<String> {
        let text = match self.0.get(key)? {
            Value::String(s) => s.trim().to_string(),
            Value::Number(n) => n.to_string(),
            Value::Bool(b) => b.to_string(),
            _ => return None,
        };
        (!text.is_empty()).then_some(text)
    }

    pub fn set(&mut self, key: &str, value: impl Into<Value>) {
        self.0.insert(key.to_string(), value.into());
    }

    /// Builder variant of [`Profile::set`] for the `rol` field.
    pub fn with_role(mut self, role: Option<&str>) -> Self {
        if let Some(role) = role {
            self.set("rol", role);
        }
        self
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn first_names(&self) -> Option<String> {
        self.get_str("nombres")
    }

    pub fn paternal_surname(&self) -> Option<String> {
        self.get_str("ap_paterno")
    }

    pub fn dni(&self) -> Option<String> {
        self.get_str("dni")
    }

    pub fn role(&self) -> Option<String> {
        self.get_str("rol")
    }

    /// First word of `nombres`, used in the dashboard greeting.
    pub fn first_name(&self) -> String {
        self.first_names()
            .and_then(|names| names.split_whitespace().next().map(str::to_string))
            .unwrap_or_else(|| DEFAULT_DISPLAY_NAME.to_string())
    }

    /// `"<nombres> <ap_paterno>"`, or the placeholder when `nombres` is missing.
    pub fn display_name(&self) -> String {
        match self.first_names() {
            Some(names) => format!("{} {}", names, self.paternal_surname().unwrap_or_default())
                .trim()
                .to_string(),
            None => DEFAULT_DISPLAY_NAME.to_string(),
        }
    }

    /// Up to two initials taken from the words of [`Profile::display_name`].
    pub fn initials(&self) -> String {
        self.display_name()
            .split_whitespace()
            .filter_map(|word| word.chars().next())
            .take(2)
            .flat_map(char::to_uppercase)
            .collect()
    }

    /// First letter of `nombres` plus first letter of `ap_paterno` (topbar avatar).
    pub fn short_initials(&self) -> String {
        let Some(names) = self.first_names() else {
            return "ES".to_string();
        };
        let surname = self.paternal_surname().unwrap_or_default();
        names
            .chars()
            .take(1)
            .chain(surname.chars().take(1))
            .flat_map(char::to_uppercase)
            .collect()
    }
}

/// The persisted client session.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Session {
    #[serde(default)]
    pub authenticated: bool,
    #[serde(default)]
    pub token: Option<String>,
    #[serde(default)]
    pub profile: Profile,
}

impl Session {
    /// A freshly signed-in session.
    pub fn signed_in(profile: Profile, token: Option<String>) -> Self {
        Self {
            authenticated: true,
            token: token.filter(|t| !t.is_empty()),
            profile,
        }
    }
}
