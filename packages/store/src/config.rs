//! # Portal configuration — `cepre.toml`
//!
//! Defines the optional TOML file read at startup by native builds (filename:
//! [`PortalConfig::filename`] = `"cepre.toml"`). Web builds use the defaults, with
//! the API base URL baked in at compile time by the `api` crate.
//!
//! ## Structure
//!
//! ```toml
//! [api]
//! base_url = "https://api.cepre.example.pe"
//!
//! [contact]
//! whatsapp_prefix = "51"   # country code prepended to teacher phones
//! ```
//!
//! All structs derive `Default`, so a missing or empty file equals the default
//! configuration.

use serde::{Deserialize, Serialize};

/// Top-level configuration stored in `cepre.toml`.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct PortalConfig {
    #[serde(default)]
    pub api: ApiSection,
    #[serde(default)]
    pub contact: ContactSection,
}

/// Backend connection settings.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ApiSection {
    /// Base URL every endpoint path is appended to.
    #[serde(default = "default_base_url")]
    pub base_url: String,
}

fn default_base_url() -> String {
    "http://localhost:3000".to_string()
}

impl Default for ApiSection {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
        }
    }
}

/// Contact link settings.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ContactSection {
    #[serde(default = "default_whatsapp_prefix")]
    pub whatsapp_prefix: String,
}

fn default_whatsapp_prefix() -> String {
    "51".to_string()
}

impl Default for ContactSection {
    fn default() -> Self {
        Self {
            whatsapp_prefix: default_whatsapp_prefix(),
        }
    }
}

impl PortalConfig {
    /// Builder method to set the API base URL.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.api.base_url = base_url.into();
        self
    }

    /// The well-known filename for the config file.
    pub fn filename() -> &'static str {
        "cepre.toml"
    }

    /// Parse from TOML string.
    pub fn from_toml(s: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(s)
    }

    /// Serialize to TOML string.
    pub fn to_toml(&self) -> Result<String, toml::ser::Error> {
        toml::to_string_pretty(self)
    }
}
