//! Best-effort list results.
//!
//! Read services return `Result<Vec<T>, ApiError>`. Views want something they can
//! always render, so [`Listing`] keeps the data (empty on failure) and also records
//! whether the request failed. "No results" and "request failed" stay distinguishable.

use serde::{Deserialize, Serialize};

use crate::error::ApiError;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Listing<T> {
    pub success: bool,
    pub data: Vec<T>,
    /// Why the request failed, when it did.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl<T> Default for Listing<T> {
    fn default() -> Self {
        Self {
            success: true,
            data: Vec::new(),
            error: None,
        }
    }
}

impl<T> Listing<T> {
    pub fn loaded(data: Vec<T>) -> Self {
        Self {
            success: true,
            data,
            error: None,
        }
    }

    pub fn failed(error: &ApiError) -> Self {
        Self {
            success: false,
            data: Vec::new(),
            error: Some(error.to_string()),
        }
    }

    /// Degrade a service result, logging failures under `what`.
    pub fn from_result(what: &str, result: Result<Vec<T>, ApiError>) -> Self {
        match result {
            Ok(data) => Self::loaded(data),
            Err(e) => {
                tracing::warn!("Failed to load {}: {}", what, e);
                Self::failed(&e)
            }
        }
    }

    pub fn is_failure(&self) -> bool {
        !self.success
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }
}
