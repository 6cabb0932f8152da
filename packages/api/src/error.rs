//! Error types shared by the backend client and the domain services.

use serde_json::Value;
use thiserror::Error;

/// Message shown when the backend cannot be reached at all.
pub const UNREACHABLE_MESSAGE: &str = "Error de conexión o servidor no disponible";

/// A failed backend call, normalised from whatever the transport reported.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ApiError {
    /// The request never produced an HTTP response.
    #[error("request failed: {0}")]
    Transport(String),
    /// The backend answered with a non-success status. `body` holds the parsed JSON,
    /// or the raw text as a JSON string when it was not JSON.
    #[error("server responded with status {status}")]
    Status { status: u16, body: Option<Value> },
    /// A success response whose body could not be understood.
    #[error("invalid response: {0}")]
    Decode(String),
    /// A success response that flagged itself as failed (`success: false`).
    #[error("request rejected: {0}")]
    Rejected(String),
}

impl From<reqwest::Error> for ApiError {
    fn from(e: reqwest::Error) -> Self {
        ApiError::Transport(e.to_string())
    }
}

/// A failed login, ready to be shown to the student as-is.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum LoginError {
    /// The backend refused the credentials; carries its message.
    #[error("{0}")]
    Rejected(String),
    #[error("{}", UNREACHABLE_MESSAGE)]
    Unreachable,
    /// Login succeeded but the session could not be persisted.
    #[error("No se pudo guardar la sesión: {0}")]
    Session(String),
}

impl LoginError {
    /// The normalised `{ok: false, message}` payload for this failure.
    pub fn payload(&self) -> Value {
        serde_json::json!({ "ok": false, "message": self.to_string() })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_unreachable_message_matches_constant() {
        assert_eq!(LoginError::Unreachable.to_string(), UNREACHABLE_MESSAGE);
    }

    #[test]
    fn test_payload_shape() {
        let err = LoginError::Rejected("DNI no registrado".to_string());
        assert_eq!(err.payload(), json!({"ok": false, "message": "DNI no registrado"}));
    }
}
