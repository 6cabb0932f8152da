//! Student login.
//!
//! Unlike the read services, a failed login is always surfaced: the view shows the
//! [`LoginError`] message verbatim. Server-supplied messages are preserved; a
//! backend that cannot be reached gets a generic connectivity message.

use serde::Serialize;
use serde_json::Value;
use store::Profile;

use crate::backend::Backend;
use crate::error::{ApiError, LoginError};
use crate::models::value_to_string;

pub const LOGIN_PATH: &str = "/sistema/admin/login-estudiante-cepre";

/// Shown when the backend rejects the login without saying why.
pub const REJECTED_FALLBACK: &str = "Error al iniciar sesión. Verifique sus credenciales.";
/// Shown when a success response says `ok: false` without a message.
pub const UNKNOWN_FAILURE: &str = "Error desconocido";

#[derive(Debug, Serialize)]
struct LoginRequest<'a> {
    dni: &'a str,
    celular: &'a str,
}

/// What a successful login hands back to the caller.
#[derive(Debug, Clone, PartialEq)]
pub struct LoginSuccess {
    /// The `estudiante` object with `rol` merged in.
    pub profile: Profile,
    pub role: Option<String>,
    pub token: Option<String>,
}

/// Log in with national ID and phone number.
pub async fn login(
    backend: &impl Backend,
    dni: &str,
    celular: &str,
) -> Result<LoginSuccess, LoginError> {
    let request = LoginRequest {
        dni: dni.trim(),
        celular: celular.trim(),
    };

    match backend.post(LOGIN_PATH, &request).await {
        Ok(value) => accept(value),
        Err(ApiError::Status { status, body: Some(body) }) => {
            tracing::info!("Login rejected with status {}", status);
            Err(LoginError::Rejected(message_from(&body)))
        }
        Err(ApiError::Decode(e)) => {
            tracing::warn!("Unreadable login response: {}", e);
            Err(LoginError::Rejected(UNKNOWN_FAILURE.to_string()))
        }
        Err(e) => {
            tracing::warn!("Login request failed: {}", e);
            Err(LoginError::Unreachable)
        }
    }
}

/// Read a login body field by field; only `ok` decides the outcome.
fn accept(value: Value) -> Result<LoginSuccess, LoginError> {
    if !value.get("ok").is_some_and(truthy) {
        let message = value
            .get("message")
            .and_then(value_to_string)
            .unwrap_or_else(|| UNKNOWN_FAILURE.to_string());
        return Err(LoginError::Rejected(message));
    }

    let role = value.get("rol").and_then(value_to_string);
    let estudiante = value.get("estudiante").cloned().unwrap_or(Value::Null);
    let profile = Profile::from_value(estudiante).with_role(role.as_deref());
    Ok(LoginSuccess {
        profile,
        role,
        token: value.get("token").and_then(value_to_string),
    })
}

/// JavaScript-style truthiness of the `ok` flag.
fn truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|n| n != 0.0 && !n.is_nan()),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

/// `message`, else `error`, else the generic fallback.
fn message_from(body: &Value) -> String {
    ["message", "error"]
        .iter()
        .find_map(|key| body.get(key).and_then(value_to_string))
        .unwrap_or_else(|| REJECTED_FALLBACK.to_string())
}
