//! # Wire models for the CEPRE backend
//!
//! The backend speaks upper-case Spanish keys (`TITULO`, `AP_PATERNO`, `ESTADO`, ...)
//! and is loose about types: ids arrive as numbers or strings, optional columns
//! may be missing, `null` or blank. Every field here is therefore optional and
//! deserialised through [`lenient_string`].
//!
//! ## Types
//!
//! | Struct | Endpoint |
//! |--------|----------|
//! | [`Resource`] / [`ResourceKind`] | `listar-recursos` (books and practice documents) |
//! | [`Teacher`] | `listar-profesores` |
//! | [`AttendanceRecord`] | `consultar-asistencia-cepre` |
//!
//! ## List envelopes
//!
//! List endpoints answer either `{"success": true, "data": [...]}` or a bare array.
//! [`decode_list`] accepts both; any other shape is an empty list, and an explicit
//! `success: false` becomes [`ApiError::Rejected`].

mod attendance;
mod resource;
mod teacher;

pub use attendance::AttendanceRecord;
pub use resource::{Resource, ResourceKind};
pub use teacher::Teacher;

use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer};
use serde_json::Value;

use crate::error::ApiError;

/// Render a scalar JSON value as text. Blank strings and non-scalars give `None`.
pub fn value_to_string(value: &Value) -> Option<String> {
    let text = match value {
        Value::String(s) => s.trim().to_string(),
        Value::Number(n) => n.to_string(),
        Value::Bool(b) => b.to_string(),
        _ => return None,
    };
    (!text.is_empty()).then_some(text)
}

/// Deserialize any scalar into `Option<String>` (see [`value_to_string`]).
pub(crate) fn lenient_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(value.as_ref().and_then(value_to_string))
}

/// Like [`lenient_string`], but string values are kept exactly as sent.
pub(crate) fn verbatim_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(match value {
        Some(Value::String(s)) => Some(s),
        other => other.as_ref().and_then(value_to_string),
    })
}

/// Trimmed search term, or `None` when blank.
pub fn search_term(term: Option<&str>) -> Option<&str> {
    term.map(str::trim).filter(|t| !t.is_empty())
}

/// Unwrap a list envelope into its rows.
fn rows(value: Value) -> Result<Vec<Value>, ApiError> {
    match value {
        Value::Array(items) => Ok(items),
        Value::Object(mut map) => {
            if map.get("success").and_then(Value::as_bool) == Some(false) {
                let message = map
                    .get("message")
                    .and_then(value_to_string)
                    .unwrap_or_else(|| "success: false".to_string());
                return Err(ApiError::Rejected(message));
            }
            match map.remove("data") {
                Some(Value::Array(items)) => Ok(items),
                _ => Ok(Vec::new()),
            }
        }
        _ => Ok(Vec::new()),
    }
}

/// Decode a list response. Rows that do not fit `T` are skipped.
pub fn decode_list<T: DeserializeOwned>(value: Value) -> Result<Vec<T>, ApiError> {
    Ok(rows(value)?
        .into_iter()
        .filter_map(|row| match serde_json::from_value(row) {
            Ok(item) => Some(item),
            Err(e) => {
                tracing::warn!("Skipping undecodable row: {}", e);
                None
            }
        })
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::aggregate::AttendanceStatus;
    use serde_json::json;

    #[test]
    fn test_decode_list_accepts_envelope_and_bare_array() {
        let wrapped = json!({"success": true, "data": [{"TITULO": "Álgebra"}]});
        let bare = json!([{"TITULO": "Álgebra"}, {"TITULO": "Física"}]);

        let from_wrapped: Vec<Resource> = decode_list(wrapped).unwrap();
        let from_bare: Vec<Resource> = decode_list(bare).unwrap();

        assert_eq!(from_wrapped.len(), 1);
        assert_eq!(from_wrapped[0].title.as_deref(), Some("Álgebra"));
        assert_eq!(from_bare.len(), 2);
    }

    #[test]
    fn test_decode_list_other_shapes_are_empty() {
        assert!(decode_list::<Resource>(json!({"data": {"TITULO": "x"}})).unwrap().is_empty());
        assert!(decode_list::<Resource>(json!({"message": "ok"})).unwrap().is_empty());
        assert!(decode_list::<Resource>(json!("nope")).unwrap().is_empty());
        assert!(decode_list::<Resource>(Value::Null).unwrap().is_empty());
    }

    #[test]
    fn test_decode_list_explicit_failure() {
        let err = decode_list::<Teacher>(json!({"success": false, "message": "Token inválido"}))
            .unwrap_err();
        assert_eq!(err, ApiError::Rejected("Token inválido".to_string()));
    }

    #[test]
    fn test_decode_list_skips_bad_rows() {
        let value = json!([{"ESTADO": "A"}, "garbage", {"ESTADO": "T"}]);
        let records: Vec<AttendanceRecord> = decode_list(value).unwrap();
        assert_eq!(records.len(), 2);
    }

    #[test]
    fn test_status_code_is_kept_verbatim() {
        let value = json!([{"ESTADO": " A "}, {"ESTADO": "a"}, {"ESTADO": 1}]);
        let records: Vec<AttendanceRecord> = decode_list(value).unwrap();
        assert_eq!(records[0].status.as_deref(), Some(" A "));
        assert_eq!(records[0].category(), AttendanceStatus::Absent);
        assert_eq!(records[1].category(), AttendanceStatus::Present);
        assert_eq!(records[2].status.as_deref(), Some("1"));
    }

    #[test]
    fn test_search_term() {
        assert_eq!(search_term(Some("  algebra ")), Some("algebra"));
        assert_eq!(search_term(Some("   ")), None);
        assert_eq!(search_term(None), None);
    }
}
