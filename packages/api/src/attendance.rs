//! Attendance history of a student.

use serde::Serialize;

use crate::backend::Backend;
use crate::error::ApiError;
use crate::models::{decode_list, AttendanceRecord};

pub const QUERY_ATTENDANCE_PATH: &str = "/input-controls/consultar-asistencia-cepre";

#[derive(Debug, Serialize)]
struct AttendanceRequest<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    dni: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    id_proceso: Option<i64>,
}

/// Query attendance for `dni`, optionally restricted to one admission process.
pub async fn query(
    backend: &impl Backend,
    dni: Option<&str>,
    id_proceso: Option<i64>,
) -> Result<Vec<AttendanceRecord>, ApiError> {
    let request = AttendanceRequest {
        dni: dni.map(str::trim).filter(|d| !d.is_empty()),
        id_proceso,
    };
    let value = backend.post(QUERY_ATTENDANCE_PATH, &request).await?;
    decode_list(value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::aggregate::AttendanceStatus;
    use crate::backend::mock::MockBackend;
    use serde_json::json;

    #[tokio::test]
    async fn test_query_attendance() {
        let backend = MockBackend::new().respond(
            QUERY_ATTENDANCE_PATH,
            Ok(json!({"success": true, "data": [
                {
                    "FECHA": "2024-03-15",
                    "ESTADO": "ASISTIO",
                    "HORA_ENTRADA": "07:55",
                    "CLASE": "Aula 3"
                },
                {"FECHA": "2024-03-16", "ESTADO": "T", "HORA_ENTRADA": "08:20"}
            ]})),
        );

        let records = query(&backend, Some("12345678"), Some(4)).await.unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].category(), AttendanceStatus::Present);
        assert_eq!(records[0].class_name.as_deref(), Some("Aula 3"));
        assert_eq!(records[1].category(), AttendanceStatus::Late);
        assert_eq!(
            backend.last_body(QUERY_ATTENDANCE_PATH),
            Some(json!({"dni": "12345678", "id_proceso": 4}))
        );
    }

    #[tokio::test]
    async fn test_absent_arguments_are_omitted() {
        let backend = MockBackend::new().respond(QUERY_ATTENDANCE_PATH, Ok(json!([])));
        query(&backend, None, None).await.unwrap();
        assert_eq!(backend.last_body(QUERY_ATTENDANCE_PATH), Some(json!({})));
    }
}
