//! Teacher directory.

use serde::Serialize;

use crate::backend::Backend;
use crate::error::ApiError;
use crate::models::{decode_list, search_term, Teacher};

pub const LIST_TEACHERS_PATH: &str = "/administrador/profesores/listar-profesores";

#[derive(Debug, Serialize)]
struct ListTeachersRequest<'a> {
    #[serde(rename = "CRITERIO_BUSQUEDA", skip_serializing_if = "Option::is_none")]
    criterio: Option<&'a str>,
}

pub async fn list(
    backend: &impl Backend,
    criterio: Option<&str>,
) -> Result<Vec<Teacher>, ApiError> {
    let request = ListTeachersRequest {
        criterio: search_term(criterio),
    };
    let value = backend.post(LIST_TEACHERS_PATH, &request).await?;
    decode_list(value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backend::mock::MockBackend;
    use serde_json::json;

    #[tokio::test]
    async fn test_list_teachers() {
        let backend = MockBackend::new().respond(
            LIST_TEACHERS_PATH,
            Ok(json!([{
                "ID": 7,
                "NOMBRES": "Rosa",
                "AP_PATERNO": "Mendoza",
                "EMAIL": "rosa@cepre.edu.pe",
                "CELULAR": "987654321",
                "MATERIAS": "[\"Biología\"]"
            }])),
        );

        let teachers = list(&backend, None).await.unwrap();
        assert_eq!(teachers.len(), 1);
        assert_eq!(teachers[0].full_name(), "Rosa Mendoza");
        assert_eq!(teachers[0].subject_list(), vec!["Biología"]);
        assert_eq!(backend.last_body(LIST_TEACHERS_PATH), Some(json!({})));
    }

    #[tokio::test]
    async fn test_search_term_is_sent() {
        let backend = MockBackend::new().respond(LIST_TEACHERS_PATH, Ok(json!({"data": []})));
        list(&backend, Some("rosa")).await.unwrap();
        assert_eq!(
            backend.last_body(LIST_TEACHERS_PATH),
            Some(json!({"CRITERIO_BUSQUEDA": "rosa"}))
        );
    }
}
