//! Library resources: books and practice documents.

use serde::Serialize;

use crate::backend::Backend;
use crate::error::ApiError;
use crate::models::{decode_list, search_term, Resource, ResourceKind};

pub const LIST_RESOURCES_PATH: &str = "/administrador/recursos/listar-recursos";

#[derive(Debug, Serialize)]
struct ListResourcesRequest<'a> {
    #[serde(rename = "TIPO")]
    kind: ResourceKind,
    #[serde(rename = "CRITERIO_BUSQUEDA", skip_serializing_if = "Option::is_none")]
    criterio: Option<&'a str>,
}

/// List resources of one kind, optionally filtered by a search term.
pub async fn list(
    backend: &impl Backend,
    kind: ResourceKind,
    criterio: Option<&str>,
) -> Result<Vec<Resource>, ApiError> {
    let request = ListResourcesRequest {
        kind,
        criterio: search_term(criterio),
    };
    let value = backend.post(LIST_RESOURCES_PATH, &request).await?;
    decode_list(value)
}
