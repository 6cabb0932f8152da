use serde::{Deserialize, Serialize};

use super::lenient_string;

/// Which library a resource listing asks for.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ResourceKind {
    #[serde(rename = "LIBRO")]
    Book,
    #[serde(rename = "PRACTICA")]
    Practice,
}

impl ResourceKind {
    /// Label shown when a resource has no `TIPO` of its own.
    pub fn default_label(&self) -> &'static str {
        match self {
            ResourceKind::Book => "Libro",
            ResourceKind::Practice => "Práctica",
        }
    }
}

/// A library book or practice document.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Resource {
    #[serde(rename = "ID", default, deserialize_with = "lenient_string")]
    pub id: Option<String>,
    #[serde(rename = "TIPO", default, deserialize_with = "lenient_string")]
    pub kind: Option<String>,
    #[serde(rename = "TITULO", default, deserialize_with = "lenient_string")]
    pub title: Option<String>,
    #[serde(rename = "DESCRIPCION", default, deserialize_with = "lenient_string")]
    pub description: Option<String>,
    #[serde(rename = "ENLACE", default, deserialize_with = "lenient_string")]
    pub link: Option<String>,
    #[serde(rename = "FECHA_REGISTRO", default, deserialize_with = "lenient_string")]
    pub registered_at: Option<String>,
}

impl Resource {
    /// Whether the "open" action is available.
    pub fn has_link(&self) -> bool {
        self.link.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_resource_from_backend_row() {
        let row = json!({
            "ID": 42,
            "TIPO": "LIBRO",
            "TITULO": "Aritmética",
            "DESCRIPCION": null,
            "ENLACE": "https://drive.example/aritmetica.pdf",
            "FECHA_REGISTRO": "2024-03-15T10:00:00Z"
        });
        let resource: Resource = serde_json::from_value(row).unwrap();
        assert_eq!(resource.id.as_deref(), Some("42"));
        assert_eq!(resource.title.as_deref(), Some("Aritmética"));
        assert_eq!(resource.description, None);
        assert!(resource.has_link());
    }

    #[test]
    fn test_blank_link_disables_open() {
        let resource: Resource =
            serde_json::from_value(json!({"TITULO": "x", "ENLACE": " "})).unwrap();
        assert!(!resource.has_link());
        let resource: Resource = serde_json::from_value(json!({})).unwrap();
        assert!(!resource.has_link());
    }

    #[test]
    fn test_kind_serializes_to_wire_code() {
        assert_eq!(serde_json::to_value(ResourceKind::Book).unwrap(), json!("LIBRO"));
        assert_eq!(serde_json::to_value(ResourceKind::Practice).unwrap(), json!("PRACTICA"));
    }
}
