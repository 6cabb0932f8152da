use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::{lenient_string, value_to_string};

/// Name shown for a teacher with no name fields at all.
pub const UNKNOWN_TEACHER: &str = "Desconocido";

/// An entry of the teacher directory.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Teacher {
    #[serde(rename = "ID", default, deserialize_with = "lenient_string")]
    pub id: Option<String>,
    #[serde(rename = "NOMBRES", default, deserialize_with = "lenient_string")]
    pub names: Option<String>,
    #[serde(rename = "AP_PATERNO", default, deserialize_with = "lenient_string")]
    pub paternal_surname: Option<String>,
    #[serde(rename = "AP_MATERNO", default, deserialize_with = "lenient_string")]
    pub maternal_surname: Option<String>,
    #[serde(rename = "EMAIL", default, deserialize_with = "lenient_string")]
    pub email: Option<String>,
    #[serde(rename = "CELULAR", default, deserialize_with = "lenient_string")]
    pub phone: Option<String>,
    /// Either a list, a JSON-encoded list inside a string, or a single subject.
    #[serde(rename = "MATERIAS", default)]
    pub subjects: Option<Value>,
}

impl Teacher {
    pub fn full_name(&self) -> String {
        let parts: Vec<&str> = [&self.names, &self.paternal_surname, &self.maternal_surname]
            .into_iter()
            .filter_map(|part| part.as_deref())
            .collect();
        if parts.is_empty() {
            UNKNOWN_TEACHER.to_string()
        } else {
            parts.join(" ")
        }
    }

    /// Subjects as display badges.
    pub fn subject_list(&self) -> Vec<String> {
        match &self.subjects {
            None | Some(Value::Null) => Vec::new(),
            Some(Value::Array(items)) => items.iter().filter_map(value_to_string).collect(),
            Some(Value::String(raw)) => {
                let raw = raw.trim();
                if raw.is_empty() {
                    return Vec::new();
                }
                match serde_json::from_str::<Value>(raw) {
                    Ok(Value::Array(items)) => items.iter().filter_map(value_to_string).collect(),
                    _ => vec![raw.to_string()],
                }
            }
            Some(other) => value_to_string(other).into_iter().collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn teacher(value: Value) -> Teacher {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn test_full_name_joins_present_parts() {
        let t = teacher(json!({
            "NOMBRES": "Luis",
            "AP_PATERNO": "Quispe",
            "AP_MATERNO": "Huamán"
        }));
        assert_eq!(t.full_name(), "Luis Quispe Huamán");

        let t = teacher(json!({"NOMBRES": "Luis", "AP_MATERNO": "Huamán"}));
        assert_eq!(t.full_name(), "Luis Huamán");

        assert_eq!(teacher(json!({})).full_name(), "Desconocido");
    }

    #[test]
    fn test_subjects_from_encoded_list() {
        let t = teacher(json!({"MATERIAS": "[\"Álgebra\", \" Física \"]"}));
        assert_eq!(t.subject_list(), vec!["Álgebra", "Física"]);
    }

    #[test]
    fn test_subjects_from_plain_string() {
        let t = teacher(json!({"MATERIAS": "Química"}));
        assert_eq!(t.subject_list(), vec!["Química"]);

        // Valid JSON that is not a list is still a single subject
        let t = teacher(json!({"MATERIAS": "\"Química\""}));
        assert_eq!(t.subject_list(), vec!["\"Química\""]);
    }

    #[test]
    fn test_subjects_from_array_and_missing() {
        let t = teacher(json!({"MATERIAS": ["Historia", "Geografía"]}));
        assert_eq!(t.subject_list(), vec!["Historia", "Geografía"]);

        assert!(teacher(json!({})).subject_list().is_empty());
        assert!(teacher(json!({"MATERIAS": null})).subject_list().is_empty());
        assert!(teacher(json!({"MATERIAS": ""})).subject_list().is_empty());
    }

    #[test]
    fn test_numeric_phone_is_text() {
        let t = teacher(json!({"CELULAR": 987654321}));
        assert_eq!(t.phone.as_deref(), Some("987654321"));
    }
}
