use serde::{Deserialize, Serialize};

use super::{lenient_string, verbatim_string};
use crate::aggregate::{classify, AttendanceStatus};

/// One day of attendance as reported by the backend.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct AttendanceRecord {
    #[serde(rename = "FECHA", default, deserialize_with = "lenient_string")]
    pub date: Option<String>,
    /// Free-text status code (`ASISTIO`, `T`, `PERMISO`, ...).
    #[serde(rename = "ESTADO", default, deserialize_with = "verbatim_string")]
    pub status: Option<String>,
    #[serde(rename = "HORA_ENTRADA", default, deserialize_with = "lenient_string")]
    pub entry_time: Option<String>,
    #[serde(rename = "CLASE", default, deserialize_with = "lenient_string")]
    pub class_name: Option<String>,
}

impl AttendanceRecord {
    pub fn category(&self) -> AttendanceStatus {
        classify(self.status.as_deref().unwrap_or_default())
    }
}
