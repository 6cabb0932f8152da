//! # API crate — CEPRE backend client and dashboard logic
//!
//! Everything the student dashboard does that is not rendering lives here: the HTTP
//! client, the wire models, one service per backend endpoint, the attendance
//! arithmetic and the route guard. The views only ever talk to [`Portal`].
//!
//! ## Modules
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`backend`] | The [`Backend`] seam and the `reqwest`-based [`HttpBackend`] with bearer auth |
//! | [`config`] | Loads [`store::PortalConfig`] from `.env`, `cepre.toml` and `CEPRE_API_URL` |
//! | [`error`] | [`ApiError`] for backend calls, [`LoginError`] for the login form |
//! | [`models`] | `Resource`, `Teacher`, `AttendanceRecord` and list-envelope decoding |
//! | [`auth`] | Student login by DNI and phone |
//! | [`resources`] | Books and practice documents |
//! | [`teachers`] | Teacher directory |
//! | [`attendance`] | Attendance history |
//! | [`listing`] | [`Listing`]: a read result that degrades to an empty list |
//! | [`aggregate`] | Status classification, attendance summary and filter |
//! | [`guard`] | Who may see the dashboard, and where `/` lands |
//! | [`portal`] | [`Portal`]: backend plus session, the facade used by the views |
//!
//! ## Endpoints
//!
//! Every call is a JSON `POST` relative to the configured base URL:
//!
//! - `/sistema/admin/login-estudiante-cepre`
//! - `/administrador/recursos/listar-recursos`
//! - `/administrador/profesores/listar-profesores`
//! - `/input-controls/consultar-asistencia-cepre`

pub mod aggregate;
pub mod attendance;
pub mod auth;
pub mod backend;
pub mod config;
pub mod error;
pub mod guard;
pub mod listing;
pub mod models;
pub mod portal;
pub mod resources;
pub mod teachers;

pub use aggregate::{AttendanceFilter, AttendanceStatus, AttendanceSummary};
pub use backend::{Backend, HttpBackend};
pub use config::load_config;
pub use error::{ApiError, LoginError};
pub use listing::Listing;
pub use models::{AttendanceRecord, Resource, ResourceKind, Teacher};
pub use portal::{DashboardStats, Portal};

pub use store::{PortalConfig, Profile, Session};
