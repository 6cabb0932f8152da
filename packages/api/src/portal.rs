//! # Portal — the single entry point the views talk to
//!
//! [`Portal`] pairs a [`Backend`] with the session repository and exposes every
//! operation the dashboard needs. Login and logout go through it so the session is
//! written in exactly one place.
//!
//! Read operations never fail from the caller's point of view: they return a
//! [`Listing`] that is empty (and flagged) when the backend call failed.
//! [`Portal::overview`] runs its four reads concurrently and counts how many
//! degraded.

use store::{PortalConfig, Session, SessionStore, Sessions};

use crate::aggregate::AttendanceSummary;
use crate::backend::{Backend, HttpBackend};
use crate::error::LoginError;
use crate::listing::Listing;
use crate::models::{AttendanceRecord, Resource, ResourceKind, Teacher};
use crate::{attendance, auth, resources, teachers};

/// Headline numbers for the dashboard overview.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct DashboardStats {
    pub books: usize,
    pub practices: usize,
    pub teachers: usize,
    pub attendance_percent: u32,
    /// Number of reads that failed and contributed zero.
    pub degraded: usize,
}

#[derive(Clone, Debug)]
pub struct Portal<B: Backend, S: SessionStore> {
    backend: B,
    sessions: Sessions<S>,
}

impl<S: SessionStore + Clone> Portal<HttpBackend<S>, S> {
    /// Portal against the configured HTTP backend, sharing `store` for the token.
    pub fn connect(config: &PortalConfig, store: S) -> Self {
        tracing::info!("Using CEPRE backend at {}", config.api.base_url);
        let backend = HttpBackend::new(config.api.base_url.clone(), store.clone());
        Self::new(backend, store)
    }
}

impl<B: Backend, S: SessionStore> Portal<B, S> {
    pub fn new(backend: B, store: S) -> Self {
        Self {
            backend,
            sessions: Sessions::new(store),
        }
    }

    pub fn session(&self) -> Session {
        self.sessions.get_session()
    }

    /// Log in and persist the resulting session.
    pub async fn login(&self, dni: &str, celular: &str) -> Result<Session, LoginError> {
        let success = auth::login(&self.backend, dni, celular).await?;
        let session = self
            .sessions
            .set_session(success.profile, success.token)
            .map_err(|e| {
                tracing::error!("Failed to persist session: {}", e);
                LoginError::Session(e.to_string())
            })?;
        tracing::info!("Student signed in");
        Ok(session)
    }

    pub fn logout(&self) {
        self.sessions.clear_session();
        tracing::info!("Student signed out");
    }

    pub async fn list_resources(
        &self,
        kind: ResourceKind,
        criterio: Option<&str>,
    ) -> Listing<Resource> {
        Listing::from_result(
            kind.default_label(),
            resources::list(&self.backend, kind, criterio).await,
        )
    }

    pub async fn list_teachers(&self, criterio: Option<&str>) -> Listing<Teacher> {
        Listing::from_result("teachers", teachers::list(&self.backend, criterio).await)
    }

    /// Attendance for `dni`, or for the signed-in student when `dni` is `None`.
    pub async fn query_attendance(
        &self,
        dni: Option<&str>,
        id_proceso: Option<i64>,
    ) -> Listing<AttendanceRecord> {
        let stored = match dni {
            Some(_) => None,
            None => self.sessions.profile().dni(),
        };
        let dni = dni.or(stored.as_deref());
        Listing::from_result(
            "attendance",
            attendance::query(&self.backend, dni, id_proceso).await,
        )
    }

    /// Counts for the overview cards. All four reads run concurrently.
    pub async fn overview(&self) -> DashboardStats {
        let (books, practices, teachers, attendance) = futures::join!(
            self.list_resources(ResourceKind::Book, None),
            self.list_resources(ResourceKind::Practice, None),
            self.list_teachers(None),
            self.query_attendance(None, None),
        );

        let degraded = [
            books.is_failure(),
            practices.is_failure(),
            teachers.is_failure(),
            attendance.is_failure(),
        ]
        .into_iter()
        .filter(|failed| *failed)
        .count();
        if degraded > 0 {
            tracing::warn!("Overview loaded with {} failed read(s)", degraded);
        }

        DashboardStats {
            books: books.len(),
            practices: practices.len(),
            teachers: teachers.len(),
            attendance_percent: AttendanceSummary::from_records(&attendance.data).percentage,
            degraded,
        }
    }
}
