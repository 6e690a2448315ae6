//! Application state - Dependency injection container.
//!
//! Provides centralized access to all application services and infrastructure.

use std::sync::Arc;

use crate::config::Config;
use crate::infra::Database;
use crate::services::{
    AuthService, ReferenceService, ResumeService, ServiceContainer, Services,
};

/// Application state containing all services (DI container).
#[derive(Clone)]
pub struct AppState {
    /// Authentication service
    pub auth_service: Arc<dyn AuthService>,
    /// Résumé service
    pub resume_service: Arc<dyn ResumeService>,
    /// Reference table service
    pub reference_service: Arc<dyn ReferenceService>,
    /// Database handle for health checks; absent when wired without one
    pub database: Option<Arc<Database>>,
}

impl AppState {
    /// Create application state from a database connection and config.
    pub fn from_config(database: Arc<Database>, config: &Config) -> Self {
        let container = Services::from_connection(database.get_connection(), config.jwt.clone());

        let mut state = Self::from_container(&container);
        state.database = Some(database);
        state
    }

    /// Take every service from a container, without a database handle.
    pub fn from_container(container: &dyn ServiceContainer) -> Self {
        Self::new(
            container.auth(),
            container.resumes(),
            container.references(),
        )
    }

    /// Create new application state with manually injected services.
    pub fn new(
        auth_service: Arc<dyn AuthService>,
        resume_service: Arc<dyn ResumeService>,
        reference_service: Arc<dyn ReferenceService>,
    ) -> Self {
        Self {
            auth_service,
            resume_service,
            reference_service,
            database: None,
        }
    }
}
