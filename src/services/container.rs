//! Service Container - Centralized service access.
//!
//! Depends on service traits, not implementations, so the HTTP layer can be
//! wired against real services or test doubles alike.

use std::sync::Arc;

use super::{
    AuthService, Authenticator, ReferenceManager, ReferenceService, ResumeManager, ResumeService,
};
use crate::config::JwtSettings;
use crate::infra::{Persistence, UnitOfWork};

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// Service container trait for dependency injection.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
pub trait ServiceContainer: Send + Sync {
    /// Get authentication service
    fn auth(&self) -> Arc<dyn AuthService>;

    /// Get résumé service
    fn resumes(&self) -> Arc<dyn ResumeService>;

    /// Get reference table service
    fn references(&self) -> Arc<dyn ReferenceService>;
}

/// Concrete implementation of ServiceContainer
pub struct Services {
    auth_service: Arc<dyn AuthService>,
    resume_service: Arc<dyn ResumeService>,
    reference_service: Arc<dyn ReferenceService>,
}

impl Services {
    /// Wire every service over one Unit of Work
    pub fn from_uow<U: UnitOfWork + 'static>(uow: Arc<U>, jwt: JwtSettings) -> Self {
        Self {
            auth_service: Arc::new(Authenticator::new(uow.clone(), jwt)),
            resume_service: Arc::new(ResumeManager::new(uow.clone())),
            reference_service: Arc::new(ReferenceManager::new(uow)),
        }
    }

    /// Create service container from database connection and token settings
    pub fn from_connection(db: Arc<sea_orm::DatabaseConnection>, jwt: JwtSettings) -> Self {
        Self::from_uow(Arc::new(Persistence::new(db)), jwt)
    }
}

impl ServiceContainer for Services {
    fn auth(&self) -> Arc<dyn AuthService> {
        self.auth_service.clone()
    }

    fn resumes(&self) -> Arc<dyn ResumeService> {
        self.resume_service.clone()
    }

    fn references(&self) -> Arc<dyn ReferenceService> {
        self.reference_service.clone()
    }
}
