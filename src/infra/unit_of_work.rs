//! Unit of Work pattern implementation.
//!
//! Centralizes access to all repositories so services depend on a single
//! handle. Aggregate-level transactions live inside the repositories that
//! own the aggregate (see `ResumeStore`).

use sea_orm::DatabaseConnection;
use std::sync::Arc;

use super::repositories::{
    ReferenceRepository, ReferenceStore, ResumeRepository, ResumeStore, UserRepository, UserStore,
};

/// Unit of Work trait for dependency injection.
///
/// Services are generic over this trait; tests provide in-memory or mocked
/// repositories through their own implementation.
pub trait UnitOfWork: Send + Sync {
    /// Get user repository
    fn users(&self) -> Arc<dyn UserRepository>;

    /// Get résumé repository
    fn resumes(&self) -> Arc<dyn ResumeRepository>;

    /// Get reference table repository
    fn references(&self) -> Arc<dyn ReferenceRepository>;
}

/// Concrete implementation of UnitOfWork
pub struct Persistence {
    user_repo: Arc<UserStore>,
    resume_repo: Arc<ResumeStore>,
    reference_repo: Arc<ReferenceStore>,
}

impl Persistence {
    /// Create new UnitOfWork instance
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self {
            user_repo: Arc::new(UserStore::new(db.clone())),
            resume_repo: Arc::new(ResumeStore::new(db.clone())),
            reference_repo: Arc::new(ReferenceStore::new(db)),
        }
    }
}

impl UnitOfWork for Persistence {
    fn users(&self) -> Arc<dyn UserRepository> {
        self.user_repo.clone()
    }

    fn resumes(&self) -> Arc<dyn ResumeRepository> {
        self.resume_repo.clone()
    }

    fn references(&self) -> Arc<dyn ReferenceRepository> {
        self.reference_repo.clone()
    }
}
