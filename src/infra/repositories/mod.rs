//! Repository layer - Data access abstraction
//!
//! Repositories provide an abstraction over data persistence,
//! following the Repository pattern for clean separation of concerns.

mod base;
pub(crate) mod entities;
mod reference_repository;
mod resume_repository;
mod user_repository;

pub use reference_repository::{ReferenceRepository, ReferenceStore};
pub use resume_repository::{ResumeRepository, ResumeStore};
pub use user_repository::{UserRepository, UserStore};

// Export mocks for tests (both unit and integration)
#[cfg(any(test, feature = "test-utils"))]
pub use reference_repository::MockReferenceRepository;
#[cfg(any(test, feature = "test-utils"))]
pub use resume_repository::MockResumeRepository;
#[cfg(any(test, feature = "test-utils"))]
pub use user_repository::MockUserRepository;
