//! Application services layer - Use cases and business logic.
//!
//! Services orchestrate domain logic and infrastructure to fulfill
//! application use cases. They depend on abstractions (traits) for
//! dependency inversion.
//!
//! All services reach their repositories through the Unit of Work.

mod auth_service;
pub mod container;
mod reference_service;
mod resume_service;

// Service Container
pub use container::{ServiceContainer, Services};

// Service traits and implementations
pub use auth_service::{AuthService, Authenticator, Claims, LoginResult};
pub use reference_service::{ReferenceManager, ReferenceService};
pub use resume_service::{ResumeManager, ResumeService};

#[cfg(any(test, feature = "test-utils"))]
pub use container::MockServiceContainer;
