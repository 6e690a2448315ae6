//! Domain layer - Core business entities and logic
//!
//! This module contains the core domain models that represent
//! business concepts independent of infrastructure concerns.
//!
//! Contains: the résumé aggregate, the user entity, reference rows and
//! the `Email` / `PasswordHash` value objects.

pub mod email;
pub mod password;
pub mod reference;
pub mod resume;
pub mod user;

pub use email::Email;
pub use password::PasswordHash;
pub use reference::{Language, Os, ReferenceEntry, ReferenceKind, Tool};
pub use resume::{Experience, Resume, Skill};
pub use user::{NewUser, User};
