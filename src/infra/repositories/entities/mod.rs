//! SeaORM entity definitions
//!
//! These are database-specific entities separate from domain models.

pub mod experience;
pub mod language;
pub mod os;
pub mod resume;
pub mod skill;
pub mod tool;
pub mod user;
