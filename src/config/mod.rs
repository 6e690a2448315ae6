//! Application configuration module
//!
//! Handles environment variables, the YAML database descriptor and
//! application-wide constants.

mod constants;
mod database;
mod settings;

pub use constants::*;
pub use database::DbConfig;
pub use settings::{Config, JwtSettings};
