//! HTTP request handlers.

pub mod auth_handler;
pub mod reference_handler;
pub mod resume_handler;

pub use auth_handler::{auth_routes, session_routes};
pub use reference_handler::reference_routes;
pub use resume_handler::resume_routes;
