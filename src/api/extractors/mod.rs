//! Custom extractors mapping rejections onto `AppError`.

mod id_path;
mod validated_json;

pub use id_path::{IdPath, UserIdPath};
pub use validated_json::{AppJson, ValidatedJson};
