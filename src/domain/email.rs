//! Email value object.

use serde::{Deserialize, Serialize};

use crate::config::MIN_EMAIL_LENGTH;

/// Email address as supplied by the user.
///
/// Only a shape check is performed; no normalization takes place.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Email(String);

impl Email {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    /// True iff longer than three bytes and containing `@`.
    pub fn is_valid(&self) -> bool {
        self.0.len() > MIN_EMAIL_LENGTH && self.0.contains('@')
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

impl From<String> for Email {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl From<&str> for Email {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl std::fmt::Display for Email {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}
