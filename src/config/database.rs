//! Database connection descriptor loaded from a YAML file.
//!
//! ```yaml
//! database:
//!   host: localhost
//!   port: 5432
//!   user: postgres
//!   password: password
//!   name: resume_api
//! ```

use std::path::Path;

use serde::Deserialize;

use crate::errors::{AppError, AppResult};

/// Connection parameters for the relational store.
#[derive(Clone, Deserialize, PartialEq, Eq)]
pub struct DbConfig {
    pub host: String,
    pub port: u16,
    pub user: String,
    pub password: String,
    pub name: String,
}

impl std::fmt::Debug for DbConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DbConfig")
            .field("host", &self.host)
            .field("port", &self.port)
            .field("user", &self.user)
            .field("password", &"[REDACTED]")
            .field("name", &self.name)
            .finish()
    }
}

#[derive(Deserialize)]
struct DbConfigFile {
    database: DbConfig,
}

impl DbConfig {
    /// Read and parse the descriptor at `path`.
    pub fn load(path: impl AsRef<Path>) -> AppResult<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| {
            AppError::internal(format!("Failed to read {}: {}", path.display(), e))
        })?;
        Self::from_yaml(&content)
    }

    /// Parse a descriptor from YAML text.
    pub fn from_yaml(content: &str) -> AppResult<Self> {
        let file: DbConfigFile = serde_yaml::from_str(content)
            .map_err(|e| AppError::internal(format!("Invalid database config: {}", e)))?;
        Ok(file.database)
    }

    /// Connection URL understood by SeaORM.
    pub fn url(&self) -> String {
        format!(
            "postgres://{}:{}@{}:{}/{}",
            self.user, self.password, self.host, self.port, self.name
        )
    }
}
