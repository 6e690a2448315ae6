//! Application settings loaded from environment variables.

use std::env;

use super::constants::{
    DEFAULT_DATABASE_URL, DEFAULT_JWT_EXPIRATION_HOURS, DEFAULT_SERVER_HOST, DEFAULT_SERVER_PORT,
    MAX_JWT_EXPIRATION_HOURS, MIN_JWT_EXPIRATION_HOURS, MIN_JWT_SECRET_LENGTH,
};
use super::DbConfig;
use crate::errors::{AppError, AppResult};

/// Token signing settings.
#[derive(Clone)]
pub struct JwtSettings {
    secret: String,
    previous_secret: Option<String>,
    pub expiration_hours: i64,
}

impl std::fmt::Debug for JwtSettings {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("JwtSettings")
            .field("secret", &"[REDACTED]")
            .field(
                "previous_secret",
                &self.previous_secret.as_ref().map(|_| "[REDACTED]"),
            )
            .field("expiration_hours", &self.expiration_hours)
            .finish()
    }
}

impl JwtSettings {
    /// Build settings, rejecting secrets shorter than [`MIN_JWT_SECRET_LENGTH`]
    /// and expiry outside `MIN_JWT_EXPIRATION_HOURS..=MAX_JWT_EXPIRATION_HOURS`.
    pub fn new(
        secret: impl Into<String>,
        previous_secret: Option<String>,
        expiration_hours: i64,
    ) -> AppResult<Self> {
        let secret = secret.into();
        if secret.len() < MIN_JWT_SECRET_LENGTH {
            return Err(AppError::internal(format!(
                "JWT_SECRET must be at least {} characters long",
                MIN_JWT_SECRET_LENGTH
            )));
        }
        if !(MIN_JWT_EXPIRATION_HOURS..=MAX_JWT_EXPIRATION_HOURS).contains(&expiration_hours) {
            return Err(AppError::internal(format!(
                "JWT_EXPIRATION_HOURS must be between {} and {}, got {}",
                MIN_JWT_EXPIRATION_HOURS, MAX_JWT_EXPIRATION_HOURS, expiration_hours
            )));
        }
        // A short previous secret is ignored rather than fatal
        let previous_secret = previous_secret.filter(|s| s.len() >= MIN_JWT_SECRET_LENGTH);

        Ok(Self {
            secret,
            previous_secret,
            expiration_hours,
        })
    }

    /// Secret used to sign new tokens.
    pub fn secret_bytes(&self) -> &[u8] {
        self.secret.as_bytes()
    }

    /// Secret that signed tokens before the last rotation, if any.
    pub fn previous_secret_bytes(&self) -> Option<&[u8]> {
        self.previous_secret.as_deref().map(str::as_bytes)
    }
}

/// Application configuration
#[derive(Clone)]
pub struct Config {
    pub database_url: String,
    pub jwt: JwtSettings,
    pub server_host: String,
    pub server_port: u16,
}

impl std::fmt::Debug for Config {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Config")
            .field("database_url", &"[REDACTED]")
            .field("jwt", &self.jwt)
            .field("server_host", &self.server_host)
            .field("server_port", &self.server_port)
            .finish()
    }
}

impl Config {
    /// Load configuration from the process environment (and `.env`).
    ///
    /// When `db_config_path` is given the database URL is built from that
    /// YAML descriptor, otherwise `DATABASE_URL` is used.
    pub fn load(db_config_path: Option<&str>) -> AppResult<Self> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok(), db_config_path)
    }

    /// Load configuration through an arbitrary variable lookup.
    pub fn from_lookup<F>(lookup: F, db_config_path: Option<&str>) -> AppResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let secret = lookup("JWT_SECRET")
            .ok_or_else(|| AppError::internal("JWT_SECRET environment variable must be set"))?;

        let jwt = JwtSettings::new(
            secret,
            lookup("JWT_PREVIOUS_SECRET"),
            lookup("JWT_EXPIRATION_HOURS")
                .and_then(|v| v.parse().ok())
                .unwrap_or(DEFAULT_JWT_EXPIRATION_HOURS),
        )?;

        let database_url = match db_config_path {
            Some(path) => DbConfig::load(path)?.url(),
            None => lookup("DATABASE_URL").unwrap_or_else(|| DEFAULT_DATABASE_URL.to_string()),
        };

        Ok(Self {
            database_url,
            jwt,
            server_host: lookup("SERVER_HOST").unwrap_or_else(|| DEFAULT_SERVER_HOST.to_string()),
            server_port: lookup("SERVER_PORT")
                .and_then(|v| v.parse().ok())
                .unwrap_or(DEFAULT_SERVER_PORT),
        })
    }

    /// Get the full server address.
    pub fn server_addr(&self) -> String {
        format!("{}:{}", self.server_host, self.server_port)
    }
}
