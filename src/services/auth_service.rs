//! Authentication service - Registration, login and token verification.
//!
//! Password hashing lives in the domain `PasswordHash` value object; this
//! service only orchestrates it with the user repository and JWT issuing.

use async_trait::async_trait;
use chrono::{TimeDelta, Utc};
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

use crate::config::JwtSettings;
use crate::domain::{Email, NewUser, PasswordHash, User};
use crate::errors::{AppError, AppResult};
use crate::infra::UnitOfWork;

/// JWT claims payload
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Claims {
    pub user_id: i64,
    pub email: String,
    pub iat: i64,
    pub exp: i64,
}

/// Result of a successful login.
#[derive(Debug, Clone)]
pub struct LoginResult {
    pub user: User,
    pub token: String,
}

/// Authentication service trait for dependency injection.
#[async_trait]
pub trait AuthService: Send + Sync {
    /// Register a new user
    async fn register(&self, username: String, email: String, password: String)
        -> AppResult<User>;

    /// Check credentials and issue a JWT
    async fn login(&self, email: String, password: String) -> AppResult<LoginResult>;

    /// Verify JWT token and extract claims
    fn verify_token(&self, token: &str) -> AppResult<Claims>;
}

/// Sign a token for `user` with the current secret.
fn generate_token(user: &User, jwt: &JwtSettings) -> AppResult<String> {
    let now = Utc::now();
    let expires_at = TimeDelta::try_hours(jwt.expiration_hours)
        .and_then(|ttl| now.checked_add_signed(ttl))
        .ok_or_else(|| {
            AppError::internal(format!(
                "token expiry of {} hours is out of range",
                jwt.expiration_hours
            ))
        })?;

    let claims = Claims {
        user_id: user.id,
        email: user.email.as_str().to_string(),
        iat: now.timestamp(),
        exp: expires_at.timestamp(),
    };

    let token = encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(jwt.secret_bytes()),
    )?;

    Ok(token)
}

/// Decode against the current secret, then the previous one if configured.
fn verify_token_internal(token: &str, jwt: &JwtSettings) -> AppResult<Claims> {
    let validation = Validation::default();

    match decode::<Claims>(token, &DecodingKey::from_secret(jwt.secret_bytes()), &validation) {
        Ok(data) => Ok(data.claims),
        Err(err) => match jwt.previous_secret_bytes() {
            Some(previous) => {
                let data =
                    decode::<Claims>(token, &DecodingKey::from_secret(previous), &validation)?;
                tracing::debug!(user_id = data.claims.user_id, "token accepted by previous secret");
                Ok(data.claims)
            }
            None => Err(err.into()),
        },
    }
}

/// Concrete implementation of AuthService using Unit of Work.
pub struct Authenticator<U: UnitOfWork> {
    uow: Arc<U>,
    jwt: JwtSettings,
}

impl<U: UnitOfWork> Authenticator<U> {
    /// Create new auth service instance with Unit of Work
    pub fn new(uow: Arc<U>, jwt: JwtSettings) -> Self {
        Self { uow, jwt }
    }
}

#[async_trait]
impl<U: UnitOfWork> AuthService for Authenticator<U> {
    async fn register(
        &self,
        username: String,
        email: String,
        password: String,
    ) -> AppResult<User> {
        let email = Email::new(email);
        if !email.is_valid() {
            return Err(AppError::validation("invalid email"));
        }

        let password_hash = PasswordHash::new(&password)?;

        if self.uow.users().find_by_email(&email).await?.is_some() {
            return Err(AppError::conflict("User"));
        }

        let user = self
            .uow
            .users()
            .create(NewUser::new(username, email, password_hash))
            .await?;

        tracing::info!(user_id = user.id, "user registered");
        Ok(user)
    }

    async fn login(&self, email: String, password: String) -> AppResult<LoginResult> {
        let user = self
            .uow
            .users()
            .find_by_email(&Email::new(email))
            .await?
            .ok_or_else(|| AppError::auth("user not found"))?;

        if !user.password_hash.verify(&password) {
            tracing::info!(user_id = user.id, "login rejected: invalid password");
            return Err(AppError::auth("invalid password"));
        }

        let token = generate_token(&user, &self.jwt)?;
        tracing::info!(user_id = user.id, "user logged in");

        Ok(LoginResult { user, token })
    }

    fn verify_token(&self, token: &str) -> AppResult<Claims> {
        verify_token_internal(token, &self.jwt)
    }
}
