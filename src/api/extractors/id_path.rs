//! Numeric path parameter extractors.

use axum::{
    async_trait,
    extract::{FromRequestParts, Path},
    http::request::Parts,
};

use crate::errors::AppError;

/// Single `i64` path segment; anything else is `400 {"error":"invalid id"}`.
#[derive(Debug, Clone, Copy)]
pub struct IdPath(pub i64);

/// Owner id segment; anything else is `400 {"error":"invalid user_id"}`.
#[derive(Debug, Clone, Copy)]
pub struct UserIdPath(pub i64);

async fn parse_i64<S>(parts: &mut Parts, state: &S, message: &str) -> Result<i64, AppError>
where
    S: Send + Sync,
{
    let Path(id) = Path::<i64>::from_request_parts(parts, state)
        .await
        .map_err(|_| AppError::bad_request(message))?;
    Ok(id)
}

#[async_trait]
impl<S> FromRequestParts<S> for IdPath
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        parse_i64(parts, state, "invalid id").await.map(IdPath)
    }
}

#[async_trait]
impl<S> FromRequestParts<S> for UserIdPath
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        parse_i64(parts, state, "invalid user_id").await.map(UserIdPath)
    }
}
