//! Lookup table handlers.

use axum::{extract::State, response::Json, routing::get, Router};

use crate::api::dto::ReferenceDto;
use crate::api::AppState;
use crate::domain::ReferenceKind;
use crate::errors::{AppResult, ErrorResponse};

/// Create reference routes (nested under `/api/v1`)
pub fn reference_routes() -> Router<AppState> {
    Router::new()
        .route("/languages", get(list_languages))
        .route("/tools", get(list_tools))
        .route("/os", get(list_os))
}

async fn list_kind(state: &AppState, kind: ReferenceKind) -> AppResult<Json<Vec<ReferenceDto>>> {
    let entries = state.reference_service.list(kind).await?;
    Ok(Json(entries.into_iter().map(ReferenceDto::from).collect()))
}

/// List programming languages
#[utoipa::path(
    get,
    path = "/api/v1/languages",
    tag = "Reference",
    responses(
        (status = 200, description = "All languages", body = [ReferenceDto]),
        (status = 500, description = "Store failure", body = ErrorResponse)
    )
)]
pub async fn list_languages(State(state): State<AppState>) -> AppResult<Json<Vec<ReferenceDto>>> {
    list_kind(&state, ReferenceKind::Language).await
}

/// List tools
#[utoipa::path(
    get,
    path = "/api/v1/tools",
    tag = "Reference",
    responses(
        (status = 200, description = "All tools", body = [ReferenceDto]),
        (status = 500, description = "Store failure", body = ErrorResponse)
    )
)]
pub async fn list_tools(State(state): State<AppState>) -> AppResult<Json<Vec<ReferenceDto>>> {
    list_kind(&state, ReferenceKind::Tool).await
}

/// List operating systems
#[utoipa::path(
    get,
    path = "/api/v1/os",
    tag = "Reference",
    responses(
        (status = 200, description = "All operating systems", body = [ReferenceDto]),
        (status = 500, description = "Store failure", body = ErrorResponse)
    )
)]
pub async fn list_os(State(state): State<AppState>) -> AppResult<Json<Vec<ReferenceDto>>> {
    list_kind(&state, ReferenceKind::Os).await
}
