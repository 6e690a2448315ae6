//! Résumé CRUD handlers.

use axum::{extract::State, http::StatusCode, response::Json, routing::get, Router};

use crate::api::dto::ResumeDto;
use crate::api::extractors::{AppJson, IdPath, UserIdPath};
use crate::api::AppState;
use crate::domain::Resume;
use crate::errors::{AppResult, ErrorResponse};

/// Create résumé routes (nested under `/api/v1/resume`)
pub fn resume_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(list_resumes).post(create_resume))
        .route(
            "/:id",
            get(get_resume).put(update_resume).delete(delete_resume),
        )
        .route("/user/:user_id", get(list_user_resumes))
}

fn to_dtos(resumes: Vec<Resume>) -> Vec<ResumeDto> {
    resumes.into_iter().map(ResumeDto::from).collect()
}

/// Create a résumé with its skills and experiences
#[utoipa::path(
    post,
    path = "/api/v1/resume",
    tag = "Resumes",
    request_body = ResumeDto,
    responses(
        (status = 201, description = "Résumé created", body = ResumeDto),
        (status = 400, description = "Malformed or invalid résumé", body = ErrorResponse),
        (status = 500, description = "Store failure", body = ErrorResponse)
    )
)]
pub async fn create_resume(
    State(state): State<AppState>,
    AppJson(payload): AppJson<ResumeDto>,
) -> AppResult<(StatusCode, Json<ResumeDto>)> {
    let saved = state.resume_service.create(Resume::from(payload)).await?;
    Ok((StatusCode::CREATED, Json(ResumeDto::from(saved))))
}

/// List all résumés
#[utoipa::path(
    get,
    path = "/api/v1/resume",
    tag = "Resumes",
    responses(
        (status = 200, description = "All résumés", body = [ResumeDto]),
        (status = 500, description = "Store failure", body = ErrorResponse)
    )
)]
pub async fn list_resumes(State(state): State<AppState>) -> AppResult<Json<Vec<ResumeDto>>> {
    let resumes = state.resume_service.list().await?;
    Ok(Json(to_dtos(resumes)))
}

/// Get a résumé by ID
#[utoipa::path(
    get,
    path = "/api/v1/resume/{id}",
    tag = "Resumes",
    params(("id" = i64, Path, description = "Résumé ID")),
    responses(
        (status = 200, description = "Résumé found", body = ResumeDto),
        (status = 400, description = "Invalid id", body = ErrorResponse),
        (status = 404, description = "Résumé not found", body = ErrorResponse)
    )
)]
pub async fn get_resume(
    State(state): State<AppState>,
    IdPath(id): IdPath,
) -> AppResult<Json<ResumeDto>> {
    let resume = state.resume_service.get(id).await?;
    Ok(Json(ResumeDto::from(resume)))
}

/// Replace a résumé and its children
#[utoipa::path(
    put,
    path = "/api/v1/resume/{id}",
    tag = "Resumes",
    params(("id" = i64, Path, description = "Résumé ID")),
    request_body = ResumeDto,
    responses(
        (status = 200, description = "Résumé updated", body = ResumeDto),
        (status = 400, description = "Invalid id or résumé", body = ErrorResponse),
        (status = 404, description = "Résumé not found", body = ErrorResponse)
    )
)]
pub async fn update_resume(
    State(state): State<AppState>,
    IdPath(id): IdPath,
    AppJson(payload): AppJson<ResumeDto>,
) -> AppResult<Json<ResumeDto>> {
    let saved = state
        .resume_service
        .update(id, Resume::from(payload))
        .await?;
    Ok(Json(ResumeDto::from(saved)))
}

/// Delete a résumé and its children
#[utoipa::path(
    delete,
    path = "/api/v1/resume/{id}",
    tag = "Resumes",
    params(("id" = i64, Path, description = "Résumé ID")),
    responses(
        (status = 204, description = "Résumé deleted"),
        (status = 400, description = "Invalid id", body = ErrorResponse),
        (status = 500, description = "Store failure", body = ErrorResponse)
    )
)]
pub async fn delete_resume(
    State(state): State<AppState>,
    IdPath(id): IdPath,
) -> AppResult<StatusCode> {
    state.resume_service.delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// List the résumés of one user
#[utoipa::path(
    get,
    path = "/api/v1/resume/user/{user_id}",
    tag = "Resumes",
    params(("user_id" = i64, Path, description = "Owner user ID")),
    responses(
        (status = 200, description = "Résumés of the user", body = [ResumeDto]),
        (status = 400, description = "Invalid user_id", body = ErrorResponse)
    )
)]
pub async fn list_user_resumes(
    State(state): State<AppState>,
    UserIdPath(user_id): UserIdPath,
) -> AppResult<Json<Vec<ResumeDto>>> {
    let resumes = state.resume_service.list_by_user(user_id).await?;
    Ok(Json(to_dtos(resumes)))
}
