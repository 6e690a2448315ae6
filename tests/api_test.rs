//! Integration tests for the résumé and lookup endpoints.
//!
//! These tests drive the real router and services over in-memory
//! repositories, without requiring a database.

mod common;

use axum::http::{Method, StatusCode};
use serde_json::json;

use common::{send, send_raw, test_app};
use resume_api::domain::ReferenceKind;
use resume_api::infra::ReferenceRepository;

fn scenario_body() -> serde_json::Value {
    json!({
        "user_id": 1,
        "title": "SWE",
        "skills": [{"type": "language", "master_id": 1, "level": "expert", "years": 5}]
    })
}

// =============================================================================
// Root and health
// =============================================================================

#[tokio::test]
async fn test_root() {
    let (app, _, _) = test_app();
    let (status, body) = send(&app, Method::GET, "/", None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, "Hello, World!");
}

#[tokio::test]
async fn test_health_without_database() {
    let (app, _, _) = test_app();
    let (status, body) = send(&app, Method::GET, "/health", None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "healthy");
    assert_eq!(body["services"]["database"]["status"], "unchecked");
}

#[tokio::test]
async fn test_openapi_document_served() {
    let (app, _, _) = test_app();
    let (status, body) = send(&app, Method::GET, "/api-docs/openapi.json", None).await;

    assert_eq!(status, StatusCode::OK);
    assert!(body["paths"]["/api/v1/resume"].is_object());
}

// =============================================================================
// Résumé CRUD
// =============================================================================

#[tokio::test]
async fn test_create_resume() {
    let (app, _, _) = test_app();
    let (status, body) = send(&app, Method::POST, "/api/v1/resume", Some(scenario_body())).await;

    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["skills"][0]["years"], 5);
    assert_eq!(body["skills"][0]["type"], "language");
    assert_eq!(body["title"], "SWE");
    assert_eq!(body["verified"], false);
    assert_eq!(body["experiences"], json!([]));

    let id = body["id"].as_i64().unwrap();
    assert!(id > 0);
    assert_eq!(body["skills"][0]["resume_id"], id);
    assert!(body["created_at"].is_string());
}

#[tokio::test]
async fn test_create_resume_rejects_invalid() {
    let (app, _, _) = test_app();
    let (status, body) = send(
        &app,
        Method::POST,
        "/api/v1/resume",
        Some(json!({"user_id": 0, "title": "SWE"})),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "invalid resume");
}

#[tokio::test]
async fn test_create_resume_malformed_json() {
    let (app, _, _) = test_app();
    let (status, body) = send_raw(&app, Method::POST, "/api/v1/resume", "{\"title\": ").await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"].is_string());
}

#[tokio::test]
async fn test_get_missing_resume() {
    let (app, _, _) = test_app();
    let (status, body) = send(&app, Method::GET, "/api/v1/resume/999", None).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body, json!({"error": "not found"}));
}

#[tokio::test]
async fn test_get_resume_invalid_id() {
    let (app, _, _) = test_app();
    let (status, body) = send(&app, Method::GET, "/api/v1/resume/abc", None).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body, json!({"error": "invalid id"}));

    let (status, body) = send(&app, Method::GET, "/api/v1/resume/user/abc", None).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body, json!({"error": "invalid user_id"}));
}

#[tokio::test]
async fn test_get_resume_after_create() {
    let (app, _, _) = test_app();
    let (_, created) = send(&app, Method::POST, "/api/v1/resume", Some(scenario_body())).await;
    let id = created["id"].as_i64().unwrap();

    let (status, body) = send(&app, Method::GET, &format!("/api/v1/resume/{id}"), None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, created);
}

#[tokio::test]
async fn test_list_resumes_and_by_user() {
    let (app, _, _) = test_app();
    send(&app, Method::POST, "/api/v1/resume", Some(scenario_body())).await;
    send(
        &app,
        Method::POST,
        "/api/v1/resume",
        Some(json!({"user_id": 2, "title": "Designer"})),
    )
    .await;

    let (status, all) = send(&app, Method::GET, "/api/v1/resume", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(all.as_array().unwrap().len(), 2);

    let (status, mine) = send(&app, Method::GET, "/api/v1/resume/user/2", None).await;
    assert_eq!(status, StatusCode::OK);
    let mine = mine.as_array().unwrap();
    assert_eq!(mine.len(), 1);
    assert_eq!(mine[0]["title"], "Designer");

    let (status, none) = send(&app, Method::GET, "/api/v1/resume/user/42", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(none, json!([]));
}

#[tokio::test]
async fn test_update_resume_replaces_children() {
    let (app, _, _) = test_app();
    let (_, created) = send(&app, Method::POST, "/api/v1/resume", Some(scenario_body())).await;
    let id = created["id"].as_i64().unwrap();

    let (status, body) = send(
        &app,
        Method::PUT,
        &format!("/api/v1/resume/{id}"),
        Some(json!({
            "id": 12345,
            "user_id": 1,
            "title": "Staff SWE",
            "summary": "Ten years of backend work",
            "experiences": [{"company": "Acme", "position": "Lead", "start_date": "2019-04"}]
        })),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["id"], id);
    assert_eq!(body["title"], "Staff SWE");
    assert_eq!(body["skills"], json!([]));
    assert_eq!(body["experiences"][0]["company"], "Acme");
    assert_eq!(body["experiences"][0]["resume_id"], id);
    assert_eq!(body["created_at"], created["created_at"]);
}

#[tokio::test]
async fn test_update_missing_resume() {
    let (app, _, _) = test_app();
    let (status, body) = send(&app, Method::PUT, "/api/v1/resume/7", Some(scenario_body())).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "not found");
}

#[tokio::test]
async fn test_delete_resume() {
    let (app, _, _) = test_app();
    let (_, created) = send(&app, Method::POST, "/api/v1/resume", Some(scenario_body())).await;
    let uri = format!("/api/v1/resume/{}", created["id"]);

    let (status, body) = send(&app, Method::DELETE, &uri, None).await;
    assert_eq!(status, StatusCode::NO_CONTENT);
    assert_eq!(body, serde_json::Value::Null);

    let (status, _) = send(&app, Method::GET, &uri, None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    // Deleting again is still a success
    let (status, _) = send(&app, Method::DELETE, &uri, None).await;
    assert_eq!(status, StatusCode::NO_CONTENT);
}

// =============================================================================
// Lookup tables
// =============================================================================

#[tokio::test]
async fn test_reference_lists() {
    let (app, uow, _) = test_app();
    uow.references
        .create(ReferenceKind::Language, "Rust".to_string())
        .await
        .unwrap();
    uow.references
        .create(ReferenceKind::Tool, "Docker".to_string())
        .await
        .unwrap();

    let (status, languages) = send(&app, Method::GET, "/api/v1/languages", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(languages, json!([{"id": 1, "name": "Rust"}]));

    let (status, tools) = send(&app, Method::GET, "/api/v1/tools", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(tools, json!([{"id": 1, "name": "Docker"}]));

    let (status, os) = send(&app, Method::GET, "/api/v1/os", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(os, json!([]));
}

#[tokio::test]
async fn test_seed_fills_every_table_once() {
    use resume_api::commands::seed::{seed_all, SeedReport};
    use resume_api::config::{
        SEED_LANGUAGES, SEED_OSES, SEED_RESUME_COUNT, SEED_SKILLS_PER_RESUME, SEED_TOOLS,
        SEED_USER_COUNT, SEED_USER_PASSWORD,
    };

    let (app, uow, _) = test_app();
    let report = seed_all(&uow).await.unwrap();
    assert_eq!(
        report,
        SeedReport {
            references: SEED_LANGUAGES.len() + SEED_TOOLS.len() + SEED_OSES.len(),
            users: SEED_USER_COUNT,
            resumes: SEED_RESUME_COUNT,
        }
    );

    // Second run leaves every table alone
    assert_eq!(seed_all(&uow).await.unwrap(), SeedReport::default());

    let (_, languages) = send(&app, Method::GET, "/api/v1/languages", None).await;
    assert_eq!(languages.as_array().unwrap().len(), SEED_LANGUAGES.len());
    assert_eq!(languages[0]["name"], SEED_LANGUAGES[0]);

    let (status, resumes) = send(&app, Method::GET, "/api/v1/resume", None).await;
    assert_eq!(status, StatusCode::OK);
    let resumes = resumes.as_array().unwrap();
    assert_eq!(resumes.len(), SEED_RESUME_COUNT);
    assert_eq!(resumes[0]["user_id"], 1);
    assert_eq!(resumes[0]["skills"].as_array().unwrap().len(), SEED_SKILLS_PER_RESUME);

    let (status, body) = send(
        &app,
        Method::POST,
        "/login",
        Some(json!({"email": "user001@example.com", "password": SEED_USER_PASSWORD})),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["username"], "dummy_user_001");
}
