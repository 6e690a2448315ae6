//! In-memory repositories and router wiring shared by the integration tests.

#![allow(dead_code)]

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use axum::{
    body::{to_bytes, Body},
    http::{header, Method, Request, StatusCode},
    Router,
};
use chrono::Utc;
use serde_json::Value;
use tower::ServiceExt;

use resume_api::api::{create_router, AppState};
use resume_api::config::JwtSettings;
use resume_api::domain::{Email, NewUser, ReferenceEntry, ReferenceKind, Resume, User};
use resume_api::errors::AppResult;
use resume_api::infra::{ReferenceRepository, ResumeRepository, UnitOfWork, UserRepository};
use resume_api::services::Services;

pub const TEST_SECRET: &str = "integration-test-secret-at-least-32-bytes";

#[derive(Default)]
pub struct InMemoryUsers {
    rows: Mutex<Vec<User>>,
}

#[async_trait]
impl UserRepository for InMemoryUsers {
    async fn create(&self, user: NewUser) -> AppResult<User> {
        let mut rows = self.rows.lock().unwrap();
        let user = user.into_user(rows.len() as i64 + 1);
        rows.push(user.clone());
        Ok(user)
    }

    async fn list(&self) -> AppResult<Vec<User>> {
        Ok(self.rows.lock().unwrap().clone())
    }

    async fn find_by_id(&self, id: i64) -> AppResult<Option<User>> {
        Ok(self.rows.lock().unwrap().iter().find(|u| u.id == id).cloned())
    }

    async fn find_by_email(&self, email: &Email) -> AppResult<Option<User>> {
        Ok(self
            .rows
            .lock()
            .unwrap()
            .iter()
            .find(|u| &u.email == email)
            .cloned())
    }
}

#[derive(Default)]
struct ResumeTables {
    resumes: Vec<Resume>,
    next_resume_id: i64,
    next_child_id: i64,
}

impl ResumeTables {
    fn assign_ids(&mut self, resume: &mut Resume) {
        for skill in &mut resume.skills {
            self.next_child_id += 1;
            skill.id = self.next_child_id;
            skill.resume_id = resume.id;
        }
        for experience in &mut resume.experiences {
            self.next_child_id += 1;
            experience.id = self.next_child_id;
            experience.resume_id = resume.id;
        }
    }
}

#[derive(Default)]
pub struct InMemoryResumes {
    tables: Mutex<ResumeTables>,
}

#[async_trait]
impl ResumeRepository for InMemoryResumes {
    async fn create(&self, mut resume: Resume) -> AppResult<Resume> {
        let mut tables = self.tables.lock().unwrap();
        tables.next_resume_id += 1;
        resume.id = tables.next_resume_id;
        tables.assign_ids(&mut resume);
        tables.resumes.push(resume.clone());
        Ok(resume)
    }

    async fn list(&self) -> AppResult<Vec<Resume>> {
        Ok(self.tables.lock().unwrap().resumes.clone())
    }

    async fn find_by_id(&self, id: i64) -> AppResult<Option<Resume>> {
        let tables = self.tables.lock().unwrap();
        Ok(tables.resumes.iter().find(|r| r.id == id).cloned())
    }

    async fn list_by_user(&self, user_id: i64) -> AppResult<Vec<Resume>> {
        let tables = self.tables.lock().unwrap();
        Ok(tables
            .resumes
            .iter()
            .filter(|r| r.user_id == user_id)
            .cloned()
            .collect())
    }

    async fn update(&self, mut resume: Resume) -> AppResult<Option<Resume>> {
        let mut tables = self.tables.lock().unwrap();
        let Some(pos) = tables.resumes.iter().position(|r| r.id == resume.id) else {
            return Ok(None);
        };

        resume.created_at = tables.resumes[pos].created_at;
        resume.updated_at = Utc::now();
        tables.assign_ids(&mut resume);
        tables.resumes[pos] = resume.clone();
        Ok(Some(resume))
    }

    async fn delete(&self, id: i64) -> AppResult<bool> {
        let mut tables = self.tables.lock().unwrap();
        let before = tables.resumes.len();
        tables.resumes.retain(|r| r.id != id);
        Ok(tables.resumes.len() != before)
    }
}

#[derive(Default)]
pub struct InMemoryReferences {
    rows: Mutex<Vec<(ReferenceKind, ReferenceEntry)>>,
}

#[async_trait]
impl ReferenceRepository for InMemoryReferences {
    async fn create(&self, kind: ReferenceKind, name: String) -> AppResult<ReferenceEntry> {
        let mut rows = self.rows.lock().unwrap();
        let id = rows.iter().filter(|(k, _)| *k == kind).count() as i64 + 1;
        let entry = ReferenceEntry { id, name };
        rows.push((kind, entry.clone()));
        Ok(entry)
    }

    async fn list(&self, kind: ReferenceKind) -> AppResult<Vec<ReferenceEntry>> {
        Ok(self
            .rows
            .lock()
            .unwrap()
            .iter()
            .filter(|(k, _)| *k == kind)
            .map(|(_, e)| e.clone())
            .collect())
    }

    async fn find_by_id(&self, kind: ReferenceKind, id: i64) -> AppResult<Option<ReferenceEntry>> {
        Ok(self
            .rows
            .lock()
            .unwrap()
            .iter()
            .find(|(k, e)| *k == kind && e.id == id)
            .map(|(_, e)| e.clone()))
    }

    async fn count(&self, kind: ReferenceKind) -> AppResult<u64> {
        Ok(self.rows.lock().unwrap().iter().filter(|(k, _)| *k == kind).count() as u64)
    }
}

/// Unit of Work over the in-memory repositories.
#[derive(Default, Clone)]
pub struct TestUow {
    pub users: Arc<InMemoryUsers>,
    pub resumes: Arc<InMemoryResumes>,
    pub references: Arc<InMemoryReferences>,
}

impl UnitOfWork for TestUow {
    fn users(&self) -> Arc<dyn UserRepository> {
        self.users.clone()
    }

    fn resumes(&self) -> Arc<dyn ResumeRepository> {
        self.resumes.clone()
    }

    fn references(&self) -> Arc<dyn ReferenceRepository> {
        self.references.clone()
    }
}

pub fn jwt_settings() -> JwtSettings {
    JwtSettings::new(TEST_SECRET, None, 24).unwrap()
}

/// Real services and router over a fresh in-memory store.
pub fn test_app() -> (Router, TestUow, Services) {
    let uow = TestUow::default();
    let (router, services) = app_over(uow.clone(), jwt_settings());
    (router, uow, services)
}

/// Router over an existing store with custom token settings.
pub fn app_over(uow: TestUow, jwt: JwtSettings) -> (Router, Services) {
    let services = Services::from_uow(Arc::new(uow), jwt);
    let router = create_router(AppState::from_container(&services));
    (router, services)
}

pub async fn send(
    app: &Router,
    method: Method,
    uri: &str,
    body: Option<Value>,
) -> (StatusCode, Value) {
    let builder = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(json) => builder
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(json.to_string())),
        None => builder.body(Body::empty()),
    }
    .unwrap();

    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let json = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap_or_else(|_| {
            Value::String(String::from_utf8_lossy(&bytes).into_owned())
        })
    };

    (status, json)
}

/// GET with an `Authorization` header.
pub async fn get_authorized(app: &Router, uri: &str, authorization: &str) -> (StatusCode, Value) {
    let request = Request::builder()
        .method(Method::GET)
        .uri(uri)
        .header(header::AUTHORIZATION, authorization)
        .body(Body::empty())
        .unwrap();

    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    (status, serde_json::from_slice(&bytes).unwrap_or(Value::Null))
}

/// Send a raw (possibly malformed) JSON body.
pub async fn send_raw(app: &Router, method: Method, uri: &str, body: &str) -> (StatusCode, Value) {
    let request = Request::builder()
        .method(method)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();

    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    (status, serde_json::from_slice(&bytes).unwrap_or(Value::Null))
}
