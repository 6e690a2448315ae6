//! Résumé service - Use cases over the résumé aggregate.

use async_trait::async_trait;
use chrono::Utc;
use std::sync::Arc;

use crate::domain::Resume;
use crate::errors::{AppError, AppResult, OptionExt};
use crate::infra::UnitOfWork;

/// Résumé service trait for dependency injection.
#[async_trait]
pub trait ResumeService: Send + Sync {
    /// Validate and persist a new résumé with its children
    async fn create(&self, resume: Resume) -> AppResult<Resume>;

    async fn list(&self) -> AppResult<Vec<Resume>>;

    /// Fetch one résumé; `NotFound` when absent
    async fn get(&self, id: i64) -> AppResult<Resume>;

    async fn list_by_user(&self, user_id: i64) -> AppResult<Vec<Resume>>;

    /// Replace the résumé stored under `id`; `NotFound` when absent
    async fn update(&self, id: i64, resume: Resume) -> AppResult<Resume>;

    /// Delete by id. Deleting a missing résumé is not an error.
    async fn delete(&self, id: i64) -> AppResult<()>;
}

/// Concrete implementation of ResumeService using Unit of Work.
pub struct ResumeManager<U: UnitOfWork> {
    uow: Arc<U>,
}

impl<U: UnitOfWork> ResumeManager<U> {
    pub fn new(uow: Arc<U>) -> Self {
        Self { uow }
    }
}

fn ensure_valid(resume: &Resume) -> AppResult<()> {
    if resume.is_valid() {
        Ok(())
    } else {
        Err(AppError::validation("invalid resume"))
    }
}

#[async_trait]
impl<U: UnitOfWork> ResumeService for ResumeManager<U> {
    async fn create(&self, mut resume: Resume) -> AppResult<Resume> {
        ensure_valid(&resume)?;

        let now = Utc::now();
        resume.id = 0;
        resume.created_at = now;
        resume.updated_at = now;

        let saved = self.uow.resumes().create(resume).await?;
        tracing::info!(resume_id = saved.id, user_id = saved.user_id, "resume created");
        Ok(saved)
    }

    async fn list(&self) -> AppResult<Vec<Resume>> {
        self.uow.resumes().list().await
    }

    async fn get(&self, id: i64) -> AppResult<Resume> {
        self.uow.resumes().find_by_id(id).await?.ok_or_not_found()
    }

    async fn list_by_user(&self, user_id: i64) -> AppResult<Vec<Resume>> {
        self.uow.resumes().list_by_user(user_id).await
    }

    async fn update(&self, id: i64, mut resume: Resume) -> AppResult<Resume> {
        resume.id = id;
        ensure_valid(&resume)?;

        let saved = self.uow.resumes().update(resume).await?.ok_or_not_found()?;
        tracing::info!(resume_id = saved.id, "resume updated");
        Ok(saved)
    }

    async fn delete(&self, id: i64) -> AppResult<()> {
        let removed = self.uow.resumes().delete(id).await?;
        tracing::info!(resume_id = id, removed, "resume deleted");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Skill;
    use crate::infra::{
        MockReferenceRepository, MockResumeRepository, MockUserRepository, ReferenceRepository,
        ResumeRepository, UserRepository,
    };
    use mockall::predicate::*;

    struct MockUow {
        resumes: Arc<MockResumeRepository>,
    }

    impl UnitOfWork for MockUow {
        fn users(&self) -> Arc<dyn UserRepository> {
            Arc::new(MockUserRepository::new())
        }

        fn resumes(&self) -> Arc<dyn ResumeRepository> {
            self.resumes.clone()
        }

        fn references(&self) -> Arc<dyn ReferenceRepository> {
            Arc::new(MockReferenceRepository::new())
        }
    }

    fn service(resumes: MockResumeRepository) -> ResumeManager<MockUow> {
        ResumeManager::new(Arc::new(MockUow {
            resumes: Arc::new(resumes),
        }))
    }

    fn draft() -> Resume {
        let mut resume = Resume::new(1, "SWE", "");
        resume.add_skill(Skill {
            skill_type: "language".to_string(),
            master_id: 1,
            level: "expert".to_string(),
            years: 5,
            ..Default::default()
        });
        resume
    }

    #[tokio::test]
    async fn test_create_rejects_invalid() {
        let mut repo = MockResumeRepository::new();
        repo.expect_create().never();

        let mut resume = draft();
        resume.title.clear();

        let err = service(repo).create(resume).await.unwrap_err();
        assert!(matches!(err, AppError::Validation(_)));
    }

    #[tokio::test]
    async fn test_create_ignores_client_id() {
        let mut repo = MockResumeRepository::new();
        repo.expect_create()
            .withf(|r| r.id == 0 && r.skills.len() == 1)
            .returning(|mut r| {
                r.id = 42;
                Ok(r)
            });

        let mut resume = draft();
        resume.id = 99;

        let saved = service(repo).create(resume).await.unwrap();
        assert_eq!(saved.id, 42);
        assert_eq!(saved.skills[0].years, 5);
    }

    #[tokio::test]
    async fn test_get_missing_is_not_found() {
        let mut repo = MockResumeRepository::new();
        repo.expect_find_by_id().with(eq(999)).returning(|_| Ok(None));

        let err = service(repo).get(999).await.unwrap_err();
        assert!(matches!(err, AppError::NotFound));
    }

    #[tokio::test]
    async fn test_update_uses_path_id() {
        let mut repo = MockResumeRepository::new();
        repo.expect_update()
            .withf(|r| r.id == 5)
            .returning(|r| Ok(Some(r)));

        let saved = service(repo).update(5, draft()).await.unwrap();
        assert_eq!(saved.id, 5);
    }

    #[tokio::test]
    async fn test_update_missing_is_not_found() {
        let mut repo = MockResumeRepository::new();
        repo.expect_update().returning(|_| Ok(None));

        let err = service(repo).update(5, draft()).await.unwrap_err();
        assert!(matches!(err, AppError::NotFound));
    }

    #[tokio::test]
    async fn test_delete_missing_is_ok() {
        let mut repo = MockResumeRepository::new();
        repo.expect_delete().with(eq(3)).returning(|_| Ok(false));

        assert!(service(repo).delete(3).await.is_ok());
    }

    #[tokio::test]
    async fn test_store_failure_propagates() {
        let mut repo = MockResumeRepository::new();
        repo.expect_list()
            .returning(|| Err(AppError::Database(sea_orm::DbErr::Custom("down".into()))));

        let err = service(repo).list().await.unwrap_err();
        assert!(matches!(err, AppError::Database(_)));
    }
}
