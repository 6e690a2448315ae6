//! Résumé aggregate repository.
//!
//! Owns persistence of the résumé row together with its skills and
//! experiences. Aggregate writes run in a single transaction; reads attach
//! children with one batch query per child table.

use std::collections::HashMap;
use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;
use sea_orm::{
    AccessMode, ActiveModelTrait, ColumnTrait, ConnectionTrait, DatabaseConnection,
    DatabaseTransaction, EntityTrait, IsolationLevel, QueryFilter, QueryOrder, Set,
    TransactionTrait,
};

use super::base;
use super::entities::{experience, resume, skill};
use crate::domain::{Experience, Resume, Skill};
use crate::errors::{AppError, AppResult};

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// Résumé repository trait for dependency injection.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait ResumeRepository: Send + Sync {
    /// Persist a résumé with its children; ids on the input are ignored
    async fn create(&self, resume: Resume) -> AppResult<Resume>;

    /// List every résumé with children attached
    async fn list(&self) -> AppResult<Vec<Resume>>;

    /// Find résumé by ID with children attached
    async fn find_by_id(&self, id: i64) -> AppResult<Option<Resume>>;

    /// List the résumés owned by a user
    async fn list_by_user(&self, user_id: i64) -> AppResult<Vec<Resume>>;

    /// Replace a résumé's fields and children; `None` if it does not exist
    async fn update(&self, resume: Resume) -> AppResult<Option<Resume>>;

    /// Delete by ID; returns whether a row was removed
    async fn delete(&self, id: i64) -> AppResult<bool>;
}

type TxFuture<'a, T> = Pin<Box<dyn Future<Output = AppResult<T>> + Send + 'a>>;

/// Concrete implementation of ResumeRepository
pub struct ResumeStore {
    db: Arc<DatabaseConnection>,
}

impl ResumeStore {
    /// Create new repository instance
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }

    /// Run `f` in a read-committed transaction, committing on success and
    /// rolling back on error.
    async fn execute_transaction<F, T>(&self, f: F) -> AppResult<T>
    where
        F: for<'a> FnOnce(&'a DatabaseTransaction) -> TxFuture<'a, T> + Send,
        T: Send,
    {
        let txn = self
            .db
            .begin_with_config(
                Some(IsolationLevel::ReadCommitted),
                Some(AccessMode::ReadWrite),
            )
            .await
            .map_err(AppError::from)?;

        match f(&txn).await {
            Ok(result) => {
                txn.commit().await.map_err(AppError::from)?;
                Ok(result)
            }
            Err(e) => {
                if let Err(rollback_err) = txn.rollback().await {
                    tracing::error!("Transaction rollback failed: {}", rollback_err);
                }
                Err(e)
            }
        }
    }
}

#[async_trait]
impl ResumeRepository for ResumeStore {
    async fn create(&self, resume: Resume) -> AppResult<Resume> {
        self.execute_transaction(move |txn| Box::pin(insert_aggregate(txn, resume)))
            .await
    }

    async fn list(&self) -> AppResult<Vec<Resume>> {
        let db = self.db.as_ref();
        let models = base::find_all::<resume::Entity, _>(db, resume::Column::Id).await?;
        attach_children(db, models).await
    }

    async fn find_by_id(&self, id: i64) -> AppResult<Option<Resume>> {
        let Some(model) = base::find_by_id::<resume::Entity, _>(self.db.as_ref(), id).await? else {
            return Ok(None);
        };

        let mut attached = attach_children(self.db.as_ref(), vec![model]).await?;
        Ok(attached.pop())
    }

    async fn list_by_user(&self, user_id: i64) -> AppResult<Vec<Resume>> {
        let models = resume::Entity::find()
            .filter(resume::Column::UserId.eq(user_id))
            .order_by_asc(resume::Column::Id)
            .all(self.db.as_ref())
            .await
            .map_err(AppError::from)?;

        attach_children(self.db.as_ref(), models).await
    }

    async fn update(&self, resume: Resume) -> AppResult<Option<Resume>> {
        self.execute_transaction(move |txn| Box::pin(replace_aggregate(txn, resume)))
            .await
    }

    async fn delete(&self, id: i64) -> AppResult<bool> {
        // skills and experiences go with the row (ON DELETE CASCADE)
        let result = resume::Entity::delete_by_id(id)
            .exec(self.db.as_ref())
            .await
            .map_err(AppError::from)?;

        Ok(result.rows_affected > 0)
    }
}

async fn insert_aggregate(txn: &DatabaseTransaction, resume: Resume) -> AppResult<Resume> {
    let model = resume::ActiveModel {
        user_id: Set(resume.user_id),
        title: Set(resume.title),
        summary: Set(resume.summary),
        verified: Set(resume.verified),
        created_at: Set(resume.created_at),
        updated_at: Set(resume.updated_at),
        ..Default::default()
    }
    .insert(txn)
    .await?;

    let mut saved = Resume::from(model);
    saved.skills = insert_skills(txn, saved.id, resume.skills).await?;
    saved.experiences = insert_experiences(txn, saved.id, resume.experiences).await?;
    Ok(saved)
}

async fn replace_aggregate(txn: &DatabaseTransaction, resume: Resume) -> AppResult<Option<Resume>> {
    let Some(existing) = base::find_by_id::<resume::Entity, _>(txn, resume.id).await? else {
        return Ok(None);
    };

    let mut active: resume::ActiveModel = existing.into();
    active.user_id = Set(resume.user_id);
    active.title = Set(resume.title);
    active.summary = Set(resume.summary);
    active.verified = Set(resume.verified);
    active.updated_at = Set(Utc::now());
    let model = active.update(txn).await?;

    skill::Entity::delete_many()
        .filter(skill::Column::ResumeId.eq(model.id))
        .exec(txn)
        .await?;
    experience::Entity::delete_many()
        .filter(experience::Column::ResumeId.eq(model.id))
        .exec(txn)
        .await?;

    let mut saved = Resume::from(model);
    saved.skills = insert_skills(txn, saved.id, resume.skills).await?;
    saved.experiences = insert_experiences(txn, saved.id, resume.experiences).await?;
    Ok(Some(saved))
}

async fn insert_skills(
    txn: &DatabaseTransaction,
    resume_id: i64,
    skills: Vec<Skill>,
) -> AppResult<Vec<Skill>> {
    let mut saved = Vec::with_capacity(skills.len());
    for s in skills {
        let model = skill::ActiveModel {
            resume_id: Set(resume_id),
            skill_type: Set(s.skill_type),
            master_id: Set(s.master_id),
            level: Set(s.level),
            years: Set(s.years),
            ..Default::default()
        }
        .insert(txn)
        .await?;
        saved.push(Skill::from(model));
    }
    Ok(saved)
}

async fn insert_experiences(
    txn: &DatabaseTransaction,
    resume_id: i64,
    experiences: Vec<Experience>,
) -> AppResult<Vec<Experience>> {
    let mut saved = Vec::with_capacity(experiences.len());
    for e in experiences {
        let model = experience::ActiveModel {
            resume_id: Set(resume_id),
            company: Set(e.company),
            position: Set(e.position),
            start_date: Set(e.start_date),
            end_date: Set(e.end_date),
            description: Set(e.description),
            portfolio_url: Set(e.portfolio_url),
            ..Default::default()
        }
        .insert(txn)
        .await?;
        saved.push(Experience::from(model));
    }
    Ok(saved)
}

/// Load skills and experiences for all `models` with one query per table.
async fn attach_children<C>(db: &C, models: Vec<resume::Model>) -> AppResult<Vec<Resume>>
where
    C: ConnectionTrait,
{
    if models.is_empty() {
        return Ok(Vec::new());
    }

    let ids: Vec<i64> = models.iter().map(|m| m.id).collect();

    let mut skills: HashMap<i64, Vec<Skill>> = HashMap::new();
    for model in skill::Entity::find()
        .filter(skill::Column::ResumeId.is_in(ids.clone()))
        .order_by_asc(skill::Column::Id)
        .all(db)
        .await?
    {
        skills.entry(model.resume_id).or_default().push(Skill::from(model));
    }

    let mut experiences: HashMap<i64, Vec<Experience>> = HashMap::new();
    for model in experience::Entity::find()
        .filter(experience::Column::ResumeId.is_in(ids))
        .order_by_asc(experience::Column::Id)
        .all(db)
        .await?
    {
        experiences
            .entry(model.resume_id)
            .or_default()
            .push(Experience::from(model));
    }

    Ok(models
        .into_iter()
        .map(|model| {
            let mut resume = Resume::from(model);
            resume.skills = skills.remove(&resume.id).unwrap_or_default();
            resume.experiences = experiences.remove(&resume.id).unwrap_or_default();
            resume
        })
        .collect())
}
