//! Reference table repository (languages, tools, operating systems).

use std::sync::Arc;

use async_trait::async_trait;
use sea_orm::{ActiveModelTrait, DatabaseConnection, Set};

use super::base;
use super::entities::{language, os, tool};
use crate::domain::{ReferenceEntry, ReferenceKind};
use crate::errors::AppResult;

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// Reference repository trait for dependency injection.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait ReferenceRepository: Send + Sync {
    /// Insert a row into the `kind` table
    async fn create(&self, kind: ReferenceKind, name: String) -> AppResult<ReferenceEntry>;

    /// All rows of the `kind` table ordered by id
    async fn list(&self, kind: ReferenceKind) -> AppResult<Vec<ReferenceEntry>>;

    async fn find_by_id(&self, kind: ReferenceKind, id: i64) -> AppResult<Option<ReferenceEntry>>;

    async fn count(&self, kind: ReferenceKind) -> AppResult<u64>;
}

/// Concrete implementation of ReferenceRepository
pub struct ReferenceStore {
    db: Arc<DatabaseConnection>,
}

impl ReferenceStore {
    /// Create new repository instance
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl ReferenceRepository for ReferenceStore {
    async fn create(&self, kind: ReferenceKind, name: String) -> AppResult<ReferenceEntry> {
        let entry: ReferenceEntry = match kind {
            ReferenceKind::Language => language::ActiveModel {
                name: Set(name),
                ..Default::default()
            }
            .insert(self.db.as_ref())
            .await?
            .into(),
            ReferenceKind::Tool => tool::ActiveModel {
                name: Set(name),
                ..Default::default()
            }
            .insert(self.db.as_ref())
            .await?
            .into(),
            ReferenceKind::Os => os::ActiveModel {
                name: Set(name),
                ..Default::default()
            }
            .insert(self.db.as_ref())
            .await?
            .into(),
        };
        Ok(entry)
    }

    async fn list(&self, kind: ReferenceKind) -> AppResult<Vec<ReferenceEntry>> {
        let db = self.db.as_ref();
        let entries = match kind {
            ReferenceKind::Language => {
                into_entries(base::find_all::<language::Entity, _>(db, language::Column::Id).await?)
            }
            ReferenceKind::Tool => {
                into_entries(base::find_all::<tool::Entity, _>(db, tool::Column::Id).await?)
            }
            ReferenceKind::Os => {
                into_entries(base::find_all::<os::Entity, _>(db, os::Column::Id).await?)
            }
        };
        Ok(entries)
    }

    async fn find_by_id(&self, kind: ReferenceKind, id: i64) -> AppResult<Option<ReferenceEntry>> {
        let db = self.db.as_ref();
        let entry: Option<ReferenceEntry> = match kind {
            ReferenceKind::Language => base::find_by_id::<language::Entity, _>(db, id)
                .await?
                .map(Into::into),
            ReferenceKind::Tool => base::find_by_id::<tool::Entity, _>(db, id)
                .await?
                .map(Into::into),
            ReferenceKind::Os => base::find_by_id::<os::Entity, _>(db, id)
                .await?
                .map(Into::into),
        };
        Ok(entry)
    }

    async fn count(&self, kind: ReferenceKind) -> AppResult<u64> {
        let db = self.db.as_ref();
        match kind {
            ReferenceKind::Language => base::count::<language::Entity, _>(db).await,
            ReferenceKind::Tool => base::count::<tool::Entity, _>(db).await,
            ReferenceKind::Os => base::count::<os::Entity, _>(db).await,
        }
    }
}

fn into_entries<M: Into<ReferenceEntry>>(models: Vec<M>) -> Vec<ReferenceEntry> {
    models.into_iter().map(Into::into).collect()
}
