//! Reference service - Read access to the lookup tables.

use async_trait::async_trait;
use std::sync::Arc;

use crate::domain::{ReferenceEntry, ReferenceKind};
use crate::errors::AppResult;
use crate::infra::UnitOfWork;

#[async_trait]
pub trait ReferenceService: Send + Sync {
    /// Every row of the `kind` table
    async fn list(&self, kind: ReferenceKind) -> AppResult<Vec<ReferenceEntry>>;
}

pub struct ReferenceManager<U: UnitOfWork> {
    uow: Arc<U>,
}

impl<U: UnitOfWork> ReferenceManager<U> {
    pub fn new(uow: Arc<U>) -> Self {
        Self { uow }
    }
}

#[async_trait]
impl<U: UnitOfWork> ReferenceService for ReferenceManager<U> {
    async fn list(&self, kind: ReferenceKind) -> AppResult<Vec<ReferenceEntry>> {
        self.uow.references().list(kind).await
    }
}
