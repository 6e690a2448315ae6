//! Résumé database entity for SeaORM.
//!
//! Child rows live in the `skills` and `experiences` tables.

use sea_orm::entity::prelude::*;

use crate::domain::Resume;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "resumes")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub user_id: i64,
    pub title: String,
    #[sea_orm(column_type = "Text")]
    pub summary: String,
    pub verified: bool,
    pub created_at: DateTimeUtc,
    pub updated_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

/// Convert database model to domain entity; collections start empty.
impl From<Model> for Resume {
    fn from(model: Model) -> Self {
        Resume {
            id: model.id,
            user_id: model.user_id,
            title: model.title,
            summary: model.summary,
            skills: Vec::new(),
            experiences: Vec::new(),
            created_at: model.created_at,
            updated_at: model.updated_at,
            verified: model.verified,
        }
    }
}
