//! Language reference entity for SeaORM.

use sea_orm::entity::prelude::*;

use crate::domain::ReferenceEntry;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "languages")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub name: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl From<Model> for ReferenceEntry {
    fn from(model: Model) -> Self {
        ReferenceEntry {
            id: model.id,
            name: model.name,
        }
    }
}
