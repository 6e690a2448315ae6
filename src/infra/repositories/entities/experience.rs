//! Experience database entity for SeaORM.

use sea_orm::entity::prelude::*;

use crate::domain::Experience;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "experiences")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub resume_id: i64,
    pub company: String,
    pub position: String,
    pub start_date: String,
    pub end_date: String,
    #[sea_orm(column_type = "Text")]
    pub description: String,
    pub portfolio_url: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl From<Model> for Experience {
    fn from(model: Model) -> Self {
        Experience {
            id: model.id,
            resume_id: model.resume_id,
            company: model.company,
            position: model.position,
            start_date: model.start_date,
            end_date: model.end_date,
            description: model.description,
            portfolio_url: model.portfolio_url,
        }
    }
}
