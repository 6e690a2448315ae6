//! Skill database entity for SeaORM.

use sea_orm::entity::prelude::*;

use crate::domain::Skill;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "skills")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub resume_id: i64,
    #[sea_orm(column_name = "type")]
    pub skill_type: String,
    pub master_id: i64,
    pub level: String,
    pub years: i32,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl From<Model> for Skill {
    fn from(model: Model) -> Self {
        Skill {
            id: model.id,
            resume_id: model.resume_id,
            skill_type: model.skill_type,
            master_id: model.master_id,
            level: model.level,
            years: model.years,
        }
    }
}
