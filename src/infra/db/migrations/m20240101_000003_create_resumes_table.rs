//! Migration: Create resumes with their skills and experiences.
//!
//! Child rows cascade with their résumé.

use sea_orm_migration::prelude::*;

use super::m20240101_000001_create_users_table::Users;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Resumes::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Resumes::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Resumes::UserId).big_integer().not_null())
                    .col(ColumnDef::new(Resumes::Title).string().not_null())
                    .col(ColumnDef::new(Resumes::Summary).text().not_null().default(""))
                    .col(
                        ColumnDef::new(Resumes::Verified)
                            .boolean()
                            .not_null()
                            .default(false),
                    )
                    .col(
                        ColumnDef::new(Resumes::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Resumes::UpdatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_resumes_user_id")
                            .from(Resumes::Table, Resumes::UserId)
                            .to(Users::Table, Users::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_resumes_user_id")
                    .table(Resumes::Table)
                    .col(Resumes::UserId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(Skills::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Skills::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Skills::ResumeId).big_integer().not_null())
                    .col(ColumnDef::new(Skills::Type).string().not_null())
                    .col(ColumnDef::new(Skills::MasterId).big_integer().not_null())
                    .col(ColumnDef::new(Skills::Level).string().not_null())
                    .col(ColumnDef::new(Skills::Years).integer().not_null().default(0))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_skills_resume_id")
                            .from(Skills::Table, Skills::ResumeId)
                            .to(Resumes::Table, Resumes::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(Experiences::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Experiences::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Experiences::ResumeId).big_integer().not_null())
                    .col(ColumnDef::new(Experiences::Company).string().not_null())
                    .col(ColumnDef::new(Experiences::Position).string().not_null())
                    .col(ColumnDef::new(Experiences::StartDate).string().not_null())
                    .col(ColumnDef::new(Experiences::EndDate).string().not_null())
                    .col(ColumnDef::new(Experiences::Description).text().not_null())
                    .col(ColumnDef::new(Experiences::PortfolioUrl).string().not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_experiences_resume_id")
                            .from(Experiences::Table, Experiences::ResumeId)
                            .to(Resumes::Table, Resumes::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Experiences::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Skills::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Resumes::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
enum Resumes {
    Table,
    Id,
    UserId,
    Title,
    Summary,
    Verified,
    CreatedAt,
    UpdatedAt,
}

#[derive(Iden)]
enum Skills {
    Table,
    Id,
    ResumeId,
    Type,
    MasterId,
    Level,
    Years,
}

#[derive(Iden)]
enum Experiences {
    Table,
    Id,
    ResumeId,
    Company,
    Position,
    StartDate,
    EndDate,
    Description,
    PortfolioUrl,
}
