use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(JobPosting::Table)
                    .if_not_exists()
                    .col(pk_auto(JobPosting::Id))
                    .col(string(JobPosting::CompanyName))
                    .col(string(JobPosting::Profile))
                    .col(json(JobPosting::SkillsRequired))
                    .col(text(JobPosting::Eligibility))
                    .col(text(JobPosting::Description))
                    .col(string(JobPosting::ApplyLink))
                    .col(timestamp(JobPosting::CreatedAt))
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(JobPosting::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum JobPosting {
    Table,
    Id,
    CompanyName,
    Profile,
    SkillsRequired,
    Eligibility,
    Description,
    ApplyLink,
    CreatedAt,
}
