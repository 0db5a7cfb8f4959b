use sea_orm_migration::{prelude::*, schema::*};

static IDX_PORTAL_USER_EMAIL: &str = "idx_portal_user_email";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(PortalUser::Table)
                    .if_not_exists()
                    .col(pk_auto(PortalUser::Id))
                    .col(string(PortalUser::Email))
                    .col(string(PortalUser::PasswordHash))
                    .col(string_len_null(PortalUser::UserType, 16))
                    .col(string(PortalUser::Name))
                    .col(string_null(PortalUser::ProfilePicture))
                    .col(timestamp(PortalUser::CreatedAt))
                    .col(timestamp(PortalUser::UpdatedAt))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_PORTAL_USER_EMAIL)
                    .table(PortalUser::Table)
                    .col(PortalUser::Email)
                    .unique()
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(
                Index::drop()
                    .name(IDX_PORTAL_USER_EMAIL)
                    .table(PortalUser::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(PortalUser::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum PortalUser {
    Table,
    Id,
    Email,
    PasswordHash,
    UserType,
    Name,
    ProfilePicture,
    CreatedAt,
    UpdatedAt,
}
