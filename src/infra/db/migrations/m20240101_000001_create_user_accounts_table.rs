//! Migration: Create the user_accounts table.

use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(UserAccounts::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(UserAccounts::Id)
                            .uuid()
                            .not_null()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(UserAccounts::Username).string().not_null())
                    .col(ColumnDef::new(UserAccounts::Email).string().not_null())
                    .col(
                        ColumnDef::new(UserAccounts::PasswordHash)
                            .string()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(UserAccounts::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await?;

        // The unique index is the authoritative uniqueness guard: the
        // application-level pre-check alone would race under concurrent
        // registrations with the same email.
        manager
            .create_index(
                Index::create()
                    .name("idx_user_accounts_email_unique")
                    .table(UserAccounts::Table)
                    .col(UserAccounts::Email)
                    .unique()
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(UserAccounts::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
enum UserAccounts {
    Table,
    Id,
    Username,
    Email,
    PasswordHash,
    CreatedAt,
}
