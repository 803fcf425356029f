//! Migration: Create the user_properties table.

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
                    .table(UserProperties::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(UserProperties::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(UserProperties::Key).string_len(25).not_null())
                    .col(ColumnDef::new(UserProperties::Value).string_len(30).not_null())
                    .col(ColumnDef::new(UserProperties::UserId).integer().not_null())
                    .col(
                        ColumnDef::new(UserProperties::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(UserProperties::UpdatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_user_properties_user_id")
                            .from(UserProperties::Table, UserProperties::UserId)
                            .to(Users::Table, Users::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_user_properties_user_id")
                    .table(UserProperties::Table)
                    .col(UserProperties::UserId)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(UserProperties::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
enum UserProperties {
    Table,
    Id,
    Key,
    Value,
    UserId,
    CreatedAt,
    UpdatedAt,
}
