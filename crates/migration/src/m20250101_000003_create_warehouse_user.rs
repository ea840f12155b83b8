//! Create `warehouse_user` table.
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(WarehouseUser::Table)
                    .if_not_exists()
                    .col(uuid(WarehouseUser::Id).primary_key())
                    .col(string_len(WarehouseUser::Email, 255).unique_key().not_null())
                    .col(string_len(WarehouseUser::FullName, 255).not_null())
                    .col(string_len(WarehouseUser::Role, 64).not_null().default("Staff"))
                    // Explicitly define nullable phone_number to avoid conflicting NULL/NOT NULL
                    .col(
                        ColumnDef::new(WarehouseUser::PhoneNumber)
                            .string_len(32)
                            .null(),
                    )
                    .col(timestamp_with_time_zone(WarehouseUser::CreatedAt).not_null())
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(WarehouseUser::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum WarehouseUser { Table, Id, Email, FullName, Role, PhoneNumber, CreatedAt }
