//! Create `warehouse_order` table.
//!
//! `item` is a plain item_code reference; no FK so orders may name items that do not exist.
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(WarehouseOrder::Table)
                    .if_not_exists()
                    .col(uuid(WarehouseOrder::Id).primary_key())
                    .col(string_len(WarehouseOrder::OrderId, 140).unique_key().not_null())
                    .col(string_len(WarehouseOrder::CustomerName, 255).not_null())
                    .col(string_len(WarehouseOrder::Item, 140).not_null())
                    .col(big_integer(WarehouseOrder::Quantity).not_null())
                    .col(string_len(WarehouseOrder::Status, 64).not_null().default("Pending"))
                    .col(timestamp_with_time_zone(WarehouseOrder::CreatedAt).not_null())
                    .col(timestamp_with_time_zone(WarehouseOrder::UpdatedAt).not_null())
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(WarehouseOrder::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum WarehouseOrder { Table, Id, OrderId, CustomerName, Item, Quantity, Status, CreatedAt, UpdatedAt }
