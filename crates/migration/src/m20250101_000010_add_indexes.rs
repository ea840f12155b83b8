use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // ScanLog: history is always filtered by item
        manager
            .create_index(
                Index::create()
                    .name("idx_scan_log_item")
                    .table(ScanLog::Table)
                    .col(ScanLog::Item)
                    .to_owned(),
            )
            .await?;

        // Order: lookups by the referenced item_code
        manager
            .create_index(
                Index::create()
                    .name("idx_warehouse_order_item")
                    .table(WarehouseOrder::Table)
                    .col(WarehouseOrder::Item)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(Index::drop().name("idx_scan_log_item").table(ScanLog::Table).to_owned())
            .await?;
        manager
            .drop_index(Index::drop().name("idx_warehouse_order_item").table(WarehouseOrder::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum ScanLog { Table, Item }

#[derive(DeriveIden)]
enum WarehouseOrder { Table, Item }
