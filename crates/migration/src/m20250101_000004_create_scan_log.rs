//! Create `scan_log` table.
//!
//! Append-only inward/outward scan events; rows are never updated.
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(ScanLog::Table)
                    .if_not_exists()
                    .col(uuid(ScanLog::Id).primary_key())
                    .col(string_len(ScanLog::Item, 140).not_null())
                    .col(string_len(ScanLog::ScannedBy, 255).not_null())
                    .col(string_len(ScanLog::ScanType, 32).not_null().default("Inward"))
                    .col(ColumnDef::new(ScanLog::Remarks).text().null())
                    .col(timestamp_with_time_zone(ScanLog::ScanTime).not_null())
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(ScanLog::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum ScanLog { Table, Id, Item, ScannedBy, ScanType, Remarks, ScanTime }
