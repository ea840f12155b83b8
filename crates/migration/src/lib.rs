//! Migrator registering entity-specific migrations in dependency order.
//! Indexes are applied last.
pub use sea_orm_migration::prelude::*;

mod m20250101_000001_create_item;
mod m20250101_000002_create_warehouse_order;
mod m20250101_000003_create_warehouse_user;
mod m20250101_000004_create_scan_log;
mod m20250101_000010_add_indexes;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20250101_000001_create_item::Migration),
            Box::new(m20250101_000002_create_warehouse_order::Migration),
            Box::new(m20250101_000003_create_warehouse_user::Migration),
            Box::new(m20250101_000004_create_scan_log::Migration),
            // Indexes should always be applied last
            Box::new(m20250101_000010_add_indexes::Migration),
        ]
    }
}
