pub mod errors;
pub mod db;
pub mod item;
pub mod order;
pub mod warehouse_user;
pub mod scan_log;

#[cfg(test)]
mod tests {
    use migration::MigratorTrait;
    use sea_orm::{DatabaseConnection, EntityTrait, TransactionTrait};

    use crate::db::{connect_with_config, DatabaseConfig};
    use crate::errors::ModelError;
    use crate::{item, order, scan_log, warehouse_user};

    async fn sqlite() -> anyhow::Result<DatabaseConnection> {
        let cfg = DatabaseConfig { url: "sqlite::memory:".into(), max_connections: 1, min_connections: 1, ..DatabaseConfig::default() };
        let db = connect_with_config(&cfg).await?;
        migration::Migrator::up(&db, None).await?;
        Ok(db)
    }

    #[test]
    fn quantity_rules() {
        assert!(item::validate_quantity(0).is_ok());
        assert!(matches!(item::validate_quantity(-1), Err(ModelError::Invariant(m)) if m == "Quantity cannot be negative"));
        assert!(order::validate_quantity(1).is_ok());
        assert!(matches!(order::validate_quantity(0), Err(ModelError::Invariant(m)) if m == "Quantity must be greater than zero"));
    }

    #[tokio::test]
    async fn item_create_find_update() -> anyhow::Result<()> {
        let db = sqlite().await?;
        let created = item::create(&db, "SKU1", "Widget", 0, "").await?;
        assert_eq!(created.quantity, 0);

        let found = item::find_by_code(&db, "SKU1").await?.unwrap();
        assert_eq!(found.id, created.id);

        let updated = item::update(&db, found, Some(7), None).await?;
        assert_eq!(updated.quantity, 7);
        assert_eq!(updated.location, "");

        let err = item::update(&db, updated, Some(-3), Some("A1")).await.unwrap_err();
        assert!(matches!(err, ModelError::Invariant(_)));
        let after = item::find_by_code(&db, "SKU1").await?.unwrap();
        assert_eq!(after.quantity, 7);
        Ok(())
    }

    #[tokio::test]
    async fn rolled_back_order_is_not_visible() -> anyhow::Result<()> {
        let db = sqlite().await?;
        let txn = db.begin().await?;
        order::create(&txn, "O-RB", "Alice", "SKU1", 2).await?;
        txn.rollback().await?;
        assert!(order::find_by_order_id(&db, "O-RB").await?.is_none());

        let o = order::create(&db, "O1", "Alice", "SKU1", 2).await?;
        assert_eq!(o.status, order::DEFAULT_STATUS);
        let shipped = order::set_status(&db, o, "Shipped").await?;
        assert_eq!(shipped.status, "Shipped");
        Ok(())
    }

    #[tokio::test]
    async fn user_and_scan_log_rows() -> anyhow::Result<()> {
        let db = sqlite().await?;
        warehouse_user::create(&db, "Bob", "bob@example.com", warehouse_user::DEFAULT_ROLE, None).await?;
        assert!(warehouse_user::exists_by_email(&db, "bob@example.com").await?);
        assert!(!warehouse_user::exists_by_email(&db, "nobody@example.com").await?);

        scan_log::create(&db, "SKU1", "bob", scan_log::DEFAULT_SCAN_TYPE, None, None).await?;
        scan_log::create(&db, "SKU1", "bob", "Outward", Some("damaged box"), None).await?;
        scan_log::create(&db, "SKU2", "bob", "Inward", None, None).await?;
        let logs = scan_log::list_by_item(&db, "SKU1").await?;
        assert_eq!(logs.len(), 2);
        assert_eq!(scan_log::Entity::find().all(&db).await?.len(), 3);
        Ok(())
    }
}
