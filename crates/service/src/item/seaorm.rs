use async_trait::async_trait;
use sea_orm::{ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, TransactionTrait};
use tracing::debug;

use models::item;
use super::domain::{Item, ItemPatch, NewItem};
use super::repository::ItemRepository;
use crate::errors::ServiceError;

/// SeaORM-backed repository implementation.
pub struct SeaOrmItemRepository {
    pub db: DatabaseConnection,
}

#[async_trait]
impl ItemRepository for SeaOrmItemRepository {
    async fn exists(&self, item_code: &str) -> Result<bool, ServiceError> {
        Ok(item::find_by_code(&self.db, item_code).await?.is_some())
    }

    async fn insert(&self, new: NewItem) -> Result<Item, ServiceError> {
        let created = self.db
            .transaction::<_, item::Model, ServiceError>(|txn| {
                Box::pin(async move {
                    let m = item::create(txn, &new.item_code, &new.item_name, new.quantity, &new.location).await?;
                    Ok(m)
                })
            })
            .await?;
        Ok(created.into())
    }

    async fn find(&self, item_code: &str) -> Result<Option<Item>, ServiceError> {
        Ok(item::find_by_code(&self.db, item_code).await?.map(Item::from))
    }

    async fn update(&self, item_code: &str, patch: ItemPatch) -> Result<Option<Item>, ServiceError> {
        let code = item_code.to_string();
        let updated = self.db
            .transaction::<_, Option<item::Model>, ServiceError>(|txn| {
                Box::pin(async move {
                    let Some(existing) = item::find_by_code(txn, &code).await? else { return Ok(None) };
                    let m = item::update(txn, existing, patch.quantity, patch.location.as_deref()).await?;
                    Ok(Some(m))
                })
            })
            .await?;
        Ok(updated.map(Item::from))
    }

    async fn delete(&self, item_code: &str) -> Result<bool, ServiceError> {
        let code = item_code.to_string();
        let rows = self.db
            .transaction::<_, u64, ServiceError>(|txn| {
                Box::pin(async move {
                    let res = item::Entity::delete_many()
                        .filter(item::Column::ItemCode.eq(code))
                        .exec(txn)
                        .await?;
                    Ok(res.rows_affected)
                })
            })
            .await?;
        debug!(rows, "item delete");
        Ok(rows > 0)
    }
}
