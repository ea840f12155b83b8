use async_trait::async_trait;
use sea_orm::{DatabaseConnection, EntityTrait, TransactionTrait};

use models::order;
use super::domain::{NewOrder, Order};
use super::repository::OrderRepository;
use crate::errors::ServiceError;

/// SeaORM-backed repository implementation.
pub struct SeaOrmOrderRepository {
    pub db: DatabaseConnection,
}

#[async_trait]
impl OrderRepository for SeaOrmOrderRepository {
    async fn exists(&self, order_id: &str) -> Result<bool, ServiceError> {
        Ok(order::find_by_order_id(&self.db, order_id).await?.is_some())
    }

    async fn insert(&self, new: NewOrder) -> Result<Order, ServiceError> {
        let created = self.db
            .transaction::<_, order::Model, ServiceError>(|txn| {
                Box::pin(async move {
                    Ok(order::create(txn, &new.order_id, &new.customer_name, &new.item, new.quantity).await?)
                })
            })
            .await?;
        Ok(created.into())
    }

    async fn update_status(&self, order_id: &str, status: &str) -> Result<Option<Order>, ServiceError> {
        let (order_id, status) = (order_id.to_string(), status.to_string());
        let updated = self.db
            .transaction::<_, Option<order::Model>, ServiceError>(|txn| {
                Box::pin(async move {
                    let Some(existing) = order::find_by_order_id(txn, &order_id).await? else { return Ok(None) };
                    Ok(Some(order::set_status(txn, existing, &status).await?))
                })
            })
            .await?;
        Ok(updated.map(Order::from))
    }

    async fn list(&self) -> Result<Vec<Order>, ServiceError> {
        let rows = order::Entity::find().all(&self.db).await?;
        Ok(rows.into_iter().map(Order::from).collect())
    }
}
