use async_trait::async_trait;

use super::domain::{NewOrder, Order};
use crate::errors::ServiceError;

#[async_trait]
pub trait OrderRepository: Send + Sync {
    async fn exists(&self, order_id: &str) -> Result<bool, ServiceError>;
    /// Inserts with status "Pending".
    async fn insert(&self, new: NewOrder) -> Result<Order, ServiceError>;
    /// Returns `None` when the order is unknown.
    async fn update_status(&self, order_id: &str, status: &str) -> Result<Option<Order>, ServiceError>;
    async fn list(&self) -> Result<Vec<Order>, ServiceError>;
}

pub mod memory {
    use super::*;
    use models::order::{validate_quantity, DEFAULT_STATUS};
    use tokio::sync::RwLock;

    #[derive(Default)]
    pub struct InMemoryOrderRepository {
        orders: RwLock<Vec<Order>>,
    }

    #[async_trait]
    impl OrderRepository for InMemoryOrderRepository {
        async fn exists(&self, order_id: &str) -> Result<bool, ServiceError> {
            Ok(self.orders.read().await.iter().any(|o| o.order_id == order_id))
        }

        async fn insert(&self, new: NewOrder) -> Result<Order, ServiceError> {
            validate_quantity(new.quantity)?;
            let mut orders = self.orders.write().await;
            if orders.iter().any(|o| o.order_id == new.order_id) {
                return Err(ServiceError::Conflict(format!("Order {} already exists", new.order_id)));
            }
            let order = Order {
                order_id: new.order_id,
                customer_name: new.customer_name,
                item: new.item,
                quantity: new.quantity,
                status: DEFAULT_STATUS.to_string(),
            };
            orders.push(order.clone());
            Ok(order)
        }

        async fn update_status(&self, order_id: &str, status: &str) -> Result<Option<Order>, ServiceError> {
            let mut orders = self.orders.write().await;
            let Some(found) = orders.iter_mut().find(|o| o.order_id == order_id) else { return Ok(None) };
            validate_quantity(found.quantity)?;
            found.status = status.to_string();
            Ok(Some(found.clone()))
        }

        async fn list(&self) -> Result<Vec<Order>, ServiceError> {
            Ok(self.orders.read().await.clone())
        }
    }
}
