use std::sync::Arc;
use tracing::{info, instrument};

use super::domain::{CreateOrderInput, NewOrder, Order, UpdateOrderStatusInput};
use super::repository::OrderRepository;
use crate::errors::ServiceError;
use crate::validate::{parse_int, present, require_fields};

/// Order business rules. Item references are not checked against the item store.
pub struct OrderService<R: OrderRepository + ?Sized> {
    repo: Arc<R>,
}

impl<R: OrderRepository + ?Sized> OrderService<R> {
    pub fn new(repo: Arc<R>) -> Self { Self { repo } }

    #[instrument(skip(self, input), fields(order_id = ?input.order_id))]
    pub async fn create(&self, input: CreateOrderInput) -> Result<Order, ServiceError> {
        let [order_id, customer_name, item, raw_quantity] = require_fields([
            ("order_id", &input.order_id),
            ("customer_name", &input.customer_name),
            ("item", &input.item),
            ("quantity", &input.quantity),
        ])?;
        let quantity = parse_int("quantity", raw_quantity)?;

        if self.repo.exists(order_id).await? {
            return Err(ServiceError::Conflict(format!("Order {order_id} already exists")));
        }

        let order = self.repo
            .insert(NewOrder {
                order_id: order_id.to_string(),
                customer_name: customer_name.to_string(),
                item: item.to_string(),
                quantity,
            })
            .await?;
        info!(order_id = %order.order_id, item = %order.item, quantity = order.quantity, "order_created");
        Ok(order)
    }

    /// Overwrite the status with any string; there are no transition rules.
    #[instrument(skip(self, input), fields(order_id = ?input.order_id))]
    pub async fn update_status(&self, input: UpdateOrderStatusInput) -> Result<Order, ServiceError> {
        let (Some(order_id), Some(status)) = (present(&input.order_id), present(&input.status)) else {
            return Err(ServiceError::Validation("Missing order_id or status".into()));
        };
        let order = self.repo
            .update_status(order_id, status)
            .await?
            .ok_or_else(|| ServiceError::NotFound(format!("Order {order_id} not found")))?;
        info!(order_id, status, "order_status_updated");
        Ok(order)
    }

    pub async fn list(&self) -> Result<Vec<Order>, ServiceError> {
        self.repo.list().await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::order::repository::memory::InMemoryOrderRepository;
    use async_trait::async_trait;
    use std::sync::atomic::{AtomicUsize, Ordering};

    fn svc() -> OrderService<InMemoryOrderRepository> {
        OrderService::new(Arc::new(InMemoryOrderRepository::default()))
    }

    fn input(id: &str, quantity: &str) -> CreateOrderInput {
        CreateOrderInput {
            order_id: Some(id.into()),
            customer_name: Some("Alice".into()),
            item: Some("SKU1".into()),
            quantity: Some(quantity.into()),
        }
    }

    fn status(id: &str, s: &str) -> UpdateOrderStatusInput {
        UpdateOrderStatusInput { order_id: Some(id.into()), status: Some(s.into()) }
    }

    #[tokio::test]
    async fn order_lifecycle() -> Result<(), anyhow::Error> {
        let svc = svc();
        let created = svc.create(input("O1", "2")).await?;
        assert_eq!(created.status, "Pending");

        svc.update_status(status("O1", "Shipped")).await?;
        let orders = svc.list().await?;
        assert!(orders.iter().any(|o| o.order_id == "O1" && o.status == "Shipped"));
        Ok(())
    }

    #[tokio::test]
    async fn any_status_string_is_accepted() -> Result<(), anyhow::Error> {
        let svc = svc();
        svc.create(input("O1", "1")).await?;
        svc.update_status(status("O1", "Delivered")).await?;
        let back = svc.update_status(status("O1", "pending-ish")).await?;
        assert_eq!(back.status, "pending-ish");
        Ok(())
    }

    #[tokio::test]
    async fn zero_quantity_fails_and_persists_nothing() -> Result<(), anyhow::Error> {
        let svc = svc();
        let err = svc.create(input("O1", "0")).await.unwrap_err();
        assert!(matches!(err, ServiceError::Invariant(ref m) if m == "Quantity must be greater than zero"));
        assert!(svc.list().await?.is_empty());
        Ok(())
    }

    #[tokio::test]
    async fn missing_fields_are_listed() {
        let err = svc().create(CreateOrderInput { order_id: Some("O1".into()), ..Default::default() }).await.unwrap_err();
        assert_eq!(err.to_string(), "Missing required fields: customer_name, item, quantity");
    }

    #[tokio::test]
    async fn duplicate_order_conflicts() -> Result<(), anyhow::Error> {
        let svc = svc();
        svc.create(input("O1", "2")).await?;
        let err = svc.create(input("O1", "9")).await.unwrap_err();
        assert_eq!(err.to_string(), "Order O1 already exists");
        let orders = svc.list().await?;
        assert_eq!(orders.len(), 1);
        assert_eq!(orders[0].quantity, 2);
        Ok(())
    }

    #[tokio::test]
    async fn status_update_errors() {
        let svc = svc();
        let err = svc.update_status(UpdateOrderStatusInput { order_id: Some("O1".into()), status: None }).await.unwrap_err();
        assert_eq!(err.to_string(), "Missing order_id or status");
        let err = svc.update_status(status("O9", "Shipped")).await.unwrap_err();
        assert!(matches!(err, ServiceError::NotFound(ref m) if m == "Order O9 not found"));
    }

    #[derive(Default)]
    struct CountingRepo {
        inner: InMemoryOrderRepository,
        calls: AtomicUsize,
    }

    #[async_trait]
    impl OrderRepository for CountingRepo {
        async fn exists(&self, order_id: &str) -> Result<bool, ServiceError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            self.inner.exists(order_id).await
        }
        async fn insert(&self, new: NewOrder) -> Result<Order, ServiceError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            self.inner.insert(new).await
        }
        async fn update_status(&self, order_id: &str, status: &str) -> Result<Option<Order>, ServiceError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            self.inner.update_status(order_id, status).await
        }
        async fn list(&self) -> Result<Vec<Order>, ServiceError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            self.inner.list().await
        }
    }

    #[tokio::test]
    async fn rejected_requests_never_reach_the_store() {
        let repo = Arc::new(CountingRepo::default());
        let svc = OrderService::new(repo.clone());

        assert!(svc.create(CreateOrderInput { quantity: None, ..input("O1", "1") }).await.is_err());
        assert!(svc.create(input("O1", "two")).await.is_err());
        assert!(svc.update_status(UpdateOrderStatusInput { order_id: None, status: Some("Shipped".into()) }).await.is_err());
        assert!(svc.update_status(status("O1", "")).await.is_err());

        assert_eq!(repo.calls.load(Ordering::SeqCst), 0);
    }
}
