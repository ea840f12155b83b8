use async_trait::async_trait;

use super::domain::{Item, ItemPatch, NewItem};
use crate::errors::ServiceError;

/// Record store for items, keyed by `item_code`.
///
/// Each mutating call is one transaction: committed on success, rolled back on error.
#[async_trait]
pub trait ItemRepository: Send + Sync {
    async fn exists(&self, item_code: &str) -> Result<bool, ServiceError>;
    async fn insert(&self, new: NewItem) -> Result<Item, ServiceError>;
    async fn find(&self, item_code: &str) -> Result<Option<Item>, ServiceError>;
    /// Returns `None` when no item has this code.
    async fn update(&self, item_code: &str, patch: ItemPatch) -> Result<Option<Item>, ServiceError>;
    /// Returns whether a row was removed.
    async fn delete(&self, item_code: &str) -> Result<bool, ServiceError>;
}

/// Process-local store used by tests and the `memory` storage backend.
pub mod memory {
    use super::*;
    use tokio::sync::RwLock;

    #[derive(Default)]
    pub struct InMemoryItemRepository {
        items: RwLock<Vec<Item>>,
    }

    #[async_trait]
    impl ItemRepository for InMemoryItemRepository {
        async fn exists(&self, item_code: &str) -> Result<bool, ServiceError> {
            Ok(self.items.read().await.iter().any(|i| i.item_code == item_code))
        }

        async fn insert(&self, new: NewItem) -> Result<Item, ServiceError> {
            models::item::validate_quantity(new.quantity)?;
            let mut items = self.items.write().await;
            if items.iter().any(|i| i.item_code == new.item_code) {
                return Err(ServiceError::Conflict(format!("Item {} already exists", new.item_code)));
            }
            let item = Item { item_code: new.item_code, item_name: new.item_name, quantity: new.quantity, location: new.location };
            items.push(item.clone());
            Ok(item)
        }

        async fn find(&self, item_code: &str) -> Result<Option<Item>, ServiceError> {
            Ok(self.items.read().await.iter().find(|i| i.item_code == item_code).cloned())
        }

        async fn update(&self, item_code: &str, patch: ItemPatch) -> Result<Option<Item>, ServiceError> {
            let mut items = self.items.write().await;
            let Some(found) = items.iter_mut().find(|i| i.item_code == item_code) else { return Ok(None) };
            if let Some(q) = patch.quantity {
                models::item::validate_quantity(q)?;
                found.quantity = q;
            }
            if let Some(l) = patch.location { found.location = l; }
            Ok(Some(found.clone()))
        }

        async fn delete(&self, item_code: &str) -> Result<bool, ServiceError> {
            let mut items = self.items.write().await;
            let before = items.len();
            items.retain(|i| i.item_code != item_code);
            Ok(items.len() < before)
        }
    }
}
