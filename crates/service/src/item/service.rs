use std::sync::Arc;
use tracing::{info, instrument};

use super::domain::{CreateItemInput, Item, ItemCodeInput, ItemPatch, NewItem, UpdateItemInput};
use super::repository::ItemRepository;
use crate::errors::ServiceError;
use crate::validate::{optional_int, parse_int, present, require_fields};

/// Item business rules: required fields, unique `item_code`, defaults.
pub struct ItemService<R: ItemRepository + ?Sized> {
    repo: Arc<R>,
}

impl<R: ItemRepository + ?Sized> ItemService<R> {
    pub fn new(repo: Arc<R>) -> Self { Self { repo } }

    /// Create an item; quantity defaults to 0 and location to "".
    ///
    /// # Examples
    /// ```
    /// use service::item::{ItemService, domain::CreateItemInput, repository::memory::InMemoryItemRepository};
    /// use std::sync::Arc;
    /// let svc = ItemService::new(Arc::new(InMemoryItemRepository::default()));
    /// let input = CreateItemInput { item_code: Some("SKU1".into()), item_name: Some("Widget".into()), ..Default::default() };
    /// let item = tokio_test::block_on(svc.create(input)).unwrap();
    /// assert_eq!(item.quantity, 0);
    /// assert_eq!(item.location, "");
    /// ```
    #[instrument(skip(self, input), fields(item_code = ?input.item_code))]
    pub async fn create(&self, input: CreateItemInput) -> Result<Item, ServiceError> {
        let [item_code, item_name] = require_fields([
            ("item_code", &input.item_code),
            ("item_name", &input.item_name),
        ])?;
        let quantity = optional_int("quantity", &input.quantity)?.unwrap_or(0);
        let location = present(&input.location).unwrap_or_default().to_string();

        if self.repo.exists(item_code).await? {
            return Err(ServiceError::Conflict(format!("Item {item_code} already exists")));
        }

        let item = self.repo
            .insert(NewItem { item_code: item_code.to_string(), item_name: item_name.to_string(), quantity, location })
            .await?;
        info!(item_code = %item.item_code, quantity = item.quantity, "item_created");
        Ok(item)
    }

    pub async fn get(&self, input: ItemCodeInput) -> Result<Item, ServiceError> {
        let item_code = required_code(&input.item_code)?;
        self.repo
            .find(item_code)
            .await?
            .ok_or_else(|| not_found(item_code))
    }

    /// Partial update: only supplied fields change. A supplied empty location clears it;
    /// a supplied quantity must parse as an integer, even when blank.
    #[instrument(skip(self, input), fields(item_code = ?input.item_code))]
    pub async fn update(&self, input: UpdateItemInput) -> Result<Item, ServiceError> {
        let item_code = required_code(&input.item_code)?;
        let patch = ItemPatch {
            quantity: input.quantity.as_deref().map(|q| parse_int("quantity", q)).transpose()?,
            location: input.location.clone(),
        };
        let item = self.repo
            .update(item_code, patch)
            .await?
            .ok_or_else(|| not_found(item_code))?;
        info!(item_code = %item.item_code, quantity = item.quantity, "item_updated");
        Ok(item)
    }

    #[instrument(skip(self, input), fields(item_code = ?input.item_code))]
    pub async fn delete(&self, input: ItemCodeInput) -> Result<String, ServiceError> {
        let item_code = required_code(&input.item_code)?;
        if !self.repo.delete(item_code).await? {
            return Err(not_found(item_code));
        }
        info!(item_code, "item_deleted");
        Ok(item_code.to_string())
    }
}

fn required_code(value: &Option<String>) -> Result<&str, ServiceError> {
    present(value).ok_or_else(|| ServiceError::Validation("Missing item_code".into()))
}

fn not_found(item_code: &str) -> ServiceError {
    ServiceError::NotFound(format!("Item {item_code} not found"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::item::repository::memory::InMemoryItemRepository;
    use async_trait::async_trait;
    use std::sync::atomic::{AtomicUsize, Ordering};

    fn svc() -> ItemService<InMemoryItemRepository> {
        ItemService::new(Arc::new(InMemoryItemRepository::default()))
    }

    fn create_input(code: &str, name: &str) -> CreateItemInput {
        CreateItemInput { item_code: Some(code.into()), item_name: Some(name.into()), ..Default::default() }
    }

    fn code(c: &str) -> ItemCodeInput { ItemCodeInput { item_code: Some(c.into()) } }

    #[tokio::test]
    async fn item_lifecycle() -> Result<(), anyhow::Error> {
        let svc = svc();
        svc.create(create_input("SKU1", "Widget")).await?;

        let got = svc.get(code("SKU1")).await?;
        assert_eq!(got, Item { item_code: "SKU1".into(), item_name: "Widget".into(), quantity: 0, location: "".into() });

        svc.update(UpdateItemInput { item_code: Some("SKU1".into()), quantity: Some("5".into()), location: None }).await?;
        let got = svc.get(code("SKU1")).await?;
        assert_eq!(got.quantity, 5);
        assert_eq!(got.location, "");

        svc.delete(code("SKU1")).await?;
        let err = svc.get(code("SKU1")).await.unwrap_err();
        assert!(matches!(err, ServiceError::NotFound(ref m) if m == "Item SKU1 not found"));
        Ok(())
    }

    #[tokio::test]
    async fn create_applies_supplied_values() -> Result<(), anyhow::Error> {
        let svc = svc();
        let input = CreateItemInput { quantity: Some("12".into()), location: Some("Bay 3".into()), ..create_input("SKU7", "Bolt") };
        let item = svc.create(input).await?;
        assert_eq!(item.quantity, 12);
        assert_eq!(item.location, "Bay 3");
        Ok(())
    }

    #[tokio::test]
    async fn create_requires_code_and_name() {
        let err = svc().create(CreateItemInput::default()).await.unwrap_err();
        assert_eq!(err.to_string(), "Missing required fields: item_code, item_name");

        let err = svc().create(CreateItemInput { item_code: Some("SKU1".into()), ..Default::default() }).await.unwrap_err();
        assert_eq!(err.to_string(), "Missing required fields: item_name");
    }

    #[tokio::test]
    async fn duplicate_code_conflicts_without_mutation() -> Result<(), anyhow::Error> {
        let svc = svc();
        svc.create(create_input("SKU1", "Widget")).await?;
        let err = svc.create(create_input("SKU1", "Gadget")).await.unwrap_err();
        assert!(matches!(err, ServiceError::Conflict(ref m) if m == "Item SKU1 already exists"));
        assert_eq!(svc.get(code("SKU1")).await?.item_name, "Widget");
        Ok(())
    }

    #[tokio::test]
    async fn negative_update_keeps_stored_quantity() -> Result<(), anyhow::Error> {
        let svc = svc();
        svc.create(CreateItemInput { quantity: Some("4".into()), ..create_input("SKU1", "Widget") }).await?;
        let err = svc
            .update(UpdateItemInput { item_code: Some("SKU1".into()), quantity: Some("-1".into()), location: Some("X".into()) })
            .await
            .unwrap_err();
        assert!(matches!(err, ServiceError::Invariant(ref m) if m == "Quantity cannot be negative"));
        let got = svc.get(code("SKU1")).await?;
        assert_eq!(got.quantity, 4);
        assert_eq!(got.location, "");
        Ok(())
    }

    #[tokio::test]
    async fn update_location_only_and_clear() -> Result<(), anyhow::Error> {
        let svc = svc();
        svc.create(CreateItemInput { quantity: Some("2".into()), location: Some("A1".into()), ..create_input("SKU1", "Widget") }).await?;
        let item = svc.update(UpdateItemInput { item_code: Some("SKU1".into()), quantity: None, location: Some("".into()) }).await?;
        assert_eq!(item.quantity, 2);
        assert_eq!(item.location, "");
        Ok(())
    }

    #[tokio::test]
    async fn blank_quantity_on_update_is_rejected() -> Result<(), anyhow::Error> {
        let svc = svc();
        svc.create(CreateItemInput { quantity: Some("4".into()), ..create_input("SKU1", "Widget") }).await?;
        let err = svc
            .update(UpdateItemInput { item_code: Some("SKU1".into()), quantity: Some("".into()), location: None })
            .await
            .unwrap_err();
        assert!(matches!(err, ServiceError::Validation(ref m) if m == "quantity must be an integer"));
        assert_eq!(svc.get(code("SKU1")).await?.quantity, 4);
        Ok(())
    }

    #[tokio::test]
    async fn missing_code_and_unknown_code() {
        let svc = svc();
        let err = svc.get(ItemCodeInput::default()).await.unwrap_err();
        assert!(matches!(err, ServiceError::Validation(ref m) if m == "Missing item_code"));
        let err = svc.update(UpdateItemInput::default()).await.unwrap_err();
        assert_eq!(err.to_string(), "Missing item_code");
        let err = svc.delete(ItemCodeInput::default()).await.unwrap_err();
        assert!(matches!(err, ServiceError::Validation(ref m) if m == "Missing item_code"));
        let err = svc.delete(code("nope")).await.unwrap_err();
        assert!(matches!(err, ServiceError::NotFound(_)));
        let err = svc.update(UpdateItemInput { item_code: Some("nope".into()), quantity: Some("1".into()), location: None }).await.unwrap_err();
        assert_eq!(err.to_string(), "Item nope not found");
    }

    #[tokio::test]
    async fn non_integer_quantity_is_rejected() {
        let err = svc()
            .create(CreateItemInput { quantity: Some("lots".into()), ..create_input("SKU1", "Widget") })
            .await
            .unwrap_err();
        assert!(matches!(err, ServiceError::Validation(_)));
    }

    /// Counts every store call so tests can assert validation happens first.
    #[derive(Default)]
    struct CountingRepo {
        inner: InMemoryItemRepository,
        calls: AtomicUsize,
    }

    impl CountingRepo {
        fn touch(&self) { self.calls.fetch_add(1, Ordering::SeqCst); }
    }

    #[async_trait]
    impl ItemRepository for CountingRepo {
        async fn exists(&self, item_code: &str) -> Result<bool, ServiceError> { self.touch(); self.inner.exists(item_code).await }
        async fn insert(&self, new: NewItem) -> Result<Item, ServiceError> { self.touch(); self.inner.insert(new).await }
        async fn find(&self, item_code: &str) -> Result<Option<Item>, ServiceError> { self.touch(); self.inner.find(item_code).await }
        async fn update(&self, item_code: &str, patch: ItemPatch) -> Result<Option<Item>, ServiceError> {
            self.touch();
            self.inner.update(item_code, patch).await
        }
        async fn delete(&self, item_code: &str) -> Result<bool, ServiceError> { self.touch(); self.inner.delete(item_code).await }
    }

    #[tokio::test]
    async fn missing_fields_never_reach_the_store() {
        let repo = Arc::new(CountingRepo::default());
        let svc = ItemService::new(repo.clone());

        assert!(svc.create(CreateItemInput { item_code: Some("SKU1".into()), ..Default::default() }).await.is_err());
        assert!(svc.create(CreateItemInput { quantity: Some("x".into()), ..create_input("SKU1", "Widget") }).await.is_err());
        assert!(svc.get(ItemCodeInput::default()).await.is_err());
        assert!(svc.update(UpdateItemInput { item_code: Some(" ".into()), quantity: Some("1".into()), location: None }).await.is_err());
        assert!(svc.delete(ItemCodeInput::default()).await.is_err());

        assert_eq!(repo.calls.load(Ordering::SeqCst), 0);
    }
}
