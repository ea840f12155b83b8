use async_trait::async_trait;

use super::domain::{NewWarehouseUser, WarehouseUser};
use crate::errors::ServiceError;

#[async_trait]
pub trait WarehouseUserRepository: Send + Sync {
    async fn exists(&self, email: &str) -> Result<bool, ServiceError>;
    async fn insert(&self, new: NewWarehouseUser) -> Result<WarehouseUser, ServiceError>;
    async fn list(&self) -> Result<Vec<WarehouseUser>, ServiceError>;
}

pub mod memory {
    use super::*;
    use tokio::sync::RwLock;

    #[derive(Default)]
    pub struct InMemoryWarehouseUserRepository {
        users: RwLock<Vec<WarehouseUser>>,
    }

    #[async_trait]
    impl WarehouseUserRepository for InMemoryWarehouseUserRepository {
        async fn exists(&self, email: &str) -> Result<bool, ServiceError> {
            Ok(self.users.read().await.iter().any(|u| u.email == email))
        }

        async fn insert(&self, new: NewWarehouseUser) -> Result<WarehouseUser, ServiceError> {
            models::warehouse_user::check_email(&new.email);
            let mut users = self.users.write().await;
            if users.iter().any(|u| u.email == new.email) {
                return Err(ServiceError::Conflict(format!("User with email {} already exists", new.email)));
            }
            let user = WarehouseUser { full_name: new.full_name, email: new.email, role: new.role, phone_number: new.phone_number };
            users.push(user.clone());
            Ok(user)
        }

        async fn list(&self) -> Result<Vec<WarehouseUser>, ServiceError> {
            Ok(self.users.read().await.clone())
        }
    }
}
