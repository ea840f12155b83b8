use std::sync::Arc;
use tracing::{info, instrument};

use models::warehouse_user::DEFAULT_ROLE;
use super::domain::{CreateWarehouseUserInput, NewWarehouseUser, WarehouseUser};
use super::repository::WarehouseUserRepository;
use crate::errors::ServiceError;
use crate::validate::{or_default, present, require_fields};

pub struct WarehouseUserService<R: WarehouseUserRepository + ?Sized> {
    repo: Arc<R>,
}

impl<R: WarehouseUserRepository + ?Sized> WarehouseUserService<R> {
    pub fn new(repo: Arc<R>) -> Self { Self { repo } }

    /// Register a user. The email is not format-checked.
    #[instrument(skip(self, input), fields(email = ?input.email))]
    pub async fn create(&self, input: CreateWarehouseUserInput) -> Result<WarehouseUser, ServiceError> {
        let [full_name, email] = require_fields([
            ("full_name", &input.full_name),
            ("email", &input.email),
        ])?;

        if self.repo.exists(email).await? {
            return Err(ServiceError::Conflict(format!("User with email {email} already exists")));
        }

        let user = self.repo
            .insert(NewWarehouseUser {
                full_name: full_name.to_string(),
                email: email.to_string(),
                role: or_default(&input.role, DEFAULT_ROLE),
                phone_number: present(&input.phone_number).map(str::to_string),
            })
            .await?;
        info!(email = %user.email, role = %user.role, "warehouse_user_created");
        Ok(user)
    }

    pub async fn list(&self) -> Result<Vec<WarehouseUser>, ServiceError> {
        self.repo.list().await
    }
}
