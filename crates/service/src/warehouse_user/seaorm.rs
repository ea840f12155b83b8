use async_trait::async_trait;
use sea_orm::{DatabaseConnection, EntityTrait, TransactionTrait};

use models::warehouse_user;
use super::domain::{NewWarehouseUser, WarehouseUser};
use super::repository::WarehouseUserRepository;
use crate::errors::ServiceError;

pub struct SeaOrmWarehouseUserRepository {
    pub db: DatabaseConnection,
}

#[async_trait]
impl WarehouseUserRepository for SeaOrmWarehouseUserRepository {
    async fn exists(&self, email: &str) -> Result<bool, ServiceError> {
        Ok(warehouse_user::exists_by_email(&self.db, email).await?)
    }

    async fn insert(&self, new: NewWarehouseUser) -> Result<WarehouseUser, ServiceError> {
        let created = self.db
            .transaction::<_, warehouse_user::Model, ServiceError>(|txn| {
                Box::pin(async move {
                    Ok(warehouse_user::create(txn, &new.full_name, &new.email, &new.role, new.phone_number.as_deref()).await?)
                })
            })
            .await?;
        Ok(created.into())
    }

    async fn list(&self) -> Result<Vec<WarehouseUser>, ServiceError> {
        let rows = warehouse_user::Entity::find().all(&self.db).await?;
        Ok(rows.into_iter().map(WarehouseUser::from).collect())
    }
}
