use sea_orm::{entity::prelude::*, Set, ConnectionTrait, QueryFilter};
use uuid::Uuid;
use chrono::Utc;
use serde::{Deserialize, Serialize};

use crate::errors::ModelError;

pub const DEFAULT_STATUS: &str = "Pending";

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "warehouse_order")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    #[sea_orm(unique)]
    pub order_id: String,
    pub customer_name: String,
    pub item: String,
    pub quantity: i64,
    pub status: String,
    pub created_at: DateTimeWithTimeZone,
    pub updated_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter)]
pub enum Relation {}

impl RelationTrait for Relation {
    fn def(&self) -> RelationDef { match *self {} }
}

impl ActiveModelBehavior for ActiveModel {}

pub fn validate_quantity(quantity: i64) -> Result<(), ModelError> {
    if quantity <= 0 {
        return Err(ModelError::Invariant("Quantity must be greater than zero".into()));
    }
    Ok(())
}

pub async fn find_by_order_id<C: ConnectionTrait>(db: &C, order_id: &str) -> Result<Option<Model>, ModelError> {
    Ok(Entity::find().filter(Column::OrderId.eq(order_id)).one(db).await?)
}

/// Insert a new order. Status always starts as [`DEFAULT_STATUS`].
pub async fn create<C: ConnectionTrait>(
    db: &C,
    order_id: &str,
    customer_name: &str,
    item: &str,
    quantity: i64,
) -> Result<Model, ModelError> {
    validate_quantity(quantity)?;
    let now = Utc::now().into();
    let am = ActiveModel {
        id: Set(Uuid::new_v4()),
        order_id: Set(order_id.to_string()),
        customer_name: Set(customer_name.to_string()),
        item: Set(item.to_string()),
        quantity: Set(quantity),
        status: Set(DEFAULT_STATUS.to_string()),
        created_at: Set(now),
        updated_at: Set(now),
    };
    Ok(am.insert(db).await?)
}

pub async fn set_status<C: ConnectionTrait>(db: &C, existing: Model, status: &str) -> Result<Model, ModelError> {
    // the stored row is re-validated on every save
    validate_quantity(existing.quantity)?;
    let mut am: ActiveModel = existing.into();
    am.status = Set(status.to_string());
    am.updated_at = Set(Utc::now().into());
    Ok(am.update(db).await?)
}
