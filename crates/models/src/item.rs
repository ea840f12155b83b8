use sea_orm::{entity::prelude::*, Set, ConnectionTrait, QueryFilter};
use uuid::Uuid;
use chrono::Utc;
use serde::{Deserialize, Serialize};

use crate::errors::ModelError;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "item")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    #[sea_orm(unique)]
    pub item_code: String,
    pub item_name: String,
    pub quantity: i64,
    pub location: String,
    pub created_at: DateTimeWithTimeZone,
    pub updated_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter)]
pub enum Relation {}

impl RelationTrait for Relation {
    fn def(&self) -> RelationDef { match *self {} }
}

impl ActiveModelBehavior for ActiveModel {}

/// Stock on hand can never go below zero.
pub fn validate_quantity(quantity: i64) -> Result<(), ModelError> {
    if quantity < 0 {
        return Err(ModelError::Invariant("Quantity cannot be negative".into()));
    }
    Ok(())
}

pub async fn find_by_code<C: ConnectionTrait>(db: &C, item_code: &str) -> Result<Option<Model>, ModelError> {
    Ok(Entity::find().filter(Column::ItemCode.eq(item_code)).one(db).await?)
}

pub async fn create<C: ConnectionTrait>(
    db: &C,
    item_code: &str,
    item_name: &str,
    quantity: i64,
    location: &str,
) -> Result<Model, ModelError> {
    validate_quantity(quantity)?;
    let now = Utc::now().into();
    let am = ActiveModel {
        id: Set(Uuid::new_v4()),
        item_code: Set(item_code.to_string()),
        item_name: Set(item_name.to_string()),
        quantity: Set(quantity),
        location: Set(location.to_string()),
        created_at: Set(now),
        updated_at: Set(now),
    };
    Ok(am.insert(db).await?)
}

/// Apply a partial change; fields left as `None` keep their stored value.
pub async fn update<C: ConnectionTrait>(
    db: &C,
    existing: Model,
    quantity: Option<i64>,
    location: Option<&str>,
) -> Result<Model, ModelError> {
    let mut am: ActiveModel = existing.into();
    if let Some(q) = quantity {
        validate_quantity(q)?;
        am.quantity = Set(q);
    }
    if let Some(l) = location { am.location = Set(l.to_string()); }
    am.updated_at = Set(Utc::now().into());
    Ok(am.update(db).await?)
}
