use sea_orm::{entity::prelude::*, Set, ConnectionTrait, QueryFilter};
use uuid::Uuid;
use chrono::Utc;
use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::errors::ModelError;

pub const DEFAULT_ROLE: &str = "Staff";

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "warehouse_user")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    #[sea_orm(unique)]
    pub email: String,
    pub full_name: String,
    pub role: String,
    pub phone_number: Option<String>,
    pub created_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter)]
pub enum Relation {}

impl RelationTrait for Relation {
    fn def(&self) -> RelationDef { match *self {} }
}

impl ActiveModelBehavior for ActiveModel {}

/// Soft check only: a user without email is still saved.
pub fn check_email(email: &str) {
    if email.trim().is_empty() {
        warn!("Warning: Email not provided for user.");
    }
}

pub async fn exists_by_email<C: ConnectionTrait>(db: &C, email: &str) -> Result<bool, ModelError> {
    let found = Entity::find().filter(Column::Email.eq(email)).one(db).await?;
    Ok(found.is_some())
}

pub async fn create<C: ConnectionTrait>(
    db: &C,
    full_name: &str,
    email: &str,
    role: &str,
    phone_number: Option<&str>,
) -> Result<Model, ModelError> {
    check_email(email);
    let am = ActiveModel {
        id: Set(Uuid::new_v4()),
        email: Set(email.to_string()),
        full_name: Set(full_name.to_string()),
        role: Set(role.to_string()),
        phone_number: Set(phone_number.map(str::to_string)),
        created_at: Set(Utc::now().into()),
    };
    Ok(am.insert(db).await?)
}
