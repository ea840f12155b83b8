use sea_orm::{entity::prelude::*, Set, ConnectionTrait, QueryFilter};
use uuid::Uuid;
use chrono::Utc;
use serde::{Deserialize, Serialize};

use crate::errors::ModelError;

pub const DEFAULT_SCAN_TYPE: &str = "Inward";

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "scan_log")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub item: String,
    pub scanned_by: String,
    pub scan_type: String,
    pub remarks: Option<String>,
    pub scan_time: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter)]
pub enum Relation {}

impl RelationTrait for Relation {
    fn def(&self) -> RelationDef { match *self {} }
}

impl ActiveModelBehavior for ActiveModel {}

/// Append a scan event. `scan_time` falls back to the current time.
pub async fn create<C: ConnectionTrait>(
    db: &C,
    item: &str,
    scanned_by: &str,
    scan_type: &str,
    remarks: Option<&str>,
    scan_time: Option<DateTimeWithTimeZone>,
) -> Result<Model, ModelError> {
    let am = ActiveModel {
        id: Set(Uuid::new_v4()),
        item: Set(item.to_string()),
        scanned_by: Set(scanned_by.to_string()),
        scan_type: Set(scan_type.to_string()),
        remarks: Set(remarks.map(str::to_string)),
        scan_time: Set(scan_time.unwrap_or_else(|| Utc::now().into())),
    };
    Ok(am.insert(db).await?)
}

pub async fn list_by_item<C: ConnectionTrait>(db: &C, item: &str) -> Result<Vec<Model>, ModelError> {
    Ok(Entity::find().filter(Column::Item.eq(item)).all(db).await?)
}
