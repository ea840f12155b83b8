use serde::{Deserialize, Serialize};

/// create_item parameters
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CreateItemInput {
    pub item_code: Option<String>,
    pub item_name: Option<String>,
    pub quantity: Option<String>,
    pub location: Option<String>,
}

/// get_item / delete_item parameters
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ItemCodeInput {
    pub item_code: Option<String>,
}

/// update_item parameters
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdateItemInput {
    pub item_code: Option<String>,
    pub quantity: Option<String>,
    pub location: Option<String>,
}

/// Validated insert, defaults already applied.
#[derive(Debug, Clone)]
pub struct NewItem {
    pub item_code: String,
    pub item_name: String,
    pub quantity: i64,
    pub location: String,
}

/// Fields to overwrite on update; `None` leaves the stored value alone.
#[derive(Debug, Clone, Default)]
pub struct ItemPatch {
    pub quantity: Option<i64>,
    pub location: Option<String>,
}

/// Stored item as returned to callers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Item {
    pub item_code: String,
    pub item_name: String,
    pub quantity: i64,
    pub location: String,
}

impl From<models::item::Model> for Item {
    fn from(m: models::item::Model) -> Self {
        Self { item_code: m.item_code, item_name: m.item_name, quantity: m.quantity, location: m.location }
    }
}
