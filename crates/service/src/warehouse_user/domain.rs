use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CreateWarehouseUserInput {
    pub full_name: Option<String>,
    pub email: Option<String>,
    pub role: Option<String>,
    pub phone_number: Option<String>,
}

#[derive(Debug, Clone)]
pub struct NewWarehouseUser {
    pub full_name: String,
    pub email: String,
    pub role: String,
    pub phone_number: Option<String>,
}

/// A staff member. Email is the unique key.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WarehouseUser {
    pub full_name: String,
    pub email: String,
    pub role: String,
    pub phone_number: Option<String>,
}

impl From<models::warehouse_user::Model> for WarehouseUser {
    fn from(m: models::warehouse_user::Model) -> Self {
        Self { full_name: m.full_name, email: m.email, role: m.role, phone_number: m.phone_number }
    }
}
