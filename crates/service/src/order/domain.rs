use serde::{Deserialize, Serialize};

/// create_order parameters. A caller-supplied status is ignored.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CreateOrderInput {
    pub order_id: Option<String>,
    pub customer_name: Option<String>,
    pub item: Option<String>,
    pub quantity: Option<String>,
}

/// update_order_status parameters
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdateOrderStatusInput {
    pub order_id: Option<String>,
    pub status: Option<String>,
}

#[derive(Debug, Clone)]
pub struct NewOrder {
    pub order_id: String,
    pub customer_name: String,
    pub item: String,
    pub quantity: i64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Order {
    pub order_id: String,
    pub customer_name: String,
    pub item: String,
    pub quantity: i64,
    pub status: String,
}

impl From<models::order::Model> for Order {
    fn from(m: models::order::Model) -> Self {
        Self { order_id: m.order_id, customer_name: m.customer_name, item: m.item, quantity: m.quantity, status: m.status }
    }
}
