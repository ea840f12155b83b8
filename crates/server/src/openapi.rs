use utoipa::OpenApi;
use utoipa::ToSchema;

#[derive(ToSchema)]
pub struct HealthResponse { pub status: String }

#[derive(ToSchema)]
pub struct MessageEnvelopeDoc { pub status: u16, pub message: String }

#[derive(ToSchema)]
pub struct ErrorEnvelopeDoc { pub status: u16, pub message: String, pub error: bool }

#[derive(ToSchema)]
pub struct CreateItemDoc {
    pub item_code: String,
    pub item_name: String,
    pub quantity: Option<i64>,
    pub location: Option<String>,
}

#[derive(ToSchema)]
pub struct UpdateItemDoc { pub item_code: String, pub quantity: Option<i64>, pub location: Option<String> }

#[derive(ToSchema)]
pub struct ItemEnvelopeDoc {
    pub status: u16,
    pub item_code: String,
    pub item_name: String,
    pub quantity: i64,
    pub location: String,
}

#[derive(ToSchema)]
pub struct CreateOrderDoc { pub order_id: String, pub customer_name: String, pub item: String, pub quantity: i64 }

#[derive(ToSchema)]
pub struct UpdateOrderStatusDoc { pub order_id: String, pub status: String }

#[derive(ToSchema)]
pub struct OrderDoc { pub order_id: String, pub customer_name: String, pub item: String, pub quantity: i64, pub status: String }

#[derive(ToSchema)]
pub struct OrderListDoc { pub status: u16, pub orders: Vec<OrderDoc> }

#[derive(ToSchema)]
pub struct CreateWarehouseUserDoc {
    pub full_name: String,
    pub email: String,
    pub role: Option<String>,
    pub phone_number: Option<String>,
}

#[derive(ToSchema)]
pub struct UserDoc { pub full_name: String, pub email: String, pub role: String, pub phone_number: Option<String> }

#[derive(ToSchema)]
pub struct UserListDoc { pub status: u16, pub users: Vec<UserDoc> }

#[derive(ToSchema)]
pub struct LogScanDoc { pub item: String, pub scanned_by: String, pub scan_type: Option<String>, pub remarks: Option<String> }

#[derive(ToSchema)]
pub struct ScanLogDoc {
    pub item: String,
    pub scanned_by: String,
    /// RFC 3339 timestamp
    pub scan_time: String,
    pub scan_type: String,
    pub remarks: Option<String>,
}

#[derive(ToSchema)]
pub struct ScanHistoryDoc { pub status: u16, pub logs: Vec<ScanLogDoc> }

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::routes::health,
        crate::routes::items::create_item,
        crate::routes::items::get_item,
        crate::routes::items::update_item,
        crate::routes::items::delete_item,
        crate::routes::orders::create_order,
        crate::routes::orders::update_order_status,
        crate::routes::orders::list_orders,
        crate::routes::warehouse_users::create_warehouse_user,
        crate::routes::warehouse_users::list_warehouse_users,
        crate::routes::scan_logs::log_scan,
        crate::routes::scan_logs::get_scan_history,
    ),
    components(
        schemas(
            HealthResponse,
            MessageEnvelopeDoc,
            ErrorEnvelopeDoc,
            CreateItemDoc,
            UpdateItemDoc,
            ItemEnvelopeDoc,
            CreateOrderDoc,
            UpdateOrderStatusDoc,
            OrderDoc,
            OrderListDoc,
            CreateWarehouseUserDoc,
            UserDoc,
            UserListDoc,
            LogScanDoc,
            ScanLogDoc,
            ScanHistoryDoc,
        )
    ),
    tags(
        (name = "health"),
        (name = "items"),
        (name = "orders"),
        (name = "users"),
        (name = "scans")
    )
)]
pub struct ApiDoc;
