pub mod items;
pub mod orders;
pub mod scan_logs;
pub mod warehouse_users;

use axum::{
    http::StatusCode,
    routing::{get, MethodRouter},
    Json, Router,
};
use tower_http::{
    cors::CorsLayer,
    trace::{DefaultMakeSpan, DefaultOnFailure, DefaultOnRequest, DefaultOnResponse, TraceLayer},
};
use tracing::Level;
use utoipa::OpenApi;

use common::types::Health;

use crate::openapi::ApiDoc;
use crate::state::AppState;

/// Dotted module path kept as a second mount point for existing clients.
pub const LEGACY_METHOD_PREFIX: &str = "smart_warehouse.api.warehouse_apis";

#[utoipa::path(get, path = "/health", tag = "health", responses((status = 200, description = "OK", body = crate::openapi::HealthResponse)))]
pub async fn health() -> Json<Health> {
    Json(Health { status: "ok" })
}

async fn metrics() -> (StatusCode, String) {
    common::metrics::encode_metrics()
}

async fn openapi_json() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}

/// Mount `handler` at both `/api/method/<name>` and the legacy dotted path.
fn method(router: Router<AppState>, name: &str, handler: MethodRouter<AppState>) -> Router<AppState> {
    router
        .route(&format!("/api/method/{name}"), handler.clone())
        .route(&format!("/api/method/{LEGACY_METHOD_PREFIX}.{name}"), handler)
}

/// Build the full application router: the API methods plus health, metrics and docs.
pub fn build_router(state: AppState, cors: CorsLayer) -> Router {
    let mut api = Router::new();
    api = method(api, "create_item", get(items::create_item).post(items::create_item));
    api = method(api, "get_item", get(items::get_item).post(items::get_item));
    api = method(api, "update_item", get(items::update_item).post(items::update_item));
    api = method(api, "delete_item", get(items::delete_item).post(items::delete_item));
    api = method(api, "create_order", get(orders::create_order).post(orders::create_order));
    api = method(api, "update_order_status", get(orders::update_order_status).post(orders::update_order_status));
    api = method(api, "list_orders", get(orders::list_orders).post(orders::list_orders));
    api = method(
        api,
        "create_warehouse_user",
        get(warehouse_users::create_warehouse_user).post(warehouse_users::create_warehouse_user),
    );
    api = method(
        api,
        "list_warehouse_users",
        get(warehouse_users::list_warehouse_users).post(warehouse_users::list_warehouse_users),
    );
    api = method(api, "log_scan", get(scan_logs::log_scan).post(scan_logs::log_scan));
    api = method(api, "get_scan_history", get(scan_logs::get_scan_history).post(scan_logs::get_scan_history));

    let public = Router::new()
        .route("/health", get(health))
        .route("/metrics", get(metrics))
        .route("/api-docs/openapi.json", get(openapi_json));

    public
        .merge(api.with_state(state))
        .layer(cors)
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO).include_headers(false))
                .on_request(DefaultOnRequest::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO).include_headers(false))
                .on_failure(DefaultOnFailure::new().level(Level::ERROR)),
        )
}
