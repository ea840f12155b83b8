use std::time::Instant;

use axum::extract::State;
use service::order::domain::{CreateOrderInput, UpdateOrderStatusInput};

use crate::envelope::{finish, Envelope};
use crate::params::Params;
use crate::state::AppState;

#[utoipa::path(
    post, path = "/api/method/create_order", tag = "orders",
    request_body(content = crate::openapi::CreateOrderDoc, content_type = "application/x-www-form-urlencoded"),
    responses(
        (status = 200, description = "Created with status Pending", body = crate::openapi::MessageEnvelopeDoc),
        (status = 400, description = "Missing fields, duplicate order or non-positive quantity", body = crate::openapi::ErrorEnvelopeDoc)
    )
)]
pub async fn create_order(State(state): State<AppState>, Params(input): Params<CreateOrderInput>) -> Envelope {
    let started = Instant::now();
    let result = state.orders.create(input).await;
    finish("create_order", started, result, |order| {
        Envelope::message(format!("Order {} created successfully", order.order_id))
    })
}

#[utoipa::path(
    post, path = "/api/method/update_order_status", tag = "orders",
    request_body(content = crate::openapi::UpdateOrderStatusDoc, content_type = "application/x-www-form-urlencoded"),
    responses(
        (status = 200, description = "Status changed", body = crate::openapi::MessageEnvelopeDoc),
        (status = 400, description = "Missing parameters or unknown order", body = crate::openapi::ErrorEnvelopeDoc)
    )
)]
pub async fn update_order_status(State(state): State<AppState>, Params(input): Params<UpdateOrderStatusInput>) -> Envelope {
    let started = Instant::now();
    let result = state.orders.update_status(input).await;
    finish("update_order_status", started, result, |order| {
        Envelope::message(format!("Order {} status updated to {}", order.order_id, order.status))
    })
}

#[utoipa::path(
    get, path = "/api/method/list_orders", tag = "orders",
    responses((status = 200, description = "All orders", body = crate::openapi::OrderListDoc))
)]
pub async fn list_orders(State(state): State<AppState>) -> Envelope {
    let started = Instant::now();
    let result = state.orders.list().await;
    finish("list_orders", started, result, |orders| Envelope::payload("orders", &orders))
}
