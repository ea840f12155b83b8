use std::time::Instant;

use axum::extract::State;
use service::item::domain::{CreateItemInput, ItemCodeInput, UpdateItemInput};

use crate::envelope::{finish, Envelope};
use crate::params::Params;
use crate::state::AppState;

#[utoipa::path(
    post, path = "/api/method/create_item", tag = "items",
    request_body(content = crate::openapi::CreateItemDoc, content_type = "application/x-www-form-urlencoded"),
    responses(
        (status = 200, description = "Created", body = crate::openapi::MessageEnvelopeDoc),
        (status = 400, description = "Missing fields, duplicate code or negative quantity", body = crate::openapi::ErrorEnvelopeDoc)
    )
)]
pub async fn create_item(State(state): State<AppState>, Params(input): Params<CreateItemInput>) -> Envelope {
    let started = Instant::now();
    let result = state.items.create(input).await;
    finish("create_item", started, result, |item| {
        Envelope::message(format!("Item {} created successfully", item.item_code))
    })
}

#[utoipa::path(
    get, path = "/api/method/get_item", tag = "items",
    params(("item_code" = String, Query, description = "Item code")),
    responses(
        (status = 200, description = "Item fields", body = crate::openapi::ItemEnvelopeDoc),
        (status = 400, description = "Missing or unknown item code", body = crate::openapi::ErrorEnvelopeDoc)
    )
)]
pub async fn get_item(State(state): State<AppState>, Params(input): Params<ItemCodeInput>) -> Envelope {
    let started = Instant::now();
    let result = state.items.get(input).await;
    finish("get_item", started, result, |item| Envelope::fields(&item))
}

#[utoipa::path(
    post, path = "/api/method/update_item", tag = "items",
    request_body(content = crate::openapi::UpdateItemDoc, content_type = "application/x-www-form-urlencoded"),
    responses(
        (status = 200, description = "Updated", body = crate::openapi::MessageEnvelopeDoc),
        (status = 400, description = "Missing or unknown item code, negative quantity", body = crate::openapi::ErrorEnvelopeDoc)
    )
)]
pub async fn update_item(State(state): State<AppState>, Params(input): Params<UpdateItemInput>) -> Envelope {
    let started = Instant::now();
    let result = state.items.update(input).await;
    finish("update_item", started, result, |item| {
        Envelope::message(format!("Item {} updated successfully", item.item_code))
    })
}

#[utoipa::path(
    post, path = "/api/method/delete_item", tag = "items",
    params(("item_code" = String, Query, description = "Item code")),
    responses(
        (status = 200, description = "Deleted", body = crate::openapi::MessageEnvelopeDoc),
        (status = 400, description = "Missing or unknown item code", body = crate::openapi::ErrorEnvelopeDoc)
    )
)]
pub async fn delete_item(State(state): State<AppState>, Params(input): Params<ItemCodeInput>) -> Envelope {
    let started = Instant::now();
    let result = state.items.delete(input).await;
    finish("delete_item", started, result, |code| {
        Envelope::message(format!("Item {code} deleted successfully"))
    })
}
