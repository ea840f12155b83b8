use std::time::Instant;

use axum::extract::State;
use service::warehouse_user::domain::CreateWarehouseUserInput;

use crate::envelope::{finish, Envelope};
use crate::params::Params;
use crate::state::AppState;

#[utoipa::path(
    post, path = "/api/method/create_warehouse_user", tag = "users",
    request_body(content = crate::openapi::CreateWarehouseUserDoc, content_type = "application/x-www-form-urlencoded"),
    responses(
        (status = 200, description = "Created", body = crate::openapi::MessageEnvelopeDoc),
        (status = 400, description = "Missing fields or duplicate email", body = crate::openapi::ErrorEnvelopeDoc)
    )
)]
pub async fn create_warehouse_user(
    State(state): State<AppState>,
    Params(input): Params<CreateWarehouseUserInput>,
) -> Envelope {
    let started = Instant::now();
    let result = state.users.create(input).await;
    finish("create_warehouse_user", started, result, |user| {
        Envelope::message(format!("User {} created successfully", user.full_name))
    })
}

#[utoipa::path(
    get, path = "/api/method/list_warehouse_users", tag = "users",
    responses((status = 200, description = "All users", body = crate::openapi::UserListDoc))
)]
pub async fn list_warehouse_users(State(state): State<AppState>) -> Envelope {
    let started = Instant::now();
    let result = state.users.list().await;
    finish("list_warehouse_users", started, result, |users| Envelope::payload("users", &users))
}
