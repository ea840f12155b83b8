use std::time::Instant;

use axum::extract::State;
use service::scan_log::domain::{LogScanInput, ScanHistoryInput};

use crate::envelope::{finish, Envelope};
use crate::params::Params;
use crate::state::AppState;

#[utoipa::path(
    post, path = "/api/method/log_scan", tag = "scans",
    request_body(content = crate::openapi::LogScanDoc, content_type = "application/x-www-form-urlencoded"),
    responses(
        (status = 200, description = "Scan appended", body = crate::openapi::MessageEnvelopeDoc),
        (status = 400, description = "Missing fields", body = crate::openapi::ErrorEnvelopeDoc)
    )
)]
pub async fn log_scan(State(state): State<AppState>, Params(input): Params<LogScanInput>) -> Envelope {
    let started = Instant::now();
    let result = state.scans.log(input).await;
    finish("log_scan", started, result, |log| {
        Envelope::message(format!("Scan logged for item {}", log.item))
    })
}

#[utoipa::path(
    get, path = "/api/method/get_scan_history", tag = "scans",
    params(("item" = String, Query, description = "Item code")),
    responses(
        (status = 200, description = "Scans of the item", body = crate::openapi::ScanHistoryDoc),
        (status = 400, description = "Missing item or no scans recorded", body = crate::openapi::ErrorEnvelopeDoc)
    )
)]
pub async fn get_scan_history(State(state): State<AppState>, Params(input): Params<ScanHistoryInput>) -> Envelope {
    let started = Instant::now();
    let result = state.scans.history(input).await;
    finish("get_scan_history", started, result, |logs| Envelope::payload("logs", &logs))
}
