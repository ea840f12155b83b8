use std::time::Instant;

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;
use serde_json::{Map, Value};
use tracing::{error, info};

use service::errors::ServiceError;

/// The uniform response body: `{status:200, ...}` or `{status:400, message, error:true}`.
///
/// The HTTP status line always matches the `status` field.
#[derive(Debug)]
pub enum Envelope {
    Ok(Map<String, Value>),
    Err(String),
}

impl Envelope {
    pub fn message(message: impl Into<String>) -> Self {
        let mut body = Map::new();
        body.insert("message".into(), Value::String(message.into()));
        Envelope::Ok(body)
    }

    /// A single named payload, e.g. `{"orders": [...]}`.
    pub fn payload<T: Serialize>(key: &str, value: &T) -> Self {
        match serde_json::to_value(value) {
            Ok(v) => {
                let mut body = Map::new();
                body.insert(key.to_string(), v);
                Envelope::Ok(body)
            }
            Err(e) => Envelope::Err(format!("failed to encode response: {e}")),
        }
    }

    /// The record's own fields inlined next to `status`.
    pub fn fields<T: Serialize>(value: &T) -> Self {
        match serde_json::to_value(value) {
            Ok(Value::Object(body)) => Envelope::Ok(body),
            Ok(_) => Envelope::Err("failed to encode response".into()),
            Err(e) => Envelope::Err(format!("failed to encode response: {e}")),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Envelope::Err(message.into())
    }
}

impl IntoResponse for Envelope {
    fn into_response(self) -> Response {
        match self {
            Envelope::Ok(mut body) => {
                body.insert("status".into(), Value::from(200));
                (StatusCode::OK, Json(Value::Object(body))).into_response()
            }
            Envelope::Err(message) => {
                let body = serde_json::json!({ "status": 400, "message": message, "error": true });
                (StatusCode::BAD_REQUEST, Json(body)).into_response()
            }
        }
    }
}

/// Turn a service result into an envelope, recording the call in logs and metrics.
pub fn finish<T>(
    endpoint: &'static str,
    started: Instant,
    result: Result<T, ServiceError>,
    on_ok: impl FnOnce(T) -> Envelope,
) -> Envelope {
    let elapsed = started.elapsed().as_secs_f64();
    match result {
        Ok(v) => {
            common::metrics::observe_call(endpoint, "ok", elapsed);
            on_ok(v)
        }
        Err(e) => {
            common::metrics::observe_call(endpoint, e.kind(), elapsed);
            match e {
                ServiceError::Db(_) => error!(endpoint, kind = e.kind(), error = %e, "request_failed"),
                _ => info!(endpoint, kind = e.kind(), message = %e, "request_rejected"),
            }
            Envelope::error(e.to_string())
        }
    }
}
