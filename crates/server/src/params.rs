//! Request parameter extraction shared by every API endpoint.
//!
//! Endpoints accept GET or POST. Parameters come from the query string and,
//! when present, a form or JSON body; body values win over query values.

use axum::async_trait;
use axum::body::Bytes;
use axum::extract::{FromRequest, Query, Request};
use axum::http::header::CONTENT_TYPE;
use axum::Form;
use serde::de::DeserializeOwned;
use serde_json::{Map, Value};

use crate::envelope::Envelope;

/// Merged request parameters deserialised into `T`. Every value reaches `T` as a string.
#[derive(Debug)]
pub struct Params<T>(pub T);

#[async_trait]
impl<S, T> FromRequest<S> for Params<T>
where
    S: Send + Sync,
    T: DeserializeOwned,
{
    type Rejection = Envelope;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let mut merged = Map::new();
        let Query(pairs) = Query::<Vec<(String, String)>>::try_from_uri(req.uri())
            .map_err(|e| Envelope::error(format!("Invalid query string: {}", e.body_text())))?;
        merge_pairs(&mut merged, pairs);

        let content_type = req
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .unwrap_or_default()
            .to_ascii_lowercase();

        if content_type.starts_with("application/x-www-form-urlencoded") {
            let Form(pairs) = Form::<Vec<(String, String)>>::from_request(req, state)
                .await
                .map_err(|e| Envelope::error(format!("Invalid form body: {}", e.body_text())))?;
            merge_pairs(&mut merged, pairs);
        } else if content_type.starts_with("application/json") {
            let bytes = Bytes::from_request(req, state)
                .await
                .map_err(|e| Envelope::error(format!("Invalid request body: {}", e.body_text())))?;
            if !bytes.is_empty() {
                merge_json(&mut merged, &bytes)?;
            }
        }

        serde_json::from_value(Value::Object(merged))
            .map(Params)
            .map_err(|e| Envelope::error(format!("Invalid parameters: {e}")))
    }
}

fn merge_pairs(merged: &mut Map<String, Value>, pairs: Vec<(String, String)>) {
    for (k, v) in pairs {
        merged.insert(k, Value::String(v));
    }
}

fn merge_json(merged: &mut Map<String, Value>, bytes: &[u8]) -> Result<(), Envelope> {
    let value: Value = serde_json::from_slice(bytes)
        .map_err(|e| Envelope::error(format!("Invalid JSON body: {e}")))?;
    let Value::Object(obj) = value else {
        return Err(Envelope::error("Request body must be a JSON object"));
    };
    for (k, v) in obj {
        let text = match v {
            Value::Null => continue,
            Value::String(s) => s,
            other => other.to_string(),
        };
        merged.insert(k, Value::String(text));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use serde::Deserialize;

    #[derive(Debug, Deserialize)]
    struct Input {
        item_code: Option<String>,
        quantity: Option<String>,
    }

    async fn extract(req: Request) -> Result<Input, Envelope> {
        Params::<Input>::from_request(req, &()).await.map(|Params(i)| i)
    }

    #[tokio::test]
    async fn query_only() {
        let req = Request::builder().uri("/x?item_code=SKU1").body(Body::empty()).unwrap();
        let input = extract(req).await.unwrap();
        assert_eq!(input.item_code.as_deref(), Some("SKU1"));
        assert_eq!(input.quantity, None);
    }

    #[tokio::test]
    async fn json_numbers_become_strings_and_override_query() {
        let req = Request::builder()
            .method("POST")
            .uri("/x?item_code=OLD&quantity=1")
            .header(CONTENT_TYPE, "application/json")
            .body(Body::from(r#"{"item_code":"SKU1","quantity":5}"#))
            .unwrap();
        let input = extract(req).await.unwrap();
        assert_eq!(input.item_code.as_deref(), Some("SKU1"));
        assert_eq!(input.quantity.as_deref(), Some("5"));
    }

    #[tokio::test]
    async fn form_body() {
        let req = Request::builder()
            .method("POST")
            .uri("/x")
            .header(CONTENT_TYPE, "application/x-www-form-urlencoded")
            .body(Body::from("item_code=SKU%201&quantity=3"))
            .unwrap();
        let input = extract(req).await.unwrap();
        assert_eq!(input.item_code.as_deref(), Some("SKU 1"));
        assert_eq!(input.quantity.as_deref(), Some("3"));
    }

    #[tokio::test]
    async fn non_object_json_is_rejected() {
        let req = Request::builder()
            .method("POST")
            .uri("/x")
            .header(CONTENT_TYPE, "application/json")
            .body(Body::from("[1,2]"))
            .unwrap();
        assert!(matches!(extract(req).await, Err(Envelope::Err(_))));
    }
}
