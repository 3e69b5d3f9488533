//! Uniform JSON response encoding.
//!
//! Every body this API produces is pretty-printed JSON served with an
//! explicit `application/json` content type: collection envelopes,
//! single records, and the `{"error": ...}` failure envelope all funnel
//! through the helpers here.

use axum::http::{header, HeaderValue, StatusCode};
use axum::response::{IntoResponse, Response};
use serde::Serialize;

use crate::error::ApiError;

/// Responder that renders its payload as pretty-printed JSON.
///
/// Axum's own `Json` writes compact output; this API's contract is
/// human-readable bodies, so handlers return [`PrettyJson`] instead.
#[derive(Debug)]
pub struct PrettyJson<T>(pub T);

impl<T> IntoResponse for PrettyJson<T>
where
    T: Serialize,
{
    fn into_response(self) -> Response {
        match serde_json::to_vec_pretty(&self.0) {
            Ok(body) => json_parts(StatusCode::OK, body),
            Err(source) => ApiError::Encoding(source).into_response(),
        }
    }
}

/// Build the `{"error": ...}` envelope with the given status.
pub fn error_body(status: StatusCode, message: &str) -> Response {
    let body = serde_json::json!({ "error": message });

    // A single-string object cannot fail to serialize; the fallback just
    // keeps this path panic-free.
    let bytes = serde_json::to_vec_pretty(&body).unwrap_or_else(|_| message.as_bytes().to_vec());

    json_parts(status, bytes)
}

/// Assemble a response from a status and an already-encoded JSON body.
fn json_parts(status: StatusCode, body: Vec<u8>) -> Response {
    (
        status,
        [(header::CONTENT_TYPE, HeaderValue::from_static("application/json"))],
        body,
    )
        .into_response()
}
