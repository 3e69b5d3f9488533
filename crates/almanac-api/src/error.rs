//! Error types for the Almanac API layer.
//!
//! [`ApiError`] unifies all failure modes into a single enum that can be
//! converted into an Axum HTTP response via its
//! [`IntoResponse`](axum::response::IntoResponse) implementation. Every
//! user-visible failure becomes the same `{"error": ...}` JSON envelope
//! with the appropriate status code; no handler leaks a raw error.

use axum::extract::rejection::QueryRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

use crate::response;

/// Errors that can occur while answering an API request.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// The requested resource does not exist in the catalog.
    ///
    /// Also covers id path segments that fail to parse: a malformed id
    /// cannot name any record, so it is reported as the resource not
    /// being found rather than as a bad request.
    #[error("{0} not found")]
    NotFound(&'static str),

    /// No route matched the requested path.
    #[error("Not found")]
    UnknownPath,

    /// The path exists but was requested with an unsupported method.
    #[error("Method not allowed")]
    MethodNotAllowed,

    /// The query string could not be deserialized.
    ///
    /// Carries the extractor's own message (a duplicated key, for
    /// example) so the envelope says what was wrong with the request.
    #[error("{0}")]
    InvalidQuery(String),

    /// A response payload failed to serialize.
    #[error("encoding error: {0}")]
    Encoding(#[from] serde_json::Error),
}

impl From<QueryRejection> for ApiError {
    fn from(rejection: QueryRejection) -> Self {
        Self::InvalidQuery(rejection.body_text())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match &self {
            Self::NotFound(_) | Self::UnknownPath => StatusCode::NOT_FOUND,
            Self::MethodNotAllowed => StatusCode::METHOD_NOT_ALLOWED,
            Self::InvalidQuery(_) => StatusCode::BAD_REQUEST,
            Self::Encoding(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };

        response::error_body(status, &self.to_string())
    }
}
