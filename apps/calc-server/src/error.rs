//! Error types for the arithmetic service.
//!
//! Every variant maps to HTTP 400 with an `{"error": "..."}` body; the service
//! has no 5xx path.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use calc_core::{ArithmeticResponse, CoreError};

/// Message reported when a handler fails unexpectedly.
pub const INTERNAL_ERROR_MESSAGE: &str = "An unexpected error occurred.";

/// Arithmetic service errors.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// The request was understood but cannot be computed.
    #[error(transparent)]
    Calculation(#[from] CoreError),

    /// The query string could not be decoded.
    #[error("Invalid query: {0}")]
    InvalidQuery(String),

    /// A handler panicked.
    #[error("{}", INTERNAL_ERROR_MESSAGE)]
    Internal,
}

impl ApiError {
    /// Machine-readable error code, used in logs.
    pub fn code(&self) -> &'static str {
        match self {
            ApiError::Calculation(e) => e.code(),
            ApiError::InvalidQuery(_) => "INVALID_QUERY",
            ApiError::Internal => "INTERNAL_ERROR",
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (
            StatusCode::BAD_REQUEST,
            Json(ArithmeticResponse::failure(self.to_string())),
        )
            .into_response()
    }
}
