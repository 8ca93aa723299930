//! HTTP handlers.

use axum::extract::rejection::QueryRejection;
use axum::extract::Query;
use axum::response::IntoResponse;
use axum::Json;
use calc_core::arithmetic::evaluate;
use calc_core::{ArithmeticQuery, ArithmeticResponse};
use tracing::{debug, info};

use crate::error::ApiError;

/// `GET /arithmetic?operation=..&operand1=..&operand2=..`
///
/// Query decoding failures are reported through the same error shape as
/// calculation failures.
pub async fn arithmetic_handler(
    query: Result<Query<ArithmeticQuery>, QueryRejection>,
) -> Result<Json<ArithmeticResponse>, ApiError> {
    let Query(query) = query.map_err(|rejection| {
        info!(reason = %rejection.body_text(), "Rejected arithmetic query");
        ApiError::InvalidQuery(rejection.body_text())
    })?;

    let operation = query.operation.as_deref().unwrap_or_default();

    match evaluate(&query) {
        Ok(result) => {
            debug!(operation, result, "Calculated");
            Ok(Json(ArithmeticResponse::success(result)))
        }
        Err(error) => {
            info!(operation, code = error.code(), %error, "Calculation refused");
            Err(error.into())
        }
    }
}

/// Health check endpoint.
pub async fn health_handler() -> impl IntoResponse {
    "OK"
}
