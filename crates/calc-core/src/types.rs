//! # Wire Types
//!
//! Request and response shapes of the `GET /arithmetic` endpoint.
//!
//! ## Exchange
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  GET /arithmetic?operation=add&operand1=2&operand2=3                    │
//! │        │                                                                │
//! │        ▼  ArithmeticQuery (all fields optional on the wire)             │
//! │  ┌──────────────────────┐                                               │
//! │  │  arithmetic::evaluate │                                              │
//! │  └──────────┬───────────┘                                               │
//! │             │                                                           │
//! │     ┌───────┴────────┐                                                  │
//! │     ▼                ▼                                                  │
//! │  200 {"result": 5}   400 {"error": "Cannot divide by zero."}            │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Fields are kept as raw strings: the service, not the deserializer, decides
//! what counts as a number.

use serde::{Deserialize, Serialize, Serializer};
use ts_rs::TS;

use crate::error::CoreError;
use crate::operation::Operation;

/// Largest magnitude below which every integer is exactly representable.
const MAX_SAFE_INTEGER: f64 = 9_007_199_254_740_991.0;

// =============================================================================
// Request
// =============================================================================

/// Query parameters of `GET /arithmetic`.
///
/// Every field is optional so that missing parameters surface as domain
/// errors with the documented messages rather than as extractor failures.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ArithmeticQuery {
    /// Operation wire name (`add`, `sqrt`, ...).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub operation: Option<String>,

    /// First operand, always required.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub operand1: Option<String>,

    /// Second operand, required for binary operations only.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub operand2: Option<String>,
}

impl ArithmeticQuery {
    /// Builds a query for a unary operation.
    pub fn unary(operation: impl Into<String>, operand1: impl Into<String>) -> Self {
        ArithmeticQuery {
            operation: Some(operation.into()),
            operand1: Some(operand1.into()),
            operand2: None,
        }
    }

    /// Builds a query for a binary operation.
    pub fn binary(
        operation: impl Into<String>,
        operand1: impl Into<String>,
        operand2: impl Into<String>,
    ) -> Self {
        ArithmeticQuery {
            operation: Some(operation.into()),
            operand1: Some(operand1.into()),
            operand2: Some(operand2.into()),
        }
    }

    /// Builds the query for a typed operation, dropping `operand2` for unary ones.
    pub fn for_operation(operation: Operation, operand1: &str, operand2: Option<&str>) -> Self {
        ArithmeticQuery {
            operation: Some(operation.as_str().to_string()),
            operand1: Some(operand1.to_string()),
            operand2: operand2
                .filter(|_| operation.is_binary())
                .map(str::to_string),
        }
    }
}

// =============================================================================
// Response
// =============================================================================

/// A JSON number that renders integral values without a fractional part.
///
/// `5.0` serializes as `5`, matching what a JavaScript server would emit;
/// non-integral or very large values serialize as floats.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize, TS)]
#[ts(export)]
pub struct JsonNumber(pub f64);

impl Serialize for JsonNumber {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let value = self.0;
        if value.is_finite() && value.fract() == 0.0 && value.abs() <= MAX_SAFE_INTEGER {
            serializer.serialize_i64(value as i64)
        } else {
            serializer.serialize_f64(value)
        }
    }
}

/// Body of a `/arithmetic` response.
///
/// ## Serialization
/// ```json
/// { "result": 1024 }
/// { "error": "Cannot take square root of a negative number." }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(untagged)]
pub enum ArithmeticResponse {
    /// HTTP 200.
    Success { result: JsonNumber },
    /// HTTP 400.
    Failure { error: String },
}

impl ArithmeticResponse {
    /// Successful response carrying `value`.
    pub fn success(value: f64) -> Self {
        ArithmeticResponse::Success {
            result: JsonNumber(value),
        }
    }

    /// Failure response carrying a human-readable message.
    pub fn failure(message: impl Into<String>) -> Self {
        ArithmeticResponse::Failure {
            error: message.into(),
        }
    }

    /// Converts back into a plain result.
    pub fn into_result(self) -> Result<f64, String> {
        match self {
            ArithmeticResponse::Success { result } => Ok(result.0),
            ArithmeticResponse::Failure { error } => Err(error),
        }
    }
}

impl From<Result<f64, CoreError>> for ArithmeticResponse {
    fn from(outcome: Result<f64, CoreError>) -> Self {
        match outcome {
            Ok(value) => ArithmeticResponse::success(value),
            Err(err) => ArithmeticResponse::failure(err.to_string()),
        }
    }
}
