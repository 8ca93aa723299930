//! # Arithmetic Backends
//!
//! The seam between the controller and whatever evaluates calculations.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                  Arc<dyn ArithmeticBackend>                             │
//! │                                                                         │
//! │  ┌──────────────────────────┐     ┌──────────────────────────────────┐ │
//! │  │  HttpBackend (http.rs)   │     │  LocalBackend (this file)        │ │
//! │  │  GET {server}/arithmetic │     │  calc_core::arithmetic::evaluate │ │
//! │  └──────────────────────────┘     └──────────────────────────────────┘ │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use async_trait::async_trait;
use calc_core::arithmetic::evaluate;
use calc_core::ArithmeticQuery;
use tracing::debug;

use crate::error::ClientResult;

/// Evaluates one arithmetic request.
///
/// Implementations must answer every request exactly once, with a value or
/// an error; the controller keeps input disabled until they do.
#[async_trait]
pub trait ArithmeticBackend: Send + Sync {
    /// Evaluates `query`, returning the numeric result.
    async fn calculate(&self, query: &ArithmeticQuery) -> ClientResult<f64>;
}

/// Evaluates requests in-process with the same rules as the service.
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalBackend;

#[async_trait]
impl ArithmeticBackend for LocalBackend {
    async fn calculate(&self, query: &ArithmeticQuery) -> ClientResult<f64> {
        debug!(operation = ?query.operation, "Evaluating locally");
        Ok(evaluate(query)?)
    }
}
