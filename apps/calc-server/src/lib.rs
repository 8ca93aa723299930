//! # Calc Server
//!
//! HTTP front of the arithmetic service.
//!
//! ## Routes
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  GET /arithmetic?operation=add&operand1=7&operand2=3                    │
//! │      200 {"result": 10}                                                 │
//! │      400 {"error": "Invalid input for operand2: x"}                     │
//! │                                                                         │
//! │  GET /health                                                            │
//! │      200 OK                                                             │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Configuration
//! Environment variables:
//! - `PORT` - HTTP port (default: 3000)
//! - `CALC_BIND_ADDR` - listen address (default: 0.0.0.0)
//! - `RUST_LOG` - log filter (default: `info,calc=debug`)

pub mod config;
pub mod error;
pub mod routes;

use std::any::Any;

use axum::response::{IntoResponse, Response};
use axum::routing::get;
use axum::Router;
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::trace::TraceLayer;
use tracing::error;

pub use config::{ConfigError, ServerConfig};
pub use error::ApiError;

/// Builds the service router.
///
/// The router holds no state; each request is evaluated on its own.
pub fn router() -> Router {
    with_layers(
        Router::new()
            .route("/arithmetic", get(routes::arithmetic_handler))
            .route("/health", get(routes::health_handler)),
    )
}

fn with_layers(router: Router) -> Router {
    router
        .layer(CatchPanicLayer::custom(panic_response))
        .layer(TraceLayer::new_for_http())
}

/// Reports a handler panic as a 400 so the process keeps serving.
fn panic_response(panic: Box<dyn Any + Send + 'static>) -> Response {
    let detail = panic
        .downcast_ref::<String>()
        .map(String::as_str)
        .or_else(|| panic.downcast_ref::<&str>().copied())
        .unwrap_or("unknown panic");
    error!(detail, "Handler panicked");
    ApiError::Internal.into_response()
}
