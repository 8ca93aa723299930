//! # calc-core: Pure Calculator Logic
//!
//! This crate is the **heart** of the calculator. It holds everything that
//! can be expressed as pure functions: the arithmetic contract of the
//! `/arithmetic` service and the input state machine that drives a keypad.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Calculator Architecture                          │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │               Front end (browser page / calc-cli)               │   │
//! │  │     key press ──► Calculator controller (calc-client)           │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │ GET /arithmetic                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │                 Arithmetic Service (calc-server)                │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               ★ calc-core (THIS CRATE) ★                        │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐  ┌───────────┐  │   │
//! │  │   │ operation │  │  operand  │  │arithmetic │  │  machine  │  │   │
//! │  │   │ catalogue │  │  grammar  │  │ evaluate  │  │  keypad   │  │   │
//! │  │   └───────────┘  └───────────┘  └───────────┘  └───────────┘  │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO NETWORK • NO TIMERS • PURE FUNCTIONS             │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`operation`] - The eight supported operations
//! - [`operand`] - Numeric operand grammar (`^(-)?[0-9.]+(e(-)?[0-9]+)?$`, one point max)
//! - [`arithmetic`] - Validation + evaluation of one request
//! - [`types`] - Wire types for `GET /arithmetic`
//! - [`machine`] - Keypad input state machine
//! - [`keypad`] - Inputs and keyboard mapping
//! - [`history`] - Bounded calculation log
//! - [`display`] - Number formatting for the display
//! - [`error`] - Domain error types
//!
//! ## Example Usage
//!
//! ```rust
//! use calc_core::arithmetic::evaluate;
//! use calc_core::types::ArithmeticQuery;
//!
//! let query = ArithmeticQuery::binary("power", "2", "10");
//! assert_eq!(evaluate(&query).unwrap(), 1024.0);
//!
//! let query = ArithmeticQuery::binary("divide", "10", "0");
//! assert_eq!(evaluate(&query).unwrap_err().to_string(), "Cannot divide by zero.");
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod arithmetic;
pub mod display;
pub mod error;
pub mod history;
pub mod keypad;
pub mod machine;
pub mod operand;
pub mod operation;
pub mod types;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use error::{CoreError, CoreResult, KeypadError, ValidationError};
pub use history::{History, HistoryEntry};
pub use keypad::Input;
pub use machine::{Calculation, CalculatorState, InputMachine, PendingExpression};
pub use operation::Operation;
pub use types::{ArithmeticQuery, ArithmeticResponse};

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Maximum number of entries kept in the calculation history.
///
/// Older entries are evicted first once the log is full.
pub const MAX_HISTORY_ENTRIES: usize = 10;

/// Maximum number of digits a single keypad entry can hold.
///
/// Sign and decimal point do not count towards the limit.
pub const MAX_ENTRY_DIGITS: usize = 8;
