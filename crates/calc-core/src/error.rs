//! # Error Types
//!
//! Domain-specific error types for calc-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  calc-core errors (this file)                                          │
//! │  ├── CoreError        - Every reason a calculation is refused          │
//! │  ├── ValidationError  - Operand grammar failures                       │
//! │  └── KeypadError      - Key names that match no button                 │
//! │                                                                         │
//! │  calc-server errors                                                    │
//! │  └── ApiError         - HTTP 400 + {"error": message}                  │
//! │                                                                         │
//! │  calc-client errors                                                    │
//! │  └── ClientError      - Busy guard, transport, rejected requests       │
//! │                                                                         │
//! │  Flow: ValidationError → CoreError → ApiError → ClientError → display  │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Message Contract
//! The `Display` text of every variant is sent to the browser verbatim, so the
//! strings below are part of the wire contract. Change them only together
//! with the front ends that show them.

use thiserror::Error;

// =============================================================================
// Core Error
// =============================================================================

/// Reasons the arithmetic service refuses a request.
///
/// All of them are input faults: the server reports every variant as a
/// client error (HTTP 400).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CoreError {
    /// No `operation` parameter was supplied.
    #[error("Please select an operation.")]
    MissingOperation,

    /// The `operation` parameter is not one of the eight known names.
    #[error("Invalid operation: {0}")]
    UnknownOperation(String),

    /// An operand failed the numeric grammar.
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// `sqrt` of a negative number.
    #[error("Cannot take square root of a negative number.")]
    NegativeSquareRoot,

    /// `divide` with a zero divisor (`0`, `-0`, `0.0`, `0e5`, ...).
    #[error("Cannot divide by zero.")]
    DivideByZero,

    /// `reciprocal` of zero.
    #[error("Cannot divide by zero (reciprocal of zero).")]
    ReciprocalOfZero,

    /// The computation overflowed or produced NaN.
    ///
    /// ## When This Occurs
    /// - `power` overflow (`10 ^ 400`)
    /// - Negative base with a fractional exponent (`-8 ^ 0.5`)
    /// - Operands that already overflow `f64` (`1e400`)
    #[error("Result is not a finite number.")]
    NonFiniteResult,
}

impl CoreError {
    /// Machine-readable code, used as a structured logging field.
    pub fn code(&self) -> &'static str {
        match self {
            CoreError::MissingOperation => "MISSING_OPERATION",
            CoreError::UnknownOperation(_) => "UNKNOWN_OPERATION",
            CoreError::Validation(_) => "MALFORMED_OPERAND",
            CoreError::NegativeSquareRoot => "DOMAIN_ERROR",
            CoreError::DivideByZero | CoreError::ReciprocalOfZero => "DIVISION_BY_ZERO",
            CoreError::NonFiniteResult => "NON_FINITE_RESULT",
        }
    }
}

// =============================================================================
// Validation Error
// =============================================================================

/// Operand grammar failures.
///
/// A missing operand is reported like a malformed one with an empty value.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// Operand of a unary operation (`sqrt`, `reciprocal`).
    #[error("Invalid input: {value}")]
    InvalidInput { value: String },

    /// Named operand of a binary operation.
    #[error("Invalid input for {field}: {value}")]
    InvalidOperand { field: String, value: String },
}

// =============================================================================
// Keypad Error
// =============================================================================

/// A key or button name with no matching input.
///
/// Raised while parsing key sequences on the client side; never sent to or
/// returned by the arithmetic service.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum KeypadError {
    #[error("Unknown key: {0}")]
    UnknownKey(String),
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with CoreError.
pub type CoreResult<T> = Result<T, CoreError>;

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        assert_eq!(
            CoreError::MissingOperation.to_string(),
            "Please select an operation."
        );
        assert_eq!(
            CoreError::UnknownOperation("modulo".to_string()).to_string(),
            "Invalid operation: modulo"
        );
        assert_eq!(
            CoreError::ReciprocalOfZero.to_string(),
            "Cannot divide by zero (reciprocal of zero)."
        );
    }

    #[test]
    fn test_keypad_error_message() {
        assert_eq!(
            KeypadError::UnknownKey("bogus".to_string()).to_string(),
            "Unknown key: bogus"
        );
    }

    #[test]
    fn test_validation_error_messages() {
        let err = ValidationError::InvalidInput {
            value: "abc".to_string(),
        };
        assert_eq!(err.to_string(), "Invalid input: abc");

        let err = ValidationError::InvalidOperand {
            field: "operand2".to_string(),
            value: "1.2.3".to_string(),
        };
        assert_eq!(err.to_string(), "Invalid input for operand2: 1.2.3");
    }

    #[test]
    fn test_validation_converts_to_core_error() {
        let validation_err = ValidationError::InvalidInput {
            value: String::new(),
        };
        let core_err: CoreError = validation_err.into();
        assert!(matches!(core_err, CoreError::Validation(_)));
        assert_eq!(core_err.to_string(), "Invalid input: ");
        assert_eq!(core_err.code(), "MALFORMED_OPERAND");
    }
}
