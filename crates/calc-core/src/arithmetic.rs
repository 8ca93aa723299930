//! # Arithmetic Evaluation
//!
//! Validates one `/arithmetic` request and computes its result.
//!
//! ## Evaluation Pipeline
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      evaluate(query)                                    │
//! │                                                                         │
//! │  operation present? ──── no ───► MissingOperation                      │
//! │        │                                                                │
//! │  operation known? ────── no ───► UnknownOperation(name)                │
//! │        │                                                                │
//! │  unary? ─┬─ yes: operand1 grammar ──► sqrt < 0? / reciprocal == 0?     │
//! │          └─ no:  operand1 grammar ──► operand2 grammar ──► divide == 0?│
//! │        │                                                                │
//! │  compute (IEEE-754 double)                                             │
//! │        │                                                                │
//! │  finite? ─────────────── no ───► NonFiniteResult                       │
//! │        │                                                                │
//! │        ▼                                                                │
//! │      Ok(value)                                                          │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use crate::error::{CoreError, CoreResult};
use crate::operand::{validate_operand, OperandSlot};
use crate::operation::Operation;
use crate::types::ArithmeticQuery;

/// Validates and evaluates one request.
///
/// Unary operations never look at `operand2`, even when it is present and
/// malformed.
///
/// ## Example
/// ```rust
/// use calc_core::arithmetic::evaluate;
/// use calc_core::types::ArithmeticQuery;
///
/// assert_eq!(evaluate(&ArithmeticQuery::binary("add", "2", "3")), Ok(5.0));
/// assert!(evaluate(&ArithmeticQuery::unary("sqrt", "-4")).is_err());
/// ```
pub fn evaluate(query: &ArithmeticQuery) -> CoreResult<f64> {
    let name = query
        .operation
        .as_deref()
        .filter(|name| !name.is_empty())
        .ok_or(CoreError::MissingOperation)?;

    let operation: Operation = name.parse()?;

    let value = if operation.is_unary() {
        let a = validate_operand(OperandSlot::Only, query.operand1.as_deref())?;
        check_unary(operation, a)?;
        apply(operation, a, 0.0)
    } else {
        let a = validate_operand(OperandSlot::First, query.operand1.as_deref())?;
        let b = validate_operand(OperandSlot::Second, query.operand2.as_deref())?;
        if operation == Operation::Divide && b == 0.0 {
            return Err(CoreError::DivideByZero);
        }
        apply(operation, a, b)
    };

    if !value.is_finite() {
        return Err(CoreError::NonFiniteResult);
    }

    Ok(value)
}

fn check_unary(operation: Operation, a: f64) -> CoreResult<()> {
    match operation {
        Operation::Sqrt if a < 0.0 => Err(CoreError::NegativeSquareRoot),
        Operation::Reciprocal if a == 0.0 => Err(CoreError::ReciprocalOfZero),
        _ => Ok(()),
    }
}

/// Applies `operation` to already-validated operands.
///
/// Unary operations ignore `b`. No domain checks happen here: `apply(Divide, 1, 0)`
/// is `inf`, exactly as IEEE-754 says.
pub fn apply(operation: Operation, a: f64, b: f64) -> f64 {
    match operation {
        Operation::Add => a + b,
        Operation::Subtract => a - b,
        Operation::Multiply => a * b,
        Operation::Divide => a / b,
        Operation::Sqrt => a.sqrt(),
        Operation::Power => a.powf(b),
        Operation::Percent => a * b / 100.0,
        Operation::Reciprocal => 1.0 / a,
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
