//! # Operand Grammar
//!
//! Numeric operand validation for the arithmetic service.
//!
//! ## Accepted Language
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Numeric Operand Grammar                            │
//! │                                                                         │
//! │  operand   ::= [ "-" ] mantissa [ exponent ]                            │
//! │  mantissa  ::= digits-and-points, at most one ".", at least one digit   │
//! │  exponent  ::= "e" [ "-" ] digit { digit }                              │
//! │                                                                         │
//! │  Equivalent to ^(-)?[0-9.]+(e(-)?[0-9]+)?$ with the extra rule that     │
//! │  stripping "-", "0-9" and "e" leaves at most one character.             │
//! │                                                                         │
//! │  ✅ "2"  "-4"  "0.5"  ".5"  "5."  "1e-5"  "-1.5e3"                      │
//! │  ❌ ""  "abc"  "1.2.3"  "1-2"  "+5"  "1E5"  "1e"  "1e+5"  " 1"  "."     │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The grammar is checked explicitly, character class by character class,
//! and only accepted text is handed to the `f64` parser.

use crate::error::ValidationError;

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

// =============================================================================
// Operand Slots
// =============================================================================

/// Which operand of a request is being validated.
///
/// Determines the wording of the validation error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OperandSlot {
    /// The single operand of a unary operation.
    Only,
    /// `operand1` of a binary operation.
    First,
    /// `operand2` of a binary operation.
    Second,
}

impl OperandSlot {
    /// Query parameter name carrying this operand.
    pub const fn field(&self) -> &'static str {
        match self {
            OperandSlot::Only | OperandSlot::First => "operand1",
            OperandSlot::Second => "operand2",
        }
    }

    fn invalid(&self, value: &str) -> ValidationError {
        match self {
            OperandSlot::Only => ValidationError::InvalidInput {
                value: value.to_string(),
            },
            OperandSlot::First | OperandSlot::Second => ValidationError::InvalidOperand {
                field: self.field().to_string(),
                value: value.to_string(),
            },
        }
    }
}

// =============================================================================
// Grammar
// =============================================================================

/// Returns true when `raw` is a well-formed numeric operand.
///
/// ## Example
/// ```rust
/// use calc_core::operand::is_numeric_literal;
///
/// assert!(is_numeric_literal("1e-5"));
/// assert!(!is_numeric_literal("1.2.3"));
/// ```
pub fn is_numeric_literal(raw: &str) -> bool {
    let unsigned = raw.strip_prefix('-').unwrap_or(raw);

    let (mantissa, exponent) = match unsigned.split_once('e') {
        Some((mantissa, exponent)) => (mantissa, Some(exponent)),
        None => (unsigned, None),
    };

    is_mantissa(mantissa) && exponent.map_or(true, is_exponent)
}

fn is_mantissa(text: &str) -> bool {
    let mut digits = 0usize;
    let mut points = 0usize;

    for c in text.chars() {
        match c {
            '0'..='9' => digits += 1,
            '.' => points += 1,
            _ => return false,
        }
    }

    digits > 0 && points <= 1
}

fn is_exponent(text: &str) -> bool {
    let digits = text.strip_prefix('-').unwrap_or(text);
    !digits.is_empty() && digits.bytes().all(|b| b.is_ascii_digit())
}

/// Parses a numeric operand, returning `None` when the grammar rejects it.
///
/// Overflowing literals (`1e400`) parse to infinity; the arithmetic layer
/// reports those as non-finite results.
pub fn parse_numeric(raw: &str) -> Option<f64> {
    if !is_numeric_literal(raw) {
        return None;
    }
    raw.parse::<f64>().ok()
}

/// Validates one operand of a request and returns its value.
///
/// ## Rules
/// - Must be present and non-empty
/// - Must match the numeric grammar
///
/// A missing operand is reported with an empty value.
pub fn validate_operand(slot: OperandSlot, raw: Option<&str>) -> ValidationResult<f64> {
    let raw = raw.unwrap_or_default();

    if raw.is_empty() {
        return Err(slot.invalid(raw));
    }

    parse_numeric(raw).ok_or_else(|| slot.invalid(raw))
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_accepts_plain_numbers() {
        for ok in ["0", "2", "-4", "123.45", "0.5", ".5", "5.", "-0", "007"] {
            assert!(is_numeric_literal(ok), "{ok} should be accepted");
        }
    }

    #[test]
    fn test_accepts_exponents() {
        for ok in ["1e5", "1e-5", "-1.5e3", "0e5", ".5e-3", "2.e10"] {
            assert!(is_numeric_literal(ok), "{ok} should be accepted");
        }
    }

    #[test]
    fn test_rejects_malformed() {
        for bad in [
            "", "abc", "1.2.3", "1-2", "+5", "1E5", "1e", "1e-", "1e+5", " 1", "1 ", ".", "-",
            "--1", "1e5e5", "1e5.0", "e5", "-e5", "0x10", "Infinity", "NaN", "1..", "1,5",
        ] {
            assert!(!is_numeric_literal(bad), "{bad:?} should be rejected");
        }
    }

    #[test]
    fn test_parse_numeric_values() {
        assert_eq!(parse_numeric("123.45"), Some(123.45));
        assert_eq!(parse_numeric(".5"), Some(0.5));
        assert_eq!(parse_numeric("5."), Some(5.0));
        assert_eq!(parse_numeric("1e-5"), Some(1e-5));
        assert_eq!(parse_numeric("-1.5e3"), Some(-1500.0));
        assert_eq!(parse_numeric("1e400"), Some(f64::INFINITY));
        assert_eq!(parse_numeric("1.2.3"), None);
    }

    #[test]
    fn test_validate_operand_messages() {
        let err = validate_operand(OperandSlot::Only, Some("abc")).unwrap_err();
        assert_eq!(err.to_string(), "Invalid input: abc");

        let err = validate_operand(OperandSlot::First, Some("1.2.3")).unwrap_err();
        assert_eq!(err.to_string(), "Invalid input for operand1: 1.2.3");

        let err = validate_operand(OperandSlot::Second, None).unwrap_err();
        assert_eq!(err.to_string(), "Invalid input for operand2: ");

        let err = validate_operand(OperandSlot::Second, Some("")).unwrap_err();
        assert_eq!(err.to_string(), "Invalid input for operand2: ");
    }

    #[test]
    fn test_validate_operand_ok() {
        assert_eq!(validate_operand(OperandSlot::First, Some("-4")), Ok(-4.0));
    }

    proptest! {
        #[test]
        fn prop_decimal_rendering_is_accepted(value in -1.0e12f64..1.0e12) {
            let text = format!("{value}");
            prop_assert!(is_numeric_literal(&text));
            prop_assert_eq!(parse_numeric(&text), Some(value));
        }

        #[test]
        fn prop_two_points_always_rejected(a in "[0-9]{1,4}", b in "[0-9]{0,4}", c in "[0-9]{0,4}") {
            let text = format!("{a}.{b}.{c}");
            prop_assert!(!is_numeric_literal(&text));
        }

        #[test]
        fn prop_letters_always_rejected(text in "[0-9]{0,3}[a-df-zA-Z][0-9]{0,3}") {
            prop_assert!(!is_numeric_literal(&text));
        }
    }
}
