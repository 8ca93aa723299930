//! # Display Formatting
//!
//! Turns results into the text shown on the eight-digit display.
//!
//! ## Rules
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  value > 99999999            → exponential, 4 fraction digits           │
//! │  value < -99999999           → exponential, 4 fraction digits           │
//! │  0 < value < 0.0000001       → exponential, 4 fraction digits           │
//! │  -0.0000001 < value < 0      → exponential, 3 fraction digits           │
//! │  otherwise                   → shortest round-trip decimal              │
//! │                                                                         │
//! │  123456789  → "1.2346e8"      0.00000001 → "1.0000e-8"                  │
//! │  0.1 + 0.2  → "0.30000000000000004"                                     │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Exponents never carry a `+` sign.

/// Text shown when a calculation fails without a message.
pub const GENERIC_ERROR: &str = "ERROR";

const DISPLAY_MAX: f64 = 99_999_999.0;
const DISPLAY_MIN_MAGNITUDE: f64 = 0.000_000_1;

/// Formats a result for the display.
///
/// ## Example
/// ```rust
/// use calc_core::display::format_number;
///
/// assert_eq!(format_number(1024.0), "1024");
/// assert_eq!(format_number(123_456_789.0), "1.2346e8");
/// assert_eq!(format_number(-0.00000001), "-1.000e-8");
/// ```
pub fn format_number(value: f64) -> String {
    if value.is_nan() {
        return "NaN".to_string();
    }
    if value.is_infinite() {
        return if value > 0.0 { "Infinity" } else { "-Infinity" }.to_string();
    }
    if value == 0.0 {
        return "0".to_string();
    }

    if value > DISPLAY_MAX || value < -DISPLAY_MAX {
        format!("{value:.4e}")
    } else if value > 0.0 && value < DISPLAY_MIN_MAGNITUDE {
        format!("{value:.4e}")
    } else if value < 0.0 && value > -DISPLAY_MIN_MAGNITUDE {
        format!("{value:.3e}")
    } else if value.abs() < 1e-6 {
        // Between 1e-7 and 1e-6 numbers keep their shortest exponent form.
        format!("{value:e}")
    } else {
        format!("{value}")
    }
}

/// Renders a value at full precision, in a form the operand grammar accepts.
///
/// Used when a displayed result becomes the operand of the next request, so
/// that `1.2346e8` on screen still sends `123456789`.
///
/// ## Example
/// ```rust
/// use calc_core::display::to_operand_text;
/// use calc_core::operand::is_numeric_literal;
///
/// assert_eq!(to_operand_text(123_456_789.0), "123456789");
/// assert_eq!(to_operand_text(1e-300), "1e-300");
/// assert!(is_numeric_literal(&to_operand_text(-2.5e25)));
/// ```
pub fn to_operand_text(value: f64) -> String {
    if value == 0.0 {
        return "0".to_string();
    }
    let magnitude = value.abs();
    if magnitude >= 1e21 || magnitude < 1e-6 {
        format!("{value:e}")
    } else {
        format!("{value}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_values() {
        assert_eq!(format_number(5.0), "5");
        assert_eq!(format_number(-12.5), "-12.5");
        assert_eq!(format_number(0.1 + 0.2), "0.30000000000000004");
        assert_eq!(format_number(99_999_999.0), "99999999");
        assert_eq!(format_number(-99_999_999.0), "-99999999");
    }

    #[test]
    fn test_negative_zero_is_zero() {
        assert_eq!(format_number(-0.0), "0");
    }

    #[test]
    fn test_large_values_use_exponent() {
        assert_eq!(format_number(100_000_000.0), "1.0000e8");
        assert_eq!(format_number(-123_456_789.0), "-1.2346e8");
        assert_eq!(format_number(1e300), "1.0000e300");
    }

    #[test]
    fn test_tiny_values_use_exponent() {
        assert_eq!(format_number(0.000_000_01), "1.0000e-8");
        assert_eq!(format_number(-0.000_000_012_34), "-1.234e-8");
        assert_eq!(format_number(0.000_000_5), "5e-7");
        assert_eq!(format_number(0.000_001), "0.000001");
    }

    #[test]
    fn test_operand_text_keeps_precision() {
        assert_eq!(to_operand_text(0.1 + 0.2), "0.30000000000000004");
        assert_eq!(to_operand_text(-0.0), "0");
        assert_eq!(to_operand_text(1e21), "1e21");
        assert_eq!(to_operand_text(-0.000_000_5), "-5e-7");
    }

    #[test]
    fn test_non_finite() {
        assert_eq!(format_number(f64::INFINITY), "Infinity");
        assert_eq!(format_number(f64::NEG_INFINITY), "-Infinity");
        assert_eq!(format_number(f64::NAN), "NaN");
    }
}
