//! # Operation Catalogue
//!
//! The eight operations understood by the arithmetic service.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Operations                                      │
//! │                                                                         │
//! │  Binary (operand1, operand2)          Unary (operand1 only)             │
//! │  ───────────────────────────          ─────────────────────             │
//! │  add        a + b                     sqrt        √a                    │
//! │  subtract   a - b                     reciprocal  1/(a)                 │
//! │  multiply   a × b                                                       │
//! │  divide     a ÷ b                                                       │
//! │  power      a ^ b                                                       │
//! │  percent    a % of b                                                    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::error::CoreError;

/// One of the supported arithmetic operations.
///
/// The wire name (`as_str`) is the value of the `operation` query parameter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum Operation {
    Add,
    Subtract,
    Multiply,
    Divide,
    Sqrt,
    Power,
    Percent,
    Reciprocal,
}

impl Operation {
    /// Every operation, in catalogue order.
    pub const ALL: [Operation; 8] = [
        Operation::Add,
        Operation::Subtract,
        Operation::Multiply,
        Operation::Divide,
        Operation::Sqrt,
        Operation::Power,
        Operation::Percent,
        Operation::Reciprocal,
    ];

    /// Wire name used in the `operation` query parameter.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Operation::Add => "add",
            Operation::Subtract => "subtract",
            Operation::Multiply => "multiply",
            Operation::Divide => "divide",
            Operation::Sqrt => "sqrt",
            Operation::Power => "power",
            Operation::Percent => "percent",
            Operation::Reciprocal => "reciprocal",
        }
    }

    /// Returns true for operations that read only `operand1`.
    #[inline]
    pub const fn is_unary(&self) -> bool {
        matches!(self, Operation::Sqrt | Operation::Reciprocal)
    }

    /// Returns true for operations that read both operands.
    #[inline]
    pub const fn is_binary(&self) -> bool {
        !self.is_unary()
    }

    /// Face label of the keypad button for this operation.
    pub const fn label(&self) -> &'static str {
        match self {
            Operation::Add => "+",
            Operation::Subtract => "-",
            Operation::Multiply => "×",
            Operation::Divide => "÷",
            Operation::Sqrt => "√",
            Operation::Power => "xʸ",
            Operation::Percent => "%",
            Operation::Reciprocal => "1/x",
        }
    }

    /// Human-readable expression shown in the history log.
    ///
    /// Unary operations ignore `operand2`.
    ///
    /// ## Example
    /// ```rust
    /// use calc_core::Operation;
    ///
    /// assert_eq!(Operation::Add.describe("7", "3"), "7 + 3");
    /// assert_eq!(Operation::Sqrt.describe("16", ""), "√16");
    /// assert_eq!(Operation::Reciprocal.describe("4", ""), "1/(4)");
    /// ```
    pub fn describe(&self, operand1: &str, operand2: &str) -> String {
        match self {
            Operation::Add => format!("{operand1} + {operand2}"),
            Operation::Subtract => format!("{operand1} - {operand2}"),
            Operation::Multiply => format!("{operand1} × {operand2}"),
            Operation::Divide => format!("{operand1} ÷ {operand2}"),
            Operation::Sqrt => format!("√{operand1}"),
            Operation::Power => format!("{operand1} ^ {operand2}"),
            Operation::Percent => format!("{operand1} % of {operand2}"),
            Operation::Reciprocal => format!("1/({operand1})"),
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Operation {
    type Err = CoreError;

    /// Names are matched exactly; `Add` or ` add` are unknown operations.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Operation::ALL
            .into_iter()
            .find(|op| op.as_str() == s)
            .ok_or_else(|| CoreError::UnknownOperation(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_every_wire_name() {
        for op in Operation::ALL {
            assert_eq!(op.as_str().parse::<Operation>().unwrap(), op);
        }
    }

    #[test]
    fn test_parse_is_exact() {
        assert_eq!(
            "Add".parse::<Operation>(),
            Err(CoreError::UnknownOperation("Add".to_string()))
        );
        assert!("modulo".parse::<Operation>().is_err());
        assert!("".parse::<Operation>().is_err());
    }

    #[test]
    fn test_arity() {
        let unary: Vec<_> = Operation::ALL.into_iter().filter(|op| op.is_unary()).collect();
        assert_eq!(unary, vec![Operation::Sqrt, Operation::Reciprocal]);
        assert!(Operation::Percent.is_binary());
        assert!(Operation::Power.is_binary());
    }

    #[test]
    fn test_describe() {
        assert_eq!(Operation::Multiply.describe("6", "7"), "6 × 7");
        assert_eq!(Operation::Divide.describe("1", "4"), "1 ÷ 4");
        assert_eq!(Operation::Power.describe("2", "10"), "2 ^ 10");
        assert_eq!(Operation::Percent.describe("50", "200"), "50 % of 200");
        assert_eq!(Operation::Subtract.describe("-1", "2"), "-1 - 2");
    }

    #[test]
    fn test_serde_uses_wire_names() {
        let json = serde_json::to_string(&Operation::Reciprocal).unwrap();
        assert_eq!(json, "\"reciprocal\"");
    }
}
