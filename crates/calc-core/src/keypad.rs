//! # Keypad Inputs
//!
//! Everything a user can press, plus the keyboard shortcuts that map onto
//! the same buttons.
//!
//! ## Keyboard Map
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Key            Input                     Button label                  │
//! │  ─────────────  ────────────────────────  ────────────                  │
//! │  0 - 9          Digit                     "0" - "9"                     │
//! │  .              Decimal                   "."                           │
//! │  + - * /        Operator(add/sub/mul/div) "+" "-" "×" "÷"               │
//! │  = / Enter      Equals                    "="                           │
//! │  c / C          Clear                     "C"                           │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Key-press feedback looks the button up by `Input` equality through
//! [`Input::label`], never by scanning button text.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::KeypadError;
use crate::operation::Operation;

/// One keypad press.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "kind", content = "value")]
pub enum Input {
    /// A decimal digit, `'0'..='9'`.
    Digit(char),
    /// The decimal point.
    Decimal,
    /// The `±` key.
    ToggleSign,
    /// Any operation key. Unary keys (`√`, `1/x`) and `%` evaluate at once.
    Operator(Operation),
    /// The `=` key.
    Equals,
    /// `C`: reset everything.
    Clear,
    /// `CE`: reset the current entry only.
    ClearEntry,
}

impl Input {
    /// Builds a digit input, rejecting anything outside `0-9`.
    pub fn digit(c: char) -> Option<Self> {
        c.is_ascii_digit().then_some(Input::Digit(c))
    }

    /// Maps a keyboard key name (as reported by the browser) to an input.
    ///
    /// Returns `None` for keys the calculator ignores.
    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            "." => Some(Input::Decimal),
            "+" => Some(Input::Operator(Operation::Add)),
            "-" => Some(Input::Operator(Operation::Subtract)),
            "*" => Some(Input::Operator(Operation::Multiply)),
            "/" => Some(Input::Operator(Operation::Divide)),
            "=" | "Enter" => Some(Input::Equals),
            "c" | "C" => Some(Input::Clear),
            _ => {
                let mut chars = key.chars();
                match (chars.next(), chars.next()) {
                    (Some(c), None) => Input::digit(c),
                    _ => None,
                }
            }
        }
    }

    /// Face label of the button this input belongs to.
    pub fn label(&self) -> String {
        match self {
            Input::Digit(d) => d.to_string(),
            Input::Decimal => ".".to_string(),
            Input::ToggleSign => "±".to_string(),
            Input::Operator(op) => op.label().to_string(),
            Input::Equals => "=".to_string(),
            Input::Clear => "C".to_string(),
            Input::ClearEntry => "CE".to_string(),
        }
    }
}

impl fmt::Display for Input {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.label())
    }
}

impl FromStr for Input {
    type Err = KeypadError;

    /// Parses a keypad token: keyboard keys plus the button names
    /// `sqrt`, `power`, `percent`, `reciprocal`, `neg`, `ce` and their labels.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if let Some(input) = Input::from_key(s) {
            return Ok(input);
        }

        match s {
            "√" | "sqrt" => Ok(Input::Operator(Operation::Sqrt)),
            "^" | "xʸ" | "power" => Ok(Input::Operator(Operation::Power)),
            "%" | "percent" => Ok(Input::Operator(Operation::Percent)),
            "1/x" | "reciprocal" => Ok(Input::Operator(Operation::Reciprocal)),
            "×" | "x" => Ok(Input::Operator(Operation::Multiply)),
            "÷" => Ok(Input::Operator(Operation::Divide)),
            "±" | "neg" => Ok(Input::ToggleSign),
            "CE" | "ce" => Ok(Input::ClearEntry),
            other => Err(KeypadError::UnknownKey(other.to_string())),
        }
    }
}

/// Splits a key sequence such as `"3 + 4 + 5 ="` into inputs.
///
/// Tokens are whitespace separated; a token made only of digits and points
/// (`"123.45"`) expands into one input per character.
pub fn parse_sequence(text: &str) -> Result<Vec<Input>, KeypadError> {
    let mut inputs = Vec::new();

    for token in text.split_whitespace() {
        let is_entry = token.len() > 1 && token.chars().all(|c| c.is_ascii_digit() || c == '.');
        if is_entry {
            for c in token.chars() {
                inputs.push(if c == '.' { Input::Decimal } else { Input::Digit(c) });
            }
        } else {
            inputs.push(token.parse()?);
        }
    }

    Ok(inputs)
}
