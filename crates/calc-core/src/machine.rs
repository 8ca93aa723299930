//! # Input State Machine
//!
//! Tracks keypad state and decides when a calculation must be issued.
//!
//! ## States
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                                                                         │
//! │   ┌───────┐  digit≠0   ┌──────────┐  op   ┌──────────┐  digit≠0        │
//! │   │ Start │───────────►│ Operand1 │──────►│ Operator │──────────┐      │
//! │   └───────┘            └──────────┘       └──────────┘          ▼      │
//! │       ▲                                     ▲    │ =      ┌──────────┐ │
//! │       │ C                  op (chained,     │    │        │ Operand2 │ │
//! │       │                    evaluates) ──────┼────┼────────└──────────┘ │
//! │       │                                     │    ▼             │ =     │
//! │       │                                 ┌──────────┐           │       │
//! │       └─────────────────────────────────│ Complete │◄──────────┘       │
//! │                                         └──────────┘                   │
//! │                                          √ 1/x % from any state        │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## No I/O
//! [`InputMachine::press`] never evaluates anything. When an input needs a
//! result it returns a [`Calculation`]; whoever runs it reports a success back
//! through [`InputMachine::resolve`]. A failed calculation is simply never
//! resolved, which leaves the pending expression exactly as it was.
//!
//! ## Equals
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  state       before the request                                         │
//! │  ─────────   ─────────────────────────────────────────────────────────  │
//! │  Operator    operand2 := operand1          (5 + =  →  5 + 5)            │
//! │  Operand2    operand2 := display                                        │
//! │  Complete    operand1 := display           (repeat with last operand2)  │
//! │  Start       stored operands, unchanged    (2 + 3 = 4 =  →  2 + 3)      │
//! │  Operand1    stored operands, unchanged                                 │
//! │                                                                         │
//! │  no operation pending  →  Err(MissingOperation)                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Evaluation Order
//! There is no operator precedence. Pressing a binary operator while a second
//! operand is being entered evaluates the pending operation first, so
//! `3 + 4 × 5 =` is `(3 + 4) × 5 = 35`.

use serde::{Deserialize, Serialize};

use crate::display::{format_number, to_operand_text};
use crate::error::{CoreError, CoreResult};
use crate::keypad::Input;
use crate::operation::Operation;
use crate::types::ArithmeticQuery;
use crate::MAX_ENTRY_DIGITS;

// =============================================================================
// State
// =============================================================================

/// Where the user is in entering an expression.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CalculatorState {
    /// Nothing entered yet (or only zeros).
    #[default]
    Start,
    /// Entering the first operand.
    Operand1,
    /// An operator was pressed; the next digit starts operand2.
    Operator,
    /// Entering the second operand.
    Operand2,
    /// A result is on display.
    Complete,
}

/// What the display currently shows.
///
/// Entries are kept as typed so that partial input like `1.` survives;
/// results are kept at full precision and only formatted for display.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "kind", content = "value")]
pub enum DisplayValue {
    /// Text typed on the keypad.
    Entry(String),
    /// A value returned by the service.
    Number(f64),
}

impl Default for DisplayValue {
    fn default() -> Self {
        DisplayValue::Entry("0".to_string())
    }
}

impl DisplayValue {
    /// Text shown on the display.
    pub fn text(&self) -> String {
        match self {
            DisplayValue::Entry(text) => text.clone(),
            DisplayValue::Number(value) => format_number(*value),
        }
    }

    /// Text sent to the service when this value becomes an operand.
    pub fn operand_text(&self) -> String {
        match self {
            DisplayValue::Entry(text) => text.clone(),
            DisplayValue::Number(value) => to_operand_text(*value),
        }
    }

    /// Numeric value; unparsable partial entries count as zero.
    pub fn value(&self) -> f64 {
        match self {
            DisplayValue::Entry(text) => text.parse().unwrap_or(0.0),
            DisplayValue::Number(value) => *value,
        }
    }

    fn digit_count(&self) -> usize {
        self.operand_text()
            .chars()
            .filter(|c| *c != '-' && *c != '.')
            .count()
    }
}

/// Operands and operator collected so far.
///
/// ## Invariants
/// - `operation` is `Some` whenever the machine is in `Operator`, `Operand2`
///   or `Complete`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PendingExpression {
    pub operand1: String,
    pub operand2: String,
    pub operation: Option<Operation>,
}

impl Default for PendingExpression {
    fn default() -> Self {
        PendingExpression {
            operand1: "0".to_string(),
            operand2: "0".to_string(),
            operation: None,
        }
    }
}

// =============================================================================
// Calculation
// =============================================================================

/// A calculation the machine wants evaluated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Calculation {
    pub operation: Operation,
    pub operand1: String,
    /// `None` for unary operations.
    pub operand2: Option<String>,
    /// True when triggered by an operator press after operand2; the result
    /// then becomes the new operand1.
    pub chained: bool,
}

impl Calculation {
    fn new(operation: Operation, operand1: String, operand2: String, chained: bool) -> Self {
        Calculation {
            operation,
            operand1,
            operand2: operation.is_binary().then_some(operand2),
            chained,
        }
    }

    /// Query parameters for `GET /arithmetic`.
    pub fn query(&self) -> ArithmeticQuery {
        ArithmeticQuery::for_operation(self.operation, &self.operand1, self.operand2.as_deref())
    }

    /// History expression, e.g. `7 + 3`.
    pub fn expression(&self) -> String {
        self.operation
            .describe(&self.operand1, self.operand2.as_deref().unwrap_or_default())
    }
}

// =============================================================================
// Machine
// =============================================================================

/// The keypad state machine.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct InputMachine {
    state: CalculatorState,
    display: DisplayValue,
    pending: PendingExpression,
}

impl InputMachine {
    /// Creates a cleared machine showing `0`.
    pub fn new() -> Self {
        InputMachine::default()
    }

    /// Current state.
    pub fn state(&self) -> CalculatorState {
        self.state
    }

    /// Current display value.
    pub fn display(&self) -> &DisplayValue {
        &self.display
    }

    /// Text shown on the display.
    pub fn display_text(&self) -> String {
        self.display.text()
    }

    /// Operands and operator collected so far.
    pub fn pending(&self) -> &PendingExpression {
        &self.pending
    }

    /// Applies one input. Returns the calculation to run, if any.
    ///
    /// ## Errors
    /// `CoreError::MissingOperation` when `=` is pressed with no operation
    /// pending. The machine still moves to `Complete`.
    pub fn press(&mut self, input: Input) -> CoreResult<Option<Calculation>> {
        let calculation = match input {
            Input::Digit(d) => {
                self.digit(d);
                None
            }
            Input::Decimal => {
                self.decimal();
                None
            }
            Input::ToggleSign => {
                self.toggle_sign();
                None
            }
            Input::Operator(op) if op.is_unary() => Some(self.unary(op)),
            Input::Operator(Operation::Percent) => Some(self.percent()),
            Input::Operator(op) => self.binary(op),
            Input::Equals => Some(self.equals()?),
            Input::Clear => {
                self.clear();
                None
            }
            Input::ClearEntry => {
                self.clear_entry();
                None
            }
        };
        Ok(calculation)
    }

    /// Records the result of a successful calculation.
    pub fn resolve(&mut self, calculation: &Calculation, value: f64) {
        self.display = DisplayValue::Number(value);
        if calculation.chained {
            self.pending.operand1 = self.display.operand_text();
        }
    }

    fn digit(&mut self, d: char) {
        match self.state {
            CalculatorState::Start | CalculatorState::Complete => {
                self.display = DisplayValue::Entry(d.to_string());
                self.state = if d == '0' {
                    CalculatorState::Start
                } else {
                    CalculatorState::Operand1
                };
            }
            CalculatorState::Operator => {
                self.display = DisplayValue::Entry(d.to_string());
                self.state = if d == '0' {
                    CalculatorState::Operator
                } else {
                    CalculatorState::Operand2
                };
            }
            CalculatorState::Operand1 | CalculatorState::Operand2 => {
                if self.display.digit_count() < MAX_ENTRY_DIGITS {
                    let mut text = self.display.operand_text();
                    text.push(d);
                    self.display = DisplayValue::Entry(text);
                }
            }
        }
    }

    fn decimal(&mut self) {
        match self.state {
            CalculatorState::Start | CalculatorState::Complete => {
                self.display = DisplayValue::Entry("0.".to_string());
                self.state = CalculatorState::Operand1;
            }
            CalculatorState::Operator => {
                self.display = DisplayValue::Entry("0.".to_string());
                self.state = CalculatorState::Operand2;
            }
            CalculatorState::Operand1 | CalculatorState::Operand2 => {
                let mut text = self.display.operand_text();
                if !text.contains('.') {
                    text.push('.');
                    self.display = DisplayValue::Entry(text);
                }
            }
        }
    }

    fn toggle_sign(&mut self) {
        if self.display.value() == 0.0 {
            return;
        }
        self.display = match &self.display {
            DisplayValue::Number(value) => DisplayValue::Number(-value),
            DisplayValue::Entry(text) => match text.strip_prefix('-') {
                Some(positive) => DisplayValue::Entry(positive.to_string()),
                None => DisplayValue::Entry(format!("-{text}")),
            },
        };
    }

    fn binary(&mut self, op: Operation) -> Option<Calculation> {
        let chained = match (self.state, self.pending.operation) {
            (CalculatorState::Operand2, Some(previous)) => {
                self.pending.operand2 = self.display.operand_text();
                Some(Calculation::new(
                    previous,
                    self.pending.operand1.clone(),
                    self.pending.operand2.clone(),
                    true,
                ))
            }
            _ => {
                self.pending.operand1 = self.display.operand_text();
                None
            }
        };

        self.pending.operation = Some(op);
        self.state = CalculatorState::Operator;
        chained
    }

    fn unary(&mut self, op: Operation) -> Calculation {
        self.pending.operand1 = self.display.operand_text();
        self.pending.operation = Some(op);
        self.state = CalculatorState::Complete;
        Calculation::new(op, self.pending.operand1.clone(), String::new(), false)
    }

    fn percent(&mut self) -> Calculation {
        self.pending.operand2 = self.display.operand_text();
        self.pending.operation = Some(Operation::Percent);
        self.state = CalculatorState::Complete;
        Calculation::new(
            Operation::Percent,
            self.pending.operand1.clone(),
            self.pending.operand2.clone(),
            false,
        )
    }

    fn equals(&mut self) -> CoreResult<Calculation> {
        match self.state {
            CalculatorState::Operator => {
                self.pending.operand2 = self.pending.operand1.clone();
            }
            CalculatorState::Operand2 => {
                self.pending.operand2 = self.display.operand_text();
            }
            CalculatorState::Complete => {
                self.pending.operand1 = self.display.operand_text();
            }
            CalculatorState::Start | CalculatorState::Operand1 => {}
        }

        self.state = CalculatorState::Complete;
        let operation = self.pending.operation.ok_or(CoreError::MissingOperation)?;

        Ok(Calculation::new(
            operation,
            self.pending.operand1.clone(),
            self.pending.operand2.clone(),
            false,
        ))
    }

    fn clear(&mut self) {
        self.display = DisplayValue::default();
        self.pending = PendingExpression::default();
        self.state = CalculatorState::Start;
    }

    fn clear_entry(&mut self) {
        self.display = DisplayValue::default();
        self.state = if self.state == CalculatorState::Operand2 {
            CalculatorState::Operator
        } else {
            CalculatorState::Start
        };
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::arithmetic::evaluate;
    use crate::keypad::parse_sequence;

    /// Feeds a key sequence, evaluating calculations in-process.
    fn run(machine: &mut InputMachine, keys: &str) -> Vec<Calculation> {
        let mut issued = Vec::new();
        for input in parse_sequence(keys).unwrap() {
            if let Ok(Some(calculation)) = machine.press(input) {
                if let Ok(value) = evaluate(&calculation.query()) {
                    machine.resolve(&calculation, value);
                }
                issued.push(calculation);
            }
        }
        issued
    }

    #[test]
    fn test_digit_entry_with_decimal() {
        let mut machine = InputMachine::new();
        run(&mut machine, "1 2 3 . 4 5");
        assert_eq!(machine.display_text(), "123.45");
        assert_eq!(machine.state(), CalculatorState::Operand1);
    }

    #[test]
    fn test_leading_zero_stays_in_start() {
        let mut machine = InputMachine::new();
        machine.press(Input::Digit('0')).unwrap();
        assert_eq!(machine.state(), CalculatorState::Start);
        machine.press(Input::Digit('0')).unwrap();
        machine.press(Input::Digit('7')).unwrap();
        assert_eq!(machine.display_text(), "7");
        assert_eq!(machine.state(), CalculatorState::Operand1);
    }

    #[test]
    fn test_entry_caps_at_eight_digits() {
        let mut machine = InputMachine::new();
        run(&mut machine, "123456789");
        assert_eq!(machine.display_text(), "12345678");

        let mut machine = InputMachine::new();
        run(&mut machine, "1234.56789");
        assert_eq!(machine.display_text(), "1234.5678");
    }

    #[test]
    fn test_single_decimal_point() {
        let mut machine = InputMachine::new();
        run(&mut machine, "1 . . 5 .");
        assert_eq!(machine.display_text(), "1.5");
    }

    #[test]
    fn test_decimal_from_start_and_operator() {
        let mut machine = InputMachine::new();
        machine.press(Input::Decimal).unwrap();
        assert_eq!(machine.display_text(), "0.");
        assert_eq!(machine.state(), CalculatorState::Operand1);

        machine.press(Input::Operator(Operation::Add)).unwrap();
        machine.press(Input::Decimal).unwrap();
        assert_eq!(machine.display_text(), "0.");
        assert_eq!(machine.state(), CalculatorState::Operand2);
    }

    #[test]
    fn test_toggle_sign() {
        let mut machine = InputMachine::new();
        machine.press(Input::ToggleSign).unwrap();
        assert_eq!(machine.display_text(), "0");

        run(&mut machine, "1 .");
        machine.press(Input::ToggleSign).unwrap();
        assert_eq!(machine.display_text(), "-1.");
        machine.press(Input::Digit('5')).unwrap();
        assert_eq!(machine.display_text(), "-1.5");
        machine.press(Input::ToggleSign).unwrap();
        assert_eq!(machine.display_text(), "1.5");
    }

    #[test]
    fn test_toggle_sign_of_result() {
        let mut machine = InputMachine::new();
        run(&mut machine, "2 + 3 =");
        machine.press(Input::ToggleSign).unwrap();
        assert_eq!(machine.display_text(), "-5");
        assert_eq!(machine.state(), CalculatorState::Complete);
    }

    #[test]
    fn test_equals_after_operator_repeats_operand() {
        let mut machine = InputMachine::new();
        let issued = run(&mut machine, "5 + =");
        assert_eq!(issued.len(), 1);
        assert_eq!(issued[0].query(), ArithmeticQuery::binary("add", "5", "5"));
        assert_eq!(machine.display_text(), "10");
    }

    #[test]
    fn test_chained_operation() {
        let mut machine = InputMachine::new();
        let issued = run(&mut machine, "3 + 4 + 5 =");

        assert_eq!(issued.len(), 2);
        assert_eq!(issued[0].query(), ArithmeticQuery::binary("add", "3", "4"));
        assert!(issued[0].chained);
        assert_eq!(issued[1].query(), ArithmeticQuery::binary("add", "7", "5"));
        assert!(!issued[1].chained);
        assert_eq!(machine.display_text(), "12");
    }

    #[test]
    fn test_chain_is_left_to_right() {
        let mut machine = InputMachine::new();
        run(&mut machine, "3 + 4 * 5 =");
        assert_eq!(machine.display_text(), "35");
    }

    #[test]
    fn test_chain_shows_intermediate_result() {
        let mut machine = InputMachine::new();
        run(&mut machine, "3 + 4 *");
        assert_eq!(machine.display_text(), "7");
        assert_eq!(machine.state(), CalculatorState::Operator);
        assert_eq!(machine.pending().operation, Some(Operation::Multiply));
    }

    #[test]
    fn test_failed_chain_keeps_operand1() {
        let mut machine = InputMachine::new();
        let issued = run(&mut machine, "8 / 0.0 +");
        assert_eq!(issued.len(), 1);
        assert_eq!(machine.pending().operand1, "8");
        assert_eq!(machine.pending().operation, Some(Operation::Add));
        assert_eq!(machine.state(), CalculatorState::Operator);
    }

    #[test]
    fn test_repeated_equals_reseeds_operand1() {
        let mut machine = InputMachine::new();
        let issued = run(&mut machine, "2 + 3 = =");
        assert_eq!(issued[1].query(), ArithmeticQuery::binary("add", "5", "3"));
        assert_eq!(machine.display_text(), "8");
    }

    #[test]
    fn test_equals_without_operation_is_error() {
        let mut machine = InputMachine::new();
        run(&mut machine, "4 2");
        assert_eq!(machine.press(Input::Equals), Err(CoreError::MissingOperation));
        assert_eq!(machine.state(), CalculatorState::Complete);
        assert_eq!(machine.display_text(), "42");

        // The next digit starts a fresh entry.
        machine.press(Input::Digit('7')).unwrap();
        assert_eq!(machine.display_text(), "7");
    }

    #[test]
    fn test_equals_after_clear_is_error() {
        let mut machine = InputMachine::new();
        run(&mut machine, "2 + 3 = C");
        assert_eq!(machine.press(Input::Equals), Err(CoreError::MissingOperation));
        assert_eq!(machine.pending(), &PendingExpression::default());
    }

    #[test]
    fn test_equals_in_operand1_repeats_stored_operands() {
        let mut machine = InputMachine::new();
        let issued = run(&mut machine, "2 + 3 = 4 =");
        assert_eq!(issued.len(), 2);
        assert_eq!(issued[1].query(), ArithmeticQuery::binary("add", "2", "3"));
        assert_eq!(machine.display_text(), "5");
    }

    #[test]
    fn test_equals_in_start_repeats_stored_operands() {
        let mut machine = InputMachine::new();
        let issued = run(&mut machine, "6 * 7 = 0 =");
        assert_eq!(issued[1].query(), ArithmeticQuery::binary("multiply", "6", "7"));
        assert_eq!(machine.display_text(), "42");
    }

    #[test]
    fn test_unary_operations() {
        let mut machine = InputMachine::new();
        let issued = run(&mut machine, "1 6 sqrt");
        assert_eq!(issued[0].query(), ArithmeticQuery::unary("sqrt", "16"));
        assert_eq!(issued[0].expression(), "√16");
        assert_eq!(machine.display_text(), "4");
        assert_eq!(machine.state(), CalculatorState::Complete);

        let issued = run(&mut machine, "reciprocal");
        assert_eq!(issued[0].expression(), "1/(4)");
        assert_eq!(machine.display_text(), "0.25");
    }

    #[test]
    fn test_unary_repeat_with_equals() {
        let mut machine = InputMachine::new();
        run(&mut machine, "8 1 sqrt =");
        assert_eq!(machine.display_text(), "3");
    }

    #[test]
    fn test_percent_uses_operand1() {
        let mut machine = InputMachine::new();
        let issued = run(&mut machine, "2 0 0 + 5 0 %");
        assert_eq!(issued[0].query(), ArithmeticQuery::binary("percent", "200", "50"));
        assert_eq!(issued[0].expression(), "200 % of 50");
        assert_eq!(machine.display_text(), "100");
    }

    #[test]
    fn test_power_is_binary() {
        let mut machine = InputMachine::new();
        run(&mut machine, "2 ^ 1 0 =");
        assert_eq!(machine.display_text(), "1024");
    }

    #[test]
    fn test_clear_resets_everything() {
        let mut machine = InputMachine::new();
        run(&mut machine, "9 * 9");
        machine.press(Input::Clear).unwrap();
        assert_eq!(machine, InputMachine::new());
    }

    #[test]
    fn test_clear_entry() {
        let mut machine = InputMachine::new();
        run(&mut machine, "9 * 8");
        machine.press(Input::ClearEntry).unwrap();
        assert_eq!(machine.display_text(), "0");
        assert_eq!(machine.state(), CalculatorState::Operator);

        run(&mut machine, "7 =");
        assert_eq!(machine.display_text(), "63");

        machine.press(Input::ClearEntry).unwrap();
        assert_eq!(machine.state(), CalculatorState::Start);
    }

    #[test]
    fn test_new_entry_after_result() {
        let mut machine = InputMachine::new();
        run(&mut machine, "2 + 3 = 4");
        assert_eq!(machine.display_text(), "4");
        assert_eq!(machine.state(), CalculatorState::Operand1);
    }

    #[test]
    fn test_large_result_sent_at_full_precision() {
        let mut machine = InputMachine::new();
        let issued = run(&mut machine, "12345678 * 1 0 = + 1 =");
        assert_eq!(machine.display_text(), "1.2346e8");
        assert_eq!(issued[1].operand1, "123456780");
    }

    #[test]
    fn test_operation_set_in_non_start_states() {
        let mut machine = InputMachine::new();
        for input in parse_sequence("1 + 2 = 3 * 4 sqrt").unwrap() {
            if let Ok(Some(calc)) = machine.press(input) {
                if let Ok(v) = evaluate(&calc.query()) {
                    machine.resolve(&calc, v);
                }
            }
            if matches!(
                machine.state(),
                CalculatorState::Operator | CalculatorState::Operand2 | CalculatorState::Complete
            ) {
                assert!(machine.pending().operation.is_some());
            }
        }
    }
}
