//! Accumulator state machine
//!
//! Two-operand, no-precedence arithmetic in the style of a pocket
//! calculator. The whole machine is four fields: the display text, the
//! pending left operand, the pending operator, and a flag telling the next
//! digit to start a fresh entry. Each operator press folds the previous
//! pending computation, so `2 + 3 × 4 =` evaluates as `(2 + 3) × 4`.
//!
//! # Example
//!
//! ```
//! use calc_core::{CalculatorState, Event, Operator};
//!
//! let state = [
//!     Event::digit(2).unwrap(),
//!     Event::Operator(Operator::Add),
//!     Event::digit(3).unwrap(),
//!     Event::Operator(Operator::Multiply),
//!     Event::digit(4).unwrap(),
//!     Event::Equals,
//! ]
//! .into_iter()
//! .fold(CalculatorState::new(), CalculatorState::apply);
//!
//! assert_eq!(state.display(), "20");
//! ```

use crate::event::{Digit, Event, Operator};
use crate::number::{format_number, parse_number};
use serde::{Deserialize, Serialize};

/// Display text shown at start-up and after clear
pub const INITIAL_DISPLAY: &str = "0";

/// Complete calculator state
///
/// A plain value: [`CalculatorState::apply`] consumes a state and returns
/// the next one, so the machine can be tested without any UI harness.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CalculatorState {
    /// Text currently shown
    display: String,
    /// Left-hand operand captured when an operator was pressed
    pending_operand: Option<f64>,
    /// Operator waiting for its right-hand operand
    pending_operator: Option<Operator>,
    /// Next digit replaces the display instead of extending it
    reset_entry: bool,
}

impl Default for CalculatorState {
    fn default() -> Self {
        Self::new()
    }
}

impl CalculatorState {
    /// Create the initial state: `("0", none, none, false)`
    pub fn new() -> Self {
        Self {
            display: INITIAL_DISPLAY.to_string(),
            pending_operand: None,
            pending_operator: None,
            reset_entry: false,
        }
    }

    /// Text currently shown
    pub fn display(&self) -> &str {
        &self.display
    }

    /// Pending left-hand operand, if an operator has been pressed
    pub fn pending_operand(&self) -> Option<f64> {
        self.pending_operand
    }

    /// Pending operator, if any
    pub fn pending_operator(&self) -> Option<Operator> {
        self.pending_operator
    }

    /// Whether the next digit starts a new entry
    pub fn is_entry_reset(&self) -> bool {
        self.reset_entry
    }

    /// Numeric value of the display
    pub fn value(&self) -> f64 {
        parse_number(&self.display)
    }

    /// Whether the display holds `Infinity`, `-Infinity` or `NaN`
    pub fn is_non_finite(&self) -> bool {
        !self.value().is_finite()
    }

    /// Whether this is the initial (cleared) state
    pub fn is_cleared(&self) -> bool {
        *self == Self::new()
    }

    /// Transition to the next state
    #[must_use]
    pub fn apply(mut self, event: Event) -> Self {
        match event {
            Event::Digit(digit) => self.push_digit(digit),
            Event::Decimal => self.push_decimal(),
            Event::Operator(op) => self.choose_operator(op),
            Event::Equals => self.evaluate(),
            Event::Clear => return Self::new(),
            Event::SignFlip => self.display = format_number(-self.value()),
            Event::Percent => self.display = format_number(self.value() / 100.0),
        }
        self
    }

    /// Apply an event in place
    pub fn handle(&mut self, event: Event) {
        *self = std::mem::take(self).apply(event);
    }

    fn push_digit(&mut self, digit: Digit) {
        if self.reset_entry {
            self.display = digit.label().to_string();
            self.reset_entry = false;
        } else if self.display == INITIAL_DISPLAY {
            self.display = digit.label().to_string();
        } else {
            self.display.push(digit.as_char());
        }
    }

    fn push_decimal(&mut self) {
        if self.reset_entry {
            self.display = "0.".to_string();
            self.reset_entry = false;
        } else if !self.display.contains('.') {
            self.display.push('.');
        }
    }

    fn choose_operator(&mut self, op: Operator) {
        let current = self.value();

        match (self.pending_operand, self.pending_operator) {
            (Some(lhs), Some(pending)) if !self.reset_entry => {
                let result = calculate(lhs, current, pending);
                self.display = format_number(result);
                self.pending_operand = Some(result);
            }
            _ => self.pending_operand = Some(current),
        }

        self.pending_operator = Some(op);
        self.reset_entry = true;
    }

    fn evaluate(&mut self) {
        let (Some(lhs), Some(op)) = (self.pending_operand, self.pending_operator) else {
            return;
        };

        let result = calculate(lhs, self.value(), op);
        self.display = format_number(result);
        self.pending_operand = None;
        self.pending_operator = None;
        self.reset_entry = true;
    }
}

/// Combine two operands with an operator
pub fn calculate(lhs: f64, rhs: f64, op: Operator) -> f64 {
    op.apply(lhs, rhs)
}
