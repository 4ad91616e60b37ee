//! Input events
//!
//! Every button on the keypad maps to exactly one [`Event`]. Events are a
//! closed set: operators are an enum rather than free-form symbols and
//! digits are a validated newtype, so an invalid key can never reach the
//! accumulator.

use crate::error::{KeyParseError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

const DIGIT_LABELS: [&str; 10] = ["0", "1", "2", "3", "4", "5", "6", "7", "8", "9"];

// =============================================================================
// Digit
// =============================================================================

/// A single decimal digit (0-9)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Digit(u8);

impl Digit {
    /// Create a digit, rejecting values above 9
    pub fn new(value: u8) -> Result<Self> {
        if value <= 9 {
            Ok(Self(value))
        } else {
            Err(KeyParseError::InvalidDigit(value))
        }
    }

    /// Create a digit from an ASCII character
    pub fn from_char(c: char) -> Option<Self> {
        c.to_digit(10).map(|d| Self(d as u8))
    }

    /// Numeric value
    pub fn value(self) -> u8 {
        self.0
    }

    /// Character appended to the display
    pub fn as_char(self) -> char {
        char::from(b'0' + self.0)
    }

    /// Key label
    pub fn label(self) -> &'static str {
        DIGIT_LABELS[self.0 as usize]
    }

    /// All ten digits in ascending order
    pub fn all() -> impl Iterator<Item = Digit> {
        (0..=9).map(Digit)
    }
}

impl TryFrom<u8> for Digit {
    type Error = KeyParseError;

    fn try_from(value: u8) -> Result<Self> {
        Digit::new(value)
    }
}

impl From<Digit> for u8 {
    fn from(digit: Digit) -> u8 {
        digit.0
    }
}

impl fmt::Display for Digit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

// =============================================================================
// Operator
// =============================================================================

/// Binary arithmetic operators
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Operator {
    /// Addition (+)
    Add,
    /// Subtraction (-)
    Subtract,
    /// Multiplication (×)
    Multiply,
    /// Division (÷)
    Divide,
}

impl Operator {
    /// Symbol shown on the key
    pub fn symbol(&self) -> &'static str {
        match self {
            Operator::Add => "+",
            Operator::Subtract => "-",
            Operator::Multiply => "×",
            Operator::Divide => "÷",
        }
    }

    /// Apply the operator to two operands
    ///
    /// Division by zero is not special-cased and yields an IEEE-754
    /// infinity or NaN.
    pub fn apply(&self, lhs: f64, rhs: f64) -> f64 {
        match self {
            Operator::Add => lhs + rhs,
            Operator::Subtract => lhs - rhs,
            Operator::Multiply => lhs * rhs,
            Operator::Divide => lhs / rhs,
        }
    }

    /// All operators in keypad order (top to bottom)
    pub fn all() -> [Operator; 4] {
        [
            Operator::Divide,
            Operator::Multiply,
            Operator::Subtract,
            Operator::Add,
        ]
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

impl FromStr for Operator {
    type Err = KeyParseError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim() {
            "+" => Ok(Operator::Add),
            "-" | "−" => Ok(Operator::Subtract),
            "×" | "*" | "x" | "X" => Ok(Operator::Multiply),
            "÷" | "/" => Ok(Operator::Divide),
            other => Err(KeyParseError::UnknownOperator(other.to_string())),
        }
    }
}

// =============================================================================
// Event
// =============================================================================

/// A single button press
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "type", content = "value", rename_all = "snake_case")]
pub enum Event {
    /// A digit key (0-9)
    Digit(Digit),
    /// The decimal point key
    Decimal,
    /// An operator key
    Operator(Operator),
    /// The equals key
    Equals,
    /// The clear key (C)
    Clear,
    /// The sign-flip key (±)
    SignFlip,
    /// The percent key (%)
    Percent,
}

impl Event {
    /// Label printed on the key for this event
    pub fn label(&self) -> &'static str {
        match self {
            Event::Digit(d) => d.label(),
            Event::Decimal => ".",
            Event::Operator(op) => op.symbol(),
            Event::Equals => "=",
            Event::Clear => "C",
            Event::SignFlip => "±",
            Event::Percent => "%",
        }
    }

    /// Shorthand for a digit event; values above 9 are rejected
    pub fn digit(value: u8) -> Result<Self> {
        Digit::new(value).map(Event::Digit)
    }
}

impl From<Digit> for Event {
    fn from(digit: Digit) -> Self {
        Event::Digit(digit)
    }
}

impl From<Operator> for Event {
    fn from(op: Operator) -> Self {
        Event::Operator(op)
    }
}

impl fmt::Display for Event {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Event {
    type Err = KeyParseError;

    /// Parse a key label. Besides the printed labels, a few ASCII aliases
    /// are accepted for keyboard input (`*`, `/`, `c`, `AC`, `+/-`).
    fn from_str(s: &str) -> Result<Self> {
        let label = s.trim();

        let mut chars = label.chars();
        if let (Some(c), None) = (chars.next(), chars.next()) {
            if let Some(digit) = Digit::from_char(c) {
                return Ok(Event::Digit(digit));
            }
        }

        match label {
            "." => Ok(Event::Decimal),
            "=" => Ok(Event::Equals),
            "C" | "c" | "AC" => Ok(Event::Clear),
            "±" | "+/-" => Ok(Event::SignFlip),
            "%" => Ok(Event::Percent),
            other => other
                .parse::<Operator>()
                .map(Event::Operator)
                .map_err(|_| KeyParseError::UnknownKey(other.to_string())),
        }
    }
}
