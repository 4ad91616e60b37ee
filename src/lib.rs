//! Pocket Calc
//!
//! A four-function pocket calculator: numeric keypad input with
//! left-to-right, no-precedence arithmetic.
//!
//! The logic lives in two workspace crates, re-exported here:
//!
//! - [`calc_core`] - the pure accumulator state machine, events and
//!   number formatting
//! - [`calc_state`] - the session that owns the live state, logs and
//!   publishes it
//!
//! [`driver`] feeds key labels from a terminal into a session.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod driver;

pub use calc_core::{
    calculate, format_number, parse_number, CalculatorState, Digit, Event, Key, KeyParseError,
    KeyRole, Keypad, Operator,
};
pub use calc_state::{CalculatorSession, ConfigError, SessionConfig, SessionError};
