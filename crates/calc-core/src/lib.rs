//! Core calculator logic for Pocket Calc
//!
//! This crate contains the pure arithmetic state machine behind the
//! calculator screen. It performs no I/O: every operation is a
//! deterministic function of the current state and one input event.
//!
//! # Modules
//!
//! - [`accumulator`] - The four-field state machine and its transitions
//! - [`event`] - Input events, digits and operators
//! - [`keypad`] - The button grid mapping keys to events
//! - [`number`] - Display text formatting and parsing
//! - [`error`] - Key parsing errors
//!
//! # Example
//!
//! ```rust
//! use calc_core::{CalculatorState, Event};
//!
//! let mut state = CalculatorState::new();
//! for label in ["5", "+", "3", "="] {
//!     state.handle(label.parse::<Event>().unwrap());
//! }
//! assert_eq!(state.display(), "8");
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod accumulator;
pub mod error;
pub mod event;
pub mod keypad;
pub mod number;

pub use accumulator::{calculate, CalculatorState, INITIAL_DISPLAY};
pub use error::KeyParseError;
pub use event::{Digit, Event, Operator};
pub use keypad::{Key, KeyRole, Keypad};
pub use number::{format_number, parse_number};
