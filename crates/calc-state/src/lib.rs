//! Session state management for Pocket Calc
//!
//! This crate owns the live calculator state for the running UI session,
//! logs every transition, and publishes snapshots to the host renderer.
//!
//! # Example
//!
//! ```rust
//! use calc_state::CalculatorSession;
//!
//! let mut session = CalculatorSession::new();
//! session.press_sequence(["9", "÷", "0", "="]).unwrap();
//! assert_eq!(session.display(), "Infinity");
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod config;
pub mod session;

pub use config::{ConfigError, SessionConfig};
pub use session::{CalculatorSession, SessionError};
