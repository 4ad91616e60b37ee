//! Error types for calc-core
//!
//! Arithmetic itself never fails: division by zero flows through as an
//! IEEE-754 infinity or NaN. The only fallible operations are at the input
//! boundary, where free-form key labels are turned into [`crate::Event`]s.

use thiserror::Error;

/// Key label parsing errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum KeyParseError {
    /// The label does not name any calculator key
    #[error("Unknown key: {0:?}")]
    UnknownKey(String),

    /// A digit value outside 0-9
    #[error("Invalid digit: {0} (expected 0-9)")]
    InvalidDigit(u8),

    /// The label does not name an arithmetic operator
    #[error("Unknown operator: {0:?}")]
    UnknownOperator(String),
}

/// Result type for key parsing
pub type Result<T> = std::result::Result<T, KeyParseError>;
