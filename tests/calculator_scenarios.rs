//! Calculator Scenario Integration Tests
//!
//! End-to-end key sequences driven through a session, the terminal driver,
//! and a file-based configuration.

use pocket_calc::driver::{run_args, run_lines};
use pocket_calc::{CalculatorSession, KeyParseError, Operator, SessionConfig, SessionError};
use std::io::{Cursor, Write};
use tempfile::NamedTempFile;

/// Helper to run a whitespace-separated key sequence on a fresh session
fn press(keys: &str) -> CalculatorSession {
    let mut session = CalculatorSession::new();
    session.press_sequence(keys.split_whitespace()).unwrap();
    session
}

/// Test the add-then-equals scenario, including a repeated equals
#[test]
fn test_addition_then_repeated_equals() {
    let mut session = press("5 + 3 =");
    assert_eq!(session.display(), "8");

    session.press("=").unwrap();
    assert_eq!(session.display(), "8");
    assert_eq!(session.pending_operator(), None);
}

/// Test that operators fold strictly left to right
#[test]
fn test_no_operator_precedence() {
    assert_eq!(press("2 + 3 × 4 =").display(), "20");
    assert_eq!(press("1 + 2 × 3 - 4 ÷ 5 =").display(), "1");
}

/// Test division by zero surfacing as IEEE-754 text
#[test]
fn test_division_by_zero() {
    assert_eq!(press("9 ÷ 0 =").display(), "Infinity");
    assert_eq!(press("9 ± ÷ 0 =").display(), "-Infinity");
    assert_eq!(press("0 ÷ 0 =").display(), "NaN");

    // A non-finite result keeps propagating through further operations
    assert_eq!(press("9 ÷ 0 = - 1 =").display(), "Infinity");
    assert_eq!(press("0 ÷ 0 = + 1 =").display(), "NaN");
}

/// Test recovery from a non-finite result
#[test]
fn test_clear_after_infinity() {
    let mut session = press("9 ÷ 0 =");
    session.press("C").unwrap();
    assert!(session.state().is_cleared());

    session.press_sequence(["6", "×", "7", "="]).unwrap();
    assert_eq!(session.display(), "42");
}

/// Test a decimal entry workflow
#[test]
fn test_decimal_workflow() {
    let session = press(". . 5 × 4 =");
    assert_eq!(session.display(), "2");

    let session = press("1 . 5 + . 2 5 =");
    assert_eq!(session.display(), "1.75");
}

/// Test percent and sign flip mid-calculation
#[test]
fn test_percent_and_sign_flip_mid_calculation() {
    let session = press("8 0 + 5 0 % =");
    assert_eq!(session.display(), "80.5");

    let session = press("1 0 - 4 ± =");
    assert_eq!(session.display(), "14");
}

/// Test intermediate results shown while chaining
#[test]
fn test_intermediate_results() {
    let mut session = CalculatorSession::new();
    session.press_sequence(["1", "2", "+", "8"]).unwrap();
    assert_eq!(session.display(), "8");

    session.press("-").unwrap();
    assert_eq!(session.display(), "20");
    assert_eq!(session.pending_operand(), Some(20.0));
    assert_eq!(session.pending_operator(), Some(Operator::Subtract));
}

/// Test large results switching to exponent notation
#[test]
fn test_large_result_uses_exponent_notation() {
    let session = press("1 0 0 0 0 0 0 0 0 0 0 × 1 0 0 0 0 0 0 0 0 0 0 0 =");
    assert_eq!(session.display(), "1e+21");

    let session = press("1 0 0 0 0 0 0 0 0 0 0 × 1 0 0 0 0 0 0 0 0 0 0 =");
    assert_eq!(session.display(), "100000000000000000000");
}

/// Test the terminal driver in argument mode
#[test]
fn test_driver_arguments() {
    let mut session = CalculatorSession::new();
    let display = run_args(&mut session, ["2 + 3", "×", "4 ="]).unwrap();
    assert_eq!(display, "20");

    let mut session = CalculatorSession::new();
    let err = run_args(&mut session, ["2", "^", "3"]).unwrap_err();
    assert!(matches!(
        err,
        SessionError::InvalidKey(KeyParseError::UnknownKey(_))
    ));
}

/// Test the terminal driver in line mode
#[test]
fn test_driver_lines() {
    let input = Cursor::new("5 + 3 =\n\n=\n1 ? 2\n× 2 =\n");
    let mut output = Vec::new();
    let mut errors = Vec::new();
    let mut session = CalculatorSession::new();

    run_lines(&mut session, input, &mut output, &mut errors).unwrap();

    let output = String::from_utf8(output).unwrap();
    assert_eq!(output.lines().collect::<Vec<_>>(), vec!["8", "8", "1", "2"]);

    let errors = String::from_utf8(errors).unwrap();
    assert_eq!(errors, "error: Invalid key: Unknown key: \"?\"\n");
}

/// Test a session built from a configuration file
#[test]
fn test_session_from_config_file() {
    let mut file = NamedTempFile::new().unwrap();
    write!(file, r#"{{"logTransitions": false, "publishNoops": true}}"#).unwrap();

    let config = SessionConfig::load(file.path()).unwrap();
    let mut session = CalculatorSession::with_config(config);
    let updates = session.subscribe();

    session.press("=").unwrap();
    assert!(updates.has_changed().unwrap());
    assert!(!session.config().log_transitions);
}

/// Test that subscribers receive the final state of a calculation
#[tokio::test]
async fn test_subscriber_tracks_calculation() {
    let mut session = CalculatorSession::new();
    let mut updates = session.subscribe();

    session.press_sequence(["9", "÷", "0", "="]).unwrap();
    updates.changed().await.unwrap();

    let snapshot = updates.borrow_and_update().clone();
    assert_eq!(snapshot.display(), "Infinity");
    assert!(snapshot.is_entry_reset());
}
