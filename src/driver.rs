//! Terminal driver
//!
//! Key labels are separated by whitespace (`5 + 3 =`). Arguments are
//! applied in one go and the final display printed; line input prints the
//! display after every line, reporting bad keys without ending the run.

use calc_state::{CalculatorSession, SessionError};
use std::io::{self, BufRead, Write};

/// Apply every label in `args` and return the final display
pub fn run_args<I, S>(session: &mut CalculatorSession, args: I) -> Result<String, SessionError>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    for arg in args {
        session.press_sequence(arg.as_ref().split_whitespace())?;
    }
    Ok(session.display().to_string())
}

/// Process input line by line, writing the display after each line
///
/// An unknown key is reported on `errors`; the rest of that line is
/// skipped and the session keeps whatever the earlier keys produced.
pub fn run_lines<R, W, E>(
    session: &mut CalculatorSession,
    input: R,
    mut output: W,
    mut errors: E,
) -> io::Result<()>
where
    R: BufRead,
    W: Write,
    E: Write,
{
    for line in input.lines() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }

        if let Err(err) = session.press_sequence(line.split_whitespace()) {
            tracing::warn!(%err, line = line.as_str(), "Skipping rest of line");
            writeln!(errors, "error: {}", err)?;
        }
        writeln!(output, "{}", session.display())?;
    }
    output.flush()
}
