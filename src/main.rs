//! Pocket Calc terminal host
//!
//! ```text
//! pocket-calc 2 + 3 × 4 =     # prints 20
//! echo "9 ÷ 0 =" | pocket-calc # prints Infinity
//! ```
//!
//! ## Environment
//! - `POCKET_CALC_CONFIG` - path to a JSON session config
//! - `RUST_LOG` - log filter (default: `warn`); logs go to stderr

use anyhow::{Context, Result};
use pocket_calc::driver;
use pocket_calc::{CalculatorSession, SessionConfig};
use tracing_subscriber::EnvFilter;

const CONFIG_ENV: &str = "POCKET_CALC_CONFIG";

fn main() -> Result<()> {
    init_tracing();

    let config = load_config()?;
    let mut session = CalculatorSession::with_config(config);

    let args: Vec<String> = std::env::args().skip(1).collect();
    if args.is_empty() {
        let stdin = std::io::stdin();
        driver::run_lines(
            &mut session,
            stdin.lock(),
            std::io::stdout().lock(),
            std::io::stderr().lock(),
        )
        .context("Failed to process input")?;
    } else {
        let display = driver::run_args(&mut session, &args)?;
        println!("{}", display);
    }

    Ok(())
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn load_config() -> Result<SessionConfig> {
    match std::env::var_os(CONFIG_ENV) {
        Some(path) => SessionConfig::load(&path)
            .with_context(|| format!("{} points to an unusable config", CONFIG_ENV)),
        None => Ok(SessionConfig::default()),
    }
}
