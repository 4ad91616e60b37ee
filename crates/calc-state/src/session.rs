//! Calculator session
//!
//! A [`CalculatorSession`] is the single owner of the live
//! [`CalculatorState`]. Input events are applied synchronously, one at a
//! time; every resulting state is published on a `watch` channel so the
//! host renderer can pick up the latest snapshot without ever touching the
//! state itself.

use calc_core::{CalculatorState, Event, KeyParseError, Keypad, Operator};
use thiserror::Error;
use tokio::sync::watch;

use crate::config::SessionConfig;

/// Session errors
#[derive(Debug, Error)]
pub enum SessionError {
    /// A key label could not be parsed
    #[error("Invalid key: {0}")]
    InvalidKey(#[from] KeyParseError),
}

/// Result type for session operations
pub type Result<T> = std::result::Result<T, SessionError>;

/// The active calculator session
#[derive(Debug)]
pub struct CalculatorSession {
    state: CalculatorState,
    config: SessionConfig,
    keypad: Keypad,
    updates: watch::Sender<CalculatorState>,
    events_handled: u64,
}

impl Default for CalculatorSession {
    fn default() -> Self {
        Self::new()
    }
}

impl CalculatorSession {
    /// Start a session with the default configuration
    pub fn new() -> Self {
        Self::with_config(SessionConfig::default())
    }

    /// Start a session with the given configuration
    pub fn with_config(config: SessionConfig) -> Self {
        let state = CalculatorState::new();
        let (updates, _) = watch::channel(state.clone());
        tracing::info!(?config, "Calculator session started");

        Self {
            state,
            config,
            keypad: Keypad::standard(),
            updates,
            events_handled: 0,
        }
    }

    /// Apply one input event
    pub fn dispatch(&mut self, event: Event) -> &CalculatorState {
        self.state.handle(event);
        self.events_handled += 1;

        let state = &self.state;
        let config = &self.config;

        // The channel holds the state as it was before this event
        self.updates.send_if_modified(|published| {
            if config.log_transitions {
                tracing::debug!(
                    %event,
                    before = published.display(),
                    after = state.display(),
                    pending = ?state.pending_operator().map(|op| op.symbol()),
                    "Key press"
                );
            }

            if event == Event::Clear {
                tracing::info!("Calculator cleared");
            } else if state.is_non_finite() && !published.is_non_finite() {
                tracing::warn!(display = state.display(), "Result is not a finite number");
            }

            let changed = *published != *state;
            if changed {
                published.clone_from(state);
            }
            changed || config.publish_noops
        });

        &self.state
    }

    /// Parse a key label and apply it
    pub fn press(&mut self, label: &str) -> Result<&CalculatorState> {
        let event: Event = label.parse()?;
        Ok(self.dispatch(event))
    }

    /// Apply a sequence of key labels, stopping at the first invalid one
    ///
    /// Keys before the invalid label stay applied.
    pub fn press_sequence<I, S>(&mut self, labels: I) -> Result<&CalculatorState>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        for label in labels {
            self.press(label.as_ref())?;
        }
        Ok(&self.state)
    }

    /// Reset to the initial state
    pub fn clear(&mut self) -> &CalculatorState {
        self.dispatch(Event::Clear)
    }

    /// Subscribe to state snapshots
    pub fn subscribe(&self) -> watch::Receiver<CalculatorState> {
        self.updates.subscribe()
    }

    /// Current display text
    pub fn display(&self) -> &str {
        self.state.display()
    }

    /// Current state
    pub fn state(&self) -> &CalculatorState {
        &self.state
    }

    /// Pending left-hand operand
    pub fn pending_operand(&self) -> Option<f64> {
        self.state.pending_operand()
    }

    /// Pending operator
    pub fn pending_operator(&self) -> Option<Operator> {
        self.state.pending_operator()
    }

    /// Whether the next digit starts a new entry
    pub fn is_entry_reset(&self) -> bool {
        self.state.is_entry_reset()
    }

    /// The on-screen keypad
    ///
    /// Every key on it is accepted by [`press`](Self::press), which also
    /// takes keyboard aliases that have no key of their own (`*`, `AC`).
    pub fn keypad(&self) -> &Keypad {
        &self.keypad
    }

    /// Session configuration
    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    /// Number of events handled since the session started
    pub fn events_handled(&self) -> u64 {
        self.events_handled
    }
}
