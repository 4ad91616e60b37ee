//! Keypad layout
//!
//! The calculator screen is a five-row grid of buttons. Each button maps
//! one-to-one to an [`Event`]; its [`KeyRole`] tells the host which visual
//! family the button belongs to, and `wide` marks the double-width zero.
//!
//! ```text
//! ┌─────┬─────┬─────┬─────┐
//! │  C  │  ±  │  %  │  ÷  │
//! ├─────┼─────┼─────┼─────┤
//! │  7  │  8  │  9  │  ×  │
//! ├─────┼─────┼─────┼─────┤
//! │  4  │  5  │  6  │  -  │
//! ├─────┼─────┼─────┼─────┤
//! │  1  │  2  │  3  │  +  │
//! ├─────┴─────┼─────┼─────┤
//! │     0     │  .  │  =  │
//! └───────────┴─────┴─────┘
//! ```

use crate::event::{Digit, Event, Operator};
use serde::{Deserialize, Serialize};

/// Visual family of a key
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum KeyRole {
    /// Digits and the decimal point
    #[default]
    Number,
    /// Arithmetic operators
    Operation,
    /// Clear, sign flip and percent
    Function,
    /// The equals key
    Equals,
}

impl KeyRole {
    /// Role of the key that produces `event`
    pub fn for_event(event: Event) -> Self {
        match event {
            Event::Digit(_) | Event::Decimal => KeyRole::Number,
            Event::Operator(_) => KeyRole::Operation,
            Event::Clear | Event::SignFlip | Event::Percent => KeyRole::Function,
            Event::Equals => KeyRole::Equals,
        }
    }
}

/// A single keypad button
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Key {
    /// Event produced when pressed
    pub event: Event,
    /// Visual family
    pub role: KeyRole,
    /// Spans two columns
    #[serde(default)]
    pub wide: bool,
}

impl Key {
    /// Create a single-width key
    pub fn new(event: Event) -> Self {
        Self {
            event,
            role: KeyRole::for_event(event),
            wide: false,
        }
    }

    /// Make the key span two columns
    pub fn wide(mut self) -> Self {
        self.wide = true;
        self
    }

    /// Label printed on the key
    pub fn label(&self) -> &'static str {
        self.event.label()
    }

    /// Number of grid columns the key occupies
    pub fn columns(&self) -> usize {
        if self.wide {
            2
        } else {
            1
        }
    }
}

/// The button grid, top row first
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Keypad {
    rows: Vec<Vec<Key>>,
}

impl Default for Keypad {
    fn default() -> Self {
        Self::standard()
    }
}

impl Keypad {
    /// Columns in every row
    pub const COLUMNS: usize = 4;

    /// The standard calculator layout
    pub fn standard() -> Self {
        let digits: Vec<Key> = Digit::all().map(|d| Key::new(Event::Digit(d))).collect();
        let digit = |value: usize| digits[value];
        let op = |op: Operator| Key::new(Event::Operator(op));

        Self {
            rows: vec![
                vec![
                    Key::new(Event::Clear),
                    Key::new(Event::SignFlip),
                    Key::new(Event::Percent),
                    op(Operator::Divide),
                ],
                vec![digit(7), digit(8), digit(9), op(Operator::Multiply)],
                vec![digit(4), digit(5), digit(6), op(Operator::Subtract)],
                vec![digit(1), digit(2), digit(3), op(Operator::Add)],
                vec![
                    digit(0).wide(),
                    Key::new(Event::Decimal),
                    Key::new(Event::Equals),
                ],
            ],
        }
    }

    /// All rows, top first
    pub fn rows(&self) -> &[Vec<Key>] {
        &self.rows
    }

    /// All keys in reading order
    pub fn keys(&self) -> impl Iterator<Item = &Key> {
        self.rows.iter().flatten()
    }

    /// Find the key carrying `label`
    pub fn find(&self, label: &str) -> Option<&Key> {
        self.keys().find(|key| key.label() == label)
    }

    /// Find the key producing `event`
    pub fn key_for(&self, event: Event) -> Option<&Key> {
        self.keys().find(|key| key.event == event)
    }
}
