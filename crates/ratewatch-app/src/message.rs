//! Message types for the application (TEA pattern)

use chrono::{DateTime, Local};
use ratewatch_core::Rate;

use crate::input_key::InputKey;

/// All possible messages/actions in the application
#[derive(Debug, Clone)]
pub enum Message {
    /// Keyboard event from terminal
    Key(InputKey),

    /// Tick event for periodic redraws (keeps clock-derived text current)
    Tick,

    /// Force quit (Ctrl+C, signal handler)
    Quit,

    /// A fresh snapshot arrived from the rate feed
    RatesUpdated {
        rates: Vec<Rate>,
        at: DateTime<Local>,
    },
}
