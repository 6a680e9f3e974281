//! Message handler (Update in TEA pattern)
//!
//! `update` is a pure state transition; side effects it cannot perform
//! itself (poking the feed) are requested through [`UpdateAction`] and
//! executed by the runner.

use ratewatch_core::prelude::*;

use crate::input_key::InputKey;
use crate::message::Message;
use crate::state::AppState;

/// Effect requested by an update, executed by the caller
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UpdateAction {
    None,

    /// Ask the feed for an immediate snapshot
    Refresh,
}

/// Process one message against the state
pub fn update(state: &mut AppState, msg: Message) -> UpdateAction {
    match msg {
        Message::Key(key) => handle_key(state, key),
        Message::Tick => UpdateAction::None,
        Message::Quit => {
            state.request_quit();
            UpdateAction::None
        }
        Message::RatesUpdated { rates, at } => {
            debug!(count = rates.len(), %at, "applying rate snapshot");
            state.apply_snapshot(rates, at);
            UpdateAction::None
        }
    }
}

fn handle_key(state: &mut AppState, key: InputKey) -> UpdateAction {
    match key {
        InputKey::Esc | InputKey::Ctrl('c') => {
            state.request_quit();
            UpdateAction::None
        }
        _ => match key.as_char() {
            Some('q') => {
                state.request_quit();
                UpdateAction::None
            }
            Some('r') => {
                info!("manual refresh requested");
                UpdateAction::Refresh
            }
            _ => UpdateAction::None,
        },
    }
}
