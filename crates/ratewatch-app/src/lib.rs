//! ratewatch-app - Application state and orchestration for ratewatch
//!
//! This crate implements the TEA (The Elm Architecture) pattern for state
//! management: the model ([`AppState`]), the messages that drive it
//! ([`Message`]), and the update function ([`handler::update`]). It also owns
//! configuration loading, the demo rate feed, and OS signal handling.

pub mod config;
pub mod feed;
pub mod handler;
pub mod input_key;
pub mod message;
pub mod signals;
pub mod state;

// Re-export primary types
pub use config::{load_settings, FeedSettings, Settings, UiSettings};
pub use feed::RateFeed;
pub use handler::{update, UpdateAction};
pub use input_key::InputKey;
pub use message::Message;
pub use state::{AppState, FeedPhase};
