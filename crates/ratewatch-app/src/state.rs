//! Application state (Model in TEA pattern)

use chrono::{DateTime, Local};
use ratewatch_core::{Rate, RateBoard};

use crate::config::Settings;

/// Where the rate feed currently stands, for the header indicator
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FeedPhase {
    /// No snapshot received yet
    #[default]
    Waiting,

    /// At least one snapshot has been applied
    Live,
}

/// Top-level application state
#[derive(Debug, Clone, Default)]
pub struct AppState {
    pub settings: Settings,
    pub board: RateBoard,
    pub phase: FeedPhase,
    quit: bool,
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_settings(settings: Settings) -> Self {
        Self {
            settings,
            ..Self::default()
        }
    }

    /// Apply a feed snapshot: replace the board and mark the feed live
    pub fn apply_snapshot(&mut self, rates: Vec<Rate>, at: DateTime<Local>) {
        self.board.apply_snapshot(rates, at);
        self.phase = FeedPhase::Live;
    }

    pub fn request_quit(&mut self) {
        self.quit = true;
    }

    pub fn should_quit(&self) -> bool {
        self.quit
    }
}
