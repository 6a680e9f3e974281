//! Configuration types

use serde::{Deserialize, Serialize};

/// Top-level settings, deserialized from `config.toml`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct Settings {
    pub ui: UiSettings,
    pub feed: FeedSettings,
}

/// `[ui]` section
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct UiSettings {
    /// Currency shown next to the app title in the header
    pub base_currency: String,
}

impl Default for UiSettings {
    fn default() -> Self {
        Self {
            base_currency: "USD".to_string(),
        }
    }
}

/// `[feed]` section
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FeedSettings {
    /// Run the built-in rate feed. When off, the board stays empty until a
    /// snapshot arrives from elsewhere.
    pub enabled: bool,

    /// Seconds between snapshots. Rates are updated hourly by default.
    pub interval_secs: u64,
}

impl Default for FeedSettings {
    fn default() -> Self {
        Self {
            enabled: true,
            interval_secs: 3600,
        }
    }
}
