//! Configuration file parsing for ratewatch
//!
//! Supports:
//! - `<config-dir>/ratewatch/config.toml` - Global settings
//! - `--config <path>` - Explicit override from the CLI

pub mod settings;
pub mod types;

pub use settings::{default_config_path, load_settings, load_settings_from};
pub use types::*;
