//! Settings loader for `config.toml`

use std::path::{Path, PathBuf};

use ratewatch_core::prelude::*;

use super::types::Settings;

const CONFIG_FILENAME: &str = "config.toml";
const RATEWATCH_DIR: &str = "ratewatch";

/// Default location: `<config-dir>/ratewatch/config.toml`
pub fn default_config_path() -> PathBuf {
    let base = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
    base.join(RATEWATCH_DIR).join(CONFIG_FILENAME)
}

/// Load settings from the default location or an explicit override.
///
/// A missing file yields defaults; a file that fails to parse logs a warning
/// and yields defaults rather than aborting startup.
pub fn load_settings(override_path: Option<&Path>) -> Settings {
    let path = override_path
        .map(Path::to_path_buf)
        .unwrap_or_else(default_config_path);
    load_settings_from(&path)
}

/// Load settings from a specific path
pub fn load_settings_from(path: &Path) -> Settings {
    let content = match std::fs::read_to_string(path) {
        Ok(content) => content,
        Err(_) => {
            debug!("No config file at {}, using defaults", path.display());
            return Settings::default();
        }
    };

    match parse_settings(&content) {
        Ok(settings) => {
            info!("Loaded settings from {}", path.display());
            settings
        }
        Err(e) => {
            warn!("Failed to parse {}: {}. Using defaults.", path.display(), e);
            Settings::default()
        }
    }
}

fn parse_settings(content: &str) -> Result<Settings> {
    toml::from_str(content).map_err(|e| Error::config_invalid(e.to_string()))
}
