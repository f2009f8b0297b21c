//! User settings loaded from the config directory

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use innkeep_core::prelude::*;

const CONFIG_FILENAME: &str = "config.toml";
const APP_DIR: &str = "innkeep";

/// Global application settings
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Settings {
    #[serde(default)]
    pub behavior: BehaviorSettings,

    #[serde(default)]
    pub ui: UiSettings,
}

/// Behavior settings
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct BehaviorSettings {
    /// Ask before discarding a form with user input
    #[serde(default = "default_true")]
    pub confirm_discard: bool,
}

impl Default for BehaviorSettings {
    fn default() -> Self {
        Self {
            confirm_discard: true,
        }
    }
}

/// UI settings
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct UiSettings {
    /// Use plain ASCII markers instead of Unicode glyphs
    #[serde(default)]
    pub ascii_icons: bool,
}

impl Default for UiSettings {
    fn default() -> Self {
        Self { ascii_icons: false }
    }
}

fn default_true() -> bool {
    true
}

/// Load settings from `<config dir>/innkeep/config.toml`.
///
/// A missing or unparsable file falls back to defaults; a broken config
/// should never keep the app from starting.
pub fn load_settings() -> Settings {
    let Some(path) = config_path() else {
        debug!("No config directory available, using defaults");
        return Settings::default();
    };
    load_settings_from(&path)
}

/// Load settings from an explicit path (split out for tests).
pub fn load_settings_from(config_path: &Path) -> Settings {
    if !config_path.exists() {
        debug!("No config file at {:?}, using defaults", config_path);
        return Settings::default();
    }

    match std::fs::read_to_string(config_path) {
        Ok(content) => match toml::from_str(&content) {
            Ok(settings) => {
                debug!("Loaded settings from {:?}", config_path);
                settings
            }
            Err(e) => {
                warn!("Failed to parse {:?}: {}", config_path, e);
                Settings::default()
            }
        },
        Err(e) => {
            warn!("Failed to read {:?}: {}", config_path, e);
            Settings::default()
        }
    }
}

fn config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|base| base.join(APP_DIR).join(CONFIG_FILENAME))
}
