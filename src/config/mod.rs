// SPDX-License-Identifier: MPL-2.0
//! This module handles the widget's configuration, including loading and saving
//! preferences to a `settings.toml` file.
//!
//! # Examples
//!
//! ```no_run
//! use iced_alerts::config::{self, Config};
//! use std::path::PathBuf;
//!
//! // Load existing configuration
//! let mut config = config::load().unwrap_or_default();
//!
//! // Modify a setting
//! config.animations_enabled = Some(false);
//!
//! // Save the modified configuration
//! config::save(&config).expect("Failed to save config");
//!
//! // To load/save from a specific path (e.g., for testing)
//! let temp_dir = PathBuf::from("./temp_config_dir");
//! std::fs::create_dir_all(&temp_dir).unwrap();
//! let temp_file = temp_dir.join("test_settings.toml");
//! config::save_to_path(&config, &temp_file).expect("Failed to save to path");
//! let loaded_config = config::load_from_path(&temp_file).expect("Failed to load from path");
//! assert_eq!(loaded_config.animations_enabled, Some(false));
//! std::fs::remove_dir_all(&temp_dir).unwrap();
//! ```

pub mod defaults;
mod tick_interval;

pub use defaults::*;
pub use tick_interval::TickInterval;

use crate::error::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILE: &str = "settings.toml";
const APP_NAME: &str = "IcedAlerts";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub animations_enabled: Option<bool>,
    #[serde(default)]
    pub tick_interval_ms: Option<u64>,
    #[serde(default)]
    pub show_icon: Option<bool>,
    /// Locale of the demo texts, e.g. `fr`. Unset means the system locale.
    #[serde(default)]
    pub language: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            animations_enabled: Some(true),
            tick_interval_ms: Some(DEFAULT_TICK_INTERVAL_MS),
            show_icon: Some(true),
            language: None,
        }
    }
}

impl Config {
    /// Whether alerts animate in and out. Missing values mean enabled.
    #[must_use]
    pub fn animations_enabled(&self) -> bool {
        self.animations_enabled.unwrap_or(true)
    }

    /// Countdown resolution, clamped to the supported range.
    #[must_use]
    pub fn tick_interval(&self) -> TickInterval {
        self.tick_interval_ms
            .map(TickInterval::new)
            .unwrap_or_default()
    }

    /// Whether new alerts carry a dismiss affordance by default.
    #[must_use]
    pub fn show_icon(&self) -> bool {
        self.show_icon.unwrap_or(true)
    }
}

fn get_default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|mut path| {
        path.push(APP_NAME);
        path.push(CONFIG_FILE);
        path
    })
}

pub fn load() -> Result<Config> {
    if let Some(path) = get_default_config_path() {
        if path.exists() {
            return load_from_path(&path);
        }
    }
    Ok(Config::default())
}

pub fn save(config: &Config) -> Result<()> {
    if let Some(path) = get_default_config_path() {
        return save_to_path(config, &path);
    }
    Ok(())
}

/// Parses settings from TOML text.
pub fn parse_config(content: &str) -> Result<Config> {
    Ok(toml::from_str(content)?)
}

pub fn load_from_path(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)?;
    match parse_config(&content) {
        Ok(config) => Ok(config),
        Err(err) => {
            log::warn!("Ignoring invalid config at {}: {err}", path.display());
            Ok(Config::default())
        }
    }
}

pub fn save_to_path(config: &Config, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let content = toml::to_string_pretty(config)?;
    fs::write(path, content)?;
    Ok(())
}
