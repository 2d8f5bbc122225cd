//! This module handles the site's local configuration, including loading and
//! saving the visitor's preferences to a `settings.toml` file.
//!
//! The `language` field is the preference record: it is read exactly once at
//! startup (before anything is rendered) and written on every explicit locale
//! switch. Its absence is a valid state and falls through to environment
//! detection.
//!
//! # Examples
//!
//! ```no_run
//! use moonote_site::config::{self, Config};
//!
//! // Load existing configuration
//! let mut config = config::load().unwrap_or_default();
//!
//! // Remember a locale switch
//! config.language = Some("zh-TW".to_string());
//!
//! // Save the modified configuration
//! config::save(&config).expect("Failed to save config");
//! ```

use crate::error::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILE: &str = "settings.toml";
const APP_NAME: &str = "Moonote";

#[derive(Debug, Default, Serialize, Deserialize)]
pub struct Config {
    /// Last explicitly chosen locale code (`en`, `zh-TW`, `zh-CN`, `th`).
    pub language: Option<String>,
    /// Overrides the default content document location.
    #[serde(default)]
    pub content_url: Option<String>,
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

pub fn load_from_path(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)?;
    Ok(toml::from_str(&content).unwrap_or_default())
}

pub fn save_to_path(config: &Config, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let content = toml::to_string_pretty(config)?;
    fs::write(path, content)?;
    Ok(())
}
