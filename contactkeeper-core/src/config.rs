//! Configuration management
//!
//! Settings live in `settings.json` inside the data directory:
//! ```json
//! {
//!   "app": { "dataFile": "contacts.json", ... }
//! }
//! ```
//! Keys this crate does not manage are preserved when saving.

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use anyhow::Result;
use serde::{Deserialize, Serialize};

use crate::adapters::app_data::DEFAULT_DATA_FILE;

/// Env var overriding the data directory
pub const DATA_DIR_ENV: &str = "CONTACTKEEPER_DIR";

/// Env var overriding the contact file name
pub const DATA_FILE_ENV: &str = "CONTACTKEEPER_DATA_FILE";

const SETTINGS_FILE: &str = "settings.json";

/// Raw settings.json structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct SettingsFile {
    #[serde(default)]
    app: AppSettings,
    #[serde(flatten)]
    other: HashMap<String, serde_json::Value>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct AppSettings {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    data_file: Option<String>,
    #[serde(flatten)]
    other: HashMap<String, serde_json::Value>,
}

/// ContactKeeper configuration
#[derive(Debug, Clone)]
pub struct Config {
    /// File name of the contact store, relative to the data directory
    pub data_file: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            data_file: DEFAULT_DATA_FILE.to_string(),
        }
    }
}

/// Resolve the data directory
///
/// 1. `CONTACTKEEPER_DIR` env var
/// 2. Platform data directory (e.g. `%APPDATA%\ContactKeeper`)
/// 3. `~/.contactkeeper`
pub fn default_data_dir() -> PathBuf {
    if let Ok(dir) = std::env::var(DATA_DIR_ENV) {
        if !dir.trim().is_empty() {
            return PathBuf::from(dir);
        }
    }

    if let Some(data_dir) = dirs::data_dir() {
        return data_dir.join("ContactKeeper");
    }

    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".contactkeeper")
}

fn read_settings(settings_path: &Path) -> Result<SettingsFile> {
    if !settings_path.exists() {
        return Ok(SettingsFile::default());
    }
    let content = std::fs::read_to_string(settings_path)?;
    Ok(serde_json::from_str(&content).unwrap_or_default())
}

impl Config {
    /// Load config from the data directory
    ///
    /// A malformed settings file falls back to defaults. The data file name
    /// can be overridden with `CONTACTKEEPER_DATA_FILE`.
    pub fn load(data_dir: &Path) -> Result<Self> {
        let raw = read_settings(&data_dir.join(SETTINGS_FILE))?;

        let data_file = std::env::var(DATA_FILE_ENV)
            .ok()
            .filter(|name| !name.trim().is_empty())
            .or(raw.app.data_file)
            .filter(|name| !name.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_DATA_FILE.to_string());

        Ok(Self { data_file })
    }

    /// Save config to the data directory
    /// Preserves other settings this crate doesn't manage
    pub fn save(&self, data_dir: &Path) -> Result<()> {
        let settings_path = data_dir.join(SETTINGS_FILE);
        let mut settings = read_settings(&settings_path)?;

        settings.app.data_file = Some(self.data_file.clone());

        let content = serde_json::to_string_pretty(&settings)?;
        std::fs::write(&settings_path, content)?;
        Ok(())
    }
}
