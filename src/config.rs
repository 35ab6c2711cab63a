//! Application configuration
//!
//! Settings are read from `appue.json` in the working directory, or from the
//! file named by `APPUE_CONFIG`. A missing file yields the defaults.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

const CONFIG_FILE: &str = "appue.json";
const CONFIG_ENV: &str = "APPUE_CONFIG";

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Directory holding `audio/` and `covers/` resources.
    pub assets_dir: PathBuf,
    /// Expanded playlist header height, in terminal rows.
    pub header_height: u16,
    pub tick_ms: u64,
    pub volume: f32,
    pub error_timeout_secs: u64,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            assets_dir: PathBuf::from("assets"),
            header_height: 10,
            tick_ms: 50,
            volume: 1.0,
            error_timeout_secs: 5,
        }
    }
}

impl AppConfig {
    /// Load from `APPUE_CONFIG` if set, otherwise from `appue.json`.
    pub fn load() -> Result<Self, ConfigError> {
        let path = std::env::var_os(CONFIG_ENV)
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(CONFIG_FILE));
        Self::load_from(&path)
    }

    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            tracing::debug!(path = %path.display(), "No config file, using defaults");
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path)?;
        let config: AppConfig = serde_json::from_str(&content)?;
        config.validate()?;

        tracing::info!(path = %path.display(), "Configuration loaded");
        Ok(config)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.header_height == 0 {
            return Err(ConfigError::Invalid {
                reason: "header_height must be greater than zero".to_string(),
            });
        }
        if self.tick_ms == 0 {
            return Err(ConfigError::Invalid {
                reason: "tick_ms must be greater than zero".to_string(),
            });
        }
        if !(0.0..=2.0).contains(&self.volume) {
            return Err(ConfigError::Invalid {
                reason: format!("volume {} is outside 0.0..=2.0", self.volume),
            });
        }
        Ok(())
    }

    pub fn audio_dir(&self) -> PathBuf {
        self.assets_dir.join("audio")
    }

    pub fn covers_dir(&self) -> PathBuf {
        self.assets_dir.join("covers")
    }
}
