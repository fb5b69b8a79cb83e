//! CLI configuration.
//!
//! All settings live in a single `config.toml` file at
//! `~/.config/nextgroup/config.toml` by default:
//!
//! ```toml
//! [meeting]
//! weekday = "thursday"
//! cutoff_hour = 21
//! cancellations = ["2025-01-23"]
//!
//! [display]
//! headline = "Next group meeting is:"
//! ```

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::debug;

use nextgroup_core::{DisplaySettings, MeetingConfig, MeetingSchedule};

use crate::error::{CliError, CliResult};

/// Configuration for the nextgroup CLI.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CliConfig {
    /// Debug mode.
    pub debug: bool,

    /// Meeting settings.
    pub meeting: MeetingConfig,

    /// Display settings.
    pub display: DisplaySettings,
}

impl CliConfig {
    /// Loads configuration from the default path.
    ///
    /// A missing file yields the defaults.
    pub fn load() -> CliResult<Self> {
        let path = Self::default_path();
        if path.exists() {
            Self::load_from(&path)
        } else {
            debug!(path = %path.display(), "no config file, using defaults");
            Ok(Self::default())
        }
    }

    /// Loads configuration from a specific path.
    pub fn load_from(path: &Path) -> CliResult<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            CliError::config(format!("failed to read {}: {}", path.display(), e))
        })?;
        let config = toml::from_str(&content)?;
        debug!(path = %path.display(), "loaded config");
        Ok(config)
    }

    /// Builds the meeting schedule described by this configuration.
    pub fn schedule(&self) -> MeetingSchedule {
        MeetingSchedule::from_config(&self.meeting, &self.display)
    }

    /// Returns the default configuration file path.
    pub fn default_path() -> PathBuf {
        Self::default_config_dir().join("config.toml")
    }

    /// Returns the default configuration directory.
    pub fn default_config_dir() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("nextgroup")
    }
}
