//! Presentation settings loaded from TOML.

use derive_getters::Getters;
use derive_more::{Display, Error};
use derive_setters::Setters;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;
use tictactoe_core::Mark;
use tracing::{debug, info, instrument};

/// Terminal UI configuration.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Setters, Serialize, Deserialize)]
#[setters(prefix = "with_")]
pub struct TuiConfig {
    /// How long the victory popup and confetti stay up, in milliseconds.
    #[serde(default = "default_announcement_ms")]
    announcement_ms: u64,

    /// Ring the terminal bell on moves and wins.
    #[serde(default = "default_sound")]
    sound: bool,

    /// Shown in place of an empty name for X.
    #[serde(default = "default_x_label")]
    x_label: String,

    /// Shown in place of an empty name for O.
    #[serde(default = "default_o_label")]
    o_label: String,
}

#[instrument]
fn default_announcement_ms() -> u64 {
    3000
}

#[instrument]
fn default_sound() -> bool {
    true
}

#[instrument]
fn default_x_label() -> String {
    "Player X".to_string()
}

#[instrument]
fn default_o_label() -> String {
    "Player O".to_string()
}

impl Default for TuiConfig {
    fn default() -> Self {
        Self {
            announcement_ms: default_announcement_ms(),
            sound: default_sound(),
            x_label: default_x_label(),
            o_label: default_o_label(),
        }
    }
}

impl TuiConfig {
    /// Loads configuration from TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        let config: Self = toml::from_str(&content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;

        info!(?config, "Config loaded successfully");
        Ok(config)
    }

    /// Loads `path` if it exists, otherwise returns defaults.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn load_or_default(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        if path.as_ref().exists() {
            Self::from_file(path)
        } else {
            info!("Config file not found, using defaults");
            Ok(Self::default())
        }
    }

    /// Popup lifetime as a duration.
    pub fn announcement_delay(&self) -> Duration {
        Duration::from_millis(self.announcement_ms)
    }

    /// Fallback label for `mark`.
    pub fn label(&self, mark: Mark) -> &str {
        match mark {
            Mark::X => &self.x_label,
            Mark::O => &self.o_label,
        }
    }
}

/// Configuration error.
#[derive(Debug, Clone, Display, Error)]
#[display("Config error: {} at {}:{}", message, file, line)]
pub struct ConfigError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl ConfigError {
    /// Creates a new configuration error.
    #[track_caller]
    #[instrument(skip(message))]
    pub fn new(message: String) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message,
            line: loc.line(),
            file: loc.file(),
        }
    }
}
