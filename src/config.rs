//! Display settings loaded from TOML.

use derive_getters::Getters;
use derive_more::{Display, Error};
use serde::Deserialize;
use std::path::{Path, PathBuf};
use tracing::{debug, info, instrument};

/// Settings for the displays.
///
/// Every key is optional in the file; missing keys take their defaults.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Settings {
    /// Title shown above the board.
    title: String,

    /// Blank rows between board rows.
    pad_x: u16,

    /// Blank columns between board columns.
    pad_y: u16,

    /// Cell width in terminal columns, borders included.
    cell_width: u16,

    /// Cell height in terminal rows, borders included.
    cell_height: u16,

    /// Capture mouse clicks in the terminal UI.
    mouse: bool,

    /// Log destination.
    log_file: PathBuf,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            title: "Tic Tac Toe".to_string(),
            pad_x: 1,
            pad_y: 2,
            cell_width: 7,
            cell_height: 3,
            mouse: true,
            log_file: PathBuf::from("tictactoe.log"),
        }
    }
}

impl Settings {
    /// Loads settings from a TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading settings from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;
        Self::from_toml(&content)
    }

    /// Parses and validates settings from TOML text.
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        let settings: Self = toml::from_str(content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;
        settings.validate()?;
        Ok(settings)
    }

    /// Loads settings from `path`, falling back to defaults if it does not exist.
    #[instrument(skip(path), fields(path = %path.display()))]
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        if path.exists() {
            let settings = Self::from_file(path)?;
            info!(title = %settings.title, "Settings loaded");
            Ok(settings)
        } else {
            info!("Config file not found, using defaults");
            Ok(Self::default())
        }
    }

    /// Overrides the log destination.
    pub fn with_log_file(mut self, log_file: PathBuf) -> Self {
        self.log_file = log_file;
        self
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if !(3..=40).contains(&self.cell_width) {
            return Err(ConfigError::new(format!(
                "cell_width must be between 3 and 40, got {}",
                self.cell_width
            )));
        }
        if !(1..=20).contains(&self.cell_height) {
            return Err(ConfigError::new(format!(
                "cell_height must be between 1 and 20, got {}",
                self.cell_height
            )));
        }
        if self.pad_x > 10 || self.pad_y > 10 {
            return Err(ConfigError::new(format!(
                "pad_x and pad_y must be at most 10, got {} and {}",
                self.pad_x, self.pad_y
            )));
        }
        Ok(())
    }
}

/// Settings could not be read or were invalid.
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
    /// Creates a new config error with caller location tracking.
    #[track_caller]
    pub fn new(message: impl Into<String>) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message: message.into(),
            line: loc.line(),
            file: loc.file(),
        }
    }
}
