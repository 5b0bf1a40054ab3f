//! Display configuration for the terminal front end.

use derive_getters::Getters;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{debug, info, instrument};

/// How the board is drawn and how chatty the front end is.
#[derive(Debug, Clone, Getters, Serialize, Deserialize)]
pub struct CliConfig {
    /// Mark drawn for X.
    #[serde(default = "default_x_mark")]
    x_mark: char,

    /// Mark drawn for O.
    #[serde(default = "default_o_mark")]
    o_mark: char,

    /// Mark drawn for an empty cell.
    #[serde(default = "default_empty_mark")]
    empty_mark: char,

    /// List the legal moves under the board each turn.
    #[serde(default)]
    show_legal_moves: bool,

    /// Log filter used when `RUST_LOG` is not set (e.g. "warn", "ultimate_tictactoe=debug").
    #[serde(default = "default_log_level")]
    log_level: String,
}

#[instrument]
fn default_x_mark() -> char {
    'X'
}

#[instrument]
fn default_o_mark() -> char {
    'O'
}

#[instrument]
fn default_empty_mark() -> char {
    '.'
}

#[instrument]
fn default_log_level() -> String {
    "warn".to_string()
}

impl Default for CliConfig {
    fn default() -> Self {
        Self {
            x_mark: default_x_mark(),
            o_mark: default_o_mark(),
            empty_mark: default_empty_mark(),
            show_legal_moves: false,
            log_level: default_log_level(),
        }
    }
}

impl CliConfig {
    /// Loads configuration from a TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        let config = Self::from_toml(&content)?;
        info!(x = %config.x_mark, o = %config.o_mark, "Config loaded successfully");
        Ok(config)
    }

    /// Parses and validates configuration from TOML text.
    #[instrument(skip(content))]
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;
        config.validate()?;
        Ok(config)
    }

    /// Loads `path` if given, otherwise the built-in defaults.
    #[instrument]
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        match path {
            Some(path) => Self::from_file(path),
            None => Ok(Self::default()),
        }
    }

    /// Rejects marks that would make the board ambiguous.
    #[instrument(skip(self))]
    fn validate(&self) -> Result<(), ConfigError> {
        let marks = [self.x_mark, self.o_mark, self.empty_mark];
        if marks[0] == marks[1] || marks[0] == marks[2] || marks[1] == marks[2] {
            return Err(ConfigError::new(format!(
                "Marks must differ: x_mark={:?}, o_mark={:?}, empty_mark={:?}",
                self.x_mark, self.o_mark, self.empty_mark
            )));
        }
        if marks.iter().any(|c| c.is_whitespace()) {
            return Err(ConfigError::new("Marks must be visible characters".to_string()));
        }
        Ok(())
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
