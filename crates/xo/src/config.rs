//! Player-facing configuration loaded from TOML.

use derive_getters::Getters;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{debug, info, instrument};
use xo_game::Mode;

/// Settings for a terminal game.
///
/// ```toml
/// mode = "multi"
/// seed = 42
/// show_board = false
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct XoConfig {
    /// Single-player against the random opponent, or two players at one keyboard.
    #[serde(default)]
    mode: Mode,

    /// Seed for the opponent's moves. Absent means a fresh seed per run.
    #[serde(default)]
    seed: Option<u64>,

    /// Print the board after every accepted move.
    #[serde(default = "default_show_board")]
    show_board: bool,
}

fn default_show_board() -> bool {
    true
}

impl Default for XoConfig {
    fn default() -> Self {
        Self::new(Mode::default(), None, default_show_board())
    }
}

impl XoConfig {
    /// Creates a configuration from explicit values.
    pub fn new(mode: Mode, seed: Option<u64>, show_board: bool) -> Self {
        Self {
            mode,
            seed,
            show_board,
        }
    }

    /// Loads configuration from TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        let config: Self = toml::from_str(&content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;

        info!(mode = %config.mode, seed = ?config.seed, "Config loaded successfully");
        Ok(config)
    }

    /// Loads `path` if it exists, otherwise falls back to defaults.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        if path.as_ref().exists() {
            Self::from_file(path)
        } else {
            debug!("Config file not found, using defaults");
            Ok(Self::default())
        }
    }

    /// Applies command-line overrides on top of file values.
    pub fn with_overrides(mut self, mode: Option<Mode>, seed: Option<u64>, hide_board: bool) -> Self {
        if let Some(mode) = mode {
            self.mode = mode;
        }
        if seed.is_some() {
            self.seed = seed;
        }
        if hide_board {
            self.show_board = false;
        }
        self
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
    pub fn new(message: String) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message,
            line: loc.line(),
            file: loc.file(),
        }
    }
}
