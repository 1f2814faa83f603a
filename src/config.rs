//! Engine and driver configuration loaded from TOML.

use crate::games::tictactoe::GameMode;
use derive_getters::Getters;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{debug, info, instrument};

/// Top-level configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Getters, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Game settings.
    game: GameConfig,
    /// AI settings.
    ai: AiConfig,
}

/// Game settings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Getters, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Mode to start in; the driver asks when absent.
    mode: Option<GameMode>,
}

/// AI settings.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct AiConfig {
    /// Cosmetic delay before the AI moves, in milliseconds.
    #[serde(default = "default_delay_ms")]
    delay_ms: u64,

    /// Seed for reproducible AI play; OS entropy when absent.
    #[serde(default)]
    seed: Option<u64>,
}

fn default_delay_ms() -> u64 {
    600
}

impl Default for AiConfig {
    fn default() -> Self {
        Self {
            delay_ms: default_delay_ms(),
            seed: None,
        }
    }
}

impl EngineConfig {
    /// Loads configuration from a TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;
        let config = Self::from_toml(&content)?;
        info!(mode = ?config.game.mode, delay_ms = config.ai.delay_ms, "Config loaded");
        Ok(config)
    }

    /// Parses configuration from TOML text.
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        toml::from_str(content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))
    }

    /// Loads `path` if it exists, defaults otherwise.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn load_or_default(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        if path.as_ref().exists() {
            Self::from_file(path)
        } else {
            debug!("Config file not found, using defaults");
            Ok(Self::default())
        }
    }

    /// Applies command-line overrides on top of file values.
    pub fn with_overrides(
        mut self,
        mode: Option<GameMode>,
        seed: Option<u64>,
        delay_ms: Option<u64>,
    ) -> Self {
        if mode.is_some() {
            self.game.mode = mode;
        }
        if seed.is_some() {
            self.ai.seed = seed;
        }
        if let Some(delay_ms) = delay_ms {
            self.ai.delay_ms = delay_ms;
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
