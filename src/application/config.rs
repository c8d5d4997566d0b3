use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;
use thiserror::Error;

/// Errors raised while loading or validating [`LifeConfig`].
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid configuration: {0}")]
    Invalid(&'static str),
    #[error("failed to read config {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse config {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

/// Session settings for the simulation and its window.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LifeConfig {
    /// Side length of the square grid.
    pub grid_size: usize,
    /// On-screen size of one cell in pixels.
    pub cell_size: f32,
    /// Time between generations while running.
    pub interval_ms: u64,
    /// Chance that a cell starts alive.
    pub alive_probability: f64,
    /// Maximum number of undoable steps; `None` keeps every step.
    pub history_limit: Option<usize>,
    /// Optional RNG seed for reproducible boards.
    pub seed: Option<u64>,
    /// Sound played when the game starts.
    pub start_sound: Option<PathBuf>,
}

impl Default for LifeConfig {
    fn default() -> Self {
        Self {
            grid_size: 20,
            cell_size: 20.0,
            interval_ms: 1000,
            alive_probability: 0.3,
            history_limit: None,
            seed: None,
            start_sound: Some(PathBuf::from("game-start.wav")),
        }
    }
}

impl LifeConfig {
    /// Load from a TOML file. A missing file yields the defaults.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let config: Self = toml::from_str(&content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.grid_size == 0 {
            return Err(ConfigError::Invalid("grid_size must be positive"));
        }
        if self.cell_size.is_nan() || self.cell_size <= 0.0 {
            return Err(ConfigError::Invalid("cell_size must be positive"));
        }
        if self.interval_ms == 0 {
            return Err(ConfigError::Invalid("interval_ms must be positive"));
        }
        if !(0.0..=1.0).contains(&self.alive_probability) {
            return Err(ConfigError::Invalid(
                "alive_probability must be between 0.0 and 1.0",
            ));
        }
        if self.history_limit == Some(0) {
            return Err(ConfigError::Invalid("history_limit must be positive when set"));
        }
        Ok(())
    }

    pub fn interval(&self) -> Duration {
        Duration::from_millis(self.interval_ms)
    }
}
