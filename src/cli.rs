//! Command-line flags shared by the window and headless binaries.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;

use crate::application::LifeConfig;

/// Settings flags. Anything passed here overrides the config file.
#[derive(Args, Debug, Clone, Default)]
pub struct ConfigArgs {
    /// TOML settings file; defaults are used when it does not exist.
    #[arg(long, env = "LIFE_UNDO_CONFIG", default_value = "life.toml")]
    pub config: PathBuf,

    /// Side length of the square grid.
    #[arg(long)]
    pub size: Option<usize>,

    /// Cell size in pixels.
    #[arg(long)]
    pub cell_size: Option<f32>,

    /// Milliseconds between generations while running.
    #[arg(long)]
    pub interval_ms: Option<u64>,

    /// Seed for reproducible boards.
    #[arg(long)]
    pub seed: Option<u64>,

    /// Maximum number of undoable steps.
    #[arg(long)]
    pub history_limit: Option<usize>,

    /// Sound played when the simulation starts.
    #[arg(long)]
    pub start_sound: Option<PathBuf>,
}

impl ConfigArgs {
    /// Load the config file, apply flag overrides, then validate.
    pub fn resolve(&self) -> Result<LifeConfig> {
        let mut config = LifeConfig::load(&self.config)
            .with_context(|| format!("loading {}", self.config.display()))?;
        self.apply(&mut config);
        config.validate().context("validating settings")?;
        Ok(config)
    }

    fn apply(&self, config: &mut LifeConfig) {
        if let Some(size) = self.size {
            config.grid_size = size;
        }
        if let Some(cell_size) = self.cell_size {
            config.cell_size = cell_size;
        }
        if let Some(interval_ms) = self.interval_ms {
            config.interval_ms = interval_ms;
        }
        if let Some(seed) = self.seed {
            config.seed = Some(seed);
        }
        if let Some(limit) = self.history_limit {
            config.history_limit = Some(limit);
        }
        if let Some(path) = &self.start_sound {
            config.start_sound = Some(path.clone());
        }
    }
}

/// Install the fmt subscriber, filtered by `RUST_LOG`.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .try_init();
}
