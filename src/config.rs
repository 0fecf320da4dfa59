//! Host configuration: command-line flags with environment fallbacks.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use std::path::PathBuf;
use std::time::Duration;

use clap::Args;
use whiteboard::consts::MIN_CANVAS_WIDTH;

pub const DEFAULT_CANVAS_WIDTH: f64 = 1920.0;
pub const DEFAULT_CANVAS_HEIGHT: f64 = 1080.0;
pub const DEFAULT_GROUPING_DELAY_MS: u64 = 1500;

#[derive(Debug, thiserror::Error, PartialEq)]
pub enum ConfigError {
    #[error("canvas must have positive, finite dimensions (got {width} x {height})")]
    InvalidCanvas { width: f64, height: f64 },
    #[error("canvas width {width} is below the minimum of {min} needed to fit one note per section")]
    CanvasTooNarrow { width: f64, min: f64 },
    #[error("output path must not be empty")]
    EmptyOutputPath,
}

/// Flags shared by every subcommand.
#[derive(Args, Debug, Clone)]
pub struct HostArgs {
    #[arg(long, env = "RETRO_CANVAS_WIDTH", default_value_t = DEFAULT_CANVAS_WIDTH)]
    pub canvas_width: f64,

    #[arg(long, env = "RETRO_CANVAS_HEIGHT", default_value_t = DEFAULT_CANVAS_HEIGHT)]
    pub canvas_height: f64,

    /// Pause before grouping runs, in milliseconds.
    #[arg(long, env = "RETRO_GROUPING_DELAY_MS", default_value_t = DEFAULT_GROUPING_DELAY_MS)]
    pub grouping_delay_ms: u64,

    /// Fixed seed for layout jitter. OS entropy when absent.
    #[arg(long, env = "RETRO_SEED")]
    pub seed: Option<u64>,

    /// Write saved boards here as JSON. Saves are only logged when absent.
    #[arg(long, env = "RETRO_SAVE_PATH")]
    pub output: Option<PathBuf>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct HostConfig {
    pub canvas_width: f64,
    pub canvas_height: f64,
    pub grouping_delay: Duration,
    pub seed: Option<u64>,
    pub output: Option<PathBuf>,
}

impl Default for HostConfig {
    fn default() -> Self {
        Self {
            canvas_width: DEFAULT_CANVAS_WIDTH,
            canvas_height: DEFAULT_CANVAS_HEIGHT,
            grouping_delay: Duration::from_millis(DEFAULT_GROUPING_DELAY_MS),
            seed: None,
            output: None,
        }
    }
}

impl HostConfig {
    /// Build a validated config from parsed flags.
    pub fn from_args(args: HostArgs) -> Result<Self, ConfigError> {
        let config = Self {
            canvas_width: args.canvas_width,
            canvas_height: args.canvas_height,
            grouping_delay: Duration::from_millis(args.grouping_delay_ms),
            seed: args.seed,
            output: args.output,
        };
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let valid = |v: f64| v.is_finite() && v > 0.0;
        if !valid(self.canvas_width) || !valid(self.canvas_height) {
            return Err(ConfigError::InvalidCanvas { width: self.canvas_width, height: self.canvas_height });
        }
        if self.canvas_width < MIN_CANVAS_WIDTH {
            return Err(ConfigError::CanvasTooNarrow { width: self.canvas_width, min: MIN_CANVAS_WIDTH });
        }
        if self.output.as_ref().is_some_and(|p| p.as_os_str().is_empty()) {
            return Err(ConfigError::EmptyOutputPath);
        }
        Ok(())
    }
}
