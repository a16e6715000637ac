//! Chart Configuration Module
//! Display-surface settings, optionally overridden by a JSON file.
//!
//! The chart contract itself (title, figure size, start angle, label
//! precision) is fixed; only where the chart goes can be configured.

use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Environment variable naming an optional JSON config file
pub const CONFIG_ENV: &str = "PORTFOLIO_CHART_CONFIG";

pub const TITLE: &str = "Portfolio Allocation by Value";
/// Figure size in inches (width, height)
pub const FIGURE_SIZE: [f32; 2] = [8.0, 8.0];
/// Degrees counter-clockwise from +x where the first slice starts
pub const START_ANGLE: f64 = 140.0;
/// Decimal places in percentage labels
pub const PERCENT_PRECISION: usize = 1;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("Invalid config {path}: {source}")]
    Json {
        path: PathBuf,
        source: serde_json::Error,
    },
    #[error("No display surface selected: set show_window or output")]
    NoSurface,
    #[error("dpi must be positive, got {0}")]
    InvalidDpi(f32),
}

/// Where the chart is displayed.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ChartConfig {
    pub dpi: f32,
    /// Write a PNG here in addition to (or instead of) the window
    pub output: Option<PathBuf>,
    pub show_window: bool,
}

impl Default for ChartConfig {
    fn default() -> Self {
        Self {
            dpi: 100.0,
            output: None,
            show_window: true,
        }
    }
}

impl ChartConfig {
    /// Load from the file named by [`CONFIG_ENV`], or fall back to defaults.
    pub fn load() -> Result<Self, ConfigError> {
        match std::env::var_os(CONFIG_ENV) {
            Some(path) => {
                let path = PathBuf::from(path);
                let config = Self::from_file(&path)?;
                tracing::info!("Loaded chart config from {}", path.display());
                Ok(config)
            }
            None => {
                tracing::debug!("{} not set, using default chart config", CONFIG_ENV);
                Ok(Self::default())
            }
        }
    }

    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let text = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_json(&text).map_err(|source| ConfigError::Json {
            path: path.to_path_buf(),
            source,
        })?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_json(text: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(text)
    }

    /// At least one surface must be selected and the figure must have a size.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(self.dpi > 0.0) {
            return Err(ConfigError::InvalidDpi(self.dpi));
        }
        if !self.show_window && self.output.is_none() {
            return Err(ConfigError::NoSurface);
        }
        Ok(())
    }

    /// Figure size in pixels.
    pub fn pixel_size(&self) -> (u32, u32) {
        (
            (FIGURE_SIZE[0] * self.dpi).round() as u32,
            (FIGURE_SIZE[1] * self.dpi).round() as u32,
        )
    }
}
