//! Settings management

use cobot_core::{ConfigError, SimConfig};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Stats cadence used when none is configured
pub const DEFAULT_REPORT_INTERVAL: Duration = Duration::from_secs(2);
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("failed to read settings from {path}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse settings from {path}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("invalid simulation settings")]
    Invalid(#[from] ConfigError),

    #[error("window size {width}x{height} must be non-zero")]
    EmptyWindow { width: u32, height: u32 },

    #[error("metrics report interval {value}s must be a positive, representable duration")]
    InvalidReportInterval { value: f64 },
}

/// Application settings
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub window: WindowSettings,
    pub simulation: SimConfig,
    pub metrics: MetricsSettings,
    /// Fixed RNG seed for reproducible idle behaviour; entropy when absent
    pub seed: Option<u64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WindowSettings {
    pub title: String,
    pub width: u32,
    pub height: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MetricsSettings {
    pub report_interval_secs: f64,
}

impl Default for WindowSettings {
    fn default() -> Self {
        Self {
            title: "Cobot".to_string(),
            width: 1280,
            height: 720,
        }
    }
}

impl Default for MetricsSettings {
    fn default() -> Self {
        Self {
            report_interval_secs: DEFAULT_REPORT_INTERVAL.as_secs_f64(),
        }
    }
}

impl MetricsSettings {
    /// Configured interval, or `None` when it is not a positive finite duration.
    fn checked_interval(&self) -> Option<Duration> {
        let secs = self.report_interval_secs;
        if !(secs.is_finite() && secs > 0.0) {
            return None;
        }
        Duration::try_from_secs_f64(secs).ok()
    }

    /// Interval between stats reports. Unvalidated values fall back to the default.
    pub fn report_interval(&self) -> Duration {
        self.checked_interval().unwrap_or(DEFAULT_REPORT_INTERVAL)
    }
}

impl Settings {
    /// Load settings from a JSON file, or defaults when no path is given.
    pub fn load(path: Option<&Path>) -> Result<Self, SettingsError> {
        let Some(path) = path else {
            tracing::info!("no settings file given, using defaults");
            return Ok(Self::default());
        };

        let text = std::fs::read_to_string(path).map_err(|source| SettingsError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let settings: Self = serde_json::from_str(&text).map_err(|source| SettingsError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        settings.validate()?;

        tracing::info!(path = %path.display(), "settings loaded");
        Ok(settings)
    }

    pub fn validate(&self) -> Result<(), SettingsError> {
        if self.window.width == 0 || self.window.height == 0 {
            return Err(SettingsError::EmptyWindow {
                width: self.window.width,
                height: self.window.height,
            });
        }
        if self.metrics.checked_interval().is_none() {
            return Err(SettingsError::InvalidReportInterval {
                value: self.metrics.report_interval_secs,
            });
        }
        self.simulation.validate()?;
        Ok(())
    }
}
