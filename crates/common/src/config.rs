//! Application configuration.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Global application configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    /// Directory where generated trajectories and extraction results are stored.
    pub trajectories_dir: PathBuf,

    /// Default stimulus generation parameters.
    pub stimulus: StimulusDefaults,

    /// Logging configuration.
    pub logging: LoggingConfig,
}

/// Default stimulus generation parameters.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StimulusDefaults {
    /// Number of samples per generated trajectory.
    pub steps: usize,

    /// Harmonic count for the Fourier generator.
    pub harmonics_count: usize,

    /// Control-point count for the random-spline generator.
    pub control_points: usize,

    /// Nominal video frame rate used to align stimulus samples with frames.
    pub fps: u32,
}

/// Logging configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level filter (e.g., "info", "debug", "gazecal=debug,warn").
    pub level: String,

    /// Whether to output structured JSON logs.
    pub json: bool,

    /// Optional log file path.
    pub file: Option<PathBuf>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            trajectories_dir: dirs_default_trajectories(),
            stimulus: StimulusDefaults::default(),
            logging: LoggingConfig::default(),
        }
    }
}

impl Default for StimulusDefaults {
    fn default() -> Self {
        Self {
            steps: 600,
            harmonics_count: 4,
            control_points: 8,
            fps: 30,
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            json: false,
            file: None,
        }
    }
}

impl AppConfig {
    /// Load config from the standard location, falling back to defaults.
    pub fn load() -> Self {
        let config_path = config_file_path();
        if config_path.exists() {
            match std::fs::read_to_string(&config_path) {
                Ok(content) => match serde_json::from_str(&content) {
                    Ok(config) => return config,
                    Err(e) => {
                        tracing::warn!("Failed to parse config at {:?}: {}", config_path, e);
                    }
                },
                Err(e) => {
                    tracing::warn!("Failed to read config at {:?}: {}", config_path, e);
                }
            }
        }
        Self::default()
    }

    /// Save config to the standard location.
    pub fn save(&self) -> Result<(), std::io::Error> {
        let config_path = config_file_path();
        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let json = serde_json::to_string_pretty(self).map_err(std::io::Error::other)?;
        std::fs::write(config_path, json)
    }
}

/// Standard config file location.
fn config_file_path() -> PathBuf {
    let base = std::env::var("XDG_CONFIG_HOME")
        .map(PathBuf::from)
        .unwrap_or_else(|_| {
            let home = std::env::var("HOME").unwrap_or_else(|_| "/tmp".to_string());
            PathBuf::from(home).join(".config")
        });
    base.join("gazecal").join("config.json")
}

/// Default trajectories directory.
fn dirs_default_trajectories() -> PathBuf {
    let base = std::env::var("XDG_DATA_HOME")
        .map(PathBuf::from)
        .unwrap_or_else(|_| {
            let home = std::env::var("HOME").unwrap_or_else(|_| "/tmp".to_string());
            PathBuf::from(home).join(".local").join("share")
        });
    base.join("gazecal").join("trajectories")
}
