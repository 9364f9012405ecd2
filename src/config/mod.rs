use serde::Deserialize;
use std::path::{Path, PathBuf};

use crate::error::{Result, TrackboxError};
use crate::export::OutputFormat;

/// Reference constants for corridor construction.
///
/// The simplify tolerance is applied directly to raw lat/lon degrees, it is
/// not a distance in meters.
pub mod defaults {
    pub const SIMPLIFY_TOLERANCE: f64 = 0.0001;
    pub const LOOP_WINDOW: usize = 15;
    pub const SPIKE_WINDOW: usize = 4;
    pub const REACH_FACTOR: f64 = 4.0;
    pub const FOLD_BACK_ANGLE: f64 = crate::geometry::geodesy::FOLD_BACK_ANGLE_DEG;
    pub const DISTANCE_KM: f64 = 1.0;
}

fn default_simplify_tolerance() -> f64 {
    defaults::SIMPLIFY_TOLERANCE
}
fn default_loop_window() -> usize {
    defaults::LOOP_WINDOW
}
fn default_spike_window() -> usize {
    defaults::SPIKE_WINDOW
}
fn default_reach_factor() -> f64 {
    defaults::REACH_FACTOR
}
fn default_fold_back_angle() -> f64 {
    defaults::FOLD_BACK_ANGLE
}

/// Tunables of the corridor pipeline
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct CorridorConfig {
    /// Planar tolerance for pre-simplifying the track, in degrees
    #[serde(default = "default_simplify_tolerance")]
    pub simplify_tolerance: f64,
    /// Points examined per position before loop scanning gives up
    #[serde(default = "default_loop_window")]
    pub loop_window: usize,
    /// Points examined per position before spike scanning gives up
    #[serde(default = "default_spike_window")]
    pub spike_window: usize,
    /// Scans also stop past `reach_factor * distance_km`
    #[serde(default = "default_reach_factor")]
    pub reach_factor: f64,
    /// Maximum deviation from the route bearing before an offset point is dropped
    #[serde(default = "default_fold_back_angle")]
    pub fold_back_angle: f64,
}

impl Default for CorridorConfig {
    fn default() -> Self {
        Self {
            simplify_tolerance: default_simplify_tolerance(),
            loop_window: default_loop_window(),
            spike_window: default_spike_window(),
            reach_factor: default_reach_factor(),
            fold_back_angle: default_fold_back_angle(),
        }
    }
}

impl CorridorConfig {
    pub fn validate(&self) -> Result<()> {
        if !(self.simplify_tolerance >= 0.0 && self.simplify_tolerance.is_finite()) {
            return Err(TrackboxError::InvalidConfig(format!(
                "simplify_tolerance must be >= 0, got {}",
                self.simplify_tolerance
            )));
        }
        if self.loop_window == 0 || self.spike_window == 0 {
            return Err(TrackboxError::InvalidConfig(
                "loop_window and spike_window must be at least 1".to_string(),
            ));
        }
        if !(self.reach_factor > 0.0 && self.reach_factor.is_finite()) {
            return Err(TrackboxError::InvalidConfig(format!(
                "reach_factor must be > 0, got {}",
                self.reach_factor
            )));
        }
        if !(self.fold_back_angle > 0.0 && self.fold_back_angle <= 180.0) {
            return Err(TrackboxError::InvalidConfig(format!(
                "fold_back_angle must be in (0, 180], got {}",
                self.fold_back_angle
            )));
        }
        Ok(())
    }
}

/// Settings read from a `trackbox.toml` file
#[derive(Debug, Deserialize, Default)]
pub struct FileConfig {
    #[serde(default)]
    pub distances: Option<Vec<f64>>,
    #[serde(default)]
    pub format: Option<OutputFormat>,
    #[serde(default)]
    pub output: Option<PathBuf>,
    #[serde(default)]
    pub verbose: bool,
    #[serde(default)]
    pub corridor: Option<CorridorConfig>,
}

impl FileConfig {
    /// Read and parse a config file.
    pub fn from_path(path: &Path) -> anyhow::Result<Self> {
        use anyhow::Context;

        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {:?}", path))?;
        toml::from_str(&contents).context("Failed to parse config file")
    }

    /// Load the first parseable config file from the default search paths.
    pub fn load() -> Option<Self> {
        for path in get_config_paths() {
            if path.exists()
                && let Ok(contents) = std::fs::read_to_string(&path)
            {
                match toml::from_str(&contents) {
                    Ok(config) => return Some(config),
                    Err(e) => {
                        log::warn!("Failed to parse config file {:?}: {}", path, e);
                    }
                }
            }
        }
        None
    }
}

fn get_config_paths() -> Vec<PathBuf> {
    let mut paths = vec![PathBuf::from("trackbox.toml"), PathBuf::from(".trackbox.toml")];

    if let Some(config_dir) = dirs::config_dir() {
        paths.push(config_dir.join("trackbox").join("config.toml"));
        paths.push(config_dir.join("trackbox.toml"));
    }

    if let Some(home) = dirs::home_dir() {
        paths.push(home.join(".trackbox.toml"));
        paths.push(home.join(".config").join("trackbox").join("config.toml"));
    }

    paths
}
