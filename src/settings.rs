//! Game settings
//!
//! Physics tuning plus the pacing of the headless runner, read from an
//! optional JSON file. Missing fields fall back to defaults.

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::error::{LanderError, Result};

/// Physics tuning, copied into the world at construction
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Physics {
    /// Fixed sub-step length in seconds
    pub fixed_step: f32,
    /// Vertical acceleration (negative = down)
    pub gravity: f32,
    /// Lateral acceleration at full thrust
    pub lateral_thrust: f32,
    /// Lander velocity multiplier
    pub player_speed: f32,
    /// Lander width and height
    pub player_size: f32,
}

impl Default for Physics {
    fn default() -> Self {
        Self {
            fixed_step: FIXED_STEP,
            gravity: GRAVITY,
            lateral_thrust: LATERAL_THRUST,
            player_speed: PLAYER_SPEED,
            player_size: PLAYER_SIZE,
        }
    }
}

/// Headless runner pacing
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RunnerSettings {
    /// Nominal virtual frame length in seconds
    pub frame_interval: f32,
    /// Maximum random deviation added to each frame
    pub frame_jitter: f32,
    /// Give up after this much virtual time
    pub time_limit: f32,
    /// Seed for the autopilot and frame jitter
    pub seed: u64,
    /// Level file (built-in layout if unset)
    pub level: Option<PathBuf>,
}

impl Default for RunnerSettings {
    fn default() -> Self {
        Self {
            frame_interval: 1.0 / 60.0,
            frame_jitter: 0.008,
            time_limit: 60.0,
            seed: 0x5EED,
            level: None,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub physics: Physics,
    pub runner: RunnerSettings,
}

impl Settings {
    pub fn from_json(json: &str) -> Result<Self> {
        let settings: Settings = serde_json::from_str(json)?;
        settings.validate()?;
        Ok(settings)
    }

    /// Load settings from `path`, using defaults if the file does not exist
    pub fn load(path: &Path) -> Result<Self> {
        match fs::read_to_string(path) {
            Ok(json) => {
                let settings = Self::from_json(&json)?;
                log::info!("Loaded settings from {}", path.display());
                Ok(settings)
            }
            Err(err) if err.kind() == ErrorKind::NotFound => {
                log::warn!("{} not found, using default settings", path.display());
                Ok(Self::default())
            }
            Err(source) => Err(LanderError::Io {
                path: path.to_path_buf(),
                source,
            }),
        }
    }

    pub fn validate(&self) -> Result<()> {
        let p = &self.physics;
        if !(p.fixed_step > 0.0) {
            return Err(LanderError::InvalidSettings(format!(
                "fixed_step must be positive, got {}",
                p.fixed_step
            )));
        }
        if !(p.player_size > 0.0) {
            return Err(LanderError::InvalidSettings(format!(
                "player_size must be positive, got {}",
                p.player_size
            )));
        }
        let r = &self.runner;
        if !(r.frame_interval > 0.0) {
            return Err(LanderError::InvalidSettings(format!(
                "frame_interval must be positive, got {}",
                r.frame_interval
            )));
        }
        if !(r.frame_jitter >= 0.0 && r.frame_jitter < r.frame_interval) {
            return Err(LanderError::InvalidSettings(format!(
                "frame_jitter must be in [0, frame_interval), got {}",
                r.frame_jitter
            )));
        }
        Ok(())
    }
}
