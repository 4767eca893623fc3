//! Simulation configuration.

use serde::{Deserialize, Serialize};

use boxfall_core::constants::{GRAVITY, MIN_FRAME_TIME_MS, TARGET_FPS};

use crate::error::ConfigError;

/// Configuration for starting a new simulation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimConfig {
    /// Fixed steps per simulated second. Step length is `1000 / target_fps` ms.
    pub target_fps: f64,
    /// Gravity constant applied per unit of mass.
    pub gravity: f32,
    /// Upper bound on catch-up steps in a single host frame.
    /// `None` never drops time.
    pub max_steps_per_frame: Option<u32>,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            target_fps: TARGET_FPS,
            gravity: GRAVITY,
            max_steps_per_frame: None,
        }
    }
}

impl SimConfig {
    /// Parse and validate a JSON config. Missing fields take defaults.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: SimConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let positive = self.target_fps.is_finite() && self.target_fps > 0.0;
        if !positive || self.frame_time_ms() < MIN_FRAME_TIME_MS {
            return Err(ConfigError::InvalidFps(self.target_fps));
        }
        if !self.gravity.is_finite() {
            return Err(ConfigError::InvalidGravity(self.gravity));
        }
        if self.max_steps_per_frame == Some(0) {
            return Err(ConfigError::ZeroStepCap);
        }
        Ok(())
    }

    /// Length of one fixed step in milliseconds.
    pub fn frame_time_ms(&self) -> f64 {
        1000.0 / self.target_fps
    }
}
