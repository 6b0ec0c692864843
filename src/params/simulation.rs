//! Fixed-timestep driver configuration.

use serde::{Deserialize, Serialize};

use crate::error::{ensure_finite, ConfigError};

/// Fixed-timestep physics loop parameters
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimulationParams {
    /// Physics tick length (seconds)
    /// 0.02 = 50 Hz, the usual fixed-update rate for rigid bodies
    pub fixed_dt_s: f32,

    /// Most ticks run for one frame; older backlog is dropped
    pub max_substeps: u32,
}

impl Default for SimulationParams {
    fn default() -> Self {
        Self {
            fixed_dt_s: 0.02,
            max_substeps: 8,
        }
    }
}

impl SimulationParams {
    pub fn validate(&self) -> Result<(), ConfigError> {
        ensure_finite("simulation.fixed_dt_s", self.fixed_dt_s)?;
        if self.fixed_dt_s <= 0.0 {
            return Err(ConfigError::NonPositiveTimestep(self.fixed_dt_s));
        }
        if self.max_substeps == 0 {
            return Err(ConfigError::ZeroSubsteps);
        }
        Ok(())
    }
}
