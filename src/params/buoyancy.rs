//! Buoyancy tuning and reference rigid-body parameters.

use serde::{Deserialize, Serialize};

use crate::error::{ensure_finite, ConfigError};

/// Per-body buoyancy tuning
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BuoyancySettings {
    /// Shift of the rest height relative to the surface (meters, + = higher)
    pub height_offset_m: f32,

    /// Restoring acceleration per meter of depth difference (1/s²)
    /// Formula: accel_y = ((water_height + offset) - y) * this_strength
    pub buoyancy_strength: f32,

    /// Horizontal drift acceleration along the local flow (m/s²)
    pub horizontal_flow_strength: f32,
}

impl Default for BuoyancySettings {
    fn default() -> Self {
        Self {
            height_offset_m: 0.0,
            buoyancy_strength: 5.0,
            horizontal_flow_strength: 1.0,
        }
    }
}

impl BuoyancySettings {
    pub fn validate(&self) -> Result<(), ConfigError> {
        ensure_finite("buoyancy.height_offset_m", self.height_offset_m)?;
        ensure_finite("buoyancy.buoyancy_strength", self.buoyancy_strength)?;
        ensure_finite(
            "buoyancy.horizontal_flow_strength",
            self.horizontal_flow_strength,
        )
    }
}

/// Rigid-body parameters for the built-in reference body
///
/// The buoyancy force is an undamped spring; drag here is what settles it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BodyParams {
    /// Linear velocity damping (1/s)
    pub linear_drag: f32,

    /// Angular velocity damping (1/s)
    pub angular_drag: f32,

    /// Downward gravitational acceleration (m/s², 0 = off)
    /// With gravity on, the body rests `gravity / buoyancy_strength` below
    /// the surface; raise `height_offset_m` to compensate.
    pub gravity_m_per_s2: f32,
}

impl Default for BodyParams {
    fn default() -> Self {
        Self {
            linear_drag: 1.0,
            angular_drag: 0.5,
            gravity_m_per_s2: 0.0,
        }
    }
}

impl BodyParams {
    pub fn validate(&self) -> Result<(), ConfigError> {
        ensure_finite("body.linear_drag", self.linear_drag)?;
        ensure_finite("body.angular_drag", self.angular_drag)?;
        ensure_finite("body.gravity_m_per_s2", self.gravity_m_per_s2)
    }
}
