//! Buoyancy response: spring toward the surface plus drift along the flow.

use glam::Vec3;

use super::body::FloatingBody;
use crate::error::ConfigError;
use crate::ocean::{CoherentNoise, WaveField};
use crate::params::BuoyancySettings;

/// Accelerations applied during one tick, with the sample they came from
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct BuoyancyForces {
    /// Surface height under the body (meters)
    pub water_height: f32,

    /// `(water_height + offset) - y` (meters, + = body below rest height)
    pub vertical_diff: f32,

    /// Restoring acceleration along world up (m/s²)
    pub vertical: Vec3,

    /// Flow drift acceleration in the XZ plane (m/s²)
    pub horizontal: Vec3,
}

/// Sample the field under `body` and apply buoyancy accelerations to it
///
/// The vertical term is an undamped spring; settling comes from the body's
/// own drag. No torque is applied.
pub fn apply_buoyancy<B, N>(
    body: &mut B,
    field: &WaveField<N>,
    settings: &BuoyancySettings,
    time_s: f32,
) -> BuoyancyForces
where
    B: FloatingBody + ?Sized,
    N: CoherentNoise,
{
    let pos = body.position();
    let sample = field.sample(pos.x, pos.z, time_s);

    let vertical_diff = (sample.height + settings.height_offset_m) - pos.y;
    let vertical = Vec3::Y * (vertical_diff * settings.buoyancy_strength);
    let horizontal =
        Vec3::new(sample.flow.x, 0.0, sample.flow.y) * settings.horizontal_flow_strength;

    body.add_acceleration(vertical);
    body.add_acceleration(horizontal);

    BuoyancyForces {
        water_height: sample.height,
        vertical_diff,
        vertical,
        horizontal,
    }
}

/// Drives one floating body from a wave field, once per physics tick
#[derive(Debug, Clone)]
pub struct BuoyancyController<B> {
    body: Option<B>,
    settings: BuoyancySettings,
    warned_unbound: bool,
}

impl<B: FloatingBody> BuoyancyController<B> {
    /// Create a controller with no body bound yet
    pub fn new(settings: BuoyancySettings) -> Result<Self, ConfigError> {
        settings.validate()?;
        Ok(Self {
            body: None,
            settings,
            warned_unbound: false,
        })
    }

    /// Create a controller already driving `body`
    pub fn with_body(body: B, settings: BuoyancySettings) -> Result<Self, ConfigError> {
        let mut controller = Self::new(settings)?;
        controller.body = Some(body);
        Ok(controller)
    }

    /// Bind a body, returning the one previously bound
    pub fn bind(&mut self, body: B) -> Option<B> {
        self.warned_unbound = false;
        self.body.replace(body)
    }

    pub fn unbind(&mut self) -> Option<B> {
        self.body.take()
    }

    pub fn body(&self) -> Option<&B> {
        self.body.as_ref()
    }

    pub fn body_mut(&mut self) -> Option<&mut B> {
        self.body.as_mut()
    }

    pub fn settings(&self) -> &BuoyancySettings {
        &self.settings
    }

    /// Retune; takes effect on the next tick
    pub fn set_settings(&mut self, settings: BuoyancySettings) -> Result<(), ConfigError> {
        settings.validate()?;
        self.settings = settings;
        Ok(())
    }

    /// Apply buoyancy for the tick at `time_s`
    ///
    /// Returns `None` without touching anything when no body is bound.
    pub fn tick<N: CoherentNoise>(
        &mut self,
        field: &WaveField<N>,
        time_s: f32,
    ) -> Option<BuoyancyForces> {
        let Some(body) = self.body.as_mut() else {
            if !self.warned_unbound {
                log::warn!("Buoyancy tick skipped: no body bound");
                self.warned_unbound = true;
            }
            return None;
        };
        Some(apply_buoyancy(body, field, &self.settings, time_s))
    }
}
