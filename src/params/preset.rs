//! Complete ocean scenario, loadable from a RON file.

use serde::{Deserialize, Serialize};

use super::{
    BodyParams, BuoyancySettings, NoiseConfig, SimulationParams, WaveDescriptor,
    DEFAULT_ACTIVE_WAVES, DEFAULT_MAX_WAVES, DEFAULT_WAVES,
};
use crate::error::ConfigError;

/// Everything needed to set up waves, noise, and floating bodies
///
/// Missing fields fall back to their defaults, so a preset file can
/// override just the parts it cares about.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OceanPreset {
    /// Wave-count ceiling shared by the renderer and the physics field
    pub max_waves: usize,

    /// Configured wave slots; the first `active_waves` are displayed
    pub waves: Vec<WaveDescriptor>,

    /// Waves displayed by the renderer
    pub active_waves: usize,

    /// Waves sampled by physics (defaults to `active_waves`)
    pub physics_waves: Option<usize>,

    pub noise: NoiseConfig,
    pub buoyancy: BuoyancySettings,
    pub body: BodyParams,
    pub simulation: SimulationParams,
}

impl Default for OceanPreset {
    fn default() -> Self {
        Self {
            max_waves: DEFAULT_MAX_WAVES,
            waves: DEFAULT_WAVES.to_vec(),
            active_waves: DEFAULT_ACTIVE_WAVES,
            physics_waves: None,
            noise: NoiseConfig::default(),
            buoyancy: BuoyancySettings::default(),
            body: BodyParams::default(),
            simulation: SimulationParams::default(),
        }
    }
}

impl OceanPreset {
    /// Waves sampled by physics
    pub fn physics_wave_count(&self) -> usize {
        self.physics_waves.unwrap_or(self.active_waves)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        super::validate_waves(&self.waves, self.max_waves)?;
        for count in [self.active_waves, self.physics_wave_count()] {
            if count > self.waves.len() {
                return Err(ConfigError::MissingWaves {
                    count,
                    available: self.waves.len(),
                });
            }
        }
        self.noise.validate()?;
        self.buoyancy.validate()?;
        self.body.validate()?;
        self.simulation.validate()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_preset_is_valid() {
        let preset = OceanPreset::default();
        assert!(preset.validate().is_ok());
        assert_eq!(preset.physics_wave_count(), DEFAULT_ACTIVE_WAVES);
    }

    #[test]
    fn test_physics_count_is_independent() {
        let preset = OceanPreset {
            physics_waves: Some(1),
            ..OceanPreset::default()
        };
        assert_eq!(preset.active_waves, 3);
        assert_eq!(preset.physics_wave_count(), 1);
        assert!(preset.validate().is_ok());
    }

    #[test]
    fn test_rejects_counts_beyond_configured_waves() {
        let preset = OceanPreset {
            waves: DEFAULT_WAVES[..2].to_vec(),
            ..OceanPreset::default()
        };
        assert_eq!(
            preset.validate(),
            Err(ConfigError::MissingWaves {
                count: 3,
                available: 2
            })
        );
    }

    #[test]
    fn test_partial_ron_uses_defaults() {
        let text = "(noise: (strength: 0.0), buoyancy: (buoyancy_strength: 8.0))";
        let preset: OceanPreset = ron::from_str(text).unwrap();
        assert_eq!(preset.noise.strength, 0.0);
        assert_eq!(preset.noise.octaves, 4);
        assert_eq!(preset.buoyancy.buoyancy_strength, 8.0);
        assert_eq!(preset.waves.len(), DEFAULT_MAX_WAVES);
    }

    #[test]
    fn test_shipped_preset_is_valid() {
        let preset: OceanPreset =
            ron::from_str(include_str!("../../presets/choppy.ron")).unwrap();
        assert!(preset.validate().is_ok());
        assert_eq!(preset.waves.len(), 5);
        assert_eq!(preset.noise.octaves, 5);
        assert_eq!(preset.noise.lacunarity, 2.0);
        assert_eq!(preset.body.angular_drag, 0.5);
    }
}
