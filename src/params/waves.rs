//! Wave descriptors, default presets, and wave-count limits.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::error::{ensure_finite, ConfigError};

/// Hard ceiling on wave count (size of the renderer's uniform array)
pub const MAX_WAVES_CEILING: usize = 32;

/// Default wave-count ceiling for a controller or field
pub const DEFAULT_MAX_WAVES: usize = 10;

/// Number of waves active after a reset to defaults
pub const DEFAULT_ACTIVE_WAVES: usize = 3;

/// One directional Gerstner wave
///
/// Packed for renderers as `[dir_x, dir_z, steepness, wavelength]`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WaveDescriptor {
    /// Travel direction in the XZ plane (may be stored unnormalized)
    direction: Vec2,

    /// Crest sharpness (dimensionless, >= 0)
    steepness: f32,

    /// Distance between crests (meters, > 0)
    wavelength_m: f32,
}

impl WaveDescriptor {
    pub const fn new(direction: Vec2, steepness: f32, wavelength_m: f32) -> Self {
        Self {
            direction,
            steepness,
            wavelength_m,
        }
    }

    /// Build from the packed `[dir_x, dir_z, steepness, wavelength]` layout
    pub const fn from_packed(packed: [f32; 4]) -> Self {
        Self::new(Vec2::new(packed[0], packed[1]), packed[2], packed[3])
    }

    pub fn to_packed(&self) -> [f32; 4] {
        [
            self.direction.x,
            self.direction.y,
            self.steepness,
            self.wavelength_m,
        ]
    }

    /// Direction as stored
    pub fn direction(&self) -> Vec2 {
        self.direction
    }

    /// Direction normalized for evaluation
    pub fn unit_direction(&self) -> Vec2 {
        self.direction.normalize_or_zero()
    }

    pub fn steepness(&self) -> f32 {
        self.steepness
    }

    pub fn wavelength_m(&self) -> f32 {
        self.wavelength_m
    }

    /// Validate this wave; `index` is its slot, used in error reports
    pub fn validate(&self, index: usize) -> Result<(), ConfigError> {
        let finite = self.direction.is_finite()
            && self.steepness.is_finite()
            && self.wavelength_m.is_finite();
        if !finite {
            return Err(ConfigError::NonFiniteWave { index });
        }
        if self.wavelength_m <= 0.0 {
            return Err(ConfigError::NonPositiveWavelength {
                index,
                wavelength: self.wavelength_m,
            });
        }
        if self.steepness < 0.0 {
            return Err(ConfigError::NegativeSteepness {
                index,
                steepness: self.steepness,
            });
        }
        if self.direction.length_squared() == 0.0 {
            return Err(ConfigError::ZeroDirection { index });
        }
        Ok(())
    }
}

/// Default wave presets, ordered from dominant swell to fine chop
pub const DEFAULT_WAVES: [WaveDescriptor; DEFAULT_MAX_WAVES] = [
    WaveDescriptor::from_packed([1.0, 0.0, 0.5, 10.0]),
    WaveDescriptor::from_packed([0.0, 1.0, 0.25, 20.0]),
    WaveDescriptor::from_packed([1.0, 1.0, 0.15, 10.0]),
    WaveDescriptor::from_packed([0.5, 0.2, 0.2, 5.0]),
    WaveDescriptor::from_packed([0.2, 0.8, 0.1, 12.0]),
    WaveDescriptor::from_packed([0.8, -0.4, 0.3, 8.0]),
    WaveDescriptor::from_packed([-0.3, 0.6, 0.15, 15.0]),
    WaveDescriptor::from_packed([-0.7, -0.1, 0.25, 6.0]),
    WaveDescriptor::from_packed([0.4, 0.9, 0.05, 25.0]),
    WaveDescriptor::from_packed([-0.9, 0.3, 0.1, 18.0]),
];

/// Validate a wave-count ceiling
pub fn validate_max_waves(max_waves: usize) -> Result<(), ConfigError> {
    if max_waves == 0 || max_waves > MAX_WAVES_CEILING {
        return Err(ConfigError::InvalidMaxWaves {
            max: max_waves,
            ceiling: MAX_WAVES_CEILING,
        });
    }
    Ok(())
}

/// Validate a wave list against a ceiling
pub fn validate_waves(waves: &[WaveDescriptor], max_waves: usize) -> Result<(), ConfigError> {
    validate_max_waves(max_waves)?;
    if waves.len() > max_waves {
        return Err(ConfigError::TooManyWaves {
            count: waves.len(),
            max: max_waves,
        });
    }
    waves
        .iter()
        .enumerate()
        .try_for_each(|(index, wave)| wave.validate(index))
}

/// Validate a `min..=max` sampling range
pub(crate) fn validate_range(
    name: &'static str,
    (min, max): (f32, f32),
    lower_bound: f32,
    inclusive_lower: bool,
) -> Result<(), ConfigError> {
    ensure_finite(name, min)?;
    ensure_finite(name, max)?;
    let above_bound = if inclusive_lower {
        min >= lower_bound
    } else {
        min > lower_bound
    };
    if !above_bound || min > max {
        return Err(ConfigError::InvalidRange { name, min, max });
    }
    Ok(())
}
