//! Configuration validation errors.
//!
//! Every check happens when configuration is set, so sampling and ticking
//! never have to handle bad input.

use thiserror::Error;

/// Rejected wave, noise, buoyancy, or simulation configuration
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    #[error("wave {index} wavelength must be > 0, got {wavelength}")]
    NonPositiveWavelength { index: usize, wavelength: f32 },

    #[error("wave {index} steepness must be >= 0, got {steepness}")]
    NegativeSteepness { index: usize, steepness: f32 },

    #[error("wave {index} direction must be non-zero")]
    ZeroDirection { index: usize },

    #[error("wave {index} has non-finite components")]
    NonFiniteWave { index: usize },

    #[error("wave count {count} exceeds maximum {max}")]
    TooManyWaves { count: usize, max: usize },

    #[error("wave count {count} exceeds the {available} configured waves")]
    MissingWaves { count: usize, available: usize },

    #[error("maximum wave count must be in 1..={ceiling}, got {max}")]
    InvalidMaxWaves { max: usize, ceiling: usize },

    #[error("noise octaves must be >= 1")]
    ZeroOctaves,

    #[error("noise octaves {octaves} exceeds maximum {max}")]
    TooManyOctaves { octaves: u32, max: u32 },

    #[error("noise gain must be in 0..=1, got {0}")]
    GainOutOfRange(f32),

    #[error("noise lacunarity {lacunarity} overflows frequency over {octaves} octaves")]
    UnboundedFrequency { lacunarity: f32, octaves: u32 },

    #[error("noise scale must be > 0, got {0}")]
    NonPositiveScale(f32),

    #[error("`{name}` must be finite")]
    NonFinite { name: &'static str },

    #[error("{name} range {min}..={max} is empty or out of bounds")]
    InvalidRange { name: &'static str, min: f32, max: f32 },

    #[error("fixed timestep must be > 0, got {0}")]
    NonPositiveTimestep(f32),

    #[error("max substeps must be >= 1")]
    ZeroSubsteps,
}

/// Reject NaN and infinities for a named scalar
pub(crate) fn ensure_finite(name: &'static str, value: f32) -> Result<(), ConfigError> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(ConfigError::NonFinite { name })
    }
}
