//! Fractal noise parameters layered over the wave sum.

use serde::{Deserialize, Serialize};

use crate::error::{ensure_finite, ConfigError};

/// Most octaves a noise layer may stack
pub const MAX_NOISE_OCTAVES: u32 = 16;

/// Fractal Brownian motion (FBM) parameters
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct NoiseConfig {
    /// Height contribution of the noise layer (meters at full deflection)
    pub strength: f32,

    /// Horizontal feature size (meters per noise unit, > 0)
    pub scale: f32,

    /// Drift of the noise pattern (noise units per second, both axes)
    pub speed: f32,

    /// Number of layered octaves (1..=MAX_NOISE_OCTAVES)
    pub octaves: u32,

    /// Frequency multiplier between octaves
    /// The top octave's frequency `lacunarity^(octaves - 1)` must stay finite.
    pub lacunarity: f32,

    /// Amplitude multiplier between octaves (0..=1)
    pub gain: f32,

    /// Permutation seed for the coherent noise source
    pub seed: u32,
}

impl Default for NoiseConfig {
    fn default() -> Self {
        Self {
            strength: 0.1,
            scale: 10.0,
            speed: 1.0,
            octaves: 4,
            lacunarity: 2.0,
            gain: 0.5,
            seed: 0,
        }
    }
}

impl NoiseConfig {
    /// Noise layer switched off (waves only)
    pub fn disabled() -> Self {
        Self {
            strength: 0.0,
            ..Self::default()
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        ensure_finite("noise.strength", self.strength)?;
        ensure_finite("noise.scale", self.scale)?;
        ensure_finite("noise.speed", self.speed)?;
        ensure_finite("noise.lacunarity", self.lacunarity)?;
        ensure_finite("noise.gain", self.gain)?;
        if self.octaves == 0 {
            return Err(ConfigError::ZeroOctaves);
        }
        if self.octaves > MAX_NOISE_OCTAVES {
            return Err(ConfigError::TooManyOctaves {
                octaves: self.octaves,
                max: MAX_NOISE_OCTAVES,
            });
        }
        if self.scale <= 0.0 {
            return Err(ConfigError::NonPositiveScale(self.scale));
        }
        // Octave weights 1, gain, gain², ... must sum to a positive finite total
        if !(0.0..=1.0).contains(&self.gain) {
            return Err(ConfigError::GainOutOfRange(self.gain));
        }
        // octaves <= MAX_NOISE_OCTAVES, so the cast is lossless
        let top_frequency = self.lacunarity.abs().powi(self.octaves as i32 - 1);
        if !top_frequency.is_finite() {
            return Err(ConfigError::UnboundedFrequency {
                lacunarity: self.lacunarity,
                octaves: self.octaves,
            });
        }
        Ok(())
    }
}
