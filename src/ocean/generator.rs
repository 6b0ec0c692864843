//! Wave set generation strategies.
//!
//! Generators only run when configuration is (re)built; the sampler never
//! draws random numbers. The random source is always passed in.

use std::f32::consts::TAU;

use glam::Vec2;
use rand::Rng;

use crate::error::ConfigError;
use crate::params::{validate_range, WaveDescriptor, DEFAULT_WAVES};

/// Produces a sequence of wave descriptors
pub trait WaveGenerator {
    fn generate<R: Rng + ?Sized>(&self, count: usize, rng: &mut R) -> Vec<WaveDescriptor>;
}

/// The fixed default presets, repeated if `count` exceeds them
#[derive(Debug, Clone, Copy, Default)]
pub struct PresetWaves;

impl WaveGenerator for PresetWaves {
    fn generate<R: Rng + ?Sized>(&self, count: usize, _rng: &mut R) -> Vec<WaveDescriptor> {
        DEFAULT_WAVES.iter().copied().cycle().take(count).collect()
    }
}

/// Uniformly random directions, steepness, and wavelengths
#[derive(Debug, Clone, PartialEq)]
pub struct RandomWaves {
    steepness_range: (f32, f32),
    wavelength_range_m: (f32, f32),
}

impl Default for RandomWaves {
    fn default() -> Self {
        // Spans the default presets
        Self {
            steepness_range: (0.05, 0.5),
            wavelength_range_m: (5.0, 25.0),
        }
    }
}

impl RandomWaves {
    /// # Arguments
    /// * `steepness_range` - Inclusive (min, max) steepness, min >= 0
    /// * `wavelength_range_m` - Inclusive (min, max) wavelength in meters, min > 0
    pub fn new(
        steepness_range: (f32, f32),
        wavelength_range_m: (f32, f32),
    ) -> Result<Self, ConfigError> {
        validate_range("steepness", steepness_range, 0.0, true)?;
        validate_range("wavelength", wavelength_range_m, 0.0, false)?;
        Ok(Self {
            steepness_range,
            wavelength_range_m,
        })
    }

    pub fn steepness_range(&self) -> (f32, f32) {
        self.steepness_range
    }

    pub fn wavelength_range_m(&self) -> (f32, f32) {
        self.wavelength_range_m
    }
}

impl WaveGenerator for RandomWaves {
    fn generate<R: Rng + ?Sized>(&self, count: usize, rng: &mut R) -> Vec<WaveDescriptor> {
        let (s_min, s_max) = self.steepness_range;
        let (l_min, l_max) = self.wavelength_range_m;

        (0..count)
            .map(|_| {
                let angle = rng.gen_range(0.0..TAU);
                let steepness = rng.gen_range(s_min..=s_max);
                let wavelength = rng.gen_range(l_min..=l_max);
                WaveDescriptor::new(Vec2::from_angle(angle), steepness, wavelength)
            })
            .collect()
    }
}
