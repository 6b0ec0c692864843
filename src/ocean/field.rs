//! Gerstner wave field: surface height and horizontal flow at any (x, z, t).

use std::f32::consts::TAU;

use glam::Vec2;

use super::controller::WaveController;
use super::noise::{fbm, CoherentNoise, PerlinNoise};
use crate::error::ConfigError;
use crate::params::{validate_waves, NoiseConfig, WaveDescriptor};

/// Gravitational acceleration used for the deep-water dispersion relation (m/s²)
pub const GRAVITY_M_PER_S2: f32 = 9.8;

/// Surface state at one point and instant
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct WaveSample {
    /// Water surface height (meters)
    pub height: f32,

    /// Horizontal flow direction in the XZ plane (x, z)
    /// Unit length, or zero when the wave contributions cancel out.
    pub flow: Vec2,
}

/// Per-wave constants derived once from a descriptor
#[derive(Debug, Clone, Copy)]
struct WaveTerm {
    direction: Vec2,
    /// Angular wavenumber k = 2π/λ (rad/m)
    wavenumber: f32,
    /// Phase speed c = sqrt(g/k) (m/s)
    phase_speed: f32,
    /// Amplitude a = steepness/k (meters)
    amplitude: f32,
}

impl WaveTerm {
    fn new(wave: &WaveDescriptor) -> Self {
        let wavenumber = TAU / wave.wavelength_m();
        Self {
            direction: wave.unit_direction(),
            wavenumber,
            phase_speed: (GRAVITY_M_PER_S2 / wavenumber).sqrt(),
            amplitude: wave.steepness() / wavenumber,
        }
    }
}

/// Sum of Gerstner waves plus a drifting FBM noise layer
///
/// Sampling is a pure function of position, time, and the current
/// configuration; the field can be shared across threads when its noise
/// source can.
#[derive(Debug, Clone)]
pub struct WaveField<N = PerlinNoise> {
    waves: Vec<WaveDescriptor>,
    terms: Vec<WaveTerm>,
    noise_config: NoiseConfig,
    noise: N,
    max_waves: usize,
}

impl WaveField<PerlinNoise> {
    /// Create a field backed by seeded Perlin noise
    pub fn new(
        waves: Vec<WaveDescriptor>,
        noise_config: NoiseConfig,
        max_waves: usize,
    ) -> Result<Self, ConfigError> {
        Self::with_noise(waves, noise_config, max_waves, PerlinNoise::default())
    }

    /// Create a physics field from the controller's active waves
    pub fn from_controller(
        controller: &WaveController,
        noise_config: NoiseConfig,
    ) -> Result<Self, ConfigError> {
        Self::new(
            controller.active_waves().to_vec(),
            noise_config,
            controller.max_waves(),
        )
    }
}

impl<N: CoherentNoise> WaveField<N> {
    /// Create a field with an explicit noise source, reseeded from `noise_config`
    pub fn with_noise(
        waves: Vec<WaveDescriptor>,
        noise_config: NoiseConfig,
        max_waves: usize,
        mut noise: N,
    ) -> Result<Self, ConfigError> {
        validate_waves(&waves, max_waves)?;
        noise_config.validate()?;
        noise.reseed(noise_config.seed);

        let terms = waves.iter().map(WaveTerm::new).collect();
        Ok(Self {
            waves,
            terms,
            noise_config,
            noise,
            max_waves,
        })
    }

    /// Sample surface height and flow direction
    ///
    /// # Arguments
    /// * `x`, `z` - World position on the horizontal plane (meters)
    /// * `t` - Simulation time (seconds)
    pub fn sample(&self, x: f32, z: f32, t: f32) -> WaveSample {
        let mut height = 0.0;
        let mut flow = Vec2::ZERO;

        for term in &self.terms {
            let d = term.direction;
            let phase = term.wavenumber * (d.x * x + d.y * z - term.phase_speed * t);
            let (sin_f, cos_f) = phase.sin_cos();

            height += sin_f * term.amplitude;
            flow += d * cos_f;
        }

        let config = &self.noise_config;
        let p = Vec2::new(x, z) / config.scale + Vec2::splat(config.speed * t);
        height += fbm(&self.noise, p, config) * config.strength;

        WaveSample {
            height,
            flow: flow.normalize_or_zero(),
        }
    }

    /// Surface height only
    pub fn height(&self, x: f32, z: f32, t: f32) -> f32 {
        self.sample(x, z, t).height
    }

    pub fn waves(&self) -> &[WaveDescriptor] {
        &self.waves
    }

    pub fn noise_config(&self) -> &NoiseConfig {
        &self.noise_config
    }

    pub fn max_waves(&self) -> usize {
        self.max_waves
    }

    /// Replace the wave set; on error the field keeps its previous waves
    pub fn set_waves(&mut self, waves: Vec<WaveDescriptor>) -> Result<(), ConfigError> {
        validate_waves(&waves, self.max_waves)?;
        self.terms = waves.iter().map(WaveTerm::new).collect();
        self.waves = waves;
        log::debug!("Wave field now sums {} waves", self.waves.len());
        Ok(())
    }

    /// Replace noise parameters; on error the field keeps its previous noise
    pub fn set_noise(&mut self, noise_config: NoiseConfig) -> Result<(), ConfigError> {
        noise_config.validate()?;
        if noise_config.seed != self.noise_config.seed {
            self.noise.reseed(noise_config.seed);
        }
        self.noise_config = noise_config;
        Ok(())
    }
}
