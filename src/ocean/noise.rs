//! Coherent noise sources and fractal Brownian motion.
//!
//! The wave field takes its noise source as a value, so tests can swap in a
//! flat or hand-made source and every sample stays seed-controlled.

use glam::Vec2;
use noise::{NoiseFn, Perlin};

use crate::params::NoiseConfig;

/// Smooth, deterministic 2D noise
pub trait CoherentNoise {
    /// Sample noise at a point. Returns a value in [0, 1].
    fn sample(&self, x: f32, y: f32) -> f32;

    /// Switch to a new permutation seed (no-op for unseeded sources)
    fn reseed(&mut self, _seed: u32) {}
}

/// Lattice period of the Perlin permutation table (hashes use the low 8 bits)
const PERLIN_PERIOD: f64 = 256.0;

/// Seeded Perlin noise remapped to [0, 1]
///
/// Inputs are wrapped into one lattice period, so far-away or huge
/// coordinates sample the same pattern instead of overflowing the lattice.
/// Non-finite coordinates read as the midpoint 0.5.
#[derive(Debug, Clone)]
pub struct PerlinNoise {
    perlin: Perlin,
}

impl PerlinNoise {
    pub fn new(seed: u32) -> Self {
        Self {
            perlin: Perlin::new(seed),
        }
    }
}

impl Default for PerlinNoise {
    fn default() -> Self {
        Self::new(0)
    }
}

impl CoherentNoise for PerlinNoise {
    fn sample(&self, x: f32, y: f32) -> f32 {
        if !(x.is_finite() && y.is_finite()) {
            return 0.5;
        }
        let point = [
            f64::from(x).rem_euclid(PERLIN_PERIOD),
            f64::from(y).rem_euclid(PERLIN_PERIOD),
        ];
        let value = self.perlin.get(point) as f32;
        (value * 0.5 + 0.5).clamp(0.0, 1.0)
    }

    fn reseed(&mut self, seed: u32) {
        self.perlin = Perlin::new(seed);
    }
}

/// Multi-octave noise at `p`, normalized and remapped to [-1, 1]
///
/// Each octave scales amplitude by `gain` and frequency by `lacunarity`.
/// `config` must pass `NoiseConfig::validate`: at least one octave and a
/// non-negative gain keep the weight total positive.
pub fn fbm<N: CoherentNoise + ?Sized>(noise: &N, p: Vec2, config: &NoiseConfig) -> f32 {
    let mut total = 0.0;
    let mut amplitude = 1.0;
    let mut frequency = 1.0;
    let mut max_value = 0.0;

    for _ in 0..config.octaves {
        total += noise.sample(p.x * frequency, p.y * frequency) * amplitude;
        max_value += amplitude;
        amplitude *= config.gain;
        frequency *= config.lacunarity;
    }

    ((total / max_value) * 2.0 - 1.0).clamp(-1.0, 1.0)
}
