//! Ocean surface model: Gerstner wave sum with fractal noise detail.

mod controller;
mod field;
mod generator;
mod noise;

// Re-export public types
pub use controller::{WaveController, WaveUniformSink, WaveUniforms};
pub use field::{WaveField, WaveSample, GRAVITY_M_PER_S2};
pub use generator::{PresetWaves, RandomWaves, WaveGenerator};
pub use noise::{fbm, CoherentNoise, PerlinNoise};
