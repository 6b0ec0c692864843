//! Parameter definitions with physical units and documented semantics.
//!
//! All tunables live here with:
//! - Physical units (meters, seconds, m/s², etc.)
//! - Documented ranges and meanings
//! - A `validate()` that runs once when configuration is set

mod buoyancy;
mod noise;
mod preset;
mod simulation;
mod waves;

// Re-export all types
pub use buoyancy::{BodyParams, BuoyancySettings};
pub use noise::{NoiseConfig, MAX_NOISE_OCTAVES};
pub use preset::OceanPreset;
pub use simulation::SimulationParams;
pub use waves::{
    validate_max_waves, validate_waves, WaveDescriptor, DEFAULT_ACTIVE_WAVES, DEFAULT_MAX_WAVES,
    DEFAULT_WAVES, MAX_WAVES_CEILING,
};
pub(crate) use waves::validate_range;
