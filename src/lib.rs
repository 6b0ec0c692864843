//! Driftbuoy library - Gerstner wave field and buoyancy for floating bodies

pub mod error;
pub mod ocean;
pub mod params;
pub mod physics;

pub use error::ConfigError;
