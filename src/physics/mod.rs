//! Buoyancy response of rigid bodies floating on the wave field.

mod body;
mod buoyancy;
mod simulation;

// Re-export public types
pub use body::{FloatingBody, SimBody};
pub use buoyancy::{apply_buoyancy, BuoyancyController, BuoyancyForces};
pub use simulation::FixedStepSimulation;
