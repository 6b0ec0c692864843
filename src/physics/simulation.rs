//! Fixed-timestep driver for floating bodies on a wave field.

use glam::Vec3;

use super::body::SimBody;
use super::buoyancy::{BuoyancyController, BuoyancyForces};
use crate::error::ConfigError;
use crate::ocean::{CoherentNoise, PerlinNoise, WaveField};
use crate::params::{BodyParams, BuoyancySettings, SimulationParams};

/// Floating bodies stepped at a constant rate against one shared field
pub struct FixedStepSimulation<N = PerlinNoise> {
    field: WaveField<N>,
    controllers: Vec<BuoyancyController<SimBody>>,
    params: SimulationParams,
    ticks: u64,
    /// Unsimulated frame time carried to the next `advance` (seconds)
    accumulator_s: f32,
}

impl<N: CoherentNoise> FixedStepSimulation<N> {
    pub fn new(field: WaveField<N>, params: SimulationParams) -> Result<Self, ConfigError> {
        params.validate()?;
        Ok(Self {
            field,
            controllers: Vec::new(),
            params,
            ticks: 0,
            accumulator_s: 0.0,
        })
    }

    /// Add a floating body at `position`; returns its index
    pub fn spawn_body(
        &mut self,
        position: Vec3,
        body_params: BodyParams,
        settings: BuoyancySettings,
    ) -> Result<usize, ConfigError> {
        body_params.validate()?;
        let body = SimBody::new(position, body_params);
        self.controllers
            .push(BuoyancyController::with_body(body, settings)?);
        Ok(self.controllers.len() - 1)
    }

    pub fn body(&self, index: usize) -> Option<&SimBody> {
        self.controllers.get(index)?.body()
    }

    pub fn controller_mut(&mut self, index: usize) -> Option<&mut BuoyancyController<SimBody>> {
        self.controllers.get_mut(index)
    }

    pub fn body_count(&self) -> usize {
        self.controllers.len()
    }

    pub fn field(&self) -> &WaveField<N> {
        &self.field
    }

    /// Live-tune the wave field; changes apply from the next tick
    pub fn field_mut(&mut self) -> &mut WaveField<N> {
        &mut self.field
    }

    /// Simulation time at the start of the next tick (seconds)
    pub fn time_s(&self) -> f32 {
        (self.ticks as f64 * self.params.fixed_dt_s as f64) as f32
    }

    pub fn ticks(&self) -> u64 {
        self.ticks
    }

    /// Run exactly one fixed tick
    ///
    /// Returns the forces applied to each body (`None` for unbound slots).
    pub fn step(&mut self) -> Vec<Option<BuoyancyForces>> {
        let time_s = self.time_s();
        let dt_s = self.params.fixed_dt_s;

        let forces = self
            .controllers
            .iter_mut()
            .map(|controller| {
                let forces = controller.tick(&self.field, time_s);
                if let Some(body) = controller.body_mut() {
                    body.integrate(dt_s);
                }
                forces
            })
            .collect();

        self.ticks += 1;
        forces
    }

    /// Feed elapsed frame time; runs as many whole ticks as fit
    ///
    /// Returns the number of ticks run. Backlog beyond `max_substeps`
    /// ticks is dropped.
    pub fn advance(&mut self, frame_dt_s: f32) -> u32 {
        if !frame_dt_s.is_finite() || frame_dt_s <= 0.0 {
            return 0;
        }

        let dt_s = self.params.fixed_dt_s;
        self.accumulator_s += frame_dt_s;

        let max_backlog_s = dt_s * self.params.max_substeps as f32;
        if self.accumulator_s > max_backlog_s {
            log::warn!(
                "Physics falling behind: dropping {:.3}s of backlog",
                self.accumulator_s - max_backlog_s
            );
            self.accumulator_s = max_backlog_s;
        }

        let mut ran = 0;
        while self.accumulator_s >= dt_s && ran < self.params.max_substeps {
            self.step();
            self.accumulator_s -= dt_s;
            ran += 1;
        }
        ran
    }
}
