//! Rigid-body seam for floating objects, plus a reference body.

use glam::Vec3;

use crate::params::BodyParams;

/// A rigid body that buoyancy can push around
///
/// Buoyancy only reads the position and adds mass-independent acceleration.
/// It never writes velocity, rotation, or mass.
pub trait FloatingBody {
    /// World-space position (meters)
    fn position(&self) -> Vec3;

    /// Accumulate an acceleration (m/s²) for the next integration step
    fn add_acceleration(&mut self, acceleration: Vec3);
}

impl<T: FloatingBody + ?Sized> FloatingBody for &mut T {
    fn position(&self) -> Vec3 {
        (**self).position()
    }

    fn add_acceleration(&mut self, acceleration: Vec3) {
        (**self).add_acceleration(acceleration)
    }
}

/// Point-mass body with linear and angular drag
///
/// Integrates with semi-implicit Euler. Drag scales velocity by
/// `clamp(1 - drag * dt, 0, 1)` each step.
#[derive(Debug, Clone, PartialEq)]
pub struct SimBody {
    position: Vec3,
    velocity: Vec3,
    angular_velocity: Vec3,
    params: BodyParams,
    /// Acceleration accumulated since the last step
    pending: Vec3,
}

impl SimBody {
    pub fn new(position: Vec3, params: BodyParams) -> Self {
        Self {
            position,
            velocity: Vec3::ZERO,
            angular_velocity: Vec3::ZERO,
            params,
            pending: Vec3::ZERO,
        }
    }

    pub fn velocity(&self) -> Vec3 {
        self.velocity
    }

    pub fn set_velocity(&mut self, velocity: Vec3) {
        self.velocity = velocity;
    }

    pub fn angular_velocity(&self) -> Vec3 {
        self.angular_velocity
    }

    pub fn set_angular_velocity(&mut self, angular_velocity: Vec3) {
        self.angular_velocity = angular_velocity;
    }

    pub fn params(&self) -> &BodyParams {
        &self.params
    }

    /// Acceleration queued for the next step
    pub fn pending_acceleration(&self) -> Vec3 {
        self.pending
    }

    /// Advance by `dt_s` seconds and clear queued acceleration
    pub fn integrate(&mut self, dt_s: f32) {
        let gravity = Vec3::NEG_Y * self.params.gravity_m_per_s2;
        self.velocity += (self.pending + gravity) * dt_s;
        self.velocity *= (1.0 - self.params.linear_drag * dt_s).clamp(0.0, 1.0);
        self.angular_velocity *= (1.0 - self.params.angular_drag * dt_s).clamp(0.0, 1.0);
        self.position += self.velocity * dt_s;
        self.pending = Vec3::ZERO;
    }
}

impl FloatingBody for SimBody {
    fn position(&self) -> Vec3 {
        self.position
    }

    fn add_acceleration(&mut self, acceleration: Vec3) {
        self.pending += acceleration;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn frictionless() -> BodyParams {
        BodyParams {
            linear_drag: 0.0,
            angular_drag: 0.0,
            gravity_m_per_s2: 0.0,
        }
    }

    #[test]
    fn test_accelerations_accumulate_until_step() {
        let mut body = SimBody::new(Vec3::ZERO, frictionless());
        body.add_acceleration(Vec3::Y);
        body.add_acceleration(Vec3::X * 2.0);
        assert_eq!(body.pending_acceleration(), Vec3::new(2.0, 1.0, 0.0));

        body.integrate(0.5);
        assert_eq!(body.velocity(), Vec3::new(1.0, 0.5, 0.0));
        assert_eq!(body.position(), Vec3::new(0.5, 0.25, 0.0));
        assert_eq!(body.pending_acceleration(), Vec3::ZERO);
    }

    #[test]
    fn test_drag_slows_body() {
        let mut body = SimBody::new(Vec3::ZERO, BodyParams::default());
        body.set_velocity(Vec3::X * 10.0);
        body.set_angular_velocity(Vec3::Y * 4.0);

        body.integrate(0.1);
        // 10 * (1 - 1.0 * 0.1)
        assert!((body.velocity().x - 9.0).abs() < 1e-5);
        // 4 * (1 - 0.5 * 0.1)
        assert!((body.angular_velocity().y - 3.8).abs() < 1e-5);
    }

    #[test]
    fn test_huge_drag_stops_without_reversing() {
        let params = BodyParams {
            linear_drag: 100.0,
            ..BodyParams::default()
        };
        let mut body = SimBody::new(Vec3::ZERO, params);
        body.set_velocity(Vec3::X * 10.0);
        body.integrate(0.1);
        assert_eq!(body.velocity(), Vec3::ZERO);
    }

    #[test]
    fn test_gravity_pulls_down() {
        let params = BodyParams {
            gravity_m_per_s2: 9.8,
            ..frictionless()
        };
        let mut body = SimBody::new(Vec3::ZERO, params);
        body.integrate(1.0);
        assert_eq!(body.velocity(), Vec3::new(0.0, -9.8, 0.0));
    }

    #[test]
    fn test_mutable_reference_forwards() {
        let mut body = SimBody::new(Vec3::new(1.0, 2.0, 3.0), frictionless());
        {
            let mut handle = &mut body;
            assert_eq!(FloatingBody::position(&handle), Vec3::new(1.0, 2.0, 3.0));
            FloatingBody::add_acceleration(&mut handle, Vec3::Z);
        }
        assert_eq!(body.pending_acceleration(), Vec3::Z);
    }
}
