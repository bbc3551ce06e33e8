use glam::Vec2;

use crate::config::{ANGULAR_DAMPING_INCREMENT, GRAVITY_ACCEL, REST_VELOCITY_EPSILON};
use crate::core::body::RigidBody;

/// Semi-implicit Euler integrator with dry friction and angular damping.
///
/// The update order per body is load-bearing: friction gate, angular
/// damping, orientation, velocity (with overshoot guard), position, force
/// reset. Static and moving-static bodies keep their pose; only `move_to` /
/// `translate` moves them.
#[derive(Debug, Default, Clone)]
pub struct Integrator;

impl Integrator {
    pub fn step(&self, bodies: &mut [RigidBody], dt: f32) {
        for body in bodies.iter_mut() {
            self.integrate(body, dt);
        }
    }

    pub fn integrate(&self, body: &mut RigidBody, dt: f32) {
        self.apply_dry_friction(body);
        self.damp_angular_velocity(body);

        if !body.is_immovable() {
            body.rotation += body.angular_velocity * dt;

            let delta = body.pending_force / body.mass * dt;
            // A force strong enough to reverse the velocity within one tick
            // would overshoot; stop first, then accelerate.
            if body.linear_velocity.length() < delta.length() {
                body.linear_velocity = Vec2::ZERO;
            }
            body.linear_velocity += delta;

            body.position += body.linear_velocity * dt;
        }

        body.pending_force = Vec2::ZERO;
    }

    /// Static-friction gate and kinetic friction. A resting body whose
    /// accumulated force stays below `μ_s · m · g` never starts moving; a
    /// moving one is opposed by a kinetic force of magnitude `μ_d · m · g`.
    fn apply_dry_friction(&self, body: &mut RigidBody) {
        if !body.friction_enabled {
            return;
        }

        let at_rest =
            body.linear_velocity.length_squared() < REST_VELOCITY_EPSILON * REST_VELOCITY_EPSILON;
        let threshold = body.static_friction * body.mass * GRAVITY_ACCEL;
        if body.is_static || (at_rest && body.pending_force.length() < threshold) {
            body.pending_force = Vec2::ZERO;
            return;
        }

        let direction = body.linear_velocity.normalize_or_zero();
        body.pending_force -= direction * (body.dynamic_friction * body.mass * GRAVITY_ACCEL);
    }

    /// Symmetric damping toward zero with a snap once the remaining
    /// magnitude drops below the increment, so the sign never oscillates.
    fn damp_angular_velocity(&self, body: &mut RigidBody) {
        if body.angular_velocity.abs() < ANGULAR_DAMPING_INCREMENT {
            body.angular_velocity = 0.0;
        } else {
            body.angular_velocity -= ANGULAR_DAMPING_INCREMENT * body.angular_velocity.signum();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::shape::Shape;
    use approx::assert_relative_eq;

    fn ball(mass: f32) -> RigidBody {
        RigidBody::new(Shape::circle(1.0).unwrap(), Vec2::ZERO, mass)
    }

    #[test]
    fn force_integrates_into_velocity_then_position() {
        let mut body = ball(2.0);
        body.apply_force(Vec2::new(4.0, 0.0));
        Integrator.integrate(&mut body, 0.5);
        assert_relative_eq!(body.linear_velocity.x, 1.0);
        assert_relative_eq!(body.position.x, 0.5);
        assert_eq!(body.pending_force, Vec2::ZERO);
    }

    #[test]
    fn sub_threshold_force_keeps_resting_body_at_rest() {
        let mut body = ball(1.0).with_friction(0.5, 0.3);
        // Below 0.5 * 1.0 * 9.81.
        body.apply_force(Vec2::new(4.0, 0.0));
        Integrator.integrate(&mut body, 1.0 / 60.0);
        assert_eq!(body.linear_velocity, Vec2::ZERO);
        assert_eq!(body.position, Vec2::ZERO);
    }

    #[test]
    fn super_threshold_force_starts_motion() {
        let mut body = ball(1.0).with_friction(0.5, 0.3);
        body.apply_force(Vec2::new(6.0, 0.0));
        Integrator.integrate(&mut body, 1.0 / 60.0);
        assert!(body.linear_velocity.x > 0.0);
    }

    #[test]
    fn kinetic_friction_opposes_motion() {
        let mut body = ball(1.0).with_friction(0.5, 0.3);
        body.linear_velocity = Vec2::new(3.0, 0.0);
        Integrator.integrate(&mut body, 1.0 / 60.0);
        assert!(body.linear_velocity.x < 3.0);
        assert!(body.linear_velocity.x > 0.0);
    }

    #[test]
    fn angular_velocity_snaps_to_zero_without_oscillating() {
        let mut body = ball(1.0);
        body.angular_velocity = 0.12;
        for _ in 0..4 {
            Integrator.integrate(&mut body, 1.0 / 60.0);
        }
        assert_eq!(body.angular_velocity, 0.0);

        body.angular_velocity = -0.12;
        for _ in 0..4 {
            Integrator.integrate(&mut body, 1.0 / 60.0);
        }
        assert_eq!(body.angular_velocity, 0.0);
    }

    #[test]
    fn overshoot_guard_zeroes_velocity_before_reversal() {
        let mut body = ball(1.0);
        body.linear_velocity = Vec2::new(0.1, 0.0);
        // Strong opposing force: delta magnitude far exceeds current speed.
        body.apply_force(Vec2::new(-100.0, 0.0));
        Integrator.integrate(&mut body, 0.1);
        // Without the guard this would land at 0.1 - 10.0 = -9.9.
        assert_relative_eq!(body.linear_velocity.x, -10.0, epsilon = 1e-5);
    }

    #[test]
    fn static_body_pose_is_untouched() {
        let mut body = ball(1.0).with_static();
        body.angular_velocity = 1.0;
        body.linear_velocity = Vec2::new(1.0, 0.0);
        Integrator.integrate(&mut body, 1.0);
        assert_eq!(body.position, Vec2::ZERO);
        assert_eq!(body.rotation, 0.0);
    }
}
