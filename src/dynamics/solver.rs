use glam::Vec2;

use crate::collision::contact::ContactManifold;
use crate::core::body::RigidBody;

/// Sequential contact resolver: per-contact positional correction, a normal
/// impulse that removes the closing velocity, and a Coulomb-clamped friction
/// impulse.
///
/// Contacts are resolved pair by pair against pre-integration velocities,
/// not through a global solve; processing order follows the broad phase's
/// insertion-order pair list.
#[derive(Debug, Default)]
pub struct ContactSolver;

impl ContactSolver {
    pub fn resolve(
        &self,
        body_a: &mut RigidBody,
        body_b: &mut RigidBody,
        manifold: &ContactManifold,
    ) {
        let inv_a = body_a.inverse_mass();
        let inv_b = body_b.inverse_mass();
        let inv_sum = inv_a + inv_b;
        if inv_sum <= 0.0 {
            return;
        }

        let normal = manifold.normal;
        for point in &manifold.points {
            // Separate along the MTV, split by inverse-mass share; immovable
            // bodies contribute zero correction to themselves.
            let correction = normal * (point.depth / inv_sum);
            body_a.position -= correction * inv_a;
            body_b.position += correction * inv_b;

            let relative = body_b.linear_velocity - body_a.linear_velocity;
            let closing = relative.dot(normal);
            if closing >= 0.0 {
                continue;
            }

            let normal_impulse = -closing / inv_sum;
            body_a.linear_velocity -= normal * (normal_impulse * inv_a);
            body_b.linear_velocity += normal * (normal_impulse * inv_b);

            if body_a.friction_enabled || body_b.friction_enabled {
                Self::apply_friction(body_a, body_b, normal, normal_impulse, inv_sum);
            }
        }
    }

    fn apply_friction(
        body_a: &mut RigidBody,
        body_b: &mut RigidBody,
        normal: Vec2,
        normal_impulse: f32,
        inv_sum: f32,
    ) {
        let relative = body_b.linear_velocity - body_a.linear_velocity;
        let tangent = (relative - normal * relative.dot(normal)).normalize_or_zero();
        if tangent == Vec2::ZERO {
            return;
        }

        // Pair coefficients are the averages of the two bodies'; the clamp
        // uses the smaller of the static and dynamic values.
        let static_mu = 0.5 * (body_a.static_friction + body_b.static_friction);
        let dynamic_mu = 0.5 * (body_a.dynamic_friction + body_b.dynamic_friction);
        let limit = static_mu.min(dynamic_mu) * normal_impulse;

        let tangent_impulse = (-relative.dot(tangent) / inv_sum).clamp(-limit, limit);
        body_a.linear_velocity -= tangent * (tangent_impulse * body_a.inverse_mass());
        body_b.linear_velocity += tangent * (tangent_impulse * body_b.inverse_mass());
    }
}
