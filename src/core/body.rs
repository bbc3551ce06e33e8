use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::core::shape::Shape;
use crate::core::types::{Aabb, Face, Projection};
use crate::utils::math;

/// A rigid body: immutable collision shape plus mutable pose, velocity, and
/// material state.
///
/// World-space geometric queries (projections, significant faces, collision
/// axes) are derived from the current pose on every call and never cached.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RigidBody {
    pub shape: Shape,
    pub position: Vec2,
    /// Orientation angle in radians.
    pub rotation: f32,
    pub linear_velocity: Vec2,
    pub angular_velocity: f32,
    pub mass: f32,
    pub static_friction: f32,
    pub dynamic_friction: f32,
    pub friction_enabled: bool,
    pub is_static: bool,
    /// Kinematic flag: the body moves only through [`RigidBody::move_to`] /
    /// [`RigidBody::translate`] and ignores forces and impulses, like an
    /// unstoppable platform.
    pub is_moving_static: bool,
    /// Force accumulator, zeroed at the end of every integration step.
    pub pending_force: Vec2,
}

impl RigidBody {
    pub fn new(shape: Shape, position: Vec2, mass: f32) -> Self {
        Self {
            shape,
            position,
            rotation: 0.0,
            linear_velocity: Vec2::ZERO,
            angular_velocity: 0.0,
            mass,
            static_friction: 0.5,
            dynamic_friction: 0.3,
            friction_enabled: false,
            is_static: false,
            is_moving_static: false,
            pending_force: Vec2::ZERO,
        }
    }

    pub fn with_static(mut self) -> Self {
        self.is_static = true;
        self
    }

    pub fn with_friction(mut self, static_friction: f32, dynamic_friction: f32) -> Self {
        self.static_friction = static_friction;
        self.dynamic_friction = dynamic_friction;
        self.friction_enabled = true;
        self
    }

    /// Static and moving-static bodies are immovable: excluded from every
    /// force/mass and impulse/mass computation regardless of stored mass.
    pub fn is_immovable(&self) -> bool {
        self.is_static || self.is_moving_static
    }

    pub fn inverse_mass(&self) -> f32 {
        if self.is_immovable() {
            0.0
        } else {
            1.0 / self.mass
        }
    }

    /// Accumulates a force for the next integration step. No-op on
    /// immovable bodies.
    pub fn apply_force(&mut self, force: Vec2) {
        if self.is_immovable() {
            return;
        }
        self.pending_force += force;
    }

    /// The only sanctioned pose mutator for static and kinematic bodies.
    pub fn move_to(&mut self, position: Vec2) {
        self.position = position;
    }

    pub fn translate(&mut self, delta: Vec2) {
        self.position += delta;
    }

    /// Polygon vertices rotated and translated into world space; empty for
    /// circles.
    pub fn world_vertices(&self) -> Vec<Vec2> {
        match &self.shape {
            Shape::Circle { .. } => Vec::new(),
            Shape::Polygon { vertices } => vertices
                .iter()
                .map(|v| math::rotate_about(self.position + *v, self.position, self.rotation))
                .collect(),
        }
    }

    pub fn aabb(&self) -> Aabb {
        match &self.shape {
            Shape::Circle { radius } => Aabb::new(
                self.position - Vec2::splat(*radius),
                self.position + Vec2::splat(*radius),
            ),
            Shape::Polygon { .. } => Aabb::from_points(self.world_vertices()),
        }
    }

    /// Scalar projection extremes of the shape onto a unit axis.
    pub fn project_onto(&self, axis: Vec2) -> Projection {
        match &self.shape {
            Shape::Circle { radius } => {
                let center = self.position.dot(axis);
                Projection {
                    min: center - radius,
                    max: center + radius,
                }
            }
            Shape::Polygon { .. } => {
                let mut min = f32::MAX;
                let mut max = f32::MIN;
                for vertex in self.world_vertices() {
                    let d = vertex.dot(axis);
                    min = min.min(d);
                    max = max.max(d);
                }
                Projection { min, max }
            }
        }
    }

    /// SAT candidate axes contributed by this shape. A polygon yields one
    /// unit normal per edge; a circle yields the single unit axis toward the
    /// other body's center (falling back to +X for coincident centers).
    pub fn collision_axes(&self, other: &RigidBody) -> Vec<Vec2> {
        match &self.shape {
            Shape::Circle { .. } => {
                let axis = (other.position - self.position).normalize_or_zero();
                if axis == Vec2::ZERO {
                    vec![Vec2::X]
                } else {
                    vec![axis]
                }
            }
            Shape::Polygon { .. } => {
                let vertices = self.world_vertices();
                let count = vertices.len();
                (0..count)
                    .map(|i| math::edge_normal(vertices[(i + 1) % count] - vertices[i]))
                    .collect()
            }
        }
    }

    /// The vertex pair of the face most facing `normal` (polygon), or the
    /// single extremal surface point (circle).
    pub fn significant_vertices(&self, normal: Vec2) -> Vec<Vec2> {
        match &self.shape {
            Shape::Circle { radius } => vec![self.position + normal * *radius],
            Shape::Polygon { .. } => {
                let vertices = self.world_vertices();
                let (start, end) = self.significant_face_indices(&vertices, normal);
                vec![vertices[start], vertices[end]]
            }
        }
    }

    /// Unit normal of the significant face: the chord between its two
    /// vertices rotated -90°. A circle has no flat face, so the query
    /// degenerates to `normal` itself.
    pub fn significant_face_normal(&self, normal: Vec2) -> Vec2 {
        match &self.shape {
            Shape::Circle { .. } => normal,
            Shape::Polygon { .. } => {
                let vertices = self.world_vertices();
                let (start, end) = self.significant_face_indices(&vertices, normal);
                math::edge_normal(vertices[end] - vertices[start])
            }
        }
    }

    /// The significant face plus its two neighboring edges, in world
    /// coordinates and winding order: `[previous, face, next]`. Empty for
    /// circles, which need no clipping.
    pub fn adjacent_faces(&self, normal: Vec2) -> Vec<Face> {
        match &self.shape {
            Shape::Circle { .. } => Vec::new(),
            Shape::Polygon { .. } => {
                let vertices = self.world_vertices();
                let count = vertices.len();
                let (start, end) = self.significant_face_indices(&vertices, normal);
                let face = |index: usize| Face {
                    start: vertices[index],
                    end: vertices[(index + 1) % count],
                    index,
                };
                vec![face((start + count - 1) % count), face(start), face(end)]
            }
        }
    }

    /// Edge `(i, i+1)` of the face most facing `normal`: the max-projection
    /// vertex joined with whichever neighbor forms the better-aligned edge.
    fn significant_face_indices(&self, vertices: &[Vec2], normal: Vec2) -> (usize, usize) {
        let count = vertices.len();
        let mut best = 0;
        let mut best_dot = f32::MIN;
        for (i, vertex) in vertices.iter().enumerate() {
            let d = vertex.dot(normal);
            if d > best_dot {
                best_dot = d;
                best = i;
            }
        }

        let prev = (best + count - 1) % count;
        let next = (best + 1) % count;
        let incoming = math::edge_normal(vertices[best] - vertices[prev]);
        let outgoing = math::edge_normal(vertices[next] - vertices[best]);
        if incoming.dot(normal) >= outgoing.dot(normal) {
            (prev, best)
        } else {
            (best, next)
        }
    }
}
