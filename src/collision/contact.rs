use glam::Vec2;

/// A single clipped contact point with its penetration depth.
#[derive(Debug, Clone, Copy)]
pub struct ContactPoint {
    pub position: Vec2,
    pub depth: f32,
}

/// Contact manifold for a colliding pair.
///
/// `normal` is the minimum-translation-vector axis, unit length, oriented
/// from `body_a` toward `body_b`. Indices refer to the tick's body list.
#[derive(Debug, Clone)]
pub struct ContactManifold {
    pub body_a: usize,
    pub body_b: usize,
    pub normal: Vec2,
    pub depth: f32,
    pub points: Vec<ContactPoint>,
}
