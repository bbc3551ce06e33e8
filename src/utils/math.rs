//! Small 2D helpers layered on top of `glam`.

use glam::Vec2;

/// Rotates `point` about `pivot` by `angle` radians.
pub fn rotate_about(point: Vec2, pivot: Vec2, angle: f32) -> Vec2 {
    pivot + Vec2::from_angle(angle).rotate(point - pivot)
}

/// Outward unit normal of a counter-clockwise polygon edge: the edge vector
/// rotated -90°. Zero-length edges yield the zero vector.
pub fn edge_normal(edge: Vec2) -> Vec2 {
    Vec2::new(edge.y, -edge.x).normalize_or_zero()
}
