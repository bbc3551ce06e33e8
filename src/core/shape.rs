use glam::Vec2;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors raised when constructing a geometrically invalid shape.
#[derive(Debug, Error, PartialEq)]
pub enum ShapeError {
    #[error("circle radius must be strictly positive, got {0}")]
    InvalidRadius(f32),
    #[error("polygon requires at least 3 vertices, got {0}")]
    TooFewVertices(usize),
}

/// Collision geometry of a rigid body.
///
/// Polygons are stored as local-space vertices in counter-clockwise order
/// and must be convex; convexity is a caller contract and is not
/// re-validated per query.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Shape {
    Circle { radius: f32 },
    Polygon { vertices: Vec<Vec2> },
}

impl Shape {
    pub fn circle(radius: f32) -> Result<Self, ShapeError> {
        if radius <= 0.0 || !radius.is_finite() {
            return Err(ShapeError::InvalidRadius(radius));
        }
        Ok(Shape::Circle { radius })
    }

    pub fn polygon(vertices: Vec<Vec2>) -> Result<Self, ShapeError> {
        if vertices.len() < 3 {
            return Err(ShapeError::TooFewVertices(vertices.len()));
        }
        Ok(Shape::Polygon { vertices })
    }

    /// Axis-aligned box of the given half extents, counter-clockwise.
    pub fn rectangle(half_extents: Vec2) -> Self {
        Shape::Polygon {
            vertices: vec![
                Vec2::new(-half_extents.x, -half_extents.y),
                Vec2::new(half_extents.x, -half_extents.y),
                Vec2::new(half_extents.x, half_extents.y),
                Vec2::new(-half_extents.x, half_extents.y),
            ],
        }
    }

    pub fn is_circle(&self) -> bool {
        matches!(self, Shape::Circle { .. })
    }
}
