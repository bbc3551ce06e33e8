//! Core types describing bodies, shapes, and shared geometric data.

pub mod body;
pub mod shape;
pub mod types;

pub use body::RigidBody;
pub use shape::{Shape, ShapeError};
pub use types::{Aabb, Face, Projection, RectBound};
