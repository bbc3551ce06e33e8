//! Impulse2D – 2D rigid-body physics for Rust.
//!
//! The crate simulates rigid bodies that accumulate forces, integrate
//! motion, and resolve contacts through a two-stage collision pipeline:
//! a rebuildable quadtree broad phase prunes candidate pairs, and a
//! separating-axis narrow phase builds contact manifolds by clipping the
//! incident face against the reference face, then resolves them with
//! sequential impulses and positional correction.
//!
//! Everything runs single-threaded and synchronous: one
//! [`PhysicsWorld::step`] completes fully before the next begins.

pub mod collision;
pub mod config;
pub mod core;
pub mod dynamics;
pub mod utils;
pub mod world;

pub use glam::Vec2;

pub use crate::collision::{
    broadphase::BroadPhase,
    contact::{ContactManifold, ContactPoint},
    narrowphase::NarrowPhase,
    quadtree::QuadTree,
};
pub use crate::core::{
    body::RigidBody,
    shape::{Shape, ShapeError},
    types::{Aabb, Face, Projection, RectBound},
};
pub use crate::dynamics::{integrator::Integrator, solver::ContactSolver};
pub use crate::world::PhysicsWorld;
