//! Collision detection modules: quadtree spatial index, broad phase,
//! SAT narrow phase, clipping, and contact types.

pub mod broadphase;
pub mod clipping;
pub mod contact;
pub mod narrowphase;
pub mod quadtree;

pub use broadphase::BroadPhase;
pub use contact::{ContactManifold, ContactPoint};
pub use narrowphase::NarrowPhase;
pub use quadtree::QuadTree;
