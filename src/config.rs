//! Global tuning constants for the Impulse2D engine.

/// Gravitational acceleration used by the dry-friction threshold (m/s²).
pub const GRAVITY_ACCEL: f32 = 9.81;

/// Default integration timestep (in seconds).
pub const DEFAULT_TIME_STEP: f32 = 1.0 / 60.0;

/// Number of entries a quadtree leaf holds before splitting into quadrants.
pub const QUADTREE_NODE_CAPACITY: usize = 4;

/// Maximum quadtree subdivision depth; leaves at this depth never split.
pub const QUADTREE_MAX_DEPTH: u32 = 6;

/// Fixed per-tick decrement applied to angular velocity; remainders below
/// this snap straight to zero.
pub const ANGULAR_DAMPING_INCREMENT: f32 = 0.05;

/// Speeds below this count as "at rest" for the static-friction gate.
pub const REST_VELOCITY_EPSILON: f32 = 1e-4;

/// Side length of the default world bound, centered on the origin.
pub const DEFAULT_WORLD_EXTENT: f32 = 1000.0;
