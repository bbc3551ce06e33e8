use std::collections::HashMap;

use glam::Vec2;
use log::warn;

use crate::collision::broadphase::BroadPhase;
use crate::collision::narrowphase::NarrowPhase;
use crate::config::DEFAULT_WORLD_EXTENT;
use crate::core::body::RigidBody;
use crate::core::types::RectBound;
use crate::dynamics::integrator::Integrator;
use crate::utils::logging::ScopedTimer;

/// Central simulation container: owns the bodies, orchestrates the
/// per-tick pipeline (broad phase → narrow phase → integration), and
/// exposes identifier-keyed access for external consumers.
///
/// Bodies iterate in insertion order, which fixes the broad-phase pair
/// order and therefore the sequential resolution order.
pub struct PhysicsWorld {
    ids: Vec<String>,
    bodies: Vec<RigidBody>,
    index: HashMap<String, usize>,
    broadphase: BroadPhase,
    integrator: Integrator,
    gravity: Vec2,
}

impl Default for PhysicsWorld {
    fn default() -> Self {
        Self::new(RectBound::centered(DEFAULT_WORLD_EXTENT))
    }
}

impl PhysicsWorld {
    pub fn new(bound: RectBound) -> Self {
        Self {
            ids: Vec::new(),
            bodies: Vec::new(),
            index: HashMap::new(),
            broadphase: BroadPhase::new(bound),
            integrator: Integrator,
            gravity: Vec2::ZERO,
        }
    }

    /// Uniform gravity applied as `gravity * mass` to every movable body at
    /// the head of each step. Defaults to zero; callers that drive forces
    /// manually never see it.
    pub fn set_gravity(&mut self, gravity: Vec2) {
        self.gravity = gravity;
    }

    pub fn gravity(&self) -> Vec2 {
        self.gravity
    }

    /// Inserts a body under `id`. A duplicate id replaces the existing body
    /// in place (last write wins), keeping its insertion slot.
    pub fn add_body(&mut self, id: &str, body: RigidBody) {
        if let Some(&slot) = self.index.get(id) {
            self.bodies[slot] = body;
            return;
        }
        self.index.insert(id.to_owned(), self.bodies.len());
        self.ids.push(id.to_owned());
        self.bodies.push(body);
    }

    /// Removes and returns the body under `id`. The vacated slot is back-
    /// filled by the last body (`swap_remove`), so removal reorders the
    /// iteration of the bodies inserted after it.
    pub fn remove_body(&mut self, id: &str) -> Option<RigidBody> {
        let slot = self.index.remove(id)?;
        let body = self.bodies.swap_remove(slot);
        self.ids.swap_remove(slot);
        if slot < self.bodies.len() {
            let moved = self.ids[slot].clone();
            self.index.insert(moved, slot);
        }
        Some(body)
    }

    pub fn get_body(&self, id: &str) -> Option<&RigidBody> {
        self.index.get(id).map(|&slot| &self.bodies[slot])
    }

    pub fn get_body_mut(&mut self, id: &str) -> Option<&mut RigidBody> {
        self.index.get(id).map(|&slot| &mut self.bodies[slot])
    }

    pub fn bodies(&self) -> &[RigidBody] {
        &self.bodies
    }

    pub fn ids(&self) -> impl Iterator<Item = &str> {
        self.ids.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.bodies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bodies.is_empty()
    }

    /// Advances the simulation by `dt` seconds and returns the tick's
    /// contact points for optional debug overlays.
    ///
    /// Resolution completes for every pair before integration begins, so
    /// all impulses see pre-integration velocities. A non-positive `dt` is
    /// malformed input and leaves the world untouched.
    pub fn step(&mut self, dt: f32) -> Vec<Vec2> {
        if dt <= 0.0 {
            warn!("step rejected: dt must be positive, got {dt}");
            return Vec::new();
        }

        self.apply_gravity();

        let pairs = {
            let _timer = ScopedTimer::new("broadphase");
            self.broadphase.potential_pairs(&self.bodies)
        };
        let contacts = {
            let _timer = ScopedTimer::new("narrowphase");
            NarrowPhase::process(&mut self.bodies, &pairs, true)
        };
        {
            let _timer = ScopedTimer::new("integrate");
            self.integrator.step(&mut self.bodies, dt);
        }
        contacts
    }

    /// Contact points for the current world state without resolving or
    /// advancing anything. Useful for debugging and tests.
    pub fn collect_contacts(&mut self) -> Vec<Vec2> {
        let pairs = self.broadphase.potential_pairs(&self.bodies);
        NarrowPhase::process(&mut self.bodies, &pairs, false)
    }

    fn apply_gravity(&mut self) {
        if self.gravity == Vec2::ZERO {
            return;
        }
        let gravity = self.gravity;
        for body in self.bodies.iter_mut() {
            if body.is_immovable() {
                continue;
            }
            let weight = gravity * body.mass;
            body.apply_force(weight);
        }
    }
}
