use std::collections::HashSet;

use log::warn;

use crate::collision::quadtree::QuadTree;
use crate::core::body::RigidBody;
use crate::core::types::{Aabb, RectBound};

/// Broad phase driver: rebuilds the quadtree from current AABBs each tick
/// and returns deduplicated candidate pairs.
pub struct BroadPhase {
    tree: QuadTree,
}

impl BroadPhase {
    pub fn new(bound: RectBound) -> Self {
        Self {
            tree: QuadTree::new(bound),
        }
    }

    pub fn tree(&self) -> &QuadTree {
        &self.tree
    }

    /// Candidate pairs whose AABBs actually overlap, each emitted exactly
    /// once in canonical `(low index, high index)` form. Pair order follows
    /// body insertion order, which fixes the resolution order downstream.
    pub fn potential_pairs(&mut self, bodies: &[RigidBody]) -> Vec<(usize, usize)> {
        self.tree.clear();

        let aabbs: Vec<Aabb> = bodies.iter().map(RigidBody::aabb).collect();
        for (index, aabb) in aabbs.iter().enumerate() {
            if !self.tree.insert(index, *aabb) {
                warn!("body {index} lies outside the world bound; skipped by broad phase");
            }
        }

        let mut pairs = Vec::new();
        let mut checked = HashSet::new();
        for (index, aabb) in aabbs.iter().enumerate() {
            for candidate in self.tree.query(aabb) {
                if candidate == index || !aabbs[candidate].intersects(aabb) {
                    continue;
                }
                let key = if index < candidate {
                    (index, candidate)
                } else {
                    (candidate, index)
                };
                if checked.insert(key) {
                    pairs.push(key);
                }
            }
        }
        pairs
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::shape::Shape;
    use glam::Vec2;

    fn world_bound() -> RectBound {
        RectBound::new(Vec2::new(-50.0, -50.0), 100.0, 100.0)
    }

    fn circle_at(x: f32, y: f32) -> RigidBody {
        RigidBody::new(Shape::circle(1.0).unwrap(), Vec2::new(x, y), 1.0)
    }

    #[test]
    fn empty_body_list_yields_no_pairs() {
        let mut broadphase = BroadPhase::new(world_bound());
        assert!(broadphase.potential_pairs(&[]).is_empty());
    }

    #[test]
    fn overlapping_bodies_pair_exactly_once() {
        let mut broadphase = BroadPhase::new(world_bound());
        let bodies = vec![circle_at(0.0, 0.0), circle_at(1.5, 0.0), circle_at(30.0, 30.0)];
        let pairs = broadphase.potential_pairs(&bodies);
        assert_eq!(pairs, vec![(0, 1)]);
    }

    #[test]
    fn aabb_separated_bodies_never_pair() {
        let mut broadphase = BroadPhase::new(world_bound());
        let bodies = vec![circle_at(-10.0, 0.0), circle_at(10.0, 0.0)];
        assert!(broadphase.potential_pairs(&bodies).is_empty());
    }
}
