use crate::config::{QUADTREE_MAX_DEPTH, QUADTREE_NODE_CAPACITY};
use crate::core::types::{Aabb, RectBound};

/// Rebuildable quadtree over body AABBs, used purely for broad-phase pruning.
///
/// The tree is cleared and repopulated every tick; it stores body indices
/// plus the AABB they were inserted with and owns no body data.
#[derive(Debug)]
pub struct QuadTree {
    bound: RectBound,
    depth: u32,
    entries: Vec<(usize, Aabb)>,
    children: Option<Box<[QuadTree; 4]>>,
}

impl QuadTree {
    pub fn new(bound: RectBound) -> Self {
        Self::with_depth(bound, 0)
    }

    fn with_depth(bound: RectBound, depth: u32) -> Self {
        Self {
            bound,
            depth,
            entries: Vec::new(),
            children: None,
        }
    }

    pub fn bound(&self) -> &RectBound {
        &self.bound
    }

    /// Inserts a body index under its AABB. Returns `false` when the AABB
    /// does not intersect this node's bound; callers insert at the root
    /// whose bound covers the configured world extent.
    ///
    /// A body straddling a quadrant boundary is inserted into every child it
    /// touches.
    pub fn insert(&mut self, index: usize, aabb: Aabb) -> bool {
        if !self.bound.intersects(&aabb) {
            return false;
        }

        if let Some(children) = self.children.as_mut() {
            let mut inserted = false;
            for child in children.iter_mut() {
                inserted |= child.insert(index, aabb);
            }
            return inserted;
        }

        self.entries.push((index, aabb));
        if self.entries.len() > QUADTREE_NODE_CAPACITY && self.depth < QUADTREE_MAX_DEPTH {
            self.split();
        }
        true
    }

    fn split(&mut self) {
        let mut children = Box::new(
            self.bound
                .quadrants()
                .map(|quadrant| QuadTree::with_depth(quadrant, self.depth + 1)),
        );
        for (index, aabb) in self.entries.drain(..) {
            for child in children.iter_mut() {
                child.insert(index, aabb);
            }
        }
        self.children = Some(children);
    }

    /// Conservative candidate query: the union of all leaf contents whose
    /// stored AABB overlaps `aabb`, sorted and deduplicated. May contain
    /// false positives; never false negatives for inserted bodies.
    pub fn query(&self, aabb: &Aabb) -> Vec<usize> {
        let mut results = Vec::new();
        self.collect_into(aabb, &mut results);
        results.sort_unstable();
        results.dedup();
        results
    }

    fn collect_into(&self, aabb: &Aabb, results: &mut Vec<usize>) {
        if !self.bound.intersects(aabb) {
            return;
        }
        match &self.children {
            Some(children) => {
                for child in children.iter() {
                    child.collect_into(aabb, results);
                }
            }
            None => {
                results.extend(
                    self.entries
                        .iter()
                        .filter(|(_, entry)| entry.intersects(aabb))
                        .map(|(index, _)| *index),
                );
            }
        }
    }

    /// Drops all children and contents, returning to an empty leaf at the
    /// configured root bound.
    pub fn clear(&mut self) {
        self.entries.clear();
        self.children = None;
    }

    pub fn is_leaf(&self) -> bool {
        self.children.is_none()
    }
}
