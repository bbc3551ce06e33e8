use glam::Vec2;
use serde::{Deserialize, Serialize};

/// Axis-aligned bounding box, recomputed from a body's pose on every query.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Aabb {
    pub min: Vec2,
    pub max: Vec2,
}

impl Aabb {
    pub fn new(min: Vec2, max: Vec2) -> Self {
        Self { min, max }
    }

    /// Smallest box containing every point of the iterator.
    pub fn from_points<I: IntoIterator<Item = Vec2>>(points: I) -> Self {
        let mut min = Vec2::splat(f32::MAX);
        let mut max = Vec2::splat(f32::MIN);
        for point in points {
            min = min.min(point);
            max = max.max(point);
        }
        Self { min, max }
    }

    pub fn intersects(&self, other: &Aabb) -> bool {
        self.min.x <= other.max.x
            && self.max.x >= other.min.x
            && self.min.y <= other.max.y
            && self.max.y >= other.min.y
    }

    pub fn contains_point(&self, point: Vec2) -> bool {
        point.x >= self.min.x && point.x <= self.max.x && point.y >= self.min.y && point.y <= self.max.y
    }
}

/// Rectangular region covered by a quadtree node: min corner plus extents.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct RectBound {
    pub origin: Vec2,
    pub width: f32,
    pub height: f32,
}

impl RectBound {
    pub fn new(origin: Vec2, width: f32, height: f32) -> Self {
        Self {
            origin,
            width,
            height,
        }
    }

    /// Square bound of the given side length centered on the origin.
    pub fn centered(extent: f32) -> Self {
        Self::new(Vec2::splat(-extent * 0.5), extent, extent)
    }

    pub fn max_corner(&self) -> Vec2 {
        self.origin + Vec2::new(self.width, self.height)
    }

    pub fn intersects(&self, aabb: &Aabb) -> bool {
        let max = self.max_corner();
        self.origin.x <= aabb.max.x
            && max.x >= aabb.min.x
            && self.origin.y <= aabb.max.y
            && max.y >= aabb.min.y
    }

    /// The four equal quadrants of this bound, in (min-x min-y, max-x min-y,
    /// min-x max-y, max-x max-y) order.
    pub fn quadrants(&self) -> [RectBound; 4] {
        let half_w = self.width * 0.5;
        let half_h = self.height * 0.5;
        [
            RectBound::new(self.origin, half_w, half_h),
            RectBound::new(self.origin + Vec2::new(half_w, 0.0), half_w, half_h),
            RectBound::new(self.origin + Vec2::new(0.0, half_h), half_w, half_h),
            RectBound::new(self.origin + Vec2::new(half_w, half_h), half_w, half_h),
        ]
    }
}

/// Scalar projection interval of a shape onto a unit axis.
#[derive(Debug, Clone, Copy)]
pub struct Projection {
    pub min: f32,
    pub max: f32,
}

impl Projection {
    /// Overlap width of the two intervals; non-positive when separated.
    pub fn overlap(&self, other: &Projection) -> f32 {
        self.max.min(other.max) - self.min.max(other.min)
    }
}

/// A world-space polygon edge with the index of its starting vertex.
#[derive(Debug, Clone, Copy)]
pub struct Face {
    pub start: Vec2,
    pub end: Vec2,
    pub index: usize,
}

impl Face {
    pub fn direction(&self) -> Vec2 {
        self.end - self.start
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn aabb_intersection_is_inclusive_at_edges() {
        let a = Aabb::new(Vec2::ZERO, Vec2::ONE);
        let b = Aabb::new(Vec2::ONE, Vec2::splat(2.0));
        let c = Aabb::new(Vec2::splat(1.1), Vec2::splat(2.0));
        assert!(a.intersects(&b));
        assert!(!a.intersects(&c));
    }

    #[test]
    fn quadrants_tile_the_bound() {
        let bound = RectBound::new(Vec2::new(-2.0, -2.0), 4.0, 4.0);
        let quadrants = bound.quadrants();
        for quadrant in &quadrants {
            assert!((quadrant.width - 2.0).abs() < 1e-6);
            assert!((quadrant.height - 2.0).abs() < 1e-6);
        }
        assert_eq!(quadrants[3].max_corner(), bound.max_corner());
    }

    #[test]
    fn projection_overlap_sign() {
        let a = Projection { min: 0.0, max: 2.0 };
        let b = Projection { min: 1.5, max: 3.0 };
        let c = Projection { min: 2.5, max: 3.0 };
        assert!(a.overlap(&b) > 0.0);
        assert!(a.overlap(&c) < 0.0);
    }
}
