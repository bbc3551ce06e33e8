use glam::Vec2;

const EPSILON: f32 = 1e-4;

/// A 2D half-plane in point-normal form. Points with positive signed
/// distance lie outside (on the normal side).
#[derive(Debug, Clone, Copy)]
pub struct Plane {
    normal: Vec2,
    distance: f32,
}

impl Plane {
    pub fn from_point_normal(point: Vec2, normal: Vec2) -> Self {
        let n = normal.normalize_or_zero();
        Self {
            normal: n,
            distance: n.dot(point),
        }
    }

    pub fn signed_distance(&self, point: Vec2) -> f32 {
        self.normal.dot(point) - self.distance
    }
}

/// Clips an open polyline (in practice the two-point incident edge) against
/// a set of half-planes, keeping the region behind each plane.
pub fn clip_segment(points: &[Vec2], planes: &[Plane]) -> Vec<Vec2> {
    let mut output = points.to_vec();
    for plane in planes {
        output = clip_against_plane(&output, *plane);
        if output.is_empty() {
            break;
        }
    }
    output
}

fn clip_against_plane(points: &[Vec2], plane: Plane) -> Vec<Vec2> {
    let mut clipped = Vec::with_capacity(points.len());
    for (i, &current) in points.iter().enumerate() {
        let current_dist = plane.signed_distance(current);
        if current_dist <= EPSILON {
            clipped.push(current);
        }
        if let Some(&next) = points.get(i + 1) {
            let next_dist = plane.signed_distance(next);
            let crosses = (current_dist > EPSILON) != (next_dist > EPSILON);
            if crosses {
                if let Some(intersection) =
                    line_plane_intersection(current, next, current_dist, next_dist)
                {
                    clipped.push(intersection);
                }
            }
        }
    }
    clipped
}

fn line_plane_intersection(start: Vec2, end: Vec2, start_dist: f32, end_dist: f32) -> Option<Vec2> {
    let denom = start_dist - end_dist;
    if denom.abs() <= EPSILON {
        return None;
    }
    let t = start_dist / denom;
    Some(start + (end - start) * t)
}
