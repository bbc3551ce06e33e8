use glam::Vec2;

use crate::collision::clipping::{self, Plane};
use crate::collision::contact::{ContactManifold, ContactPoint};
use crate::core::body::RigidBody;
use crate::dynamics::solver::ContactSolver;

/// Separating-axis narrow phase with reference/incident face clipping.
pub struct NarrowPhase;

impl NarrowPhase {
    /// Tests every candidate pair, optionally resolves penetrating ones, and
    /// returns the tick's contact points in world coordinates.
    ///
    /// Pairs where both bodies are immovable exchange no forces and are
    /// skipped outright.
    pub fn process(
        bodies: &mut [RigidBody],
        pairs: &[(usize, usize)],
        resolve: bool,
    ) -> Vec<Vec2> {
        let solver = ContactSolver::default();
        let mut contacts = Vec::new();

        for &(index_a, index_b) in pairs {
            if bodies[index_a].is_immovable() && bodies[index_b].is_immovable() {
                continue;
            }

            let manifold =
                match Self::test_pair(&bodies[index_a], &bodies[index_b], index_a, index_b) {
                    Some(manifold) => manifold,
                    None => continue,
                };

            if resolve {
                let (body_a, body_b) = pair_mut(bodies, index_a, index_b);
                solver.resolve(body_a, body_b, &manifold);
            }
            contacts.extend(manifold.points.iter().map(|point| point.position));
        }

        contacts
    }

    /// Full SAT test for one pair. Returns the contact manifold for
    /// penetrating pairs, `None` when a separating axis exists or clipping
    /// degenerates to zero contact points.
    pub fn test_pair(
        body_a: &RigidBody,
        body_b: &RigidBody,
        index_a: usize,
        index_b: usize,
    ) -> Option<ContactManifold> {
        let mut axes = body_a.collision_axes(body_b);
        axes.extend(body_b.collision_axes(body_a));

        let mut min_overlap = f32::MAX;
        let mut mtv = Vec2::X;
        for axis in axes {
            if axis == Vec2::ZERO {
                continue;
            }
            let overlap = body_a.project_onto(axis).overlap(&body_b.project_onto(axis));
            if overlap <= 0.0 {
                return None;
            }
            if overlap < min_overlap {
                min_overlap = overlap;
                mtv = axis;
            }
        }

        // Consistent resolution direction: MTV points from A toward B.
        if (body_b.position - body_a.position).dot(mtv) < 0.0 {
            mtv = -mtv;
        }

        let points = Self::build_manifold(body_a, body_b, mtv, min_overlap)?;
        Some(ContactManifold {
            body_a: index_a,
            body_b: index_b,
            normal: mtv,
            depth: min_overlap,
            points,
        })
    }

    /// Contact points for a penetrating pair. Circle-involving pairs yield
    /// exactly one point (the circle's extremal point along the axis);
    /// polygon pairs go through reference/incident face clipping.
    fn build_manifold(
        body_a: &RigidBody,
        body_b: &RigidBody,
        normal: Vec2,
        depth: f32,
    ) -> Option<Vec<ContactPoint>> {
        if body_a.shape.is_circle() {
            let position = body_a.significant_vertices(normal)[0];
            return Some(vec![ContactPoint { position, depth }]);
        }
        if body_b.shape.is_circle() {
            let position = body_b.significant_vertices(-normal)[0];
            return Some(vec![ContactPoint { position, depth }]);
        }
        Self::clip_polygon_pair(body_a, body_b, normal)
    }

    fn clip_polygon_pair(
        body_a: &RigidBody,
        body_b: &RigidBody,
        normal: Vec2,
    ) -> Option<Vec<ContactPoint>> {
        // Each shape's face is sought along its own facing direction.
        let facing_a = normal;
        let facing_b = -normal;

        // The reference face is the one more perpendicular to the MTV axis,
        // i.e. whose face normal deviates least from it.
        let alignment_a = body_a.significant_face_normal(facing_a).dot(facing_a);
        let alignment_b = body_b.significant_face_normal(facing_b).dot(facing_b);
        let (reference, incident, ref_facing, inc_facing) = if alignment_a >= alignment_b {
            (body_a, body_b, facing_a, facing_b)
        } else {
            (body_b, body_a, facing_b, facing_a)
        };

        let faces = reference.adjacent_faces(ref_facing);
        let [previous, face, next] = faces.as_slice() else {
            return None;
        };

        // Side planes at the reference edge's endpoints, shared with its two
        // adjacent faces, facing away from the edge along its tangent.
        let tangent = face.direction().normalize_or_zero();
        if tangent == Vec2::ZERO {
            return None;
        }
        let side_planes = [
            Plane::from_point_normal(previous.end, -tangent),
            Plane::from_point_normal(next.start, tangent),
        ];

        let incident_edge = incident.significant_vertices(inc_facing);
        let clipped = clipping::clip_segment(&incident_edge, &side_planes);

        // Survivors behind the reference face become contact points; their
        // signed distance behind the face is the penetration depth.
        let face_plane =
            Plane::from_point_normal(face.start, reference.significant_face_normal(ref_facing));
        let points: Vec<ContactPoint> = clipped
            .into_iter()
            .filter_map(|position| {
                let separation = face_plane.signed_distance(position);
                (separation <= 0.0).then_some(ContactPoint {
                    position,
                    depth: -separation,
                })
            })
            .collect();

        if points.is_empty() {
            None
        } else {
            Some(points)
        }
    }
}

/// Simultaneous mutable borrow of a canonical (low, high) body pair.
fn pair_mut(bodies: &mut [RigidBody], low: usize, high: usize) -> (&mut RigidBody, &mut RigidBody) {
    debug_assert!(low < high);
    let (left, right) = bodies.split_at_mut(high);
    (&mut left[low], &mut right[0])
}
