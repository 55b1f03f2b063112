//! Closest point on a triangle.

use glam::Vec3;

/// The part of a triangle a closest point lies on.
///
/// Edges are numbered by their first corner: `Edge(0)` is `v0-v1`,
/// `Edge(1)` is `v1-v2`, `Edge(2)` is `v2-v0`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TriangleFeature {
    Vertex(usize),
    Edge(usize),
    Face,
}

/// Compute the closest point on triangle `(v0, v1, v2)` to `point`.
pub fn closest_point_on_triangle(point: Vec3, v0: Vec3, v1: Vec3, v2: Vec3) -> Vec3 {
    closest_feature_on_triangle(point, v0, v1, v2).0
}

/// Closest point on triangle `(v0, v1, v2)` to `point`, with the feature
/// that owns it.
///
/// Implements the region classification from "Real-Time Collision
/// Detection" (Ericson): the query is tested against the three vertex
/// regions, the three edge regions, and finally the face interior.
pub fn closest_feature_on_triangle(
    point: Vec3,
    v0: Vec3,
    v1: Vec3,
    v2: Vec3,
) -> (Vec3, TriangleFeature) {
    let ab = v1 - v0;
    let ac = v2 - v0;
    let ap = point - v0;

    let d1 = ab.dot(ap);
    let d2 = ac.dot(ap);
    if d1 <= 0.0 && d2 <= 0.0 {
        return (v0, TriangleFeature::Vertex(0));
    }

    let bp = point - v1;
    let d3 = ab.dot(bp);
    let d4 = ac.dot(bp);
    if d3 >= 0.0 && d4 <= d3 {
        return (v1, TriangleFeature::Vertex(1));
    }

    let vc = d1 * d4 - d3 * d2;
    if vc <= 0.0 && d1 >= 0.0 && d3 <= 0.0 {
        let v = d1 / (d1 - d3);
        return (v0 + ab * v, TriangleFeature::Edge(0));
    }

    let cp = point - v2;
    let d5 = ab.dot(cp);
    let d6 = ac.dot(cp);
    if d6 >= 0.0 && d5 <= d6 {
        return (v2, TriangleFeature::Vertex(2));
    }

    let vb = d5 * d2 - d1 * d6;
    if vb <= 0.0 && d2 >= 0.0 && d6 <= 0.0 {
        let w = d2 / (d2 - d6);
        return (v0 + ac * w, TriangleFeature::Edge(2));
    }

    let va = d3 * d6 - d5 * d4;
    if va <= 0.0 && (d4 - d3) >= 0.0 && (d5 - d6) >= 0.0 {
        let w = (d4 - d3) / ((d4 - d3) + (d5 - d6));
        return (v1 + (v2 - v1) * w, TriangleFeature::Edge(1));
    }

    // Face interior
    let denom = 1.0 / (va + vb + vc);
    let v = vb * denom;
    let w = vc * denom;
    (v0 + ab * v + ac * w, TriangleFeature::Face)
}
