//! Rays and ray/triangle intersection.

use glam::Vec3;

/// A half-line `origin + t * direction`, `t >= 0`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ray {
    pub origin: Vec3,
    /// Need not be normalized; `t` is measured in units of its length.
    pub direction: Vec3,
}

impl Ray {
    pub fn new(origin: Vec3, direction: Vec3) -> Self {
        Self { origin, direction }
    }

    /// Point at parameter `t`.
    #[inline]
    pub fn at(&self, t: f32) -> Vec3 {
        self.origin + self.direction * t
    }
}

/// Intersection of a ray with a single triangle.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TriangleHit {
    /// Ray parameter of the hit.
    pub t: f32,
    /// Barycentric weight of the second vertex.
    pub u: f32,
    /// Barycentric weight of the third vertex.
    pub v: f32,
}

/// Test a ray against triangle `(v0, v1, v2)`.
///
/// Uses the Möller–Trumbore algorithm. `tolerance` widens the
/// barycentric acceptance region so rays grazing a shared edge
/// still register a hit. Hits with `t` outside `[0, max_param]`
/// are rejected, as are rays parallel to the triangle plane.
pub fn ray_triangle_intersect(
    ray: &Ray,
    v0: Vec3,
    v1: Vec3,
    v2: Vec3,
    max_param: f32,
    tolerance: f32,
) -> Option<TriangleHit> {
    const PARALLEL_EPSILON: f32 = 1e-10;

    let edge1 = v1 - v0;
    let edge2 = v2 - v0;

    let h = ray.direction.cross(edge2);
    let a = edge1.dot(h);

    if a.abs() < PARALLEL_EPSILON {
        return None;
    }

    let f = 1.0 / a;
    let s = ray.origin - v0;
    let u = f * s.dot(h);
    if u < -tolerance || u > 1.0 + tolerance {
        return None;
    }

    let q = s.cross(edge1);
    let v = f * ray.direction.dot(q);
    if v < -tolerance || u + v > 1.0 + tolerance {
        return None;
    }

    let t = f * edge2.dot(q);
    if !(0.0..=max_param).contains(&t) {
        return None;
    }

    Some(TriangleHit { t, u, v })
}
