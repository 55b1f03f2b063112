//! Ray-intersection inside/outside classification.
//!
//! Two stages per candidate vertex:
//! 1. Cast a ray from the vertex along its normal. No hit means the
//!    vertex cannot be inside this collider.
//! 2. On a hit, find the closest surface point and normal. The vertex is
//!    inside when `dot(vertex - closest, normal) < 0`.
//!
//! A ray hit alone cannot tell "inside the collider" apart from "outside,
//! but facing the collider", hence the second stage.

use imprint_math::{Aabb, Ray, Vec3};
use imprint_types::constants::{RAY_MAX_PARAM, RAY_TOLERANCE};

use crate::contact::{Classification, Penetration};
use crate::cull;
use crate::snapshot::ColliderMesh;

/// Ray-cast parameters.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RayCastSettings {
    /// Largest accepted ray parameter.
    pub max_param: f32,
    /// Barycentric tolerance for ray/triangle hits.
    pub tolerance: f32,
}

impl Default for RayCastSettings {
    fn default() -> Self {
        Self {
            max_param: RAY_MAX_PARAM,
            tolerance: RAY_TOLERANCE,
        }
    }
}

/// Classify a world-space vertex against one collider.
///
/// `bounds` is the collider's culling box; `direction` is the vertex
/// normal in world space.
pub fn classify_vertex(
    point: Vec3,
    direction: Vec3,
    collider: &ColliderMesh,
    bounds: &Aabb,
    settings: &RayCastSettings,
) -> Classification {
    if !cull::contains(point, bounds) {
        return Classification::Culled;
    }

    let ray = Ray::new(point, direction);
    let hits = collider.all_intersections(&ray, settings.max_param, settings.tolerance);
    if hits.is_empty() {
        return Classification::NoHit;
    }

    let closest = collider.closest_point(point);
    let delta = point - closest.point;
    if delta.dot(closest.normal) < 0.0 {
        Classification::Inside(Penetration {
            closest_point: closest.point,
            closest_normal: closest.normal,
            delta,
            depth: closest.distance,
            ray_hits: hits.len(),
        })
    } else {
        Classification::FalseHit(closest)
    }
}
