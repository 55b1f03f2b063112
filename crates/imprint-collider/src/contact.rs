//! Contact data types produced by collider queries.

use imprint_math::Vec3;
use imprint_types::TriangleId;
use serde::{Deserialize, Serialize};

/// One ray/collider intersection.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RayHit {
    /// Hit position in world space.
    pub point: Vec3,
    /// Ray parameter at the hit.
    pub t: f32,
    /// Collider triangle that was hit.
    pub triangle: TriangleId,
}

/// Closest point on a collider surface to a query position.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SurfaceSample {
    /// Closest surface point in world space.
    pub point: Vec3,
    /// Unit surface normal at `point`: the face normal inside a triangle,
    /// the angle-weighted pseudo-normal on an edge or vertex.
    pub normal: Vec3,
    /// Triangle owning `point`.
    pub triangle: TriangleId,
    /// Distance from the query position to `point`.
    pub distance: f32,
}

/// A vertex confirmed to be inside a collider.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Penetration {
    /// Closest point on the collider surface.
    pub closest_point: Vec3,
    /// Surface normal at `closest_point`.
    pub closest_normal: Vec3,
    /// `vertex - closest_point`. Points into the collider.
    pub delta: Vec3,
    /// Length of `delta`.
    pub depth: f32,
    /// Number of ray hits that made this vertex a candidate.
    pub ray_hits: usize,
}

/// Outcome of testing one vertex against one collider.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Classification {
    /// Outside the bounding box; no geometric query was made.
    Culled,
    /// The normal ray never reached the collider.
    NoHit,
    /// The ray hit, but the closest-normal test says the vertex is outside.
    FalseHit(SurfaceSample),
    /// Confirmed penetration.
    Inside(Penetration),
}

impl Classification {
    /// Returns the penetration if the vertex is inside.
    pub fn penetration(&self) -> Option<&Penetration> {
        match self {
            Classification::Inside(p) => Some(p),
            _ => None,
        }
    }
}
