//! Bounding-box culling.
//!
//! A conservative pre-filter in front of the ray cast. A vertex inside
//! the box may still be outside the collider (the classifier sorts that
//! out), but a vertex outside the box is never inside the collider as
//! long as the box encloses the collider geometry.

use imprint_math::{Aabb, Vec3};

/// Inclusive point-in-box test.
#[inline]
pub fn contains(point: Vec3, bounds: &Aabb) -> bool {
    bounds.contains(point)
}

/// Returns true if `bounds` encloses every vertex of `snapshot`.
///
/// Boxes that fail this check can produce false negatives.
pub fn encloses(bounds: &Aabb, snapshot: &crate::snapshot::ColliderMesh) -> bool {
    let mesh = snapshot.mesh();
    (0..mesh.vertex_count()).all(|i| bounds.contains(mesh.position_vec3(i)))
}
