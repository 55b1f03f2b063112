//! Vertex normal computation from triangle mesh data.

use imprint_math::Vec3;
use serde::{Deserialize, Serialize};

use crate::mesh::TriangleMesh;

/// How adjacent face normals are combined into a vertex normal.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum NormalWeighting {
    /// Every adjacent face contributes its unit normal equally.
    /// This matches the host's non-angle-weighted vertex normals.
    #[default]
    Uniform,
    /// Faces contribute proportionally to their area.
    Area,
}

/// Per-vertex normals without touching the mesh.
///
/// Vertices with no adjacent non-degenerate face get a zero normal.
pub fn vertex_normals(mesh: &TriangleMesh, weighting: NormalWeighting) -> Vec<Vec3> {
    let mut acc = vec![Vec3::ZERO; mesh.vertex_count()];

    for t in 0..mesh.triangle_count() {
        let [a, b, c] = mesh.triangle(t);
        let [pa, pb, pc] = mesh.triangle_positions(t);

        // Magnitude = 2 × triangle area
        let face = (pb - pa).cross(pc - pa);
        let contribution = match weighting {
            NormalWeighting::Area => face,
            NormalWeighting::Uniform => face.normalize_or_zero(),
        };

        acc[a as usize] += contribution;
        acc[b as usize] += contribution;
        acc[c as usize] += contribution;
    }

    acc.into_iter().map(Vec3::normalize_or_zero).collect()
}

/// Recompute the mesh's stored vertex normals in place.
pub fn compute_vertex_normals(mesh: &mut TriangleMesh, weighting: NormalWeighting) {
    let normals = vertex_normals(mesh, weighting);
    for (i, n) in normals.into_iter().enumerate() {
        mesh.normal_x[i] = n.x;
        mesh.normal_y[i] = n.y;
        mesh.normal_z[i] = n.z;
    }
}

/// Unit face normal of triangle `t`, or zero for a degenerate triangle.
#[inline]
pub fn face_normal(mesh: &TriangleMesh, t: usize) -> Vec3 {
    let [pa, pb, pc] = mesh.triangle_positions(t);
    (pb - pa).cross(pc - pa).normalize_or_zero()
}
