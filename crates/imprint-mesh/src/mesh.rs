//! Core triangle mesh type with SoA (Structure of Arrays) layout.
//!
//! The SoA layout stores each coordinate channel contiguously:
//! - `pos_x: [x0, x1, x2, ...]`
//! - `pos_y: [y0, y1, y2, ...]`
//! - `pos_z: [z0, z1, z2, ...]`

use imprint_math::{Mat4, Vec3};
use imprint_types::{ImprintError, ImprintResult};
use serde::{Deserialize, Serialize};

/// A triangle mesh stored in Structure-of-Arrays layout.
///
/// Triangle indices reference into the per-channel vertex arrays.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TriangleMesh {
    // --- Vertex data (SoA) ---
    /// X coordinates of all vertices.
    pub pos_x: Vec<f32>,
    /// Y coordinates of all vertices.
    pub pos_y: Vec<f32>,
    /// Z coordinates of all vertices.
    pub pos_z: Vec<f32>,

    /// X components of vertex normals.
    pub normal_x: Vec<f32>,
    /// Y components of vertex normals.
    pub normal_y: Vec<f32>,
    /// Z components of vertex normals.
    pub normal_z: Vec<f32>,

    // --- Triangle data ---
    /// Triangle indices, each triangle is [v0, v1, v2], counter-clockwise
    /// when seen from the side the face normal points to.
    /// Stored flat: `[t0v0, t0v1, t0v2, t1v0, t1v1, t1v2, ...]`
    pub indices: Vec<u32>,
}

impl TriangleMesh {
    /// Returns the number of vertices.
    #[inline]
    pub fn vertex_count(&self) -> usize {
        self.pos_x.len()
    }

    /// Returns the number of triangles.
    #[inline]
    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }

    /// Returns the position of vertex `i` as `[x, y, z]`.
    #[inline]
    pub fn position(&self, i: usize) -> [f32; 3] {
        [self.pos_x[i], self.pos_y[i], self.pos_z[i]]
    }

    /// Returns the position of vertex `i` as a `Vec3`.
    #[inline]
    pub fn position_vec3(&self, i: usize) -> Vec3 {
        Vec3::new(self.pos_x[i], self.pos_y[i], self.pos_z[i])
    }

    /// Returns the normal of vertex `i` as a `Vec3`.
    #[inline]
    pub fn normal_vec3(&self, i: usize) -> Vec3 {
        Vec3::new(self.normal_x[i], self.normal_y[i], self.normal_z[i])
    }

    /// Returns the three vertex indices of triangle `t`.
    #[inline]
    pub fn triangle(&self, t: usize) -> [u32; 3] {
        let base = t * 3;
        [self.indices[base], self.indices[base + 1], self.indices[base + 2]]
    }

    /// Returns the three corner positions of triangle `t`.
    #[inline]
    pub fn triangle_positions(&self, t: usize) -> [Vec3; 3] {
        let [a, b, c] = self.triangle(t);
        [
            self.position_vec3(a as usize),
            self.position_vec3(b as usize),
            self.position_vec3(c as usize),
        ]
    }

    /// Sets the position of vertex `i`.
    #[inline]
    pub fn set_position(&mut self, i: usize, p: Vec3) {
        self.pos_x[i] = p.x;
        self.pos_y[i] = p.y;
        self.pos_z[i] = p.z;
    }

    /// Gathers all positions into an AoS buffer.
    pub fn positions(&self) -> Vec<Vec3> {
        (0..self.vertex_count()).map(|i| self.position_vec3(i)).collect()
    }

    /// Gathers all vertex normals into an AoS buffer.
    pub fn normals(&self) -> Vec<Vec3> {
        (0..self.vertex_count()).map(|i| self.normal_vec3(i)).collect()
    }

    /// Overwrites all positions from an AoS buffer.
    pub fn set_positions(&mut self, points: &[Vec3]) -> ImprintResult<()> {
        if points.len() != self.vertex_count() {
            return Err(ImprintError::InvalidMesh(format!(
                "Point buffer length ({}) != vertex count ({})",
                points.len(),
                self.vertex_count()
            )));
        }
        for (i, &p) in points.iter().enumerate() {
            self.set_position(i, p);
        }
        Ok(())
    }

    /// Returns a copy with positions mapped through `matrix` and
    /// normals through its inverse transpose.
    pub fn transformed(&self, matrix: &Mat4) -> Self {
        let normal_matrix = matrix.inverse().transpose();
        let mut out = self.clone();
        for i in 0..self.vertex_count() {
            let p = matrix.transform_point3(self.position_vec3(i));
            out.set_position(i, p);

            let n = normal_matrix
                .transform_vector3(self.normal_vec3(i))
                .normalize_or_zero();
            out.normal_x[i] = n.x;
            out.normal_y[i] = n.y;
            out.normal_z[i] = n.z;
        }
        out
    }

    /// Creates an empty mesh with pre-allocated capacity.
    pub fn with_capacity(vertex_capacity: usize, triangle_capacity: usize) -> Self {
        Self {
            pos_x: Vec::with_capacity(vertex_capacity),
            pos_y: Vec::with_capacity(vertex_capacity),
            pos_z: Vec::with_capacity(vertex_capacity),
            normal_x: Vec::with_capacity(vertex_capacity),
            normal_y: Vec::with_capacity(vertex_capacity),
            normal_z: Vec::with_capacity(vertex_capacity),
            indices: Vec::with_capacity(triangle_capacity * 3),
        }
    }

    /// Validates mesh integrity.
    ///
    /// Checks:
    /// - All SoA arrays have the same length
    /// - Triangle indices are within bounds
    /// - No degenerate triangles (repeated vertex indices)
    pub fn validate(&self) -> ImprintResult<()> {
        let n = self.pos_x.len();

        if self.pos_y.len() != n || self.pos_z.len() != n {
            return Err(ImprintError::InvalidMesh(
                "Position arrays have inconsistent lengths".into(),
            ));
        }
        if self.normal_x.len() != n || self.normal_y.len() != n || self.normal_z.len() != n {
            return Err(ImprintError::InvalidMesh(
                "Normal arrays have inconsistent lengths".into(),
            ));
        }

        if self.indices.len() % 3 != 0 {
            return Err(ImprintError::InvalidMesh(
                "Index count is not divisible by 3".into(),
            ));
        }

        for (i, &idx) in self.indices.iter().enumerate() {
            if idx as usize >= n {
                return Err(ImprintError::InvalidMesh(format!(
                    "Index {} at position {} is out of range (vertex count: {})",
                    idx, i, n
                )));
            }
        }

        for t in 0..self.triangle_count() {
            let [a, b, c] = self.triangle(t);
            if a == b || b == c || a == c {
                return Err(ImprintError::InvalidMesh(format!(
                    "Triangle {} has repeated vertex indices: [{}, {}, {}]",
                    t, a, b, c
                )));
            }
        }

        Ok(())
    }

    /// Constructs a mesh from interleaved position data
    /// `[x0, y0, z0, x1, y1, z1, ...]`.
    ///
    /// Normals are left at zero; call
    /// [`compute_vertex_normals`](crate::normals::compute_vertex_normals)
    /// afterwards.
    pub fn from_interleaved(positions: &[f32], indices: &[u32]) -> ImprintResult<Self> {
        if positions.len() % 3 != 0 {
            return Err(ImprintError::InvalidMesh(
                "Interleaved positions length not divisible by 3".into(),
            ));
        }

        let n = positions.len() / 3;
        let mut mesh = Self::with_capacity(n, indices.len() / 3);

        for chunk in positions.chunks_exact(3) {
            mesh.pos_x.push(chunk[0]);
            mesh.pos_y.push(chunk[1]);
            mesh.pos_z.push(chunk[2]);
        }

        mesh.normal_x.resize(n, 0.0);
        mesh.normal_y.resize(n, 0.0);
        mesh.normal_z.resize(n, 0.0);

        mesh.indices = indices.to_vec();

        mesh.validate()?;
        Ok(mesh)
    }
}
