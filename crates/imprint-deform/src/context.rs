//! Evaluation context.
//!
//! Everything a deformer reads during one evaluation besides its own
//! configuration: the input geometry (points, normals, connectivity),
//! the local-to-world matrix and the paint weights. The point buffer
//! being rewritten is passed alongside, never stored here.

use imprint_math::{Mat3, Mat4, Vec3};
use imprint_mesh::normals::vertex_normals;
use imprint_mesh::{NormalWeighting, Topology, TriangleMesh};
use imprint_types::{ImprintError, ImprintResult};

use crate::weights::WeightSource;

/// Pre-deformation geometry: object-space points, vertex normals and
/// connectivity.
#[derive(Debug, Clone)]
pub struct InputGeometry {
    pub points: Vec<Vec3>,
    pub normals: Vec<Vec3>,
    pub topology: Topology,
}

impl InputGeometry {
    /// Capture a mesh as deformer input.
    ///
    /// Stored normals are used when every vertex has one; otherwise
    /// normals are recomputed from the faces.
    pub fn from_mesh(mesh: &TriangleMesh) -> ImprintResult<Self> {
        mesh.validate()?;
        let stored = mesh.normals();
        let normals = if stored.iter().all(|n| n.length_squared() > 0.0) {
            stored.into_iter().map(Vec3::normalize).collect()
        } else {
            vertex_normals(mesh, NormalWeighting::Uniform)
        };
        Ok(Self {
            points: mesh.positions(),
            normals,
            topology: Topology::build(mesh),
        })
    }

    #[inline]
    pub fn vertex_count(&self) -> usize {
        self.points.len()
    }
}

/// Read-only inputs of one evaluation.
pub struct DeformContext<'a> {
    geo_index: u32,
    local_to_world: Mat4,
    world_to_local: Mat4,
    normal_matrix: Mat3,
    input: &'a InputGeometry,
    weights: &'a dyn WeightSource,
}

impl<'a> DeformContext<'a> {
    /// Context for geometry 0 with an identity transform.
    pub fn new(input: &'a InputGeometry, weights: &'a dyn WeightSource) -> Self {
        Self {
            geo_index: 0,
            local_to_world: Mat4::IDENTITY,
            world_to_local: Mat4::IDENTITY,
            normal_matrix: Mat3::IDENTITY,
            input,
            weights,
        }
    }

    /// Set the geometry's local-to-world matrix.
    ///
    /// Fails on a singular matrix.
    pub fn with_matrix(mut self, local_to_world: Mat4) -> ImprintResult<Self> {
        let det = local_to_world.determinant();
        if det == 0.0 || !det.is_finite() {
            return Err(ImprintError::InvalidConfig(
                "local-to-world matrix is not invertible".into(),
            ));
        }
        self.local_to_world = local_to_world;
        self.world_to_local = local_to_world.inverse();
        self.normal_matrix = Mat3::from_mat4(self.world_to_local).transpose();
        Ok(self)
    }

    /// Set the host's geometry index, used to look up paint weights.
    pub fn with_geometry_index(mut self, geo_index: u32) -> Self {
        self.geo_index = geo_index;
        self
    }

    #[inline]
    pub fn geo_index(&self) -> u32 {
        self.geo_index
    }

    #[inline]
    pub fn local_to_world(&self) -> Mat4 {
        self.local_to_world
    }

    #[inline]
    pub fn input(&self) -> &InputGeometry {
        self.input
    }

    #[inline]
    pub fn vertex_count(&self) -> usize {
        self.input.vertex_count()
    }

    /// Neighbour ring of vertex `i` in the input connectivity.
    #[inline]
    pub fn neighbors(&self, i: usize) -> &[u32] {
        self.input.topology.neighbors(i)
    }

    /// Paint weight of vertex `i`.
    #[inline]
    pub fn weight(&self, i: usize) -> f32 {
        self.weights.weight(self.geo_index, i)
    }

    #[inline]
    pub fn to_world(&self, local: Vec3) -> Vec3 {
        self.local_to_world.transform_point3(local)
    }

    #[inline]
    pub fn to_local(&self, world: Vec3) -> Vec3 {
        self.world_to_local.transform_point3(world)
    }

    /// Input normal of vertex `i` in world space (inverse-transpose), normalised.
    #[inline]
    pub fn world_normal(&self, i: usize) -> Vec3 {
        (self.normal_matrix * self.input.normals[i]).normalize_or_zero()
    }

    /// Check that `points` and the weight map fit the input geometry.
    pub fn check_buffer(&self, points: &[Vec3]) -> ImprintResult<()> {
        let n = self.vertex_count();
        if self.input.normals.len() != n || self.input.topology.vertex_count() != n {
            return Err(ImprintError::InvalidMesh(format!(
                "Input geometry is inconsistent: {} points, {} normals, {} topology vertices",
                n,
                self.input.normals.len(),
                self.input.topology.vertex_count()
            )));
        }
        if points.len() != n {
            return Err(ImprintError::InvalidMesh(format!(
                "Point buffer length ({}) != vertex count ({})",
                points.len(),
                n
            )));
        }
        if let Some(stored) = self.weights.stored_len(self.geo_index) {
            if stored != n {
                return Err(ImprintError::WeightMismatch {
                    weights: stored,
                    vertices: n,
                });
            }
        }
        Ok(())
    }
}
