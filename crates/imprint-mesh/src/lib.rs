//! # imprint-mesh
//!
//! Triangle mesh representation with Structure-of-Arrays (SoA) layout,
//! used both for the deforming geometry and for collider snapshots.
//!
//! ## Key Types
//!
//! - [`TriangleMesh`]: Positions, vertex normals, and triangle indices
//!   in contiguous SoA buffers.
//! - [`Topology`]: Adjacency queries (vertex neighbours, vertex-to-triangle,
//!   edges, boundary detection).
//! - Procedural generators for tests and benchmarks (grids, spheres, boxes).

pub mod generators;
pub mod mesh;
pub mod normals;
pub mod topology;

pub use mesh::TriangleMesh;
pub use normals::NormalWeighting;
pub use topology::Topology;
