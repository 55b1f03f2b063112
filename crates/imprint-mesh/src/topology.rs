//! Mesh topology queries.
//!
//! Builds adjacency data structures from the triangle index buffer.
//! The smoothing pass reads vertex neighbour rings from here; collider
//! snapshots use the boundary-edge count to flag open surfaces.

use std::collections::HashMap;

use crate::mesh::TriangleMesh;

/// Precomputed topology information for a triangle mesh.
///
/// Built once per input mesh. Connectivity never changes while points
/// are being deformed, so one `Topology` serves every evaluation.
#[derive(Debug, Clone)]
pub struct Topology {
    /// For each vertex, the list of triangles that contain it.
    pub vertex_triangles: Vec<Vec<u32>>,

    /// Unique edges as `[v_min, v_max]` pairs, sorted.
    pub edges: Vec<[u32; 2]>,

    /// For each edge, the adjacent triangles.
    /// Boundary edges have exactly 1 adjacent triangle.
    pub edge_triangles: Vec<Vec<u32>>,

    /// For each vertex, the edge-connected vertices in ascending order.
    pub vertex_neighbors: Vec<Vec<u32>>,
}

impl Topology {
    /// Build topology from a triangle mesh.
    pub fn build(mesh: &TriangleMesh) -> Self {
        let vertex_count = mesh.vertex_count();
        let tri_count = mesh.triangle_count();

        let mut vertex_triangles: Vec<Vec<u32>> = vec![Vec::new(); vertex_count];
        // Key: (min_vertex, max_vertex) to canonicalize edge direction
        let mut edge_map: HashMap<(u32, u32), Vec<u32>> = HashMap::new();

        for t in 0..tri_count {
            let [a, b, c] = mesh.triangle(t);
            vertex_triangles[a as usize].push(t as u32);
            vertex_triangles[b as usize].push(t as u32);
            vertex_triangles[c as usize].push(t as u32);

            for (v0, v1) in [(a, b), (b, c), (c, a)] {
                let key = if v0 < v1 { (v0, v1) } else { (v1, v0) };
                edge_map.entry(key).or_default().push(t as u32);
            }
        }

        let mut sorted: Vec<((u32, u32), Vec<u32>)> = edge_map.into_iter().collect();
        sorted.sort_unstable_by_key(|(key, _)| *key);

        let mut edges = Vec::with_capacity(sorted.len());
        let mut edge_triangles = Vec::with_capacity(sorted.len());
        let mut vertex_neighbors: Vec<Vec<u32>> = vec![Vec::new(); vertex_count];

        for ((v0, v1), tris) in sorted {
            edges.push([v0, v1]);
            edge_triangles.push(tris);
            vertex_neighbors[v0 as usize].push(v1);
            vertex_neighbors[v1 as usize].push(v0);
        }

        for ring in &mut vertex_neighbors {
            ring.sort_unstable();
        }

        Self {
            vertex_triangles,
            edges,
            edge_triangles,
            vertex_neighbors,
        }
    }

    /// Number of vertices covered by this topology.
    #[inline]
    pub fn vertex_count(&self) -> usize {
        self.vertex_neighbors.len()
    }

    /// Returns the vertices connected to `v` by an edge.
    #[inline]
    pub fn neighbors(&self, v: usize) -> &[u32] {
        &self.vertex_neighbors[v]
    }

    /// Returns the number of boundary edges (edges with only 1 adjacent triangle).
    pub fn boundary_edge_count(&self) -> usize {
        self.edge_triangles
            .iter()
            .filter(|tris| tris.len() == 1)
            .count()
    }

    /// Returns true if the mesh is closed (no boundary edges).
    pub fn is_closed(&self) -> bool {
        self.boundary_edge_count() == 0
    }
}
