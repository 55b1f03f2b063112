//! Read-only collider surface snapshots.
//!
//! A [`ColliderMesh`] is a world-space triangulated surface captured
//! from an upstream collider. It answers the two geometric queries the
//! classifier needs: all ray intersections, and closest point/normal.

use imprint_math::{
    closest_feature_on_triangle, ray_triangle_intersect, Aabb, Mat4, Ray, TriangleFeature, Vec3,
};
use imprint_mesh::normals::face_normal;
use imprint_mesh::{Topology, TriangleMesh};
use imprint_types::{ImprintError, ImprintResult, TriangleId};

use crate::contact::{RayHit, SurfaceSample};

/// World-space collider surface with per-triangle acceleration data.
///
/// Besides face normals, the snapshot keeps angle-weighted pseudo-normals
/// for every vertex and edge, so the normal reported at a closest point
/// on a shared edge or corner is the same whichever triangle owns it.
#[derive(Debug, Clone)]
pub struct ColliderMesh {
    mesh: TriangleMesh,
    face_normals: Vec<Vec3>,
    vertex_normals: Vec<Vec3>,
    /// Sorted `[v_min, v_max]` pairs, parallel to `edge_normals`.
    edges: Vec<[u32; 2]>,
    edge_normals: Vec<Vec3>,
    triangle_bounds: Vec<Aabb>,
    bounds: Aabb,
    closed: bool,
}

impl ColliderMesh {
    /// Capture a snapshot of a mesh already in world space.
    ///
    /// Fails on malformed meshes and meshes without triangles. Open
    /// surfaces are accepted with a warning: inside/outside answers are
    /// only meaningful near a closed surface.
    pub fn new(mesh: TriangleMesh) -> ImprintResult<Self> {
        mesh.validate()
            .map_err(|e| ImprintError::InvalidCollider(e.to_string()))?;
        if mesh.triangle_count() == 0 {
            return Err(ImprintError::InvalidCollider(
                "Collider mesh has no triangles".into(),
            ));
        }

        let tri_count = mesh.triangle_count();
        let face_normals: Vec<Vec3> = (0..tri_count).map(|t| face_normal(&mesh, t)).collect();
        let triangle_bounds: Vec<Aabb> = (0..tri_count)
            .map(|t| Aabb::from_points(mesh.triangle_positions(t)))
            .collect();
        let bounds = Aabb::from_points(mesh.positions());

        let topology = Topology::build(&mesh);
        let closed = topology.is_closed();
        if !closed {
            tracing::warn!(
                triangles = tri_count,
                "collider surface is open; inside tests may misclassify"
            );
        }

        let vertex_normals = angle_weighted_vertex_normals(&mesh, &topology, &face_normals);
        let edge_normals = topology
            .edge_triangles
            .iter()
            .map(|tris| {
                tris.iter()
                    .map(|&t| face_normals[t as usize])
                    .sum::<Vec3>()
                    .normalize_or_zero()
            })
            .collect();

        Ok(Self {
            mesh,
            face_normals,
            vertex_normals,
            edges: topology.edges,
            edge_normals,
            triangle_bounds,
            bounds,
            closed,
        })
    }

    /// Capture a snapshot of a mesh given in its own object space.
    pub fn from_local(mesh: &TriangleMesh, local_to_world: &Mat4) -> ImprintResult<Self> {
        Self::new(mesh.transformed(local_to_world))
    }

    /// The world-space surface.
    #[inline]
    pub fn mesh(&self) -> &TriangleMesh {
        &self.mesh
    }

    /// Tight world-space bounding box of the surface.
    #[inline]
    pub fn bounds(&self) -> Aabb {
        self.bounds
    }

    /// Returns true if the surface has no boundary edges.
    #[inline]
    pub fn is_closed(&self) -> bool {
        self.closed
    }

    #[inline]
    pub fn triangle_count(&self) -> usize {
        self.mesh.triangle_count()
    }

    /// Every intersection of `ray` with the surface, in triangle order.
    pub fn all_intersections(&self, ray: &Ray, max_param: f32, tolerance: f32) -> Vec<RayHit> {
        let mut hits = Vec::new();
        for t in 0..self.triangle_count() {
            let [a, b, c] = self.mesh.triangle_positions(t);
            if let Some(hit) = ray_triangle_intersect(ray, a, b, c, max_param, tolerance) {
                hits.push(RayHit {
                    point: ray.at(hit.t),
                    t: hit.t,
                    triangle: TriangleId(t as u32),
                });
            }
        }
        hits
    }

    /// Closest surface point to `p`, with the surface normal there.
    ///
    /// The normal is the face normal for face-interior points and the
    /// edge or vertex pseudo-normal otherwise. Degenerate triangles are
    /// ignored. On exact distance ties the lowest triangle index wins.
    pub fn closest_point(&self, p: Vec3) -> SurfaceSample {
        let mut best_d2 = f32::INFINITY;
        let mut best = SurfaceSample {
            point: p,
            normal: Vec3::ZERO,
            triangle: TriangleId(0),
            distance: f32::INFINITY,
        };

        for t in 0..self.triangle_count() {
            if self.face_normals[t] == Vec3::ZERO {
                continue;
            }
            // Box distance is a lower bound on triangle distance
            if self.triangle_bounds[t].distance_squared(p) >= best_d2 {
                continue;
            }
            let [a, b, c] = self.mesh.triangle_positions(t);
            let (q, feature) = closest_feature_on_triangle(p, a, b, c);
            let d2 = (p - q).length_squared();
            if d2 < best_d2 {
                best_d2 = d2;
                best = SurfaceSample {
                    point: q,
                    normal: self.feature_normal(t, feature),
                    triangle: TriangleId(t as u32),
                    distance: 0.0,
                };
            }
        }

        best.distance = best_d2.sqrt();
        best
    }

    /// Normal of one feature of triangle `t`.
    fn feature_normal(&self, t: usize, feature: TriangleFeature) -> Vec3 {
        let corners = self.mesh.triangle(t);
        let pseudo = match feature {
            TriangleFeature::Face => return self.face_normals[t],
            TriangleFeature::Vertex(i) => self.vertex_normals[corners[i] as usize],
            TriangleFeature::Edge(i) => {
                let (v0, v1) = (corners[i], corners[(i + 1) % 3]);
                let key = [v0.min(v1), v0.max(v1)];
                self.edges
                    .binary_search(&key)
                    .map_or(Vec3::ZERO, |e| self.edge_normals[e])
            }
        };
        // Cancelling normals (a zero-thickness fold) fall back to the face
        if pseudo == Vec3::ZERO {
            self.face_normals[t]
        } else {
            pseudo
        }
    }
}

/// Angle-weighted vertex normals (Bærentzen and Aanæs).
///
/// Each incident face contributes its normal scaled by the corner angle
/// at the vertex.
fn angle_weighted_vertex_normals(
    mesh: &TriangleMesh,
    topology: &Topology,
    face_normals: &[Vec3],
) -> Vec<Vec3> {
    topology
        .vertex_triangles
        .iter()
        .enumerate()
        .map(|(v, tris)| {
            tris.iter()
                .map(|&t| {
                    let t = t as usize;
                    if face_normals[t] == Vec3::ZERO {
                        return Vec3::ZERO;
                    }
                    let corners = mesh.triangle(t);
                    let positions = mesh.triangle_positions(t);
                    let Some(i) = corners.iter().position(|&c| c as usize == v) else {
                        return Vec3::ZERO;
                    };
                    let e1 = positions[(i + 1) % 3] - positions[i];
                    let e2 = positions[(i + 2) % 3] - positions[i];
                    face_normals[t] * e1.angle_between(e2)
                })
                .sum::<Vec3>()
                .normalize_or_zero()
        })
        .collect()
}
