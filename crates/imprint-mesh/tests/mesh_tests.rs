//! Integration tests for imprint-mesh.

use imprint_math::{Mat4, Vec3};
use imprint_mesh::generators::{box_mesh, quad_grid, uv_sphere};
use imprint_mesh::normals::{compute_vertex_normals, face_normal, vertex_normals};
use imprint_mesh::topology::Topology;
use imprint_mesh::{NormalWeighting, TriangleMesh};

// ─── TriangleMesh Tests ───────────────────────────────────────

fn make_single_triangle() -> TriangleMesh {
    TriangleMesh {
        pos_x: vec![0.0, 1.0, 0.0],
        pos_y: vec![0.0, 0.0, 1.0],
        pos_z: vec![0.0, 0.0, 0.0],
        normal_x: vec![0.0, 0.0, 0.0],
        normal_y: vec![0.0, 0.0, 0.0],
        normal_z: vec![1.0, 1.0, 1.0],
        indices: vec![0, 1, 2],
    }
}

#[test]
fn basic_counts() {
    let mesh = make_single_triangle();
    assert_eq!(mesh.vertex_count(), 3);
    assert_eq!(mesh.triangle_count(), 1);
}

#[test]
fn position_access() {
    let mesh = make_single_triangle();
    assert_eq!(mesh.position(1), [1.0, 0.0, 0.0]);
    assert_eq!(mesh.position_vec3(2), Vec3::new(0.0, 1.0, 0.0));
}

#[test]
fn validate_ok() {
    assert!(make_single_triangle().validate().is_ok());
}

#[test]
fn validate_catches_inconsistent_lengths() {
    let mut mesh = make_single_triangle();
    mesh.pos_y.push(99.0);
    assert!(mesh.validate().is_err());
}

#[test]
fn validate_catches_oob_index() {
    let mut mesh = make_single_triangle();
    mesh.indices[2] = 99;
    assert!(mesh.validate().is_err());
}

#[test]
fn validate_catches_degenerate() {
    let mut mesh = make_single_triangle();
    mesh.indices = vec![0, 0, 1];
    assert!(mesh.validate().is_err());
}

#[test]
fn from_interleaved() {
    let positions = vec![0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0, 1.0, 0.0];
    let mesh = TriangleMesh::from_interleaved(&positions, &[0, 1, 2]).unwrap();
    assert_eq!(mesh.vertex_count(), 3);
    assert_eq!(mesh.pos_x, vec![0.0, 1.0, 0.0]);
    assert_eq!(mesh.normal_z, vec![0.0, 0.0, 0.0]);
}

#[test]
fn set_positions_rejects_wrong_length() {
    let mut mesh = make_single_triangle();
    assert!(mesh.set_positions(&[Vec3::ZERO]).is_err());
    mesh.set_positions(&[Vec3::ONE; 3]).unwrap();
    assert_eq!(mesh.position(0), [1.0, 1.0, 1.0]);
}

#[test]
fn transformed_moves_points_and_keeps_normals_unit() {
    let mesh = make_single_triangle();
    let m = Mat4::from_translation(Vec3::new(0.0, 0.0, 5.0)) * Mat4::from_scale(Vec3::splat(2.0));
    let moved = mesh.transformed(&m);
    assert_eq!(moved.position_vec3(1), Vec3::new(2.0, 0.0, 5.0));
    assert!((moved.normal_vec3(0).length() - 1.0).abs() < 1e-6);
    assert!(moved.normal_vec3(0).z > 0.99);
}

// ─── Generator Tests ──────────────────────────────────────────

#[test]
fn quad_grid_2x2() {
    let mesh = quad_grid(2, 2, 1.0, 1.0);
    assert_eq!(mesh.vertex_count(), 9);
    assert_eq!(mesh.triangle_count(), 8);
    assert!(mesh.validate().is_ok());
}

#[test]
fn quad_grid_dimensions() {
    let mesh = quad_grid(4, 4, 2.0, 2.0);
    assert!((mesh.pos_x[0] - (-1.0)).abs() < 1e-6);
    assert!((mesh.pos_y[0] - 1.0).abs() < 1e-6);
    assert!((mesh.pos_x[4] - 1.0).abs() < 1e-6);
}

#[test]
fn quad_grid_winding_faces_plus_z() {
    let mesh = quad_grid(3, 3, 1.0, 1.0);
    for t in 0..mesh.triangle_count() {
        assert!(face_normal(&mesh, t).z > 0.99, "Triangle {} faces away", t);
    }
}

#[test]
fn uv_sphere_radius() {
    let center = Vec3::new(1.0, -2.0, 0.5);
    let mesh = uv_sphere(center, 2.5, 8, 16);
    assert!(mesh.validate().is_ok());
    assert_eq!(mesh.vertex_count(), 7 * 16 + 2);
    for i in 0..mesh.vertex_count() {
        let dist = (mesh.position_vec3(i) - center).length();
        assert!((dist - 2.5).abs() < 1e-4, "Vertex {} at distance {}", i, dist);
    }
}

#[test]
fn uv_sphere_faces_point_outward() {
    let mesh = uv_sphere(Vec3::ZERO, 1.0, 6, 12);
    for t in 0..mesh.triangle_count() {
        let [a, b, c] = mesh.triangle_positions(t);
        let centroid = (a + b + c) / 3.0;
        assert!(face_normal(&mesh, t).dot(centroid) > 0.0, "Triangle {} faces inward", t);
    }
}

#[test]
fn box_faces_point_outward() {
    let mesh = box_mesh(Vec3::ZERO, Vec3::splat(0.5));
    assert!(mesh.validate().is_ok());
    assert_eq!(mesh.vertex_count(), 8);
    assert_eq!(mesh.triangle_count(), 12);
    for t in 0..mesh.triangle_count() {
        let [a, b, c] = mesh.triangle_positions(t);
        let centroid = (a + b + c) / 3.0;
        let n = face_normal(&mesh, t);
        assert!(n.dot(centroid) > 0.0, "Triangle {} faces inward", t);
        // Each face normal is axis-aligned
        assert!((n.abs().max_element() - 1.0).abs() < 1e-6);
    }
}

// ─── Topology Tests ───────────────────────────────────────────

#[test]
fn topology_single_quad() {
    let mesh = quad_grid(1, 1, 1.0, 1.0);
    let topo = Topology::build(&mesh);
    assert_eq!(topo.edges.len(), 5);
    assert_eq!(topo.boundary_edge_count(), 4);
    assert!(!topo.is_closed());
}

#[test]
fn vertex_triangle_adjacency() {
    let mesh = quad_grid(2, 2, 1.0, 1.0);
    let topo = Topology::build(&mesh);
    assert_eq!(topo.vertex_triangles[4].len(), 6);
}

#[test]
fn neighbors_are_sorted_and_unique() {
    let mesh = quad_grid(2, 2, 1.0, 1.0);
    let topo = Topology::build(&mesh);
    assert_eq!(topo.vertex_count(), 9);
    assert_eq!(topo.neighbors(4), &[1, 2, 3, 5, 6, 7]);
    // Corner 0 touches only its quad: right neighbour and the one below
    assert_eq!(topo.neighbors(0), &[1, 3]);
}

#[test]
fn generated_solids_are_closed() {
    let sphere = uv_sphere(Vec3::ZERO, 1.0, 8, 16);
    assert!(Topology::build(&sphere).is_closed());

    let cube = box_mesh(Vec3::ZERO, Vec3::ONE);
    let topo = Topology::build(&cube);
    assert!(topo.is_closed());
    assert_eq!(topo.edges.len(), 18);
}

// ─── Normal Tests ─────────────────────────────────────────────

#[test]
fn flat_grid_normals() {
    let mut mesh = quad_grid(4, 4, 1.0, 1.0);
    compute_vertex_normals(&mut mesh, NormalWeighting::Uniform);
    for i in 0..mesh.vertex_count() {
        assert!(mesh.normal_x[i].abs() < 1e-5);
        assert!(mesh.normal_y[i].abs() < 1e-5);
        assert!(mesh.normal_z[i] > 0.99);
    }
}

#[test]
fn normals_are_unit_length() {
    let mesh = uv_sphere(Vec3::ZERO, 3.0, 10, 10);
    for weighting in [NormalWeighting::Uniform, NormalWeighting::Area] {
        for (i, n) in vertex_normals(&mesh, weighting).iter().enumerate() {
            assert!((n.length() - 1.0).abs() < 1e-5, "Normal at {} has length {}", i, n.length());
        }
    }
}

#[test]
fn sphere_normals_point_outward() {
    let mesh = uv_sphere(Vec3::ZERO, 1.0, 8, 16);
    let normals = vertex_normals(&mesh, NormalWeighting::Area);
    for (i, n) in normals.iter().enumerate() {
        let p = mesh.position_vec3(i);
        assert!(n.dot(p) > 0.9, "Vertex {} normal misaligned", i);
    }
}

#[test]
fn isolated_vertex_gets_zero_normal() {
    let mut mesh = make_single_triangle();
    mesh.pos_x.push(5.0);
    mesh.pos_y.push(5.0);
    mesh.pos_z.push(5.0);
    let normals = vertex_normals(&mesh, NormalWeighting::Uniform);
    assert_eq!(normals[3], Vec3::ZERO);
}
