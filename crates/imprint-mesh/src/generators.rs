//! Procedural mesh generators for tests and benchmarks.
//!
//! All generators emit counter-clockwise winding with outward-facing
//! normals, which collider snapshots rely on for inside/outside tests.

use imprint_math::Vec3;

use crate::mesh::TriangleMesh;

fn push_vertex(mesh: &mut TriangleMesh, p: Vec3, n: Vec3) {
    mesh.pos_x.push(p.x);
    mesh.pos_y.push(p.y);
    mesh.pos_z.push(p.z);
    mesh.normal_x.push(n.x);
    mesh.normal_y.push(n.y);
    mesh.normal_z.push(n.z);
}

fn push_triangle(mesh: &mut TriangleMesh, a: u32, b: u32, c: u32) {
    mesh.indices.extend_from_slice(&[a, b, c]);
}

/// Generates a flat rectangular quad grid in the XY plane facing +Z.
///
/// The grid spans `[-width/2, width/2]` in X and `[-height/2, height/2]` in Y,
/// centered at the origin at Z=0.
///
/// # Example
/// ```
/// use imprint_mesh::generators::quad_grid;
/// let mesh = quad_grid(2, 2, 1.0, 1.0);
/// assert_eq!(mesh.vertex_count(), 9);  // 3×3 vertices
/// assert_eq!(mesh.triangle_count(), 8); // 2×2 quads × 2 tris each
/// ```
pub fn quad_grid(cols: usize, rows: usize, width: f32, height: f32) -> TriangleMesh {
    let verts_x = cols + 1;
    let verts_y = rows + 1;
    let mut mesh = TriangleMesh::with_capacity(verts_x * verts_y, cols * rows * 2);

    let half_w = width / 2.0;
    let half_h = height / 2.0;

    for j in 0..verts_y {
        for i in 0..verts_x {
            let u = i as f32 / cols as f32;
            let v = j as f32 / rows as f32;
            // Rows run top to bottom
            let p = Vec3::new(-half_w + u * width, half_h - v * height, 0.0);
            push_vertex(&mut mesh, p, Vec3::Z);
        }
    }

    for j in 0..rows {
        for i in 0..cols {
            let top_left = (j * verts_x + i) as u32;
            let top_right = top_left + 1;
            let bot_left = top_left + verts_x as u32;
            let bot_right = bot_left + 1;

            push_triangle(&mut mesh, top_left, bot_left, top_right);
            push_triangle(&mut mesh, top_right, bot_left, bot_right);
        }
    }

    mesh
}

/// Generates a closed UV sphere.
///
/// Poles are single vertices and the longitude seam is shared, so the
/// result has no boundary edges.
///
/// # Arguments
/// - `stacks`: Latitude divisions (at least 2).
/// - `slices`: Longitude divisions (at least 3).
pub fn uv_sphere(center: Vec3, radius: f32, stacks: usize, slices: usize) -> TriangleMesh {
    let stacks = stacks.max(2);
    let slices = slices.max(3);
    let ring_count = stacks - 1;
    let mut mesh = TriangleMesh::with_capacity(ring_count * slices + 2, stacks * slices * 2);

    push_vertex(&mut mesh, center + Vec3::Y * radius, Vec3::Y);
    for i in 1..stacks {
        let phi = std::f32::consts::PI * i as f32 / stacks as f32;
        for j in 0..slices {
            let theta = std::f32::consts::TAU * j as f32 / slices as f32;
            let n = Vec3::new(phi.sin() * theta.cos(), phi.cos(), phi.sin() * theta.sin());
            push_vertex(&mut mesh, center + n * radius, n);
        }
    }
    push_vertex(&mut mesh, center - Vec3::Y * radius, -Vec3::Y);

    let top = 0u32;
    let bottom = (ring_count * slices + 1) as u32;
    let ring = |i: usize, j: usize| (1 + i * slices + (j % slices)) as u32;

    for j in 0..slices {
        push_triangle(&mut mesh, top, ring(0, j + 1), ring(0, j));
    }
    for i in 0..ring_count - 1 {
        for j in 0..slices {
            let a = ring(i, j);
            let a_next = ring(i, j + 1);
            let b = ring(i + 1, j);
            let b_next = ring(i + 1, j + 1);
            push_triangle(&mut mesh, a, a_next, b);
            push_triangle(&mut mesh, a_next, b_next, b);
        }
    }
    for j in 0..slices {
        push_triangle(&mut mesh, ring(ring_count - 1, j), ring(ring_count - 1, j + 1), bottom);
    }

    mesh
}

/// Generates a closed axis-aligned box with 8 shared corners and 12 triangles.
///
/// Corner `k` sits at `center + half_extents * (±1, ±1, ±1)` with bit 0
/// selecting +X, bit 1 +Y, and bit 2 +Z. Vertex normals point along the
/// corner diagonals.
pub fn box_mesh(center: Vec3, half_extents: Vec3) -> TriangleMesh {
    let mut mesh = TriangleMesh::with_capacity(8, 12);

    for k in 0..8u32 {
        let sign = Vec3::new(
            if k & 1 != 0 { 1.0 } else { -1.0 },
            if k & 2 != 0 { 1.0 } else { -1.0 },
            if k & 4 != 0 { 1.0 } else { -1.0 },
        );
        push_vertex(&mut mesh, center + sign * half_extents, sign.normalize());
    }

    const FACES: [[u32; 3]; 12] = [
        // -Z
        [0, 2, 1],
        [1, 2, 3],
        // +Z
        [4, 5, 6],
        [5, 7, 6],
        // -Y
        [0, 1, 4],
        [1, 5, 4],
        // +Y
        [2, 6, 3],
        [3, 6, 7],
        // -X
        [0, 4, 2],
        [2, 4, 6],
        // +X
        [1, 3, 5],
        [3, 7, 5],
    ];
    for [a, b, c] in FACES {
        push_triangle(&mut mesh, a, b, c);
    }

    mesh
}
