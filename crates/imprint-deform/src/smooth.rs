//! Post-smoothing pass.
//!
//! Relaxes flagged vertices towards the average of their input-mesh
//! neighbours. Neighbour positions come from the pre-deformation points,
//! so repeated iterations converge on the input neighbourhood average.

use imprint_math::Vec3;
use imprint_types::constants::SMOOTH_STEP;
use serde::{Deserialize, Serialize};

use crate::context::DeformContext;
use crate::flags::CollisionFlags;

/// What the smoothing pass did.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SmoothStats {
    pub iterations: u32,
    /// Flagged vertices with at least one neighbour.
    pub vertices: usize,
    /// Largest `|current - neighbour average|` seen at the start of each iteration.
    pub max_offsets: Vec<f32>,
}

/// Run `iterations` rounds of neighbour averaging over `flags`.
pub fn smooth_flagged(
    ctx: &DeformContext<'_>,
    points: &mut [Vec3],
    flags: &CollisionFlags,
    iterations: u32,
    envelope: f32,
) -> SmoothStats {
    let input = &ctx.input().points;

    // Neighbour averages are fixed for the whole pass
    let targets: Vec<(usize, Vec3)> = flags
        .iter()
        .filter_map(|i| {
            let ring = ctx.neighbors(i);
            if ring.is_empty() {
                return None;
            }
            let sum: Vec3 = ring.iter().map(|&n| input[n as usize]).sum();
            Some((i, sum / ring.len() as f32))
        })
        .collect();

    let mut stats = SmoothStats {
        iterations,
        vertices: targets.len(),
        max_offsets: Vec::with_capacity(iterations as usize),
    };

    for _ in 0..iterations {
        let snapshot = points.to_vec();
        let mut max_offset = 0.0_f32;
        for &(i, average) in &targets {
            let current = snapshot[i];
            let offset = current - average;
            max_offset = max_offset.max(offset.length());
            points[i] = current - offset * SMOOTH_STEP * envelope;
        }
        stats.max_offsets.push(max_offset);
    }

    tracing::debug!(
        iterations,
        vertices = stats.vertices,
        "smoothing pass"
    );
    stats
}
