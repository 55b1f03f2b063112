//! Direct collision pass.
//!
//! Walks every weighted vertex against one collider: cull by box, ray
//! cast along the input normal, confirm with the closest-normal test,
//! then push the vertex back onto the collider surface.

use imprint_collider::{classify_vertex, Classification, ColliderEntry, RayCastSettings};
use imprint_math::Vec3;

use crate::context::DeformContext;
use crate::flags::CollisionFlags;

/// Per-collider counts from the direct pass.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct DirectPassStats {
    /// Weighted vertices inside the collider's box.
    pub candidates: usize,
    /// Vertices confirmed inside and displaced.
    pub resolved: usize,
    /// Deepest penetration among resolved vertices (world units).
    pub max_penetration: f32,
}

/// Resolve every vertex penetrating `collider`.
///
/// `points` is the local-space buffer left by earlier colliders; each
/// displaced vertex is written back in local space and flagged.
pub fn resolve_collider(
    ctx: &DeformContext<'_>,
    collider: &ColliderEntry,
    points: &mut [Vec3],
    flags: &mut CollisionFlags,
    envelope: f32,
    settings: &RayCastSettings,
) -> DirectPassStats {
    let mut stats = DirectPassStats::default();

    for (i, point) in points.iter_mut().enumerate() {
        let weight = ctx.weight(i);
        if weight <= 0.0 {
            continue;
        }

        let world = ctx.to_world(*point);
        let direction = ctx.world_normal(i);
        let classification =
            classify_vertex(world, direction, &collider.mesh, &collider.bounds, settings);

        if classification != Classification::Culled {
            stats.candidates += 1;
        }
        let Some(penetration) = classification.penetration() else {
            continue;
        };

        let end = world - penetration.delta * weight * envelope;
        *point = ctx.to_local(end);
        flags.insert(i);

        stats.resolved += 1;
        stats.max_penetration = stats.max_penetration.max(penetration.depth);
    }

    tracing::trace!(
        slot = %collider.slot,
        candidates = stats.candidates,
        resolved = stats.resolved,
        max_penetration = stats.max_penetration,
        "direct pass"
    );
    stats
}
