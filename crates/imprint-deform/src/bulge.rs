//! Bulge pass.
//!
//! Pushes vertices that did not collide outward along their normal when
//! they lie within `bulge_distance` of the collider surface, producing
//! a ripple around the contact footprint. The magnitude is keyed to the
//! collider's deepest penetration, shaped by the falloff ramp.

use imprint_collider::ColliderEntry;
use imprint_math::Vec3;

use crate::config::DeformerConfig;
use crate::context::DeformContext;
use crate::flags::CollisionFlags;
use crate::ramp::BulgeRamp;

/// Bulge every unflagged vertex near `collider`.
///
/// Does nothing unless `max_penetration` is nonzero and the config has
/// both a bulge distance and a strength. Returns the number of
/// vertices displaced; each of them is added to `flags`.
pub fn bulge_collider(
    ctx: &DeformContext<'_>,
    collider: &ColliderEntry,
    points: &mut [Vec3],
    flags: &mut CollisionFlags,
    config: &DeformerConfig,
    ramp: &BulgeRamp,
    max_penetration: f32,
) -> usize {
    if max_penetration == 0.0 || !config.bulge_enabled() {
        return 0;
    }

    let reach = config.bulge_distance;
    let reach_sq = reach * reach;
    let surface_bounds = collider.mesh.bounds();
    let mut bulged = 0;

    for (i, point) in points.iter_mut().enumerate() {
        if flags.contains(i) {
            continue;
        }
        let weight = ctx.weight(i);
        if weight <= 0.0 {
            continue;
        }

        let world = ctx.to_world(*point);
        if surface_bounds.distance_squared(world) >= reach_sq {
            continue;
        }
        let distance = collider.mesh.closest_point(world).distance;
        if distance >= reach {
            continue;
        }

        let t = distance / reach;
        let magnitude = max_penetration
            * (1.0 - t)
            * ramp.value_at(t)
            * config.bulge_strength
            * weight
            * config.envelope;
        let end = world + ctx.world_normal(i) * magnitude;
        *point = ctx.to_local(end);
        flags.insert(i);
        bulged += 1;
    }

    tracing::trace!(slot = %collider.slot, bulged, max_penetration, "bulge pass");
    bulged
}
