//! Scene validation.
//!
//! Validates scene inputs before a deformer receives them, catching
//! data-level errors early with clear diagnostics.

use std::collections::BTreeSet;

use imprint_collider::{cull, ColliderMesh};
use imprint_types::{ImprintError, ImprintResult};

use crate::contract::SceneInput;

/// Validates a complete scene.
///
/// Checks:
/// - Deforming mesh integrity (SoA consistency, valid indices)
/// - Weight array length matches the mesh
/// - Deformer settings are within attribute ranges
/// - Collider meshes are valid and non-empty
/// - Supplied boxes are non-empty and enclose the world-space collider
/// - Explicit collider slots are unique
/// - Ramp positions are finite
pub fn validate_scene(input: &SceneInput) -> ImprintResult<()> {
    input
        .mesh
        .validate()
        .map_err(|e| ImprintError::InvalidMesh(format!("Deforming mesh: {}", e)))?;

    if let Some(weights) = &input.weights {
        if weights.len() != input.mesh.vertex_count() {
            return Err(ImprintError::WeightMismatch {
                weights: weights.len(),
                vertices: input.mesh.vertex_count(),
            });
        }
        if weights.iter().any(|w| !w.is_finite()) {
            return Err(ImprintError::InvalidConfig(
                "Paint weights must be finite".into(),
            ));
        }
    }

    input.config.validate()?;

    let mut slots = BTreeSet::new();
    for (i, collider) in input.colliders.iter().enumerate() {
        collider
            .mesh
            .validate()
            .map_err(|e| ImprintError::InvalidCollider(format!("Collider {}: {}", i, e)))?;
        if collider.mesh.triangle_count() == 0 {
            return Err(ImprintError::InvalidCollider(format!(
                "Collider {} has no triangles",
                i
            )));
        }
        if let Some(bounds) = collider.bounds {
            if bounds.is_empty() {
                return Err(ImprintError::InvalidCollider(format!(
                    "Collider {} has an empty bounding box",
                    i
                )));
            }
            let snapshot = ColliderMesh::from_local(&collider.mesh, &collider.transform)?;
            if !cull::encloses(&bounds, &snapshot) {
                return Err(ImprintError::InvalidCollider(format!(
                    "Collider {} bounding box does not enclose its surface",
                    i
                )));
            }
        }
        if let Some(slot) = collider.slot {
            if !slots.insert(slot) {
                return Err(ImprintError::InvalidCollider(format!(
                    "Slot {} is used by more than one collider",
                    slot
                )));
            }
        }
    }

    if let Some(ramp) = &input.ramp {
        if ramp.iter().any(|p| !p.position.is_finite() || !p.value.is_finite()) {
            return Err(ImprintError::InvalidConfig(
                "Ramp entries must be finite".into(),
            ));
        }
    }

    Ok(())
}
