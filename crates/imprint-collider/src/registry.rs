//! Sparse collider registry.
//!
//! Colliders arrive through two independently wired arrays: the
//! collider meshes and their bounding boxes. Both are keyed by an
//! external [`SlotIndex`]. Slots are sparse; disconnecting a collider
//! leaves a hole and the remaining slots keep their numbers.
//!
//! Two pairing policies exist, one per deformer node:
//! - [`ColliderInputs::resolve_by_slot`] pairs by slot number and
//!   skips slots missing a partner.
//! - [`ColliderInputs::resolve_by_position`] pairs the i-th mesh with the
//!   i-th box and gives up when the counts differ.

use std::collections::{BTreeMap, BTreeSet};
use std::sync::Arc;

use imprint_math::Aabb;
use imprint_types::{ImprintError, ImprintResult, SlotIndex};

use crate::snapshot::ColliderMesh;

/// A resolved collider: snapshot plus the box used for culling.
#[derive(Debug, Clone)]
pub struct ColliderEntry {
    /// External slot this entry came from.
    pub slot: SlotIndex,
    /// Collider surface.
    pub mesh: Arc<ColliderMesh>,
    /// World-space culling box.
    pub bounds: Aabb,
}

impl ColliderEntry {
    /// Entry whose culling box is the snapshot's own tight bounds.
    pub fn from_mesh(slot: SlotIndex, mesh: Arc<ColliderMesh>) -> Self {
        let bounds = mesh.bounds();
        Self { slot, mesh, bounds }
    }
}

/// The deformer's collider inputs: two sparse, slot-keyed tables.
#[derive(Debug, Clone, Default)]
pub struct ColliderInputs {
    meshes: BTreeMap<SlotIndex, Arc<ColliderMesh>>,
    bounds: BTreeMap<SlotIndex, Aabb>,
}

impl ColliderInputs {
    pub fn new() -> Self {
        Self::default()
    }

    /// Wire a collider mesh and its box into `slot`, replacing anything there.
    pub fn connect(&mut self, slot: SlotIndex, mesh: Arc<ColliderMesh>, bounds: Aabb) {
        self.meshes.insert(slot, mesh);
        self.bounds.insert(slot, bounds);
    }

    /// Wire only the collider mesh into `slot`.
    pub fn connect_mesh(&mut self, slot: SlotIndex, mesh: Arc<ColliderMesh>) {
        self.meshes.insert(slot, mesh);
    }

    /// Wire only the bounding box into `slot`.
    pub fn connect_bounds(&mut self, slot: SlotIndex, bounds: Aabb) {
        self.bounds.insert(slot, bounds);
    }

    /// Wire a collider into the next free slot and return that slot.
    ///
    /// Fails only when every slot number is taken.
    pub fn append(&mut self, mesh: Arc<ColliderMesh>, bounds: Aabb) -> ImprintResult<SlotIndex> {
        let slot = self.next_free_slot().ok_or_else(|| {
            ImprintError::InvalidCollider("No free collider slot left".into())
        })?;
        self.connect(slot, mesh, bounds);
        Ok(slot)
    }

    /// One past the highest slot used by either table; slot 0 when empty.
    ///
    /// Once slot `u32::MAX` is taken, the lowest unused slot is handed out
    /// instead. Never returns a slot that is already connected.
    pub fn next_free_slot(&self) -> Option<SlotIndex> {
        let last_mesh = self.meshes.keys().next_back().copied();
        let last_bounds = self.bounds.keys().next_back().copied();
        match last_mesh.max(last_bounds) {
            Some(slot) => slot.next().or_else(|| self.lowest_free_slot()),
            None => Some(SlotIndex(0)),
        }
    }

    fn lowest_free_slot(&self) -> Option<SlotIndex> {
        let used: BTreeSet<SlotIndex> = self
            .meshes
            .keys()
            .chain(self.bounds.keys())
            .copied()
            .collect();
        let mut candidate = SlotIndex(0);
        for slot in used {
            if slot != candidate {
                return Some(candidate);
            }
            candidate = candidate.next()?;
        }
        Some(candidate)
    }

    /// Remove both the mesh and the box at `slot`.
    ///
    /// Returns true if anything was connected there.
    pub fn disconnect(&mut self, slot: SlotIndex) -> bool {
        let had_mesh = self.meshes.remove(&slot).is_some();
        let had_bounds = self.bounds.remove(&slot).is_some();
        had_mesh || had_bounds
    }

    /// Number of populated collider-mesh slots.
    pub fn mesh_count(&self) -> usize {
        self.meshes.len()
    }

    /// Number of populated bounding-box slots.
    pub fn bounds_count(&self) -> usize {
        self.bounds.len()
    }

    /// Returns true if neither table holds anything.
    pub fn is_empty(&self) -> bool {
        self.meshes.is_empty() && self.bounds.is_empty()
    }

    /// Populated collider-mesh slots, ascending.
    pub fn slots(&self) -> impl Iterator<Item = SlotIndex> + '_ {
        self.meshes.keys().copied()
    }

    /// Pair meshes and boxes by slot number, in ascending slot order.
    ///
    /// Returns nothing if either table is empty. A slot present in only
    /// one table is skipped.
    pub fn resolve_by_slot(&self) -> Vec<ColliderEntry> {
        if self.meshes.is_empty() || self.bounds.is_empty() {
            return Vec::new();
        }
        self.meshes
            .iter()
            .filter_map(|(&slot, mesh)| match self.bounds.get(&slot) {
                Some(&bounds) => Some(ColliderEntry {
                    slot,
                    mesh: Arc::clone(mesh),
                    bounds,
                }),
                None => {
                    tracing::trace!(%slot, "collider has no bounding box; skipped");
                    None
                }
            })
            .collect()
    }

    /// Pair the i-th populated mesh with the i-th populated box.
    ///
    /// Returns `None` when the two tables hold different counts.
    /// Entries carry the mesh's slot.
    pub fn resolve_by_position(&self) -> Option<Vec<ColliderEntry>> {
        if self.meshes.len() != self.bounds.len() {
            return None;
        }
        Some(
            self.meshes
                .iter()
                .zip(self.bounds.values())
                .map(|((&slot, mesh), &bounds)| ColliderEntry {
                    slot,
                    mesh: Arc::clone(mesh),
                    bounds,
                })
                .collect(),
        )
    }
}
