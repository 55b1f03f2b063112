//! # imprint-collider
//!
//! Collider-side machinery for the collision deformers.
//!
//! Per evaluation the deformer walks three stages for every collider:
//! 1. **Registry**: Resolve sparse collider slots into (snapshot, bounding box) entries
//! 2. **Culling**: Reject vertices outside the collider's bounding box
//! 3. **Classification**: Ray cast along the vertex normal, then confirm
//!    penetration by comparing against the closest surface normal
//!
//! Displacement itself lives in `imprint-deform`; this crate only answers
//! geometric questions about colliders.

pub mod classify;
pub mod contact;
pub mod cull;
pub mod registry;
pub mod snapshot;

pub use classify::{classify_vertex, RayCastSettings};
pub use contact::{Classification, Penetration, RayHit, SurfaceSample};
pub use registry::{ColliderEntry, ColliderInputs};
pub use snapshot::ColliderMesh;
