//! Deform event types.
//!
//! Structured events emitted around each deformer evaluation. Events
//! are lightweight value types that carry just enough data to be
//! useful for monitoring and debugging.

use serde::{Deserialize, Serialize};

/// A deformer event.
///
/// Events are tagged with an evaluation counter and carry pass-specific data.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DeformEvent {
    /// Evaluation number (0-indexed, caller-assigned).
    pub evaluation: u64,
    /// Event payload.
    pub kind: EventKind,
}

/// Event payload variants.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum EventKind {
    /// Evaluation started.
    EvaluationBegin {
        /// Node type name of the deformer.
        node: String,
        /// Vertices in the deforming geometry.
        vertex_count: u32,
        /// Colliders resolved for this evaluation.
        collider_count: u32,
    },

    /// One collider finished its direct and bulge passes.
    ColliderPass {
        /// External slot of the collider.
        slot: u32,
        /// Vertices inside the collider's bounding box.
        candidates: u32,
        /// Vertices confirmed inside and pushed out.
        resolved: u32,
        /// Vertices displaced by the bulge pass.
        bulged: u32,
        /// Deepest penetration seen for this collider.
        max_penetration: f32,
    },

    /// Post-smoothing completed.
    Smoothing {
        /// Iterations run.
        iterations: u32,
        /// Flagged vertices smoothed per iteration.
        vertices: u32,
    },

    /// Evaluation returned the geometry unchanged.
    EvaluationSkipped {
        /// Why nothing was done.
        reason: String,
    },

    /// Evaluation completed.
    EvaluationEnd {
        /// Size of the collision flag set.
        flagged: u32,
        /// Wall-clock time for the evaluation (seconds).
        wall_time: f64,
    },

    /// Custom event for extensibility.
    Custom {
        /// Arbitrary label.
        label: String,
        /// JSON-encoded payload.
        payload: String,
    },
}

impl DeformEvent {
    /// Creates a new event for the given evaluation.
    pub fn new(evaluation: u64, kind: EventKind) -> Self {
        Self { evaluation, kind }
    }

    /// Short, stable name of the event kind.
    pub fn kind_name(&self) -> &'static str {
        match self.kind {
            EventKind::EvaluationBegin { .. } => "evaluation_begin",
            EventKind::ColliderPass { .. } => "collider_pass",
            EventKind::Smoothing { .. } => "smoothing",
            EventKind::EvaluationSkipped { .. } => "evaluation_skipped",
            EventKind::EvaluationEnd { .. } => "evaluation_end",
            EventKind::Custom { .. } => "custom",
        }
    }
}
