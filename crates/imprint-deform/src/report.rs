//! Evaluation reports.
//!
//! Every successful evaluation returns an [`EvaluationReport`], including
//! the "nothing to do" ones, which carry a [`SkipReason`].

use std::fmt;

use imprint_telemetry::{DeformEvent, EventKind};
use imprint_types::SlotIndex;
use serde::{Deserialize, Serialize};

use crate::smooth::SmoothStats;

/// Why an evaluation left the geometry unchanged.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SkipReason {
    /// Envelope is exactly zero.
    EnvelopeZero,
    /// No collider could be paired with a bounding box.
    NoColliders,
    /// Position pairing needs as many boxes as meshes.
    CountMismatch { meshes: usize, bounds: usize },
}

impl fmt::Display for SkipReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SkipReason::EnvelopeZero => write!(f, "envelope is zero"),
            SkipReason::NoColliders => write!(f, "no connected colliders"),
            SkipReason::CountMismatch { meshes, bounds } => write!(
                f,
                "{meshes} collider meshes but {bounds} bounding boxes"
            ),
        }
    }
}

/// Per-collider outcome.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ColliderReport {
    pub slot: SlotIndex,
    pub candidates: usize,
    pub resolved: usize,
    pub bulged: usize,
    pub max_penetration: f32,
}

/// Outcome of one deformer evaluation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EvaluationReport {
    /// Node type name of the deformer that ran.
    pub node: String,
    pub vertex_count: usize,
    /// Set when the geometry was passed through unchanged.
    pub skipped: Option<SkipReason>,
    /// Colliders in evaluation order.
    pub colliders: Vec<ColliderReport>,
    pub smoothing: Option<SmoothStats>,
    /// The collision flag set, ascending.
    pub flagged: Vec<u32>,
    /// Wall-clock time (seconds).
    pub wall_time: f64,
}

impl EvaluationReport {
    /// An empty report for `node`.
    pub fn new(node: &str, vertex_count: usize) -> Self {
        Self {
            node: node.to_string(),
            vertex_count,
            skipped: None,
            colliders: Vec::new(),
            smoothing: None,
            flagged: Vec::new(),
            wall_time: 0.0,
        }
    }

    /// A pass-through report.
    pub fn skipped(node: &str, vertex_count: usize, reason: SkipReason) -> Self {
        Self {
            skipped: Some(reason),
            ..Self::new(node, vertex_count)
        }
    }

    #[inline]
    pub fn is_skipped(&self) -> bool {
        self.skipped.is_some()
    }

    /// Total vertices pushed out across all colliders.
    pub fn resolved_count(&self) -> usize {
        self.colliders.iter().map(|c| c.resolved).sum()
    }

    /// Total vertices bulged across all colliders.
    pub fn bulged_count(&self) -> usize {
        self.colliders.iter().map(|c| c.bulged).sum()
    }

    /// Deepest penetration over all colliders.
    pub fn max_penetration(&self) -> f32 {
        self.colliders
            .iter()
            .map(|c| c.max_penetration)
            .fold(0.0, f32::max)
    }

    /// The report as telemetry events for evaluation number `evaluation`.
    pub fn events(&self, evaluation: u64) -> Vec<DeformEvent> {
        let mut events = vec![DeformEvent::new(
            evaluation,
            EventKind::EvaluationBegin {
                node: self.node.clone(),
                vertex_count: self.vertex_count as u32,
                collider_count: self.colliders.len() as u32,
            },
        )];

        if let Some(reason) = self.skipped {
            events.push(DeformEvent::new(
                evaluation,
                EventKind::EvaluationSkipped {
                    reason: reason.to_string(),
                },
            ));
        }

        events.extend(self.colliders.iter().map(|c| {
            DeformEvent::new(
                evaluation,
                EventKind::ColliderPass {
                    slot: c.slot.0,
                    candidates: c.candidates as u32,
                    resolved: c.resolved as u32,
                    bulged: c.bulged as u32,
                    max_penetration: c.max_penetration,
                },
            )
        }));

        if let Some(smoothing) = &self.smoothing {
            events.push(DeformEvent::new(
                evaluation,
                EventKind::Smoothing {
                    iterations: smoothing.iterations,
                    vertices: smoothing.vertices as u32,
                },
            ));
        }

        events.push(DeformEvent::new(
            evaluation,
            EventKind::EvaluationEnd {
                flagged: self.flagged.len() as u32,
                wall_time: self.wall_time,
            },
        ));
        events
    }
}
