//! Evaluation snapshot serialization.
//!
//! A snapshot captures the deformed points and the collision flag set
//! of one evaluation, for replay and diff-based debugging.

use std::path::Path;

use imprint_deform::EvaluationReport;
use imprint_math::Vec3;
use imprint_types::{ImprintError, ImprintResult};
use serde::{Deserialize, Serialize};

/// Deformed state after one evaluation.
///
/// Serialized with `bincode` for compact binary output.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EvaluationSnapshot {
    /// Evaluation counter when this snapshot was taken.
    pub evaluation: u64,
    /// Node type name of the deformer.
    pub node: String,
    /// Vertex positions (flat: [x0, y0, z0, x1, y1, z1, ...]).
    pub positions: Vec<f32>,
    /// Collision flag set, ascending.
    pub flagged: Vec<u32>,
    pub vertex_count: usize,
}

impl EvaluationSnapshot {
    /// Captures deformed points together with the report's flag set.
    pub fn capture(evaluation: u64, points: &[Vec3], report: &EvaluationReport) -> Self {
        let positions = points.iter().flat_map(|p| p.to_array()).collect();
        Self {
            evaluation,
            node: report.node.clone(),
            positions,
            flagged: report.flagged.clone(),
            vertex_count: points.len(),
        }
    }

    /// Positions as vectors.
    pub fn points(&self) -> Vec<Vec3> {
        self.positions
            .chunks_exact(3)
            .map(Vec3::from_slice)
            .collect()
    }

    /// Largest per-vertex distance to `other`, or `None` if the vertex
    /// counts differ.
    pub fn max_difference(&self, other: &Self) -> Option<f32> {
        if self.vertex_count != other.vertex_count {
            return None;
        }
        Some(
            self.points()
                .iter()
                .zip(other.points())
                .map(|(a, b)| a.distance(b))
                .fold(0.0, f32::max),
        )
    }

    /// Serializes to compact binary format.
    pub fn to_bytes(&self) -> ImprintResult<Vec<u8>> {
        bincode::serialize(self).map_err(|e| ImprintError::Serialization(e.to_string()))
    }

    /// Deserializes from binary format.
    pub fn from_bytes(data: &[u8]) -> ImprintResult<Self> {
        let snapshot: Self = bincode::deserialize(data).map_err(|e| {
            ImprintError::Serialization(format!("Snapshot deserialization failed: {}", e))
        })?;
        if snapshot.positions.len() != snapshot.vertex_count * 3 {
            return Err(ImprintError::Serialization(format!(
                "Snapshot holds {} coordinates for {} vertices",
                snapshot.positions.len(),
                snapshot.vertex_count
            )));
        }
        Ok(snapshot)
    }

    pub fn save(&self, path: &Path) -> ImprintResult<()> {
        std::fs::write(path, self.to_bytes()?)?;
        Ok(())
    }

    pub fn load(path: &Path) -> ImprintResult<Self> {
        Self::from_bytes(&std::fs::read(path)?)
    }
}
