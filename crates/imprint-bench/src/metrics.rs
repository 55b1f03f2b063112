//! Benchmark metrics: data collected during a benchmark run.

use serde::{Deserialize, Serialize};

/// Metrics collected from a benchmark scenario run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BenchmarkMetrics {
    /// Scenario name.
    pub scenario: String,
    /// Deformer node type name.
    pub node: String,
    pub vertex_count: usize,
    pub triangle_count: usize,
    pub collider_count: usize,
    /// Number of evaluations executed.
    pub evaluations: u32,
    /// Total wall-clock time (seconds).
    pub total_wall_time: f64,
    /// Average wall-clock time per evaluation (seconds).
    pub avg_eval_time: f64,
    pub min_eval_time: f64,
    pub max_eval_time: f64,
    /// Vertices pushed out per evaluation.
    pub resolved: usize,
    /// Vertices bulged per evaluation.
    pub bulged: usize,
    /// Size of the collision flag set.
    pub flagged: usize,
    /// Deepest penetration over all colliders.
    pub max_penetration: f32,
    /// Maximum vertex displacement from the input position.
    pub max_displacement: f32,
}

impl BenchmarkMetrics {
    /// CSV header matching [`BenchmarkMetrics::to_csv_row`].
    pub fn to_csv_header() -> String {
        "scenario,node,vertex_count,triangle_count,collider_count,evaluations,total_wall_time_s,avg_eval_ms,min_eval_ms,max_eval_ms,resolved,bulged,flagged,max_penetration,max_displacement".to_string()
    }

    /// Format this metrics instance as a CSV data row.
    pub fn to_csv_row(&self) -> String {
        format!(
            "{},{},{},{},{},{},{:.6},{:.4},{:.4},{:.4},{},{},{},{:.6},{:.6}",
            self.scenario,
            self.node,
            self.vertex_count,
            self.triangle_count,
            self.collider_count,
            self.evaluations,
            self.total_wall_time,
            self.avg_eval_time * 1000.0,
            self.min_eval_time * 1000.0,
            self.max_eval_time * 1000.0,
            self.resolved,
            self.bulged,
            self.flagged,
            self.max_penetration,
            self.max_displacement,
        )
    }

    /// Format multiple metrics as a complete CSV string.
    pub fn to_csv(metrics: &[BenchmarkMetrics]) -> String {
        let mut csv = Self::to_csv_header();
        for m in metrics {
            csv.push('\n');
            csv.push_str(&m.to_csv_row());
        }
        csv
    }
}
