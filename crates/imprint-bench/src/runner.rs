//! Benchmark runner: builds each scenario's deformer and times evaluations.

use std::sync::Arc;
use std::time::Instant;

use imprint_collider::ColliderMesh;
use imprint_deform::{DeformContext, Deformer, EvaluationReport, InputGeometry, UniformWeight};
use imprint_types::ImprintResult;

use crate::metrics::BenchmarkMetrics;
use crate::scenarios::{Scenario, ScenarioKind};

/// Runs benchmark scenarios and collects metrics.
pub struct BenchmarkRunner;

impl BenchmarkRunner {
    /// Build the configured deformer for `scenario`, colliders connected.
    pub fn build(scenario: &Scenario) -> ImprintResult<Box<dyn Deformer>> {
        let mut deformer = scenario.node.instantiate();
        deformer.set_config(scenario.config)?;
        for mesh in &scenario.colliders {
            let collider = Arc::new(ColliderMesh::new(mesh.clone())?);
            let bounds = collider.bounds();
            deformer.inputs_mut().append(collider, bounds)?;
        }
        Ok(deformer)
    }

    /// Run a single scenario.
    ///
    /// Returns metrics for the completed run.
    pub fn run(scenario: &Scenario) -> ImprintResult<BenchmarkMetrics> {
        let deformer = Self::build(scenario)?;
        let input = InputGeometry::from_mesh(&scenario.mesh)?;
        let weights = UniformWeight(1.0);
        let ctx = DeformContext::new(&input, &weights);

        let mut eval_times: Vec<f64> = Vec::with_capacity(scenario.evaluations as usize);
        let mut last: Option<(Vec<_>, EvaluationReport)> = None;

        let total_start = Instant::now();
        for _ in 0..scenario.evaluations {
            let start = Instant::now();
            let mut points = input.points.clone();
            let report = deformer.deform(&ctx, &mut points)?;
            eval_times.push(start.elapsed().as_secs_f64());
            last = Some((points, report));
        }
        let total_wall_time = total_start.elapsed().as_secs_f64();

        let (max_displacement, report) = match last {
            Some((points, report)) => {
                let max = points
                    .iter()
                    .zip(&input.points)
                    .map(|(p, q)| p.distance(*q))
                    .fold(0.0f32, f32::max);
                (max, Some(report))
            }
            None => (0.0, None),
        };

        let avg_eval = if eval_times.is_empty() {
            0.0
        } else {
            eval_times.iter().sum::<f64>() / eval_times.len() as f64
        };
        let min_eval = eval_times.iter().copied().fold(f64::MAX, f64::min);
        let max_eval = eval_times.iter().copied().fold(0.0, f64::max);

        Ok(BenchmarkMetrics {
            scenario: scenario.kind.name().to_string(),
            node: deformer.name().to_string(),
            vertex_count: scenario.mesh.vertex_count(),
            triangle_count: scenario.mesh.triangle_count(),
            collider_count: scenario.colliders.len(),
            evaluations: scenario.evaluations,
            total_wall_time,
            avg_eval_time: avg_eval,
            min_eval_time: if eval_times.is_empty() { 0.0 } else { min_eval },
            max_eval_time: max_eval,
            resolved: report.as_ref().map_or(0, EvaluationReport::resolved_count),
            bulged: report.as_ref().map_or(0, EvaluationReport::bulged_count),
            flagged: report.as_ref().map_or(0, |r| r.flagged.len()),
            max_penetration: report.as_ref().map_or(0.0, EvaluationReport::max_penetration),
            max_displacement,
        })
    }

    /// Run all scenarios and return metrics for each.
    pub fn run_all() -> ImprintResult<Vec<BenchmarkMetrics>> {
        ScenarioKind::all()
            .iter()
            .map(|&kind| Self::run(&Scenario::from_kind(kind)))
            .collect()
    }
}
