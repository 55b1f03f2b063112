//! CLI command implementations.

use std::path::Path;

use imprint_bench::metrics::BenchmarkMetrics;
use imprint_bench::runner::BenchmarkRunner;
use imprint_bench::scenarios::{Scenario, ScenarioKind};
use imprint_deform::DeformerConfig;
use imprint_io::contract::{SceneInput, SceneOutput};
use imprint_io::scene::PreparedScene;
use imprint_io::snapshot::EvaluationSnapshot;
use imprint_io::validator::validate_scene;
use imprint_telemetry::{EventBus, TracingSink, VecSink};

/// Evaluate a scene file.
pub fn deform(
    scene_path: &str,
    config_path: Option<&str>,
    output_path: Option<&str>,
    snapshot_path: Option<&str>,
    verbose: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    println!("imprint Deform");
    println!("──────────────");
    println!("Scene: {scene_path}");

    let mut scene = SceneInput::load(Path::new(scene_path))?;
    if let Some(path) = config_path {
        let content = std::fs::read_to_string(path)?;
        scene.config = toml::from_str::<DeformerConfig>(&content)?;
        println!("Config: {path}");
    }
    println!();

    let prepared = PreparedScene::new(&scene)?;
    let (points, report) = prepared.evaluate()?;

    let mut bus = EventBus::new();
    let events = VecSink::new();
    bus.add_sink(Box::new(events.clone()));
    bus.add_sink(Box::new(TracingSink::new()));
    bus.emit_all(report.events(0));
    bus.finish();

    println!("  Node:        {}", report.node);
    println!("  Vertices:    {}", report.vertex_count);
    match report.skipped {
        Some(reason) => println!("  Skipped:     {reason}"),
        None => {
            println!("  Colliders:   {}", report.colliders.len());
            println!("  Resolved:    {}", report.resolved_count());
            println!("  Bulged:      {}", report.bulged_count());
            println!("  Flagged:     {}", report.flagged.len());
            println!("  Max depth:   {:.4}", report.max_penetration());
        }
    }
    println!("  Eval time:   {:.3}ms", report.wall_time * 1000.0);
    if verbose {
        println!();
        for event in events.events() {
            println!("  [{}] {:?}", event.kind_name(), event.kind);
        }
    }
    println!();

    if let Some(path) = snapshot_path {
        EvaluationSnapshot::capture(0, &points, &report).save(Path::new(path))?;
        println!("Snapshot written to: {path}");
    }

    if let Some(path) = output_path {
        let mut mesh = scene.mesh.clone();
        mesh.set_positions(&points)?;
        SceneOutput { mesh, report }.save(Path::new(path))?;
        println!("Output written to: {path}");
    }

    Ok(())
}

/// Validate a scene or config.
pub fn validate(path: &str) -> Result<(), Box<dyn std::error::Error>> {
    println!("imprint Validator");
    println!("─────────────────");
    println!();

    if path.ends_with(".toml") {
        println!("Validating config: {path}");
        let content = std::fs::read_to_string(path)?;
        let config: DeformerConfig = toml::from_str(&content)?;
        match config.validate() {
            Ok(()) => println!("✅ Config is valid."),
            Err(e) => println!("❌ Config validation failed: {e}"),
        }
    } else if path.ends_with(".json") {
        println!("Validating scene: {path}");
        let scene = SceneInput::load(Path::new(path))?;
        match validate_scene(&scene) {
            Ok(()) => println!(
                "✅ Scene is valid ({} verts, {} tris, {} colliders).",
                scene.mesh.vertex_count(),
                scene.mesh.triangle_count(),
                scene.colliders.len()
            ),
            Err(e) => println!("❌ Scene validation failed: {e}"),
        }
    } else {
        println!("Unsupported file format. Use .toml (config) or .json (scene).");
    }

    Ok(())
}

/// Inspect an evaluation snapshot.
pub fn inspect(path: &str) -> Result<(), Box<dyn std::error::Error>> {
    println!("imprint Snapshot Inspector");
    println!("──────────────────────────");
    println!();

    let snapshot = EvaluationSnapshot::load(Path::new(path))?;

    println!("Evaluation:   {}", snapshot.evaluation);
    println!("Node:         {}", snapshot.node);
    println!("Vertices:     {}", snapshot.vertex_count);
    println!("Flagged:      {}", snapshot.flagged.len());

    let points = snapshot.points();
    if !points.is_empty() {
        let min = points.iter().copied().fold(points[0], |a, p| a.min(p));
        let max = points.iter().copied().fold(points[0], |a, p| a.max(p));
        println!(
            "Bounds:       [{:.4}, {:.4}, {:.4}] – [{:.4}, {:.4}, {:.4}]",
            min.x, min.y, min.z, max.x, max.y, max.z
        );
    }

    Ok(())
}

/// Run benchmark suite.
pub fn benchmark(
    scenario_name: &str,
    evaluations: Option<u32>,
    output_path: Option<&str>,
) -> Result<(), Box<dyn std::error::Error>> {
    println!("imprint Benchmark Suite");
    println!("═══════════════════════");
    println!();

    let scenarios: Vec<ScenarioKind> = if scenario_name == "all" {
        ScenarioKind::all().to_vec()
    } else {
        match ScenarioKind::from_name(scenario_name) {
            Some(kind) => vec![kind],
            None => {
                let available: Vec<&str> = ScenarioKind::all().iter().map(|k| k.name()).collect();
                return Err(format!(
                    "Unknown scenario: '{scenario_name}'. Available: {}, all",
                    available.join(", ")
                )
                .into());
            }
        }
    };

    let mut all_metrics = Vec::new();

    for &kind in &scenarios {
        let mut scenario = Scenario::from_kind(kind);
        if let Some(n) = evaluations {
            scenario.evaluations = n;
        }

        println!(
            "Running: {} ({} verts, {} colliders, {} evals)",
            kind.name(),
            scenario.mesh.vertex_count(),
            scenario.colliders.len(),
            scenario.evaluations,
        );

        let metrics = BenchmarkRunner::run(&scenario)
            .map_err(|e| format!("Benchmark failed: {e}"))?;

        println!("  Wall time:     {:.3}s", metrics.total_wall_time);
        println!("  Avg eval:      {:.3}ms", metrics.avg_eval_time * 1000.0);
        println!("  Resolved:      {}", metrics.resolved);
        println!("  Bulged:        {}", metrics.bulged);
        println!("  Max displace:  {:.4}", metrics.max_displacement);
        println!();

        all_metrics.push(metrics);
    }

    let csv = BenchmarkMetrics::to_csv(&all_metrics);
    if let Some(path) = output_path {
        std::fs::write(path, &csv)?;
        println!("Results written to: {path}");
    } else {
        println!("CSV Output:");
        println!("{csv}");
    }

    Ok(())
}
