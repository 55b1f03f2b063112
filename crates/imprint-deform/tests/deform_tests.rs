//! Integration tests for imprint-deform.

use std::sync::Arc;

use imprint_collider::{ColliderEntry, ColliderMesh, RayCastSettings};
use imprint_math::{Mat4, Vec3};
use imprint_mesh::generators::{box_mesh, quad_grid, uv_sphere};
use imprint_mesh::{Topology, TriangleMesh};
use imprint_types::{ImprintError, SlotIndex};
use imprint_deform::bulge::bulge_collider;
use imprint_deform::direct::resolve_collider;
use imprint_deform::{
    initialize_plugin, uninitialize_plugin, BulgeRamp, CollisionDeformer, CollisionFlags,
    DeformContext, Deformer, DeformerConfig, EvaluationReport, InputGeometry, Interpolation,
    MultiCollisionDeformer, NodeDescriptor, NodeKind, PaintedWeights, PluginRegistry, RampPoint,
    SkipReason, UniformWeight, WeightSource,
};

// ─── Fixtures ─────────────────────────────────────────────────

/// 21×21 grid spanning [-1, 1]² at z = 0, facing +Z.
fn plane() -> InputGeometry {
    InputGeometry::from_mesh(&quad_grid(20, 20, 2.0, 2.0)).unwrap()
}

/// Sphere sitting on the plane so a disc of plane vertices is inside it.
fn sphere() -> Arc<ColliderMesh> {
    Arc::new(ColliderMesh::new(uv_sphere(Vec3::new(0.0, 0.0, 0.3), 0.6, 24, 48)).unwrap())
}

fn unit_cube() -> Arc<ColliderMesh> {
    Arc::new(ColliderMesh::new(box_mesh(Vec3::ZERO, Vec3::splat(0.5))).unwrap())
}

/// One vertex at the origin with normal +Z and no faces.
fn lone_vertex() -> InputGeometry {
    let mesh = TriangleMesh {
        pos_x: vec![0.0],
        pos_y: vec![0.0],
        pos_z: vec![0.0],
        normal_x: vec![0.0],
        normal_y: vec![0.0],
        normal_z: vec![1.0],
        indices: Vec::new(),
    };
    InputGeometry {
        points: vec![Vec3::ZERO],
        normals: vec![Vec3::Z],
        topology: Topology::build(&mesh),
    }
}

fn with_collider<D: Deformer>(mut node: D, collider: Arc<ColliderMesh>) -> D {
    let bounds = collider.bounds();
    node.inputs_mut().append(collider, bounds).unwrap();
    node
}

fn run(
    node: &dyn Deformer,
    input: &InputGeometry,
    weights: &dyn WeightSource,
) -> (Vec<Vec3>, EvaluationReport) {
    let ctx = DeformContext::new(input, weights);
    let mut points = input.points.clone();
    let report = node.deform(&ctx, &mut points).unwrap();
    (points, report)
}

fn bulge_config() -> DeformerConfig {
    DeformerConfig {
        bulge_distance: 0.3,
        bulge_strength: 1.0,
        ..Default::default()
    }
}

// ─── Config Tests ─────────────────────────────────────────────

#[test]
fn config_defaults() {
    let config = DeformerConfig::default();
    assert_eq!(config.envelope, 1.0);
    assert_eq!(config.smooth_iterations, 0);
    assert_eq!(config.bulge_distance, 0.0);
    assert_eq!(config.bulge_strength, 1.0);
    assert!(config.validate().is_ok());
    assert!(!config.bulge_enabled());
    assert!(DeformerConfig::soft_bulge().bulge_enabled());
}

#[test]
fn config_rejects_out_of_range() {
    let bad = [
        DeformerConfig { envelope: 1.5, ..Default::default() },
        DeformerConfig { smooth_iterations: 6, ..Default::default() },
        DeformerConfig { bulge_distance: -0.1, ..Default::default() },
        DeformerConfig { bulge_strength: 10.5, ..Default::default() },
        DeformerConfig { envelope: f32::NAN, ..Default::default() },
    ];
    for config in bad {
        assert!(
            matches!(config.validate(), Err(ImprintError::InvalidConfig(_))),
            "{config:?} should be rejected"
        );
    }
}

#[test]
fn config_clamped_is_valid() {
    let wild = DeformerConfig {
        envelope: 3.0,
        smooth_iterations: 40,
        bulge_distance: -2.0,
        bulge_strength: f32::NAN,
    };
    let clamped = wild.clamped();
    assert!(clamped.validate().is_ok());
    assert_eq!(clamped.envelope, 1.0);
    assert_eq!(clamped.smooth_iterations, 5);
    assert_eq!(clamped.bulge_distance, 0.0);
    assert_eq!(clamped.bulge_strength, 1.0);
}

#[test]
fn config_toml_roundtrip() {
    let config = DeformerConfig::soft_bulge();
    let text = toml::to_string(&config).unwrap();
    let recovered: DeformerConfig = toml::from_str(&text).unwrap();
    assert_eq!(recovered, config);
}

#[test]
fn config_partial_toml_uses_defaults() {
    let config: DeformerConfig = toml::from_str("envelope = 0.5\nsmooth_iterations = 2\n").unwrap();
    assert_eq!(config.envelope, 0.5);
    assert_eq!(config.smooth_iterations, 2);
    assert_eq!(config.bulge_strength, 1.0);
}

// ─── Ramp Tests ───────────────────────────────────────────────

#[test]
fn default_ramp_hits_control_points() {
    let ramp = BulgeRamp::default_falloff();
    assert_eq!(ramp.entries().len(), 3);
    assert!(ramp.value_at(0.0).abs() < 1e-6);
    assert!((ramp.value_at(0.25) - 0.9).abs() < 1e-6);
    assert!(ramp.value_at(1.0).abs() < 1e-6);
    // Midway through the first span of the Catmull-Rom segment
    assert!((ramp.value_at(0.125) - 0.50625).abs() < 1e-5);
}

#[test]
fn default_ramp_is_non_negative() {
    let ramp = BulgeRamp::default_falloff();
    for i in 0..=100 {
        let v = ramp.value_at(i as f32 / 100.0);
        assert!(v >= -1e-6, "ramp({}) = {v}", i as f32 / 100.0);
    }
}

#[test]
fn ramp_clamps_outside_range() {
    let mut ramp = BulgeRamp::new();
    ramp.set_entries([
        RampPoint::new(0.2, 0.4, Interpolation::Linear),
        RampPoint::new(0.8, 0.6, Interpolation::Linear),
    ]);
    assert_eq!(ramp.value_at(-1.0), 0.4);
    assert_eq!(ramp.value_at(0.0), 0.4);
    assert_eq!(ramp.value_at(1.0), 0.6);
}

#[test]
fn ramp_interpolation_modes() {
    let make = |mode| {
        let mut ramp = BulgeRamp::new();
        ramp.set_entries([RampPoint::new(0.0, 0.0, mode), RampPoint::new(1.0, 1.0, mode)]);
        ramp
    };
    assert_eq!(make(Interpolation::None).value_at(0.7), 0.0);
    assert!((make(Interpolation::Linear).value_at(0.3) - 0.3).abs() < 1e-6);
    assert!((make(Interpolation::Smooth).value_at(0.25) - 0.15625).abs() < 1e-6);
    assert!((make(Interpolation::Smooth).value_at(0.5) - 0.5).abs() < 1e-6);
}

#[test]
fn ramp_keeps_entries_sorted() {
    let mut ramp = BulgeRamp::new();
    ramp.add_entries([RampPoint::new(1.0, 0.0, Interpolation::Linear)]);
    ramp.add_entries([
        RampPoint::new(0.0, 1.0, Interpolation::Linear),
        RampPoint::new(f32::NAN, 5.0, Interpolation::Linear),
    ]);
    let positions: Vec<f32> = ramp.entries().iter().map(|p| p.position).collect();
    assert_eq!(positions, vec![0.0, 1.0]);
    assert!((ramp.value_at(0.5) - 0.5).abs() < 1e-6);
}

#[test]
fn empty_ramp_samples_zero() {
    let ramp = BulgeRamp::new();
    assert!(ramp.is_empty());
    assert_eq!(ramp.value_at(0.5), 0.0);
}

#[test]
fn ramp_is_seeded_once_per_node() {
    let mut node = CollisionDeformer::new();
    assert!(node.is_ramp_seeded());
    assert_eq!(node.ramp().entries(), BulgeRamp::default_entries().as_slice());

    let edited = [RampPoint::new(0.0, 1.0, Interpolation::Linear)];
    node.ramp_mut().set_entries(edited);
    node.seed_ramp();
    assert_eq!(node.ramp().entries(), &edited);
}

// ─── Flag Set Tests ───────────────────────────────────────────

#[test]
fn flags_count_unique_inserts() {
    let mut flags = CollisionFlags::new(5);
    assert!(flags.insert(3));
    assert!(!flags.insert(3));
    assert!(flags.insert(1));
    assert!(!flags.insert(99));
    assert_eq!(flags.len(), 2);
    assert_eq!(flags.iter().collect::<Vec<_>>(), vec![1, 3]);
    assert!(!flags.contains(99));
}

// ─── Testable Properties ──────────────────────────────────────

#[test]
fn zero_weight_vertices_never_move() {
    let input = plane();
    let n = input.vertex_count();
    // Zero out every other vertex
    let values: Vec<f32> = (0..n).map(|i| if i % 2 == 0 { 0.0 } else { 1.0 }).collect();
    let weights = PaintedWeights::single(values);

    let config = DeformerConfig {
        smooth_iterations: 3,
        ..bulge_config()
    };
    let nodes: Vec<Box<dyn Deformer>> = vec![
        Box::new(with_collider(CollisionDeformer::with_config(config).unwrap(), sphere())),
        Box::new(with_collider(MultiCollisionDeformer::new(), sphere())),
    ];

    for node in &nodes {
        let (points, report) = run(node.as_ref(), &input, &weights);
        assert!(report.resolved_count() > 0, "{} resolved nothing", node.name());
        for i in (0..n).step_by(2) {
            assert_eq!(points[i], input.points[i], "{}: vertex {i} moved", node.name());
        }
    }
}

#[test]
fn zero_envelope_is_identity() {
    let input = plane();
    let config = DeformerConfig {
        envelope: 0.0,
        smooth_iterations: 5,
        ..bulge_config()
    };
    let node = with_collider(CollisionDeformer::with_config(config).unwrap(), sphere());
    let (points, report) = run(&node, &input, &UniformWeight(1.0));
    assert_eq!(points, input.points);
    assert_eq!(report.skipped, Some(SkipReason::EnvelopeZero));
    assert!(report.flagged.is_empty());
}

#[test]
fn no_residual_penetration_after_direct_pass() {
    let input = plane();
    let collider = sphere();
    let node = with_collider(MultiCollisionDeformer::new(), collider.clone());
    let (points, report) = run(&node, &input, &UniformWeight(1.0));

    assert!(report.resolved_count() > 10);
    assert!(report.max_penetration() > 0.2);
    for (i, &p) in points.iter().enumerate() {
        let sample = collider.closest_point(p);
        let side = (p - sample.point).dot(sample.normal);
        assert!(side >= -1e-4, "vertex {i} still inside: {side}");
    }
}

#[test]
fn bulge_never_touches_flagged_vertices() {
    let input = plane();
    let weights = UniformWeight(1.0);
    let ctx = DeformContext::new(&input, &weights);
    let entry = ColliderEntry::from_mesh(SlotIndex(0), sphere());
    let config = bulge_config();

    let mut points = input.points.clone();
    let mut flags = CollisionFlags::new(points.len());
    let stats = resolve_collider(
        &ctx,
        &entry,
        &mut points,
        &mut flags,
        1.0,
        &RayCastSettings::default(),
    );
    assert!(stats.resolved > 0);

    let collided: Vec<usize> = flags.iter().collect();
    let before = points.clone();
    let bulged = bulge_collider(
        &ctx,
        &entry,
        &mut points,
        &mut flags,
        &config,
        &BulgeRamp::default_falloff(),
        stats.max_penetration,
    );
    assert!(bulged > 0);
    assert_eq!(flags.len(), collided.len() + bulged);
    for &i in &collided {
        assert_eq!(points[i], before[i], "collided vertex {i} was bulged");
    }
}

#[test]
fn bulge_pushes_along_normal() {
    let input = plane();
    let node = with_collider(CollisionDeformer::with_config(bulge_config()).unwrap(), sphere());
    let (points, report) = run(&node, &input, &UniformWeight(1.0));
    assert!(report.bulged_count() > 0);

    let direct_only = with_collider(MultiCollisionDeformer::new(), sphere());
    let (direct, _) = run(&direct_only, &input, &UniformWeight(1.0));

    let moved_up = points
        .iter()
        .zip(&direct)
        .filter(|(b, d)| b.z > d.z)
        .count();
    assert_eq!(moved_up, report.bulged_count());
}

#[test]
fn zero_bulge_distance_disables_bulge() {
    let input = plane();
    let config = DeformerConfig {
        bulge_distance: 0.0,
        bulge_strength: 5.0,
        ..Default::default()
    };
    let node = with_collider(CollisionDeformer::with_config(config).unwrap(), sphere());
    let (_, report) = run(&node, &input, &UniformWeight(1.0));
    assert!(report.resolved_count() > 0);
    assert_eq!(report.bulged_count(), 0);
    assert_eq!(report.flagged.len(), report.resolved_count());
}

#[test]
fn zero_smooth_iterations_is_noop() {
    let input = plane();
    let node = with_collider(CollisionDeformer::new(), sphere());
    let (smoothed, report) = run(&node, &input, &UniformWeight(1.0));
    assert!(report.smoothing.is_none());

    let direct_only = with_collider(MultiCollisionDeformer::new(), sphere());
    let (direct, _) = run(&direct_only, &input, &UniformWeight(1.0));
    assert_eq!(smoothed, direct);
}

#[test]
fn smoothing_offsets_are_non_increasing() {
    let input = plane();
    let config = DeformerConfig {
        smooth_iterations: 5,
        ..Default::default()
    };
    let node = with_collider(CollisionDeformer::with_config(config).unwrap(), sphere());
    let (points, report) = run(&node, &input, &UniformWeight(1.0));

    let smoothing = report.smoothing.expect("smoothing should run");
    assert_eq!(smoothing.iterations, 5);
    assert_eq!(smoothing.max_offsets.len(), 5);
    assert!(smoothing.max_offsets[0] > 0.0);
    for pair in smoothing.max_offsets.windows(2) {
        assert!(pair[1] <= pair[0] + 1e-6, "{:?}", smoothing.max_offsets);
    }

    // Unflagged vertices are left alone
    let flagged: std::collections::HashSet<u32> = report.flagged.iter().copied().collect();
    for (i, (&p, &q)) in points.iter().zip(&input.points).enumerate() {
        if !flagged.contains(&(i as u32)) {
            assert_eq!(p, q);
        }
    }
}

#[test]
fn cube_pushes_center_vertex_to_nearest_face() {
    let input = lone_vertex();
    let node = with_collider(CollisionDeformer::new(), unit_cube());
    let (points, report) = run(&node, &input, &UniformWeight(1.0));

    let p = points[0];
    assert!((p.length() - 0.5).abs() < 1e-5, "landed at {p}");
    assert!((p.abs().max_element() - 0.5).abs() < 1e-5);
    assert_eq!(report.flagged, vec![0]);
    assert!((report.max_penetration() - 0.5).abs() < 1e-5);
}

#[test]
fn weight_and_envelope_scale_the_push() {
    let input = lone_vertex();
    let config = DeformerConfig {
        envelope: 0.5,
        ..Default::default()
    };
    let node = with_collider(CollisionDeformer::with_config(config).unwrap(), unit_cube());
    let (points, _) = run(&node, &input, &UniformWeight(0.5));
    assert!((points[0].length() - 0.125).abs() < 1e-5);
}

#[test]
fn world_matrix_is_applied_and_undone() {
    let input = lone_vertex();
    let offset = Vec3::new(10.0, -3.0, 2.0);
    let collider = Arc::new(
        ColliderMesh::from_local(&box_mesh(Vec3::ZERO, Vec3::splat(0.5)), &Mat4::from_translation(offset))
            .unwrap(),
    );
    let node = with_collider(CollisionDeformer::new(), collider);

    let weights = UniformWeight(1.0);
    let ctx = DeformContext::new(&input, &weights)
        .with_matrix(Mat4::from_translation(offset))
        .unwrap();
    let mut points = input.points.clone();
    node.deform(&ctx, &mut points).unwrap();
    assert!((points[0].length() - 0.5).abs() < 1e-4, "local result {}", points[0]);
}

#[test]
fn world_normal_stays_perpendicular_under_non_uniform_scale() {
    let mut input = lone_vertex();
    input.normals[0] = Vec3::new(1.0, 0.0, 1.0).normalize();
    let weights = UniformWeight(1.0);
    let matrix = Mat4::from_scale(Vec3::new(4.0, 1.0, 1.0));
    let ctx = DeformContext::new(&input, &weights).with_matrix(matrix).unwrap();

    let tangent = matrix.transform_vector3(Vec3::new(1.0, 0.0, -1.0));
    let normal = ctx.world_normal(0);
    assert!(normal.dot(tangent).abs() < 1e-5, "normal {normal}");
    assert!((normal - Vec3::new(0.25, 0.0, 1.0).normalize()).length() < 1e-5);
}

#[test]
fn singular_matrix_is_rejected() {
    let input = lone_vertex();
    let weights = UniformWeight(1.0);
    let result = DeformContext::new(&input, &weights).with_matrix(Mat4::ZERO);
    assert!(result.is_err());
}

// ─── Collider Pairing Tests ───────────────────────────────────

#[test]
fn unwired_node_passes_through() {
    let input = plane();
    let (points, report) = run(&CollisionDeformer::new(), &input, &UniformWeight(1.0));
    assert_eq!(points, input.points);
    assert_eq!(report.skipped, Some(SkipReason::NoColliders));
}

#[test]
fn colliders_run_in_ascending_slot_order() {
    let mut node = CollisionDeformer::new();
    let far = Arc::new(ColliderMesh::new(uv_sphere(Vec3::new(5.0, 0.0, 0.0), 0.5, 8, 16)).unwrap());
    let near = sphere();
    let (far_box, near_box) = (far.bounds(), near.bounds());
    node.inputs_mut().connect(SlotIndex(4), far, far_box);
    node.inputs_mut().connect(SlotIndex(1), near, near_box);

    let (_, report) = run(&node, &plane(), &UniformWeight(1.0));
    let slots: Vec<SlotIndex> = report.colliders.iter().map(|c| c.slot).collect();
    assert_eq!(slots, vec![SlotIndex(1), SlotIndex(4)]);
    assert_eq!(report.colliders[1].resolved, 0);
}

#[test]
fn slot_pairing_tolerates_unmatched_slots() {
    let mut node = CollisionDeformer::new();
    let collider = sphere();
    let bounds = collider.bounds();
    node.inputs_mut().connect(SlotIndex(0), collider.clone(), bounds);
    node.inputs_mut().connect_mesh(SlotIndex(1), collider);

    let (_, report) = run(&node, &plane(), &UniformWeight(1.0));
    assert!(report.skipped.is_none());
    assert_eq!(report.colliders.len(), 1);
}

#[test]
fn position_pairing_mismatch_is_noop() {
    let mut node = MultiCollisionDeformer::new();
    let collider = sphere();
    let bounds = collider.bounds();
    node.inputs_mut().connect(SlotIndex(0), collider.clone(), bounds);
    node.inputs_mut().connect_mesh(SlotIndex(1), collider);

    let input = plane();
    let (points, report) = run(&node, &input, &UniformWeight(1.0));
    assert_eq!(points, input.points);
    assert_eq!(
        report.skipped,
        Some(SkipReason::CountMismatch { meshes: 2, bounds: 1 })
    );
}

#[test]
fn bulge_sees_flags_from_earlier_colliders() {
    // The same sphere twice: the second pass finds nothing new to bulge
    let mut node = CollisionDeformer::with_config(bulge_config()).unwrap();
    let collider = sphere();
    let bounds = collider.bounds();
    node.inputs_mut().connect(SlotIndex(0), collider.clone(), bounds);
    node.inputs_mut().connect(SlotIndex(1), collider, bounds);

    let (_, report) = run(&node, &plane(), &UniformWeight(1.0));
    let first = report.colliders[0];
    assert!(first.bulged > 0);
    assert_eq!(report.colliders[1].bulged, 0);
    assert_eq!(report.flagged.len(), first.resolved + first.bulged);
}

// ─── Error Tests ──────────────────────────────────────────────

#[test]
fn buffer_length_mismatch_is_an_error() {
    let input = plane();
    let node = with_collider(CollisionDeformer::new(), sphere());
    let weights = UniformWeight(1.0);
    let ctx = DeformContext::new(&input, &weights);
    let mut short = vec![Vec3::ZERO; 3];
    assert!(matches!(
        node.deform(&ctx, &mut short),
        Err(ImprintError::InvalidMesh(_))
    ));
}

#[test]
fn painted_weights_must_cover_the_mesh() {
    let input = plane();
    let node = with_collider(CollisionDeformer::new(), sphere());
    let weights = PaintedWeights::single(vec![1.0; 4]);
    let ctx = DeformContext::new(&input, &weights);
    let mut points = input.points.clone();
    assert!(matches!(
        node.deform(&ctx, &mut points),
        Err(ImprintError::WeightMismatch { weights: 4, .. })
    ));
}

#[test]
fn painted_weights_are_keyed_by_geometry() {
    let mut weights = PaintedWeights::new();
    weights.set(1, vec![0.25, 2.0]);
    assert_eq!(weights.weight(0, 0), 1.0);
    assert_eq!(weights.weight(1, 0), 0.25);
    assert_eq!(weights.weight(1, 1), 1.0);
    weights.paint(1, 3, 0.5);
    assert_eq!(weights.stored_len(1), Some(4));
    assert_eq!(weights.weight(1, 2), 1.0);
}

// ─── Concurrency Tests ────────────────────────────────────────

#[test]
fn one_node_serves_concurrent_evaluations() {
    let node = with_collider(CollisionDeformer::with_config(bulge_config()).unwrap(), sphere());
    let input = plane();
    let (expected, _) = run(&node, &input, &UniformWeight(1.0));

    std::thread::scope(|s| {
        let handles: Vec<_> = (0..4)
            .map(|_| s.spawn(|| run(&node, &input, &UniformWeight(1.0)).0))
            .collect();
        for h in handles {
            assert_eq!(h.join().unwrap(), expected);
        }
    });
}

// ─── Report Tests ─────────────────────────────────────────────

#[test]
fn report_events_cover_each_collider() {
    let config = DeformerConfig {
        smooth_iterations: 1,
        ..bulge_config()
    };
    let node = with_collider(CollisionDeformer::with_config(config).unwrap(), sphere());
    let (_, report) = run(&node, &plane(), &UniformWeight(1.0));

    let kinds: Vec<&str> = report.events(3).iter().map(|e| e.kind_name()).collect();
    assert_eq!(
        kinds,
        vec!["evaluation_begin", "collider_pass", "smoothing", "evaluation_end"]
    );
    assert!(report.events(3).iter().all(|e| e.evaluation == 3));
}

#[test]
fn skipped_report_events() {
    let report = EvaluationReport::skipped("multiCollision", 9, SkipReason::NoColliders);
    let kinds: Vec<&str> = report.events(0).iter().map(|e| e.kind_name()).collect();
    assert_eq!(kinds, vec!["evaluation_begin", "evaluation_skipped", "evaluation_end"]);
}

#[test]
fn report_json_roundtrip() {
    let node = with_collider(CollisionDeformer::new(), unit_cube());
    let (_, report) = run(&node, &lone_vertex(), &UniformWeight(1.0));
    let json = serde_json::to_string(&report).unwrap();
    let recovered: EvaluationReport = serde_json::from_str(&json).unwrap();
    assert_eq!(recovered.node, report.node);
    assert_eq!(recovered.colliders, report.colliders);
    assert_eq!(recovered.flagged, report.flagged);
    assert_eq!(recovered.skipped, None);
}

// ─── Plugin Tests ─────────────────────────────────────────────

#[test]
fn plugin_registers_both_nodes() {
    let mut registry = PluginRegistry::new();
    assert_eq!(initialize_plugin(&mut registry), 2);
    assert_eq!(registry.names(), vec!["multiCollision", "nyCollisionDeformer"]);
    assert_eq!(registry.paintable().len(), 2);

    let node = registry.create("nyCollisionDeformer").unwrap();
    assert_eq!(node.node_type_id().0, 0x0007_f7c6);
    let node = registry.create("multiCollision").unwrap();
    assert_eq!(node.node_type_id().0, 0x0007_f7c0);
    assert!(registry.create("jiggle").is_err());
}

#[test]
fn plugin_failures_are_swallowed() {
    let mut registry = PluginRegistry::new();
    assert_eq!(initialize_plugin(&mut registry), 2);
    assert_eq!(initialize_plugin(&mut registry), 0);
    assert_eq!(registry.len(), 2);

    assert_eq!(uninitialize_plugin(&mut registry), 2);
    assert_eq!(uninitialize_plugin(&mut registry), 0);
    assert!(registry.is_empty());
}

#[test]
fn register_rejects_duplicate_id() {
    let mut registry = PluginRegistry::new();
    registry.register(NodeDescriptor::collision()).unwrap();
    let clash = NodeDescriptor {
        name: "otherName".into(),
        kind: NodeKind::MultiCollision,
        ..NodeDescriptor::collision()
    };
    assert!(matches!(
        registry.register(clash),
        Err(ImprintError::Registration(_))
    ));
    assert!(registry.deregister(MultiCollisionDeformer::TYPE_ID).is_err());
}
