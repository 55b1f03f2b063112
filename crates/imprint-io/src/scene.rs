//! Scene evaluation.
//!
//! Turns a [`SceneInput`] into a configured deformer, its evaluation
//! context inputs and a seeded point buffer, then runs it.

use std::sync::Arc;

use imprint_collider::ColliderMesh;
use imprint_deform::{
    CollisionDeformer, DeformContext, Deformer, EvaluationReport, InputGeometry,
    MultiCollisionDeformer, NodeKind, PaintedWeights,
};
use imprint_math::{Mat4, Vec3};
use imprint_types::{ImprintResult, SlotIndex};

use crate::contract::{SceneInput, SceneOutput};
use crate::validator::validate_scene;

/// A validated scene, ready to evaluate any number of times.
pub struct PreparedScene {
    pub deformer: Box<dyn Deformer>,
    pub input: InputGeometry,
    pub weights: PaintedWeights,
    pub local_to_world: Mat4,
}

impl PreparedScene {
    /// Validate `scene` and build its deformer and inputs.
    pub fn new(scene: &SceneInput) -> ImprintResult<Self> {
        validate_scene(scene)?;

        let mut deformer: Box<dyn Deformer> = match scene.node {
            NodeKind::Collision => {
                let mut node = CollisionDeformer::new();
                if let Some(entries) = &scene.ramp {
                    node.ramp_mut().set_entries(entries.iter().copied());
                }
                Box::new(node)
            }
            NodeKind::MultiCollision => Box::new(MultiCollisionDeformer::new()),
        };
        deformer.set_config(scene.config)?;

        let inputs = deformer.inputs_mut();
        for spec in &scene.colliders {
            let mesh = Arc::new(ColliderMesh::from_local(&spec.mesh, &spec.transform)?);
            let bounds = spec.bounds.unwrap_or_else(|| mesh.bounds());
            match spec.slot {
                Some(slot) => inputs.connect(SlotIndex(slot), mesh, bounds),
                None => {
                    inputs.append(mesh, bounds)?;
                }
            }
        }

        let weights = match &scene.weights {
            Some(values) => PaintedWeights::single(values.clone()),
            None => PaintedWeights::new(),
        };

        Ok(Self {
            deformer,
            input: InputGeometry::from_mesh(&scene.mesh)?,
            weights,
            local_to_world: scene.local_to_world,
        })
    }

    /// Run one evaluation and return the deformed points.
    pub fn evaluate(&self) -> ImprintResult<(Vec<Vec3>, EvaluationReport)> {
        let ctx = DeformContext::new(&self.input, &self.weights).with_matrix(self.local_to_world)?;
        let mut points = self.input.points.clone();
        let report = self.deformer.deform(&ctx, &mut points)?;
        Ok((points, report))
    }
}

/// Validate, build and evaluate a scene in one go.
pub fn evaluate_scene(scene: &SceneInput) -> ImprintResult<SceneOutput> {
    let prepared = PreparedScene::new(scene)?;
    let (points, report) = prepared.evaluate()?;
    let mut mesh = scene.mesh.clone();
    mesh.set_positions(&points)?;
    Ok(SceneOutput { mesh, report })
}
