//! The deformer node types.
//!
//! Both nodes share the same evaluation skeleton:
//!
//! ```text
//! envelope == 0            -> skip
//! resolve colliders        -> skip if none pair up
//! for each collider (ascending slot):
//!     direct pass          (both nodes)
//!     bulge pass           (CollisionDeformer only)
//! smoothing pass           (CollisionDeformer only)
//! ```
//!
//! Colliders compose sequentially: collider *k* sees the points left by
//! colliders before it.

use std::time::Instant;

use imprint_collider::{ColliderEntry, ColliderInputs, RayCastSettings};
use imprint_math::Vec3;
use imprint_types::constants::{COLLISION_DEFORMER_TYPE_ID, MULTI_COLLISION_TYPE_ID};
use imprint_types::{ImprintResult, NodeTypeId};

use crate::bulge::bulge_collider;
use crate::config::DeformerConfig;
use crate::context::DeformContext;
use crate::direct::resolve_collider;
use crate::flags::CollisionFlags;
use crate::ramp::BulgeRamp;
use crate::report::{ColliderReport, EvaluationReport, SkipReason};
use crate::smooth::smooth_flagged;

/// A typed deformer node.
///
/// `deform` rewrites `points` (local space, seeded by the caller with
/// the input points) and never mutates the node itself, so one node
/// can serve several geometries concurrently.
pub trait Deformer: Send + Sync {
    /// Host type name of this node.
    fn name(&self) -> &str;

    /// Host type id of this node.
    fn node_type_id(&self) -> NodeTypeId;

    fn config(&self) -> &DeformerConfig;

    /// Replace the configuration. Out-of-range values are rejected.
    fn set_config(&mut self, config: DeformerConfig) -> ImprintResult<()>;

    /// Connected colliders.
    fn inputs(&self) -> &ColliderInputs;

    fn inputs_mut(&mut self) -> &mut ColliderInputs;

    /// Run one evaluation.
    fn deform(
        &self,
        ctx: &DeformContext<'_>,
        points: &mut [Vec3],
    ) -> ImprintResult<EvaluationReport>;
}

/// Order-preserving collision deformer with bulge and smoothing.
///
/// Colliders pair with bounding boxes by slot number.
#[derive(Debug, Clone)]
pub struct CollisionDeformer {
    config: DeformerConfig,
    inputs: ColliderInputs,
    ramp: BulgeRamp,
    ramp_seeded: bool,
    settings: RayCastSettings,
}

impl CollisionDeformer {
    pub const NAME: &'static str = "nyCollisionDeformer";
    pub const TYPE_ID: NodeTypeId = NodeTypeId(COLLISION_DEFORMER_TYPE_ID);

    pub fn new() -> Self {
        let mut node = Self {
            config: DeformerConfig::default(),
            inputs: ColliderInputs::new(),
            ramp: BulgeRamp::new(),
            ramp_seeded: false,
            settings: RayCastSettings::default(),
        };
        node.seed_ramp();
        node
    }

    /// A node with `config`, validated.
    pub fn with_config(config: DeformerConfig) -> ImprintResult<Self> {
        let mut node = Self::new();
        node.set_config(config)?;
        Ok(node)
    }

    /// Install the default falloff, once per node.
    ///
    /// Later calls are no-ops, so user edits survive.
    pub fn seed_ramp(&mut self) {
        if self.ramp_seeded {
            return;
        }
        self.ramp.set_entries(BulgeRamp::default_entries());
        self.ramp_seeded = true;
    }

    #[inline]
    pub fn is_ramp_seeded(&self) -> bool {
        self.ramp_seeded
    }

    pub fn ramp(&self) -> &BulgeRamp {
        &self.ramp
    }

    /// Mutable access to the falloff ramp for user edits.
    pub fn ramp_mut(&mut self) -> &mut BulgeRamp {
        &mut self.ramp
    }

    pub fn ray_settings(&self) -> &RayCastSettings {
        &self.settings
    }

    pub fn set_ray_settings(&mut self, settings: RayCastSettings) {
        self.settings = settings;
    }
}

impl Default for CollisionDeformer {
    fn default() -> Self {
        Self::new()
    }
}

impl Deformer for CollisionDeformer {
    fn name(&self) -> &str {
        Self::NAME
    }

    fn node_type_id(&self) -> NodeTypeId {
        Self::TYPE_ID
    }

    fn config(&self) -> &DeformerConfig {
        &self.config
    }

    fn set_config(&mut self, config: DeformerConfig) -> ImprintResult<()> {
        config.validate()?;
        self.config = config;
        Ok(())
    }

    fn inputs(&self) -> &ColliderInputs {
        &self.inputs
    }

    fn inputs_mut(&mut self) -> &mut ColliderInputs {
        &mut self.inputs
    }

    fn deform(
        &self,
        ctx: &DeformContext<'_>,
        points: &mut [Vec3],
    ) -> ImprintResult<EvaluationReport> {
        ctx.check_buffer(points)?;
        let start = Instant::now();
        let n = points.len();

        if self.config.envelope == 0.0 {
            return Ok(skip(Self::NAME, n, SkipReason::EnvelopeZero));
        }
        let colliders = self.inputs.resolve_by_slot();
        if colliders.is_empty() {
            return Ok(skip(Self::NAME, n, SkipReason::NoColliders));
        }

        let mut report = EvaluationReport::new(Self::NAME, n);
        let mut flags = CollisionFlags::new(n);

        for collider in &colliders {
            let stats = resolve_collider(
                ctx,
                collider,
                points,
                &mut flags,
                self.config.envelope,
                &self.settings,
            );
            let bulged = bulge_collider(
                ctx,
                collider,
                points,
                &mut flags,
                &self.config,
                &self.ramp,
                stats.max_penetration,
            );
            report.colliders.push(ColliderReport {
                slot: collider.slot,
                candidates: stats.candidates,
                resolved: stats.resolved,
                bulged,
                max_penetration: stats.max_penetration,
            });
        }

        if self.config.smooth_iterations > 0 && !flags.is_empty() {
            report.smoothing = Some(smooth_flagged(
                ctx,
                points,
                &flags,
                self.config.smooth_iterations,
                self.config.envelope,
            ));
        }

        finish(&mut report, &flags, start);
        Ok(report)
    }
}

/// Position-paired collision deformer without bulge or smoothing.
///
/// The i-th connected mesh pairs with the i-th connected box; when the
/// counts differ the evaluation passes geometry through.
#[derive(Debug, Clone, Default)]
pub struct MultiCollisionDeformer {
    config: DeformerConfig,
    inputs: ColliderInputs,
    settings: RayCastSettings,
}

impl MultiCollisionDeformer {
    pub const NAME: &'static str = "multiCollision";
    pub const TYPE_ID: NodeTypeId = NodeTypeId(MULTI_COLLISION_TYPE_ID);

    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: DeformerConfig) -> ImprintResult<Self> {
        let mut node = Self::new();
        node.set_config(config)?;
        Ok(node)
    }
}

impl Deformer for MultiCollisionDeformer {
    fn name(&self) -> &str {
        Self::NAME
    }

    fn node_type_id(&self) -> NodeTypeId {
        Self::TYPE_ID
    }

    fn config(&self) -> &DeformerConfig {
        &self.config
    }

    fn set_config(&mut self, config: DeformerConfig) -> ImprintResult<()> {
        config.validate()?;
        self.config = config;
        Ok(())
    }

    fn inputs(&self) -> &ColliderInputs {
        &self.inputs
    }

    fn inputs_mut(&mut self) -> &mut ColliderInputs {
        &mut self.inputs
    }

    fn deform(
        &self,
        ctx: &DeformContext<'_>,
        points: &mut [Vec3],
    ) -> ImprintResult<EvaluationReport> {
        ctx.check_buffer(points)?;
        let start = Instant::now();
        let n = points.len();

        if self.config.envelope == 0.0 {
            return Ok(skip(Self::NAME, n, SkipReason::EnvelopeZero));
        }
        let colliders: Vec<ColliderEntry> = match self.inputs.resolve_by_position() {
            Some(entries) if !entries.is_empty() => entries,
            Some(_) => return Ok(skip(Self::NAME, n, SkipReason::NoColliders)),
            None => {
                let reason = SkipReason::CountMismatch {
                    meshes: self.inputs.mesh_count(),
                    bounds: self.inputs.bounds_count(),
                };
                return Ok(skip(Self::NAME, n, reason));
            }
        };

        let mut report = EvaluationReport::new(Self::NAME, n);
        let mut flags = CollisionFlags::new(n);

        for collider in &colliders {
            let stats = resolve_collider(
                ctx,
                collider,
                points,
                &mut flags,
                self.config.envelope,
                &self.settings,
            );
            report.colliders.push(ColliderReport {
                slot: collider.slot,
                candidates: stats.candidates,
                resolved: stats.resolved,
                bulged: 0,
                max_penetration: stats.max_penetration,
            });
        }

        finish(&mut report, &flags, start);
        Ok(report)
    }
}

fn skip(node: &str, vertex_count: usize, reason: SkipReason) -> EvaluationReport {
    tracing::debug!(node, %reason, "evaluation skipped");
    EvaluationReport::skipped(node, vertex_count, reason)
}

fn finish(report: &mut EvaluationReport, flags: &CollisionFlags, start: Instant) {
    report.flagged = flags.iter().map(|i| i as u32).collect();
    report.wall_time = start.elapsed().as_secs_f64();
    tracing::debug!(
        node = %report.node,
        colliders = report.colliders.len(),
        resolved = report.resolved_count(),
        bulged = report.bulged_count(),
        flagged = report.flagged.len(),
        "evaluation complete"
    );
}
