//! # imprint-deform
//!
//! Collision deformers over explicit vertex buffers.
//!
//! ## Key Types
//!
//! - [`Deformer`]: Typed evaluation interface shared by both nodes
//! - [`CollisionDeformer`]: Slot-paired colliders, bulge and smoothing
//! - [`MultiCollisionDeformer`]: Position-paired colliders, direct pass only
//! - [`DeformerConfig`]: Envelope, smoothing and bulge attributes
//! - [`BulgeRamp`]: Falloff curve for the bulge pass
//! - [`DeformContext`]: Input geometry, transform and paint weights
//! - [`EvaluationReport`]: What an evaluation did, or why it skipped
//!
//! Each pass is a plain function over the point buffer:
//! [`direct::resolve_collider`], [`bulge::bulge_collider`] and
//! [`smooth::smooth_flagged`].

pub mod bulge;
pub mod config;
pub mod context;
pub mod deformer;
pub mod direct;
pub mod flags;
pub mod plugin;
pub mod ramp;
pub mod report;
pub mod smooth;
pub mod weights;

pub use config::DeformerConfig;
pub use context::{DeformContext, InputGeometry};
pub use deformer::{CollisionDeformer, Deformer, MultiCollisionDeformer};
pub use flags::CollisionFlags;
pub use plugin::{initialize_plugin, uninitialize_plugin, NodeDescriptor, NodeKind, PluginRegistry};
pub use ramp::{BulgeRamp, Interpolation, RampPoint};
pub use report::{ColliderReport, EvaluationReport, SkipReason};
pub use weights::{PaintedWeights, UniformWeight, WeightSource};
