//! # imprint-io
//!
//! Scene input/output contract, validation, and evaluation snapshots.
//!
//! Defines the boundary types that external systems (CLI, pipelines,
//! test harnesses) use to drive the collision deformers without a host.

pub mod contract;
pub mod scene;
pub mod snapshot;
pub mod validator;

pub use contract::{ColliderSpec, SceneInput, SceneOutput};
pub use scene::{evaluate_scene, PreparedScene};
pub use snapshot::EvaluationSnapshot;
pub use validator::validate_scene;
