//! Scene input/output contract types.
//!
//! A scene is one deforming mesh, its colliders and the deformer
//! settings. These types are serializable for CLI files and transport.

use std::path::Path;

use imprint_deform::{DeformerConfig, EvaluationReport, NodeKind, RampPoint};
use imprint_math::{Aabb, Mat4};
use imprint_mesh::TriangleMesh;
use imprint_types::{ImprintError, ImprintResult};
use serde::{Deserialize, Serialize};

/// Everything needed to run one deformer evaluation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SceneInput {
    /// Which deformer node to run.
    #[serde(default = "default_node")]
    pub node: NodeKind,

    /// The deforming mesh, in its local space.
    pub mesh: TriangleMesh,

    /// Local-to-world matrix of the deforming mesh.
    #[serde(default)]
    pub local_to_world: Mat4,

    /// Per-vertex paint weights. `None` weighs every vertex 1.0.
    #[serde(default)]
    pub weights: Option<Vec<f32>>,

    /// Connected colliders.
    #[serde(default)]
    pub colliders: Vec<ColliderSpec>,

    #[serde(default)]
    pub config: DeformerConfig,

    /// Bulge falloff override. `None` keeps the default falloff.
    #[serde(default)]
    pub ramp: Option<Vec<RampPoint>>,
}

fn default_node() -> NodeKind {
    NodeKind::Collision
}

/// One collider connection.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ColliderSpec {
    /// External slot. `None` appends at the next free slot.
    #[serde(default)]
    pub slot: Option<u32>,

    /// Collider surface in its own object space.
    pub mesh: TriangleMesh,

    /// Collider object-to-world matrix.
    #[serde(default)]
    pub transform: Mat4,

    /// World-space culling box. `None` uses the tight box of the surface.
    #[serde(default)]
    pub bounds: Option<Aabb>,
}

impl ColliderSpec {
    /// A collider already in world space, appended with a tight box.
    pub fn world(mesh: TriangleMesh) -> Self {
        Self {
            slot: None,
            mesh,
            transform: Mat4::IDENTITY,
            bounds: None,
        }
    }

    pub fn at_slot(mut self, slot: u32) -> Self {
        self.slot = Some(slot);
        self
    }
}

impl SceneInput {
    /// A collision-deformer scene with default settings and no colliders.
    pub fn new(mesh: TriangleMesh) -> Self {
        Self {
            node: NodeKind::Collision,
            mesh,
            local_to_world: Mat4::IDENTITY,
            weights: None,
            colliders: Vec::new(),
            config: DeformerConfig::default(),
            ramp: None,
        }
    }

    pub fn from_json(text: &str) -> ImprintResult<Self> {
        serde_json::from_str(text).map_err(|e| ImprintError::Serialization(e.to_string()))
    }

    pub fn to_json(&self) -> ImprintResult<String> {
        serde_json::to_string_pretty(self).map_err(|e| ImprintError::Serialization(e.to_string()))
    }

    /// Reads a scene from a JSON file.
    pub fn load(path: &Path) -> ImprintResult<Self> {
        Self::from_json(&std::fs::read_to_string(path)?)
    }
}

/// Result of evaluating a scene.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SceneOutput {
    /// The deformed mesh (same topology and normals as the input).
    pub mesh: TriangleMesh,

    /// What the evaluation did.
    pub report: EvaluationReport,
}

impl SceneOutput {
    pub fn to_json(&self) -> ImprintResult<String> {
        serde_json::to_string_pretty(self).map_err(|e| ImprintError::Serialization(e.to_string()))
    }

    pub fn from_json(text: &str) -> ImprintResult<Self> {
        serde_json::from_str(text).map_err(|e| ImprintError::Serialization(e.to_string()))
    }

    /// Writes the output as JSON.
    pub fn save(&self, path: &Path) -> ImprintResult<()> {
        std::fs::write(path, self.to_json()?)?;
        Ok(())
    }
}
