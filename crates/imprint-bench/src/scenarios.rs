//! Benchmark scenarios: procedural mesh, colliders and config for each case.
//!
//! Three canonical scenarios for regression testing:
//! 1. **Plane into sphere**: a grid pressed into one sphere, bulge and smoothing on
//! 2. **Cube enclosure**: a small sphere entirely inside a box collider
//! 3. **Two spheres**: overlapping colliders composed on the position-paired node

use serde::{Deserialize, Serialize};

use imprint_deform::{DeformerConfig, NodeKind};
use imprint_math::Vec3;
use imprint_mesh::generators::{box_mesh, quad_grid, uv_sphere};
use imprint_mesh::TriangleMesh;

/// Which benchmark scenario to run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ScenarioKind {
    PlaneIntoSphere,
    CubeEnclosure,
    TwoSpheres,
}

impl ScenarioKind {
    /// Returns all scenario kinds.
    pub fn all() -> &'static [ScenarioKind] {
        &[
            ScenarioKind::PlaneIntoSphere,
            ScenarioKind::CubeEnclosure,
            ScenarioKind::TwoSpheres,
        ]
    }

    /// Returns a human-readable name.
    pub fn name(&self) -> &'static str {
        match self {
            ScenarioKind::PlaneIntoSphere => "plane_into_sphere",
            ScenarioKind::CubeEnclosure => "cube_enclosure",
            ScenarioKind::TwoSpheres => "two_spheres",
        }
    }

    /// Parses a name produced by [`ScenarioKind::name`].
    pub fn from_name(name: &str) -> Option<Self> {
        Self::all().iter().copied().find(|k| k.name() == name)
    }
}

/// A fully specified benchmark scenario.
pub struct Scenario {
    pub kind: ScenarioKind,
    /// Deforming mesh (identity transform).
    pub mesh: TriangleMesh,
    /// World-space collider surfaces, appended in order.
    pub colliders: Vec<TriangleMesh>,
    pub node: NodeKind,
    pub config: DeformerConfig,
    /// Number of evaluations to time.
    pub evaluations: u32,
}

impl Scenario {
    /// A 2m × 2m grid at 40×40 resolution pressed into a sphere of
    /// radius 0.6 sitting 0.3 above it.
    pub fn plane_into_sphere() -> Self {
        Self {
            kind: ScenarioKind::PlaneIntoSphere,
            mesh: quad_grid(40, 40, 2.0, 2.0),
            colliders: vec![uv_sphere(Vec3::new(0.0, 0.0, 0.3), 0.6, 24, 48)],
            node: NodeKind::Collision,
            config: DeformerConfig {
                smooth_iterations: 2,
                bulge_distance: 0.3,
                bulge_strength: 1.0,
                ..Default::default()
            },
            evaluations: 10,
        }
    }

    /// A sphere of radius 0.3 inside a unit cube. Every vertex starts
    /// inside the collider and faces outward.
    pub fn cube_enclosure() -> Self {
        Self {
            kind: ScenarioKind::CubeEnclosure,
            mesh: uv_sphere(Vec3::ZERO, 0.3, 16, 32),
            colliders: vec![box_mesh(Vec3::ZERO, Vec3::splat(0.5))],
            node: NodeKind::Collision,
            config: DeformerConfig::default(),
            evaluations: 10,
        }
    }

    /// A grid pressed into two overlapping spheres, direct pass only.
    pub fn two_spheres() -> Self {
        Self {
            kind: ScenarioKind::TwoSpheres,
            mesh: quad_grid(40, 40, 2.0, 2.0),
            colliders: vec![
                uv_sphere(Vec3::new(-0.3, 0.0, 0.2), 0.5, 24, 48),
                uv_sphere(Vec3::new(0.3, 0.0, 0.2), 0.5, 24, 48),
            ],
            node: NodeKind::MultiCollision,
            config: DeformerConfig::default(),
            evaluations: 10,
        }
    }

    /// Create a scenario by kind.
    pub fn from_kind(kind: ScenarioKind) -> Self {
        match kind {
            ScenarioKind::PlaneIntoSphere => Self::plane_into_sphere(),
            ScenarioKind::CubeEnclosure => Self::cube_enclosure(),
            ScenarioKind::TwoSpheres => Self::two_spheres(),
        }
    }
}
