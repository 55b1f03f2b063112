//! # imprint-math
//!
//! Geometry primitives for the imprint collision deformers.
//!
//! Provides:
//! - Re-exports of `glam` types (`Vec3`, `Mat4`, etc.)
//! - Axis-aligned bounding boxes ([`Aabb`])
//! - Rays and the Möller–Trumbore ray/triangle test
//! - Closest point on a triangle (Ericson's region classification)

pub mod aabb;
pub mod closest;
pub mod ray;

pub use aabb::Aabb;
pub use closest::{closest_feature_on_triangle, closest_point_on_triangle, TriangleFeature};
pub use ray::{ray_triangle_intersect, Ray, TriangleHit};

// Re-export glam types as the canonical math types for imprint.
pub use glam::{Mat3, Mat4, Vec3};
