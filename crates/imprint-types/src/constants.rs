//! Numeric constants and attribute defaults.

/// Barycentric tolerance for ray/triangle intersection tests.
pub const RAY_TOLERANCE: f32 = 1.0e-4;

/// Maximum ray parameter for collider ray casts (world units).
/// Large enough to behave as an unbounded ray.
pub const RAY_MAX_PARAM: f32 = 100_000.0;

/// Upper bound of the `smoothIterations` attribute.
pub const MAX_SMOOTH_ITERATIONS: u32 = 5;

/// Upper bound of the `bulgeStrength` attribute.
pub const MAX_BULGE_STRENGTH: f32 = 10.0;

/// Default `bulgeStrength`.
pub const DEFAULT_BULGE_STRENGTH: f32 = 1.0;

/// Fraction of the neighbour-average offset removed per smoothing iteration.
pub const SMOOTH_STEP: f32 = 0.5;

/// Host type id of the full collision deformer (bulge + smoothing).
pub const COLLISION_DEFORMER_TYPE_ID: u32 = 0x0007_f7c6;

/// Host type id of the simpler position-paired multi-collision deformer.
pub const MULTI_COLLISION_TYPE_ID: u32 = 0x0007_f7c0;
