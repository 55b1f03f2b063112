//! Error types for the imprint deformers.
//!
//! All crates return `ImprintResult<T>` from fallible operations.
//! Expected "nothing to do" states (unwired colliders, zero envelope)
//! are not errors; they are reported on the evaluation result instead.

use thiserror::Error;

/// Unified error type for the imprint crates.
#[derive(Debug, Error)]
pub enum ImprintError {
    /// Mesh data is malformed or inconsistent.
    #[error("Invalid mesh: {0}")]
    InvalidMesh(String),

    /// Configuration value is invalid.
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// Collider snapshot or bounding box is unusable.
    #[error("Invalid collider: {0}")]
    InvalidCollider(String),

    /// Paint weights do not cover the deformed geometry.
    #[error("Weight count ({weights}) != vertex count ({vertices})")]
    WeightMismatch { weights: usize, vertices: usize },

    /// Node type registration or deregistration failed.
    #[error("Registration failed: {0}")]
    Registration(String),

    /// I/O operation failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization/deserialization failure.
    #[error("Serialization error: {0}")]
    Serialization(String),
}

/// Convenience alias for `Result<T, ImprintError>`.
pub type ImprintResult<T> = Result<T, ImprintError>;
