//! # imprint-types
//!
//! Shared types, identifiers, error types, and numeric constants
//! for the imprint collision deformers.
//!
//! This crate has zero domain logic: it defines the vocabulary
//! that all other imprint crates share.

pub mod constants;
pub mod error;
pub mod ids;

pub use error::{ImprintError, ImprintResult};
pub use ids::{NodeTypeId, SlotIndex, TriangleId, VertexId};
