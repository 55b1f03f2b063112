//! # imprint-telemetry
//!
//! Event bus for deformer telemetry. Emits structured events
//! (evaluation boundaries, per-collider pass counts, smoothing, skips)
//! that can be consumed by pluggable sinks.

pub mod bus;
pub mod events;
pub mod sinks;

pub use bus::EventBus;
pub use events::{DeformEvent, EventKind};
pub use sinks::{EventSink, TracingSink, VecSink};
