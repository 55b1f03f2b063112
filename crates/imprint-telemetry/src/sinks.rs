//! Pluggable event sinks.

use std::sync::{Arc, Mutex};

use crate::events::{DeformEvent, EventKind};

/// Trait for event consumers.
///
/// Implement this to create custom telemetry outputs.
pub trait EventSink: Send {
    /// Process a single event.
    fn handle(&mut self, event: &DeformEvent);

    /// Called when the run ends. Flush buffers, close files, etc.
    fn finalize(&mut self) {}

    /// Returns a human-readable name for this sink.
    fn name(&self) -> &str;
}

/// Collects events into a shared `Vec` for testing and inspection.
///
/// Clones share the same buffer, so a clone kept outside the bus can
/// read what the boxed sink received.
#[derive(Clone, Default)]
pub struct VecSink {
    events: Arc<Mutex<Vec<DeformEvent>>>,
}

impl VecSink {
    /// Creates an empty vec sink.
    pub fn new() -> Self {
        Self::default()
    }

    /// Copy of every event received so far.
    pub fn events(&self) -> Vec<DeformEvent> {
        match self.events.lock() {
            Ok(events) => events.clone(),
            Err(poisoned) => poisoned.into_inner().clone(),
        }
    }

    /// Number of events received so far.
    pub fn len(&self) -> usize {
        match self.events.lock() {
            Ok(events) => events.len(),
            Err(poisoned) => poisoned.into_inner().len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl EventSink for VecSink {
    fn handle(&mut self, event: &DeformEvent) {
        match self.events.lock() {
            Ok(mut events) => events.push(event.clone()),
            Err(poisoned) => poisoned.into_inner().push(event.clone()),
        }
    }

    fn name(&self) -> &str {
        "vec_sink"
    }
}

/// A sink that logs events using the `tracing` crate.
///
/// Skips and custom events go out at `info`; pass-level detail at `debug`.
pub struct TracingSink;

impl TracingSink {
    pub fn new() -> Self {
        Self
    }
}

impl Default for TracingSink {
    fn default() -> Self {
        Self::new()
    }
}

impl EventSink for TracingSink {
    fn handle(&mut self, event: &DeformEvent) {
        match &event.kind {
            EventKind::EvaluationSkipped { reason } => {
                tracing::info!(evaluation = event.evaluation, %reason, "evaluation_skipped");
            }
            EventKind::ColliderPass {
                slot,
                resolved,
                bulged,
                max_penetration,
                ..
            } => {
                tracing::debug!(
                    evaluation = event.evaluation,
                    slot,
                    resolved,
                    bulged,
                    max_penetration,
                    "collider_pass"
                );
            }
            EventKind::Custom { label, payload } => {
                tracing::info!(evaluation = event.evaluation, %label, %payload, "custom_event");
            }
            kind => {
                tracing::debug!(evaluation = event.evaluation, event = ?kind, "deform_event");
            }
        }
    }

    fn name(&self) -> &str {
        "tracing_sink"
    }
}
