//! Event bus: broadcast-style event dispatch with pluggable sinks.
//!
//! The bus uses `std::sync::mpsc` for thread-safe event delivery.
//! Sinks are registered once at initialization and receive events on flush.

use std::sync::mpsc;

use crate::events::DeformEvent;
use crate::sinks::EventSink;

/// Broadcast event bus for deformer telemetry.
///
/// The producer side (`emit`) queues events; `flush` hands them to
/// every registered sink in emission order.
pub struct EventBus {
    sender: mpsc::Sender<DeformEvent>,
    receiver: mpsc::Receiver<DeformEvent>,
    sinks: Vec<Box<dyn EventSink>>,
    /// Disabled bus is a no-op.
    enabled: bool,
}

impl EventBus {
    /// Creates a new event bus with no sinks.
    pub fn new() -> Self {
        let (sender, receiver) = mpsc::channel();
        Self {
            sender,
            receiver,
            sinks: Vec::new(),
            enabled: true,
        }
    }

    /// Registers a sink to receive events.
    pub fn add_sink(&mut self, sink: Box<dyn EventSink>) {
        self.sinks.push(sink);
    }

    /// Enables or disables the bus. Disabled bus drops events silently.
    pub fn set_enabled(&mut self, enabled: bool) {
        self.enabled = enabled;
    }

    /// Returns true if the bus is active.
    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Emit an event. If the bus is disabled, this is a no-op.
    pub fn emit(&self, event: DeformEvent) {
        if !self.enabled {
            return;
        }
        // The receiver lives as long as the bus
        let _ = self.sender.send(event);
    }

    /// Emit a batch of events in order.
    pub fn emit_all<I: IntoIterator<Item = DeformEvent>>(&self, events: I) {
        for event in events {
            self.emit(event);
        }
    }

    /// A sender that can queue events from another thread.
    pub fn sender(&self) -> mpsc::Sender<DeformEvent> {
        self.sender.clone()
    }

    /// Flush all pending events to registered sinks.
    ///
    /// Returns the number of events dispatched.
    pub fn flush(&mut self) -> usize {
        let mut count = 0;
        while let Ok(event) = self.receiver.try_recv() {
            for sink in &mut self.sinks {
                sink.handle(&event);
            }
            count += 1;
        }
        count
    }

    /// Flush, then let every sink finalize.
    pub fn finish(&mut self) {
        self.flush();
        for sink in &mut self.sinks {
            sink.finalize();
        }
    }

    /// Returns the number of registered sinks.
    pub fn sink_count(&self) -> usize {
        self.sinks.len()
    }
}

impl Default for EventBus {
    fn default() -> Self {
        Self::new()
    }
}
