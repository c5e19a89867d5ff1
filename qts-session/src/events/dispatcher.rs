//! EventDispatcher: synchronous event dispatch with zero overhead when empty.

use std::sync::Arc;

use tracing::warn;

use super::handler::ModeEventHandler;
use super::types::*;

/// Handle returned by [`EventDispatcher::register`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

/// Synchronous event dispatcher wrapping a list of handlers.
///
/// Handlers are called in registration order.
#[derive(Default)]
pub struct EventDispatcher {
    handlers: Vec<(SubscriptionId, Arc<dyn ModeEventHandler>)>,
    next_id: u64,
}

impl EventDispatcher {
    /// Create a new empty dispatcher.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register an event handler.
    pub fn register(&mut self, handler: Arc<dyn ModeEventHandler>) -> SubscriptionId {
        let id = SubscriptionId(self.next_id);
        self.next_id += 1;
        self.handlers.push((id, handler));
        id
    }

    /// Remove a handler. Returns false if `id` was not registered.
    pub fn unregister(&mut self, id: SubscriptionId) -> bool {
        let before = self.handlers.len();
        self.handlers.retain(|(hid, _)| *hid != id);
        self.handlers.len() != before
    }

    /// Returns the number of registered handlers.
    pub fn handler_count(&self) -> usize {
        self.handlers.len()
    }

    /// Emit an event to all registered handlers.
    /// Handlers that panic are caught and do not prevent subsequent handlers
    /// from receiving the event.
    fn emit<F: Fn(&dyn ModeEventHandler)>(&self, event: &'static str, f: F) {
        for (id, handler) in &self.handlers {
            let result = std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| {
                f(handler.as_ref());
            }));
            if result.is_err() {
                warn!(subscription = id.0, event, "event handler panicked");
            }
        }
    }

    pub fn emit_mode_changed(&self, event: &ModeChangedEvent) {
        self.emit("mode_changed", |h| h.on_mode_changed(event));
    }

    pub fn emit_snapshot_published(&self, event: &SnapshotPublishedEvent) {
        self.emit("snapshot_published", |h| h.on_snapshot_published(event));
    }
}
