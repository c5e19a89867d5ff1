//! ModeEventHandler trait, all methods with no-op defaults.

use super::types::*;
use crate::snapshot::Snapshot;

/// Observer of a [`ModeController`](crate::ModeController).
///
/// Handlers only override the events they care about.
pub trait ModeEventHandler: Send + Sync {
    fn on_mode_changed(&self, _event: &ModeChangedEvent) {}
    fn on_snapshot_published(&self, _event: &SnapshotPublishedEvent) {}
}

/// Adapts a closure into a handler that only sees published snapshots.
pub struct FnHandler<F>(F);

impl<F> FnHandler<F>
where
    F: Fn(&Snapshot) + Send + Sync,
{
    pub fn new(f: F) -> Self {
        Self(f)
    }
}

impl<F> ModeEventHandler for FnHandler<F>
where
    F: Fn(&Snapshot) + Send + Sync,
{
    fn on_snapshot_published(&self, event: &SnapshotPublishedEvent) {
        (self.0)(&event.snapshot);
    }
}
