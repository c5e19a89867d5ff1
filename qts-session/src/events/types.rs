//! Event payload types.

use std::sync::Arc;

use qts_core::QueryMode;

use crate::snapshot::Snapshot;

/// Payload for `on_mode_changed`. Sent before the new snapshot is published.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ModeChangedEvent {
    pub from: QueryMode,
    pub to: QueryMode,
}

/// Payload for `on_snapshot_published`.
#[derive(Debug, Clone)]
pub struct SnapshotPublishedEvent {
    pub snapshot: Arc<Snapshot>,
}
