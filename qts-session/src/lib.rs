//! # qts-session
//!
//! Reactive wiring for the token-selection demo. A [`ModeController`] holds
//! the active query mode; switching modes regenerates relevance, reselects
//! the budget, and publishes an immutable [`Snapshot`] to subscribers.

pub mod controller;
pub mod events;
pub mod snapshot;

pub use controller::ModeController;
pub use events::{
    EventDispatcher, FnHandler, ModeChangedEvent, ModeEventHandler, SnapshotPublishedEvent,
    SubscriptionId,
};
pub use snapshot::Snapshot;
