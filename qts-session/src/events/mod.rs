//! Event system for mode switches.
//! Trait with no-op defaults, synchronous dispatch, zero overhead when empty.

pub mod dispatcher;
pub mod handler;
pub mod types;

pub use dispatcher::{EventDispatcher, SubscriptionId};
pub use handler::{FnHandler, ModeEventHandler};
pub use types::{ModeChangedEvent, SnapshotPublishedEvent};
