//! ModeController: the only stateful piece of the simulation.
//!
//! State machine with two states (Local, Global). Transitions happen only
//! through [`ModeController::set_mode`]; there are no timers. Each transition
//! replaces the snapshot wholesale.

use std::sync::Arc;

use qts_budget::BudgetEngine;
use qts_core::config::SimulationConfig;
use qts_core::errors::QtsResult;
use qts_core::{mode_switch_span, QueryMode, RandomSource};
use tracing::{debug, info};

use crate::events::{
    EventDispatcher, FnHandler, ModeChangedEvent, ModeEventHandler, SnapshotPublishedEvent,
    SubscriptionId,
};
use crate::snapshot::Snapshot;

/// Holds the active query mode and the snapshot derived from it.
///
/// Owns its random source, so two controllers never share draws.
pub struct ModeController<R: RandomSource> {
    engine: BudgetEngine,
    rng: R,
    mode: QueryMode,
    snapshot: Arc<Snapshot>,
    dispatcher: EventDispatcher,
}

impl<R: RandomSource> ModeController<R> {
    /// Validate `config` and build the initial `Local` snapshot.
    pub fn new(config: SimulationConfig, rng: R) -> QtsResult<Self> {
        Self::with_engine(BudgetEngine::new(config)?, rng)
    }

    pub fn with_engine(engine: BudgetEngine, mut rng: R) -> QtsResult<Self> {
        let mode = QueryMode::default();
        let selection = engine.run(mode, &mut rng)?;
        debug!(%mode, keep = selection.budget.keep_count, "initial snapshot built");

        Ok(Self {
            engine,
            rng,
            mode,
            snapshot: Arc::new(Snapshot::from_selection(mode, 0, selection)),
            dispatcher: EventDispatcher::new(),
        })
    }

    pub fn mode(&self) -> QueryMode {
        self.mode
    }

    /// Latest published snapshot.
    pub fn snapshot(&self) -> Arc<Snapshot> {
        Arc::clone(&self.snapshot)
    }

    pub fn config(&self) -> &SimulationConfig {
        self.engine.config()
    }

    pub fn subscribe(&mut self, handler: Arc<dyn ModeEventHandler>) -> SubscriptionId {
        self.dispatcher.register(handler)
    }

    /// Subscribe a closure to published snapshots.
    pub fn subscribe_fn<F>(&mut self, f: F) -> SubscriptionId
    where
        F: Fn(&Snapshot) + Send + Sync + 'static,
    {
        self.dispatcher.register(Arc::new(FnHandler::new(f)))
    }

    /// Returns false if `id` was not subscribed.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        self.dispatcher.unregister(id)
    }

    pub fn subscriber_count(&self) -> usize {
        self.dispatcher.handler_count()
    }

    /// Switch to `mode`.
    ///
    /// Selecting the active mode is a no-op: nothing is regenerated or
    /// published. Otherwise the tokens are regenerated, the budget is
    /// reselected with the new mode's ratio, and observers receive
    /// `on_mode_changed` followed by `on_snapshot_published`.
    ///
    /// Returns whether a regeneration happened. On error the previous mode
    /// and snapshot stay in place.
    pub fn set_mode(&mut self, mode: QueryMode) -> QtsResult<bool> {
        if mode == self.mode {
            debug!(%mode, "mode unchanged, skipping regeneration");
            return Ok(false);
        }

        let from = self.mode;
        let _span = mode_switch_span!(from, mode).entered();

        let selection = self.engine.run(mode, &mut self.rng)?;
        let generation = self.snapshot.generation + 1;

        self.mode = mode;
        self.snapshot = Arc::new(Snapshot::from_selection(mode, generation, selection));

        info!(
            generation,
            keep = self.snapshot.budget.keep_count,
            count = self.snapshot.tokens.len(),
            "query mode switched"
        );

        self.dispatcher
            .emit_mode_changed(&ModeChangedEvent { from, to: mode });
        self.dispatcher
            .emit_snapshot_published(&SnapshotPublishedEvent {
                snapshot: self.snapshot(),
            });

        Ok(true)
    }

    /// Switch to the other mode.
    pub fn toggle(&mut self) -> QtsResult<QueryMode> {
        let next = self.mode.toggled();
        self.set_mode(next)?;
        Ok(next)
    }
}
