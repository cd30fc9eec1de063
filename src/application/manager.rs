use crate::application::event_bus::{CoreEvent, EventBus};
use crate::application::reconciler::RefreshHandle;
use crate::application::supervisor::ActionSupervisor;
use crate::application::state::SharedState;
use crate::application::use_case_container::UseCaseContainer;
use crate::domain::entities::{ControlAction, ServiceStatus, StateSnapshot};
use crate::domain::errors::StorageError;
use std::sync::Arc;

/// The collaborator surface exposed to the presentation layer: pull a
/// snapshot, subscribe to pushes, mutate the watchlist, submit actions.
/// The presentation layer renders and forwards intents; everything else
/// happens behind this type.
pub struct ServiceManager {
    state: SharedState,
    use_cases: Arc<UseCaseContainer>,
    supervisor: Arc<ActionSupervisor>,
    events: EventBus,
    refresh: RefreshHandle,
}

impl ServiceManager {
    pub fn new(
        state: SharedState,
        use_cases: Arc<UseCaseContainer>,
        supervisor: Arc<ActionSupervisor>,
        events: EventBus,
        refresh: RefreshHandle,
    ) -> Self {
        Self {
            state,
            use_cases,
            supervisor,
            events,
            refresh,
        }
    }

    /// Loads the persisted watchlist into the shared state. An unreadable
    /// or malformed file degrades to an empty watchlist and a published
    /// warning rather than a crash.
    pub fn load_watchlist(&self) {
        match self.use_cases.load_watchlist.execute() {
            Ok(watchlist) => {
                let mut state = self.state.write().unwrap();
                state.watchlist = watchlist;
                let watchlist = state.watchlist.clone();
                state.snapshot.align_to(&watchlist);
                tracing::info!("loaded {} watched service(s)", watchlist.len());
            }
            Err(e) => {
                tracing::warn!("could not load watchlist, starting empty: {}", e);
                self.events.publish(CoreEvent::StorageWarning(e.to_string()));
            }
        }
    }

    /// Cloned copy of the last published snapshot.
    pub fn snapshot(&self) -> StateSnapshot {
        self.state.read().unwrap().snapshot.clone()
    }

    pub fn subscribe<F>(&self, listener: F)
    where
        F: Fn(&CoreEvent) + Send + Sync + 'static,
    {
        self.events.subscribe(listener);
    }

    /// Adds a service to the watchlist and persists it. The new entry shows
    /// up in the snapshot as Unknown immediately and a refresh is forced so
    /// its real status arrives without waiting for the next tick. A failed
    /// save keeps the in-memory entry and returns the error.
    pub fn add_service(&self, name: &str) -> Result<bool, StorageError> {
        let trimmed = name.trim().to_string();
        let (outcome, snapshot) = {
            let mut state = self.state.write().unwrap();
            let outcome = self
                .use_cases
                .add_service
                .execute(&mut state.watchlist, &trimmed);
            let changed = !matches!(outcome, Ok(false));
            if changed {
                state
                    .snapshot
                    .set(trimmed.clone(), ServiceStatus::Unknown);
            }
            (outcome, changed.then(|| state.snapshot.clone()))
        };

        if let Some(snapshot) = snapshot {
            self.events.publish(CoreEvent::SnapshotUpdated(snapshot));
            self.refresh.request();
        }
        if let Err(e) = &outcome {
            tracing::error!("failed to persist watchlist after add: {}", e);
            self.events.publish(CoreEvent::StorageWarning(e.to_string()));
        }
        outcome
    }

    /// Removes a service; its entry leaves the snapshot at once so removed
    /// services never linger on screen.
    pub fn remove_service(&self, name: &str) -> Result<bool, StorageError> {
        let (outcome, snapshot) = {
            let mut state = self.state.write().unwrap();
            let outcome = self
                .use_cases
                .remove_service
                .execute(&mut state.watchlist, name);
            let changed = !matches!(outcome, Ok(false));
            if changed {
                state.snapshot.remove(name);
            }
            (outcome, changed.then(|| state.snapshot.clone()))
        };

        if let Some(snapshot) = snapshot {
            self.events.publish(CoreEvent::SnapshotUpdated(snapshot));
        }
        if let Err(e) = &outcome {
            tracing::error!("failed to persist watchlist after remove: {}", e);
            self.events.publish(CoreEvent::StorageWarning(e.to_string()));
        }
        outcome
    }

    pub fn submit_action(&self, name: &str, action: ControlAction) {
        self.supervisor.submit(name, action);
    }
}
