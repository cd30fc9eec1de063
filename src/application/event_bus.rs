use crate::domain::entities::{ControlAction, StateSnapshot};
use crate::domain::errors::ControlError;
use std::sync::{Arc, Mutex};

#[derive(Clone)]
pub enum CoreEvent {
    /// A reconciliation pass (periodic or forced) published a new snapshot.
    SnapshotUpdated(StateSnapshot),
    /// A submitted control action ran to completion, successfully or not.
    ActionCompleted {
        name: String,
        action: ControlAction,
        result: Result<(), ControlError>,
    },
    /// Watchlist persistence failed; the in-memory list is still live.
    StorageWarning(String),
}

pub struct EventBus {
    listeners: Arc<Mutex<Vec<Box<dyn Fn(&CoreEvent) + Send + Sync>>>>,
}

impl EventBus {
    pub fn new() -> Self {
        Self {
            listeners: Arc::new(Mutex::new(Vec::new())),
        }
    }

    pub fn publish(&self, event: CoreEvent) {
        let listeners = self.listeners.lock().unwrap();
        for listener in listeners.iter() {
            listener(&event);
        }
    }

    pub fn subscribe<F>(&self, listener: F)
    where
        F: Fn(&CoreEvent) + Send + Sync + 'static,
    {
        self.listeners.lock().unwrap().push(Box::new(listener));
    }
}

impl Clone for EventBus {
    fn clone(&self) -> Self {
        Self {
            listeners: Arc::clone(&self.listeners),
        }
    }
}

impl Default for EventBus {
    fn default() -> Self {
        Self::new()
    }
}
