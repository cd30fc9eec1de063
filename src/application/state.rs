use crate::domain::entities::{StateSnapshot, Watchlist};
use std::sync::{Arc, RwLock};

/// The one piece of shared mutable state in the core: the live watchlist and
/// the last published snapshot. All writers take the lock for the shortest
/// possible span and never hold it across an await, so the presentation
/// layer can never observe a torn snapshot.
#[derive(Debug, Default)]
pub struct CoreState {
    pub watchlist: Watchlist,
    pub snapshot: StateSnapshot,
}

pub type SharedState = Arc<RwLock<CoreState>>;

pub fn shared_state() -> SharedState {
    Arc::new(RwLock::new(CoreState::default()))
}
