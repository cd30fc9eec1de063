use crate::domain::entities::Watchlist;
use crate::domain::errors::StorageError;

/// Persists the watchlist across runs. The whole list is rewritten on every
/// mutation; `save` must replace the previous file atomically so a crash
/// mid-write cannot corrupt the last valid list.
pub trait WatchlistStore: Send + Sync {
    /// Returns an empty watchlist when nothing has been persisted yet.
    fn load(&self) -> Result<Watchlist, StorageError>;
    fn save(&self, watchlist: &Watchlist) -> Result<(), StorageError>;
}
