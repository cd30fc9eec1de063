use crate::domain::entities::Watchlist;
use crate::domain::errors::StorageError;
use crate::domain::repositories::WatchlistStore;
use std::fs;
use std::path::PathBuf;

/// Watchlist persisted as a JSON array of names in the per-user
/// application-data directory.
pub struct JsonWatchlistStore {
    path: PathBuf,
}

impl JsonWatchlistStore {
    pub fn new() -> Self {
        Self {
            path: default_data_dir().join("services.json"),
        }
    }

    pub fn with_path(path: PathBuf) -> Self {
        Self { path }
    }
}

impl Default for JsonWatchlistStore {
    fn default() -> Self {
        Self::new()
    }
}

pub(crate) fn default_data_dir() -> PathBuf {
    if let Ok(local) = std::env::var("LOCALAPPDATA") {
        PathBuf::from(local).join("svcwatch")
    } else if let Ok(home) = std::env::var("HOME") {
        PathBuf::from(home).join(".config").join("svcwatch")
    } else {
        PathBuf::from(".")
    }
}

impl WatchlistStore for JsonWatchlistStore {
    fn load(&self) -> Result<Watchlist, StorageError> {
        if !self.path.exists() {
            return Ok(Watchlist::new());
        }

        let content =
            fs::read_to_string(&self.path).map_err(|e| StorageError::Read(e.to_string()))?;
        serde_json::from_str(&content).map_err(|e| StorageError::Malformed(e.to_string()))
    }

    /// Write-temp-then-rename so a crash mid-write leaves the previous
    /// valid file untouched.
    fn save(&self, watchlist: &Watchlist) -> Result<(), StorageError> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent).map_err(|e| StorageError::Write(e.to_string()))?;
        }

        let content = serde_json::to_string_pretty(watchlist)
            .map_err(|e| StorageError::Write(e.to_string()))?;

        let tmp = self.path.with_extension("json.tmp");
        fs::write(&tmp, content).map_err(|e| StorageError::Write(e.to_string()))?;
        fs::rename(&tmp, &self.path).map_err(|e| StorageError::Write(e.to_string()))?;

        Ok(())
    }
}
