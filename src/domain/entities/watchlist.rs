use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// The user-curated set of watched service names.
///
/// Persisted as a plain JSON array of strings. A `BTreeSet` keeps the list
/// sorted and duplicate-free by construction, so any file written by an
/// earlier version (or edited by hand) is normalized on load.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Watchlist {
    names: BTreeSet<String>,
}

impl Watchlist {
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts a name, trimming surrounding whitespace first.
    /// Empty or whitespace-only input is a no-op. Returns true if the
    /// watchlist changed.
    pub fn add(&mut self, name: &str) -> bool {
        let trimmed = name.trim();
        if trimmed.is_empty() {
            return false;
        }
        self.names.insert(trimmed.to_string())
    }

    /// Removes a name. Absent names are a no-op. Returns true if the
    /// watchlist changed.
    pub fn remove(&mut self, name: &str) -> bool {
        self.names.remove(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.names.contains(name)
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    /// Names in sorted order.
    pub fn iter(&self) -> impl Iterator<Item = &String> {
        self.names.iter()
    }

    /// Sorted copy of the names, taken so a reconciliation pass can iterate
    /// without holding a lock on the live watchlist.
    pub fn names(&self) -> Vec<String> {
        self.names.iter().cloned().collect()
    }
}
