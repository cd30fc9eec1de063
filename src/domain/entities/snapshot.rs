use crate::domain::entities::{ServiceStatus, Watchlist};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// The observable state the presentation layer renders: one status per
/// watched service, rebuilt on every reconciliation pass. Never persisted.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StateSnapshot {
    pub statuses: BTreeMap<String, ServiceStatus>,
    /// RFC 3339 stamp of the pass that produced this snapshot, if any.
    pub refreshed_at: Option<String>,
}

impl StateSnapshot {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn status_of(&self, name: &str) -> Option<ServiceStatus> {
        self.statuses.get(name).copied()
    }

    pub fn set(&mut self, name: String, status: ServiceStatus) {
        self.statuses.insert(name, status);
    }

    pub fn remove(&mut self, name: &str) {
        self.statuses.remove(name);
    }

    /// Makes the snapshot's key set match the watchlist exactly: names no
    /// longer watched are dropped, names not yet probed appear as `Unknown`.
    pub fn align_to(&mut self, watchlist: &Watchlist) {
        self.statuses.retain(|name, _| watchlist.contains(name));
        for name in watchlist.iter() {
            self.statuses
                .entry(name.clone())
                .or_insert(ServiceStatus::Unknown);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn align_drops_unwatched_and_seeds_unknown() {
        let mut snapshot = StateSnapshot::new();
        snapshot.set("Old".to_string(), ServiceStatus::Running);
        snapshot.set("Spooler".to_string(), ServiceStatus::Stopped);

        let mut watchlist = Watchlist::new();
        watchlist.add("Spooler");
        watchlist.add("New");

        snapshot.align_to(&watchlist);

        assert_eq!(snapshot.status_of("Old"), None);
        assert_eq!(snapshot.status_of("Spooler"), Some(ServiceStatus::Stopped));
        assert_eq!(snapshot.status_of("New"), Some(ServiceStatus::Unknown));
        assert_eq!(snapshot.statuses.len(), 2);
    }
}
