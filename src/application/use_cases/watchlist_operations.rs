use crate::domain::{
    entities::Watchlist,
    errors::StorageError,
    repositories::WatchlistStore,
    services::validation::ServiceNameValidator,
};
use std::sync::Arc;

pub struct WatchlistStoreUseCase {
    store: Arc<dyn WatchlistStore>,
}

impl WatchlistStoreUseCase {
    pub fn new(store: Arc<dyn WatchlistStore>) -> Self {
        Self { store }
    }

    pub fn store(&self) -> Arc<dyn WatchlistStore> {
        Arc::clone(&self.store)
    }
}

pub struct LoadWatchlist {
    use_case: WatchlistStoreUseCase,
}

impl LoadWatchlist {
    pub fn new(store: Arc<dyn WatchlistStore>) -> Self {
        Self {
            use_case: WatchlistStoreUseCase::new(store),
        }
    }

    pub fn execute(&self) -> Result<Watchlist, StorageError> {
        self.use_case.store().load()
    }
}

pub struct AddService {
    use_case: WatchlistStoreUseCase,
}

impl AddService {
    pub fn new(store: Arc<dyn WatchlistStore>) -> Self {
        Self {
            use_case: WatchlistStoreUseCase::new(store),
        }
    }

    /// Inserts the name and re-persists the whole list. Invalid or duplicate
    /// names are a no-op returning `Ok(false)`. A failed save leaves the
    /// in-memory insertion in place; the caller surfaces the error.
    pub fn execute(&self, watchlist: &mut Watchlist, name: &str) -> Result<bool, StorageError> {
        if !ServiceNameValidator::validate(name) {
            return Ok(false);
        }
        if !watchlist.add(name) {
            return Ok(false);
        }
        self.use_case.store().save(watchlist)?;
        Ok(true)
    }
}

pub struct RemoveService {
    use_case: WatchlistStoreUseCase,
}

impl RemoveService {
    pub fn new(store: Arc<dyn WatchlistStore>) -> Self {
        Self {
            use_case: WatchlistStoreUseCase::new(store),
        }
    }

    pub fn execute(&self, watchlist: &mut Watchlist, name: &str) -> Result<bool, StorageError> {
        if !watchlist.remove(name) {
            return Ok(false);
        }
        self.use_case.store().save(watchlist)?;
        Ok(true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    struct InMemoryStore {
        saved: Mutex<Option<Watchlist>>,
        fail_save: bool,
    }

    impl InMemoryStore {
        fn new() -> Self {
            Self {
                saved: Mutex::new(None),
                fail_save: false,
            }
        }

        fn failing() -> Self {
            Self {
                saved: Mutex::new(None),
                fail_save: true,
            }
        }
    }

    impl WatchlistStore for InMemoryStore {
        fn load(&self) -> Result<Watchlist, StorageError> {
            Ok(self.saved.lock().unwrap().clone().unwrap_or_default())
        }

        fn save(&self, watchlist: &Watchlist) -> Result<(), StorageError> {
            if self.fail_save {
                return Err(StorageError::Write("disk full".to_string()));
            }
            *self.saved.lock().unwrap() = Some(watchlist.clone());
            Ok(())
        }
    }

    #[test]
    fn add_persists_new_name() {
        let store = Arc::new(InMemoryStore::new());
        let add = AddService::new(Arc::clone(&store) as Arc<dyn WatchlistStore>);
        let mut list = Watchlist::new();

        assert!(add.execute(&mut list, "Spooler").unwrap());
        let saved = store.saved.lock().unwrap().clone().unwrap();
        assert!(saved.contains("Spooler"));
    }

    #[test]
    fn add_blank_name_does_not_touch_store() {
        let store = Arc::new(InMemoryStore::new());
        let add = AddService::new(Arc::clone(&store) as Arc<dyn WatchlistStore>);
        let mut list = Watchlist::new();

        assert!(!add.execute(&mut list, "   ").unwrap());
        assert!(store.saved.lock().unwrap().is_none());
        assert!(list.is_empty());
    }

    #[test]
    fn add_duplicate_does_not_touch_store() {
        let store = Arc::new(InMemoryStore::new());
        let add = AddService::new(Arc::clone(&store) as Arc<dyn WatchlistStore>);
        let mut list = Watchlist::new();
        list.add("Spooler");

        assert!(!add.execute(&mut list, "Spooler").unwrap());
        assert!(store.saved.lock().unwrap().is_none());
    }

    #[test]
    fn failed_save_keeps_in_memory_change() {
        let store = Arc::new(InMemoryStore::failing());
        let add = AddService::new(store as Arc<dyn WatchlistStore>);
        let mut list = Watchlist::new();

        assert!(add.execute(&mut list, "Spooler").is_err());
        assert!(list.contains("Spooler"));
    }

    #[test]
    fn remove_absent_does_not_touch_store() {
        let store = Arc::new(InMemoryStore::new());
        let remove = RemoveService::new(Arc::clone(&store) as Arc<dyn WatchlistStore>);
        let mut list = Watchlist::new();

        assert!(!remove.execute(&mut list, "Spooler").unwrap());
        assert!(store.saved.lock().unwrap().is_none());
    }
}
