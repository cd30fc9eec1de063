use crate::application::use_cases::*;
use crate::domain::entities::AppConfig;
use crate::domain::repositories::{ServiceController, WatchlistStore};
use std::sync::Arc;

pub struct UseCaseContainer {
    pub load_watchlist: Arc<LoadWatchlist>,
    pub add_service: Arc<AddService>,
    pub remove_service: Arc<RemoveService>,
    pub start_service: Arc<StartService>,
    pub stop_service: Arc<StopService>,
    pub restart_service: Arc<RestartService>,
}

impl UseCaseContainer {
    pub fn new(
        store: Arc<dyn WatchlistStore>,
        controller: Arc<dyn ServiceController>,
        config: &AppConfig,
    ) -> Self {
        Self {
            load_watchlist: Arc::new(LoadWatchlist::new(Arc::clone(&store))),
            add_service: Arc::new(AddService::new(Arc::clone(&store))),
            remove_service: Arc::new(RemoveService::new(Arc::clone(&store))),
            start_service: Arc::new(StartService::new(Arc::clone(&controller))),
            stop_service: Arc::new(StopService::new(Arc::clone(&controller))),
            restart_service: Arc::new(RestartService::new(
                Arc::clone(&controller),
                config.restart_settle(),
            )),
        }
    }
}
