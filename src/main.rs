mod application;
mod domain;
mod infrastructure;

use application::{
    refresh_channel, ActionSupervisor, CoreEvent, Reconciler, ServiceManager, UseCaseContainer,
};
use domain::repositories::{ServiceController, StatusProber, WatchlistStore};
use infrastructure::sc::{ScServiceController, ScStatusProber};
use infrastructure::{ConfigRepository, JsonWatchlistStore};
use std::sync::Arc;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt::init();

    let config = match ConfigRepository::new().load_or_init() {
        Ok(config) => config,
        Err(e) => {
            tracing::warn!("could not load config, using defaults: {}", e);
            Default::default()
        }
    };

    let store: Arc<dyn WatchlistStore> = Arc::new(JsonWatchlistStore::new());
    let controller: Arc<dyn ServiceController> = Arc::new(ScServiceController::new());
    let prober: Arc<dyn StatusProber> = Arc::new(ScStatusProber::new(config.probe_timeout()));

    let use_cases = Arc::new(UseCaseContainer::new(store, controller, &config));
    let state = application::shared_state();
    let events = application::EventBus::new();
    let (refresh, refresh_rx) = refresh_channel();

    let reconciler = Reconciler::new(
        Arc::clone(&state),
        prober,
        events.clone(),
        config.poll_interval(),
        refresh_rx,
    );
    let supervisor = Arc::new(ActionSupervisor::new(
        Arc::clone(&use_cases),
        events.clone(),
        refresh.clone(),
        config.refresh_settle(),
    ));
    let manager = ServiceManager::new(state, use_cases, supervisor, events, refresh);

    // Stand-in presentation adapter: a real front end subscribes the same
    // way and renders instead of logging.
    manager.subscribe(|event| match event {
        CoreEvent::SnapshotUpdated(snapshot) => {
            for (name, status) in &snapshot.statuses {
                tracing::info!("{}: {}", name, status);
            }
            let running = snapshot
                .statuses
                .values()
                .filter(|s| s.is_running())
                .count();
            tracing::info!(
                "{} of {} watched service(s) running",
                running,
                snapshot.statuses.len()
            );
        }
        CoreEvent::ActionCompleted {
            name,
            action,
            result,
        } => match result {
            Ok(()) => tracing::info!("{} {} succeeded", action, name),
            Err(e) => tracing::warn!("{} {} failed: {}", action, name, e),
        },
        CoreEvent::StorageWarning(message) => {
            tracing::warn!("watchlist storage: {}", message);
        }
    });

    manager.load_watchlist();
    tokio::spawn(reconciler.run());

    tokio::signal::ctrl_c().await?;
    tracing::info!("shutting down");
    Ok(())
}
