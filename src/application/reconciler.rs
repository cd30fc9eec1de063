use crate::application::event_bus::{CoreEvent, EventBus};
use crate::application::state::SharedState;
use crate::domain::entities::StateSnapshot;
use crate::domain::repositories::StatusProber;
use chrono::Utc;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::mpsc;
use tokio::task::JoinSet;
use tokio::time::interval;

/// Requests an out-of-band reconciliation pass. Requests collapse: if one is
/// already pending, another is not queued behind it.
#[derive(Clone)]
pub struct RefreshHandle {
    tx: mpsc::Sender<()>,
}

impl RefreshHandle {
    pub fn request(&self) {
        // Full means a refresh is already pending, which is exactly what
        // the caller wanted.
        let _ = self.tx.try_send(());
    }
}

pub fn refresh_channel() -> (RefreshHandle, mpsc::Receiver<()>) {
    let (tx, rx) = mpsc::channel(1);
    (RefreshHandle { tx }, rx)
}

/// The perpetual background pass that probes every watched service and
/// republishes the state snapshot, on a fixed period or on demand.
pub struct Reconciler {
    state: SharedState,
    prober: Arc<dyn StatusProber>,
    events: EventBus,
    poll_interval: Duration,
    refresh_rx: mpsc::Receiver<()>,
}

impl Reconciler {
    pub fn new(
        state: SharedState,
        prober: Arc<dyn StatusProber>,
        events: EventBus,
        poll_interval: Duration,
        refresh_rx: mpsc::Receiver<()>,
    ) -> Self {
        Self {
            state,
            prober,
            events,
            poll_interval,
            refresh_rx,
        }
    }

    /// Runs until the refresh channel closes. Daemonic: the process exiting
    /// tears it down, there is no shutdown handshake.
    pub async fn run(mut self) {
        let mut ticker = interval(self.poll_interval);
        loop {
            tokio::select! {
                _ = ticker.tick() => {}
                request = self.refresh_rx.recv() => {
                    if request.is_none() {
                        tracing::debug!("refresh channel closed, reconciler exiting");
                        break;
                    }
                }
            }
            self.reconcile_once().await;
        }
    }

    /// One full pass: take a consistent copy of the watchlist, probe every
    /// name concurrently, then publish. Names added mid-pass appear as
    /// Unknown, names removed mid-pass are dropped at publish time.
    pub async fn reconcile_once(&self) {
        let names = self.state.read().unwrap().watchlist.names();

        let mut probes = JoinSet::new();
        for name in names {
            let prober = Arc::clone(&self.prober);
            probes.spawn(async move {
                let status = prober.probe(&name).await;
                (name, status)
            });
        }

        let mut snapshot = StateSnapshot::new();
        while let Some(joined) = probes.join_next().await {
            match joined {
                Ok((name, status)) => snapshot.set(name, status),
                Err(e) => tracing::warn!("probe task failed to join: {}", e),
            }
        }
        snapshot.refreshed_at = Some(Utc::now().to_rfc3339());

        let published = {
            let mut state = self.state.write().unwrap();
            snapshot.align_to(&state.watchlist);
            state.snapshot = snapshot.clone();
            snapshot
        };
        self.events.publish(CoreEvent::SnapshotUpdated(published));
    }
}
