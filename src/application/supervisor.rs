use crate::application::event_bus::{CoreEvent, EventBus};
use crate::application::reconciler::RefreshHandle;
use crate::application::use_case_container::UseCaseContainer;
use crate::domain::entities::ControlAction;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use std::time::Duration;

/// Executes user-initiated control intents off the interactive path.
///
/// Same-name submissions queue behind one another on a per-name mutex, so
/// two control calls can never hit the OS concurrently for one service.
/// Different names run fully in parallel. After each action the supervisor
/// waits a short settle delay and forces a reconciliation pass so the user
/// sees the effect without waiting for the next periodic tick.
pub struct ActionSupervisor {
    use_cases: Arc<UseCaseContainer>,
    events: EventBus,
    refresh: RefreshHandle,
    refresh_settle: Duration,
    guards: Mutex<HashMap<String, Arc<tokio::sync::Mutex<()>>>>,
}

impl ActionSupervisor {
    pub fn new(
        use_cases: Arc<UseCaseContainer>,
        events: EventBus,
        refresh: RefreshHandle,
        refresh_settle: Duration,
    ) -> Self {
        Self {
            use_cases,
            events,
            refresh,
            refresh_settle,
            guards: Mutex::new(HashMap::new()),
        }
    }

    /// Accepts an intent and returns immediately; the action runs on a
    /// spawned task. A failed action never poisons the supervisor.
    pub fn submit(self: &Arc<Self>, name: &str, action: ControlAction) {
        let supervisor = Arc::clone(self);
        let name = name.to_string();
        tokio::spawn(async move {
            supervisor.run_action(name, action).await;
        });
    }

    async fn run_action(&self, name: String, action: ControlAction) {
        let guard = self.guard_for(&name);

        let result = {
            let _serialized = guard.lock().await;
            tracing::info!("executing {} on {}", action, name);
            match action {
                ControlAction::Start => self.use_cases.start_service.execute(&name).await,
                ControlAction::Stop => self.use_cases.stop_service.execute(&name).await,
                ControlAction::Restart => self.use_cases.restart_service.execute(&name).await,
            }
        };

        match &result {
            Ok(()) => tracing::info!("{} on {} completed", action, name),
            Err(e) => tracing::error!("{} on {} failed: {}", action, name, e),
        }
        self.events.publish(CoreEvent::ActionCompleted {
            name,
            action,
            result,
        });

        tokio::time::sleep(self.refresh_settle).await;
        self.refresh.request();
    }

    /// Guards are created lazily and kept for the process lifetime; the map
    /// stays bounded by the set of names ever acted on.
    fn guard_for(&self, name: &str) -> Arc<tokio::sync::Mutex<()>> {
        let mut guards = self.guards.lock().unwrap();
        Arc::clone(
            guards
                .entry(name.to_string())
                .or_insert_with(|| Arc::new(tokio::sync::Mutex::new(()))),
        )
    }
}
