use crate::domain::errors::ControlError;
use crate::domain::repositories::ServiceController;
use crate::infrastructure::sc::command::ScCommand;
use async_trait::async_trait;
use std::sync::Arc;

/// Seam between the controller's retry policy and the actual process
/// spawns, so the elevation logic is testable without touching the OS.
#[async_trait]
pub trait ServiceCommandRunner: Send + Sync {
    async fn run(&self, verb: &'static str, name: &str) -> Result<(), ControlError>;
    async fn run_elevated(&self, verb: &'static str, name: &str) -> Result<(), ControlError>;
}

pub struct ScCommandRunner;

#[async_trait]
impl ServiceCommandRunner for ScCommandRunner {
    async fn run(&self, verb: &'static str, name: &str) -> Result<(), ControlError> {
        let name = name.to_string();
        tokio::task::spawn_blocking(move || ScCommand::run_verb(verb, &name))
            .await
            .map_err(|e| ControlError::Io(e.to_string()))?
    }

    async fn run_elevated(&self, verb: &'static str, name: &str) -> Result<(), ControlError> {
        let name = name.to_string();
        tokio::task::spawn_blocking(move || ScCommand::run_verb_elevated(verb, &name))
            .await
            .map_err(|e| ControlError::Io(e.to_string()))?
    }
}

/// Start/stop against sc.exe with a single elevated retry.
///
/// The first attempt runs with the caller's privileges. Access denied, and
/// only access denied, triggers one elevated re-invocation whose result is
/// awaited and checked; if elevation is declined or fails, the action is
/// reported failed with no further retries.
pub struct ScServiceController {
    runner: Arc<dyn ServiceCommandRunner>,
}

impl ScServiceController {
    pub fn new() -> Self {
        Self {
            runner: Arc::new(ScCommandRunner),
        }
    }

    pub fn with_runner(runner: Arc<dyn ServiceCommandRunner>) -> Self {
        Self { runner }
    }

    async fn apply(&self, verb: &'static str, name: &str) -> Result<(), ControlError> {
        match self.runner.run(verb, name).await {
            Err(ControlError::AccessDenied(_)) => {
                tracing::info!("{} {} denied, retrying once elevated", verb, name);
                self.runner.run_elevated(verb, name).await
            }
            other => other,
        }
    }
}

impl Default for ScServiceController {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ServiceController for ScServiceController {
    async fn start(&self, name: &str) -> Result<(), ControlError> {
        self.apply("start", name).await
    }

    async fn stop(&self, name: &str) -> Result<(), ControlError> {
        self.apply("stop", name).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    struct RecordingRunner {
        run_result: Result<(), ControlError>,
        elevated_result: Result<(), ControlError>,
        calls: Mutex<Vec<&'static str>>,
    }

    impl RecordingRunner {
        fn new(
            run_result: Result<(), ControlError>,
            elevated_result: Result<(), ControlError>,
        ) -> Arc<Self> {
            Arc::new(Self {
                run_result,
                elevated_result,
                calls: Mutex::new(Vec::new()),
            })
        }

        fn calls(&self) -> Vec<&'static str> {
            self.calls.lock().unwrap().clone()
        }
    }

    #[async_trait]
    impl ServiceCommandRunner for RecordingRunner {
        async fn run(&self, _verb: &'static str, _name: &str) -> Result<(), ControlError> {
            self.calls.lock().unwrap().push("run");
            self.run_result.clone()
        }

        async fn run_elevated(
            &self,
            _verb: &'static str,
            _name: &str,
        ) -> Result<(), ControlError> {
            self.calls.lock().unwrap().push("elevated");
            self.elevated_result.clone()
        }
    }

    #[tokio::test]
    async fn success_never_elevates() {
        let runner = RecordingRunner::new(Ok(()), Ok(()));
        let controller = ScServiceController::with_runner(Arc::clone(&runner) as Arc<dyn ServiceCommandRunner>);

        controller.start("Spooler").await.unwrap();
        assert_eq!(runner.calls(), vec!["run"]);
    }

    #[tokio::test]
    async fn access_denied_elevates_exactly_once() {
        let runner = RecordingRunner::new(
            Err(ControlError::AccessDenied("Spooler".to_string())),
            Ok(()),
        );
        let controller = ScServiceController::with_runner(Arc::clone(&runner) as Arc<dyn ServiceCommandRunner>);

        controller.stop("Spooler").await.unwrap();
        assert_eq!(runner.calls(), vec!["run", "elevated"]);
    }

    #[tokio::test]
    async fn failed_elevation_is_final() {
        let runner = RecordingRunner::new(
            Err(ControlError::AccessDenied("Spooler".to_string())),
            Err(ControlError::ElevationFailed("Spooler".to_string())),
        );
        let controller = ScServiceController::with_runner(Arc::clone(&runner) as Arc<dyn ServiceCommandRunner>);

        let err = controller.stop("Spooler").await.unwrap_err();
        assert_eq!(err, ControlError::ElevationFailed("Spooler".to_string()));
        assert_eq!(runner.calls(), vec!["run", "elevated"]);
    }

    #[tokio::test]
    async fn other_failures_do_not_elevate() {
        let runner = RecordingRunner::new(
            Err(ControlError::NotFound("Ghost".to_string())),
            Ok(()),
        );
        let controller = ScServiceController::with_runner(Arc::clone(&runner) as Arc<dyn ServiceCommandRunner>);

        let err = controller.start("Ghost").await.unwrap_err();
        assert_eq!(err, ControlError::NotFound("Ghost".to_string()));
        assert_eq!(runner.calls(), vec!["run"]);
    }
}
