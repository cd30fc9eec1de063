use crate::domain::{errors::ControlError, repositories::ServiceController};
use std::sync::Arc;
use std::time::Duration;

pub struct ControllerUseCase {
    controller: Arc<dyn ServiceController>,
}

impl ControllerUseCase {
    pub fn new(controller: Arc<dyn ServiceController>) -> Self {
        Self { controller }
    }

    pub fn controller(&self) -> Arc<dyn ServiceController> {
        Arc::clone(&self.controller)
    }
}

pub struct StartService {
    use_case: ControllerUseCase,
}

impl StartService {
    pub fn new(controller: Arc<dyn ServiceController>) -> Self {
        Self {
            use_case: ControllerUseCase::new(controller),
        }
    }

    pub async fn execute(&self, name: &str) -> Result<(), ControlError> {
        self.use_case.controller().start(name).await
    }
}

pub struct StopService {
    use_case: ControllerUseCase,
}

impl StopService {
    pub fn new(controller: Arc<dyn ServiceController>) -> Self {
        Self {
            use_case: ControllerUseCase::new(controller),
        }
    }

    pub async fn execute(&self, name: &str) -> Result<(), ControlError> {
        self.use_case.controller().stop(name).await
    }
}

/// Restart is stop, a settle pause, then start. Not atomic at the OS level.
pub struct RestartService {
    use_case: ControllerUseCase,
    settle: Duration,
}

impl RestartService {
    pub fn new(controller: Arc<dyn ServiceController>, settle: Duration) -> Self {
        Self {
            use_case: ControllerUseCase::new(controller),
            settle,
        }
    }

    /// A stop that fails because the service is not running still proceeds
    /// to the start half; any other stop failure aborts and is reported
    /// as-is. A failed start after a completed stop is reported as
    /// [`ControlError::RestartInterrupted`] since the service is most
    /// likely left stopped.
    pub async fn execute(&self, name: &str) -> Result<(), ControlError> {
        let controller = self.use_case.controller();

        match controller.stop(name).await {
            Ok(()) => {}
            Err(ControlError::NotRunning(_)) => {
                tracing::debug!("{} already stopped, continuing restart", name);
            }
            Err(e) => return Err(e),
        }

        tokio::time::sleep(self.settle).await;

        controller
            .start(name)
            .await
            .map_err(|e| ControlError::RestartInterrupted {
                name: name.to_string(),
                source: Box::new(e),
            })
    }
}
