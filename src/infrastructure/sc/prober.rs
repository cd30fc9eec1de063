use crate::domain::entities::ServiceStatus;
use crate::domain::repositories::StatusProber;
use crate::infrastructure::sc::command::ScCommand;
use async_trait::async_trait;
use std::time::Duration;

/// Probes one service through `sc query`, bounded by a hard timeout so a
/// hung OS call cannot stall a reconciliation pass.
pub struct ScStatusProber {
    timeout: Duration,
}

impl ScStatusProber {
    pub fn new(timeout: Duration) -> Self {
        Self { timeout }
    }

    /// Classifies the STATE line of `sc query` output.
    /// Pending transitions (START_PENDING, STOP_PENDING, ...) are Unknown.
    fn parse_state(output: &str) -> ServiceStatus {
        for line in output.lines() {
            let trimmed = line.trim();
            let Some(rest) = trimmed.strip_prefix("STATE") else {
                continue;
            };
            if rest.contains("RUNNING") {
                return ServiceStatus::Running;
            }
            if rest.contains("STOPPED") {
                return ServiceStatus::Stopped;
            }
            return ServiceStatus::Unknown;
        }
        ServiceStatus::Unknown
    }
}

#[async_trait]
impl StatusProber for ScStatusProber {
    async fn probe(&self, name: &str) -> ServiceStatus {
        let owned = name.to_string();
        let query = tokio::task::spawn_blocking(move || ScCommand::query(&owned));

        match tokio::time::timeout(self.timeout, query).await {
            Ok(Ok(Ok(output))) => Self::parse_state(&output),
            Ok(Ok(Err(e))) => {
                tracing::debug!("probe of {} failed: {}", name, e);
                ServiceStatus::Error
            }
            Ok(Err(e)) => {
                tracing::warn!("probe task for {} panicked: {}", name, e);
                ServiceStatus::Error
            }
            Err(_) => {
                tracing::warn!("probe of {} timed out after {:?}", name, self.timeout);
                ServiceStatus::Error
            }
        }
    }
}
