use crate::domain::entities::ServiceStatus;
use async_trait::async_trait;

/// Queries the live run state of a single named OS service.
///
/// Infallible by contract: every failure mode (spawn failure, permission
/// denial, timeout, unparseable output) collapses into
/// [`ServiceStatus::Error`] so one bad probe can never take down a
/// reconciliation pass.
#[async_trait]
pub trait StatusProber: Send + Sync {
    async fn probe(&self, name: &str) -> ServiceStatus;
}
