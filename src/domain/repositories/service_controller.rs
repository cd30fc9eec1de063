use crate::domain::errors::ControlError;
use async_trait::async_trait;

/// Issues start/stop verbs against the OS service-control facility.
///
/// Implementations own the privilege-escalation retry: a permission-denied
/// first attempt is retried exactly once through an elevated invocation
/// whose result is awaited and checked. Restart is not a verb here; it is
/// composed from stop and start above this seam.
#[async_trait]
pub trait ServiceController: Send + Sync {
    async fn start(&self, name: &str) -> Result<(), ControlError>;
    async fn stop(&self, name: &str) -> Result<(), ControlError>;
}
