use thiserror::Error;

/// Watchlist persistence failure. Never fatal: callers degrade to the
/// in-memory watchlist and surface the message as a warning.
#[derive(Debug, Clone, Error)]
pub enum StorageError {
    #[error("failed to read watchlist file: {0}")]
    Read(String),
    #[error("watchlist file is malformed: {0}")]
    Malformed(String),
    #[error("failed to write watchlist file: {0}")]
    Write(String),
}

/// A start/stop/restart action failed. Reported per-action to the
/// presentation layer; never affects other services or the polling loop.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ControlError {
    #[error("access to service `{0}` was denied")]
    AccessDenied(String),
    #[error("service `{0}` does not exist")]
    NotFound(String),
    #[error("service `{0}` is not running")]
    NotRunning(String),
    #[error("service `{0}` is already running")]
    AlreadyRunning(String),
    #[error("elevated retry for service `{0}` was declined or failed")]
    ElevationFailed(String),
    #[error("control action on service `{0}` timed out")]
    Timeout(String),
    #[error("failed to invoke service control: {0}")]
    Io(String),
    #[error("service control exited with code {code}: {detail}")]
    CommandFailed { code: i32, detail: String },
    /// Restart stopped the service but could not start it again, so the
    /// service is most likely left stopped rather than unchanged.
    #[error("service `{name}` was stopped but failed to start again: {source}")]
    RestartInterrupted {
        name: String,
        source: Box<ControlError>,
    },
}
