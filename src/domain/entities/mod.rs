pub mod config;
pub mod service;
pub mod snapshot;
pub mod watchlist;

pub use config::AppConfig;
pub use service::{ControlAction, ServiceStatus};
pub use snapshot::StateSnapshot;
pub use watchlist::Watchlist;
