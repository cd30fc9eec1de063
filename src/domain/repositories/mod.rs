pub mod service_controller;
pub mod status_prober;
pub mod watchlist_store;

pub use service_controller::ServiceController;
pub use status_prober::StatusProber;
pub use watchlist_store::WatchlistStore;
