pub mod config_repository;
pub mod sc;
pub mod watchlist_repository;

pub use config_repository::ConfigRepository;
pub use watchlist_repository::JsonWatchlistStore;
