pub mod control_operations;
pub mod watchlist_operations;

pub use control_operations::*;
pub use watchlist_operations::*;
