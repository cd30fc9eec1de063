pub mod command;
pub mod controller;
pub mod prober;

pub use controller::ScServiceController;
pub use prober::ScStatusProber;
