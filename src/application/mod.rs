pub mod event_bus;
pub mod manager;
pub mod reconciler;
pub mod state;
pub mod supervisor;
pub mod use_case_container;
pub mod use_cases;

pub use event_bus::{CoreEvent, EventBus};
pub use manager::ServiceManager;
pub use reconciler::{refresh_channel, Reconciler};
pub use state::shared_state;
pub use supervisor::ActionSupervisor;
pub use use_case_container::UseCaseContainer;
