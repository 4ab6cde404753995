//! Host command abstraction layer

pub mod command_runner;
pub mod mock_runner;
pub mod package_manager;
pub mod service_manager;
pub mod system_runner;

pub use command_runner::{CommandOutput, CommandRunner};
pub use package_manager::PackageManager;
pub use service_manager::{ServiceManager, UnitAction};
pub use system_runner::SystemRunner;

#[cfg(test)]
pub use mock_runner::MockRunner;
