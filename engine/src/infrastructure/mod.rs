//! Infrastructure layer: settings plus adapters for the domain ports

pub mod config;
pub mod sudo_runner;
pub mod systemctl_supervisor;

pub use config::Settings;
pub use sudo_runner::{SudoCommandRunner, SudoCredential};
pub use systemctl_supervisor::SystemctlSupervisor;
