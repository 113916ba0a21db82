//! ServiceSupervisor port
//! Interface to the external process supervisor (systemd in production)

use crate::domain::ports::CommandOutput;
use crate::domain::value_objects::ServiceAction;
use async_trait::async_trait;

/// Port for observing and controlling the managed service processes
#[async_trait]
pub trait ServiceSupervisor: Send + Sync {
    /// Whether the unit currently reports active; polled on demand,
    /// never cached across calls
    async fn is_active(&self, unit: &str) -> bool;

    /// Run a lifecycle action against the unit
    async fn control(&self, unit: &str, action: ServiceAction) -> CommandOutput;

    /// Syntax-check the full configuration set of the managed server,
    /// not just a single entry
    async fn check_config(&self) -> CommandOutput;
}
