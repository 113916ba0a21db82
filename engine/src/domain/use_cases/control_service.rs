//! ControlService use case
//! Start/stop pass straight through; restart and reload are gated on a
//! configuration check so a bad config never takes the process down.

use crate::domain::ports::ServiceSupervisor;
use crate::domain::value_objects::ServiceAction;
use crate::domain::{ControlServiceCommand, ControlServiceResponse, DomainError, Result};
use async_trait::async_trait;
use std::sync::Arc;
use tracing::info;

#[async_trait]
pub trait ControlService: Send + Sync {
    async fn execute(&self, command: ControlServiceCommand) -> Result<ControlServiceResponse>;
}

pub struct ControlServiceUseCase {
    supervisor: Arc<dyn ServiceSupervisor>,
    service_unit: String,
}

impl ControlServiceUseCase {
    pub fn new(supervisor: Arc<dyn ServiceSupervisor>, service_unit: String) -> Self {
        Self {
            supervisor,
            service_unit,
        }
    }
}

#[async_trait]
impl ControlService for ControlServiceUseCase {
    async fn execute(&self, command: ControlServiceCommand) -> Result<ControlServiceResponse> {
        let action = ServiceAction::parse(&command.action).ok_or_else(|| {
            DomainError::InvalidInput(format!("Unknown service action: {}", command.action))
        })?;

        if action.needs_validation() {
            let check = self.supervisor.check_config().await;
            if !check.success {
                return Err(DomainError::ValidationFailed(check.detail()));
            }
        }

        let output = self.supervisor.control(&self.service_unit, action).await;
        if !output.success {
            return Err(DomainError::ActionFailed(format!(
                "{} {} failed: {}",
                action,
                self.service_unit,
                output.detail()
            )));
        }

        info!(unit = %self.service_unit, action = %action, "Service action completed");

        Ok(ControlServiceResponse {
            message: format!("{} {} successfully", self.service_unit, action.past_tense()),
        })
    }
}
