//! ToggleSite use case
//! The one protocol with rollback: changing the enabled set can break the
//! live process, so the membership change is validated against the full
//! configuration set and undone if validation fails.

use crate::domain::ports::ServiceSupervisor;
use crate::domain::services::SiteRepository;
use crate::domain::value_objects::{ServiceAction, SiteName};
use crate::domain::{DomainError, Result, ToggleSiteCommand, ToggleSiteResponse};
use async_trait::async_trait;
use std::sync::Arc;
use tracing::{error, info, warn};

#[async_trait]
pub trait ToggleSite: Send + Sync {
    async fn execute(&self, command: ToggleSiteCommand) -> Result<ToggleSiteResponse>;
}

pub struct ToggleSiteUseCase {
    repository: Arc<SiteRepository>,
    supervisor: Arc<dyn ServiceSupervisor>,
    service_unit: String,
}

impl ToggleSiteUseCase {
    pub fn new(
        repository: Arc<SiteRepository>,
        supervisor: Arc<dyn ServiceSupervisor>,
        service_unit: String,
    ) -> Self {
        Self {
            repository,
            supervisor,
            service_unit,
        }
    }
}

#[async_trait]
impl ToggleSite for ToggleSiteUseCase {
    async fn execute(&self, command: ToggleSiteCommand) -> Result<ToggleSiteResponse> {
        let name = SiteName::parse(&command.name)?;

        if command.enable {
            self.repository.link(&name).await?;
        } else {
            self.repository.unlink(&name).await?;
        }

        let check = self.supervisor.check_config().await;
        if !check.success {
            // Restore the pre-toggle enabled set before reporting failure
            let rollback = if command.enable {
                self.repository.unlink(&name).await
            } else {
                self.repository.link(&name).await
            };
            match rollback {
                Ok(()) => warn!(site = %name, "Validation failed, toggle rolled back"),
                Err(e) => {
                    error!(site = %name, error = %e, "Rollback after failed validation also failed")
                }
            }
            return Err(DomainError::ValidationFailed(check.detail()));
        }

        // Reload failure is a partial success: the new state validated, so it
        // is kept; only the running process is stale.
        let reload = self
            .supervisor
            .control(&self.service_unit, ServiceAction::Reload)
            .await;
        if !reload.success {
            return Err(DomainError::ReloadFailed(reload.detail()));
        }

        info!(site = %name, enabled = command.enable, "Site toggled");

        Ok(ToggleSiteResponse {
            name: name.to_string(),
            enabled: command.enable,
        })
    }
}
