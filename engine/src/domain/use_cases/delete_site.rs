//! DeleteSite use case
//! Removes the enabled symlink and the available entry, optionally removes
//! the workspace content directory, then reloads best-effort.

use crate::domain::ports::ServiceSupervisor;
use crate::domain::services::{ContentDirectoryService, SiteRepository};
use crate::domain::value_objects::{ServiceAction, SiteName};
use crate::domain::{DeleteSiteCommand, DeleteSiteResponse, Result};
use async_trait::async_trait;
use std::sync::Arc;
use tracing::{info, warn};

#[async_trait]
pub trait DeleteSite: Send + Sync {
    async fn execute(&self, command: DeleteSiteCommand) -> Result<DeleteSiteResponse>;
}

pub struct DeleteSiteUseCase {
    repository: Arc<SiteRepository>,
    directories: Arc<ContentDirectoryService>,
    supervisor: Arc<dyn ServiceSupervisor>,
    service_unit: String,
}

impl DeleteSiteUseCase {
    pub fn new(
        repository: Arc<SiteRepository>,
        directories: Arc<ContentDirectoryService>,
        supervisor: Arc<dyn ServiceSupervisor>,
        service_unit: String,
    ) -> Self {
        Self {
            repository,
            directories,
            supervisor,
            service_unit,
        }
    }
}

#[async_trait]
impl DeleteSite for DeleteSiteUseCase {
    async fn execute(&self, command: DeleteSiteCommand) -> Result<DeleteSiteResponse> {
        let name = SiteName::parse(&command.name)?;

        // Aborts with DeleteFailed before any directory removal or reload
        self.repository.remove(&name).await?;

        let mut warnings = Vec::new();

        if command.delete_directory {
            warnings.extend(self.directories.remove(name.base()).await);
        }

        let reload = self
            .supervisor
            .control(&self.service_unit, ServiceAction::Reload)
            .await;
        if !reload.success {
            warn!(site = %name, detail = %reload.detail(), "Reload after delete failed");
            warnings.push(format!(
                "Site deleted but reload failed: {}",
                reload.detail()
            ));
        }

        info!(site = %name, delete_directory = command.delete_directory, "Site deleted");

        Ok(DeleteSiteResponse {
            name: name.to_string(),
            warnings,
        })
    }
}
