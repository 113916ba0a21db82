//! UpdateSite use case
//! Replaces the available entry's content. Never alters enabled state and
//! never touches the content directory.

use crate::domain::services::{ConfigGenerator, SiteRepository};
use crate::domain::value_objects::SiteName;
use crate::domain::{Result, UpdateSiteCommand, UpdateSiteResponse};
use async_trait::async_trait;
use std::sync::Arc;
use tracing::info;

#[async_trait]
pub trait UpdateSite: Send + Sync {
    async fn execute(&self, command: UpdateSiteCommand) -> Result<UpdateSiteResponse>;
}

pub struct UpdateSiteUseCase {
    repository: Arc<SiteRepository>,
    generator: Arc<ConfigGenerator>,
}

impl UpdateSiteUseCase {
    pub fn new(repository: Arc<SiteRepository>, generator: Arc<ConfigGenerator>) -> Self {
        Self {
            repository,
            generator,
        }
    }
}

#[async_trait]
impl UpdateSite for UpdateSiteUseCase {
    async fn execute(&self, command: UpdateSiteCommand) -> Result<UpdateSiteResponse> {
        let name = SiteName::parse(&command.name)?;
        let content = self.generator.render(&name, &command.intent)?;

        self.repository.write(&name, &content).await?;
        info!(site = %name, "Site configuration updated");

        Ok(UpdateSiteResponse {
            name: name.to_string(),
        })
    }
}
