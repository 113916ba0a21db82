//! GetSite query

use crate::domain::services::SiteRepository;
use crate::domain::value_objects::SiteName;
use crate::domain::{Result, SiteContentResponse};
use async_trait::async_trait;
use std::sync::Arc;

#[async_trait]
pub trait GetSite: Send + Sync {
    async fn execute(&self, name: &str) -> Result<SiteContentResponse>;
}

pub struct GetSiteUseCase {
    repository: Arc<SiteRepository>,
}

impl GetSiteUseCase {
    pub fn new(repository: Arc<SiteRepository>) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl GetSite for GetSiteUseCase {
    async fn execute(&self, name: &str) -> Result<SiteContentResponse> {
        let name = SiteName::parse(name)?;
        let content = self.repository.read(&name).await?;

        Ok(SiteContentResponse {
            name: name.to_string(),
            content,
        })
    }
}
