//! ListSites query
//! Derives the enabled flag from enabled-set membership at call time

use crate::domain::entities::Site;
use crate::domain::services::SiteRepository;
use crate::domain::{ListSitesResponse, Result};
use async_trait::async_trait;
use std::collections::HashSet;
use std::sync::Arc;

#[async_trait]
pub trait ListSites: Send + Sync {
    async fn execute(&self) -> Result<ListSitesResponse>;
}

pub struct ListSitesUseCase {
    repository: Arc<SiteRepository>,
}

impl ListSitesUseCase {
    pub fn new(repository: Arc<SiteRepository>) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl ListSites for ListSitesUseCase {
    async fn execute(&self) -> Result<ListSitesResponse> {
        let mut available = self.repository.list_available().await;
        available.sort();
        let enabled: HashSet<String> = self.repository.list_enabled().await.into_iter().collect();

        let sites = available
            .into_iter()
            .map(|name| {
                let is_enabled = enabled.contains(&name);
                Site {
                    name,
                    enabled: is_enabled,
                }
            })
            .collect();

        Ok(ListSitesResponse { sites })
    }
}
