//! Use Case Registry
//! Composition root: wires ports, domain services and use cases together

use crate::domain::ports::{CommandRunner, ServiceSupervisor};
use crate::domain::services::{ConfigGenerator, ContentDirectoryService, SiteRepository};
use crate::domain::use_cases::{
    ControlService, ControlServiceUseCase, CreateSite, CreateSiteUseCase, DeleteSite,
    DeleteSiteUseCase, GetSite, GetSiteUseCase, GetStatus, GetStatusUseCase, ListSites,
    ListSitesUseCase, ToggleSite, ToggleSiteUseCase, UpdateSite, UpdateSiteUseCase,
};
use crate::infrastructure::Settings;
use std::sync::Arc;

/// Registry for all application use cases
pub struct UseCaseRegistry {
    // Command use cases (modify state)
    create_site: Arc<dyn CreateSite>,
    update_site: Arc<dyn UpdateSite>,
    delete_site: Arc<dyn DeleteSite>,
    toggle_site: Arc<dyn ToggleSite>,
    control_service: Arc<dyn ControlService>,

    // Query use cases (read state)
    list_sites: Arc<dyn ListSites>,
    get_site: Arc<dyn GetSite>,
    get_status: Arc<dyn GetStatus>,
}

impl UseCaseRegistry {
    /// Wire up every use case from the two ports and the settings
    pub fn new(
        runner: Arc<dyn CommandRunner>,
        supervisor: Arc<dyn ServiceSupervisor>,
        settings: &Settings,
    ) -> Self {
        let repository = Arc::new(SiteRepository::new(
            runner.clone(),
            settings.sites_available.as_str(),
            settings.sites_enabled.as_str(),
            settings.staging_dir.as_str(),
        ));
        let generator = Arc::new(ConfigGenerator::new(
            settings.workspace_root.as_str(),
            settings.php_socket.as_str(),
        ));
        let directories = Arc::new(ContentDirectoryService::new(
            runner,
            settings.workspace_root.as_str(),
            settings.staging_dir.as_str(),
            settings.content_owner.clone(),
        ));

        let create_site = Arc::new(CreateSiteUseCase::new(
            repository.clone(),
            generator.clone(),
            directories.clone(),
            supervisor.clone(),
            settings.service_unit.clone(),
        ));
        let update_site = Arc::new(UpdateSiteUseCase::new(
            repository.clone(),
            generator.clone(),
        ));
        let delete_site = Arc::new(DeleteSiteUseCase::new(
            repository.clone(),
            directories,
            supervisor.clone(),
            settings.service_unit.clone(),
        ));
        let toggle_site = Arc::new(ToggleSiteUseCase::new(
            repository.clone(),
            supervisor.clone(),
            settings.service_unit.clone(),
        ));
        let control_service = Arc::new(ControlServiceUseCase::new(
            supervisor.clone(),
            settings.service_unit.clone(),
        ));

        let list_sites = Arc::new(ListSitesUseCase::new(repository.clone()));
        let get_site = Arc::new(GetSiteUseCase::new(repository));
        let get_status = Arc::new(GetStatusUseCase::new(
            supervisor,
            settings.service_unit.clone(),
            settings.dependent_unit.clone(),
        ));

        Self {
            create_site,
            update_site,
            delete_site,
            toggle_site,
            control_service,
            list_sites,
            get_site,
            get_status,
        }
    }

    // ===== Command Use Cases =====

    pub fn create_site(&self) -> Arc<dyn CreateSite> {
        self.create_site.clone()
    }

    pub fn update_site(&self) -> Arc<dyn UpdateSite> {
        self.update_site.clone()
    }

    pub fn delete_site(&self) -> Arc<dyn DeleteSite> {
        self.delete_site.clone()
    }

    pub fn toggle_site(&self) -> Arc<dyn ToggleSite> {
        self.toggle_site.clone()
    }

    pub fn control_service(&self) -> Arc<dyn ControlService> {
        self.control_service.clone()
    }

    // ===== Query Use Cases =====

    pub fn list_sites(&self) -> Arc<dyn ListSites> {
        self.list_sites.clone()
    }

    pub fn get_site(&self) -> Arc<dyn GetSite> {
        self.get_site.clone()
    }

    pub fn get_status(&self) -> Arc<dyn GetStatus> {
        self.get_status.clone()
    }
}
