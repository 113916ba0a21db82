pub mod control_service;
pub mod create_site;
pub mod delete_site;
pub mod get_site;
pub mod get_status;
pub mod list_sites;
pub mod toggle_site;
pub mod update_site;

pub use control_service::{ControlService, ControlServiceUseCase};
pub use create_site::{CreateSite, CreateSiteUseCase};
pub use delete_site::{DeleteSite, DeleteSiteUseCase};
pub use get_site::{GetSite, GetSiteUseCase};
pub use get_status::{GetStatus, GetStatusUseCase};
pub use list_sites::{ListSites, ListSitesUseCase};
pub use toggle_site::{ToggleSite, ToggleSiteUseCase};
pub use update_site::{UpdateSite, UpdateSiteUseCase};
