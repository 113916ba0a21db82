pub mod commands;
pub mod entities;
pub mod error;
pub mod ports;
pub mod queries;
pub mod services;
pub mod use_cases;
pub mod value_objects;

pub use commands::{
    ControlServiceCommand, ControlServiceResponse, CreateSiteCommand, CreateSiteResponse,
    DeleteSiteCommand, DeleteSiteResponse, ToggleSiteCommand, ToggleSiteResponse,
    UpdateSiteCommand, UpdateSiteResponse,
};
pub use entities::Site;
pub use error::{DomainError, Result};
pub use queries::{ListSitesResponse, ServiceStatusResponse, SiteContentResponse};
pub use value_objects::{ServiceAction, SiteIntent, SiteName, DEFAULT_LISTEN_PORT};
