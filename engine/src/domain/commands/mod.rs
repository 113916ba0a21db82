//! Command DTOs for state-changing operations

use crate::domain::value_objects::SiteIntent;

#[derive(Debug, Clone)]
pub struct CreateSiteCommand {
    pub name: String,
    pub intent: SiteIntent,
}

#[derive(Debug, Clone)]
pub struct CreateSiteResponse {
    pub name: String,
    /// Non-fatal problems (directory bootstrap, enable, reload)
    pub warnings: Vec<String>,
}

#[derive(Debug, Clone)]
pub struct UpdateSiteCommand {
    pub name: String,
    pub intent: SiteIntent,
}

#[derive(Debug, Clone)]
pub struct UpdateSiteResponse {
    pub name: String,
}

#[derive(Debug, Clone)]
pub struct DeleteSiteCommand {
    pub name: String,
    /// Also remove the site's workspace content directory
    pub delete_directory: bool,
}

#[derive(Debug, Clone)]
pub struct DeleteSiteResponse {
    pub name: String,
    pub warnings: Vec<String>,
}

#[derive(Debug, Clone)]
pub struct ToggleSiteCommand {
    pub name: String,
    pub enable: bool,
}

#[derive(Debug, Clone)]
pub struct ToggleSiteResponse {
    pub name: String,
    pub enabled: bool,
}

#[derive(Debug, Clone)]
pub struct ControlServiceCommand {
    /// Raw action segment from the request; parsed by the use case
    pub action: String,
}

#[derive(Debug, Clone)]
pub struct ControlServiceResponse {
    pub message: String,
}
