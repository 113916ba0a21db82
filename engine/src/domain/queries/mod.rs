//! Query DTOs for read-only operations

use crate::domain::entities::Site;

#[derive(Debug, Clone)]
pub struct ListSitesResponse {
    pub sites: Vec<Site>,
}

#[derive(Debug, Clone)]
pub struct SiteContentResponse {
    pub name: String,
    pub content: String,
}

/// Status of the managed process and its optional dependent process.
/// An inactive dependent process is a normal state, never an error.
#[derive(Debug, Clone, Copy)]
pub struct ServiceStatusResponse {
    pub process_active: bool,
    pub dependent_process_active: bool,
}
