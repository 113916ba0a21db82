//! REST API handlers using axum

use crate::application::UseCaseRegistry;
use crate::domain::value_objects::{SiteIntent, DEFAULT_LISTEN_PORT};
use crate::domain::{
    ControlServiceCommand, CreateSiteCommand, DeleteSiteCommand, DomainError, ToggleSiteCommand,
    UpdateSiteCommand,
};
use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::{error, info};

/// Shared application state
pub type AppState = Arc<UseCaseRegistry>;

/// Error response: short label plus optional multi-line diagnostics
#[derive(Serialize)]
pub struct ErrorResponse {
    pub error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

/// Simple success response
#[derive(Serialize)]
pub struct SuccessResponse {
    pub message: String,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub warnings: Vec<String>,
}

impl SuccessResponse {
    fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            warnings: Vec::new(),
        }
    }

    fn with_warnings(message: impl Into<String>, warnings: Vec<String>) -> Self {
        Self {
            message: message.into(),
            warnings,
        }
    }
}

type HandlerError = (StatusCode, Json<ErrorResponse>);

/// Translate a domain error into status code + `{error, details?}`
fn map_error(err: DomainError) -> HandlerError {
    let status = match &err {
        DomainError::InvalidInput(_)
        | DomainError::AlreadyExists(_)
        | DomainError::ValidationFailed(_) => StatusCode::BAD_REQUEST,
        DomainError::NotFound(_) => StatusCode::NOT_FOUND,
        DomainError::WriteFailed(_)
        | DomainError::DeleteFailed(_)
        | DomainError::ToggleFailed(_)
        | DomainError::ActionFailed(_)
        | DomainError::ReloadFailed(_) => StatusCode::INTERNAL_SERVER_ERROR,
    };

    // Diagnostics from the underlying command go into details verbatim
    let (label, details) = match &err {
        DomainError::InvalidInput(msg) => (msg.clone(), None),
        DomainError::NotFound(_) | DomainError::AlreadyExists(_) => (err.to_string(), None),
        DomainError::WriteFailed(d) => ("Failed to write site configuration".to_string(), Some(d)),
        DomainError::DeleteFailed(d) => ("Failed to delete site".to_string(), Some(d)),
        DomainError::ToggleFailed(d) => {
            ("Failed to change site enabled state".to_string(), Some(d))
        }
        DomainError::ActionFailed(d) => ("Service action failed".to_string(), Some(d)),
        DomainError::ValidationFailed(d) => ("Configuration test failed".to_string(), Some(d)),
        DomainError::ReloadFailed(d) => {
            ("Configuration accepted but reload failed".to_string(), Some(d))
        }
    };

    (
        status,
        Json(ErrorResponse {
            error: label,
            details: details.cloned(),
        }),
    )
}

// ===== Request DTOs (original field names) =====

/// Body of POST /sites and PUT /sites/:name
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SaveSiteRequest {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(rename = "type")]
    #[serde(default)]
    pub site_type: Option<String>,
    #[serde(default)]
    pub content: Option<String>,
    #[serde(default)]
    pub domain: Option<String>,
    #[serde(default)]
    pub port: Option<u16>,
    #[serde(default)]
    pub listen_port: Option<u16>,
    #[serde(default)]
    pub root_path: Option<String>,
    #[serde(default)]
    pub php_enabled: bool,
}

impl SaveSiteRequest {
    /// Convert the wire shape into a creation intent
    fn intent(self) -> Result<SiteIntent, DomainError> {
        let listen_port = self.listen_port.unwrap_or(DEFAULT_LISTEN_PORT);
        match self.site_type.as_deref() {
            Some("proxy") => {
                let server_name = self
                    .domain
                    .filter(|d| !d.trim().is_empty())
                    .ok_or_else(|| DomainError::InvalidInput("Domain is required".to_string()))?;
                let upstream_port = self.port.ok_or_else(|| {
                    DomainError::InvalidInput("Target port is required".to_string())
                })?;
                Ok(SiteIntent::Proxy {
                    listen_port,
                    server_name,
                    upstream_port,
                })
            }
            Some("static") => {
                let server_name = self
                    .domain
                    .filter(|d| !d.trim().is_empty())
                    .ok_or_else(|| DomainError::InvalidInput("Domain is required".to_string()))?;
                Ok(SiteIntent::Static {
                    listen_port,
                    server_name,
                    root: self.root_path,
                    php_enabled: self.php_enabled,
                })
            }
            // Raw content, either explicit type or none
            _ => Ok(SiteIntent::Raw {
                content: self.content.unwrap_or_default(),
            }),
        }
    }
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeleteSiteRequest {
    #[serde(default)]
    pub delete_folder: bool,
}

#[derive(Deserialize)]
pub struct ToggleSiteRequest {
    pub enable: bool,
}

// ===== Response DTOs =====

#[derive(Serialize)]
pub struct SiteInfo {
    pub name: String,
    pub enabled: bool,
}

#[derive(Serialize)]
pub struct SiteContent {
    pub content: String,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ServiceStatus {
    pub process_active: bool,
    pub dependent_process_active: bool,
}

// ===== Handlers =====

/// GET /status
pub async fn get_status(
    State(registry): State<AppState>,
) -> Result<Json<ServiceStatus>, HandlerError> {
    let status = registry.get_status().execute().await.map_err(map_error)?;

    Ok(Json(ServiceStatus {
        process_active: status.process_active,
        dependent_process_active: status.dependent_process_active,
    }))
}

/// POST /service/:action
pub async fn control_service(
    State(registry): State<AppState>,
    Path(action): Path<String>,
) -> Result<Json<SuccessResponse>, HandlerError> {
    info!(action = %action, "REST service control request");

    let result = registry
        .control_service()
        .execute(ControlServiceCommand { action })
        .await
        .map_err(|e| {
            error!(error = %e, "Service control failed");
            map_error(e)
        })?;

    Ok(Json(SuccessResponse::new(result.message)))
}

/// GET /sites
pub async fn list_sites(
    State(registry): State<AppState>,
) -> Result<Json<Vec<SiteInfo>>, HandlerError> {
    let result = registry.list_sites().execute().await.map_err(map_error)?;

    let sites = result
        .sites
        .into_iter()
        .map(|s| SiteInfo {
            name: s.name,
            enabled: s.enabled,
        })
        .collect();

    Ok(Json(sites))
}

/// GET /sites/:name
pub async fn get_site(
    State(registry): State<AppState>,
    Path(name): Path<String>,
) -> Result<Json<SiteContent>, HandlerError> {
    let result = registry.get_site().execute(&name).await.map_err(map_error)?;

    Ok(Json(SiteContent {
        content: result.content,
    }))
}

/// POST /sites
pub async fn create_site(
    State(registry): State<AppState>,
    Json(req): Json<SaveSiteRequest>,
) -> Result<Json<SuccessResponse>, HandlerError> {
    let name = req
        .name
        .clone()
        .filter(|n| !n.trim().is_empty())
        .ok_or_else(|| {
            map_error(DomainError::InvalidInput(
                "Site name is required".to_string(),
            ))
        })?;
    info!(site = %name, "REST create site request");

    let intent = req.intent().map_err(map_error)?;
    let result = registry
        .create_site()
        .execute(CreateSiteCommand { name, intent })
        .await
        .map_err(|e| {
            error!(error = %e, "Create site failed");
            map_error(e)
        })?;

    Ok(Json(SuccessResponse::with_warnings(
        "Site saved successfully",
        result.warnings,
    )))
}

/// PUT /sites/:name
pub async fn update_site(
    State(registry): State<AppState>,
    Path(name): Path<String>,
    Json(req): Json<SaveSiteRequest>,
) -> Result<Json<SuccessResponse>, HandlerError> {
    info!(site = %name, "REST update site request");

    let intent = req.intent().map_err(map_error)?;
    registry
        .update_site()
        .execute(UpdateSiteCommand { name, intent })
        .await
        .map_err(|e| {
            error!(error = %e, "Update site failed");
            map_error(e)
        })?;

    Ok(Json(SuccessResponse::new("Site saved successfully")))
}

/// DELETE /sites/:name
pub async fn delete_site(
    State(registry): State<AppState>,
    Path(name): Path<String>,
    body: Option<Json<DeleteSiteRequest>>,
) -> Result<Json<SuccessResponse>, HandlerError> {
    let delete_directory = body.map(|Json(b)| b.delete_folder).unwrap_or(false);
    info!(site = %name, delete_directory, "REST delete site request");

    let result = registry
        .delete_site()
        .execute(DeleteSiteCommand {
            name,
            delete_directory,
        })
        .await
        .map_err(|e| {
            error!(error = %e, "Delete site failed");
            map_error(e)
        })?;

    Ok(Json(SuccessResponse::with_warnings(
        "Site deleted",
        result.warnings,
    )))
}

/// POST /sites/:name/toggle
pub async fn toggle_site(
    State(registry): State<AppState>,
    Path(name): Path<String>,
    Json(req): Json<ToggleSiteRequest>,
) -> Result<Json<SuccessResponse>, HandlerError> {
    info!(site = %name, enable = req.enable, "REST toggle site request");

    let result = registry
        .toggle_site()
        .execute(ToggleSiteCommand {
            name,
            enable: req.enable,
        })
        .await
        .map_err(|e| {
            error!(error = %e, "Toggle site failed");
            map_error(e)
        })?;

    let message = if result.enabled {
        "Site enabled successfully"
    } else {
        "Site disabled successfully"
    };

    Ok(Json(SuccessResponse::new(message)))
}
