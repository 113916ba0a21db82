//! REST API router configuration

use super::handlers::{
    control_service, create_site, delete_site, get_site, get_status, list_sites, toggle_site,
    update_site, AppState,
};
use axum::{
    routing::{get, post},
    Router,
};

/// Build the REST API router, all routes under /api
pub fn build_router(state: AppState) -> Router {
    Router::new()
        // Service status and control
        .route("/api/status", get(get_status))
        .route("/api/service/:action", post(control_service))
        // Site CRUD
        .route("/api/sites", get(list_sites).post(create_site))
        .route(
            "/api/sites/:name",
            get(get_site).put(update_site).delete(delete_site),
        )
        // Enable/disable
        .route("/api/sites/:name/toggle", post(toggle_site))
        .with_state(state)
}
