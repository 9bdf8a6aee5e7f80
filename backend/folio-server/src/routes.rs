use crate::{AppState, create_project, delete_project, get_projects, health, update_project};

use axum::{Router, routing::get};
use tower_http::cors::{Any, CorsLayer};

/// Build the application router with all endpoints
pub fn build_router(state: AppState) -> Router {
    Router::new()
        // Projects resource
        .route(
            "/api/projects",
            get(get_projects)
                .post(create_project)
                .put(update_project)
                .delete(delete_project),
        )
        // Health check endpoints
        .route("/health", get(health::health))
        .route("/live", get(health::liveness))
        .route("/ready", get(health::readiness))
        .with_state(state)
        // Page and API may be served from different origins
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
}
