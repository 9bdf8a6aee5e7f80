use crate::AppState;

use axum::{
    Json,
    extract::State,
    response::{IntoResponse, Response},
};
use http::StatusCode;
use log::error;
use serde_json::json;

/// GET /health - Health check with component status
pub async fn health(State(state): State<AppState>) -> Response {
    let (status, overall, database) = match state.store.ping().await {
        Ok(()) => (StatusCode::OK, "healthy", "operational"),
        Err(e) => {
            error!("Health check: database unavailable: {}", e);
            (StatusCode::SERVICE_UNAVAILABLE, "degraded", "unavailable")
        }
    };

    let health = json!({
        "status": overall,
        "version": env!("CARGO_PKG_VERSION"),
        "components": {
            "database": database,
        },
        "timestamp": chrono::Utc::now().to_rfc3339(),
    });

    (status, Json(health)).into_response()
}

/// GET /live - Liveness probe (is the process alive?)
pub async fn liveness() -> Response {
    (StatusCode::OK, "OK").into_response()
}

/// GET /ready - Readiness probe (can the store answer?)
pub async fn readiness(State(state): State<AppState>) -> Response {
    match state.store.ping().await {
        Ok(()) => (StatusCode::OK, "Ready").into_response(),
        Err(e) => {
            error!("Readiness check failed: {}", e);
            (StatusCode::SERVICE_UNAVAILABLE, "Not ready").into_response()
        }
    }
}
