//! Health and readiness endpoints

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use axum_helpers::ShutdownCoordinator;
use core_config::AppInfo;
use serde::Serialize;

#[derive(Serialize)]
struct HealthResponse {
    status: &'static str,
    service: &'static str,
    version: &'static str,
}

#[derive(Serialize)]
struct ReadyResponse {
    ready: bool,
}

/// Liveness: always 200 while the process is running.
async fn health(app: AppInfo) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy",
        service: app.name,
        version: app.version,
    })
}

/// Readiness: 200 until graceful shutdown starts, 503 while draining.
async fn ready(coordinator: ShutdownCoordinator) -> Response {
    if coordinator.is_shutting_down() {
        (StatusCode::SERVICE_UNAVAILABLE, Json(ReadyResponse { ready: false })).into_response()
    } else {
        (StatusCode::OK, Json(ReadyResponse { ready: true })).into_response()
    }
}

pub fn router(app: AppInfo, coordinator: ShutdownCoordinator) -> Router {
    Router::new()
        .route("/health", get(move || health(app)))
        .route("/ready", get(move || ready(coordinator)))
}
