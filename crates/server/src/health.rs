use axum::extract::State;
use axum::routing::get;
use axum::{Json, Router};
use serde::Serialize;
use std::sync::OnceLock;
use std::time::Instant;

use crate::backend::CampusBackend;

static START_TIME: OnceLock<Instant> = OnceLock::new();

/// Record the application start time. Call once during startup.
pub fn record_start_time() {
    START_TIME.get_or_init(Instant::now);
}

/// Reachability of the campus backend as seen from this server.
#[derive(Debug, Serialize)]
pub struct BackendHealth {
    pub base_url: String,
    pub reachable: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status_code: Option<u16>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// Health check response.
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub backend: BackendHealth,
    pub uptime_seconds: u64,
    pub version: String,
}

/// Health check handler. Always answers 200; `status` is `degraded` when
/// the campus backend cannot be reached.
pub async fn health_check(State(backend): State<CampusBackend>) -> Json<HealthResponse> {
    let backend_health = match backend.ping().await {
        Ok(code) => BackendHealth {
            base_url: backend.base_url().to_string(),
            reachable: true,
            status_code: Some(code),
            error: None,
        },
        Err(e) => {
            tracing::warn!(error = %e, "campus backend health probe failed");
            BackendHealth {
                base_url: backend.base_url().to_string(),
                reachable: false,
                status_code: None,
                error: Some(e.to_string()),
            }
        }
    };

    let uptime = START_TIME.get().map(|t| t.elapsed().as_secs()).unwrap_or(0);
    let status = if backend_health.reachable { "ok" } else { "degraded" };

    Json(HealthResponse {
        status: status.to_string(),
        backend: backend_health,
        uptime_seconds: uptime,
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

/// `/health` bound to the given backend, ready to merge into the app router.
pub fn router(backend: CampusBackend) -> Router {
    Router::new()
        .route("/health", get(health_check))
        .with_state(backend)
}
