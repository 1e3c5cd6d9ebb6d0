use axum::extract::State;
use axum::{routing::get, Json, Router};
use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::state::AppState;

/// Health check response payload.
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HealthResponse {
    pub success: bool,
    pub message: &'static str,
    /// `ok` when the database answers, `degraded` otherwise.
    pub status: &'static str,
    /// Crate version from Cargo.toml.
    pub version: &'static str,
    pub db_healthy: bool,
    pub uptime_secs: u64,
    pub timestamp: DateTime<Utc>,
}

/// GET /health -- returns service and database health.
async fn health_check(State(state): State<AppState>) -> Json<HealthResponse> {
    let db_healthy = poetry_db::health_check(state.poems.pool()).await.is_ok();
    if !db_healthy {
        tracing::warn!("Health check could not reach the database");
    }

    Json(HealthResponse {
        success: true,
        message: "Poetry API is running",
        status: if db_healthy { "ok" } else { "degraded" },
        version: env!("CARGO_PKG_VERSION"),
        db_healthy,
        uptime_secs: state.started_at.elapsed().as_secs(),
        timestamp: Utc::now(),
    })
}

/// Mount health check routes at root level.
pub fn router() -> Router<AppState> {
    Router::new().route("/health", get(health_check))
}
