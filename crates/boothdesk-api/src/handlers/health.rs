//! Health check handler.

use axum::Json;
use axum::extract::State;
use serde::Serialize;

use boothdesk_database::connection;

use crate::state::AppState;

/// Health probe payload.
#[derive(Debug, Serialize)]
pub struct HealthStatus {
    /// "ok" or "degraded".
    pub status: &'static str,
    /// Whether the database answered the probe.
    pub database: bool,
}

/// GET /api/health — no auth required.
pub async fn health_check(State(state): State<AppState>) -> Json<HealthStatus> {
    let database = connection::health_check(&state.db_pool)
        .await
        .unwrap_or(false);
    Json(HealthStatus {
        status: if database { "ok" } else { "degraded" },
        database,
    })
}
