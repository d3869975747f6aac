//! Dashboard summary handler.

use axum::Json;
use axum::extract::State;

use boothdesk_core::error::AppError;
use boothdesk_service::dashboard::DashboardSummary;

use crate::dto::response::ApiResponse;
use crate::extractors::AuthUser;
use crate::state::AppState;

/// GET /api/dashboard/summary
pub async fn summary(
    State(state): State<AppState>,
    _auth: AuthUser,
) -> Result<Json<ApiResponse<DashboardSummary>>, AppError> {
    let summary = state.dashboard_service.summary().await?;
    Ok(Json(ApiResponse::ok(summary)))
}
