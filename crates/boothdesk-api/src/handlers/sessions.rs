//! Admin session view and termination handlers.

use axum::Json;
use axum::extract::{Path, State};
use uuid::Uuid;

use boothdesk_core::error::AppError;
use boothdesk_entity::session::Session;
use boothdesk_service::session::SessionSummary;

use crate::dto::response::ApiResponse;
use crate::extractors::AdminUser;
use crate::state::AppState;

/// GET /api/auth/sessions
pub async fn list_sessions(
    State(state): State<AppState>,
    _admin: AdminUser,
) -> Result<Json<ApiResponse<Vec<SessionSummary>>>, AppError> {
    let sessions = state.session_service.list_all().await?;
    Ok(Json(ApiResponse::ok(sessions)))
}

/// PUT /api/auth/sessions/{id}/logout
pub async fn terminate_session(
    State(state): State<AppState>,
    _admin: AdminUser,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<Session>>, AppError> {
    let session = state.session_manager.terminate_by_id(id).await?;
    Ok(Json(ApiResponse::ok(session)))
}

/// DELETE /api/auth/sessions/{id}
///
/// Same semantics as the PUT form; kept for clients that model termination
/// as a delete.
pub async fn delete_session(
    State(state): State<AppState>,
    admin: AdminUser,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<Session>>, AppError> {
    terminate_session(State(state), admin, Path(id))
        .await
}
