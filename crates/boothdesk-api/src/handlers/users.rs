//! Admin handlers for the registration approval queue.

use axum::Json;
use axum::extract::{Path, State};
use uuid::Uuid;

use boothdesk_core::error::AppError;

use crate::dto::response::{ApiResponse, MessageResponse, UserResponse};
use crate::extractors::AdminUser;
use crate::state::AppState;

/// GET /api/auth/pending
pub async fn list_pending(
    State(state): State<AppState>,
    _admin: AdminUser,
) -> Result<Json<ApiResponse<Vec<UserResponse>>>, AppError> {
    let users = state.admin_user_service.list_pending().await?;
    let users = users.into_iter().map(UserResponse::from).collect();
    Ok(Json(ApiResponse::ok(users)))
}

/// PUT /api/auth/users/{id}/approve
pub async fn approve_user(
    State(state): State<AppState>,
    admin: AdminUser,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<UserResponse>>, AppError> {
    let user = state.admin_user_service.approve(&admin, id).await?;
    Ok(Json(ApiResponse::ok(UserResponse::from(user))))
}

/// DELETE /api/auth/users/{id}/reject
pub async fn reject_user(
    State(state): State<AppState>,
    admin: AdminUser,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<MessageResponse>>, AppError> {
    state.admin_user_service.reject(&admin, id).await?;
    Ok(Json(ApiResponse::ok(MessageResponse {
        message: "Registration rejected".to_string(),
    })))
}
