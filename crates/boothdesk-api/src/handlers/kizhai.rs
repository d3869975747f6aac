//! Kizhai (branch unit) handlers.

use axum::Json;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use uuid::Uuid;

use boothdesk_core::error::AppError;
use boothdesk_entity::kizhai::{CreateKizhai, Kizhai, UpdateKizhai};

use crate::dto::response::{ApiResponse, MessageResponse};
use crate::extractors::AuthUser;
use crate::state::AppState;

/// GET /api/kizhais
pub async fn list_kizhais(
    State(state): State<AppState>,
    _auth: AuthUser,
) -> Result<Json<ApiResponse<Vec<Kizhai>>>, AppError> {
    let kizhais = state.kizhai_service.list().await?;
    Ok(Json(ApiResponse::ok(kizhais)))
}

/// GET /api/kizhais/{id}
pub async fn get_kizhai(
    State(state): State<AppState>,
    _auth: AuthUser,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<Kizhai>>, AppError> {
    let kizhai = state.kizhai_service.get(id).await?;
    Ok(Json(ApiResponse::ok(kizhai)))
}

/// POST /api/kizhais
pub async fn create_kizhai(
    State(state): State<AppState>,
    auth: AuthUser,
    Json(req): Json<CreateKizhai>,
) -> Result<(StatusCode, Json<ApiResponse<Kizhai>>), AppError> {
    let kizhai = state.kizhai_service.create(&auth, req).await?;
    Ok((StatusCode::CREATED, Json(ApiResponse::ok(kizhai))))
}

/// PUT /api/kizhais/{id}
pub async fn update_kizhai(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<Uuid>,
    Json(req): Json<UpdateKizhai>,
) -> Result<Json<ApiResponse<Kizhai>>, AppError> {
    let kizhai = state.kizhai_service.update(&auth, id, req).await?;
    Ok(Json(ApiResponse::ok(kizhai)))
}

/// DELETE /api/kizhais/{id}
pub async fn delete_kizhai(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<MessageResponse>>, AppError> {
    state.kizhai_service.delete(&auth, id).await?;
    Ok(Json(ApiResponse::ok(MessageResponse {
        message: "Kizhai removed".to_string(),
    })))
}
