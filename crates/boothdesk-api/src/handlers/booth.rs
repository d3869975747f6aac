//! Polling booth handlers.

use axum::Json;
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use uuid::Uuid;

use boothdesk_core::error::AppError;
use boothdesk_core::types::pagination::PageResponse;
use boothdesk_entity::booth::{Booth, CreateBooth, UpdateBooth};

use crate::dto::request::BoothListQuery;
use crate::dto::response::{ApiResponse, MessageResponse};
use crate::extractors::{AuthUser, Pagination};
use crate::state::AppState;

/// GET /api/booths
pub async fn list_booths(
    State(state): State<AppState>,
    _auth: AuthUser,
    Pagination(page): Pagination,
    Query(query): Query<BoothListQuery>,
) -> Result<Json<ApiResponse<PageResponse<Booth>>>, AppError> {
    let booths = state.booth_service.list(query.kizhai_id, &page).await?;
    Ok(Json(ApiResponse::ok(booths)))
}

/// GET /api/booths/{id}
pub async fn get_booth(
    State(state): State<AppState>,
    _auth: AuthUser,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<Booth>>, AppError> {
    let booth = state.booth_service.get(id).await?;
    Ok(Json(ApiResponse::ok(booth)))
}

/// POST /api/booths
pub async fn create_booth(
    State(state): State<AppState>,
    auth: AuthUser,
    Json(req): Json<CreateBooth>,
) -> Result<(StatusCode, Json<ApiResponse<Booth>>), AppError> {
    let booth = state.booth_service.create(&auth, req).await?;
    Ok((StatusCode::CREATED, Json(ApiResponse::ok(booth))))
}

/// PUT /api/booths/{id}
pub async fn update_booth(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<Uuid>,
    Json(req): Json<UpdateBooth>,
) -> Result<Json<ApiResponse<Booth>>, AppError> {
    let booth = state.booth_service.update(&auth, id, req).await?;
    Ok(Json(ApiResponse::ok(booth)))
}

/// DELETE /api/booths/{id}
pub async fn delete_booth(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<MessageResponse>>, AppError> {
    state.booth_service.delete(&auth, id).await?;
    Ok(Json(ApiResponse::ok(MessageResponse {
        message: "Booth removed".to_string(),
    })))
}
