//! Member roster handlers.

use axum::Json;
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use uuid::Uuid;

use boothdesk_core::error::AppError;
use boothdesk_core::types::pagination::PageResponse;
use boothdesk_entity::member::{CreateMember, Member, MemberFilter, UpdateMember};

use crate::dto::request::MemberListQuery;
use crate::dto::response::{ApiResponse, MessageResponse};
use crate::extractors::{AuthUser, Pagination};
use crate::state::AppState;

/// GET /api/members
pub async fn list_members(
    State(state): State<AppState>,
    _auth: AuthUser,
    Pagination(page): Pagination,
    Query(query): Query<MemberListQuery>,
) -> Result<Json<ApiResponse<PageResponse<Member>>>, AppError> {
    let filter = MemberFilter {
        kizhai_id: query.kizhai_id,
        booth_id: query.booth_id,
        search: query.search,
    };
    let members = state.member_service.list(&filter, &page).await?;
    Ok(Json(ApiResponse::ok(members)))
}

/// GET /api/members/{id}
pub async fn get_member(
    State(state): State<AppState>,
    _auth: AuthUser,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<Member>>, AppError> {
    let member = state.member_service.get(id).await?;
    Ok(Json(ApiResponse::ok(member)))
}

/// POST /api/members
pub async fn create_member(
    State(state): State<AppState>,
    auth: AuthUser,
    Json(req): Json<CreateMember>,
) -> Result<(StatusCode, Json<ApiResponse<Member>>), AppError> {
    let member = state.member_service.create(&auth, req).await?;
    Ok((StatusCode::CREATED, Json(ApiResponse::ok(member))))
}

/// PUT /api/members/{id}
pub async fn update_member(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<Uuid>,
    Json(req): Json<UpdateMember>,
) -> Result<Json<ApiResponse<Member>>, AppError> {
    let member = state.member_service.update(&auth, id, req).await?;
    Ok(Json(ApiResponse::ok(member)))
}

/// DELETE /api/members/{id}
pub async fn delete_member(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<MessageResponse>>, AppError> {
    state.member_service.delete(&auth, id).await?;
    Ok(Json(ApiResponse::ok(MessageResponse {
        message: "Member removed".to_string(),
    })))
}
