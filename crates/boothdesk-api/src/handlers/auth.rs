//! Auth handlers — login, register, logout, me.

use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;
use validator::Validate;

use boothdesk_core::error::AppError;

use crate::dto::request::{LoginRequest, RegisterRequest};
use crate::dto::response::{ApiResponse, LoginResponse, MessageResponse, UserResponse};
use crate::extractors::{AuthUser, BearerToken};
use crate::state::AppState;

/// POST /api/auth/login
pub async fn login(
    State(state): State<AppState>,
    headers: axum::http::HeaderMap,
    Json(req): Json<LoginRequest>,
) -> Result<Json<LoginResponse>, AppError> {
    req.validate()
        .map_err(|e| AppError::validation(e.to_string()))?;

    let ip = client_ip(&headers);
    let user_agent = headers.get("user-agent").and_then(|v| v.to_str().ok());

    let result = state
        .session_manager
        .login(&req.email, &req.password, ip, user_agent)
        .await?;

    Ok(Json(LoginResponse {
        id: result.user.id,
        name: result.user.name,
        email: result.user.email,
        role: result.user.role,
        token: result.token,
    }))
}

/// POST /api/auth/register
pub async fn register(
    State(state): State<AppState>,
    Json(req): Json<RegisterRequest>,
) -> Result<(StatusCode, Json<ApiResponse<UserResponse>>), AppError> {
    req.validate()
        .map_err(|e| AppError::validation(e.to_string()))?;

    let user = state
        .user_service
        .register(&req.name, &req.email, &req.password, req.role)
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::ok(UserResponse::from(user))),
    ))
}

/// POST /api/auth/logout
pub async fn logout(
    State(state): State<AppState>,
    auth: AuthUser,
    BearerToken(token): BearerToken,
) -> Result<Json<ApiResponse<MessageResponse>>, AppError> {
    // The ledger row is keyed by the token's jti, which the verified claims
    // carry; re-derive it from the raw token rather than trusting the client.
    let claims = state.session_authority.claims_for(&token)?;
    state
        .session_manager
        .terminate_by_token_id(&claims.token_id())
        .await?;

    tracing::info!(user_id = %auth.user_id, "user logged out");
    Ok(Json(ApiResponse::ok(MessageResponse {
        message: "Logged out successfully".to_string(),
    })))
}

/// GET /api/auth/me
pub async fn me(
    State(state): State<AppState>,
    auth: AuthUser,
) -> Result<Json<ApiResponse<UserResponse>>, AppError> {
    let user = state.user_service.get_profile(auth.user_id).await?;
    Ok(Json(ApiResponse::ok(UserResponse::from(user))))
}

/// First hop of `X-Forwarded-For` when behind a proxy.
fn client_ip(headers: &axum::http::HeaderMap) -> Option<String> {
    headers
        .get("x-forwarded-for")
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.split(',').next())
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}
