//! `AuthUser` extractor — runs the full session verification pipeline and
//! injects the request context.

use axum::extract::FromRequestParts;
use axum::http::request::Parts;

use boothdesk_auth::rbac::RoleGate;
use boothdesk_core::error::AppError;
use boothdesk_entity::user::UserRole;
use boothdesk_service::context::RequestContext;

use crate::state::AppState;

/// Extracted authenticated user context available in handlers.
///
/// Extraction fails with 401 unless the bearer token is cryptographically
/// valid AND its session ledger row is still active.
#[derive(Debug, Clone)]
pub struct AuthUser(pub RequestContext);

impl std::ops::Deref for AuthUser {
    type Target = RequestContext;
    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl FromRequestParts<AppState> for AuthUser {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let authorization = parts
            .headers
            .get("authorization")
            .and_then(|v| v.to_str().ok());

        let identity = state.session_authority.authenticate(authorization).await?;

        Ok(AuthUser(RequestContext::new(
            identity.user.id,
            identity.session_id,
            identity.user.role,
            identity.user.name,
        )))
    }
}

/// Like `AuthUser`, but additionally requires the admin role. Extraction
/// fails with 403 for lower roles.
#[derive(Debug, Clone)]
pub struct AdminUser(pub RequestContext);

impl std::ops::Deref for AdminUser {
    type Target = RequestContext;
    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl FromRequestParts<AppState> for AdminUser {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let AuthUser(ctx) = AuthUser::from_request_parts(parts, state).await?;
        RoleGate::require_at_least(ctx.role, UserRole::Admin)?;
        Ok(AdminUser(ctx))
    }
}

/// The raw bearer token, for the logout handler which needs the token's
/// `jti` to find its own ledger row.
#[derive(Debug, Clone)]
pub struct BearerToken(pub String);

impl FromRequestParts<AppState> for BearerToken {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        _state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let token = parts
            .headers
            .get("authorization")
            .and_then(|v| v.to_str().ok())
            .and_then(|h| h.strip_prefix("Bearer "))
            .map(str::trim)
            .filter(|t| !t.is_empty())
            .ok_or_else(|| AppError::authentication("Missing bearer token"))?;

        Ok(BearerToken(token.to_string()))
    }
}
