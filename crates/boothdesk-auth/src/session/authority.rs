//! The Session Authority: per-request token and ledger verification.

use tracing::warn;
use uuid::Uuid;

use boothdesk_core::error::AppError;
use boothdesk_core::result::AppResult;
use boothdesk_database::repositories::{SessionRepository, UserRepository};
use boothdesk_entity::user::User;

use crate::jwt::JwtDecoder;

/// The caller identity established by a successful verification pass.
#[derive(Debug, Clone)]
pub struct AuthenticatedIdentity {
    /// The current user row, freshly loaded.
    pub user: User,
    /// The ledger row honoring this token.
    pub session_id: Uuid,
}

/// Verifies a presented bearer token against both the signature and the
/// session ledger.
///
/// A token is honored only while its ledger row is active; terminating the
/// row revokes the token immediately, regardless of its remaining lifetime.
#[derive(Debug, Clone)]
pub struct SessionAuthority {
    decoder: JwtDecoder,
    sessions: SessionRepository,
    users: UserRepository,
}

impl SessionAuthority {
    pub fn new(decoder: JwtDecoder, sessions: SessionRepository, users: UserRepository) -> Self {
        Self {
            decoder,
            sessions,
            users,
        }
    }

    /// Runs the full verification pipeline for an `Authorization` header
    /// value:
    ///
    /// 1. extract the bearer token,
    /// 2. verify signature and expiry,
    /// 3. require an active ledger row for the token's `jti`,
    /// 4. load the current user (a vanished user folds into the same
    ///    authentication failure as a revoked token),
    /// 5. refresh the session heartbeat, best-effort.
    pub async fn authenticate(
        &self,
        authorization: Option<&str>,
    ) -> AppResult<AuthenticatedIdentity> {
        let token = Self::extract_bearer(authorization)?;
        let claims = self.decoder.verify(token)?;

        let session = self
            .sessions
            .find_active_by_token_id(&claims.token_id())
            .await?
            .ok_or_else(|| AppError::authentication("Session has been terminated"))?;

        let user = self
            .users
            .find_by_id(session.user_id)
            .await?
            .ok_or_else(|| AppError::authentication("Session has been terminated"))?;

        if let Err(e) = self.sessions.touch_last_active(session.id).await {
            warn!(session_id = %session.id, error = %e, "failed to refresh session heartbeat");
        }

        Ok(AuthenticatedIdentity {
            user,
            session_id: session.id,
        })
    }

    /// Verifies a raw token and returns its claims without touching the
    /// ledger. Used by logout, which needs the token's `jti`.
    pub fn claims_for(&self, token: &str) -> AppResult<crate::jwt::Claims> {
        self.decoder.verify(token)
    }

    fn extract_bearer(authorization: Option<&str>) -> AppResult<&str> {
        let header =
            authorization.ok_or_else(|| AppError::authentication("Missing authorization header"))?;

        let token = header
            .strip_prefix("Bearer ")
            .ok_or_else(|| AppError::authentication("Invalid authorization header format"))?
            .trim();

        if token.is_empty() {
            return Err(AppError::authentication("Missing bearer token"));
        }
        Ok(token)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extracts_bearer_token() {
        assert_eq!(
            SessionAuthority::extract_bearer(Some("Bearer abc.def.ghi")).unwrap(),
            "abc.def.ghi"
        );
    }

    #[test]
    fn rejects_missing_header() {
        assert!(SessionAuthority::extract_bearer(None).is_err());
    }

    #[test]
    fn rejects_non_bearer_schemes() {
        assert!(SessionAuthority::extract_bearer(Some("Basic dXNlcjpwYXNz")).is_err());
        assert!(SessionAuthority::extract_bearer(Some("abc.def.ghi")).is_err());
    }

    #[test]
    fn rejects_empty_token() {
        assert!(SessionAuthority::extract_bearer(Some("Bearer ")).is_err());
        assert!(SessionAuthority::extract_bearer(Some("Bearer    ")).is_err());
    }
}
