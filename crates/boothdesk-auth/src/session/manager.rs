//! Login and termination lifecycle over the session ledger.

use chrono::Utc;
use tracing::{info, warn};
use uuid::Uuid;

use boothdesk_core::error::AppError;
use boothdesk_core::result::AppResult;
use boothdesk_database::repositories::{SessionRepository, UserRepository};
use boothdesk_entity::session::{CreateSession, DeviceInfo, Session};
use boothdesk_entity::user::User;

use crate::jwt::JwtEncoder;
use crate::password::PasswordHasher;

use super::geo::GeoLocator;

/// Everything a successful login produces.
#[derive(Debug, Clone)]
pub struct LoginResult {
    /// Signed bearer token for the client to present.
    pub token: String,
    /// The authenticated user.
    pub user: User,
    /// The freshly created ledger row.
    pub session: Session,
}

/// Owns the login and termination lifecycle.
///
/// Login is the only place ledger rows are created; termination is the only
/// way a live token dies before its expiry.
#[derive(Debug, Clone)]
pub struct SessionManager {
    encoder: JwtEncoder,
    hasher: PasswordHasher,
    locator: GeoLocator,
    sessions: SessionRepository,
    users: UserRepository,
}

impl SessionManager {
    pub fn new(
        encoder: JwtEncoder,
        hasher: PasswordHasher,
        locator: GeoLocator,
        sessions: SessionRepository,
        users: UserRepository,
    ) -> Self {
        Self {
            encoder,
            hasher,
            locator,
            sessions,
            users,
        }
    }

    /// Authenticates credentials and opens a session.
    ///
    /// Unknown email and wrong password produce the same generic error so
    /// the response does not leak which accounts exist. An unapproved user
    /// with correct credentials is told so explicitly, and no ledger row is
    /// created for them.
    pub async fn login(
        &self,
        email: &str,
        password: &str,
        ip_address: Option<String>,
        user_agent: Option<&str>,
    ) -> AppResult<LoginResult> {
        let user = self
            .users
            .find_by_email(email)
            .await?
            .ok_or_else(|| AppError::authentication("Invalid email or password"))?;

        if !self.hasher.verify(password, &user.password_hash)? {
            return Err(AppError::authentication("Invalid email or password"));
        }

        if !user.is_approved {
            return Err(AppError::authorization(
                "Account is pending admin approval",
            ));
        }

        let (token, claims) = self.encoder.issue(&user)?;
        let device = DeviceInfo::from_user_agent(user_agent);
        let location = self.locator.locate(ip_address.as_deref()).await;

        let session = self
            .sessions
            .create(&CreateSession {
                user_id: user.id,
                role: user.role,
                token_id: claims.token_id(),
                device,
                ip_address,
                location,
            })
            .await?;

        if let Err(e) = self.users.update_last_login(user.id, Utc::now()).await {
            warn!(user_id = %user.id, error = %e, "failed to record last login time");
        }

        info!(user_id = %user.id, session_id = %session.id, "user logged in");
        Ok(LoginResult {
            token,
            user,
            session,
        })
    }

    /// Self-logout: terminates the session behind the presented token.
    ///
    /// Idempotent — logging out an already-terminated session succeeds.
    pub async fn terminate_by_token_id(&self, token_id: &str) -> AppResult<()> {
        let rows = self.sessions.deactivate_by_token_id(token_id).await?;
        if rows == 0 {
            info!(%token_id, "logout for already-terminated session");
        }
        Ok(())
    }

    /// Admin termination by session id.
    ///
    /// An unknown id is an error; a known but already-inactive session is a
    /// no-op success.
    pub async fn terminate_by_id(&self, session_id: Uuid) -> AppResult<Session> {
        let session = self
            .sessions
            .find_by_id(session_id)
            .await?
            .ok_or_else(|| AppError::not_found("Session not found"))?;

        if session.is_active {
            self.sessions.deactivate(session_id).await?;
            info!(%session_id, user_id = %session.user_id, "session terminated by admin");
        }

        self.sessions
            .find_by_id(session_id)
            .await?
            .ok_or_else(|| AppError::not_found("Session not found"))
    }
}
