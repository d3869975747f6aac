//! Session ledger repository implementation.
//!
//! The ledger is append-and-update only: rows are created at login and
//! deactivated on termination, never deleted.

use chrono::{DateTime, Utc};
use sqlx::{FromRow, PgPool};
use uuid::Uuid;

use boothdesk_core::error::{AppError, ErrorKind};
use boothdesk_core::result::AppResult;
use boothdesk_entity::session::model::{CreateSession, Session};
use boothdesk_entity::user::UserRole;

/// Repository for session ledger operations.
#[derive(Debug, Clone)]
pub struct SessionRepository {
    pool: PgPool,
}

/// A ledger row joined with its owning user's summary, for the admin view.
#[derive(Debug, Clone, FromRow, serde::Serialize)]
pub struct SessionWithUser {
    /// Session identifier.
    pub id: Uuid,
    /// Owning user.
    pub user_id: Uuid,
    /// Role snapshot at login.
    pub role: UserRole,
    /// Issued token identifier.
    pub token_id: String,
    /// Device classification.
    pub device_type: Option<String>,
    /// Browser family.
    pub browser: Option<String>,
    /// OS family.
    pub os: Option<String>,
    /// Client IP.
    pub ip_address: Option<String>,
    /// Geolocated city.
    pub city: Option<String>,
    /// Geolocated region.
    pub region: Option<String>,
    /// Geolocated country.
    pub country: Option<String>,
    /// Whether the session is still honored.
    pub is_active: bool,
    /// Login timestamp.
    pub logged_in_at: DateTime<Utc>,
    /// Last heartbeat.
    pub last_active_at: DateTime<Utc>,
    /// Owning user's display name.
    pub user_name: String,
    /// Owning user's email.
    pub user_email: String,
}

impl SessionRepository {
    /// Create a new session repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Find a session by ID.
    pub async fn find_by_id(&self, id: Uuid) -> AppResult<Option<Session>> {
        sqlx::query_as::<_, Session>("SELECT * FROM sessions WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to find session", e))
    }

    /// Ledger liveness lookup: the active row for a presented token
    /// identifier. Returns `None` for revoked or unknown tokens.
    pub async fn find_active_by_token_id(&self, token_id: &str) -> AppResult<Option<Session>> {
        sqlx::query_as::<_, Session>(
            "SELECT * FROM sessions WHERE token_id = $1 AND is_active = TRUE",
        )
        .bind(token_id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to find session by token", e)
        })
    }

    /// Create a new ledger row at login.
    pub async fn create(&self, data: &CreateSession) -> AppResult<Session> {
        sqlx::query_as::<_, Session>(
            "INSERT INTO sessions \
             (user_id, role, token_id, device_type, browser, os, ip_address, city, region, country) \
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10) RETURNING *",
        )
        .bind(data.user_id)
        .bind(data.role)
        .bind(&data.token_id)
        .bind(&data.device.device_type)
        .bind(&data.device.browser)
        .bind(&data.device.os)
        .bind(&data.ip_address)
        .bind(&data.location.city)
        .bind(&data.location.region)
        .bind(&data.location.country)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to create session", e))
    }

    /// Refresh the heartbeat timestamp.
    pub async fn touch_last_active(&self, session_id: Uuid) -> AppResult<()> {
        sqlx::query("UPDATE sessions SET last_active_at = NOW() WHERE id = $1")
            .bind(session_id)
            .execute(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to update last activity", e)
            })?;
        Ok(())
    }

    /// Flip the active flag false by session id.
    ///
    /// Returns the number of rows transitioned (0 when the session was
    /// already inactive — termination is idempotent, so that is success).
    pub async fn deactivate(&self, session_id: Uuid) -> AppResult<u64> {
        let result =
            sqlx::query("UPDATE sessions SET is_active = FALSE WHERE id = $1 AND is_active = TRUE")
                .bind(session_id)
                .execute(&self.pool)
                .await
                .map_err(|e| {
                    AppError::with_source(ErrorKind::Database, "Failed to terminate session", e)
                })?;
        Ok(result.rows_affected())
    }

    /// Flip the active flag false by token id (self-logout path).
    pub async fn deactivate_by_token_id(&self, token_id: &str) -> AppResult<u64> {
        let result = sqlx::query(
            "UPDATE sessions SET is_active = FALSE WHERE token_id = $1 AND is_active = TRUE",
        )
        .bind(token_id)
        .execute(&self.pool)
        .await
        .map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to terminate session", e)
        })?;
        Ok(result.rows_affected())
    }

    /// All ledger rows joined with user summaries, newest login first
    /// (admin session view; includes terminated rows for the audit trail).
    pub async fn list_with_users(&self) -> AppResult<Vec<SessionWithUser>> {
        sqlx::query_as::<_, SessionWithUser>(
            "SELECT s.*, u.name AS user_name, u.email AS user_email \
             FROM sessions s JOIN users u ON u.id = s.user_id \
             ORDER BY s.logged_in_at DESC",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to list sessions", e))
    }

    /// Count currently active sessions.
    pub async fn count_active(&self) -> AppResult<i64> {
        sqlx::query_scalar("SELECT COUNT(*) FROM sessions WHERE is_active = TRUE")
            .fetch_one(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to count active sessions", e)
            })
    }

}
