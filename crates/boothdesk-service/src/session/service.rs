//! Session listing and presence classification for the admin view.

use std::sync::Arc;

use chrono::{DateTime, Duration, Utc};
use serde::Serialize;
use uuid::Uuid;

use boothdesk_core::config::SessionConfig;
use boothdesk_core::result::AppResult;
use boothdesk_database::repositories::{SessionRepository, SessionWithUser};
use boothdesk_entity::session::Presence;
use boothdesk_entity::user::UserRole;

/// One row in the admin session view: the ledger row, its owner's summary,
/// and a derived presence classification.
#[derive(Debug, Clone, Serialize)]
pub struct SessionSummary {
    /// Session identifier.
    pub id: Uuid,
    /// Owning user.
    pub user_id: Uuid,
    /// Owning user's display name.
    pub user_name: String,
    /// Owning user's email.
    pub user_email: String,
    /// Role snapshot at login.
    pub role: UserRole,
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
    /// Live or idle, derived from the heartbeat. Absent for terminated rows.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub presence: Option<Presence>,
    /// Login timestamp.
    pub logged_in_at: DateTime<Utc>,
    /// Last heartbeat.
    pub last_active_at: DateTime<Utc>,
}

/// Produces the admin session view from the ledger.
#[derive(Debug, Clone)]
pub struct SessionService {
    sessions: Arc<SessionRepository>,
    idle_threshold_minutes: u64,
}

impl SessionService {
    /// Creates a new session service.
    pub fn new(sessions: Arc<SessionRepository>, config: &SessionConfig) -> Self {
        Self {
            sessions,
            idle_threshold_minutes: config.idle_threshold_minutes,
        }
    }

    /// All ledger rows with user summaries and presence, newest login first.
    /// Terminated rows are included for the audit trail.
    pub async fn list_all(&self) -> AppResult<Vec<SessionSummary>> {
        let rows = self.sessions.list_with_users().await?;
        let now = Utc::now();
        Ok(rows
            .into_iter()
            .map(|row| self.summarize(row, now))
            .collect())
    }

    fn summarize(&self, row: SessionWithUser, now: DateTime<Utc>) -> SessionSummary {
        let presence = if row.is_active {
            let cutoff = now - Duration::minutes(self.idle_threshold_minutes as i64);
            Some(if row.last_active_at >= cutoff {
                Presence::Live
            } else {
                Presence::Idle
            })
        } else {
            None
        };

        SessionSummary {
            id: row.id,
            user_id: row.user_id,
            user_name: row.user_name,
            user_email: row.user_email,
            role: row.role,
            device_type: row.device_type,
            browser: row.browser,
            os: row.os,
            ip_address: row.ip_address,
            city: row.city,
            region: row.region,
            country: row.country,
            is_active: row.is_active,
            presence,
            logged_in_at: row.logged_in_at,
            last_active_at: row.last_active_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(is_active: bool, last_active_at: DateTime<Utc>) -> SessionWithUser {
        SessionWithUser {
            id: Uuid::new_v4(),
            user_id: Uuid::new_v4(),
            role: UserRole::Volunteer,
            token_id: Uuid::new_v4().to_string(),
            device_type: None,
            browser: None,
            os: None,
            ip_address: None,
            city: None,
            region: None,
            country: None,
            is_active,
            logged_in_at: last_active_at,
            last_active_at,
            user_name: "Test".to_string(),
            user_email: "test@example.com".to_string(),
        }
    }

    fn service() -> SessionService {
        // The pool is never touched by summarize, but the constructor wants
        // a repository, so build the service by hand.
        SessionService {
            sessions: Arc::new(SessionRepository::new(
                sqlx::postgres::PgPoolOptions::new().connect_lazy("postgres://localhost").unwrap(),
            )),
            idle_threshold_minutes: 15,
        }
    }

    #[tokio::test]
    async fn active_recent_session_is_live() {
        let s = service();
        let summary = s.summarize(row(true, Utc::now()), Utc::now());
        assert_eq!(summary.presence, Some(Presence::Live));
    }

    #[tokio::test]
    async fn active_stale_session_is_idle() {
        let s = service();
        let summary = s.summarize(row(true, Utc::now() - Duration::minutes(30)), Utc::now());
        assert_eq!(summary.presence, Some(Presence::Idle));
    }

    #[tokio::test]
    async fn terminated_session_has_no_presence() {
        let s = service();
        let summary = s.summarize(row(false, Utc::now()), Utc::now());
        assert_eq!(summary.presence, None);
    }
}
