//! Session ledger entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

use crate::user::UserRole;

use super::device::DeviceInfo;
use super::geo::GeoLocation;

/// One row per successful login.
///
/// The ledger is the sole authority for whether a syntactically valid token
/// is still honored: a cryptographically valid token whose row is inactive
/// must be rejected. Rows are never physically deleted (audit trail);
/// termination flips `is_active` to false.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Session {
    /// Unique session identifier.
    pub id: Uuid,
    /// The user this session belongs to.
    pub user_id: Uuid,
    /// Role snapshot taken at login.
    pub role: UserRole,
    /// Issued token identifier (the JWT `jti`). Unique per session; the
    /// join key between the stateless credential and this ledger row.
    pub token_id: String,
    /// Device classification from the User-Agent ("desktop", "mobile", ...).
    pub device_type: Option<String>,
    /// Browser family.
    pub browser: Option<String>,
    /// Operating system family.
    pub os: Option<String>,
    /// Client IP address as presented.
    pub ip_address: Option<String>,
    /// Best-effort geolocation: city.
    pub city: Option<String>,
    /// Best-effort geolocation: region/state.
    pub region: Option<String>,
    /// Best-effort geolocation: country.
    pub country: Option<String>,
    /// Whether this session is still honored.
    pub is_active: bool,
    /// Login timestamp.
    pub logged_in_at: DateTime<Utc>,
    /// Last authenticated request (heartbeat).
    pub last_active_at: DateTime<Utc>,
}

/// Liveness classification derived from the heartbeat timestamp.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Presence {
    /// Recent activity within the idle threshold.
    Live,
    /// No activity within the idle threshold.
    Idle,
}

/// Data required to create a new session row.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateSession {
    /// The user this session belongs to.
    pub user_id: Uuid,
    /// Role snapshot.
    pub role: UserRole,
    /// Issued token identifier.
    pub token_id: String,
    /// Classified device information.
    pub device: DeviceInfo,
    /// Client IP address.
    pub ip_address: Option<String>,
    /// Best-effort geolocation.
    pub location: GeoLocation,
}
