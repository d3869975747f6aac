//! Kizhai (branch unit) entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// A kizhai — the party's branch unit within the district.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Kizhai {
    /// Unique kizhai identifier.
    pub id: Uuid,
    /// Branch name.
    pub name: String,
    /// Administrative zone within the district.
    pub zone: Option<String>,
    /// Coordinator's name.
    pub coordinator_name: Option<String>,
    /// Coordinator's phone number.
    pub coordinator_phone: Option<String>,
    /// When the kizhai was recorded.
    pub created_at: DateTime<Utc>,
    /// When the record was last updated.
    pub updated_at: DateTime<Utc>,
}

/// Data required to record a new kizhai.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateKizhai {
    /// Branch name.
    pub name: String,
    /// Administrative zone.
    pub zone: Option<String>,
    /// Coordinator's name.
    pub coordinator_name: Option<String>,
    /// Coordinator's phone number.
    pub coordinator_phone: Option<String>,
}

/// Partial update for an existing kizhai.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdateKizhai {
    /// New branch name.
    pub name: Option<String>,
    /// New zone.
    pub zone: Option<String>,
    /// New coordinator name.
    pub coordinator_name: Option<String>,
    /// New coordinator phone.
    pub coordinator_phone: Option<String>,
}
