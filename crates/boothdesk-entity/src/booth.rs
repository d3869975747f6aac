//! Polling booth entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// A polling booth in the district.
///
/// Coordinates are stored for the front end's map overlay; the server only
/// persists them.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Booth {
    /// Unique booth identifier.
    pub id: Uuid,
    /// Official booth number within the constituency.
    pub number: i32,
    /// Booth name (usually the polling station).
    pub name: String,
    /// Street address.
    pub address: Option<String>,
    /// Geocoded latitude.
    pub latitude: Option<f64>,
    /// Geocoded longitude.
    pub longitude: Option<f64>,
    /// Owning kizhai (branch unit).
    pub kizhai_id: Option<Uuid>,
    /// When the booth was recorded.
    pub created_at: DateTime<Utc>,
    /// When the record was last updated.
    pub updated_at: DateTime<Utc>,
}

/// Data required to record a new booth.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateBooth {
    /// Official booth number.
    pub number: i32,
    /// Booth name.
    pub name: String,
    /// Street address.
    pub address: Option<String>,
    /// Geocoded latitude.
    pub latitude: Option<f64>,
    /// Geocoded longitude.
    pub longitude: Option<f64>,
    /// Owning kizhai.
    pub kizhai_id: Option<Uuid>,
}

/// Partial update for an existing booth.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdateBooth {
    /// New booth number.
    pub number: Option<i32>,
    /// New name.
    pub name: Option<String>,
    /// New address.
    pub address: Option<String>,
    /// New latitude.
    pub latitude: Option<f64>,
    /// New longitude.
    pub longitude: Option<f64>,
    /// New owning kizhai.
    pub kizhai_id: Option<Uuid>,
}
