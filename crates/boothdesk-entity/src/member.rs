//! Party member entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// An enrolled party member in the district roster.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Member {
    /// Unique member identifier.
    pub id: Uuid,
    /// Full name.
    pub name: String,
    /// Contact phone number.
    pub phone: String,
    /// Email address (optional).
    pub email: Option<String>,
    /// Gender (free-form as enrolled).
    pub gender: Option<String>,
    /// Age in years.
    pub age: Option<i32>,
    /// Electoral roll voter ID.
    pub voter_id: Option<String>,
    /// Residential address.
    pub address: Option<String>,
    /// Polling booth assignment.
    pub booth_id: Option<Uuid>,
    /// Kizhai (branch unit) assignment.
    pub kizhai_id: Option<Uuid>,
    /// When the member was enrolled.
    pub created_at: DateTime<Utc>,
    /// When the record was last updated.
    pub updated_at: DateTime<Utc>,
}

/// Data required to enroll a new member.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateMember {
    /// Full name.
    pub name: String,
    /// Contact phone number.
    pub phone: String,
    /// Email address.
    pub email: Option<String>,
    /// Gender.
    pub gender: Option<String>,
    /// Age in years.
    pub age: Option<i32>,
    /// Electoral roll voter ID.
    pub voter_id: Option<String>,
    /// Residential address.
    pub address: Option<String>,
    /// Polling booth assignment.
    pub booth_id: Option<Uuid>,
    /// Kizhai assignment.
    pub kizhai_id: Option<Uuid>,
}

/// Partial update for an existing member. `None` fields are left unchanged.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdateMember {
    /// New full name.
    pub name: Option<String>,
    /// New phone number.
    pub phone: Option<String>,
    /// New email address.
    pub email: Option<String>,
    /// New gender.
    pub gender: Option<String>,
    /// New age.
    pub age: Option<i32>,
    /// New voter ID.
    pub voter_id: Option<String>,
    /// New address.
    pub address: Option<String>,
    /// New booth assignment.
    pub booth_id: Option<Uuid>,
    /// New kizhai assignment.
    pub kizhai_id: Option<Uuid>,
}

/// Filters for the member list endpoint.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MemberFilter {
    /// Restrict to one kizhai.
    pub kizhai_id: Option<Uuid>,
    /// Restrict to one booth.
    pub booth_id: Option<Uuid>,
    /// Case-insensitive substring match on name or phone.
    pub search: Option<String>,
}
