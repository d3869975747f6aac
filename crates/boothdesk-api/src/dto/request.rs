//! Request DTOs with validation rules.

use serde::Deserialize;
use uuid::Uuid;
use validator::Validate;

use boothdesk_entity::user::UserRole;

/// POST /api/auth/login
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct LoginRequest {
    /// Account email.
    #[validate(email(message = "Invalid email format"))]
    pub email: String,
    /// Plaintext password.
    #[validate(length(min = 1, message = "Password is required"))]
    pub password: String,
}

/// POST /api/auth/register
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct RegisterRequest {
    /// Display name.
    #[validate(length(min = 1, max = 100, message = "Name must be 1-100 characters"))]
    pub name: String,
    /// Account email, the unique handle.
    #[validate(email(message = "Invalid email format"))]
    pub email: String,
    /// Plaintext password; strength is checked by the password policy.
    pub password: String,
    /// Requested role. Defaults to volunteer.
    #[serde(default = "default_role")]
    pub role: UserRole,
}

fn default_role() -> UserRole {
    UserRole::Volunteer
}

/// Query parameters for the member list.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct MemberListQuery {
    /// Restrict to one kizhai.
    pub kizhai_id: Option<Uuid>,
    /// Restrict to one booth.
    pub booth_id: Option<Uuid>,
    /// Substring match on name or phone.
    pub search: Option<String>,
}

/// Query parameters for the booth list.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct BoothListQuery {
    /// Restrict to one kizhai.
    pub kizhai_id: Option<Uuid>,
}
