//! Response DTOs.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use boothdesk_entity::user::{User, UserRole};

/// Generic success envelope used by most endpoints.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiResponse<T> {
    /// Always true on this path; errors use `ApiErrorResponse`.
    pub success: bool,
    /// The payload.
    pub data: T,
}

impl<T> ApiResponse<T> {
    /// Wraps a payload in the success envelope.
    pub fn ok(data: T) -> Self {
        Self {
            success: true,
            data,
        }
    }
}

/// Simple message payload.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MessageResponse {
    /// Human-readable outcome.
    pub message: String,
}

/// POST /api/auth/login — flat shape consumed directly by the dashboard
/// client, not wrapped in the envelope.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginResponse {
    /// User id.
    pub id: Uuid,
    /// Display name.
    pub name: String,
    /// Account email.
    pub email: String,
    /// Role.
    pub role: UserRole,
    /// Signed bearer token.
    pub token: String,
}

/// User profile payload without the password hash.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserResponse {
    /// User id.
    pub id: Uuid,
    /// Display name.
    pub name: String,
    /// Account email.
    pub email: String,
    /// Role.
    pub role: UserRole,
    /// Whether the account has been approved.
    pub is_approved: bool,
    /// Registration time.
    pub created_at: DateTime<Utc>,
    /// Last successful login.
    pub last_login_at: Option<DateTime<Utc>>,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            name: user.name,
            email: user.email,
            role: user.role,
            is_approved: user.is_approved,
            created_at: user.created_at,
            last_login_at: user.last_login_at,
        }
    }
}
