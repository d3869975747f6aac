//! JWT claims structure.

use chrono::Utc;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use boothdesk_entity::user::UserRole;

/// JWT claims payload embedded in every issued token.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    /// Subject — the user ID.
    pub sub: Uuid,
    /// Display name for convenience.
    pub name: String,
    /// User role at the time of token issuance.
    pub role: UserRole,
    /// Issued-at timestamp (seconds since epoch).
    pub iat: i64,
    /// Expiration timestamp (seconds since epoch).
    pub exp: i64,
    /// Token identifier — the join key into the session ledger.
    pub jti: Uuid,
}

impl Claims {
    /// Returns the token identifier in the form stored on the ledger row.
    pub fn token_id(&self) -> String {
        self.jti.to_string()
    }

    /// Checks whether this token has expired.
    pub fn is_expired(&self) -> bool {
        Utc::now().timestamp() >= self.exp
    }
}
