//! JWT token creation with configurable signing and TTL.

use chrono::Utc;
use jsonwebtoken::{EncodingKey, Header, encode};
use uuid::Uuid;

use boothdesk_core::config::AuthConfig;
use boothdesk_core::error::AppError;
use boothdesk_entity::user::User;

use super::claims::Claims;

/// Issues signed tokens with a fixed absolute expiry.
///
/// The token is stateless: anyone holding the signing secret can verify
/// authenticity and expiry without a store round trip. Revocation is the
/// session ledger's job, not the token's.
#[derive(Clone)]
pub struct JwtEncoder {
    /// HMAC secret key for signing.
    encoding_key: EncodingKey,
    /// Token TTL in days.
    token_ttl_days: i64,
}

impl std::fmt::Debug for JwtEncoder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("JwtEncoder")
            .field("token_ttl_days", &self.token_ttl_days)
            .finish()
    }
}

impl JwtEncoder {
    /// Creates a new encoder from auth configuration.
    pub fn new(config: &AuthConfig) -> Self {
        Self {
            encoding_key: EncodingKey::from_secret(config.jwt_secret.as_bytes()),
            token_ttl_days: config.token_ttl_days as i64,
        }
    }

    /// Issues a token for the given user. Returns the signed token string
    /// together with its claims so the caller can record the `jti` on the
    /// ledger row.
    pub fn issue(&self, user: &User) -> Result<(String, Claims), AppError> {
        let now = Utc::now();
        let exp = now + chrono::Duration::days(self.token_ttl_days);

        let claims = Claims {
            sub: user.id,
            name: user.name.clone(),
            role: user.role,
            iat: now.timestamp(),
            exp: exp.timestamp(),
            jti: Uuid::new_v4(),
        };

        let token = encode(&Header::default(), &claims, &self.encoding_key)
            .map_err(|e| AppError::internal(format!("Failed to encode token: {e}")))?;

        Ok((token, claims))
    }
}
