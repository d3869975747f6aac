//! JWT verification and claim extraction.

use jsonwebtoken::{Algorithm, DecodingKey, Validation, decode, errors::ErrorKind as JwtErrorKind};

use boothdesk_core::config::AuthConfig;
use boothdesk_core::error::AppError;

use super::claims::Claims;

/// Verifies token signatures and expiry.
///
/// Verification is purely cryptographic: the decoder never consults the
/// session ledger. A token that passes here may still be rejected upstream
/// because its ledger row was terminated.
#[derive(Clone)]
pub struct JwtDecoder {
    /// HMAC secret key for verification.
    decoding_key: DecodingKey,
    /// Validation rules applied to every token.
    validation: Validation,
}

impl std::fmt::Debug for JwtDecoder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("JwtDecoder").finish()
    }
}

impl JwtDecoder {
    /// Creates a new decoder from auth configuration.
    pub fn new(config: &AuthConfig) -> Self {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.validate_exp = true;
        validation.leeway = 5;

        Self {
            decoding_key: DecodingKey::from_secret(config.jwt_secret.as_bytes()),
            validation,
        }
    }

    /// Verifies the token signature and expiry and returns its claims.
    pub fn verify(&self, token: &str) -> Result<Claims, AppError> {
        let data = decode::<Claims>(token, &self.decoding_key, &self.validation).map_err(|e| {
            match e.kind() {
                JwtErrorKind::ExpiredSignature => AppError::authentication("Token has expired"),
                JwtErrorKind::InvalidSignature => {
                    AppError::authentication("Invalid token signature")
                }
                JwtErrorKind::InvalidToken | JwtErrorKind::Base64(_) | JwtErrorKind::Json(_) => {
                    AppError::authentication("Malformed token")
                }
                _ => AppError::authentication("Token verification failed"),
            }
        })?;

        Ok(data.claims)
    }
}

#[cfg(test)]
mod tests {
    use chrono::Utc;
    use uuid::Uuid;

    use boothdesk_entity::user::{User, UserRole};

    use super::super::encoder::JwtEncoder;
    use super::*;

    fn config(secret: &str) -> AuthConfig {
        AuthConfig {
            jwt_secret: secret.to_string(),
            token_ttl_days: 7,
            password_min_length: 8,
        }
    }

    fn sample_user() -> User {
        let now = Utc::now();
        User {
            id: Uuid::new_v4(),
            name: "Test User".to_string(),
            email: "test@example.com".to_string(),
            password_hash: "hash".to_string(),
            role: UserRole::Organizer,
            is_approved: true,
            created_at: now,
            updated_at: now,
            last_login_at: None,
        }
    }

    #[test]
    fn issued_token_round_trips() {
        let cfg = config("test-secret-key-for-unit-tests");
        let encoder = JwtEncoder::new(&cfg);
        let decoder = JwtDecoder::new(&cfg);
        let user = sample_user();

        let (token, claims) = encoder.issue(&user).unwrap();
        let verified = decoder.verify(&token).unwrap();

        assert_eq!(verified.sub, user.id);
        assert_eq!(verified.role, UserRole::Organizer);
        assert_eq!(verified.jti, claims.jti);
        assert!(!verified.is_expired());
    }

    #[test]
    fn rejects_token_signed_with_different_secret() {
        let encoder = JwtEncoder::new(&config("secret-one-for-signing-tokens"));
        let decoder = JwtDecoder::new(&config("secret-two-for-verifying-them"));

        let (token, _) = encoder.issue(&sample_user()).unwrap();
        let err = decoder.verify(&token).unwrap_err();
        assert_eq!(
            err.kind,
            boothdesk_core::error::ErrorKind::Authentication
        );
    }

    #[test]
    fn rejects_garbage() {
        let decoder = JwtDecoder::new(&config("test-secret-key-for-unit-tests"));
        assert!(decoder.verify("not.a.token").is_err());
        assert!(decoder.verify("").is_err());
    }
}
