//! Argon2id password hashing.

use argon2::password_hash::rand_core::OsRng;
use argon2::password_hash::{PasswordHash, PasswordHasher as _, PasswordVerifier, SaltString};
use argon2::Argon2;

use boothdesk_core::error::AppError;

/// Hashes and verifies passwords using Argon2id with default parameters.
#[derive(Debug, Clone, Default)]
pub struct PasswordHasher;

impl PasswordHasher {
    pub fn new() -> Self {
        Self
    }

    /// Hashes a plaintext password with a fresh random salt.
    pub fn hash(&self, password: &str) -> Result<String, AppError> {
        let salt = SaltString::generate(&mut OsRng);
        let hash = Argon2::default()
            .hash_password(password.as_bytes(), &salt)
            .map_err(|e| AppError::internal(format!("Failed to hash password: {e}")))?;
        Ok(hash.to_string())
    }

    /// Verifies a plaintext password against a stored hash.
    ///
    /// A mismatched password returns `Ok(false)`; only an unparseable stored
    /// hash is an error.
    pub fn verify(&self, password: &str, stored_hash: &str) -> Result<bool, AppError> {
        let parsed = PasswordHash::new(stored_hash)
            .map_err(|e| AppError::internal(format!("Stored password hash is invalid: {e}")))?;

        match Argon2::default().verify_password(password.as_bytes(), &parsed) {
            Ok(()) => Ok(true),
            Err(argon2::password_hash::Error::Password) => Ok(false),
            Err(e) => Err(AppError::internal(format!(
                "Password verification failed: {e}"
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hash_and_verify() {
        let hasher = PasswordHasher::new();
        let hash = hasher.hash("correct horse battery staple").unwrap();

        assert!(hash.starts_with("$argon2"));
        assert!(hasher.verify("correct horse battery staple", &hash).unwrap());
        assert!(!hasher.verify("wrong password", &hash).unwrap());
    }

    #[test]
    fn same_password_gets_distinct_salts() {
        let hasher = PasswordHasher::new();
        let a = hasher.hash("password123").unwrap();
        let b = hasher.hash("password123").unwrap();
        assert_ne!(a, b);
    }

    #[test]
    fn invalid_stored_hash_is_an_error() {
        let hasher = PasswordHasher::new();
        assert!(hasher.verify("anything", "not-a-phc-string").is_err());
    }
}
