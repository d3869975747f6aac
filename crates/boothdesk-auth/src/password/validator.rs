//! Password strength policy.

use zxcvbn::{Score, zxcvbn};

use boothdesk_core::config::AuthConfig;
use boothdesk_core::error::AppError;

/// Enforces a minimum length and a minimum zxcvbn strength score on new
/// passwords.
#[derive(Debug, Clone)]
pub struct PasswordPolicy {
    min_length: usize,
}

impl PasswordPolicy {
    pub fn new(config: &AuthConfig) -> Self {
        Self {
            min_length: config.password_min_length,
        }
    }

    /// Validates a candidate password against the policy.
    ///
    /// The user's name and email are fed to the strength estimator so that
    /// passwords derived from them score poorly.
    pub fn check(&self, password: &str, user_inputs: &[&str]) -> Result<(), AppError> {
        if password.chars().count() < self.min_length {
            return Err(AppError::validation(format!(
                "Password must be at least {} characters long",
                self.min_length
            )));
        }

        let estimate = zxcvbn(password, user_inputs);
        if estimate.score() < Score::Two {
            return Err(AppError::validation(
                "Password is too weak; choose something less guessable",
            ));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn policy() -> PasswordPolicy {
        PasswordPolicy::new(&AuthConfig {
            jwt_secret: "unused".to_string(),
            token_ttl_days: 7,
            password_min_length: 8,
        })
    }

    #[test]
    fn rejects_short_passwords() {
        let err = policy().check("abc", &[]).unwrap_err();
        assert_eq!(err.kind, boothdesk_core::error::ErrorKind::Validation);
    }

    #[test]
    fn rejects_common_passwords() {
        assert!(policy().check("password", &[]).is_err());
        assert!(policy().check("12345678", &[]).is_err());
    }

    #[test]
    fn rejects_passwords_built_from_user_inputs() {
        assert!(
            policy()
                .check("arivumani1", &["Arivumani", "arivumani@example.com"])
                .is_err()
        );
    }

    #[test]
    fn accepts_strong_passwords() {
        assert!(policy().check("korrekt-hest-batteri-stift", &[]).is_ok());
    }
}
