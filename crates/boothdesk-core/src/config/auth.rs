//! Authentication configuration.

use serde::{Deserialize, Serialize};

/// Authentication and credential configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthConfig {
    /// Secret key for JWT signing (HMAC-SHA256). Must be set; an empty
    /// secret fails `AppConfig::validate` at startup.
    #[serde(default)]
    pub jwt_secret: String,
    /// Token lifetime in days (fixed absolute expiry from issuance).
    #[serde(default = "default_token_ttl")]
    pub token_ttl_days: u64,
    /// Minimum password length for registration.
    #[serde(default = "default_password_min")]
    pub password_min_length: usize,
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            jwt_secret: String::new(),
            token_ttl_days: default_token_ttl(),
            password_min_length: default_password_min(),
        }
    }
}

fn default_token_ttl() -> u64 {
    7
}

fn default_password_min() -> usize {
    8
}
