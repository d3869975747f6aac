//! Session management configuration.

use serde::{Deserialize, Serialize};

/// Session ledger and geolocation configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionConfig {
    /// Whether to attempt a geolocation lookup at login.
    #[serde(default = "default_true")]
    pub geoip_enabled: bool,
    /// Geolocation lookup endpoint. `{ip}` is replaced with the client IP.
    #[serde(default = "default_geoip_endpoint")]
    pub geoip_endpoint: String,
    /// Hard timeout for the outbound geolocation call in seconds.
    /// The lookup is best-effort and must never stall a login.
    #[serde(default = "default_geoip_timeout")]
    pub geoip_timeout_seconds: u64,
    /// A session with no activity for this many minutes is shown as idle
    /// in the admin session list. Display only; no auto-expiry.
    #[serde(default = "default_idle_threshold")]
    pub idle_threshold_minutes: u64,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            geoip_enabled: true,
            geoip_endpoint: default_geoip_endpoint(),
            geoip_timeout_seconds: default_geoip_timeout(),
            idle_threshold_minutes: default_idle_threshold(),
        }
    }
}

fn default_true() -> bool {
    true
}

fn default_geoip_endpoint() -> String {
    "http://ip-api.com/json/{ip}?fields=status,city,regionName,country".to_string()
}

fn default_geoip_timeout() -> u64 {
    3
}

fn default_idle_threshold() -> u64 {
    15
}
