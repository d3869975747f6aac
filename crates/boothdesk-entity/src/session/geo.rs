//! Coarse geolocation value object.

use serde::{Deserialize, Serialize};

/// Best-effort coarse geolocation recorded at login.
///
/// All fields are optional: a failed or skipped lookup produces an empty
/// location, never a failed login.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GeoLocation {
    /// City name.
    pub city: Option<String>,
    /// Region or state name.
    pub region: Option<String>,
    /// Country name.
    pub country: Option<String>,
}

impl GeoLocation {
    /// Whether any component was resolved.
    pub fn is_empty(&self) -> bool {
        self.city.is_none() && self.region.is_none() && self.country.is_none()
    }
}
