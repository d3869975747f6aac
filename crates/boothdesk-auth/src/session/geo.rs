//! Best-effort IP geolocation.

use std::net::IpAddr;
use std::time::Duration;

use serde::Deserialize;
use tracing::warn;

use boothdesk_core::config::SessionConfig;
use boothdesk_entity::session::GeoLocation;

/// Looks up the approximate location of a client IP via an external API.
///
/// The lookup is strictly best-effort: any failure (disabled, private IP,
/// timeout, transport error, negative response) yields an empty location
/// and never delays login beyond the configured timeout.
#[derive(Debug, Clone)]
pub struct GeoLocator {
    client: reqwest::Client,
    endpoint: String,
    enabled: bool,
}

#[derive(Debug, Deserialize)]
struct GeoApiResponse {
    status: String,
    #[serde(default)]
    city: Option<String>,
    #[serde(default, rename = "regionName")]
    region_name: Option<String>,
    #[serde(default)]
    country: Option<String>,
}

impl GeoLocator {
    /// Creates a locator from session configuration. The HTTP client carries
    /// the configured timeout so a slow provider cannot stall login.
    pub fn new(config: &SessionConfig) -> Self {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.geoip_timeout_seconds))
            .build()
            .unwrap_or_default();

        Self {
            client,
            endpoint: config.geoip_endpoint.clone(),
            enabled: config.geoip_enabled,
        }
    }

    /// Resolves an IP address to a location, or an empty location when the
    /// lookup is skipped or fails.
    pub async fn locate(&self, ip: Option<&str>) -> GeoLocation {
        let Some(ip) = ip else {
            return GeoLocation::default();
        };

        if !self.enabled || !Self::is_public(ip) {
            return GeoLocation::default();
        }

        let url = self.endpoint.replace("{ip}", ip);
        match self.fetch(&url).await {
            Ok(location) => location,
            Err(reason) => {
                warn!(ip = %ip, %reason, "geolocation lookup failed");
                GeoLocation::default()
            }
        }
    }

    async fn fetch(&self, url: &str) -> Result<GeoLocation, String> {
        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| e.to_string())?;

        let body: GeoApiResponse = response.json().await.map_err(|e| e.to_string())?;
        if body.status != "success" {
            return Err(format!("provider returned status {}", body.status));
        }

        Ok(GeoLocation {
            city: body.city,
            region: body.region_name,
            country: body.country,
        })
    }

    /// Private, loopback, and unparseable addresses are never sent to the
    /// provider.
    fn is_public(ip: &str) -> bool {
        match ip.parse::<IpAddr>() {
            Ok(IpAddr::V4(v4)) => {
                !(v4.is_private() || v4.is_loopback() || v4.is_link_local() || v4.is_unspecified())
            }
            Ok(IpAddr::V6(v6)) => !(v6.is_loopback() || v6.is_unspecified()),
            Err(_) => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn private_and_loopback_ips_are_skipped() {
        assert!(!GeoLocator::is_public("127.0.0.1"));
        assert!(!GeoLocator::is_public("10.0.0.5"));
        assert!(!GeoLocator::is_public("192.168.1.1"));
        assert!(!GeoLocator::is_public("::1"));
        assert!(!GeoLocator::is_public("garbage"));
    }

    #[test]
    fn public_ips_are_looked_up() {
        assert!(GeoLocator::is_public("8.8.8.8"));
        assert!(GeoLocator::is_public("203.0.113.9"));
    }

    #[tokio::test]
    async fn disabled_locator_returns_empty() {
        let locator = GeoLocator::new(&SessionConfig {
            geoip_enabled: false,
            ..SessionConfig::default()
        });
        let location = locator.locate(Some("8.8.8.8")).await;
        assert!(location.is_empty());
    }

    #[tokio::test]
    async fn missing_ip_returns_empty() {
        let locator = GeoLocator::new(&SessionConfig::default());
        assert!(locator.locate(None).await.is_empty());
    }
}
