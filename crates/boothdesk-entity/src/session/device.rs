//! User-Agent classification into device / browser / OS families.

use serde::{Deserialize, Serialize};

/// Coarse device classification recorded on each session row.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeviceInfo {
    /// "desktop", "mobile", "tablet", or None when unknown.
    pub device_type: Option<String>,
    /// Browser family.
    pub browser: Option<String>,
    /// Operating system family.
    pub os: Option<String>,
}

impl DeviceInfo {
    /// Classify a raw User-Agent header value.
    ///
    /// Coarse family matching is all the session list needs; unknown agents
    /// produce an empty classification rather than an error.
    pub fn from_user_agent(user_agent: Option<&str>) -> Self {
        let Some(ua) = user_agent else {
            return Self::default();
        };
        let lower = ua.to_lowercase();

        let device_type = if lower.contains("ipad") || lower.contains("tablet") {
            Some("tablet")
        } else if lower.contains("mobi")
            || lower.contains("android")
            || lower.contains("iphone")
        {
            Some("mobile")
        } else if lower.contains("mozilla") {
            Some("desktop")
        } else {
            None
        };

        // Order matters: Edge and Opera UAs also contain "chrome",
        // Chrome UAs also contain "safari".
        let browser = if lower.contains("edg/") || lower.contains("edge") {
            Some("Edge")
        } else if lower.contains("opr/") || lower.contains("opera") {
            Some("Opera")
        } else if lower.contains("firefox") {
            Some("Firefox")
        } else if lower.contains("chrome") || lower.contains("crios") {
            Some("Chrome")
        } else if lower.contains("safari") {
            Some("Safari")
        } else {
            None
        };

        let os = if lower.contains("android") {
            Some("Android")
        } else if lower.contains("iphone") || lower.contains("ipad") || lower.contains("ios") {
            Some("iOS")
        } else if lower.contains("windows") {
            Some("Windows")
        } else if lower.contains("mac os") || lower.contains("macintosh") {
            Some("macOS")
        } else if lower.contains("linux") {
            Some("Linux")
        } else {
            None
        };

        Self {
            device_type: device_type.map(String::from),
            browser: browser.map(String::from),
            os: os.map(String::from),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify_desktop_chrome() {
        let ua = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 \
                  (KHTML, like Gecko) Chrome/120.0.0.0 Safari/537.36";
        let info = DeviceInfo::from_user_agent(Some(ua));
        assert_eq!(info.device_type.as_deref(), Some("desktop"));
        assert_eq!(info.browser.as_deref(), Some("Chrome"));
        assert_eq!(info.os.as_deref(), Some("Windows"));
    }

    #[test]
    fn test_classify_android_firefox() {
        let ua = "Mozilla/5.0 (Android 14; Mobile; rv:121.0) Gecko/121.0 Firefox/121.0";
        let info = DeviceInfo::from_user_agent(Some(ua));
        assert_eq!(info.device_type.as_deref(), Some("mobile"));
        assert_eq!(info.browser.as_deref(), Some("Firefox"));
        assert_eq!(info.os.as_deref(), Some("Android"));
    }

    #[test]
    fn test_classify_edge_not_chrome() {
        let ua = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 \
                  (KHTML, like Gecko) Chrome/120.0.0.0 Safari/537.36 Edg/120.0.0.0";
        let info = DeviceInfo::from_user_agent(Some(ua));
        assert_eq!(info.browser.as_deref(), Some("Edge"));
    }

    #[test]
    fn test_missing_user_agent() {
        assert_eq!(DeviceInfo::from_user_agent(None), DeviceInfo::default());
    }
}
