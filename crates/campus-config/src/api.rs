//! Remote catalog endpoint configuration.

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

fn default_base_url() -> String {
    "http://localhost:3000/api".to_string()
}

fn default_items_path() -> String {
    "/items/getItem".to_string()
}

/// Seconds to wait for the catalog endpoint before falling back.
const fn default_timeout_secs() -> u64 {
    5
}

fn default_user_agent() -> String {
    format!("campus/{}", env!("CARGO_PKG_VERSION"))
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ApiConfig {
    /// Base URL of the catalog service.
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Items-retrieval path appended to `base_url`.
    #[serde(default = "default_items_path")]
    pub items_path: String,

    /// Request timeout in seconds.
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    /// `User-Agent` header sent with catalog requests.
    #[serde(default = "default_user_agent")]
    pub user_agent: String,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            items_path: default_items_path(),
            timeout_secs: default_timeout_secs(),
            user_agent: default_user_agent(),
        }
    }
}

impl ApiConfig {
    /// Full URL of the catalog items endpoint.
    #[must_use]
    pub fn endpoint_url(&self) -> String {
        let base = self.base_url.trim_end_matches('/');
        let path = self.items_path.trim_start_matches('/');
        if path.is_empty() {
            base.to_string()
        } else {
            format!("{base}/{path}")
        }
    }

    /// Check field values that figment cannot express as types.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidValue`] for a non-http(s) base URL or a
    /// zero timeout.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(self.base_url.starts_with("http://") || self.base_url.starts_with("https://")) {
            return Err(ConfigError::InvalidValue {
                field: "api.base_url".to_string(),
                reason: format!("expected an http(s) URL, got '{}'", self.base_url),
            });
        }
        if self.timeout_secs == 0 {
            return Err(ConfigError::InvalidValue {
                field: "api.timeout_secs".to_string(),
                reason: "must be at least 1".to_string(),
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    #[test]
    fn defaults_point_at_local_service() {
        let config = ApiConfig::default();
        assert_eq!(config.endpoint_url(), "http://localhost:3000/api/items/getItem");
        assert_eq!(config.timeout_secs, 5);
        assert!(config.user_agent.starts_with("campus/"));
        assert!(config.validate().is_ok());
    }

    #[rstest]
    #[case("https://api.example.com/", "/items/getItem", "https://api.example.com/items/getItem")]
    #[case("https://api.example.com", "items/getItem", "https://api.example.com/items/getItem")]
    #[case("https://api.example.com/v2//", "//colleges", "https://api.example.com/v2/colleges")]
    #[case("https://api.example.com/colleges", "", "https://api.example.com/colleges")]
    fn endpoint_url_joins_without_doubled_slashes(
        #[case] base_url: &str,
        #[case] items_path: &str,
        #[case] expected: &str,
    ) {
        let config = ApiConfig {
            base_url: base_url.into(),
            items_path: items_path.into(),
            ..Default::default()
        };
        assert_eq!(config.endpoint_url(), expected);
    }

    #[test]
    fn rejects_non_http_base_url() {
        let config = ApiConfig {
            base_url: "ftp://example.com".into(),
            ..Default::default()
        };
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("api.base_url"));
    }

    #[test]
    fn rejects_zero_timeout() {
        let config = ApiConfig {
            timeout_secs: 0,
            ..Default::default()
        };
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("api.timeout_secs"));
    }
}
