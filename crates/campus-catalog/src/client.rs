//! HTTP client for the remote catalog endpoint.

use std::future::Future;
use std::time::Duration;

use campus_config::ApiConfig;
use campus_core::entities::Institution;
use campus_core::enums::Category;
use reqwest::header::{CONTENT_TYPE, HeaderValue};

use crate::error::CatalogError;
use crate::http::{check_response, decode_catalog};
use crate::source::CatalogSource;

/// HTTP client for `GET {base_url}{items_path}`.
#[derive(Debug, Clone)]
pub struct CatalogClient {
    http: reqwest::Client,
    endpoint: String,
}

impl CatalogClient {
    /// Build a client from the `[api]` config section.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::Http`] if the underlying `reqwest::Client`
    /// fails to build.
    pub fn new(config: &ApiConfig) -> Result<Self, CatalogError> {
        let http = reqwest::Client::builder()
            .user_agent(config.user_agent.as_str())
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;
        Ok(Self {
            http,
            endpoint: config.endpoint_url(),
        })
    }

    /// The resolved items endpoint.
    #[must_use]
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Fetch the full catalog.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError`] if the request fails, the endpoint returns a
    /// non-success status, or the body is not a valid catalog.
    pub async fn fetch_catalog(&self) -> Result<Vec<Institution>, CatalogError> {
        tracing::debug!(endpoint = %self.endpoint, "fetching catalog");
        let resp = self
            .http
            .get(&self.endpoint)
            .header(CONTENT_TYPE, HeaderValue::from_static("application/json"))
            .send()
            .await?;
        let institutions = decode_catalog(check_response(resp).await?).await?;
        tracing::debug!(count = institutions.len(), "catalog fetched");
        Ok(institutions)
    }

    /// Fetch the catalog and keep one category.
    ///
    /// # Errors
    ///
    /// Same as [`Self::fetch_catalog`].
    pub async fn fetch_category(&self, category: Category) -> Result<Vec<Institution>, CatalogError> {
        let mut institutions = self.fetch_catalog().await?;
        institutions.retain(|institution| institution.category == category);
        Ok(institutions)
    }
}

impl CatalogSource for CatalogClient {
    fn fetch_all(&self) -> impl Future<Output = Result<Vec<Institution>, CatalogError>> + Send {
        self.fetch_catalog()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn client_uses_configured_endpoint() {
        let config = ApiConfig {
            base_url: "https://catalog.example.com/api/".into(),
            ..Default::default()
        };
        let client = CatalogClient::new(&config).unwrap();
        assert_eq!(client.endpoint(), "https://catalog.example.com/api/items/getItem");
    }
}
