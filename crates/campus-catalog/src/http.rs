//! Shared HTTP response helpers for the catalog client.
//!
//! Keeps status checks and body decoding out of request construction so
//! each failure mode maps to exactly one [`CatalogError`] variant.

use campus_core::entities::Institution;
use campus_core::validation::validate_catalog;

use crate::error::CatalogError;

/// Check an HTTP response for a non-success status.
///
/// Returns the response unchanged on 2xx, otherwise [`CatalogError::Api`]
/// with the status code and response body.
pub async fn check_response(resp: reqwest::Response) -> Result<reqwest::Response, CatalogError> {
    if !resp.status().is_success() {
        return Err(CatalogError::Api {
            status: resp.status().as_u16(),
            message: resp.text().await.unwrap_or_default(),
        });
    }
    Ok(resp)
}

/// Decode a response body as the full catalog.
///
/// The body must be a JSON array of institution records with unique ids.
pub async fn decode_catalog(resp: reqwest::Response) -> Result<Vec<Institution>, CatalogError> {
    let bytes = resp.bytes().await?;
    parse_catalog(&bytes)
}

/// Parse a catalog document (remote payload or bundled dataset).
pub fn parse_catalog(bytes: &[u8]) -> Result<Vec<Institution>, CatalogError> {
    let institutions: Vec<Institution> =
        serde_json::from_slice(bytes).map_err(|e| CatalogError::Parse(e.to_string()))?;
    validate_catalog(&institutions)?;
    Ok(institutions)
}
