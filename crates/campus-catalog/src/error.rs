//! Catalog error types.

use thiserror::Error;

/// Errors that can occur while resolving the catalog from its remote source.
///
/// None of these escape [`CatalogStore`](crate::CatalogStore): they are
/// recorded as an advisory message and the fallback dataset is used instead.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// HTTP transport error (connect failure, timeout, body read).
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Catalog endpoint returned a non-success status code.
    #[error("HTTP error! status: {status}: {message}")]
    Api {
        /// HTTP status code returned by the endpoint.
        status: u16,
        /// Response body, possibly empty.
        message: String,
    },

    /// The response body is not a JSON array of institution records.
    #[error("parse error: {0}")]
    Parse(String),

    /// The payload decoded but violates a catalog invariant.
    #[error("invalid catalog: {0}")]
    InvalidCatalog(#[from] campus_core::errors::CoreError),

    /// Remote fetching is switched off (offline mode).
    #[error("remote catalog disabled")]
    Disabled,
}
