//! Bundled fallback dataset.
//!
//! Shipped as a JSON document in the remote wire format so both paths go
//! through the same decoder.

use campus_core::entities::Institution;

use crate::error::CatalogError;
use crate::http::parse_catalog;

const FALLBACK_JSON: &str = include_str!("../data/fallback.json");

/// Decode the bundled catalog (4 local + 5 international institutions).
///
/// # Errors
///
/// Returns [`CatalogError`] only if the bundled document is corrupt.
pub fn fallback_dataset() -> Result<Vec<Institution>, CatalogError> {
    parse_catalog(FALLBACK_JSON.as_bytes())
}
