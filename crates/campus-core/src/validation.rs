//! Catalog-wide invariants.

use std::collections::HashSet;

use crate::entities::Institution;
use crate::errors::CoreError;

/// Check that every institution id is unique across the catalog.
///
/// # Errors
///
/// Returns [`CoreError::Validation`] naming the first repeated id.
pub fn validate_catalog(institutions: &[Institution]) -> Result<(), CoreError> {
    let mut seen = HashSet::with_capacity(institutions.len());
    for institution in institutions {
        if !seen.insert(institution.id.as_str()) {
            return Err(CoreError::Validation(format!(
                "duplicate institution id '{}'",
                institution.id
            )));
        }
    }
    Ok(())
}

/// Find an institution by id.
///
/// # Errors
///
/// Returns [`CoreError::NotFound`] if no institution carries `id`.
pub fn find_by_id<'a>(institutions: &'a [Institution], id: &str) -> Result<&'a Institution, CoreError> {
    institutions
        .iter()
        .find(|institution| institution.id == id)
        .ok_or_else(|| CoreError::NotFound {
            entity_type: "institution".to_string(),
            id: id.to_string(),
        })
}
