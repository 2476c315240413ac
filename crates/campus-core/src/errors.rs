//! Cross-cutting error types for Campus.
//!
//! Domain-specific errors (`ConfigError`, `CatalogError`) are defined in
//! their respective crates and converge into `anyhow` in `campus-cli`.

use thiserror::Error;

/// Errors that can be raised by any Campus crate.
#[derive(Debug, Error)]
pub enum CoreError {
    /// Entity lookup returned no result.
    #[error("Entity not found: {entity_type} {id}")]
    NotFound { entity_type: String, id: String },

    /// A string did not name a known enum variant.
    #[error("Unknown {kind}: '{value}'")]
    UnknownVariant { kind: &'static str, value: String },

    /// Data failed validation (shape, uniqueness, constraints).
    #[error("Validation error: {0}")]
    Validation(String),

    /// Catch-all for unexpected errors.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}
