//! Entity structs for Campus domain objects.
//!
//! Entities serialize in the remote catalog's wire shape, so the same type
//! decodes an HTTP payload and the bundled fallback document.

mod institution;

pub use institution::Institution;
