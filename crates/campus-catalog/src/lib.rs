//! # campus-catalog
//!
//! Catalog resolution for Campus.
//!
//! - [`CatalogClient`] fetches the full catalog from the configured endpoint
//! - [`fallback_dataset`] decodes the bundled catalog shipped with the crate
//! - [`CatalogStore`] owns the current collection, degrades to the fallback on
//!   any fetch failure, and discards stale load results

mod client;
mod error;
mod fallback;
mod http;
mod source;
mod store;

pub use client::CatalogClient;
pub use error::CatalogError;
pub use fallback::fallback_dataset;
pub use http::parse_catalog;
pub use source::{CatalogSource, StaticSource};
pub use store::{CatalogSnapshot, CatalogStore, DataOrigin, LoadOutcome, StoreStatus};
