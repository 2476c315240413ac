//! Where the store gets its catalog from.

use std::future::Future;

use campus_core::entities::Institution;

use crate::error::CatalogError;

/// A provider of the full institution catalog.
///
/// The returned future is created when `fetch_all` is called, so callers
/// can order requests by call time rather than by completion time.
pub trait CatalogSource: Send + Sync {
    fn fetch_all(&self) -> impl Future<Output = Result<Vec<Institution>, CatalogError>> + Send;
}

/// A source that always yields the same catalog.
///
/// Serves a fixed in-memory catalog, typically as a test double.
#[derive(Debug, Clone, Default)]
pub struct StaticSource {
    institutions: Vec<Institution>,
}

impl StaticSource {
    #[must_use]
    pub const fn new(institutions: Vec<Institution>) -> Self {
        Self { institutions }
    }
}

impl CatalogSource for StaticSource {
    fn fetch_all(&self) -> impl Future<Output = Result<Vec<Institution>, CatalogError>> + Send {
        let institutions = self.institutions.clone();
        async move { Ok(institutions) }
    }
}
