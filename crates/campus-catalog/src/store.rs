//! The authoritative institution collection.
//!
//! [`CatalogStore`] resolves the catalog from a [`CatalogSource`] and swaps
//! in the bundled fallback when the source fails. Every `load` takes a
//! ticket when it is called; an outcome is applied only if its ticket is
//! still the latest issued, so a slow earlier request can never overwrite
//! a later one.

use std::future::Future;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, PoisonError, RwLock};

use campus_core::entities::Institution;
use campus_core::enums::Category;
use serde::Serialize;

use crate::error::CatalogError;
use crate::source::CatalogSource;

/// Where the current collection came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DataOrigin {
    /// Nothing has been loaded yet.
    Empty,
    Remote,
    Fallback,
}

/// Loading/error status exposed to callers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StoreStatus {
    pub loading: bool,
    /// Advisory message from the last applied failed load.
    pub error: Option<String>,
    pub origin: DataOrigin,
    /// Ticket of the last applied load (0 before the first).
    pub generation: u64,
}

/// What happened to one `load` call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadOutcome {
    /// The remote catalog replaced the collection.
    Remote { count: usize },
    /// The source failed and the fallback dataset replaced the collection.
    Fallback { error: String },
    /// A later load was issued before this one resolved; result discarded.
    Stale { ticket: u64 },
}

/// A consistent view of the collection and its status.
#[derive(Debug, Clone)]
pub struct CatalogSnapshot {
    institutions: Arc<[Institution]>,
    pub status: StoreStatus,
}

impl CatalogSnapshot {
    #[must_use]
    pub fn all(&self) -> &[Institution] {
        &self.institutions
    }

    /// Institutions in `category`, in catalog order.
    #[must_use]
    pub fn by_category(&self, category: Category) -> Vec<&Institution> {
        self.institutions
            .iter()
            .filter(|institution| institution.category == category)
            .collect()
    }

    #[must_use]
    pub fn local(&self) -> Vec<&Institution> {
        self.by_category(Category::Local)
    }

    #[must_use]
    pub fn international(&self) -> Vec<&Institution> {
        self.by_category(Category::International)
    }
}

#[derive(Debug)]
struct StoreState {
    institutions: Arc<[Institution]>,
    status: StoreStatus,
}

/// Resets `loading` if a load future is dropped before it resolves.
struct PendingLoad<'a> {
    issued: &'a AtomicU64,
    state: &'a RwLock<StoreState>,
    ticket: u64,
    settled: bool,
}

impl Drop for PendingLoad<'_> {
    fn drop(&mut self) {
        if self.settled {
            return;
        }
        let mut state = self.state.write().unwrap_or_else(PoisonError::into_inner);
        if self.issued.load(Ordering::SeqCst) == self.ticket {
            state.status.loading = false;
            tracing::debug!(ticket = self.ticket, "catalog load abandoned");
        }
    }
}

/// Owner of the current catalog. One writer (load completion), many readers.
pub struct CatalogStore<S> {
    source: S,
    fallback: Arc<[Institution]>,
    issued: AtomicU64,
    state: RwLock<StoreState>,
}

impl<S: CatalogSource> CatalogStore<S> {
    /// Create an empty store. Nothing is fetched until [`Self::load`].
    pub fn new(source: S, fallback: Vec<Institution>) -> Self {
        Self {
            source,
            fallback: fallback.into(),
            issued: AtomicU64::new(0),
            state: RwLock::new(StoreState {
                institutions: Arc::from(Vec::new()),
                status: StoreStatus {
                    loading: false,
                    error: None,
                    origin: DataOrigin::Empty,
                    generation: 0,
                },
            }),
        }
    }

    /// Fetch the catalog from the source, falling back on any failure.
    ///
    /// The ticket is taken and the store enters the loading state when this
    /// method is called, not when the returned future is first polled.
    /// Dropping the future before it resolves clears `loading` again unless
    /// a later load is still outstanding.
    pub fn load(&self) -> impl Future<Output = LoadOutcome> + Send + '_ {
        let ticket = self.issued.fetch_add(1, Ordering::SeqCst) + 1;
        {
            let mut state = self.state.write().unwrap_or_else(PoisonError::into_inner);
            state.status.loading = true;
            state.status.error = None;
        }
        tracing::debug!(ticket, "catalog load issued");
        let request = self.source.fetch_all();
        let mut pending = PendingLoad {
            issued: &self.issued,
            state: &self.state,
            ticket,
            settled: false,
        };
        async move {
            let result = request.await;
            pending.settled = true;
            self.apply(ticket, result)
        }
    }

    /// Re-run [`Self::load`], typically after a failure.
    pub fn refetch(&self) -> impl Future<Output = LoadOutcome> + Send + '_ {
        self.load()
    }

    fn apply(&self, ticket: u64, result: Result<Vec<Institution>, CatalogError>) -> LoadOutcome {
        let (institutions, origin, error, outcome): (Arc<[Institution]>, _, _, _) = match result {
            Ok(institutions) => {
                let count = institutions.len();
                (
                    Arc::from(institutions),
                    DataOrigin::Remote,
                    None,
                    LoadOutcome::Remote { count },
                )
            }
            Err(error) => {
                let message = error.to_string();
                (
                    Arc::clone(&self.fallback),
                    DataOrigin::Fallback,
                    Some(message.clone()),
                    LoadOutcome::Fallback { error: message },
                )
            }
        };

        let mut state = self.state.write().unwrap_or_else(PoisonError::into_inner);
        let latest = self.issued.load(Ordering::SeqCst);
        if ticket != latest {
            tracing::debug!(ticket, latest, "discarding stale catalog load");
            return LoadOutcome::Stale { ticket };
        }

        if let Some(message) = &error {
            tracing::warn!(error = %message, fallback = self.fallback.len(), "catalog fetch failed; using bundled data");
        }

        state.institutions = institutions;
        state.status = StoreStatus {
            loading: false,
            error,
            origin,
            generation: ticket,
        };
        outcome
    }

    /// Snapshot of the collection and status at this instant.
    #[must_use]
    pub fn snapshot(&self) -> CatalogSnapshot {
        let state = self.state.read().unwrap_or_else(PoisonError::into_inner);
        CatalogSnapshot {
            institutions: Arc::clone(&state.institutions),
            status: state.status.clone(),
        }
    }

    #[must_use]
    pub fn status(&self) -> StoreStatus {
        self.state
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .status
            .clone()
    }

    /// The full collection.
    #[must_use]
    pub fn all(&self) -> Arc<[Institution]> {
        let state = self.state.read().unwrap_or_else(PoisonError::into_inner);
        Arc::clone(&state.institutions)
    }

    /// Institutions in `category`, recomputed on every call.
    #[must_use]
    pub fn by_category(&self, category: Category) -> Vec<Institution> {
        self.snapshot()
            .by_category(category)
            .into_iter()
            .cloned()
            .collect()
    }

    #[must_use]
    pub fn local(&self) -> Vec<Institution> {
        self.by_category(Category::Local)
    }

    #[must_use]
    pub fn international(&self) -> Vec<Institution> {
        self.by_category(Category::International)
    }
}
