use std::future::Future;

use anyhow::Context;
use campus_catalog::{CatalogClient, CatalogError, CatalogSource, CatalogStore, fallback_dataset};
use campus_config::CampusConfig;
use campus_core::entities::Institution;

use crate::cli::GlobalFlags;
use crate::progress::Spinner;

/// Where the binary's store fetches from.
pub enum Backend {
    Remote(CatalogClient),
    /// `--offline`: every fetch fails fast so the bundled data is used.
    Offline,
}

impl CatalogSource for Backend {
    fn fetch_all(&self) -> impl Future<Output = Result<Vec<Institution>, CatalogError>> + Send {
        async move {
            match self {
                Self::Remote(client) => client.fetch_catalog().await,
                Self::Offline => Err(CatalogError::Disabled),
            }
        }
    }
}

/// Shared state handed to every catalog command.
pub struct AppContext {
    pub config: CampusConfig,
    pub store: CatalogStore<Backend>,
}

impl AppContext {
    /// Build the store and perform the initial load.
    pub async fn init(config: CampusConfig, flags: &GlobalFlags) -> anyhow::Result<Self> {
        let backend = if flags.offline {
            Backend::Offline
        } else {
            Backend::Remote(
                CatalogClient::new(&config.api).context("failed to build catalog HTTP client")?,
            )
        };
        let ctx = Self::with_backend(config, backend)?;

        let spinner = Spinner::start("Loading colleges...", flags);
        ctx.store.load().await;
        spinner.finish();

        Ok(ctx)
    }

    /// Build an unloaded context over `backend` with the bundled fallback.
    pub fn with_backend(config: CampusConfig, backend: Backend) -> anyhow::Result<Self> {
        let fallback = fallback_dataset().context("bundled catalog is corrupt")?;
        Ok(Self {
            config,
            store: CatalogStore::new(backend, fallback),
        })
    }
}

/// Snapshot of an offline store after its first load.
#[cfg(test)]
pub async fn offline_snapshot() -> campus_catalog::CatalogSnapshot {
    let ctx = AppContext::with_backend(CampusConfig::default(), Backend::Offline)
        .expect("bundled catalog decodes");
    ctx.store.load().await;
    ctx.store.snapshot()
}
