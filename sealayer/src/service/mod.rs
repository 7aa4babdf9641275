//! High-level catalogue service facade.
//!
//! Wires a configured document source to the snapshot store so consumers
//! deal with one object. Everything a front-end needs goes through here:
//!
//! ```ignore
//! use sealayer::service::{CatalogService, ServiceConfig};
//!
//! let service = CatalogService::new(ServiceConfig::default())?;
//! let snapshot = service.snapshot().await?;
//! for layer in snapshot.layers() {
//!     println!("{}", layer.name);
//! }
//! ```

mod config;
mod error;

use std::sync::Arc;

use tracing::info;

use crate::fetch::{AnyFetcher, DirFetcher, HttpFetcher};
use crate::snapshot::{Snapshot, SnapshotStore};

pub use config::{DataSource, ServiceConfig};
pub use error::ServiceError;

pub struct CatalogService {
    config: ServiceConfig,
    store: SnapshotStore<AnyFetcher>,
}

impl CatalogService {
    /// Build the service for a configured source. No network or disk
    /// access happens here; the first [`snapshot`](Self::snapshot) call
    /// triggers the load.
    pub fn new(config: ServiceConfig) -> Result<Self, ServiceError> {
        let fetcher = match &config.source {
            DataSource::Remote { base_url } => {
                AnyFetcher::Http(HttpFetcher::new(base_url.clone(), config.timeout)?)
            }
            DataSource::Local { root } => AnyFetcher::Directory(DirFetcher::new(root.clone())),
        };
        info!(source = %config.source, "catalogue service created");
        Ok(Self {
            store: SnapshotStore::new(fetcher),
            config,
        })
    }

    pub fn config(&self) -> &ServiceConfig {
        &self.config
    }

    /// Whether a snapshot is loaded and queries can be answered.
    pub fn ready(&self) -> bool {
        self.store.ready()
    }

    /// The current snapshot, loading it on first use.
    pub async fn snapshot(&self) -> Result<Arc<Snapshot>, ServiceError> {
        Ok(self.store.snapshot().await?)
    }

    /// Replace the snapshot with freshly fetched data. On failure the
    /// previous snapshot remains current.
    pub async fn reload(&self) -> Result<Arc<Snapshot>, ServiceError> {
        Ok(self.store.reload().await?)
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_service_builds_without_touching_the_source() {
        let service =
            CatalogService::new(ServiceConfig::local("/nonexistent/export")).expect("builds");
        assert!(!service.ready());
    }

    #[tokio::test]
    async fn test_missing_local_documents_fail_the_load() {
        let dir = tempfile::tempdir().expect("tempdir");
        let service = CatalogService::new(ServiceConfig::local(dir.path())).expect("builds");

        let error = service.snapshot().await.unwrap_err();
        assert!(matches!(error, ServiceError::Load(_)), "{error:?}");
        assert!(!service.ready());
    }
}
