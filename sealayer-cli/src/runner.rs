//! CLI runner for common setup and operations.
//!
//! Encapsulates config loading, logging initialization and runtime
//! construction so command handlers stay small.

use std::future::Future;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use tracing::info;

use sealayer::config::ConfigFile;
use sealayer::logging::{init_logging_full, LoggingGuard};
use sealayer::service::{CatalogService, DataSource, ServiceConfig};
use sealayer::snapshot::Snapshot;

use crate::error::CliError;

/// Runner that manages CLI lifecycle and common operations.
pub struct CliRunner {
    /// Logging guard - keeps logging active while the runner exists
    #[allow(dead_code)]
    logging_guard: LoggingGuard,
    /// Loaded configuration file
    config: ConfigFile,
    runtime: tokio::runtime::Runtime,
}

impl CliRunner {
    /// Create a runner: load config, initialize logging, build the
    /// runtime.
    ///
    /// With `verbose`, log output is mirrored to stderr at debug level;
    /// stdout stays reserved for command results either way.
    pub fn new(verbose: bool) -> Result<Self, CliError> {
        let config = ConfigFile::load().map_err(|e| CliError::Config(e.to_string()))?;

        let logging_guard = init_logging_full(
            &config.logging.directory,
            &config.logging.file,
            verbose,
            verbose,
        )
        .map_err(|e| CliError::LoggingInit(e.to_string()))?;

        let runtime = tokio::runtime::Builder::new_multi_thread()
            .enable_all()
            .build()
            .map_err(|e| CliError::Runtime(e.to_string()))?;

        info!("SeaLayer v{}", sealayer::VERSION);
        Ok(Self {
            logging_guard,
            config,
            runtime,
        })
    }

    /// Build the catalogue service, applying command-line overrides on
    /// top of the configuration file. `--data-dir` wins over
    /// `--base-url`, which wins over the file.
    pub fn service(
        &self,
        data_dir: Option<PathBuf>,
        base_url: Option<String>,
    ) -> Result<CatalogService, CliError> {
        let source = if let Some(root) = data_dir {
            DataSource::Local { root }
        } else if let Some(base_url) = base_url {
            DataSource::Remote { base_url }
        } else if let Some(root) = &self.config.data.directory {
            DataSource::Local { root: root.clone() }
        } else {
            DataSource::Remote {
                base_url: self.config.data.base_url.clone(),
            }
        };

        let service_config = ServiceConfig {
            source,
            timeout: Duration::from_secs(self.config.data.timeout_secs),
        };
        CatalogService::new(service_config).map_err(CliError::ServiceCreation)
    }

    /// Block on a future from synchronous command code.
    pub fn block_on<F: Future>(&self, future: F) -> F::Output {
        self.runtime.block_on(future)
    }

    /// Load (or return the cached) snapshot for a service.
    pub fn load_snapshot(&self, service: &CatalogService) -> Result<Arc<Snapshot>, CliError> {
        self.block_on(service.snapshot()).map_err(CliError::Load)
    }
}
