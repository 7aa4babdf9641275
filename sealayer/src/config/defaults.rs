//! Default values for all configuration settings.

use std::path::PathBuf;

use super::settings::{DataSettings, LoggingSettings};

/// Default catalogue endpoint: the local development server.
pub const DEFAULT_BASE_URL: &str = "http://localhost:8000/data";

/// Default per-request timeout for document fetches.
pub const DEFAULT_FETCH_TIMEOUT_SECS: u64 = 30;

/// Default log file name.
pub const DEFAULT_LOG_FILE: &str = "sealayer.log";

/// Default log directory: `<config dir>/logs`, falling back to a
/// relative `logs/` when no home directory is available.
pub fn default_log_directory() -> PathBuf {
    super::file::config_directory()
        .map(|dir| dir.join("logs"))
        .unwrap_or_else(|_| PathBuf::from("logs"))
}

impl Default for DataSettings {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            directory: None,
            timeout_secs: DEFAULT_FETCH_TIMEOUT_SECS,
        }
    }
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            directory: default_log_directory(),
            file: DEFAULT_LOG_FILE.to_string(),
        }
    }
}
