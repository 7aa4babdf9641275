//! Service configuration.

use std::fmt;
use std::path::PathBuf;
use std::time::Duration;

use crate::config::defaults::{DEFAULT_BASE_URL, DEFAULT_FETCH_TIMEOUT_SECS};

/// Where the three catalogue documents come from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DataSource {
    /// Fetch from `<base_url>/<document>` over HTTP.
    Remote { base_url: String },
    /// Read from a local export directory.
    Local { root: PathBuf },
}

impl fmt::Display for DataSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DataSource::Remote { base_url } => f.write_str(base_url),
            DataSource::Local { root } => write!(f, "{}", root.display()),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServiceConfig {
    pub source: DataSource,
    /// Per-request timeout for remote fetches; unused for local reads.
    pub timeout: Duration,
}

impl ServiceConfig {
    pub fn remote(base_url: impl Into<String>) -> Self {
        Self {
            source: DataSource::Remote {
                base_url: base_url.into(),
            },
            timeout: Duration::from_secs(DEFAULT_FETCH_TIMEOUT_SECS),
        }
    }

    pub fn local(root: impl Into<PathBuf>) -> Self {
        Self {
            source: DataSource::Local { root: root.into() },
            timeout: Duration::from_secs(DEFAULT_FETCH_TIMEOUT_SECS),
        }
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self::remote(DEFAULT_BASE_URL)
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_points_at_default_endpoint() {
        let config = ServiceConfig::default();
        assert_eq!(
            config.source,
            DataSource::Remote {
                base_url: DEFAULT_BASE_URL.to_string()
            }
        );
        assert_eq!(config.timeout, Duration::from_secs(DEFAULT_FETCH_TIMEOUT_SECS));
    }

    #[test]
    fn test_builder_overrides() {
        let config = ServiceConfig::local("/tmp/export").with_timeout(Duration::from_secs(5));
        assert_eq!(
            config.source,
            DataSource::Local {
                root: PathBuf::from("/tmp/export")
            }
        );
        assert_eq!(config.timeout, Duration::from_secs(5));
    }
}
