//! Typed configuration structures.
//!
//! One struct per INI section; `ConfigFile` is the whole file. Defaults
//! live in [`super::defaults`].

use std::path::PathBuf;

/// `[data]` section: where catalogue documents come from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DataSettings {
    /// Base URL the three documents are fetched from.
    pub base_url: String,
    /// Local export directory; when set it takes precedence over
    /// `base_url`.
    pub directory: Option<PathBuf>,
    /// Per-request timeout in seconds for remote fetches.
    pub timeout_secs: u64,
}

/// `[logging]` section.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoggingSettings {
    /// Directory log files are written to.
    pub directory: PathBuf,
    /// Log file name inside the directory.
    pub file: String,
}

/// The whole configuration file.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConfigFile {
    pub data: DataSettings,
    pub logging: LoggingSettings,
}
