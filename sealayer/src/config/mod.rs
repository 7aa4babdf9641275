//! File-backed configuration.
//!
//! Settings live in `~/.sealayer/config.ini`, INI-formatted with two
//! sections: `[data]` for where the catalogue documents come from and
//! `[logging]` for log output. A missing file means defaults; the
//! parsed [`ConfigFile`] is the single source the CLI builds its
//! service configuration from.

pub mod defaults;
mod file;
mod keys;
mod parser;
mod settings;
mod writer;

pub use file::{config_directory, config_file_path, ConfigFileError, CONFIG_DIR_NAME, CONFIG_FILE_NAME};
pub use keys::ConfigKey;
pub use settings::{ConfigFile, DataSettings, LoggingSettings};
