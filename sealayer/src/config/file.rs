//! Configuration file I/O.
//!
//! The file lives at `~/.sealayer/config.ini`. A missing file is not an
//! error; defaults apply until the user writes one (or `ensure_exists`
//! creates a commented template).

use std::path::{Path, PathBuf};

use ini::Ini;
use thiserror::Error;
use tracing::debug;

use super::parser::parse_ini;
use super::settings::ConfigFile;
use super::writer::to_config_string;

pub const CONFIG_DIR_NAME: &str = ".sealayer";
pub const CONFIG_FILE_NAME: &str = "config.ini";

#[derive(Debug, Error)]
pub enum ConfigFileError {
    #[error("failed to read config file: {0}")]
    ReadError(#[from] ini::Error),
    #[error("failed to write config file {path}: {message}")]
    WriteError { path: String, message: String },
    #[error("invalid value for {section}.{key}: \"{value}\" ({reason})")]
    InvalidValue {
        section: String,
        key: String,
        value: String,
        reason: String,
    },
    #[error("could not determine the home directory")]
    NoHomeDirectory,
}

/// The per-user configuration directory, `~/.sealayer`.
pub fn config_directory() -> Result<PathBuf, ConfigFileError> {
    dirs::home_dir()
        .map(|home| home.join(CONFIG_DIR_NAME))
        .ok_or(ConfigFileError::NoHomeDirectory)
}

/// Full path of the configuration file.
pub fn config_file_path() -> Result<PathBuf, ConfigFileError> {
    Ok(config_directory()?.join(CONFIG_FILE_NAME))
}

impl ConfigFile {
    /// Load from the default location; defaults when the file does not
    /// exist.
    pub fn load() -> Result<Self, ConfigFileError> {
        Self::load_from(&config_file_path()?)
    }

    /// Load from an explicit path; defaults when the file does not
    /// exist.
    pub fn load_from(path: &Path) -> Result<Self, ConfigFileError> {
        if !path.exists() {
            debug!(path = %path.display(), "no config file; using defaults");
            return Ok(Self::default());
        }
        let ini = Ini::load_from_file(path)?;
        parse_ini(&ini)
    }

    /// Save to the default location, creating the directory as needed.
    pub fn save(&self) -> Result<(), ConfigFileError> {
        self.save_to(&config_file_path()?)
    }

    /// Save to an explicit path, creating parent directories as needed.
    pub fn save_to(&self, path: &Path) -> Result<(), ConfigFileError> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| ConfigFileError::WriteError {
                path: parent.display().to_string(),
                message: e.to_string(),
            })?;
        }
        std::fs::write(path, to_config_string(self)).map_err(|e| ConfigFileError::WriteError {
            path: path.display().to_string(),
            message: e.to_string(),
        })?;
        debug!(path = %path.display(), "config file written");
        Ok(())
    }

    /// Create the config file with defaults if it is absent. Returns the
    /// path and whether a new file was written.
    pub fn ensure_exists() -> Result<(PathBuf, bool), ConfigFileError> {
        let path = config_file_path()?;
        if path.exists() {
            return Ok((path, false));
        }
        Self::default().save_to(&path)?;
        Ok((path, true))
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_from_missing_file_gives_defaults() {
        let dir = tempfile::tempdir().expect("tempdir");
        let config = ConfigFile::load_from(&dir.path().join("config.ini")).expect("loads");
        assert_eq!(config, ConfigFile::default());
    }

    #[test]
    fn test_save_and_load_round_trip() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("nested").join("config.ini");

        let mut config = ConfigFile::default();
        config.data.base_url = "http://127.0.0.1:9000/data".to_string();
        config.data.timeout_secs = 3;
        config.save_to(&path).expect("saves");

        let restored = ConfigFile::load_from(&path).expect("loads");
        assert_eq!(restored, config);
    }

    #[test]
    fn test_malformed_file_is_a_read_error() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("config.ini");
        std::fs::write(&path, "[data\nbase_url oops").expect("write fixture");

        let error = ConfigFile::load_from(&path).unwrap_err();
        assert!(matches!(error, ConfigFileError::ReadError(_)), "{error:?}");
    }
}
