//! Registry of user-settable configuration keys.
//!
//! Drives the `config get`/`config set`/`config list` CLI commands: one
//! place that knows every key's dotted name, its description, and how to
//! read and validate it.

use std::path::PathBuf;

use super::file::ConfigFileError;
use super::settings::ConfigFile;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigKey {
    DataBaseUrl,
    DataDirectory,
    DataTimeout,
    LoggingDirectory,
    LoggingFile,
}

impl ConfigKey {
    pub const ALL: [ConfigKey; 5] = [
        ConfigKey::DataBaseUrl,
        ConfigKey::DataDirectory,
        ConfigKey::DataTimeout,
        ConfigKey::LoggingDirectory,
        ConfigKey::LoggingFile,
    ];

    /// Dotted `section.key` name used on the command line.
    pub fn name(self) -> &'static str {
        match self {
            ConfigKey::DataBaseUrl => "data.base_url",
            ConfigKey::DataDirectory => "data.directory",
            ConfigKey::DataTimeout => "data.timeout",
            ConfigKey::LoggingDirectory => "logging.directory",
            ConfigKey::LoggingFile => "logging.file",
        }
    }

    pub fn describe(self) -> &'static str {
        match self {
            ConfigKey::DataBaseUrl => "base URL for the catalogue documents",
            ConfigKey::DataDirectory => "local export directory (overrides the base URL)",
            ConfigKey::DataTimeout => "document request timeout in seconds",
            ConfigKey::LoggingDirectory => "directory log files are written to",
            ConfigKey::LoggingFile => "log file name",
        }
    }

    /// Look a key up by its dotted name.
    pub fn parse(name: &str) -> Option<ConfigKey> {
        Self::ALL.into_iter().find(|key| key.name() == name.trim())
    }

    /// Current value as displayed by `config get`/`config list`.
    pub fn get(self, config: &ConfigFile) -> String {
        match self {
            ConfigKey::DataBaseUrl => config.data.base_url.clone(),
            ConfigKey::DataDirectory => config
                .data
                .directory
                .as_ref()
                .map(|p| p.display().to_string())
                .unwrap_or_default(),
            ConfigKey::DataTimeout => config.data.timeout_secs.to_string(),
            ConfigKey::LoggingDirectory => config.logging.directory.display().to_string(),
            ConfigKey::LoggingFile => config.logging.file.clone(),
        }
    }

    /// Validate and apply a value. An empty value clears
    /// `data.directory`; every other key requires one.
    pub fn set(self, config: &mut ConfigFile, value: &str) -> Result<(), ConfigFileError> {
        let value = value.trim();
        let invalid = |reason: &str| ConfigFileError::InvalidValue {
            section: self.name().split('.').next().unwrap_or_default().to_string(),
            key: self.name().split('.').nth(1).unwrap_or_default().to_string(),
            value: value.to_string(),
            reason: reason.to_string(),
        };

        match self {
            ConfigKey::DataBaseUrl => {
                if value.is_empty() {
                    return Err(invalid("base URL cannot be empty"));
                }
                config.data.base_url = value.to_string();
            }
            ConfigKey::DataDirectory => {
                config.data.directory = if value.is_empty() {
                    None
                } else {
                    Some(PathBuf::from(value))
                };
            }
            ConfigKey::DataTimeout => {
                let secs: u64 = value
                    .parse()
                    .map_err(|_| invalid("expected a whole number of seconds"))?;
                if secs == 0 {
                    return Err(invalid("timeout must be at least 1 second"));
                }
                config.data.timeout_secs = secs;
            }
            ConfigKey::LoggingDirectory => {
                if value.is_empty() {
                    return Err(invalid("directory cannot be empty"));
                }
                config.logging.directory = PathBuf::from(value);
            }
            ConfigKey::LoggingFile => {
                if value.is_empty() {
                    return Err(invalid("file name cannot be empty"));
                }
                config.logging.file = value.to_string();
            }
        }
        Ok(())
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_key_parses_its_own_name() {
        for key in ConfigKey::ALL {
            assert_eq!(ConfigKey::parse(key.name()), Some(key));
        }
        assert_eq!(ConfigKey::parse("data.nonsense"), None);
    }

    #[test]
    fn test_set_then_get_round_trips() {
        let mut config = ConfigFile::default();
        ConfigKey::DataBaseUrl
            .set(&mut config, "https://symphony.example.se/data")
            .expect("valid");
        assert_eq!(
            ConfigKey::DataBaseUrl.get(&config),
            "https://symphony.example.se/data"
        );

        ConfigKey::DataTimeout.set(&mut config, "7").expect("valid");
        assert_eq!(config.data.timeout_secs, 7);
    }

    #[test]
    fn test_empty_value_clears_directory_only() {
        let mut config = ConfigFile::default();
        ConfigKey::DataDirectory
            .set(&mut config, "/srv/export")
            .expect("valid");
        assert!(config.data.directory.is_some());

        ConfigKey::DataDirectory.set(&mut config, "").expect("clears");
        assert_eq!(config.data.directory, None);

        assert!(ConfigKey::DataBaseUrl.set(&mut config, "").is_err());
    }

    #[test]
    fn test_zero_timeout_rejected() {
        let mut config = ConfigFile::default();
        let error = ConfigKey::DataTimeout.set(&mut config, "0").unwrap_err();
        assert!(matches!(error, ConfigFileError::InvalidValue { .. }), "{error:?}");
    }
}
