//! INI parsing into `ConfigFile`.
//!
//! Unknown sections and keys are ignored; known keys with unusable
//! values are hard errors so a typo in the timeout does not silently
//! become the default.

use std::path::PathBuf;

use ini::Ini;

use super::file::ConfigFileError;
use super::settings::ConfigFile;

pub(super) fn parse_ini(ini: &Ini) -> Result<ConfigFile, ConfigFileError> {
    let mut config = ConfigFile::default();

    if let Some(section) = ini.section(Some("data")) {
        if let Some(value) = section.get("base_url") {
            let value = value.trim();
            if !value.is_empty() {
                config.data.base_url = value.to_string();
            }
        }
        if let Some(value) = section.get("directory") {
            let value = value.trim();
            if !value.is_empty() {
                config.data.directory = Some(PathBuf::from(value));
            }
        }
        if let Some(value) = section.get("timeout") {
            let value = value.trim();
            if !value.is_empty() {
                config.data.timeout_secs =
                    value.parse().map_err(|_| ConfigFileError::InvalidValue {
                        section: "data".to_string(),
                        key: "timeout".to_string(),
                        value: value.to_string(),
                        reason: "expected a whole number of seconds".to_string(),
                    })?;
            }
        }
    }

    if let Some(section) = ini.section(Some("logging")) {
        if let Some(value) = section.get("directory") {
            let value = value.trim();
            if !value.is_empty() {
                config.logging.directory = PathBuf::from(value);
            }
        }
        if let Some(value) = section.get("file") {
            let value = value.trim();
            if !value.is_empty() {
                config.logging.file = value.to_string();
            }
        }
    }

    Ok(config)
}

// =============================================================================
// Tests
// =============================================================================
