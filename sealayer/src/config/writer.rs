//! INI serialization for `ConfigFile`.
//!
//! Produces the commented representation written to `config.ini`, so a
//! freshly created file documents itself.

use super::settings::ConfigFile;

pub(super) fn to_config_string(config: &ConfigFile) -> String {
    let directory = config
        .data
        .directory
        .as_ref()
        .map(|p| p.display().to_string())
        .unwrap_or_default();

    format!(
        r#"[data]
; Base URL the catalogue documents (layers.json, parameters.json,
; datasets.json) are fetched from
base_url = {}
; Local directory containing the three documents; when set it takes
; precedence over base_url
; Example: directory = /home/user/symphony-export
directory = {}
; Timeout in seconds for document requests (default: 30)
timeout = {}

[logging]
; Directory log files are written to
directory = {}
; Log file name
file = {}
"#,
        config.data.base_url,
        directory,
        config.data.timeout_secs,
        config.logging.directory.display(),
        config.logging.file,
    )
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::parser::parse_ini;
    use ini::Ini;
    use std::path::PathBuf;

    #[test]
    fn test_written_config_parses_back_identically() {
        let mut config = ConfigFile::default();
        config.data.base_url = "https://symphony.example.se/data".to_string();
        config.data.directory = Some(PathBuf::from("/srv/export"));
        config.data.timeout_secs = 12;
        config.logging.file = "catalogue.log".to_string();

        let text = to_config_string(&config);
        let ini = Ini::load_from_str(&text).expect("written INI parses");
        let restored = parse_ini(&ini).expect("values restore");
        assert_eq!(restored, config);
    }
}
