//! Configuration management commands.
//!
//! Provides `config get`, `config set`, `config list`, `config path`, and
//! `config init` for viewing and modifying settings from the command line.
//! These run without loading the catalogue.

use clap::Subcommand;

use sealayer::config::{config_file_path, ConfigFile, ConfigKey};

use crate::error::CliError;

/// Config subcommands.
#[derive(Debug, Subcommand)]
pub enum ConfigCommands {
    /// Get a configuration value
    Get {
        /// Configuration key in section.key form (e.g. data.base_url)
        key: String,
    },

    /// Set a configuration value
    Set {
        /// Configuration key in section.key form (e.g. data.base_url)
        key: String,

        /// Value to set
        value: String,
    },

    /// List all configuration settings
    List,

    /// Show the configuration file path
    Path,

    /// Create the configuration file with defaults if it does not exist
    Init,
}

/// Run a config subcommand.
pub fn run(command: ConfigCommands) -> Result<(), CliError> {
    match command {
        ConfigCommands::Get { key } => run_get(&key),
        ConfigCommands::Set { key, value } => run_set(&key, &value),
        ConfigCommands::List => run_list(),
        ConfigCommands::Path => run_path(),
        ConfigCommands::Init => run_init(),
    }
}

fn parse_key(key: &str) -> Result<ConfigKey, CliError> {
    ConfigKey::parse(key).ok_or_else(|| CliError::UnknownConfigKey(key.to_string()))
}

/// Get a configuration value.
fn run_get(key: &str) -> Result<(), CliError> {
    let config_key = parse_key(key)?;
    let config = ConfigFile::load().unwrap_or_default();
    let value = config_key.get(&config);

    if value.is_empty() {
        println!("(not set)");
    } else {
        println!("{value}");
    }

    Ok(())
}

/// Set a configuration value and save the file.
fn run_set(key: &str, value: &str) -> Result<(), CliError> {
    let config_key = parse_key(key)?;

    let mut config = ConfigFile::load().unwrap_or_default();
    config_key
        .set(&mut config, value)
        .map_err(|e| CliError::Config(e.to_string()))?;
    config
        .save()
        .map_err(|e| CliError::Config(e.to_string()))?;

    println!("Set {} = {}", config_key.name(), value);

    Ok(())
}

/// List all configuration settings grouped by section.
fn run_list() -> Result<(), CliError> {
    let config = ConfigFile::load().unwrap_or_default();

    println!("Configuration Settings");
    println!("======================");
    println!();

    let mut current_section = "";

    for key in ConfigKey::ALL {
        let (section, key_name) = key.name().split_once('.').unwrap_or(("", key.name()));

        if section != current_section {
            if !current_section.is_empty() {
                println!();
            }
            println!("[{section}]");
            current_section = section;
        }

        let value = key.get(&config);
        if value.is_empty() {
            println!("  {key_name} = (not set)");
        } else {
            println!("  {key_name} = {value}");
        }
    }

    Ok(())
}

/// Show the configuration file path.
fn run_path() -> Result<(), CliError> {
    let path = config_file_path().map_err(|e| CliError::Config(e.to_string()))?;
    println!("{}", path.display());
    Ok(())
}

/// Create the configuration file with defaults if absent.
fn run_init() -> Result<(), CliError> {
    let (path, created) = ConfigFile::ensure_exists().map_err(|e| CliError::Config(e.to_string()))?;

    if created {
        println!("Created {}", path.display());
    } else {
        println!("Configuration already exists at {}", path.display());
    }

    Ok(())
}
