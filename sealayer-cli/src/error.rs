//! CLI error handling with user-friendly messages.
//!
//! Centralizes error handling for the CLI, providing consistent
//! formatting and appropriate exit codes.

use std::fmt;
use std::process;

use sealayer::service::ServiceError;
use sealayer::snapshot::LoadError;

/// CLI-specific errors with user-friendly messages.
#[derive(Debug)]
pub enum CliError {
    /// Failed to initialize logging
    LoggingInit(String),
    /// Configuration error
    Config(String),
    /// Failed to build the tokio runtime
    Runtime(String),
    /// Failed to create the catalogue service
    ServiceCreation(ServiceError),
    /// Failed to load the catalogue
    Load(ServiceError),
    /// A named layer does not exist in the catalogue
    LayerNotFound(String),
    /// A parameter code is not in the catalogue
    ParameterNotFound(String),
    /// An unrecognized configuration key
    UnknownConfigKey(String),
    /// Failed to render JSON output
    Serialize(String),
}

impl CliError {
    /// Exit the process with an appropriate error message and code.
    pub fn exit(&self) -> ! {
        eprintln!("Error: {}", self);

        // Print additional help for specific errors
        match self {
            CliError::Load(ServiceError::Load(LoadError::Fetch { .. })) => {
                eprintln!();
                eprintln!("The catalogue documents could not be retrieved. Check:");
                eprintln!("  1. The endpoint in `sealayer config get data.base_url`");
                eprintln!("  2. That layers.json, parameters.json and datasets.json exist there");
                eprintln!("  3. Or point at a local export with --data-dir <DIR>");
            }
            CliError::LayerNotFound(_) => {
                eprintln!();
                eprintln!("Layer names match case-insensitively; list them with:");
                eprintln!("  sealayer layers");
            }
            CliError::ParameterNotFound(_) => {
                eprintln!();
                eprintln!("Parameter codes match exactly; list them with:");
                eprintln!("  sealayer parameters");
            }
            CliError::UnknownConfigKey(_) => {
                eprintln!();
                eprintln!("Known keys are listed by: sealayer config list");
            }
            _ => {}
        }

        process::exit(1)
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CliError::LoggingInit(msg) => write!(f, "Failed to initialize logging: {}", msg),
            CliError::Config(msg) => write!(f, "Configuration error: {}", msg),
            CliError::Runtime(msg) => write!(f, "Failed to start async runtime: {}", msg),
            CliError::ServiceCreation(e) => write!(f, "Failed to create service: {}", e),
            CliError::Load(e) => write!(f, "Failed to load the catalogue: {}", e),
            CliError::LayerNotFound(name) => write!(f, "No layer named '{}'", name),
            CliError::ParameterNotFound(code) => write!(f, "No parameter with code '{}'", code),
            CliError::UnknownConfigKey(key) => write!(f, "Unknown configuration key '{}'", key),
            CliError::Serialize(msg) => write!(f, "Failed to render output: {}", msg),
        }
    }
}

impl std::error::Error for CliError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            CliError::ServiceCreation(e) => Some(e),
            CliError::Load(e) => Some(e),
            _ => None,
        }
    }
}

impl From<ServiceError> for CliError {
    fn from(e: ServiceError) -> Self {
        CliError::Load(e)
    }
}
