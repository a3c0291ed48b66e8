//! Error types for configuration loading

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for configuration operations
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Errors that can occur while loading or validating configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    /// A configuration file could not be read
    #[error("Failed to read config at {path}: {source}")]
    Io {
        /// Path of the file being read
        path: PathBuf,
        /// Underlying IO error
        #[source]
        source: std::io::Error,
    },

    /// A configuration value is present but unusable
    #[error("Invalid value for {field}: {value}")]
    InvalidValue {
        /// Field (or file) the value belongs to
        field: String,
        /// Description of what was wrong
        value: String,
    },
}
