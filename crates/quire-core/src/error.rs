//! Error types for quire core operations

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for quire core operations
pub type QuireResult<T> = Result<T, QuireError>;

/// Errors raised by quire core
///
/// Discovery never returns these to its caller; per-location failures are
/// folded into an empty contribution. They surface from reference resolution
/// and from direct storage reads.
#[derive(Debug, Error)]
pub enum QuireError {
    /// A file or directory could not be read
    #[error("IO error at {path}: {source}")]
    Io {
        /// Path being accessed
        path: PathBuf,
        /// Underlying IO error
        #[source]
        source: std::io::Error,
    },

    /// A resource could not be found
    #[error("Resource not found: {0}")]
    NotFound(String),
}
