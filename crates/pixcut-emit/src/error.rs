//! Error types for pixcut-emit

use thiserror::Error;

/// Errors that can occur while producing output documents and rasters
#[derive(Debug, Error)]
pub enum EmitError {
    /// Core library error
    #[error("core error: {0}")]
    Core(#[from] pixcut_core::Error),

    /// File format or file system error
    #[error("output error: {0}")]
    Io(#[from] pixcut_io::IoError),

    /// Invalid parameters
    #[error("invalid parameters: {0}")]
    InvalidParameters(String),
}

/// Result type for emit operations
pub type EmitResult<T> = Result<T, EmitError>;
