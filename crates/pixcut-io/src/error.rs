//! I/O error types
//!
//! Provides a unified error type for reading the input image and writing
//! every output file. Each format module maps its underlying library errors
//! into `IoError` variants so that callers only need to handle one error
//! type.

use thiserror::Error;

/// Error type for file I/O operations.
#[derive(Error, Debug)]
pub enum IoError {
    /// Standard I/O error (file not found, permission denied, disk full, ...)
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The data handed to a writer is structurally invalid
    #[error("invalid data: {0}")]
    InvalidData(String),

    /// The image decoder rejected the input
    #[error("decode error: {0}")]
    DecodeError(String),

    /// A format encoder returned an error
    #[error("encode error: {0}")]
    EncodeError(String),

    /// An error from the core library (e.g. zero-sized image)
    #[error("core error: {0}")]
    Core(#[from] pixcut_core::Error),
}

/// Convenience alias for I/O results.
pub type IoResult<T> = Result<T, IoError>;
