//! Error types for the conversion pipeline

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while converting an image
#[derive(Debug, Error)]
pub enum ConvertError {
    /// The input image does not exist
    #[error("the file {} does not exist", .0.display())]
    InputNotFound(PathBuf),

    /// Conversion options are out of range
    #[error("invalid options: {0}")]
    InvalidOptions(String),

    /// Reading the input or writing an output failed
    #[error(transparent)]
    Io(#[from] pixcut_io::IoError),

    /// Building an output failed
    #[error(transparent)]
    Emit(#[from] pixcut_emit::EmitError),
}

/// Result type for conversion operations
pub type ConvertResult<T> = Result<T, ConvertError>;
