//! Error types for pixcut-core
//!
//! Grid construction is the only fallible operation in the core crate;
//! everything derived from a valid grid is infallible.

use thiserror::Error;

/// pixcut-core error type
#[derive(Error, Debug)]
pub enum Error {
    /// Invalid grid dimensions
    #[error("invalid grid dimensions: {width}x{height}")]
    InvalidDimension { width: u32, height: u32 },

    /// Pixel buffer does not match the declared dimensions
    #[error("pixel buffer length mismatch: expected {expected}, got {actual}")]
    DataLength { expected: usize, actual: usize },

    /// Invalid parameter value
    #[error("invalid parameter: {0}")]
    InvalidParameter(String),
}

/// Result type alias for core operations
pub type Result<T> = std::result::Result<T, Error>;
