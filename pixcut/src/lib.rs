//! pixcut - Pixel images to cut-ready outlines
//!
//! Converts pixel art and flat-color images into:
//!
//! - DXF outline drawings in three combined variants (`mono`, `multi`,
//!   `multi_colored`) and one drawing per color
//! - one transparent PNG mask per color
//! - an upscaled, print-ready PNG preview with black region borders
//!
//! Every region is a maximal 4-connected set of same-color pixels; fully
//! transparent pixels are background.
//!
//! # Example
//!
//! ```no_run
//! use std::path::Path;
//! use pixcut::{ConvertOptions, LengthUnit, convert};
//!
//! let options = ConvertOptions::default()
//!     .with_pixel_size(0.25)
//!     .with_unit(LengthUnit::Inches);
//! let summary = convert(Path::new("sprite.png"), &options).unwrap();
//! println!("{} regions", summary.region_count);
//! ```

mod error;
mod layout;
mod options;
mod pipeline;

pub use error::{ConvertError, ConvertResult};
pub use layout::OutputLayout;
pub use options::{ConvertOptions, DEFAULT_DPI, DEFAULT_LINE_WIDTH, DEFAULT_PIXEL_SIZE};
pub use pipeline::{ConvertSummary, convert};

// Re-export core types (primary data structures used everywhere)
pub use pixcut_core::*;

// Re-export domain crates as modules to avoid name conflicts
pub use pixcut_color as color;
pub use pixcut_emit as emit;
pub use pixcut_io as io;
pub use pixcut_region as region;
