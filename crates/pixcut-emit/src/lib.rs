//! pixcut-emit - Output generation for pixcut
//!
//! Turns segmented regions into the files a fabricator works with:
//!
//! - [`geometry`]: grouping modes, document descriptors and DXF conversion
//! - [`raster`]: per-color masks and the upscaled, bordered print preview
//!
//! # Examples
//!
//! ```
//! use pixcut_core::{Grid, LengthUnit, Rgba};
//! use pixcut_emit::{GroupingMode, PreviewOptions, build_documents, render_preview, to_dxf};
//! use pixcut_region::{BoundaryPolicy, segment_regions};
//!
//! let grid = Grid::filled(2, 2, Rgba::opaque(0, 0, 255)).unwrap();
//! let regions = segment_regions(&grid);
//!
//! let docs = build_documents(&grid, &regions, GroupingMode::Mono, BoundaryPolicy::default(), "tile");
//! let dxf = to_dxf(&docs[0], 5.0, LengthUnit::Millimeters).unwrap();
//! assert_eq!(dxf.lines().len(), 8);
//!
//! let mut rows = Vec::new();
//! let info = render_preview(&grid, &PreviewOptions::default(), &mut rows).unwrap();
//! assert_eq!(info.scale, 59);
//! ```

mod error;
pub mod geometry;
pub mod raster;

pub use error::{EmitError, EmitResult};
pub use geometry::{
    GroupingMode, Layer, LayerStyle, MONO_LAYER, OutputDocument, build_documents, save_document,
    to_dxf,
};
pub use raster::{
    PreviewInfo, PreviewOptions, render_mask, render_preview, save_mask, save_preview,
};
