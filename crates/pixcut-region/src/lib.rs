//! pixcut-region - Region processing for pixcut
//!
//! This crate provides the segmentation engine:
//!
//! - **Region segmentation** - Maximal 4-connected same-color regions
//! - **Boundary extraction** - Unit edges between a region and everything else
//! - **Edge maps** - Dense boundary-line lookup for raster rendering
//!
//! # Examples
//!
//! ## Segmenting a grid
//!
//! ```
//! use pixcut_core::{Grid, Rgba};
//! use pixcut_region::segment_regions;
//!
//! let red = Rgba::opaque(255, 0, 0);
//! let green = Rgba::opaque(0, 255, 0);
//! let grid = Grid::from_pixels(2, 1, vec![red, green]).unwrap();
//!
//! let regions = segment_regions(&grid);
//! assert_eq!(regions.region_count(), 2);
//! ```
//!
//! ## Extracting boundaries
//!
//! ```
//! use pixcut_core::{Grid, Rgba};
//! use pixcut_region::{BoundaryPolicy, extract_all_edges, segment_regions};
//!
//! let red = Rgba::opaque(255, 0, 0);
//! let green = Rgba::opaque(0, 255, 0);
//! let grid = Grid::from_pixels(2, 1, vec![red, green]).unwrap();
//! let regions = segment_regions(&grid);
//!
//! // The shared side is counted once per region.
//! let edges = extract_all_edges(&grid, &regions, BoundaryPolicy::default());
//! assert_eq!(edges.len(), 8);
//! ```

pub mod boundary;
pub mod segment;

// Re-export core types
pub use pixcut_core;

pub use boundary::{BoundaryPolicy, EdgeMap, extract_all_edges, extract_region_edges, needs_border};
pub use segment::{Region, RegionId, RegionMap, segment_regions};
