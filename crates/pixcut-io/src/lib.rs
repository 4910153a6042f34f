//! pixcut-io - File formats for pixcut
//!
//! - [`decode`]: any raster image the `image` crate understands → [`Grid`]
//! - [`png`]: RGBA PNG output with resolution metadata, buffered or streamed
//! - [`dxf`]: ASCII DXF output for layered outline geometry
//!
//! Every fallible function returns [`IoResult`].

pub mod decode;
pub mod dxf;
mod error;
pub mod png;

pub use decode::{grid_from_image, read_grid, read_grid_mem};
pub use dxf::{DxfDocument, DxfLayer, DxfLine};
pub use error::{IoError, IoResult};
pub use self::png::{PngOptions, PngRowWriter, RowSink, dpi_to_ppm, write_rgba_png};

use pixcut_core::Grid;
use std::fs::File;
use std::io::BufWriter;
use std::path::Path;

/// Write an RGBA buffer to a PNG file, replacing any existing file.
pub fn save_rgba_png<P: AsRef<Path>>(
    path: P,
    width: u32,
    height: u32,
    data: &[u8],
    options: &PngOptions,
) -> IoResult<()> {
    let path = path.as_ref();
    let file = File::create(path)?;
    write_rgba_png(width, height, data, BufWriter::new(file), options)?;
    log::info!("wrote {} ({}x{})", path.display(), width, height);
    Ok(())
}

/// Write a grid verbatim as an RGBA PNG.
pub fn save_grid_png<P: AsRef<Path>>(grid: &Grid, path: P) -> IoResult<()> {
    let data: Vec<u8> = grid.pixels().iter().flat_map(|p| p.to_array()).collect();
    save_rgba_png(
        path,
        grid.width(),
        grid.height(),
        &data,
        &PngOptions::default(),
    )
}
