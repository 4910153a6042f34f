//! Input image decoding
//!
//! Any raster format the `image` crate can decode is accepted. The format
//! is guessed from the file contents rather than the extension. Every
//! decoded image is normalized to 8-bit RGBA, so images without an alpha
//! channel come out fully opaque.

use crate::{IoError, IoResult};
use image::{DynamicImage, ImageReader};
use pixcut_core::Grid;
use std::io::Cursor;
use std::path::Path;

/// Read an image file into a [`Grid`].
///
/// # Errors
///
/// Returns [`IoError::Io`] if the file cannot be opened and
/// [`IoError::DecodeError`] if its contents are not a supported image.
pub fn read_grid<P: AsRef<Path>>(path: P) -> IoResult<Grid> {
    let path = path.as_ref();
    let image = ImageReader::open(path)?
        .with_guessed_format()?
        .decode()
        .map_err(|e| IoError::DecodeError(format!("{}: {}", path.display(), e)))?;
    log::debug!(
        "decoded {} ({}x{}, {:?})",
        path.display(),
        image.width(),
        image.height(),
        image.color()
    );
    grid_from_image(&image)
}

/// Decode an in-memory image into a [`Grid`].
pub fn read_grid_mem(data: &[u8]) -> IoResult<Grid> {
    let image = ImageReader::new(Cursor::new(data))
        .with_guessed_format()?
        .decode()
        .map_err(|e| IoError::DecodeError(e.to_string()))?;
    grid_from_image(&image)
}

/// Convert a decoded image into a [`Grid`].
pub fn grid_from_image(image: &DynamicImage) -> IoResult<Grid> {
    let rgba = image.to_rgba8();
    let (width, height) = rgba.dimensions();
    Ok(Grid::from_rgba_bytes(width, height, rgba.as_raw())?)
}
