//! Raster outputs
//!
//! - [`render_mask`]: a transparent image holding one color's pixels
//! - [`render_preview`]: the upscaled, print-ready preview with black
//!   borders around every region
//!
//! The preview is produced one output row at a time into a [`RowSink`],
//! so its memory use does not grow with the square of the scale factor.

use std::fs::File;
use std::io::BufWriter;
use std::path::Path;

use image::{Rgba as ImageRgba, RgbaImage};
use pixcut_core::{ColorKey, Grid, LengthUnit, Rgba};
use pixcut_io::{PngOptions, PngRowWriter, RowSink, save_rgba_png};
use pixcut_region::EdgeMap;

use crate::error::{EmitError, EmitResult};

/// Stroke color
const INK: [u8; 4] = Rgba::BLACK.to_array();

/// Background color
const PAPER: [u8; 4] = Rgba::WHITE.to_array();

/// Build the mask for one color key.
///
/// The mask has the grid's size. Pixels of `key` keep their RGBA, all
/// others are `(0, 0, 0, 0)`.
pub fn render_mask(grid: &Grid, key: ColorKey) -> RgbaImage {
    let mut mask = RgbaImage::new(grid.width(), grid.height());
    for (x, y, out) in mask.enumerate_pixels_mut() {
        if let Some(px) = grid.get(x, y) {
            if px.key() == Some(key) {
                *out = ImageRgba(px.to_array());
            }
        }
    }
    mask
}

/// Render and write the mask for one color key.
pub fn save_mask<P: AsRef<Path>>(grid: &Grid, key: ColorKey, path: P) -> EmitResult<()> {
    let mask = render_mask(grid, key);
    save_rgba_png(
        path,
        mask.width(),
        mask.height(),
        mask.as_raw(),
        &PngOptions::default(),
    )?;
    Ok(())
}

/// Options for [`render_preview`]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PreviewOptions {
    /// Physical size of one source pixel, in `unit`
    pub pixel_size: f64,
    pub unit: LengthUnit,
    /// Target print density
    pub dpi: u32,
    /// Stroke width in output pixels
    pub line_width: u32,
}

impl Default for PreviewOptions {
    fn default() -> Self {
        Self {
            pixel_size: 5.0,
            unit: LengthUnit::Millimeters,
            dpi: 300,
            line_width: 2,
        }
    }
}

impl PreviewOptions {
    pub fn with_pixel_size(mut self, pixel_size: f64) -> Self {
        self.pixel_size = pixel_size;
        self
    }

    pub fn with_unit(mut self, unit: LengthUnit) -> Self {
        self.unit = unit;
        self
    }

    pub fn with_dpi(mut self, dpi: u32) -> Self {
        self.dpi = dpi;
        self
    }

    pub fn with_line_width(mut self, line_width: u32) -> Self {
        self.line_width = line_width;
        self
    }

    /// Output pixels per source pixel, truncated toward zero.
    ///
    /// # Errors
    ///
    /// Returns [`EmitError::InvalidParameters`] for a non-positive pixel
    /// size, a zero DPI or line width, or a scale that truncates to 0.
    pub fn scale_factor(&self) -> EmitResult<u32> {
        if !(self.pixel_size.is_finite() && self.pixel_size > 0.0) {
            return Err(EmitError::InvalidParameters(format!(
                "pixel size must be positive, got {}",
                self.pixel_size
            )));
        }
        if self.dpi == 0 {
            return Err(EmitError::InvalidParameters(
                "dpi must be at least 1".to_string(),
            ));
        }
        if self.line_width == 0 {
            return Err(EmitError::InvalidParameters(
                "line width must be at least 1".to_string(),
            ));
        }

        let scale = (self.pixel_size * f64::from(self.dpi) / self.unit.inches_per_unit()).trunc();
        if scale < 1.0 || scale > f64::from(u32::MAX) {
            return Err(EmitError::InvalidParameters(format!(
                "{} {} at {} dpi gives a scale factor of {}",
                self.pixel_size,
                self.unit.short_name(),
                self.dpi,
                scale
            )));
        }
        Ok(scale as u32)
    }

    /// Output image size for a grid.
    pub fn output_size(&self, grid: &Grid) -> EmitResult<(u32, u32)> {
        let scale = self.scale_factor()?;
        let dims = grid
            .width()
            .checked_mul(scale)
            .zip(grid.height().checked_mul(scale));
        let (width, height) = dims.ok_or_else(|| {
            EmitError::InvalidParameters(format!(
                "{}x{} grid at scale {} is too large",
                grid.width(),
                grid.height(),
                scale
            ))
        })?;
        // RGBA row and total size must be addressable
        (width as usize)
            .checked_mul(4)
            .and_then(|row| row.checked_mul(height as usize))
            .ok_or_else(|| {
                EmitError::InvalidParameters(format!("{width}x{height} preview is too large"))
            })?;
        Ok((width, height))
    }
}

/// Summary of a rendered preview
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PreviewInfo {
    pub width: u32,
    pub height: u32,
    pub scale: u32,
}

/// Output-pixel range `[lo, hi)` of a stroke centered on line coordinate
/// `center`, clipped to `[0, limit)`.
fn stroke_span(center: u64, line_width: u32, limit: u64) -> (u64, u64) {
    let lo = center.saturating_sub(u64::from(line_width / 2));
    let hi = (center + u64::from(line_width)).saturating_sub(u64::from(line_width / 2));
    (lo.min(limit), hi.min(limit))
}

/// Fill `[lo, hi)` output columns of an RGBA row with ink.
fn ink_columns(row: &mut [u8], lo: u64, hi: u64) {
    for x in lo..hi {
        let i = x as usize * 4;
        row[i..i + 4].copy_from_slice(&INK);
    }
}

/// Render the upscaled preview into `sink`, top row first.
///
/// Each source pixel becomes a `scale x scale` white block. A black stroke
/// of `line_width` pixels is centered on every grid line where the
/// color-grid test finds a boundary, and each stroke runs from one grid
/// point to the next with both ends included.
pub fn render_preview<S: RowSink>(
    grid: &Grid,
    options: &PreviewOptions,
    sink: &mut S,
) -> EmitResult<PreviewInfo> {
    let scale = options.scale_factor()?;
    let (width, height) = options.output_size(grid)?;
    let edges = EdgeMap::from_grid(grid);
    log::debug!(
        "preview {}x{} (scale {}, {} boundary lines)",
        width,
        height,
        scale,
        edges.count()
    );

    let s = u64::from(scale);
    let lw = u64::from(options.line_width);
    let half = lw / 2;
    let (out_w, out_h) = (u64::from(width), u64::from(height));
    let mut row = vec![0u8; width as usize * 4];

    for oy in 0..out_h {
        for px in row.chunks_exact_mut(4) {
            px.copy_from_slice(&PAPER);
        }

        // Horizontal lines k with k*s - half <= oy < k*s - half + lw
        let first = (oy + half + 1).saturating_sub(lw).div_ceil(s);
        let last = ((oy + half) / s).min(u64::from(grid.height()));
        for line in first..=last {
            for x in 0..grid.width() {
                if edges.horizontal(line as u32, x) {
                    let lo = u64::from(x) * s;
                    let hi = (lo + s + 1).min(out_w);
                    ink_columns(&mut row, lo, hi);
                }
            }
        }

        // Vertical lines run along source rows; both endpoints are inclusive,
        // so a row on a grid line belongs to the pixel rows on either side.
        let y = oy / s;
        let on_line = oy % s == 0 && y > 0;
        for src_y in [Some(y), on_line.then(|| y - 1)].into_iter().flatten() {
            if src_y >= u64::from(grid.height()) {
                continue;
            }
            for line in 0..=grid.width() {
                if edges.vertical(src_y as u32, line) {
                    let (lo, hi) = stroke_span(u64::from(line) * s, options.line_width, out_w);
                    ink_columns(&mut row, lo, hi);
                }
            }
        }

        sink.write_row(&row)?;
    }

    Ok(PreviewInfo {
        width,
        height,
        scale,
    })
}

/// Render the preview straight into a print-ready PNG file.
///
/// The file carries the resolution from `options.dpi` as pHYs and text
/// metadata.
pub fn save_preview<P: AsRef<Path>>(
    grid: &Grid,
    options: &PreviewOptions,
    path: P,
) -> EmitResult<PreviewInfo> {
    let path = path.as_ref();
    let (width, height) = options.output_size(grid)?;
    let file = File::create(path).map_err(pixcut_io::IoError::from)?;
    let mut writer = PngRowWriter::new(
        BufWriter::new(file),
        width,
        height,
        &PngOptions::print(options.dpi),
    )?;
    let info = render_preview(grid, options, &mut writer)?;
    writer.finish()?;
    log::info!("wrote {} ({}x{})", path.display(), width, height);
    Ok(info)
}
