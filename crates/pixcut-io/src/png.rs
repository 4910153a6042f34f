//! PNG output
//!
//! All pixcut rasters are 8-bit RGBA. Two entry points are provided:
//!
//! - [`write_rgba_png`] encodes a complete in-memory buffer.
//! - [`PngRowWriter`] streams rows to the encoder one at a time, so that
//!   very large previews never need a full frame buffer.
//!
//! Both honor [`PngOptions`], which carries the physical resolution (pHYs)
//! and any textual metadata chunks.

use crate::{IoError, IoResult};
use png::{BitDepth, ColorType, Encoder, PixelDimensions, StreamWriter, Unit};
use std::io::Write;

/// Bytes per RGBA pixel
pub const RGBA_BYTES: usize = 4;

/// Meters per inch, for pHYs conversion
const METERS_PER_INCH: f64 = 0.0254;

/// Metadata written alongside the pixel data
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PngOptions {
    /// Physical resolution in dots per inch, written as a pHYs chunk
    pub dpi: Option<u32>,
    /// Uncompressed Latin-1 text chunks (tEXt)
    pub text: Vec<(String, String)>,
    /// International text chunks (iTXt)
    pub itxt: Vec<(String, String)>,
}

impl PngOptions {
    /// Options for a print-ready image: pHYs plus the `dpi` and
    /// `Resolution` text entries print tools look for.
    pub fn print(dpi: u32) -> Self {
        Self::default()
            .with_dpi(dpi)
            .with_text("dpi", dpi.to_string())
            .with_itxt("Resolution", format!("{dpi} dpi"))
    }

    /// Set the physical resolution
    pub fn with_dpi(mut self, dpi: u32) -> Self {
        self.dpi = Some(dpi);
        self
    }

    /// Add a tEXt chunk
    pub fn with_text(mut self, keyword: impl Into<String>, text: impl Into<String>) -> Self {
        self.text.push((keyword.into(), text.into()));
        self
    }

    /// Add an iTXt chunk
    pub fn with_itxt(mut self, keyword: impl Into<String>, text: impl Into<String>) -> Self {
        self.itxt.push((keyword.into(), text.into()));
        self
    }
}

/// Convert dots per inch to the pixels-per-meter value stored in pHYs.
pub fn dpi_to_ppm(dpi: u32) -> u32 {
    (f64::from(dpi) / METERS_PER_INCH).round() as u32
}

fn rgba_encoder<'a, W: Write + 'a>(
    writer: W,
    width: u32,
    height: u32,
    options: &PngOptions,
) -> IoResult<Encoder<'a, W>> {
    if width == 0 || height == 0 {
        return Err(IoError::InvalidData(format!(
            "cannot encode a {width}x{height} PNG"
        )));
    }

    let mut encoder = Encoder::new(writer, width, height);
    encoder.set_color(ColorType::Rgba);
    encoder.set_depth(BitDepth::Eight);

    if let Some(dpi) = options.dpi {
        let ppm = dpi_to_ppm(dpi);
        encoder.set_pixel_dims(Some(PixelDimensions {
            xppu: ppm,
            yppu: ppm,
            unit: Unit::Meter,
        }));
    }
    for (keyword, text) in &options.text {
        encoder
            .add_text_chunk(keyword.clone(), text.clone())
            .map_err(|e| IoError::EncodeError(format!("PNG tEXt error: {}", e)))?;
    }
    for (keyword, text) in &options.itxt {
        encoder
            .add_itxt_chunk(keyword.clone(), text.clone())
            .map_err(|e| IoError::EncodeError(format!("PNG iTXt error: {}", e)))?;
    }

    Ok(encoder)
}

/// Write a complete RGBA buffer as PNG.
///
/// `data` must hold exactly `width * height * 4` bytes in row-major order.
pub fn write_rgba_png<W: Write>(
    width: u32,
    height: u32,
    data: &[u8],
    writer: W,
    options: &PngOptions,
) -> IoResult<()> {
    let expected = width as usize * height as usize * RGBA_BYTES;
    if data.len() != expected {
        return Err(IoError::InvalidData(format!(
            "RGBA buffer holds {} bytes, expected {}",
            data.len(),
            expected
        )));
    }

    let mut writer = rgba_encoder(writer, width, height, options)?
        .write_header()
        .map_err(|e| IoError::EncodeError(format!("PNG header error: {}", e)))?;
    writer
        .write_image_data(data)
        .map_err(|e| IoError::EncodeError(format!("PNG write error: {}", e)))?;
    writer
        .finish()
        .map_err(|e| IoError::EncodeError(format!("PNG finish error: {}", e)))?;
    Ok(())
}

/// Destination for rendered raster rows
///
/// Renderers produce one full RGBA row at a time, top to bottom.
pub trait RowSink {
    /// Accept the next row of `width * 4` bytes.
    fn write_row(&mut self, row: &[u8]) -> IoResult<()>;
}

/// Collects rows back to back, e.g. for inspection in tests.
impl RowSink for Vec<u8> {
    fn write_row(&mut self, row: &[u8]) -> IoResult<()> {
        self.extend_from_slice(row);
        Ok(())
    }
}

/// Streaming RGBA PNG encoder
///
/// Exactly `height` rows must be written before [`PngRowWriter::finish`].
/// The stream owns its destination, so `W` must not borrow.
pub struct PngRowWriter<W: Write + 'static> {
    stream: StreamWriter<'static, W>,
    row_bytes: usize,
    rows_left: u32,
}

impl<W: Write + 'static> PngRowWriter<W> {
    /// Write the PNG header and prepare to accept rows.
    pub fn new(writer: W, width: u32, height: u32, options: &PngOptions) -> IoResult<Self> {
        let stream = rgba_encoder(writer, width, height, options)?
            .write_header()
            .map_err(|e| IoError::EncodeError(format!("PNG header error: {}", e)))?
            .into_stream_writer()
            .map_err(|e| IoError::EncodeError(format!("PNG stream error: {}", e)))?;
        Ok(Self {
            stream,
            row_bytes: width as usize * RGBA_BYTES,
            rows_left: height,
        })
    }

    /// Rows still expected
    pub fn rows_left(&self) -> u32 {
        self.rows_left
    }

    /// Flush the final chunk; fails if rows are missing.
    pub fn finish(self) -> IoResult<()> {
        if self.rows_left != 0 {
            return Err(IoError::InvalidData(format!(
                "PNG stream finished with {} rows missing",
                self.rows_left
            )));
        }
        self.stream
            .finish()
            .map_err(|e| IoError::EncodeError(format!("PNG finish error: {}", e)))
    }
}

impl<W: Write + 'static> RowSink for PngRowWriter<W> {
    fn write_row(&mut self, row: &[u8]) -> IoResult<()> {
        if row.len() != self.row_bytes {
            return Err(IoError::InvalidData(format!(
                "row holds {} bytes, expected {}",
                row.len(),
                self.row_bytes
            )));
        }
        if self.rows_left == 0 {
            return Err(IoError::InvalidData("too many rows for PNG".to_string()));
        }
        self.stream.write_all(row)?;
        self.rows_left -= 1;
        Ok(())
    }
}
