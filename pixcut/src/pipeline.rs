//! Conversion pipeline
//!
//! load → segment → emit DXF documents → masks → preview. Each stage runs
//! to completion before the next one starts.

use std::path::{Path, PathBuf};

use pixcut_core::Grid;
use pixcut_emit::{GroupingMode, PreviewInfo, build_documents, save_document, save_mask, save_preview};
use pixcut_io::read_grid;
use pixcut_region::{RegionMap, segment_regions};

use crate::error::{ConvertError, ConvertResult};
use crate::layout::OutputLayout;
use crate::options::ConvertOptions;

/// What a conversion run produced
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConvertSummary {
    pub layout: OutputLayout,
    /// Input size in pixels
    pub width: u32,
    pub height: u32,
    pub region_count: usize,
    pub color_count: usize,
    /// Every DXF file written, in write order
    pub documents: Vec<PathBuf>,
    /// Every mask written, in color key order
    pub masks: Vec<PathBuf>,
    pub preview: PreviewInfo,
}

/// Output base name: the configured name, or the input file stem.
fn output_name(input: &Path, options: &ConvertOptions) -> ConvertResult<String> {
    if let Some(name) = &options.output_name {
        return Ok(name.clone());
    }
    input
        .file_stem()
        .and_then(|s| s.to_str())
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .ok_or_else(|| {
            ConvertError::InvalidOptions(format!(
                "cannot derive an output name from {}",
                input.display()
            ))
        })
}

/// Convert one image, writing every output under its output folder.
///
/// The input is checked and decoded and the options are validated before
/// anything on disk is touched. An existing output folder is then replaced.
pub fn convert(input: &Path, options: &ConvertOptions) -> ConvertResult<ConvertSummary> {
    if !input.exists() {
        return Err(ConvertError::InputNotFound(input.to_path_buf()));
    }
    options.validate()?;
    let name = output_name(input, options)?;

    let grid = read_grid(input)?;
    let regions = segment_regions(&grid);
    log::info!(
        "{}: {}x{} pixels, {} colors, {} regions",
        input.display(),
        grid.width(),
        grid.height(),
        regions.key_count(),
        regions.region_count()
    );

    let layout = OutputLayout::new(input, &name);
    layout.prepare().map_err(pixcut_io::IoError::from)?;

    let documents = write_documents(&grid, &regions, &layout, options)?;
    let masks = write_masks(&grid, &regions, &layout)?;
    let preview = save_preview(&grid, &options.preview(), layout.preview_png())?;

    Ok(ConvertSummary {
        width: grid.width(),
        height: grid.height(),
        region_count: regions.region_count(),
        color_count: regions.key_count(),
        layout,
        documents,
        masks,
        preview,
    })
}

fn write_documents(
    grid: &Grid,
    regions: &RegionMap,
    layout: &OutputLayout,
    options: &ConvertOptions,
) -> ConvertResult<Vec<PathBuf>> {
    let mut written = Vec::new();
    for mode in GroupingMode::ALL {
        for doc in build_documents(grid, regions, mode, options.policy, layout.name()) {
            let path = layout.document_path(mode, &doc.name);
            save_document(&doc, &path, options.pixel_size, options.unit)?;
            written.push(path);
        }
    }
    Ok(written)
}

fn write_masks(
    grid: &Grid,
    regions: &RegionMap,
    layout: &OutputLayout,
) -> ConvertResult<Vec<PathBuf>> {
    let mut written = Vec::new();
    for key in regions.keys() {
        let path = layout.mask_png(key);
        save_mask(grid, key, &path)?;
        written.push(path);
    }
    Ok(written)
}
