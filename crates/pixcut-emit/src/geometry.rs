//! Vector outline documents
//!
//! Regions and their boundary edges are grouped into [`OutputDocument`]
//! descriptors according to a [`GroupingMode`]. Each mode has its own
//! handler, but all of them return the same descriptor shape, and a single
//! writer ([`to_dxf`]) turns any descriptor into a DXF drawing.

use std::fmt;
use std::path::Path;
use std::str::FromStr;

use pixcut_color::{ACI_DEFAULT, nearest_aci};
use pixcut_core::{ColorKey, Grid, LengthUnit, Segment};
use pixcut_io::DxfDocument;
use pixcut_io::dxf::DEFPOINTS_LAYER;
use pixcut_region::{BoundaryPolicy, Region, RegionMap, extract_region_edges};

use crate::error::{EmitError, EmitResult};

/// Layer name used by [`GroupingMode::Mono`]
pub const MONO_LAYER: &str = "segments";

/// How regions map onto documents, layers and styles
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GroupingMode {
    /// One document, one layer, default style
    Mono,
    /// One document, one layer per color, default style
    Multi,
    /// One document, one layer per color, nearest-ACI style
    MultiColored,
    /// One document per color, each with one nearest-ACI styled layer
    Singles,
}

impl GroupingMode {
    /// Every mode, in output order.
    pub const ALL: [GroupingMode; 4] = [
        GroupingMode::Mono,
        GroupingMode::Multi,
        GroupingMode::MultiColored,
        GroupingMode::Singles,
    ];

    /// Modes that produce a single combined document.
    pub const COMBINED: [GroupingMode; 3] = [
        GroupingMode::Mono,
        GroupingMode::Multi,
        GroupingMode::MultiColored,
    ];

    /// Suffix used in file names (`<name>-<suffix>.dxf`).
    pub const fn suffix(self) -> &'static str {
        match self {
            GroupingMode::Mono => "mono",
            GroupingMode::Multi => "multi",
            GroupingMode::MultiColored => "multi_colored",
            GroupingMode::Singles => "singles",
        }
    }

    /// Whether layers are styled with the nearest palette color.
    pub const fn uses_color_styles(self) -> bool {
        matches!(self, GroupingMode::MultiColored | GroupingMode::Singles)
    }
}

impl fmt::Display for GroupingMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.suffix())
    }
}

impl FromStr for GroupingMode {
    type Err = EmitError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        GroupingMode::ALL
            .into_iter()
            .find(|m| m.suffix() == s)
            .ok_or_else(|| EmitError::InvalidParameters(format!("unknown grouping mode '{s}'")))
    }
}

/// Visual style of a layer: an ACI color index
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct LayerStyle {
    pub aci: u8,
}

impl LayerStyle {
    /// ACI 7, white on dark backgrounds and black on light ones
    pub const DEFAULT: LayerStyle = LayerStyle { aci: ACI_DEFAULT };

    /// Nearest reference-palette entry to a color key.
    pub fn nearest(key: ColorKey) -> Self {
        let (r, g, b) = key.rgb();
        Self {
            aci: nearest_aci(r, g, b),
        }
    }
}

impl Default for LayerStyle {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// A named, styled list of grid-space segments
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Layer {
    pub name: String,
    pub style: LayerStyle,
    pub segments: Vec<Segment>,
}

/// A document descriptor, ready to be written by any document writer
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputDocument {
    /// File stem, without extension
    pub name: String,
    pub layers: Vec<Layer>,
}

impl OutputDocument {
    /// Total number of segments over all layers.
    pub fn segment_count(&self) -> usize {
        self.layers.iter().map(|l| l.segments.len()).sum()
    }

    /// Find a layer by name.
    pub fn layer(&self, name: &str) -> Option<&Layer> {
        self.layers.iter().find(|l| l.name == name)
    }
}

/// Inputs shared by every grouping handler
struct Source<'a> {
    grid: &'a Grid,
    regions: &'a RegionMap,
    policy: BoundaryPolicy,
}

impl Source<'_> {
    fn edges_of(&self, list: &[Region]) -> Vec<Segment> {
        list.iter()
            .flat_map(|region| extract_region_edges(self.grid, self.regions, region, self.policy))
            .collect()
    }

    fn color_layer(&self, key: ColorKey, list: &[Region], mode: GroupingMode) -> Layer {
        Layer {
            name: key.layer_name(),
            style: if mode.uses_color_styles() {
                LayerStyle::nearest(key)
            } else {
                LayerStyle::DEFAULT
            },
            segments: self.edges_of(list),
        }
    }
}

/// Build the document descriptors for one grouping mode.
///
/// `name` is the output base name; combined documents are named
/// `<name>-<suffix>` and per-color documents `HEX_<RRGGBB>`. Layers and
/// documents follow ascending color key order.
///
/// # Examples
///
/// ```
/// use pixcut_core::{Grid, Rgba};
/// use pixcut_emit::{GroupingMode, build_documents};
/// use pixcut_region::{BoundaryPolicy, segment_regions};
///
/// let red = Rgba::opaque(255, 0, 0);
/// let green = Rgba::opaque(0, 255, 0);
/// let grid = Grid::from_pixels(2, 1, vec![red, green]).unwrap();
/// let regions = segment_regions(&grid);
///
/// let docs = build_documents(&grid, &regions, GroupingMode::Multi, BoundaryPolicy::default(), "art");
/// assert_eq!(docs.len(), 1);
/// assert_eq!(docs[0].name, "art-multi");
/// assert_eq!(docs[0].layers.len(), 2);
/// ```
pub fn build_documents(
    grid: &Grid,
    regions: &RegionMap,
    mode: GroupingMode,
    policy: BoundaryPolicy,
    name: &str,
) -> Vec<OutputDocument> {
    let source = Source {
        grid,
        regions,
        policy,
    };
    let docs = match mode {
        GroupingMode::Mono => vec![build_mono(&source, name)],
        GroupingMode::Multi | GroupingMode::MultiColored => {
            vec![build_per_color(&source, name, mode)]
        }
        GroupingMode::Singles => build_singles(&source),
    };
    log::debug!(
        "{} grouping: {} documents, {} segments",
        mode,
        docs.len(),
        docs.iter().map(OutputDocument::segment_count).sum::<usize>()
    );
    docs
}

fn build_mono(source: &Source<'_>, name: &str) -> OutputDocument {
    let mut layers = Vec::new();
    if !source.regions.is_empty() {
        let segments = source
            .regions
            .iter()
            .flat_map(|(_, list)| source.edges_of(list))
            .collect();
        layers.push(Layer {
            name: MONO_LAYER.to_string(),
            style: LayerStyle::DEFAULT,
            segments,
        });
    }
    OutputDocument {
        name: format!("{}-{}", name, GroupingMode::Mono.suffix()),
        layers,
    }
}

fn build_per_color(source: &Source<'_>, name: &str, mode: GroupingMode) -> OutputDocument {
    OutputDocument {
        name: format!("{}-{}", name, mode.suffix()),
        layers: source
            .regions
            .iter()
            .map(|(key, list)| source.color_layer(key, list, mode))
            .collect(),
    }
}

fn build_singles(source: &Source<'_>) -> Vec<OutputDocument> {
    source
        .regions
        .iter()
        .map(|(key, list)| OutputDocument {
            name: key.file_stem(),
            layers: vec![source.color_layer(key, list, GroupingMode::Singles)],
        })
        .collect()
}

/// Convert a descriptor into a DXF drawing.
///
/// The `Defpoints` layer every new drawing starts with is removed before
/// anything is added.
/// Segment endpoints are scaled by `pixel_size` with the y-axis inverted;
/// `unit` only sets the `$INSUNITS` header.
pub fn to_dxf(doc: &OutputDocument, pixel_size: f64, unit: LengthUnit) -> EmitResult<DxfDocument> {
    if !(pixel_size.is_finite() && pixel_size > 0.0) {
        return Err(EmitError::InvalidParameters(format!(
            "pixel size must be positive, got {pixel_size}"
        )));
    }

    let mut dxf = DxfDocument::new(unit.insunits());
    dxf.remove_layer(DEFPOINTS_LAYER);

    for layer in &doc.layers {
        dxf.add_layer(layer.name.as_str(), i16::from(layer.style.aci))?;
        for segment in &layer.segments {
            let (start, end) = segment.to_physical(pixel_size);
            dxf.add_line(&layer.name, start, end)?;
        }
    }
    Ok(dxf)
}

/// Convert a descriptor and write it to `path`.
pub fn save_document<P: AsRef<Path>>(
    doc: &OutputDocument,
    path: P,
    pixel_size: f64,
    unit: LengthUnit,
) -> EmitResult<()> {
    to_dxf(doc, pixel_size, unit)?.save(path)?;
    Ok(())
}
