//! Region boundary extraction
//!
//! For every member pixel of a region, each of its four sides is tested
//! against the neighbor across that side. A failing side becomes one unit
//! [`Segment`]. Colinear edges are never merged and no edge is
//! de-duplicated: downstream tools expect unit segments.
//!
//! Two tests are available through [`BoundaryPolicy`]. For genuinely
//! 4-connected regions they agree; they differ only in what they consult.

use pixcut_core::{Grid, Segment, Side};

use crate::segment::{Region, RegionMap};

/// Which neighbor test decides that a pixel side is a boundary
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum BoundaryPolicy {
    /// Neighbor is outside the grid, transparent, or a different color.
    #[default]
    ColorGrid,
    /// Neighbor is not a member of the same region instance.
    RegionMembership,
}

/// Color-grid test for one side of pixel `(x, y)`.
///
/// Returns `true` when the neighbor across `side` is outside the grid, is
/// transparent, or carries a different color key than `(x, y)`.
pub fn needs_border(grid: &Grid, x: u32, y: u32, side: Side) -> bool {
    let (dx, dy) = side.offset();
    let here = grid.key(x, y);
    let there = grid.key_at(i64::from(x) + dx, i64::from(y) + dy);
    there.is_none() || there != here
}

/// Boundary edges of `region` in grid space.
///
/// Sides are tested in [`Side::ALL`] order for each member pixel, in fill
/// order. The result therefore contains exactly one segment per member side
/// that borders a non-member.
///
/// # Examples
///
/// ```
/// use pixcut_core::{Grid, Rgba};
/// use pixcut_region::{BoundaryPolicy, extract_region_edges, segment_regions};
///
/// let grid = Grid::filled(3, 3, Rgba::opaque(9, 9, 9)).unwrap();
/// let regions = segment_regions(&grid);
/// let region = regions.regions().next().unwrap();
///
/// let edges = extract_region_edges(&grid, &regions, region, BoundaryPolicy::ColorGrid);
/// assert_eq!(edges.len(), 12);
/// ```
pub fn extract_region_edges(
    grid: &Grid,
    regions: &RegionMap,
    region: &Region,
    policy: BoundaryPolicy,
) -> Vec<Segment> {
    let mut edges = Vec::new();
    for &(x, y) in region.pixels() {
        for side in Side::ALL {
            let is_edge = match policy {
                BoundaryPolicy::ColorGrid => needs_border(grid, x, y, side),
                BoundaryPolicy::RegionMembership => {
                    let (dx, dy) = side.offset();
                    !regions.contains(region.id(), i64::from(x) + dx, i64::from(y) + dy)
                }
            };
            if is_edge {
                edges.push(Segment::pixel_side(x, y, side));
            }
        }
    }
    edges
}

/// Boundary edges of every region of every color, in key order.
pub fn extract_all_edges(grid: &Grid, regions: &RegionMap, policy: BoundaryPolicy) -> Vec<Segment> {
    regions
        .regions()
        .flat_map(|region| extract_region_edges(grid, regions, region, policy))
        .collect()
}

/// Dense map of boundary grid lines
///
/// Horizontal line `k` (0..=height) separates rows `k - 1` and `k`; vertical
/// line `k` (0..=width) separates columns `k - 1` and `k`. An entry is set
/// when any opaque pixel next to it fails the color-grid test on that side.
/// Two regions sharing a side set the same entry once, so the map records
/// where ink goes rather than how many segments touch it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EdgeMap {
    width: u32,
    height: u32,
    /// `(height + 1) * width` entries, row-major by line
    horizontal: Vec<bool>,
    /// `height * (width + 1)` entries, row-major by pixel row
    vertical: Vec<bool>,
}

impl EdgeMap {
    /// Build the map from the color-grid test over every opaque pixel.
    pub fn from_grid(grid: &Grid) -> Self {
        let width = grid.width();
        let height = grid.height();
        let w = width as usize;
        let mut horizontal = vec![false; (height as usize + 1) * w];
        let mut vertical = vec![false; height as usize * (w + 1)];

        for y in 0..height {
            for x in 0..width {
                if grid.key(x, y).is_none() {
                    continue;
                }
                let (xu, yu) = (x as usize, y as usize);
                for side in Side::ALL {
                    if !needs_border(grid, x, y, side) {
                        continue;
                    }
                    match side {
                        Side::Top => horizontal[yu * w + xu] = true,
                        Side::Bottom => horizontal[(yu + 1) * w + xu] = true,
                        Side::Left => vertical[yu * (w + 1) + xu] = true,
                        Side::Right => vertical[yu * (w + 1) + xu + 1] = true,
                    }
                }
            }
        }

        Self {
            width,
            height,
            horizontal,
            vertical,
        }
    }

    /// Grid width
    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Grid height
    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Whether horizontal line `line` has a boundary above/below column `x`.
    #[inline]
    pub fn horizontal(&self, line: u32, x: u32) -> bool {
        line <= self.height
            && x < self.width
            && self.horizontal[line as usize * self.width as usize + x as usize]
    }

    /// Whether vertical line `line` has a boundary beside row `y`.
    #[inline]
    pub fn vertical(&self, y: u32, line: u32) -> bool {
        y < self.height
            && line <= self.width
            && self.vertical[y as usize * (self.width as usize + 1) + line as usize]
    }

    /// Number of set entries.
    pub fn count(&self) -> usize {
        self.horizontal.iter().chain(&self.vertical).filter(|&&b| b).count()
    }
}
