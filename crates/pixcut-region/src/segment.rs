//! Same-color region segmentation
//!
//! Labels a [`Grid`] into maximal 4-connected regions of identical
//! [`ColorKey`]. The fill uses an explicit stack and a dense label grid
//! owned by the call, so neither recursion depth nor any shared state grows
//! with region size.

use std::collections::BTreeMap;

use pixcut_core::{ColorKey, Grid};

/// Identifier of one region within a [`RegionMap`] (1-based)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct RegionId(u32);

impl RegionId {
    /// Raw label value as stored in the label grid.
    #[inline]
    pub fn get(self) -> u32 {
        self.0
    }
}

/// A maximal 4-connected set of same-key pixels
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Region {
    id: RegionId,
    key: ColorKey,
    pixels: Vec<(u32, u32)>,
}

impl Region {
    /// Region identifier
    #[inline]
    pub fn id(&self) -> RegionId {
        self.id
    }

    /// Color shared by every member pixel
    #[inline]
    pub fn key(&self) -> ColorKey {
        self.key
    }

    /// Member coordinates in fill order
    #[inline]
    pub fn pixels(&self) -> &[(u32, u32)] {
        &self.pixels
    }

    /// Number of member pixels
    #[inline]
    pub fn len(&self) -> usize {
        self.pixels.len()
    }

    /// Regions are never empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.pixels.is_empty()
    }

    /// Topmost-then-leftmost member, i.e. the seed the scan found first.
    pub fn anchor(&self) -> (u32, u32) {
        self.pixels
            .iter()
            .copied()
            .min_by_key(|&(x, y)| (y, x))
            .unwrap_or_default()
    }
}

/// Regions grouped by color key
///
/// Keys iterate in ascending order; regions of one key keep discovery order.
/// The map also keeps the per-pixel label grid so that region membership can
/// be tested in constant time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegionMap {
    width: u32,
    height: u32,
    /// Per-pixel region label, 0 for background
    labels: Vec<u32>,
    by_key: BTreeMap<ColorKey, Vec<Region>>,
    count: usize,
}

impl RegionMap {
    /// Grid width the map was computed for
    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Grid height the map was computed for
    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Whether no region was found (fully transparent input).
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.by_key.is_empty()
    }

    /// Total number of regions over all keys.
    #[inline]
    pub fn region_count(&self) -> usize {
        self.count
    }

    /// Total number of labeled pixels.
    pub fn pixel_count(&self) -> usize {
        self.regions().map(Region::len).sum()
    }

    /// Number of distinct color keys.
    #[inline]
    pub fn key_count(&self) -> usize {
        self.by_key.len()
    }

    /// Distinct keys, ascending.
    pub fn keys(&self) -> impl Iterator<Item = ColorKey> + '_ {
        self.by_key.keys().copied()
    }

    /// Regions of one key, in discovery order.
    pub fn get(&self, key: ColorKey) -> Option<&[Region]> {
        self.by_key.get(&key).map(Vec::as_slice)
    }

    /// `(key, regions)` pairs in ascending key order.
    pub fn iter(&self) -> impl Iterator<Item = (ColorKey, &[Region])> + '_ {
        self.by_key.iter().map(|(k, v)| (*k, v.as_slice()))
    }

    /// Every region, grouped by ascending key.
    pub fn regions(&self) -> impl Iterator<Item = &Region> + '_ {
        self.by_key.values().flatten()
    }

    /// Region label at `(x, y)`; `None` for background or out of bounds.
    pub fn region_at(&self, x: i64, y: i64) -> Option<RegionId> {
        if x < 0 || y < 0 || x >= i64::from(self.width) || y >= i64::from(self.height) {
            return None;
        }
        match self.labels[y as usize * self.width as usize + x as usize] {
            0 => None,
            label => Some(RegionId(label)),
        }
    }

    /// Whether `(x, y)` belongs to `region`.
    #[inline]
    pub fn contains(&self, region: RegionId, x: i64, y: i64) -> bool {
        self.region_at(x, y) == Some(region)
    }
}

/// Segment a grid into maximal 4-connected same-color regions.
///
/// Pixels are scanned in row-major order. Each unvisited, non-transparent
/// pixel seeds a fill that collects every 4-connected pixel with the same
/// key. Transparent pixels are never visited.
///
/// # Examples
///
/// ```
/// use pixcut_core::{Grid, Rgba};
/// use pixcut_region::segment_regions;
///
/// let red = Rgba::opaque(255, 0, 0);
/// let green = Rgba::opaque(0, 255, 0);
/// let grid = Grid::from_pixels(3, 1, vec![red, green, red]).unwrap();
///
/// let regions = segment_regions(&grid);
/// assert_eq!(regions.key_count(), 2);
/// assert_eq!(regions.region_count(), 3);
/// ```
pub fn segment_regions(grid: &Grid) -> RegionMap {
    let width = grid.width();
    let height = grid.height();
    let mut labels = vec![0u32; grid.len()];
    let mut by_key: BTreeMap<ColorKey, Vec<Region>> = BTreeMap::new();
    let mut next_label = 1u32;
    let mut stack: Vec<(i64, i64)> = Vec::new();

    for y in 0..height {
        for x in 0..width {
            if labels[y as usize * width as usize + x as usize] != 0 {
                continue;
            }
            let Some(key) = grid.key(x, y) else {
                continue;
            };

            let id = RegionId(next_label);
            let pixels = fill_region(grid, &mut labels, &mut stack, x, y, key, id);
            if pixels.is_empty() {
                continue;
            }
            next_label += 1;
            by_key.entry(key).or_default().push(Region { id, key, pixels });
        }
    }

    let count = (next_label - 1) as usize;
    log::debug!(
        "segmented {}x{} grid into {} regions over {} colors",
        width,
        height,
        count,
        by_key.len()
    );

    RegionMap {
        width,
        height,
        labels,
        by_key,
        count,
    }
}

/// Stack-based fill from one seed; `stack` is reused across calls.
fn fill_region(
    grid: &Grid,
    labels: &mut [u32],
    stack: &mut Vec<(i64, i64)>,
    seed_x: u32,
    seed_y: u32,
    key: ColorKey,
    id: RegionId,
) -> Vec<(u32, u32)> {
    let width = grid.width() as usize;
    let mut pixels = Vec::new();
    stack.clear();
    stack.push((i64::from(seed_x), i64::from(seed_y)));

    while let Some((cx, cy)) = stack.pop() {
        if !grid.contains(cx, cy) {
            continue;
        }
        let idx = cy as usize * width + cx as usize;
        if labels[idx] != 0 || grid.key_at(cx, cy) != Some(key) {
            continue;
        }

        labels[idx] = id.0;
        pixels.push((cx as u32, cy as u32));

        stack.push((cx + 1, cy));
        stack.push((cx - 1, cy));
        stack.push((cx, cy + 1));
        stack.push((cx, cy - 1));
    }

    pixels
}
