//! Reference palettes and nearest-color lookup

use pixcut_core::ColorKey;

/// An RGB triple
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    #[inline]
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Squared Euclidean distance over R, G and B.
    #[inline]
    pub fn distance_sq(self, other: Rgb) -> u32 {
        let dr = self.r as i32 - other.r as i32;
        let dg = self.g as i32 - other.g as i32;
        let db = self.b as i32 - other.b as i32;
        (dr * dr + dg * dg + db * db) as u32
    }
}

impl From<ColorKey> for Rgb {
    fn from(key: ColorKey) -> Self {
        let (r, g, b) = key.rgb();
        Self::new(r, g, b)
    }
}

impl From<(u8, u8, u8)> for Rgb {
    fn from((r, g, b): (u8, u8, u8)) -> Self {
        Self::new(r, g, b)
    }
}

/// A fixed, ordered table of reference colors
///
/// Entries are addressed by `first_index + position`, so a palette whose
/// natural numbering starts at 1 (like ACI) can be indexed directly.
#[derive(Debug, Clone, Copy)]
pub struct Palette<'a> {
    colors: &'a [Rgb],
    first_index: usize,
}

impl<'a> Palette<'a> {
    pub const fn new(colors: &'a [Rgb], first_index: usize) -> Self {
        Self {
            colors,
            first_index,
        }
    }

    /// Number of entries
    #[inline]
    pub fn len(&self) -> usize {
        self.colors.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }

    /// Entry at a palette index.
    pub fn get(&self, index: usize) -> Option<Rgb> {
        index
            .checked_sub(self.first_index)
            .and_then(|i| self.colors.get(i).copied())
    }

    /// `(index, color)` pairs in palette order.
    pub fn iter(&self) -> impl Iterator<Item = (usize, Rgb)> + '_ {
        self.colors
            .iter()
            .enumerate()
            .map(move |(i, c)| (i + self.first_index, *c))
    }

    /// Index of the entry nearest to `target`.
    ///
    /// Uses squared Euclidean distance; the first minimal entry in palette
    /// order wins. An empty palette returns `first_index`.
    pub fn nearest(&self, target: Rgb) -> usize {
        nearest_index(self.colors, target) + self.first_index
    }
}

/// Position of the entry in `colors` nearest to `target`.
///
/// Ties resolve to the earliest position. Returns 0 for an empty slice.
pub fn nearest_index(colors: &[Rgb], target: Rgb) -> usize {
    let mut best_index = 0;
    let mut min_dist = u32::MAX;

    for (i, c) in colors.iter().enumerate() {
        let dist = c.distance_sq(target);
        if dist < min_dist {
            min_dist = dist;
            best_index = i;
            if dist == 0 {
                break;
            }
        }
    }

    best_index
}

#[cfg(test)]
mod tests {
    use super::*;

    const TABLE: [Rgb; 4] = [
        Rgb::new(0, 0, 0),
        Rgb::new(255, 255, 255),
        Rgb::new(10, 10, 10),
        Rgb::new(10, 10, 10),
    ];

    #[test]
    fn test_distance() {
        assert_eq!(Rgb::new(1, 2, 3).distance_sq(Rgb::new(4, 6, 3)), 25);
    }

    #[test]
    fn test_nearest_ties_first_wins() {
        assert_eq!(nearest_index(&TABLE, Rgb::new(10, 10, 10)), 2);
        // equidistant from 0 and 10: the black entry comes first
        assert_eq!(nearest_index(&TABLE, Rgb::new(5, 5, 5)), 0);
    }

    #[test]
    fn test_palette_offset() {
        let pal = Palette::new(&TABLE, 1);
        assert_eq!(pal.get(0), None);
        assert_eq!(pal.get(2), Some(Rgb::new(255, 255, 255)));
        assert_eq!(pal.nearest(Rgb::new(250, 250, 250)), 2);
        assert_eq!(pal.iter().next(), Some((1, Rgb::new(0, 0, 0))));
    }

    #[test]
    fn test_from_color_key() {
        let rgb: Rgb = ColorKey::from_rgb(1, 2, 3).into();
        assert_eq!(rgb, Rgb::new(1, 2, 3));
    }
}
