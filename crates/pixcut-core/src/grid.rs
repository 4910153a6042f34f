//! Grid - the decoded input image
//!
//! A `Grid` is a rectangular, row-major array of [`Rgba`] pixels. It is
//! built once from the input file and never modified afterwards; every
//! later stage borrows it immutably.
//!
//! # Transparency
//!
//! Alpha 0 marks background. Background pixels have no [`ColorKey`], are
//! never assigned to a region and never count as "same color" when a
//! neighbor is tested. Any other alpha value is treated as opaque for
//! segmentation purposes.

use crate::error::{Error, Result};
use crate::key::ColorKey;

/// An 8-bit RGBA pixel
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Rgba {
    /// Fully transparent black
    pub const TRANSPARENT: Rgba = Rgba::new(0, 0, 0, 0);
    /// Opaque white
    pub const WHITE: Rgba = Rgba::opaque(255, 255, 255);
    /// Opaque black
    pub const BLACK: Rgba = Rgba::opaque(0, 0, 0);

    /// Create a pixel from all four channels.
    #[inline]
    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Create an opaque pixel (alpha = 255).
    #[inline]
    pub const fn opaque(r: u8, g: u8, b: u8) -> Self {
        Self::new(r, g, b, 255)
    }

    /// Whether this pixel is background.
    #[inline]
    pub fn is_transparent(self) -> bool {
        self.a == 0
    }

    /// The color key of this pixel, or `None` for background.
    #[inline]
    pub fn key(self) -> Option<ColorKey> {
        if self.is_transparent() {
            None
        } else {
            Some(ColorKey::from_rgb(self.r, self.g, self.b))
        }
    }

    /// Channels as an array, in RGBA order.
    #[inline]
    pub const fn to_array(self) -> [u8; 4] {
        [self.r, self.g, self.b, self.a]
    }
}

impl From<[u8; 4]> for Rgba {
    fn from([r, g, b, a]: [u8; 4]) -> Self {
        Self::new(r, g, b, a)
    }
}

impl From<[u8; 3]> for Rgba {
    fn from([r, g, b]: [u8; 3]) -> Self {
        Self::opaque(r, g, b)
    }
}

/// Immutable 2D pixel grid
///
/// # Examples
///
/// ```
/// use pixcut_core::{Grid, Rgba};
///
/// let grid = Grid::filled(3, 2, Rgba::opaque(255, 0, 0)).unwrap();
/// assert_eq!(grid.width(), 3);
/// assert_eq!(grid.height(), 2);
/// assert!(grid.key(2, 1).is_some());
/// assert!(grid.key(3, 0).is_none());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    width: u32,
    height: u32,
    pixels: Vec<Rgba>,
}

impl Grid {
    /// Create a grid from row-major pixel data.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidDimension`] if either dimension is 0 and
    /// [`Error::DataLength`] if `pixels.len() != width * height`.
    pub fn from_pixels(width: u32, height: u32, pixels: Vec<Rgba>) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(Error::InvalidDimension { width, height });
        }
        let expected = width as usize * height as usize;
        if pixels.len() != expected {
            return Err(Error::DataLength {
                expected,
                actual: pixels.len(),
            });
        }
        Ok(Self {
            width,
            height,
            pixels,
        })
    }

    /// Create a grid from packed RGBA bytes (4 bytes per pixel).
    pub fn from_rgba_bytes(width: u32, height: u32, bytes: &[u8]) -> Result<Self> {
        if bytes.len() % 4 != 0 {
            return Err(Error::DataLength {
                expected: width as usize * height as usize * 4,
                actual: bytes.len(),
            });
        }
        let pixels = bytes
            .chunks_exact(4)
            .map(|c| Rgba::new(c[0], c[1], c[2], c[3]))
            .collect();
        Self::from_pixels(width, height, pixels)
    }

    /// Create a grid where every pixel has the same value.
    pub fn filled(width: u32, height: u32, pixel: Rgba) -> Result<Self> {
        let len = width as usize * height as usize;
        Self::from_pixels(width, height, vec![pixel; len])
    }

    /// Width in pixels
    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Height in pixels
    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Total number of pixels
    #[inline]
    pub fn len(&self) -> usize {
        self.pixels.len()
    }

    /// A grid always holds at least one pixel.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.pixels.is_empty()
    }

    /// Whether `(x, y)` lies inside the grid; accepts signed coordinates
    /// so neighbor offsets can be tested directly.
    #[inline]
    pub fn contains(&self, x: i64, y: i64) -> bool {
        x >= 0 && y >= 0 && x < i64::from(self.width) && y < i64::from(self.height)
    }

    #[inline]
    fn index(&self, x: u32, y: u32) -> usize {
        y as usize * self.width as usize + x as usize
    }

    /// Get a pixel, or `None` if out of bounds.
    #[inline]
    pub fn get(&self, x: u32, y: u32) -> Option<Rgba> {
        if x < self.width && y < self.height {
            Some(self.pixels[self.index(x, y)])
        } else {
            None
        }
    }

    /// Color key at `(x, y)`; `None` for background or out of bounds.
    #[inline]
    pub fn key(&self, x: u32, y: u32) -> Option<ColorKey> {
        self.get(x, y).and_then(Rgba::key)
    }

    /// Color key at a signed coordinate; `None` outside the grid.
    #[inline]
    pub fn key_at(&self, x: i64, y: i64) -> Option<ColorKey> {
        if self.contains(x, y) {
            self.key(x as u32, y as u32)
        } else {
            None
        }
    }

    /// All pixels in row-major order.
    #[inline]
    pub fn pixels(&self) -> &[Rgba] {
        &self.pixels
    }

    /// Distinct color keys present in the grid, ascending.
    pub fn distinct_keys(&self) -> Vec<ColorKey> {
        let mut keys: Vec<ColorKey> = self.pixels.iter().filter_map(|p| p.key()).collect();
        keys.sort_unstable();
        keys.dedup();
        keys
    }

    /// Number of non-background pixels.
    pub fn opaque_count(&self) -> usize {
        self.pixels.iter().filter(|p| !p.is_transparent()).count()
    }
}
