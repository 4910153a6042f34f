//! Grid-space geometry
//!
//! Boundary edges live on the integer lattice of pixel corners: pixel
//! `(x, y)` spans the corners `(x, y)` to `(x + 1, y + 1)`. Conversion to
//! physical document coordinates happens at emission time.

/// Pixel side, used both as a neighbor direction and as an edge label
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Side {
    /// Shared with `(x - 1, y)`
    Left,
    /// Shared with `(x + 1, y)`
    Right,
    /// Shared with `(x, y - 1)`
    Top,
    /// Shared with `(x, y + 1)`
    Bottom,
}

impl Side {
    /// All four sides in emission order.
    pub const ALL: [Side; 4] = [Side::Left, Side::Right, Side::Top, Side::Bottom];

    /// Neighbor offset `(dx, dy)` across this side.
    #[inline]
    pub const fn offset(self) -> (i64, i64) {
        match self {
            Side::Left => (-1, 0),
            Side::Right => (1, 0),
            Side::Top => (0, -1),
            Side::Bottom => (0, 1),
        }
    }

    /// Whether the edge on this side runs horizontally.
    #[inline]
    pub const fn is_horizontal(self) -> bool {
        matches!(self, Side::Top | Side::Bottom)
    }
}

/// A pixel-corner coordinate
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct GridPoint {
    pub x: u32,
    pub y: u32,
}

impl GridPoint {
    #[inline]
    pub const fn new(x: u32, y: u32) -> Self {
        Self { x, y }
    }
}

/// A directed unit segment between two adjacent pixel corners
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Segment {
    pub start: GridPoint,
    pub end: GridPoint,
}

impl Segment {
    /// The segment on `side` of pixel `(x, y)`.
    ///
    /// Vertical sides run top to bottom, horizontal sides left to right.
    pub const fn pixel_side(x: u32, y: u32, side: Side) -> Self {
        let (start, end) = match side {
            Side::Left => (GridPoint::new(x, y), GridPoint::new(x, y + 1)),
            Side::Right => (GridPoint::new(x + 1, y), GridPoint::new(x + 1, y + 1)),
            Side::Top => (GridPoint::new(x, y), GridPoint::new(x + 1, y)),
            Side::Bottom => (GridPoint::new(x, y + 1), GridPoint::new(x + 1, y + 1)),
        };
        Self { start, end }
    }

    /// Whether this segment runs along the x-axis.
    #[inline]
    pub fn is_horizontal(&self) -> bool {
        self.start.y == self.end.y
    }

    /// Endpoints ordered so that `start <= end`; lets callers compare
    /// segments without caring about direction.
    pub fn normalized(self) -> Self {
        if self.start <= self.end {
            self
        } else {
            Self {
                start: self.end,
                end: self.start,
            }
        }
    }

    /// Physical endpoints: `x * pixel_size` and `-y * pixel_size`.
    ///
    /// The y-axis is inverted so that image row 0 ends up with the highest
    /// coordinate and the result is right-handed.
    pub fn to_physical(&self, pixel_size: f64) -> ((f64, f64), (f64, f64)) {
        let map = |p: GridPoint| (f64::from(p.x) * pixel_size, -f64::from(p.y) * pixel_size);
        (map(self.start), map(self.end))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pixel_sides() {
        let top = Segment::pixel_side(2, 3, Side::Top);
        assert_eq!(top.start, GridPoint::new(2, 3));
        assert_eq!(top.end, GridPoint::new(3, 3));
        assert!(top.is_horizontal());

        let right = Segment::pixel_side(2, 3, Side::Right);
        assert_eq!(right.start, GridPoint::new(3, 3));
        assert_eq!(right.end, GridPoint::new(3, 4));
        assert!(!right.is_horizontal());
    }

    #[test]
    fn test_shared_side_is_same_segment() {
        // right side of (0,0) and left side of (1,0) coincide
        assert_eq!(
            Segment::pixel_side(0, 0, Side::Right),
            Segment::pixel_side(1, 0, Side::Left)
        );
        assert_eq!(
            Segment::pixel_side(4, 1, Side::Bottom),
            Segment::pixel_side(4, 2, Side::Top)
        );
    }

    #[test]
    fn test_to_physical_inverts_y() {
        let seg = Segment::pixel_side(1, 2, Side::Left);
        let ((x0, y0), (x1, y1)) = seg.to_physical(5.0);
        assert_eq!((x0, y0), (5.0, -10.0));
        assert_eq!((x1, y1), (5.0, -15.0));
    }

    #[test]
    fn test_normalized() {
        let seg = Segment {
            start: GridPoint::new(1, 1),
            end: GridPoint::new(0, 1),
        };
        let n = seg.normalized();
        assert_eq!(n.start, GridPoint::new(0, 1));
        assert_eq!(n.end, GridPoint::new(1, 1));
    }
}
