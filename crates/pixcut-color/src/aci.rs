//! AutoCAD Color Index (ACI) palette
//!
//! Index 0 (ByBlock) and 256 (ByLayer) are not real colors and are not part
//! of the table. The remaining entries follow the standard layout:
//!
//! - 1..=9: the fixed basic colors
//! - 10..=249: 24 hues in 15 degree steps, ten shades per hue
//! - 250..=255: a gray ramp

use crate::palette::{Palette, Rgb};

/// First usable ACI index
pub const ACI_FIRST: u8 = 1;

/// ACI index used when no per-color styling is requested (white/black)
pub const ACI_DEFAULT: u8 = 7;

const BASIC: [Rgb; 9] = [
    Rgb::new(255, 0, 0),
    Rgb::new(255, 255, 0),
    Rgb::new(0, 255, 0),
    Rgb::new(0, 255, 255),
    Rgb::new(0, 0, 255),
    Rgb::new(255, 0, 255),
    Rgb::new(255, 255, 255),
    Rgb::new(128, 128, 128),
    Rgb::new(192, 192, 192),
];

/// Fully saturated hue wheel, starting at red
const HUES: [Rgb; 24] = [
    Rgb::new(255, 0, 0),
    Rgb::new(255, 63, 0),
    Rgb::new(255, 127, 0),
    Rgb::new(255, 191, 0),
    Rgb::new(255, 255, 0),
    Rgb::new(191, 255, 0),
    Rgb::new(127, 255, 0),
    Rgb::new(63, 255, 0),
    Rgb::new(0, 255, 0),
    Rgb::new(0, 255, 63),
    Rgb::new(0, 255, 127),
    Rgb::new(0, 255, 191),
    Rgb::new(0, 255, 255),
    Rgb::new(0, 191, 255),
    Rgb::new(0, 127, 255),
    Rgb::new(0, 63, 255),
    Rgb::new(0, 0, 255),
    Rgb::new(63, 0, 255),
    Rgb::new(127, 0, 255),
    Rgb::new(191, 0, 255),
    Rgb::new(255, 0, 255),
    Rgb::new(255, 0, 191),
    Rgb::new(255, 0, 127),
    Rgb::new(255, 0, 63),
];

/// Brightness of the five shade pairs within one hue
const LEVELS: [u32; 5] = [255, 165, 127, 76, 38];

const GRAYS: [u8; 6] = [51, 91, 132, 173, 214, 255];

/// `round(c * level / 255)`
const fn shade(c: u8, level: u32) -> u8 {
    ((c as u32 * level * 2 + 255) / 510) as u8
}

/// Halfway between the shade and the level, which halves saturation.
const fn tint(c: u8, level: u32) -> u8 {
    ((shade(c, level) as u32 + level) / 2) as u8
}

const fn build_table() -> [Rgb; 255] {
    let mut table = [Rgb::new(0, 0, 0); 255];
    let mut i = 0;
    while i < BASIC.len() {
        table[i] = BASIC[i];
        i += 1;
    }

    let mut hue = 0;
    while hue < HUES.len() {
        let base = HUES[hue];
        let mut level = 0;
        while level < LEVELS.len() {
            let v = LEVELS[level];
            // ACI 10 + 10*hue + 2*level, offset by one for the 1-based table
            let idx = 9 + hue * 10 + level * 2;
            table[idx] = Rgb::new(shade(base.r, v), shade(base.g, v), shade(base.b, v));
            table[idx + 1] = Rgb::new(tint(base.r, v), tint(base.g, v), tint(base.b, v));
            level += 1;
        }
        hue += 1;
    }

    let mut gray = 0;
    while gray < GRAYS.len() {
        let g = GRAYS[gray];
        table[249 + gray] = Rgb::new(g, g, g);
        gray += 1;
    }
    table
}

/// ACI colors 1..=255; entry `i` is ACI index `i + 1`.
pub static ACI_COLORS: [Rgb; 255] = build_table();

/// The ACI reference palette.
pub fn aci_palette() -> Palette<'static> {
    Palette::new(&ACI_COLORS, ACI_FIRST as usize)
}

/// RGB value of an ACI index, or `None` for 0.
pub fn aci_rgb(index: u8) -> Option<Rgb> {
    aci_palette().get(index as usize)
}

/// Nearest ACI index to an RGB value.
///
/// Ties resolve to the lowest index.
pub fn nearest_aci(r: u8, g: u8, b: u8) -> u8 {
    // the palette holds 255 entries starting at 1, so the index fits in u8
    aci_palette().nearest(Rgb::new(r, g, b)) as u8
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_basic_colors() {
        assert_eq!(aci_rgb(1), Some(Rgb::new(255, 0, 0)));
        assert_eq!(aci_rgb(5), Some(Rgb::new(0, 0, 255)));
        assert_eq!(aci_rgb(7), Some(Rgb::new(255, 255, 255)));
        assert_eq!(aci_rgb(0), None);
    }

    #[test]
    fn test_hue_shades() {
        assert_eq!(aci_rgb(10), Some(Rgb::new(255, 0, 0)));
        assert_eq!(aci_rgb(11), Some(Rgb::new(255, 127, 127)));
        assert_eq!(aci_rgb(12), Some(Rgb::new(165, 0, 0)));
        assert_eq!(aci_rgb(21), Some(Rgb::new(255, 159, 127)));
        assert_eq!(aci_rgb(23), Some(Rgb::new(165, 103, 82)));
        assert_eq!(aci_rgb(29), Some(Rgb::new(38, 23, 19)));
        assert_eq!(aci_rgb(249), Some(Rgb::new(38, 19, 23)));
    }

    #[test]
    fn test_grays() {
        assert_eq!(aci_rgb(250), Some(Rgb::new(51, 51, 51)));
        assert_eq!(aci_rgb(255), Some(Rgb::new(255, 255, 255)));
    }

    #[test]
    fn test_nearest_exact_match_prefers_first() {
        // pure red is both ACI 1 and ACI 10
        assert_eq!(nearest_aci(255, 0, 0), 1);
        // white is both ACI 7 and ACI 255
        assert_eq!(nearest_aci(255, 255, 255), 7);
        assert_eq!(nearest_aci(0, 0, 255), 5);
    }

    #[test]
    fn test_nearest_close_color() {
        assert_eq!(nearest_aci(250, 5, 5), 1);
        assert_eq!(nearest_aci(129, 127, 128), 8);
    }
}
