//! Color keys
//!
//! A [`ColorKey`] is the identity used to group pixels into regions and to
//! name output layers and files. It packs the RGB channels into the low 24
//! bits of a `u32`; alpha is never part of the key.

use std::fmt;
use std::str::FromStr;

use crate::error::Error;

/// Packed 24-bit RGB identity (`0x00RRGGBB`)
///
/// Ordering follows the packed integer, so sorting keys sorts by red, then
/// green, then blue. Output files and layers are emitted in this order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ColorKey(u32);

impl ColorKey {
    /// Create a key from RGB channels.
    #[inline]
    pub const fn from_rgb(r: u8, g: u8, b: u8) -> Self {
        Self(((r as u32) << 16) | ((g as u32) << 8) | (b as u32))
    }

    /// Create a key from a packed `0xRRGGBB` value; higher bits are dropped.
    #[inline]
    pub const fn from_packed(value: u32) -> Self {
        Self(value & 0x00ff_ffff)
    }

    /// The packed `0xRRGGBB` value.
    #[inline]
    pub const fn packed(self) -> u32 {
        self.0
    }

    /// Red channel
    #[inline]
    pub const fn red(self) -> u8 {
        (self.0 >> 16) as u8
    }

    /// Green channel
    #[inline]
    pub const fn green(self) -> u8 {
        (self.0 >> 8) as u8
    }

    /// Blue channel
    #[inline]
    pub const fn blue(self) -> u8 {
        self.0 as u8
    }

    /// Channels as an `(r, g, b)` tuple.
    #[inline]
    pub const fn rgb(self) -> (u8, u8, u8) {
        (self.red(), self.green(), self.blue())
    }

    /// Six uppercase hex digits, e.g. `FF0000`.
    pub fn hex(self) -> String {
        format!("{:06X}", self.0)
    }

    /// Layer name used by the per-color grouping modes, e.g. `#FF0000`.
    pub fn layer_name(self) -> String {
        format!("#{}", self.hex())
    }

    /// File stem used for per-color outputs, e.g. `HEX_FF0000`.
    pub fn file_stem(self) -> String {
        format!("HEX_{}", self.hex())
    }
}

impl fmt::Display for ColorKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:06X}", self.0)
    }
}

impl FromStr for ColorKey {
    type Err = Error;

    /// Parse `RRGGBB` or `#RRGGBB` (case-insensitive).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let digits = s.strip_prefix('#').unwrap_or(s);
        if digits.len() != 6 || !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(Error::InvalidParameter(format!("bad color key '{s}'")));
        }
        u32::from_str_radix(digits, 16)
            .map(Self::from_packed)
            .map_err(|_| Error::InvalidParameter(format!("bad color key '{s}'")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hex_forms() {
        let key = ColorKey::from_rgb(255, 0, 10);
        assert_eq!(key.hex(), "FF000A");
        assert_eq!(key.layer_name(), "#FF000A");
        assert_eq!(key.file_stem(), "HEX_FF000A");
        assert_eq!(key.to_string(), "#FF000A");
    }

    #[test]
    fn test_channels() {
        let key = ColorKey::from_rgb(1, 2, 3);
        assert_eq!(key.packed(), 0x010203);
        assert_eq!(key.rgb(), (1, 2, 3));
        assert_eq!(ColorKey::from_packed(0xff01_0203), key);
    }

    #[test]
    fn test_parse() {
        assert_eq!("#00ff00".parse::<ColorKey>().unwrap(), ColorKey::from_rgb(0, 255, 0));
        assert_eq!("0000FF".parse::<ColorKey>().unwrap(), ColorKey::from_rgb(0, 0, 255));
        assert!("12345".parse::<ColorKey>().is_err());
        assert!("GG0000".parse::<ColorKey>().is_err());
    }

    #[test]
    fn test_ordering_is_red_major() {
        let mut keys = vec![
            ColorKey::from_rgb(0, 255, 0),
            ColorKey::from_rgb(255, 0, 0),
            ColorKey::from_rgb(0, 0, 255),
        ];
        keys.sort();
        assert_eq!(keys[0].hex(), "0000FF");
        assert_eq!(keys[2].hex(), "FF0000");
    }
}
