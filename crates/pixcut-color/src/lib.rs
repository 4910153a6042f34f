//! pixcut Color - Reference palettes for layer styling
//!
//! - **Palettes** ([`palette`]): fixed color tables with nearest-entry lookup
//! - **ACI** ([`aci`]): the AutoCAD Color Index table used for DXF layer colors
//!
//! The lookup is pure: the same RGB input always selects the same entry, and
//! an exact match always wins.
//!
//! ```
//! use pixcut_color::nearest_aci;
//!
//! assert_eq!(nearest_aci(255, 0, 0), 1);
//! assert_eq!(nearest_aci(0, 0, 250), 5);
//! ```

pub mod aci;
pub mod palette;

// Re-export core types
pub use pixcut_core;

pub use aci::{ACI_COLORS, ACI_DEFAULT, ACI_FIRST, aci_palette, aci_rgb, nearest_aci};
pub use palette::{Palette, Rgb, nearest_index};
