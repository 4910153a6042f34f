//! pixcut Core - Basic data structures for image-to-outline conversion
//!
//! This crate provides the fundamental types shared by every pixcut crate:
//!
//! - [`Grid`] / [`Rgba`] - The decoded, immutable input image
//! - [`ColorKey`] - Packed RGB identity used to group pixels
//! - [`GridPoint`] / [`Segment`] / [`Side`] - Pixel-corner geometry
//! - [`LengthUnit`] - Document unit metadata

pub mod error;
pub mod geom;
pub mod grid;
pub mod key;
pub mod unit;

pub use error::{Error, Result};
pub use geom::{GridPoint, Segment, Side};
pub use grid::{Grid, Rgba};
pub use key::ColorKey;
pub use unit::LengthUnit;
