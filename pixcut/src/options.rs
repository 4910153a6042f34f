//! Conversion options

use crate::error::{ConvertError, ConvertResult};
use pixcut_core::LengthUnit;
use pixcut_emit::PreviewOptions;
use pixcut_region::BoundaryPolicy;

/// Default physical size of one pixel
pub const DEFAULT_PIXEL_SIZE: f64 = 5.0;

/// Default preview stroke width, in output pixels
pub const DEFAULT_LINE_WIDTH: u32 = 2;

/// Default preview density
pub const DEFAULT_DPI: u32 = 300;

/// Every tunable of a conversion run
#[derive(Debug, Clone, PartialEq)]
pub struct ConvertOptions {
    /// Physical size of one pixel, in `unit`
    pub pixel_size: f64,
    pub unit: LengthUnit,
    /// Preview stroke width in output pixels
    pub line_width: u32,
    /// Preview density
    pub dpi: u32,
    /// Boundary test used for vector geometry
    pub policy: BoundaryPolicy,
    /// Output base name; the input file stem when `None`
    pub output_name: Option<String>,
}

impl Default for ConvertOptions {
    fn default() -> Self {
        Self {
            pixel_size: DEFAULT_PIXEL_SIZE,
            unit: LengthUnit::default(),
            line_width: DEFAULT_LINE_WIDTH,
            dpi: DEFAULT_DPI,
            policy: BoundaryPolicy::default(),
            output_name: None,
        }
    }
}

impl ConvertOptions {
    /// Set the pixel size
    pub fn with_pixel_size(mut self, pixel_size: f64) -> Self {
        self.pixel_size = pixel_size;
        self
    }

    /// Set the length unit
    pub fn with_unit(mut self, unit: LengthUnit) -> Self {
        self.unit = unit;
        self
    }

    /// Set the preview stroke width
    pub fn with_line_width(mut self, line_width: u32) -> Self {
        self.line_width = line_width;
        self
    }

    /// Set the preview density
    pub fn with_dpi(mut self, dpi: u32) -> Self {
        self.dpi = dpi;
        self
    }

    /// Set the boundary policy
    pub fn with_policy(mut self, policy: BoundaryPolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Set the output base name
    pub fn with_output_name(mut self, name: impl Into<String>) -> Self {
        self.output_name = Some(name.into());
        self
    }

    /// Preview settings derived from these options.
    pub fn preview(&self) -> PreviewOptions {
        PreviewOptions::default()
            .with_pixel_size(self.pixel_size)
            .with_unit(self.unit)
            .with_dpi(self.dpi)
            .with_line_width(self.line_width)
    }

    /// Check every option before any output is written.
    ///
    /// # Errors
    ///
    /// Returns [`ConvertError::InvalidOptions`] for a non-positive pixel
    /// size, a zero line width or DPI, a preview scale of 0, or an output
    /// name that is empty or contains a path separator.
    pub fn validate(&self) -> ConvertResult<()> {
        self.preview()
            .scale_factor()
            .map_err(|e| ConvertError::InvalidOptions(e.to_string()))?;

        if let Some(name) = &self.output_name {
            if name.is_empty() || name.contains(['/', '\\']) {
                return Err(ConvertError::InvalidOptions(format!(
                    "invalid output name {name:?}"
                )));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let opts = ConvertOptions::default();
        assert_eq!(opts.pixel_size, 5.0);
        assert_eq!(opts.unit, LengthUnit::Millimeters);
        assert_eq!(opts.line_width, 2);
        assert_eq!(opts.dpi, 300);
        assert_eq!(opts.policy, BoundaryPolicy::ColorGrid);
        assert!(opts.validate().is_ok());
        assert_eq!(opts.preview().scale_factor().unwrap(), 59);
    }

    #[test]
    fn test_validate_rejects() {
        let opts = ConvertOptions::default();
        for bad in [
            opts.clone().with_pixel_size(0.0),
            opts.clone().with_pixel_size(-3.0),
            opts.clone().with_line_width(0),
            opts.clone().with_dpi(0),
            opts.clone().with_pixel_size(0.001),
            opts.clone().with_output_name(""),
            opts.clone().with_output_name("a/b"),
        ] {
            assert!(matches!(
                bad.validate(),
                Err(ConvertError::InvalidOptions(_))
            ));
        }
    }
}
