//! Length units
//!
//! The unit is advisory metadata for the consuming CAD tool: it selects the
//! `$INSUNITS` header code and the inches-per-unit factor used to scale the
//! print preview. Vector coordinates are never rescaled by it.

use std::fmt;
use std::str::FromStr;

use crate::error::Error;

/// Physical length unit of one document coordinate
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum LengthUnit {
    #[default]
    Millimeters,
    Inches,
}

impl LengthUnit {
    /// DXF `$INSUNITS` code.
    pub const fn insunits(self) -> i16 {
        match self {
            LengthUnit::Millimeters => 4,
            LengthUnit::Inches => 1,
        }
    }

    /// Units per inch; divides `pixel_size * dpi` when scaling the preview.
    pub const fn inches_per_unit(self) -> f64 {
        match self {
            LengthUnit::Millimeters => 25.4,
            LengthUnit::Inches => 1.0,
        }
    }

    /// Short name as accepted on the command line.
    pub const fn short_name(self) -> &'static str {
        match self {
            LengthUnit::Millimeters => "mm",
            LengthUnit::Inches => "inch",
        }
    }
}

impl fmt::Display for LengthUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.short_name())
    }
}

impl FromStr for LengthUnit {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "mm" | "millimeter" | "millimeters" => Ok(LengthUnit::Millimeters),
            "in" | "inch" | "inches" => Ok(LengthUnit::Inches),
            _ => Err(Error::InvalidParameter(format!("unknown unit '{s}'"))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unit_codes() {
        assert_eq!(LengthUnit::Millimeters.insunits(), 4);
        assert_eq!(LengthUnit::Inches.insunits(), 1);
        assert_eq!(LengthUnit::default(), LengthUnit::Millimeters);
    }

    #[test]
    fn test_parse() {
        assert_eq!("mm".parse::<LengthUnit>().unwrap(), LengthUnit::Millimeters);
        assert_eq!("INCH".parse::<LengthUnit>().unwrap(), LengthUnit::Inches);
        assert!("cm".parse::<LengthUnit>().is_err());
    }
}
