//! pixcut command-line interface

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use pixcut::region::BoundaryPolicy;
use pixcut::{ConvertError, ConvertOptions, LengthUnit, convert};

/// Convert an image to DXF files with pixel-based outlines
#[derive(Parser, Debug, Clone)]
#[command(version, about, long_about = None)]
struct Cli {
    /// Input image file path
    #[arg(short, long, value_hint = clap::ValueHint::FilePath)]
    input: PathBuf,

    /// Output name (default: input file name without extension)
    #[arg(short, long)]
    output: Option<String>,

    /// Pixel size in DXF units
    #[arg(short, long, default_value_t = pixcut::DEFAULT_PIXEL_SIZE)]
    size: f64,

    /// Unit type for DXF
    #[arg(short, long, value_enum, default_value_t = UnitArg::Mm)]
    unit: UnitArg,

    /// Line width for the printable PNG file, in pixels
    #[arg(short, long, default_value_t = pixcut::DEFAULT_LINE_WIDTH)]
    linewidth: u32,

    /// Print density of the printable PNG file
    #[arg(long, default_value_t = pixcut::DEFAULT_DPI)]
    dpi: u32,

    /// Boundary test used for DXF geometry
    #[arg(long, value_enum, default_value_t = PolicyArg::ColorGrid)]
    policy: PolicyArg,
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
enum UnitArg {
    Mm,
    Inch,
}

impl From<UnitArg> for LengthUnit {
    fn from(arg: UnitArg) -> Self {
        match arg {
            UnitArg::Mm => LengthUnit::Millimeters,
            UnitArg::Inch => LengthUnit::Inches,
        }
    }
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
enum PolicyArg {
    /// Border wherever the neighboring pixel has another color
    ColorGrid,
    /// Border wherever the neighboring pixel belongs to another region
    RegionMembership,
}

impl From<PolicyArg> for BoundaryPolicy {
    fn from(arg: PolicyArg) -> Self {
        match arg {
            PolicyArg::ColorGrid => BoundaryPolicy::ColorGrid,
            PolicyArg::RegionMembership => BoundaryPolicy::RegionMembership,
        }
    }
}

impl Cli {
    fn options(&self) -> ConvertOptions {
        let options = ConvertOptions::default()
            .with_pixel_size(self.size)
            .with_unit(self.unit.into())
            .with_line_width(self.linewidth)
            .with_dpi(self.dpi)
            .with_policy(self.policy.into());
        match &self.output {
            Some(name) => options.with_output_name(name),
            None => options,
        }
    }
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();
    let options = cli.options();

    let summary = match convert(&cli.input, &options) {
        Err(ConvertError::InputNotFound(path)) => {
            anyhow::bail!("the file {} does not exist", path.display())
        }
        other => other.with_context(|| format!("failed to convert {}", cli.input.display()))?,
    };

    println!("Input file: {}", cli.input.display());
    println!("Pixel size: {}", options.pixel_size);
    println!("Unit: {}", options.unit.short_name());
    println!("Line width: {}px", options.line_width);
    println!(
        "Wrote {} DXF files, {} masks and a {}x{} preview",
        summary.documents.len(),
        summary.masks.len(),
        summary.preview.width,
        summary.preview.height
    );
    println!("Output folder: {}", summary.layout.root().display());
    Ok(())
}
