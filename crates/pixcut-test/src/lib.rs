//! pixcut-test - Regression test framework for pixcut
//!
//! Provides [`RegParams`], which collects comparison results so that a
//! regression test can run every check before reporting, plus fixtures:
//!
//! - [`grid_from_rows`]: build a [`Grid`] from character art and a legend
//! - [`scratch_dir`]: a fresh per-test output directory
//! - [`write_grid_png`]: save a fixture grid as an input image
//!
//! # Usage
//!
//! ```ignore
//! use pixcut_test::{RegParams, grid_from_rows};
//!
//! let grid = grid_from_rows(&["RG"], &[('R', red), ('G', green)]).unwrap();
//! let mut rp = RegParams::new("segment");
//! rp.compare_values(2.0, count as f64, 0.0);
//! assert!(rp.cleanup());
//! ```
//!
//! # Environment Variables
//!
//! - `REGTEST_MODE`: set to "display" to keep artifacts under `tests/regout`

mod error;
mod params;

pub use error::{TestError, TestResult};
pub use params::{RegParams, RegTestMode};

use pixcut_core::{Grid, Rgba};
use std::fs;
use std::path::{Path, PathBuf};

/// Legend character that always means a transparent pixel
pub const TRANSPARENT_CHAR: char = '.';

/// Build a grid from rows of characters.
///
/// Each character is looked up in `legend`; [`TRANSPARENT_CHAR`] is
/// transparent unless the legend maps it. All rows must have the same
/// length.
pub fn grid_from_rows(rows: &[&str], legend: &[(char, Rgba)]) -> TestResult<Grid> {
    let width = rows.first().map_or(0, |r| r.chars().count());
    let mut pixels = Vec::with_capacity(width * rows.len());

    for (y, row) in rows.iter().enumerate() {
        if row.chars().count() != width {
            return Err(TestError::Fixture(format!(
                "row {} has {} columns, expected {}",
                y,
                row.chars().count(),
                width
            )));
        }
        for c in row.chars() {
            let px = match legend.iter().find(|(k, _)| *k == c) {
                Some(&(_, px)) => px,
                None if c == TRANSPARENT_CHAR => Rgba::TRANSPARENT,
                None => {
                    return Err(TestError::Fixture(format!(
                        "character '{c}' in row {y} is not in the legend"
                    )));
                }
            };
            pixels.push(px);
        }
    }

    Grid::from_pixels(width as u32, rows.len() as u32, pixels)
        .map_err(|e| TestError::Fixture(e.to_string()))
}

/// Save a grid as an RGBA PNG, e.g. as pipeline input.
pub fn write_grid_png<P: AsRef<Path>>(grid: &Grid, path: P) -> TestResult<()> {
    let path = path.as_ref();
    pixcut_io::save_grid_png(grid, path).map_err(|e| TestError::ImageWrite {
        path: path.display().to_string(),
        message: e.to_string(),
    })
}

/// Get the path to the workspace root
fn workspace_root() -> String {
    let manifest_dir = env!("CARGO_MANIFEST_DIR");
    // pixcut-test is at crates/pixcut-test, so go up two directories
    format!("{}/../..", manifest_dir)
}

/// Get the path to the regout (regression output) directory
pub fn regout_dir() -> String {
    format!("{}/tests/regout", workspace_root())
}

/// Create an empty directory `tests/regout/<name>`, removing any previous
/// contents.
pub fn scratch_dir(name: &str) -> TestResult<PathBuf> {
    let dir = PathBuf::from(regout_dir()).join(name);
    if dir.exists() {
        fs::remove_dir_all(&dir)?;
    }
    fs::create_dir_all(&dir).map_err(|e| TestError::DirectoryCreate {
        path: dir.display().to_string(),
        message: e.to_string(),
    })?;
    Ok(dir)
}
