//! End-to-end conversion regression test
//!
//! Run with:
//! ```
//! cargo test -p pixcut --test convert_reg
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use pixcut::emit::GroupingMode;
use pixcut::{ColorKey, ConvertError, ConvertOptions, LengthUnit, OutputLayout, Rgba, convert};
use pixcut_test::{RegParams, grid_from_rows, write_grid_png};

const R: Rgba = Rgba::opaque(255, 0, 0);
const G: Rgba = Rgba::opaque(0, 255, 0);
const B: Rgba = Rgba::opaque(0, 0, 255);

fn write_input(dir: &Path, name: &str, rows: &[&str]) -> PathBuf {
    let grid = grid_from_rows(rows, &[('R', R), ('G', G), ('B', B)]).unwrap();
    let path = dir.join(name);
    write_grid_png(&grid, &path).unwrap();
    path
}

/// Every file under `root`, relative and sorted
fn tree(root: &Path) -> Vec<String> {
    fn walk(dir: &Path, root: &Path, out: &mut Vec<String>) {
        for entry in fs::read_dir(dir).unwrap() {
            let path = entry.unwrap().path();
            if path.is_dir() {
                walk(&path, root, out);
            } else {
                let rel = path.strip_prefix(root).unwrap();
                out.push(rel.to_string_lossy().replace('\\', "/"));
            }
        }
    }
    let mut out = Vec::new();
    walk(root, root, &mut out);
    out.sort();
    out
}

#[test]
fn convert_reg() {
    let mut rp = RegParams::new("convert");
    let tmp = tempfile::tempdir().unwrap();
    let input = write_input(tmp.path(), "flag.png", &["RGB", "RRB"]);

    let summary = convert(&input, &ConvertOptions::default()).unwrap();
    rp.compare_values(3.0, summary.color_count as f64, 0.0);
    rp.compare_values(3.0, summary.region_count as f64, 0.0);
    rp.compare_values(6.0, summary.documents.len() as f64, 0.0);
    rp.compare_values(3.0, summary.masks.len() as f64, 0.0);
    rp.compare_values(59.0, summary.preview.scale as f64, 0.0);

    let root = tmp.path().join("flag_output");
    rp.compare_values(1.0, (summary.layout.root() == root) as u8 as f64, 0.0);
    let expected = [
        "DXF/Singles/HEX_0000FF.dxf",
        "DXF/Singles/HEX_00FF00.dxf",
        "DXF/Singles/HEX_FF0000.dxf",
        "DXF/flag-mono.dxf",
        "DXF/flag-multi.dxf",
        "DXF/flag-multi_colored.dxf",
        "PNG/Single-Color/HEX_0000FF.png",
        "PNG/Single-Color/HEX_00FF00.png",
        "PNG/Single-Color/HEX_FF0000.png",
        "PNG/flag_print.png",
    ];
    rp.compare_strings(&expected.join("\n"), &tree(&root).join("\n"));

    // Layer names and styles in the colored drawing
    let colored = fs::read_to_string(summary.layout.combined_dxf(GroupingMode::MultiColored)).unwrap();
    rp.compare_values(1.0, colored.contains("  2\n#FF0000\n 70\n0\n 62\n1\n") as u8 as f64, 0.0);
    rp.compare_values(1.0, colored.contains("  2\n#0000FF\n 70\n0\n 62\n5\n") as u8 as f64, 0.0);
    rp.compare_values(0.0, colored.contains("Defpoints") as u8 as f64, 0.0);
    rp.compare_values(1.0, colored.contains("$INSUNITS\n 70\n4\n") as u8 as f64, 0.0);

    // Singles are styled by nearest palette color too
    let single = fs::read_to_string(summary.layout.single_dxf(ColorKey::from_rgb(0, 255, 0))).unwrap();
    rp.compare_values(1.0, single.contains(" 62\n3\n") as u8 as f64, 0.0);

    assert!(rp.cleanup());
}

#[test]
fn convert_idempotent_reg() {
    let mut rp = RegParams::new("convert_idempotent");
    let tmp = tempfile::tempdir().unwrap();
    let input = write_input(tmp.path(), "tile.png", &["RG.", "GGB"]);
    let options = ConvertOptions::default()
        .with_pixel_size(0.1)
        .with_unit(LengthUnit::Inches)
        .with_output_name("badge");

    let first = convert(&input, &options).unwrap();
    let root = first.layout.root().to_path_buf();
    let files = tree(&root);
    let snapshot: Vec<Vec<u8>> = files.iter().map(|f| fs::read(root.join(f)).unwrap()).collect();

    // A stale file from an earlier run disappears on the next one
    fs::write(root.join("DXF/stale.dxf"), b"old").unwrap();

    let second = convert(&input, &options).unwrap();
    rp.compare_strings(&files.join("\n"), &tree(&root).join("\n"));
    for (name, before) in files.iter().zip(&snapshot) {
        rp.compare_bytes(before, &fs::read(root.join(name)).unwrap());
    }
    rp.compare_values(1.0, (first == second) as u8 as f64, 0.0);
    rp.compare_values(30.0, second.preview.scale as f64, 0.0);

    assert!(rp.cleanup());
}

#[test]
fn convert_transparent_reg() {
    let mut rp = RegParams::new("convert_transparent");
    let tmp = tempfile::tempdir().unwrap();
    let input = write_input(tmp.path(), "blank.png", &["."]);

    let summary = convert(&input, &ConvertOptions::default()).unwrap();
    rp.compare_values(0.0, summary.region_count as f64, 0.0);
    rp.compare_values(0.0, summary.masks.len() as f64, 0.0);
    // Only the three combined drawings are written
    rp.compare_values(3.0, summary.documents.len() as f64, 0.0);

    let mono = fs::read_to_string(summary.layout.combined_dxf(GroupingMode::Mono)).unwrap();
    rp.compare_values(0.0, mono.matches("\nLINE\n").count() as f64, 0.0);
    rp.compare_values(0.0, mono.contains("segments") as u8 as f64, 0.0);
    rp.compare_values(1.0, summary.layout.preview_png().is_file() as u8 as f64, 0.0);

    assert!(rp.cleanup());
}

#[test]
fn convert_errors_reg() {
    let mut rp = RegParams::new("convert_errors");
    let tmp = tempfile::tempdir().unwrap();

    // Missing input: nothing is created
    let missing = tmp.path().join("nope.png");
    let err = convert(&missing, &ConvertOptions::default()).unwrap_err();
    rp.compare_values(1.0, matches!(err, ConvertError::InputNotFound(_)) as u8 as f64, 0.0);
    rp.compare_values(0.0, fs::read_dir(tmp.path()).unwrap().count() as f64, 0.0);

    // Undecodable input: the previous output folder is left alone
    let input = tmp.path().join("junk.png");
    fs::write(&input, b"this is not an image").unwrap();
    let layout = OutputLayout::new(&input, "junk");
    layout.prepare().unwrap();
    let err = convert(&input, &ConvertOptions::default()).unwrap_err();
    rp.compare_values(1.0, matches!(err, ConvertError::Io(_)) as u8 as f64, 0.0);
    rp.compare_values(1.0, layout.singles_dir().is_dir() as u8 as f64, 0.0);

    // Out-of-range options are rejected before decoding
    let err = convert(&input, &ConvertOptions::default().with_dpi(0)).unwrap_err();
    rp.compare_values(1.0, matches!(err, ConvertError::InvalidOptions(_)) as u8 as f64, 0.0);

    assert!(rp.cleanup());
}
