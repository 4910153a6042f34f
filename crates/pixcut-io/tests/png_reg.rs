//! PNG output regression test
//!
//! Run with:
//! ```
//! cargo test -p pixcut-io --test png_reg
//! ```

use std::fs::File;
use std::io::{BufReader, BufWriter};

use pixcut_core::Rgba;
use pixcut_io::{PngOptions, PngRowWriter, RowSink, read_grid, read_grid_mem, save_grid_png};
use pixcut_test::{RegParams, grid_from_rows};

#[test]
fn png_roundtrip_reg() {
    let mut rp = RegParams::new("png_roundtrip");

    let red = Rgba::opaque(255, 0, 0);
    let ghost = Rgba::new(0, 0, 255, 0);
    let glass = Rgba::new(0, 255, 0, 100);
    let grid = grid_from_rows(&["RgB", "B.R"], &[('R', red), ('g', glass), ('B', ghost)]).unwrap();

    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("grid.png");
    save_grid_png(&grid, &path).unwrap();

    // Pixels, including fully transparent colors, survive unchanged
    let back = read_grid(&path).unwrap();
    rp.compare_values(1.0, (back == grid) as u8 as f64, 0.0);

    let bytes = std::fs::read(&path).unwrap();
    let again = read_grid_mem(&bytes).unwrap();
    rp.compare_values(1.0, (again == grid) as u8 as f64, 0.0);

    assert!(rp.cleanup());
}

#[test]
fn png_stream_reg() {
    let mut rp = RegParams::new("png_stream");

    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("stream.png");
    let (w, h) = (16u32, 8u32);

    let file = File::create(&path).unwrap();
    let mut writer =
        PngRowWriter::new(BufWriter::new(file), w, h, &PngOptions::print(300)).unwrap();
    for y in 0..h {
        let row: Vec<u8> = (0..w)
            .flat_map(|x| [(x * 16) as u8, (y * 32) as u8, 0, 255])
            .collect();
        writer.write_row(&row).unwrap();
    }
    writer.finish().unwrap();

    let grid = read_grid(&path).unwrap();
    rp.compare_values(w as f64, grid.width() as f64, 0.0);
    rp.compare_values(h as f64, grid.height() as f64, 0.0);
    rp.compare_values(80.0, grid.get(5, 3).unwrap().r as f64, 0.0);
    rp.compare_values(96.0, grid.get(5, 3).unwrap().g as f64, 0.0);

    // Resolution and text metadata
    let decoder = png::Decoder::new(BufReader::new(File::open(&path).unwrap()));
    let reader = decoder.read_info().unwrap();
    let info = reader.info();
    let dims = info.pixel_dims.unwrap();
    rp.compare_values(11811.0, dims.xppu as f64, 0.0);
    rp.compare_values(11811.0, dims.yppu as f64, 0.0);
    let dpi = info
        .uncompressed_latin1_text
        .iter()
        .find(|t| t.keyword == "dpi")
        .map(|t| t.text.clone());
    rp.compare_strings("300", dpi.as_deref().unwrap_or(""));
    let resolution = info
        .utf8_text
        .iter()
        .find(|t| t.keyword == "Resolution")
        .and_then(|t| t.get_text().ok());
    rp.compare_strings("300 dpi", resolution.as_deref().unwrap_or(""));

    assert!(rp.cleanup());
}
