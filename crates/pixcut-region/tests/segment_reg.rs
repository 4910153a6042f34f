//! Region segmentation regression test
//!
//! Run with:
//! ```
//! cargo test -p pixcut-region --test segment_reg
//! ```

use std::collections::HashSet;

use pixcut_core::{Grid, Rgba, Side};
use pixcut_region::{BoundaryPolicy, extract_all_edges, extract_region_edges, segment_regions};
use pixcut_test::{RegParams, grid_from_rows};

const R: Rgba = Rgba::opaque(255, 0, 0);
const G: Rgba = Rgba::opaque(0, 255, 0);
const B: Rgba = Rgba::opaque(0, 0, 255);

fn legend() -> Vec<(char, Rgba)> {
    vec![('R', R), ('G', G), ('B', B)]
}

/// Count pixel sides whose neighbor is outside the grid, transparent, or
/// of another color.
fn brute_force_edges(grid: &Grid) -> usize {
    let mut count = 0;
    for y in 0..grid.height() {
        for x in 0..grid.width() {
            let Some(key) = grid.key(x, y) else {
                continue;
            };
            for side in Side::ALL {
                let (dx, dy) = side.offset();
                if grid.key_at(x as i64 + dx, y as i64 + dy) != Some(key) {
                    count += 1;
                }
            }
        }
    }
    count
}

#[test]
fn segment_reg() {
    let mut rp = RegParams::new("segment");

    // 2x1 red/green: two single-pixel regions with four edges each
    let grid = grid_from_rows(&["RG"], &legend()).unwrap();
    let regions = segment_regions(&grid);
    rp.compare_values(2.0, regions.region_count() as f64, 0.0);
    for region in regions.regions() {
        let edges = extract_region_edges(&grid, &regions, region, BoundaryPolicy::ColorGrid);
        rp.compare_values(4.0, edges.len() as f64, 0.0);
    }

    // 1x1 transparent: nothing at all
    let grid = grid_from_rows(&["."], &[]).unwrap();
    let regions = segment_regions(&grid);
    rp.compare_values(0.0, regions.region_count() as f64, 0.0);
    rp.compare_values(
        0.0,
        extract_all_edges(&grid, &regions, BoundaryPolicy::ColorGrid).len() as f64,
        0.0,
    );

    // 3x3 single color: one region of nine pixels with a 12-edge outline
    let grid = grid_from_rows(&["BBB", "BBB", "BBB"], &legend()).unwrap();
    let regions = segment_regions(&grid);
    rp.compare_values(1.0, regions.region_count() as f64, 0.0);
    rp.compare_values(9.0, regions.pixel_count() as f64, 0.0);
    rp.compare_values(
        12.0,
        extract_all_edges(&grid, &regions, BoundaryPolicy::ColorGrid).len() as f64,
        0.0,
    );

    // Diagonal neighbors are not connected
    let grid = grid_from_rows(&["R.", ".R"], &legend()).unwrap();
    let regions = segment_regions(&grid);
    rp.compare_values(2.0, regions.region_count() as f64, 0.0);
    rp.compare_values(1.0, regions.key_count() as f64, 0.0);

    assert!(rp.cleanup());
}

#[test]
fn segment_coverage_reg() {
    let mut rp = RegParams::new("segment_coverage");

    let grid = grid_from_rows(
        &[
            "RRG.BB", //
            "R.GGB.", //
            "RRR.BB", //
            "..GRRG", //
        ],
        &legend(),
    )
    .unwrap();
    let regions = segment_regions(&grid);

    // Every opaque pixel is in exactly one region
    let mut seen = HashSet::new();
    for region in regions.regions() {
        for &(x, y) in region.pixels() {
            assert!(seen.insert((x, y)), "pixel ({x}, {y}) in two regions");
            assert_eq!(grid.key(x, y), Some(region.key()));
            assert_eq!(regions.region_at(x as i64, y as i64), Some(region.id()));
        }
    }
    rp.compare_values(grid.opaque_count() as f64, seen.len() as f64, 0.0);
    rp.compare_values(regions.pixel_count() as f64, seen.len() as f64, 0.0);

    // R: left block and bottom pair; G: top group and two singles; B: one connected group
    rp.compare_values(2.0, regions.get(R.key().unwrap()).unwrap().len() as f64, 0.0);
    rp.compare_values(3.0, regions.get(G.key().unwrap()).unwrap().len() as f64, 0.0);
    rp.compare_values(1.0, regions.get(B.key().unwrap()).unwrap().len() as f64, 0.0);

    // Edge totals agree with a direct count under both policies
    let expected = brute_force_edges(&grid) as f64;
    for policy in [BoundaryPolicy::ColorGrid, BoundaryPolicy::RegionMembership] {
        let edges = extract_all_edges(&grid, &regions, policy);
        rp.compare_values(expected, edges.len() as f64, 0.0);
    }

    assert!(rp.cleanup());
}

#[test]
fn segment_order_reg() {
    let mut rp = RegParams::new("segment_order");

    // Keys iterate in ascending packed order regardless of layout
    let grid = grid_from_rows(&["RGB"], &legend()).unwrap();
    let regions = segment_regions(&grid);
    let keys: Vec<String> = regions.keys().map(|k| k.hex()).collect();
    rp.compare_strings("0000FF,00FF00,FF0000", &keys.join(","));

    // Two runs segment identically
    let again = segment_regions(&grid);
    rp.compare_values(1.0, (regions == again) as u8 as f64, 0.0);

    assert!(rp.cleanup());
}
