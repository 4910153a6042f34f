//! ACI palette regression test
//!
//! Run with:
//! ```
//! cargo test -p pixcut-color --test aci_reg
//! ```

use pixcut_color::{ACI_COLORS, Palette, Rgb, aci_palette, aci_rgb, nearest_aci, nearest_index};
use pixcut_test::RegParams;

#[test]
fn aci_reg() {
    let mut rp = RegParams::new("aci");

    // Every palette entry maps back to its own index (first occurrence wins)
    for (index, rgb) in aci_palette().iter() {
        let first = ACI_COLORS.iter().position(|&c| c == rgb).unwrap() + 1;
        rp.compare_values(first as f64, nearest_aci(rgb.r, rgb.g, rgb.b) as f64, 0.0);
        assert!(first <= index);
    }

    // Known nearest entries
    for ((r, g, b), aci) in [
        ((255, 0, 0), 1),
        ((0, 255, 0), 3),
        ((0, 0, 255), 5),
        ((255, 255, 255), 7),
        ((128, 128, 128), 8),
        ((254, 1, 1), 1),
        ((0, 0, 0), 18),
        ((100, 0, 0), 16),
        ((200, 100, 50), 23),
    ] {
        rp.compare_values(aci as f64, nearest_aci(r, g, b) as f64, 0.0);
    }

    // White appears twice (7 and 255); the lower index is returned
    rp.compare_values(1.0, (aci_rgb(255) == aci_rgb(7)) as u8 as f64, 0.0);

    assert!(rp.cleanup());
}

#[test]
fn palette_reg() {
    let mut rp = RegParams::new("palette");

    let colors = [Rgb::new(0, 0, 0), Rgb::new(10, 0, 0), Rgb::new(20, 0, 0)];
    // 5 is equidistant from 0 and 10
    rp.compare_values(0.0, nearest_index(&colors, Rgb::new(5, 0, 0)) as f64, 0.0);
    rp.compare_values(2.0, nearest_index(&colors, Rgb::new(200, 0, 0)) as f64, 0.0);

    let palette = Palette::new(&colors, 1);
    rp.compare_values(3.0, palette.len() as f64, 0.0);
    rp.compare_values(2.0, palette.nearest(Rgb::new(9, 0, 0)) as f64, 0.0);

    // Repeated queries are stable
    let target = Rgb::new(123, 45, 67);
    let first = nearest_aci(target.r, target.g, target.b);
    for _ in 0..3 {
        rp.compare_values(first as f64, nearest_aci(target.r, target.g, target.b) as f64, 0.0);
    }

    assert!(rp.cleanup());
}
