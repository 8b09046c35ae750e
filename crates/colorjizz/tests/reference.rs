//! Cross-check the sRGB to CIELab pipeline against the `palette` crate.

use colorjizz::{Convert, Hex};
use palette::white_point::D65;
use palette::{IntoColor, Lab, Srgb};

/// The published sRGB matrix is rounded to four decimals, so the two
/// implementations drift slightly apart.
const LAB_TOLERANCE: f64 = 1.0;

#[test]
fn test_cielab_matches_palette_crate() {
    for packed in (0..=0xFFFFFFu32).step_by(0x07A3B1) {
        let hex = Hex::new(packed as i64).unwrap();
        let rgb = hex.to_rgb();
        let [r, g, b] = rgb.channels().map(|c| c / 255.0);
        let expected: Lab<D65, f64> = Srgb::new(r, g, b).into_color();

        let lab = hex.to_cielab();
        let pairs = [
            (lab.lightness(), expected.l),
            (lab.a(), expected.a),
            (lab.b(), expected.b),
        ];
        for (actual, reference) in pairs {
            assert!(
                (actual - reference).abs() < LAB_TOLERANCE,
                "{hex}: {lab} vs ({}, {}, {})",
                expected.l,
                expected.a,
                expected.b
            );
        }
    }
}
