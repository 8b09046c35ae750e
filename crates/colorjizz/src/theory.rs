//! Color-theory operations built on the conversion graph.
//!
//! Every operation converts the receiver into the hub space its algorithm
//! needs (CIELab, CIELCh, HSV or RGB), computes there, and converts the
//! result back into the receiver's native format.
//!
//! | Operation | Working space |
//! |---|---|
//! | `distance`, `match_palette`, `websafe`, `shift_brightness` | CIELab |
//! | `shift_hue`, `complement`, `analogous`, `split`, `equal`, `rectangle` | CIELCh |
//! | `shift_saturation`, `sweetspot` | HSV |
//! | `greyscale`, `range` | RGB |
//! | `is_dark` | Hex |

use crate::color::Color;
use crate::convert::Convert;
use crate::spaces::{CieLab, CieLch, Cmy, Cmyk, Hex, Hsl, Hsv, Rgb, Xyz, Yxy};

/// Channel values of the 6×6×6 websafe cube.
const WEBSAFE_STEPS: [f64; 6] = [0.0, 51.0, 102.0, 153.0, 204.0, 255.0];

/// Luminance weights used by [`ColorTheory::greyscale`].
const GREY_WEIGHTS: [f64; 3] = [0.3, 0.59, 0.11];

/// The 216 websafe colors, red outermost and blue innermost.
pub fn websafe_colors() -> Vec<Rgb> {
    let mut colors = Vec::with_capacity(216);
    for red in WEBSAFE_STEPS {
        for green in WEBSAFE_STEPS {
            for blue in WEBSAFE_STEPS {
                colors.push(Rgb::clamped(red, green, blue));
            }
        }
    }
    colors
}

/// Index of the palette entry closest to `target` in CIELab.
///
/// The first entry with the minimum distance wins.
pub(crate) fn nearest_index<C: Convert>(target: &CieLab, palette: &[C]) -> Option<usize> {
    let mut best: Option<(usize, f64)> = None;
    for (i, candidate) in palette.iter().enumerate() {
        let distance = target.distance(&candidate.to_cielab());
        if best.is_none_or(|(_, closest)| distance < closest) {
            best = Some((i, distance));
        }
    }
    if let Some((index, distance)) = best {
        tracing::trace!("nearest palette entry {index} at distance {distance:.4}");
    }
    best.map(|(index, _)| index)
}

/// Integer modulo on the truncated value; the sign follows `value`.
fn truncated_mod(value: f64, modulus: i64) -> f64 {
    ((value.trunc() as i64) % modulus) as f64
}

/// Derived palettes and adjustments for any color value.
///
/// Results always come back in the receiver's format: a [`Hex`] yields
/// [`Hex`] values, a [`Color`] yields colors tagged with its own format.
pub trait ColorTheory: Convert + Copy {
    /// Recover `Self` from a color already converted into `self.format()`.
    fn from_color(color: Color) -> Self;

    /// Convert a working-space result back into this value's format.
    fn restore<C: Convert + ?Sized>(&self, color: &C) -> Self {
        Self::from_color(color.convert(self.format()))
    }

    /// Euclidean distance between the two colors in CIELab.
    fn distance<C: Convert + ?Sized>(&self, other: &C) -> f64 {
        self.to_cielab().distance(&other.to_cielab())
    }

    /// The palette entry closest to this color, in this color's format.
    ///
    /// Ties go to the earliest entry. Returns `None` for an empty palette.
    fn match_palette<C: Convert>(&self, palette: &[C]) -> Option<Self> {
        nearest_index(&self.to_cielab(), palette).map(|i| self.restore(&palette[i]))
    }

    /// Snap to the closest of the 216 websafe colors.
    fn websafe(&self) -> Self {
        let palette = websafe_colors();
        self.match_palette(&palette).unwrap_or(*self)
    }

    /// Rotate (or set, when `absolute`) the CIELCh hue.
    ///
    /// The result is reduced with a floating modulo only, so it is not
    /// folded back into [0, 360) and may be negative.
    fn shift_hue(&self, degrees: f64, absolute: bool) -> Self {
        let lch = self.to_cielch();
        let hue = if absolute { degrees } else { lch.hue() + degrees };
        let rotated = CieLch::with_raw_hue(lch.lightness(), lch.chroma(), hue % 360.0);
        self.restore(&rotated)
    }

    /// Shift (or set) the HSV saturation. No clamping is applied.
    fn shift_saturation(&self, modifier: f64, absolute: bool) -> Self {
        let hsv = self.to_hsv();
        let saturation = if absolute {
            modifier
        } else {
            hsv.saturation() + modifier
        };
        self.restore(&hsv.with_saturation(saturation))
    }

    /// Shift (or set) the CIELab lightness. No clamping is applied.
    fn shift_brightness(&self, modifier: f64, absolute: bool) -> Self {
        let lab = self.to_cielab();
        let lightness = if absolute {
            modifier
        } else {
            lab.lightness() + modifier
        };
        self.restore(&lab.with_lightness(lightness))
    }

    /// The color opposite on the CIELCh hue circle.
    fn complement(&self) -> Self {
        self.shift_hue(180.0, false)
    }

    /// `[hue − 30°, (self), hue + 30°]`.
    fn analogous(&self, include_self: bool) -> Vec<Self> {
        flanking(self, 30.0, include_self)
    }

    /// `[hue − 150°, (self), hue + 150°]`.
    fn split(&self, include_self: bool) -> Vec<Self> {
        flanking(self, 150.0, include_self)
    }

    /// `parts − 1` colors evenly spaced around the hue circle, excluding the
    /// receiver's own position. `parts` is raised to at least 2.
    fn equal(&self, parts: usize, include_self: bool) -> Vec<Self> {
        let parts = parts.max(2);
        let lch = self.to_cielch();
        let step = 360.0 / parts as f64;

        let mut palette = Vec::with_capacity(parts);
        if include_self {
            palette.push(*self);
        }
        for i in 1..parts {
            let t = CieLch::new(lch.lightness(), lch.chroma(), lch.hue() + step * i as f64);
            palette.push(self.restore(&t));
        }
        palette
    }

    /// The other three corners of a rectangle inscribed in the hue circle.
    ///
    /// ```text
    /// side2 = (360 − 2 × side) / 2
    /// hues  = h + side, h + side + side2, h + 2 × side + side2
    /// ```
    fn rectangle(&self, side_length: f64, include_self: bool) -> Vec<Self> {
        let side2 = (360.0 - side_length * 2.0) / 2.0;
        let lch = self.to_cielch();
        let corner = |offset: f64| {
            let t = CieLch::new(lch.lightness(), lch.chroma(), lch.hue() + offset);
            self.restore(&t)
        };

        let mut palette = Vec::with_capacity(4);
        if include_self {
            palette.push(*self);
        }
        palette.push(corner(side_length));
        palette.push(corner(side_length + side2));
        palette.push(corner(side_length + side2 + side_length));
        palette
    }

    /// Linear RGB interpolation towards `destination`.
    ///
    /// Produces `steps − 2` intermediate colors with each channel floored.
    /// With `include_self` the receiver is prepended and `destination`
    /// (in the receiver's format) appended.
    fn range<C: Convert>(&self, destination: &C, steps: usize, include_self: bool) -> Vec<Self> {
        let from = self.to_rgb().channels();
        let to = destination.to_rgb().channels();
        let denominator = steps.saturating_sub(1);

        let mut colors = Vec::with_capacity(steps);
        if include_self {
            colors.push(*self);
        }
        for n in 1..denominator {
            let [red, green, blue] = std::array::from_fn(|c| {
                (from[c] + (n as f64 * (to[c] - from[c]) / denominator as f64)).floor()
            });
            colors.push(self.restore(&Rgb::clamped(red, green, blue)));
        }
        if include_self {
            colors.push(self.restore(destination));
        }
        colors
    }

    /// Weighted RGB luminance `0.3 R + 0.59 G + 0.11 B` as a grey.
    fn greyscale(&self) -> Self {
        let rgb = self.to_rgb().channels();
        let luminance: f64 = rgb.iter().zip(GREY_WEIGHTS).map(|(c, w)| c * w).sum();
        self.restore(&Rgb::clamped(luminance, luminance, luminance))
    }

    /// A fixed five-color accent/shade palette derived in HSV.
    ///
    /// ```text
    /// base = (h, s, v)
    /// 1 = (h, round(0.3 s), min(round(1.3 v), 100))
    /// 3 = ((h + 300) mod 360, s, v)
    /// 2 = (h1, min(round(1.2 s1), 100), min(round(0.5 v1), 100))
    /// 4 = (h2, 0, (v2 + 50) mod 100)
    /// 5 = (h4, s4, (v4 + 50) mod 100)
    /// ```
    ///
    /// Returned as `[base, 1, 3, 2, 4, 5]`; the base is dropped unless
    /// `include_self`.
    fn sweetspot(&self, include_self: bool) -> Vec<Self> {
        let base = self.to_hsv();
        let first = Hsv::new(
            base.hue(),
            (base.saturation() * 0.3).round(),
            (base.value() * 1.3).round().min(100.0),
        );
        let third = Hsv::new(
            truncated_mod(base.hue() + 300.0, 360),
            base.saturation(),
            base.value(),
        );
        let second = Hsv::new(
            first.hue(),
            (first.saturation() * 1.2).round().min(100.0),
            (first.value() * 0.5).round().min(100.0),
        );
        let fourth = Hsv::new(second.hue(), 0.0, truncated_mod(second.value() + 50.0, 100));
        let fifth = Hsv::new(
            fourth.hue(),
            fourth.saturation(),
            truncated_mod(fourth.value() + 50.0, 100),
        );

        let skip = usize::from(!include_self);
        [base, first, third, second, fourth, fifth]
            .iter()
            .skip(skip)
            .map(|hsv| self.restore(hsv))
            .collect()
    }

    /// Whether the HSL lightness of the rounded color is below 50.
    fn is_dark(&self) -> bool {
        let rgb = self.to_hex().to_rgb();
        let [red, green, blue] = [rgb.red(), rgb.green(), rgb.blue()].map(|c| c as f64 / 255.0);
        let max = red.max(green).max(blue);
        let min = red.min(green).min(blue);
        let lightness = ((max + min) / 2.0 * 100.0).round();
        lightness < 50.0
    }

    /// Black text on light colors, white text on dark ones.
    fn matching_text_color(&self) -> Hex {
        if self.is_dark() {
            Hex::from_packed(0xFFFFFF)
        } else {
            Hex::from_packed(0x000000)
        }
    }
}

fn flanking<T: ColorTheory>(color: &T, degrees: f64, include_self: bool) -> Vec<T> {
    let mut palette = Vec::with_capacity(3);
    palette.push(color.shift_hue(-degrees, false));
    if include_self {
        palette.push(*color);
    }
    palette.push(color.shift_hue(degrees, false));
    palette
}

impl ColorTheory for Color {
    fn from_color(color: Color) -> Self {
        color
    }
}

macro_rules! impl_theory {
    ($($ty:ident => $to:ident),* $(,)?) => {
        $(
            impl ColorTheory for $ty {
                fn from_color(color: Color) -> Self {
                    color.$to()
                }
            }
        )*
    };
}

impl_theory!(
    Hex => to_hex,
    Rgb => to_rgb,
    Xyz => to_xyz,
    Yxy => to_yxy,
    CieLab => to_cielab,
    CieLch => to_cielch,
    Cmy => to_cmy,
    Cmyk => to_cmyk,
    Hsv => to_hsv,
    Hsl => to_hsl,
);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::format::ColorFormat;

    const EPSILON: f64 = 1e-9;

    fn hex(value: i64) -> Hex {
        Hex::new(value).unwrap()
    }

    fn rendered<T: std::fmt::Display>(colors: &[T]) -> Vec<String> {
        colors.iter().map(|c| c.to_string()).collect()
    }

    #[test]
    fn test_websafe_palette_order() {
        let palette = websafe_colors();
        assert_eq!(palette.len(), 216);
        assert_eq!(palette[0].channels(), [0.0, 0.0, 0.0]);
        assert_eq!(palette[1].channels(), [0.0, 0.0, 51.0]);
        assert_eq!(palette[6].channels(), [0.0, 51.0, 0.0]);
        assert_eq!(palette[36].channels(), [51.0, 0.0, 0.0]);
        assert_eq!(palette[215].channels(), [255.0, 255.0, 255.0]);
    }

    #[test]
    fn test_match_palette_empty_is_none() {
        let empty: [Hex; 0] = [];
        assert!(hex(0x123456).match_palette(&empty).is_none());
    }

    #[test]
    fn test_match_palette_ties_go_to_first() {
        let palette = [hex(0x000000), hex(0xFFFFFF), hex(0x000000)];
        let found = nearest_index(&hex(0x010101).to_cielab(), &palette);
        assert_eq!(found, Some(0));
    }

    #[test]
    fn test_match_palette_returns_receiver_format() {
        let palette = [
            Color::from(Rgb::new(255.0, 0.0, 0.0).unwrap()),
            Color::from(Rgb::new(0.0, 0.0, 255.0).unwrap()),
        ];
        let found = hex(0x1010F0).match_palette(&palette).unwrap();
        assert_eq!(found, hex(0x0000FF));

        let lab = Color::from(hex(0xEE1111).to_cielab());
        let found = lab.match_palette(&palette).unwrap();
        assert_eq!(found.format(), ColorFormat::CieLab);
        assert_eq!(found.to_hex(), hex(0xFF0000));
    }

    #[test]
    fn test_complement_known_values() {
        assert_eq!(hex(0xFFFFFF).complement().to_string(), "FFFFFF");
        assert_eq!(hex(0xFF0000).complement().to_string(), "00A1F3");
    }

    #[test]
    fn test_hue_keeps_unfolded_result() {
        let lch = CieLch::new(50.0, 20.0, 10.0);
        let rotated = lch.shift_hue(-30.0, false);
        assert!((rotated.hue() - -20.0).abs() < EPSILON);
        let set = lch.shift_hue(400.0, true);
        assert!((set.hue() - 40.0).abs() < EPSILON);
    }

    #[test]
    fn test_hue_absolute_on_hex() {
        assert_eq!(hex(0x3366CC).shift_hue(90.0, true).to_string(), "816800");
    }

    #[test]
    fn test_analogous_and_split_ordering() {
        let red = hex(0xFF0000);
        assert_eq!(rendered(&red.analogous(false)), ["FF0066", "CB6300"]);
        assert_eq!(rendered(&red.analogous(true)), ["FF0066", "FF0000", "CB6300"]);
        assert_eq!(rendered(&red.split(false)), ["009AFF", "00A19C"]);
        assert_eq!(rendered(&red.split(true)), ["009AFF", "FF0000", "00A19C"]);
    }

    #[test]
    fn test_equal_spacing_and_minimum_parts() {
        let red = hex(0xFF0000);
        assert_eq!(rendered(&red.equal(3, false)), ["009E3B", "0083FF"]);
        assert_eq!(rendered(&red.equal(3, true)), ["FF0000", "009E3B", "0083FF"]);
        assert_eq!(red.equal(0, false).len(), 1);
        assert_eq!(red.equal(1, true).len(), 2);
    }

    #[test]
    fn test_rectangle_corners() {
        let red = hex(0xFF0000);
        assert_eq!(rendered(&red.rectangle(60.0, false)), ["818500", "00A1F3", "0083FF"]);
        let with_self = red.rectangle(60.0, true);
        assert_eq!(with_self.len(), 4);
        assert_eq!(with_self[0], red);
    }

    #[test]
    fn test_range_interpolates_and_floors() {
        let black = hex(0x000000);
        let white = hex(0xFFFFFF);
        assert_eq!(rendered(&black.range(&white, 5, false)), ["3F3F3F", "7F7F7F", "BFBFBF"]);
        assert_eq!(rendered(&black.range(&white, 3, true)), ["000000", "7F7F7F", "FFFFFF"]);
        assert!(black.range(&white, 2, false).is_empty());
        assert!(black.range(&white, 0, false).is_empty());
    }

    #[test]
    fn test_range_appends_destination_in_receiver_format() {
        let from = Rgb::new(0.0, 0.0, 0.0).unwrap();
        let to = hex(0x0A0A0A);
        let colors = from.range(&to, 2, true);
        assert_eq!(colors.len(), 2);
        assert_eq!(colors[1].channels(), [10.0, 10.0, 10.0]);
    }

    #[test]
    fn test_greyscale_known_values() {
        assert_eq!(hex(0x000000).greyscale(), hex(0x000000));
        assert_eq!(hex(0xFF0000).greyscale(), hex(0x4D4D4D));
        assert_eq!(hex(0x00FF00).greyscale(), hex(0x969696));
        assert_eq!(hex(0x0000FF).greyscale(), hex(0x1C1C1C));
    }

    #[test]
    fn test_saturation_shift_and_absolute() {
        let base = hex(0x3366CC);
        assert_eq!(base.shift_saturation(20.0, false).to_string(), "0A4BCC");
        assert_eq!(base.shift_saturation(0.0, true).to_string(), "CCCCCC");
    }

    #[test]
    fn test_saturation_is_not_clamped() {
        let hsv = Hsv::new(10.0, 90.0, 50.0);
        assert_eq!(hsv.shift_saturation(30.0, false).saturation(), 120.0);
    }

    #[test]
    fn test_shift_methods_callable_next_to_accessors() {
        let hsl = Hsl::new(120.0, 50.0, 40.0);
        let rotated = hsl.shift_hue(90.0, false);
        assert!((rotated.hue() - hsl.hue()).abs() > 1.0);
        let grey = hsl.shift_saturation(0.0, true);
        assert_eq!(grey.saturation(), 0.0);
        assert_eq!(hsl.hue(), 120.0);
        assert_eq!(hsl.saturation(), 50.0);
    }

    #[test]
    fn test_brightness_shift_and_absolute() {
        let base = hex(0x3366CC);
        assert_eq!(base.shift_brightness(10.0, false).to_string(), "567FE9");
        assert_eq!(base.shift_brightness(100.0, true).to_string(), "DFF9FF");
        let lab = CieLab::new(95.0, 0.0, 0.0);
        assert_eq!(lab.shift_brightness(20.0, false).lightness(), 115.0);
    }

    #[test]
    fn test_sweetspot_generation_order() {
        let colors = hex(0x3366CC).sweetspot(true);
        assert_eq!(
            rendered(&colors),
            ["3366CC", "C4D8FF", "33CC99", "5C6880", "000000", "808080"]
        );
        let without_self = hex(0x3366CC).sweetspot(false);
        assert_eq!(without_self.len(), 5);
        assert_eq!(without_self[0].to_string(), "C4D8FF");
    }

    #[test]
    fn test_sweetspot_hsv_coordinates() {
        let colors = Hsv::new(0.0, 100.0, 100.0).sweetspot(false);
        let coords: Vec<[f64; 3]> = colors
            .iter()
            .map(|c| [c.hue(), c.saturation(), c.value()])
            .collect();
        assert_eq!(
            coords,
            [
                [0.0, 30.0, 100.0],
                [300.0, 100.0, 100.0],
                [0.0, 36.0, 50.0],
                [0.0, 0.0, 0.0],
                [0.0, 0.0, 50.0],
            ]
        );
    }

    #[test]
    fn test_is_dark_and_text_color() {
        assert!(hex(0x000000).is_dark());
        assert!(hex(0x333333).is_dark());
        assert!(!hex(0xFFFFFF).is_dark());
        // 127/255 rounds up to lightness 50
        assert!(!hex(0x7F7F7F).is_dark());
        assert_eq!(hex(0x000000).matching_text_color(), hex(0xFFFFFF));
        assert_eq!(hex(0xFFFF00).matching_text_color(), hex(0x000000));
    }

    #[test]
    fn test_distance_black_to_white() {
        let d = hex(0x000000).distance(&hex(0xFFFFFF));
        assert!((d - 100.0).abs() < 1e-3);
        assert_eq!(hex(0x123456).distance(&hex(0x123456)), 0.0);
    }

    #[test]
    fn test_operations_on_color_keep_variant() {
        let color = Color::from(hex(0xFF0000).to_hsl());
        assert_eq!(color.complement().format(), ColorFormat::Hsl);
        assert_eq!(color.greyscale().format(), ColorFormat::Hsl);
        assert!(color.analogous(true).iter().all(|c| c.format() == ColorFormat::Hsl));
    }
}
