//! sRGB with channels in [0, 255].

use std::fmt;

use glam::{DMat3, DVec3};
use serde::{Deserialize, Serialize};

use super::transfer;
use super::{CieLab, CieLch, Cmy, Cmyk, Hex, Hsl, Hsv, Xyz, Yxy};
use crate::convert::Convert;
use crate::error::ColorError;
use crate::format::ColorFormat;

/// Linear sRGB (scaled to 0–100) to CIE XYZ, D65.
const SRGB_TO_XYZ: DMat3 = DMat3::from_cols(
    DVec3::new(0.4124, 0.2126, 0.0193),
    DVec3::new(0.3576, 0.7152, 0.1192),
    DVec3::new(0.1805, 0.0722, 0.9505),
);

/// An sRGB color. Channels are stored unrounded.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RgbChannels")]
pub struct Rgb {
    red: f64,
    green: f64,
    blue: f64,
}

#[derive(Deserialize)]
struct RgbChannels {
    red: f64,
    green: f64,
    blue: f64,
}

impl TryFrom<RgbChannels> for Rgb {
    type Error = ColorError;

    fn try_from(c: RgbChannels) -> Result<Self, Self::Error> {
        Rgb::new(c.red, c.green, c.blue)
    }
}

impl Rgb {
    /// Build an RGB color. Every channel must lie in [0, 255].
    pub fn new(red: f64, green: f64, blue: f64) -> Result<Self, ColorError> {
        for (field, value) in [("red", red), ("green", green), ("blue", blue)] {
            if !(0.0..=255.0).contains(&value) {
                return Err(ColorError::out_of_range(field, value));
            }
        }
        Ok(Self { red, green, blue })
    }

    /// Build from channels computed by a conversion, forcing them into range.
    pub(crate) fn clamped(red: f64, green: f64, blue: f64) -> Self {
        Self {
            red: red.clamp(0.0, 255.0),
            green: green.clamp(0.0, 255.0),
            blue: blue.clamp(0.0, 255.0),
        }
    }

    /// Red rounded to the nearest integer.
    pub fn red(&self) -> u8 {
        self.red.round() as u8
    }

    /// Green rounded to the nearest integer.
    pub fn green(&self) -> u8 {
        self.green.round() as u8
    }

    /// Blue rounded to the nearest integer.
    pub fn blue(&self) -> u8 {
        self.blue.round() as u8
    }

    /// Unrounded `[red, green, blue]`.
    pub fn channels(&self) -> [f64; 3] {
        [self.red, self.green, self.blue]
    }
}

impl Convert for Rgb {
    fn format(&self) -> ColorFormat {
        ColorFormat::Rgb
    }

    fn to_hex(&self) -> Hex {
        let packed = (self.red() as u32) << 16 | (self.green() as u32) << 8 | self.blue() as u32;
        Hex::from_packed(packed)
    }

    fn to_rgb(&self) -> Rgb {
        *self
    }

    /// sRGB decode, scale to 0–100, then the sRGB → XYZ matrix.
    fn to_xyz(&self) -> Xyz {
        let linear = self.channels().map(|c| transfer::to_linear(c / 255.0) * 100.0);
        let xyz = SRGB_TO_XYZ * DVec3::from_array(linear);
        Xyz::new(xyz.x, xyz.y, xyz.z)
    }

    fn to_yxy(&self) -> Yxy {
        self.to_xyz().to_yxy()
    }

    fn to_cielab(&self) -> CieLab {
        self.to_xyz().to_cielab()
    }

    fn to_cielch(&self) -> CieLch {
        self.to_cielab().to_cielch()
    }

    fn to_cmy(&self) -> Cmy {
        Cmy::new(
            1.0 - self.red / 255.0,
            1.0 - self.green / 255.0,
            1.0 - self.blue / 255.0,
        )
    }

    fn to_cmyk(&self) -> Cmyk {
        self.to_cmy().to_cmyk()
    }

    /// Max/min/delta hue extraction.
    ///
    /// Greys (delta 0), black included, get hue 0 and saturation 0.
    fn to_hsv(&self) -> Hsv {
        let [red, green, blue] = self.channels().map(|c| c / 255.0);
        let min = red.min(green).min(blue);
        let max = red.max(green).max(blue);
        let value = max;
        let delta = max - min;

        if delta == 0.0 {
            return Hsv::new(0.0, 0.0, value * 100.0);
        }
        let saturation = delta / max;

        let mut hue = if red == max {
            (green - blue) / delta
        } else if green == max {
            2.0 + (blue - red) / delta
        } else {
            4.0 + (red - green) / delta
        };
        hue *= 60.0;
        if hue < 0.0 {
            hue += 360.0;
        }

        Hsv::new(hue, saturation * 100.0, value * 100.0)
    }

    fn to_hsl(&self) -> Hsl {
        self.to_hsv().to_hsl()
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}, {}, {}", self.red(), self.green(), self.blue())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f64 = 1e-3;

    #[test]
    fn test_new_rejects_out_of_range_channels() {
        assert!(matches!(
            Rgb::new(256.0, 0.0, 0.0),
            Err(ColorError::OutOfRange { field: "red", .. })
        ));
        assert!(matches!(
            Rgb::new(-1.0, 0.0, 0.0),
            Err(ColorError::OutOfRange { field: "red", .. })
        ));
        assert!(matches!(
            Rgb::new(0.0, 0.0, 255.5),
            Err(ColorError::OutOfRange { field: "blue", .. })
        ));
        assert!(Rgb::new(f64::NAN, 0.0, 0.0).is_err());
    }

    #[test]
    fn test_new_accepts_bounds() {
        assert!(Rgb::new(0.0, 0.0, 0.0).is_ok());
        assert!(Rgb::new(255.0, 255.0, 255.0).is_ok());
    }

    #[test]
    fn test_getters_round_half_away_from_zero() {
        let rgb = Rgb::new(0.5, 127.49, 254.5).unwrap();
        assert_eq!((rgb.red(), rgb.green(), rgb.blue()), (1, 127, 255));
    }

    #[test]
    fn test_to_hex_packs_rounded_channels() {
        let rgb = Rgb::new(255.0, 127.6, 0.2).unwrap();
        assert_eq!(rgb.to_hex().value(), 0xFF8000);
    }

    #[test]
    fn test_white_maps_to_reference_white() {
        let xyz = Rgb::new(255.0, 255.0, 255.0).unwrap().to_xyz();
        assert!((xyz.x() - 95.05).abs() < EPSILON);
        assert!((xyz.y() - 100.0).abs() < EPSILON);
        assert!((xyz.z() - 108.9).abs() < EPSILON);
    }

    #[test]
    fn test_to_hsv_primary_hues() {
        let red = Rgb::new(255.0, 0.0, 0.0).unwrap().to_hsv();
        assert_eq!((red.hue(), red.saturation(), red.value()), (0.0, 100.0, 100.0));
        let green = Rgb::new(0.0, 255.0, 0.0).unwrap().to_hsv();
        assert!((green.hue() - 120.0).abs() < EPSILON);
        let blue = Rgb::new(0.0, 0.0, 255.0).unwrap().to_hsv();
        assert!((blue.hue() - 240.0).abs() < EPSILON);
        let magenta = Rgb::new(255.0, 0.0, 128.0).unwrap().to_hsv();
        assert!(magenta.hue() > 300.0 && magenta.hue() < 360.0);
    }

    #[test]
    fn test_to_hsv_grey_has_no_hue() {
        let grey = Rgb::new(51.0, 51.0, 51.0).unwrap().to_hsv();
        assert_eq!(grey.hue(), 0.0);
        assert_eq!(grey.saturation(), 0.0);
        assert!((grey.value() - 20.0).abs() < EPSILON);
    }

    #[test]
    fn test_to_hsv_black_takes_grey_branch() {
        let black = Rgb::new(0.0, 0.0, 0.0).unwrap().to_hsv();
        assert_eq!([black.hue(), black.saturation(), black.value()], [0.0, 0.0, 0.0]);
    }

    #[test]
    fn test_to_cmy_inverts_channels() {
        let cmy = Rgb::new(255.0, 0.0, 51.0).unwrap().to_cmy();
        assert!(cmy.cyan().abs() < EPSILON);
        assert!((cmy.magenta() - 1.0).abs() < EPSILON);
        assert!((cmy.yellow() - 0.8).abs() < EPSILON);
    }

    #[test]
    fn test_display_rounds_channels() {
        let rgb = Rgb::new(10.2, 20.5, 30.7).unwrap();
        assert_eq!(rgb.to_string(), "10, 21, 31");
    }
}
