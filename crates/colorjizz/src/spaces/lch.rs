//! Cylindrical CIE L*a*b*: lightness, chroma and hue angle.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::{CieLab, Cmy, Cmyk, Hex, Hsl, Hsv, Rgb, Xyz, Yxy, write_coords};
use crate::convert::Convert;
use crate::format::ColorFormat;

/// Lightness, chroma and hue in degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CieLch {
    lightness: f64,
    chroma: f64,
    hue: f64,
}

impl CieLch {
    /// Build a color. The hue is folded into [0, 360).
    pub fn new(lightness: f64, chroma: f64, hue: f64) -> Self {
        let mut hue = hue % 360.0;
        if hue < 0.0 {
            hue += 360.0;
        }
        Self {
            lightness,
            chroma,
            hue,
        }
    }

    /// Build without folding the hue.
    pub(crate) fn with_raw_hue(lightness: f64, chroma: f64, hue: f64) -> Self {
        Self {
            lightness,
            chroma,
            hue,
        }
    }

    pub fn lightness(&self) -> f64 {
        self.lightness
    }

    pub fn chroma(&self) -> f64 {
        self.chroma
    }

    pub fn hue(&self) -> f64 {
        self.hue
    }
}

impl Convert for CieLch {
    fn format(&self) -> ColorFormat {
        ColorFormat::CieLch
    }

    fn to_hex(&self) -> Hex {
        self.to_rgb().to_hex()
    }

    fn to_rgb(&self) -> Rgb {
        self.to_cielab().to_rgb()
    }

    fn to_xyz(&self) -> Xyz {
        self.to_cielab().to_xyz()
    }

    fn to_yxy(&self) -> Yxy {
        self.to_xyz().to_yxy()
    }

    fn to_cielab(&self) -> CieLab {
        let radians = self.hue.to_radians();
        CieLab::new(
            self.lightness,
            radians.cos() * self.chroma,
            radians.sin() * self.chroma,
        )
    }

    fn to_cielch(&self) -> CieLch {
        *self
    }

    fn to_cmy(&self) -> Cmy {
        self.to_rgb().to_cmy()
    }

    fn to_cmyk(&self) -> Cmyk {
        self.to_cmy().to_cmyk()
    }

    fn to_hsv(&self) -> Hsv {
        self.to_rgb().to_hsv()
    }

    fn to_hsl(&self) -> Hsl {
        self.to_hsv().to_hsl()
    }
}

impl fmt::Display for CieLch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_coords(f, &[self.lightness, self.chroma, self.hue])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f64 = 1e-9;

    #[test]
    fn test_new_folds_hue_into_range() {
        assert!((CieLch::new(50.0, 10.0, -30.0).hue() - 330.0).abs() < EPSILON);
        assert!((CieLch::new(50.0, 10.0, 370.0).hue() - 10.0).abs() < EPSILON);
        assert_eq!(CieLch::new(50.0, 10.0, 360.0).hue(), 0.0);
        assert_eq!(CieLch::new(50.0, 10.0, 45.0).hue(), 45.0);
    }

    #[test]
    fn test_raw_hue_is_kept() {
        assert_eq!(CieLch::with_raw_hue(50.0, 10.0, -20.0).hue(), -20.0);
    }

    #[test]
    fn test_cielab_roundtrip() {
        let lch = CieLch::new(60.0, 35.0, 123.0);
        let back = lch.to_cielab().to_cielch();
        assert!((back.lightness() - 60.0).abs() < EPSILON);
        assert!((back.chroma() - 35.0).abs() < EPSILON);
        assert!((back.hue() - 123.0).abs() < 1e-6);
    }
}
