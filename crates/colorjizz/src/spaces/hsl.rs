//! Hue/saturation/lightness.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::{CieLab, CieLch, Cmy, Cmyk, Hex, Hsv, Rgb, Xyz, Yxy, write_coords};
use crate::convert::Convert;
use crate::format::ColorFormat;

/// Hue in degrees, saturation and lightness in [0, 100]. Not validated.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Hsl {
    hue: f64,
    saturation: f64,
    lightness: f64,
}

impl Hsl {
    pub fn new(hue: f64, saturation: f64, lightness: f64) -> Self {
        Self {
            hue,
            saturation,
            lightness,
        }
    }

    pub fn hue(&self) -> f64 {
        self.hue
    }

    pub fn saturation(&self) -> f64 {
        self.saturation
    }

    pub fn lightness(&self) -> f64 {
        self.lightness
    }
}

impl Convert for Hsl {
    fn format(&self) -> ColorFormat {
        ColorFormat::Hsl
    }

    fn to_hex(&self) -> Hex {
        self.to_rgb().to_hex()
    }

    fn to_rgb(&self) -> Rgb {
        self.to_hsv().to_rgb()
    }

    fn to_xyz(&self) -> Xyz {
        self.to_rgb().to_xyz()
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
        self.to_rgb().to_cmy()
    }

    fn to_cmyk(&self) -> Cmyk {
        self.to_cmy().to_cmyk()
    }

    /// ```text
    /// T = S × (L < 50 ? L : 100 − L) / 100
    /// V = T + L
    /// S' = 200 × T / (L + T)    (0 when L + T <= 0)
    /// ```
    fn to_hsv(&self) -> Hsv {
        let l = self.lightness;
        let temp = self.saturation * if l < 50.0 { l } else { 100.0 - l } / 100.0;
        let saturation = if l + temp > 0.0 {
            200.0 * temp / (l + temp)
        } else {
            0.0
        };
        Hsv::new(self.hue, saturation, temp + l)
    }

    fn to_hsl(&self) -> Hsl {
        *self
    }
}

impl fmt::Display for Hsl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_coords(f, &[self.hue, self.saturation, self.lightness])
    }
}
