//! Hue/saturation/value.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::{CieLab, CieLch, Cmy, Cmyk, Hex, Hsl, Rgb, Xyz, Yxy, write_coords};
use crate::convert::Convert;
use crate::format::ColorFormat;

/// Hue in degrees, saturation and value in [0, 100]. Not validated.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Hsv {
    hue: f64,
    saturation: f64,
    value: f64,
}

impl Hsv {
    pub fn new(hue: f64, saturation: f64, value: f64) -> Self {
        Self {
            hue,
            saturation,
            value,
        }
    }

    pub fn hue(&self) -> f64 {
        self.hue
    }

    pub fn saturation(&self) -> f64 {
        self.saturation
    }

    pub fn value(&self) -> f64 {
        self.value
    }

    pub(crate) fn with_saturation(self, saturation: f64) -> Self {
        Self { saturation, ..self }
    }
}

impl Convert for Hsv {
    fn format(&self) -> ColorFormat {
        ColorFormat::Hsv
    }

    fn to_hex(&self) -> Hex {
        self.to_rgb().to_hex()
    }

    /// Six-sector conversion keyed on `floor(hue / 60)`.
    ///
    /// Zero saturation short-circuits to a grey of `value`; the chromatic
    /// branch rounds each channel to an integer.
    fn to_rgb(&self) -> Rgb {
        let saturation = self.saturation / 100.0;
        let value = self.value / 100.0;

        if saturation == 0.0 {
            let grey = value * 255.0;
            return Rgb::clamped(grey, grey, grey);
        }

        let h = self.hue / 360.0 * 6.0;
        let sector = h.floor();
        let fraction = h - sector;
        let p = value * (1.0 - saturation);
        let q = value * (1.0 - saturation * fraction);
        let t = value * (1.0 - saturation * (1.0 - fraction));

        let (red, green, blue) = match sector as i64 {
            0 => (value, t, p),
            1 => (q, value, p),
            2 => (p, value, t),
            3 => (p, q, value),
            4 => (t, p, value),
            _ => (value, p, q),
        };

        Rgb::clamped(
            (red * 255.0).round(),
            (green * 255.0).round(),
            (blue * 255.0).round(),
        )
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

    fn to_hsv(&self) -> Hsv {
        *self
    }

    /// ```text
    /// L = (2 − S/100) × V / 2
    /// S' = S × V / (L < 50 ? 2L : 200 − 2L)    (0 when L is 0 or 100)
    /// ```
    fn to_hsl(&self) -> Hsl {
        let lightness = (2.0 - self.saturation / 100.0) * self.value / 2.0;
        let saturation = if lightness > 0.0 && lightness < 100.0 {
            let divisor = if lightness < 50.0 {
                lightness * 2.0
            } else {
                200.0 - lightness * 2.0
            };
            self.saturation * self.value / divisor
        } else {
            0.0
        };
        Hsl::new(self.hue, saturation, lightness)
    }
}

impl fmt::Display for Hsv {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_coords(f, &[self.hue, self.saturation, self.value])
    }
}
