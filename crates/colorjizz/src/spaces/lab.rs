//! CIE L*a*b* relative to the D65 reference white.

use std::f64::consts::PI;
use std::fmt;

use serde::{Deserialize, Serialize};

use super::xyz::{LAB_EPSILON, LAB_KAPPA_SLOPE, LAB_OFFSET, REFERENCE_WHITE};
use super::{CieLch, Cmy, Cmyk, Hex, Hsl, Hsv, Rgb, Xyz, Yxy, write_coords};
use crate::convert::Convert;
use crate::format::ColorFormat;

/// Lightness with the signed `a` (green–red) and `b` (blue–yellow) axes.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CieLab {
    lightness: f64,
    a: f64,
    b: f64,
}

impl CieLab {
    pub fn new(lightness: f64, a: f64, b: f64) -> Self {
        Self { lightness, a, b }
    }

    pub fn lightness(&self) -> f64 {
        self.lightness
    }

    pub fn a(&self) -> f64 {
        self.a
    }

    pub fn b(&self) -> f64 {
        self.b
    }

    /// Copy with a replaced lightness.
    pub(crate) fn with_lightness(self, lightness: f64) -> Self {
        Self { lightness, ..self }
    }

    /// Euclidean distance to `other`.
    pub fn distance(&self, other: &CieLab) -> f64 {
        let dl = (self.lightness - other.lightness).powi(2);
        let da = (self.a - other.a).powi(2);
        let db = (self.b - other.b).powi(2);
        (dl + da + db).sqrt()
    }
}

/// Inverse of the Lab companding function; the cutoff is tested on `t³`.
fn lab_f_inv(t: f64) -> f64 {
    let cube = t.powi(3);
    if cube > LAB_EPSILON {
        cube
    } else {
        (t - LAB_OFFSET) / LAB_KAPPA_SLOPE
    }
}

impl Convert for CieLab {
    fn format(&self) -> ColorFormat {
        ColorFormat::CieLab
    }

    fn to_hex(&self) -> Hex {
        self.to_rgb().to_hex()
    }

    fn to_rgb(&self) -> Rgb {
        self.to_xyz().to_rgb()
    }

    fn to_xyz(&self) -> Xyz {
        let [xn, yn, zn] = REFERENCE_WHITE;
        let fy = (self.lightness + 16.0) / 116.0;
        let fx = self.a / 500.0 + fy;
        let fz = fy - self.b / 200.0;
        Xyz::new(xn * lab_f_inv(fx), yn * lab_f_inv(fy), zn * lab_f_inv(fz))
    }

    fn to_yxy(&self) -> Yxy {
        self.to_xyz().to_yxy()
    }

    fn to_cielab(&self) -> CieLab {
        *self
    }

    /// ```text
    /// C = √(a² + b²)
    /// h = atan2(b, a) in degrees, folded into [0, 360)
    /// ```
    fn to_cielch(&self) -> CieLch {
        let angle = self.b.atan2(self.a);
        let hue = if angle > 0.0 {
            angle / PI * 180.0
        } else {
            360.0 - angle.abs() / PI * 180.0
        };
        let chroma = (self.a.powi(2) + self.b.powi(2)).sqrt();
        CieLch::new(self.lightness, chroma, hue)
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

impl fmt::Display for CieLab {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_coords(f, &[self.lightness, self.a, self.b])
    }
}
