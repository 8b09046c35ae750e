//! CIE 1931 XYZ tristimulus values (Y of white = 100).

use std::fmt;

use glam::{DMat3, DVec3};
use serde::{Deserialize, Serialize};

use super::{CieLab, CieLch, Cmy, Cmyk, Hex, Hsl, Hsv, Rgb, Yxy, transfer, write_coords};
use crate::convert::Convert;
use crate::format::ColorFormat;

/// CIE XYZ (normalized to 0–1) to linear sRGB, D65.
const XYZ_TO_SRGB: DMat3 = DMat3::from_cols(
    DVec3::new(3.2406, -0.9689, 0.0557),
    DVec3::new(-1.5372, 1.8758, -0.2040),
    DVec3::new(-0.4986, 0.0415, 1.0570),
);

/// D65 / 2° reference white.
pub const REFERENCE_WHITE: [f64; 3] = [95.047, 100.0, 108.883];

/// CIE L*a*b* linear/cube-root cutoff.
pub(crate) const LAB_EPSILON: f64 = 0.008856;

/// Slope of the linear segment below [`LAB_EPSILON`].
pub(crate) const LAB_KAPPA_SLOPE: f64 = 7.787;

/// Offset of the linear segment, `16 / 116`.
pub(crate) const LAB_OFFSET: f64 = 16.0 / 116.0;

/// Tristimulus values. Unbounded; no validation is applied.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Xyz {
    x: f64,
    y: f64,
    z: f64,
}

impl Xyz {
    pub fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    pub fn x(&self) -> f64 {
        self.x
    }

    pub fn y(&self) -> f64 {
        self.y
    }

    pub fn z(&self) -> f64 {
        self.z
    }
}

/// Cube root above the cutoff, linear below.
fn lab_f(t: f64) -> f64 {
    if t > LAB_EPSILON {
        t.powf(1.0 / 3.0)
    } else {
        LAB_KAPPA_SLOPE * t + LAB_OFFSET
    }
}

impl Convert for Xyz {
    fn format(&self) -> ColorFormat {
        ColorFormat::Xyz
    }

    fn to_hex(&self) -> Hex {
        self.to_rgb().to_hex()
    }

    /// Inverse sRGB matrix, sRGB encode, scale to 0–255 and clamp.
    fn to_rgb(&self) -> Rgb {
        let linear = XYZ_TO_SRGB * DVec3::new(self.x / 100.0, self.y / 100.0, self.z / 100.0);
        let [red, green, blue] = linear.to_array().map(|c| transfer::to_encoded(c) * 255.0);
        Rgb::clamped(red, green, blue)
    }

    fn to_xyz(&self) -> Xyz {
        *self
    }

    /// ```text
    /// x = X / (X + Y + Z)    (0 when X == 0)
    /// y = Y / (X + Y + Z)    (0 when Y == 0)
    /// ```
    fn to_yxy(&self) -> Yxy {
        let sum = self.x + self.y + self.z;
        let x = if self.x == 0.0 { 0.0 } else { self.x / sum };
        let y = if self.y == 0.0 { 0.0 } else { self.y / sum };
        Yxy::new(self.y, x, y)
    }

    /// ```text
    /// f(t) = t^(1/3)               t > 0.008856
    ///        7.787 × t + 16/116    otherwise
    ///
    /// L = 116 × f(Y/Yn) − 16       f(Y/Yn) > 0.008856
    ///     903.3 × f(Y/Yn)          otherwise
    /// a = 500 × (f(X/Xn) − f(Y/Yn))
    /// b = 200 × (f(Y/Yn) − f(Z/Zn))
    /// ```
    fn to_cielab(&self) -> CieLab {
        let [xn, yn, zn] = REFERENCE_WHITE;
        let fx = lab_f(self.x / xn);
        let fy = lab_f(self.y / yn);
        let fz = lab_f(self.z / zn);

        // The lightness branch tests the transformed value.
        let lightness = if fy > LAB_EPSILON {
            116.0 * fy - 16.0
        } else {
            903.3 * fy
        };

        CieLab::new(lightness, 500.0 * (fx - fy), 200.0 * (fy - fz))
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
        self.to_rgb().to_hsv()
    }

    fn to_hsl(&self) -> Hsl {
        self.to_hsv().to_hsl()
    }
}

impl fmt::Display for Xyz {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_coords(f, &[self.x, self.y, self.z])
    }
}
