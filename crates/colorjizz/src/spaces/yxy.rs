//! Luminance plus CIE xy chromaticity.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::{CieLab, CieLch, Cmy, Cmyk, Hex, Hsl, Hsv, Rgb, Xyz, write_coords};
use crate::convert::Convert;
use crate::format::ColorFormat;

/// `Y` luminance with `x`, `y` chromaticity coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Yxy {
    #[serde(rename = "Y")]
    luminance: f64,
    x: f64,
    y: f64,
}

impl Yxy {
    pub fn new(luminance: f64, x: f64, y: f64) -> Self {
        Self { luminance, x, y }
    }

    /// The `Y` component.
    pub fn luminance(&self) -> f64 {
        self.luminance
    }

    pub fn x(&self) -> f64 {
        self.x
    }

    pub fn y(&self) -> f64 {
        self.y
    }
}

impl Convert for Yxy {
    fn format(&self) -> ColorFormat {
        ColorFormat::Yxy
    }

    fn to_hex(&self) -> Hex {
        self.to_rgb().to_hex()
    }

    fn to_rgb(&self) -> Rgb {
        self.to_xyz().to_rgb()
    }

    fn to_xyz(&self) -> Xyz {
        if self.luminance == 0.0 {
            return Xyz::new(0.0, 0.0, 0.0);
        }
        let scale = self.luminance / self.y;
        Xyz::new(
            self.x * scale,
            self.luminance,
            (1.0 - self.x - self.y) * scale,
        )
    }

    fn to_yxy(&self) -> Yxy {
        *self
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
        self.to_rgb().to_hsv()
    }

    fn to_hsl(&self) -> Hsl {
        self.to_hsv().to_hsl()
    }
}

impl fmt::Display for Yxy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_coords(f, &[self.luminance, self.x, self.y])
    }
}
