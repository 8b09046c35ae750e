//! Subtractive cyan/magenta/yellow in [0, 1].

use std::fmt;

use serde::{Deserialize, Serialize};

use super::{CieLab, CieLch, Cmyk, Hex, Hsl, Hsv, Rgb, Xyz, Yxy, write_coords};
use crate::convert::Convert;
use crate::format::ColorFormat;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Cmy {
    cyan: f64,
    magenta: f64,
    yellow: f64,
}

impl Cmy {
    pub fn new(cyan: f64, magenta: f64, yellow: f64) -> Self {
        Self {
            cyan,
            magenta,
            yellow,
        }
    }

    pub fn cyan(&self) -> f64 {
        self.cyan
    }

    pub fn magenta(&self) -> f64 {
        self.magenta
    }

    pub fn yellow(&self) -> f64 {
        self.yellow
    }
}

impl Convert for Cmy {
    fn format(&self) -> ColorFormat {
        ColorFormat::Cmy
    }

    fn to_hex(&self) -> Hex {
        self.to_rgb().to_hex()
    }

    fn to_rgb(&self) -> Rgb {
        Rgb::clamped(
            (1.0 - self.cyan) * 255.0,
            (1.0 - self.magenta) * 255.0,
            (1.0 - self.yellow) * 255.0,
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
        *self
    }

    /// Pull the shared darkness out into `key`.
    ///
    /// ```text
    /// K = min(1, C, M, Y)
    /// C' = (C − K) / (1 − K)     (0 when K == 1)
    /// ```
    fn to_cmyk(&self) -> Cmyk {
        let key = 1.0_f64.min(self.cyan).min(self.magenta).min(self.yellow);
        if key == 1.0 {
            return Cmyk::new(0.0, 0.0, 0.0, key);
        }
        let separate = |c: f64| (c - key) / (1.0 - key);
        Cmyk::new(
            separate(self.cyan),
            separate(self.magenta),
            separate(self.yellow),
            key,
        )
    }

    fn to_hsv(&self) -> Hsv {
        self.to_rgb().to_hsv()
    }

    fn to_hsl(&self) -> Hsl {
        self.to_hsv().to_hsl()
    }
}

impl fmt::Display for Cmy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_coords(f, &[self.cyan, self.magenta, self.yellow])
    }
}
