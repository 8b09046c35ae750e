//! CMY with a separated key (black) component.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::{CieLab, CieLch, Cmy, Hex, Hsl, Hsv, Rgb, Xyz, Yxy, write_coords};
use crate::convert::Convert;
use crate::format::ColorFormat;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Cmyk {
    cyan: f64,
    magenta: f64,
    yellow: f64,
    key: f64,
}

impl Cmyk {
    pub fn new(cyan: f64, magenta: f64, yellow: f64, key: f64) -> Self {
        Self {
            cyan,
            magenta,
            yellow,
            key,
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

    pub fn key(&self) -> f64 {
        self.key
    }
}

impl Convert for Cmyk {
    fn format(&self) -> ColorFormat {
        ColorFormat::Cmyk
    }

    fn to_hex(&self) -> Hex {
        self.to_rgb().to_hex()
    }

    fn to_rgb(&self) -> Rgb {
        self.to_cmy().to_rgb()
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
        let merge = |c: f64| c * (1.0 - self.key) + self.key;
        Cmy::new(merge(self.cyan), merge(self.magenta), merge(self.yellow))
    }

    fn to_cmyk(&self) -> Cmyk {
        *self
    }

    fn to_hsv(&self) -> Hsv {
        self.to_rgb().to_hsv()
    }

    fn to_hsl(&self) -> Hsl {
        self.to_hsv().to_hsl()
    }
}

impl fmt::Display for Cmyk {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_coords(f, &[self.cyan, self.magenta, self.yellow, self.key])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f64 = 1e-9;

    #[test]
    fn test_to_cmy_folds_key_back() {
        let cmy = Cmyk::new(0.5, 0.0, 1.0, 0.2).to_cmy();
        assert!((cmy.cyan() - 0.6).abs() < EPSILON);
        assert!((cmy.magenta() - 0.2).abs() < EPSILON);
        assert!((cmy.yellow() - 1.0).abs() < EPSILON);
    }

    #[test]
    fn test_display_four_components() {
        let cmyk = Cmyk::new(0.1, 0.2, 0.3, 0.4);
        assert_eq!(cmyk.to_string(), "0.1000, 0.2000, 0.3000, 0.4000");
    }
}
