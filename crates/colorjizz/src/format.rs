//! The color format discriminant.
//!
//! Every value remembers which format it is native to. Operations that route
//! through a hub space use this tag to rebuild their result in the caller's
//! format.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Identifies one of the ten supported color formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ColorFormat {
    /// 24-bit packed `0xRRGGBB`.
    Hex,
    /// sRGB channels in [0, 255].
    Rgb,
    /// CIE 1931 tristimulus values.
    Xyz,
    /// Luminance plus CIE xy chromaticity.
    Yxy,
    /// CIE L*a*b* (D65 reference white).
    CieLab,
    /// Cylindrical CIE L*a*b* (lightness, chroma, hue).
    CieLch,
    /// Subtractive cyan/magenta/yellow in [0, 1].
    Cmy,
    /// CMY with a separated key (black) component.
    Cmyk,
    /// Hue/saturation/value.
    Hsv,
    /// Hue/saturation/lightness.
    Hsl,
}

impl ColorFormat {
    /// Human-readable label.
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Hex => "Hex",
            Self::Rgb => "RGB",
            Self::Xyz => "XYZ",
            Self::Yxy => "Yxy",
            Self::CieLab => "CIELab",
            Self::CieLch => "CIELCh",
            Self::Cmy => "CMY",
            Self::Cmyk => "CMYK",
            Self::Hsv => "HSV",
            Self::Hsl => "HSL",
        }
    }

    /// All formats, in declaration order.
    pub fn all() -> &'static [Self] {
        const ALL: [ColorFormat; 10] = [
            ColorFormat::Hex,
            ColorFormat::Rgb,
            ColorFormat::Xyz,
            ColorFormat::Yxy,
            ColorFormat::CieLab,
            ColorFormat::CieLch,
            ColorFormat::Cmy,
            ColorFormat::Cmyk,
            ColorFormat::Hsv,
            ColorFormat::Hsl,
        ];
        &ALL
    }
}

impl fmt::Display for ColorFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
