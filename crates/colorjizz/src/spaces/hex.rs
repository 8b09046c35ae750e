//! Packed 24-bit `0xRRGGBB` colors and hex/name string parsing.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::{CieLab, CieLch, Cmy, Cmyk, Hsl, Hsv, Rgb, Xyz, Yxy};
use crate::convert::Convert;
use crate::error::ColorError;
use crate::format::ColorFormat;
use crate::names;

/// Largest packed value.
const MAX: i64 = 0xFFFFFF;

/// A packed `0xRRGGBB` color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "i64", into = "i64")]
pub struct Hex(u32);

impl Hex {
    /// Build from a packed value in [0, 0xFFFFFF].
    pub fn new(hex: i64) -> Result<Self, ColorError> {
        if !(0..=MAX).contains(&hex) {
            return Err(ColorError::out_of_range("hex", hex as f64));
        }
        Ok(Self(hex as u32))
    }

    /// Callers guarantee `packed` fits in 24 bits.
    pub(crate) fn from_packed(packed: u32) -> Self {
        Self(packed & 0xFFFFFF)
    }

    /// The packed value.
    pub fn value(&self) -> u32 {
        self.0
    }

    /// Parse a color name (case-insensitive), a six-digit hex string or a
    /// three-digit shorthand, with or without a leading `#`.
    ///
    /// ```text
    /// "red"     → 0xFF0000
    /// "DB09e4"  → 0xDB09E4
    /// "#fFf"    → 0xFFFFFF
    /// ```
    pub fn parse(input: &str) -> Result<Self, ColorError> {
        let lower = input.to_lowercase();
        if let Some(packed) = names::lookup(&lower) {
            return Ok(Self(packed));
        }

        let digits = lower.strip_prefix('#').unwrap_or(lower.as_str());
        let chars: Vec<char> = digits.chars().collect();
        let expanded: String = if chars.len() == 3 {
            chars.iter().flat_map(|&c| [c, c]).collect()
        } else {
            digits.to_string()
        };

        if expanded.len() != 6 || !expanded.chars().all(|c| c.is_ascii_hexdigit()) {
            tracing::debug!("rejecting color string {input:?}");
            return Err(ColorError::InvalidHexString(digits.to_string()));
        }

        u32::from_str_radix(&expanded, 16)
            .map(Self)
            .map_err(|_| ColorError::InvalidHexString(digits.to_string()))
    }

    /// The dictionary name of this exact color, if it has one.
    ///
    /// When several names share a value the last one in dictionary order is
    /// returned.
    pub fn color_name(&self) -> Option<&'static str> {
        names::reverse_lookup(self.0)
    }
}

impl TryFrom<i64> for Hex {
    type Error = ColorError;

    fn try_from(hex: i64) -> Result<Self, Self::Error> {
        Hex::new(hex)
    }
}

impl From<Hex> for i64 {
    fn from(hex: Hex) -> Self {
        hex.0 as i64
    }
}

impl FromStr for Hex {
    type Err = ColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Hex::parse(s)
    }
}

impl Convert for Hex {
    fn format(&self) -> ColorFormat {
        ColorFormat::Hex
    }

    fn to_hex(&self) -> Hex {
        *self
    }

    fn to_rgb(&self) -> Rgb {
        let red = (self.0 & 0xFF0000) >> 16;
        let green = (self.0 & 0x00FF00) >> 8;
        let blue = self.0 & 0x0000FF;
        Rgb::clamped(red as f64, green as f64, blue as f64)
    }

    fn to_xyz(&self) -> Xyz {
        self.to_rgb().to_xyz()
    }

    fn to_yxy(&self) -> Yxy {
        self.to_rgb().to_yxy()
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

impl fmt::Display for Hex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:06X}", self.0)
    }
}
