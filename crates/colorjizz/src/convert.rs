//! The conversion graph.
//!
//! Every format can reach every other format. Only a handful of edges are
//! implemented with real formulas; the rest compose them through a hub:
//!
//! ```text
//!            Hex
//!             │
//!   CMYK ─ CMY ─ RGB ─ HSV ─ HSL
//!                 │
//!                XYZ ─ Yxy
//!                 │
//!              CIELab ─ CIELCh
//! ```
//!
//! Primitive edges live next to the value type that owns the source
//! coordinates (see [`crate::spaces`]). Converting a value to its own format
//! returns a copy of itself.

use crate::color::Color;
use crate::format::ColorFormat;
use crate::spaces::{CieLab, CieLch, Cmy, Cmyk, Hex, Hsl, Hsv, Rgb, Xyz, Yxy};

/// A color value that can be converted into any of the ten formats.
pub trait Convert {
    /// The format this value is native to.
    fn format(&self) -> ColorFormat;

    fn to_hex(&self) -> Hex;
    fn to_rgb(&self) -> Rgb;
    fn to_xyz(&self) -> Xyz;
    fn to_yxy(&self) -> Yxy;
    fn to_cielab(&self) -> CieLab;
    fn to_cielch(&self) -> CieLch;
    fn to_cmy(&self) -> Cmy;
    fn to_cmyk(&self) -> Cmyk;
    fn to_hsv(&self) -> Hsv;
    fn to_hsl(&self) -> Hsl;

    /// Convert into the format named by `format`.
    fn convert(&self, format: ColorFormat) -> Color {
        match format {
            ColorFormat::Hex => Color::Hex(self.to_hex()),
            ColorFormat::Rgb => Color::Rgb(self.to_rgb()),
            ColorFormat::Xyz => Color::Xyz(self.to_xyz()),
            ColorFormat::Yxy => Color::Yxy(self.to_yxy()),
            ColorFormat::CieLab => Color::CieLab(self.to_cielab()),
            ColorFormat::CieLch => Color::CieLch(self.to_cielch()),
            ColorFormat::Cmy => Color::Cmy(self.to_cmy()),
            ColorFormat::Cmyk => Color::Cmyk(self.to_cmyk()),
            ColorFormat::Hsv => Color::Hsv(self.to_hsv()),
            ColorFormat::Hsl => Color::Hsl(self.to_hsl()),
        }
    }
}
