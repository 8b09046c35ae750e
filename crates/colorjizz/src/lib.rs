//! ColorJizz: color values in ten formats, conversions between every pair
//! of them, and color-theory operations built on those conversions.
//!
//! Pure value types only; no image buffers or color management profiles.

pub mod color;
pub mod convert;
pub mod error;
pub mod format;
pub mod names;
pub mod palette;
pub mod spaces;
pub mod theory;

// Re-exports for convenience.
pub use crate::color::Color;
pub use crate::convert::Convert;
pub use crate::error::ColorError;
pub use crate::format::ColorFormat;
pub use crate::palette::Palette;
pub use crate::spaces::{CieLab, CieLch, Cmy, Cmyk, Hex, Hsl, Hsv, Rgb, Xyz, Yxy};
pub use crate::theory::ColorTheory;
