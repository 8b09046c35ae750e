//! Color value types, one per format.
//!
//! Each type owns the primitive conversion edges leaving it and composes
//! the rest through a hub. Only [`Rgb`] and [`Hex`] validate their
//! coordinates; every other constructor accepts any real number.

mod cmy;
mod cmyk;
mod hex;
mod hsl;
mod hsv;
mod lab;
mod lch;
mod rgb;
pub mod transfer;
mod xyz;
mod yxy;

use std::fmt;

pub use cmy::Cmy;
pub use cmyk::Cmyk;
pub use hex::Hex;
pub use hsl::Hsl;
pub use hsv::Hsv;
pub use lab::CieLab;
pub use lch::CieLch;
pub use rgb::Rgb;
pub use xyz::{REFERENCE_WHITE, Xyz};
pub use yxy::Yxy;

/// Write coordinates with four decimals, separated by `", "`.
fn write_coords(f: &mut fmt::Formatter<'_>, coords: &[f64]) -> fmt::Result {
    for (i, c) in coords.iter().enumerate() {
        if i > 0 {
            f.write_str(", ")?;
        }
        write!(f, "{c:.4}")?;
    }
    Ok(())
}
