//! A color in any of the ten formats.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::convert::Convert;
use crate::format::ColorFormat;
use crate::spaces::{CieLab, CieLch, Cmy, Cmyk, Hex, Hsl, Hsv, Rgb, Xyz, Yxy};

/// A color value tagged with its native format.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum Color {
    Hex(Hex),
    Rgb(Rgb),
    Xyz(Xyz),
    Yxy(Yxy),
    CieLab(CieLab),
    CieLch(CieLch),
    Cmy(Cmy),
    Cmyk(Cmyk),
    Hsv(Hsv),
    Hsl(Hsl),
}

/// Forward a method call to whichever value the enum holds.
macro_rules! dispatch {
    ($self:ident, $c:ident => $body:expr) => {
        match $self {
            Color::Hex($c) => $body,
            Color::Rgb($c) => $body,
            Color::Xyz($c) => $body,
            Color::Yxy($c) => $body,
            Color::CieLab($c) => $body,
            Color::CieLch($c) => $body,
            Color::Cmy($c) => $body,
            Color::Cmyk($c) => $body,
            Color::Hsv($c) => $body,
            Color::Hsl($c) => $body,
        }
    };
}

impl Convert for Color {
    fn format(&self) -> ColorFormat {
        dispatch!(self, c => c.format())
    }

    fn to_hex(&self) -> Hex {
        dispatch!(self, c => c.to_hex())
    }

    fn to_rgb(&self) -> Rgb {
        dispatch!(self, c => c.to_rgb())
    }

    fn to_xyz(&self) -> Xyz {
        dispatch!(self, c => c.to_xyz())
    }

    fn to_yxy(&self) -> Yxy {
        dispatch!(self, c => c.to_yxy())
    }

    fn to_cielab(&self) -> CieLab {
        dispatch!(self, c => c.to_cielab())
    }

    fn to_cielch(&self) -> CieLch {
        dispatch!(self, c => c.to_cielch())
    }

    fn to_cmy(&self) -> Cmy {
        dispatch!(self, c => c.to_cmy())
    }

    fn to_cmyk(&self) -> Cmyk {
        dispatch!(self, c => c.to_cmyk())
    }

    fn to_hsv(&self) -> Hsv {
        dispatch!(self, c => c.to_hsv())
    }

    fn to_hsl(&self) -> Hsl {
        dispatch!(self, c => c.to_hsl())
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        dispatch!(self, c => fmt::Display::fmt(c, f))
    }
}

macro_rules! impl_from {
    ($($ty:ident),*) => {
        $(
            impl From<$ty> for Color {
                fn from(value: $ty) -> Self {
                    Color::$ty(value)
                }
            }
        )*
    };
}

impl_from!(Hex, Rgb, Xyz, Yxy, CieLab, CieLch, Cmy, Cmyk, Hsv, Hsl);
