//! Named color palettes.
//!
//! A palette is stored on disk as a small JSON document whose entries go
//! through the same string parser as [`Hex::parse`]:
//!
//! ```text
//! { "name": "brand", "colors": ["#ff0000", "navy", "0af"] }
//! ```

use serde::{Deserialize, Serialize};

use crate::convert::Convert;
use crate::error::ColorError;
use crate::spaces::Hex;
use crate::theory::{ColorTheory, nearest_index, websafe_colors};

/// An ordered, named list of colors.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "PaletteDocument", into = "PaletteDocument")]
pub struct Palette {
    name: String,
    colors: Vec<Hex>,
}

/// Wire form of a [`Palette`].
#[derive(Serialize, Deserialize)]
struct PaletteDocument {
    name: String,
    colors: Vec<String>,
}

impl TryFrom<PaletteDocument> for Palette {
    type Error = ColorError;

    fn try_from(doc: PaletteDocument) -> Result<Self, Self::Error> {
        let colors = doc
            .colors
            .iter()
            .map(|entry| Hex::parse(entry))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self {
            name: doc.name,
            colors,
        })
    }
}

impl From<Palette> for PaletteDocument {
    fn from(palette: Palette) -> Self {
        Self {
            name: palette.name,
            colors: palette.colors.iter().map(|c| format!("#{c}")).collect(),
        }
    }
}

impl Palette {
    pub fn new(name: impl Into<String>, colors: Vec<Hex>) -> Self {
        Self {
            name: name.into(),
            colors,
        }
    }

    /// The 216 websafe colors in red-outer, blue-inner order.
    pub fn websafe() -> Self {
        let colors = websafe_colors().iter().map(|rgb| rgb.to_hex()).collect();
        Self::new("websafe", colors)
    }

    /// Parse a palette from its JSON document.
    pub fn from_json(json: &str) -> Result<Self, ColorError> {
        let palette: Self = serde_json::from_str(json)?;
        tracing::debug!(
            "loaded palette '{}' with {} colors",
            palette.name,
            palette.colors.len()
        );
        Ok(palette)
    }

    pub fn to_json(&self) -> Result<String, ColorError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn colors(&self) -> &[Hex] {
        &self.colors
    }

    pub fn len(&self) -> usize {
        self.colors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }

    /// The entry closest to `color` in CIELab, returned in `color`'s format.
    ///
    /// Ties go to the earliest entry; an empty palette yields `None`.
    pub fn nearest<T: ColorTheory>(&self, color: &T) -> Option<T> {
        color.match_palette(&self.colors)
    }

    /// Index of the entry closest to `color`.
    pub fn nearest_index<C: Convert + ?Sized>(&self, color: &C) -> Option<usize> {
        nearest_index(&color.to_cielab(), &self.colors)
    }
}
