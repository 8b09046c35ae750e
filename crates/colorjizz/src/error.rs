/// Errors raised while constructing or parsing colors.
///
/// Conversions between formats never fail; only validated constructors
/// (`Rgb`, `Hex`), string parsing and palette loading return this.
#[derive(Debug, thiserror::Error)]
pub enum ColorError {
    #[error("parameter {field} out of range ({value})")]
    OutOfRange { field: &'static str, value: f64 },
    #[error("parameter str is an invalid hex string ({0})")]
    InvalidHexString(String),
    #[error("invalid palette document: {0}")]
    Palette(#[from] serde_json::Error),
}

impl ColorError {
    pub(crate) fn out_of_range(field: &'static str, value: f64) -> Self {
        Self::OutOfRange { field, value }
    }
}
