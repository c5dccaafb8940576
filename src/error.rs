//! Error types for icon generation

use thiserror::Error;

/// Result type alias for icon generation operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while building or writing an icon
#[derive(Error, Debug)]
pub enum Error {
    /// Width or height is zero, or a pixel buffer does not match the dimensions
    #[error("Invalid dimensions: {0}")]
    InvalidDimensions(String),

    /// Failed to encode PNG data
    #[error("Encoding failed: {0}")]
    Encode(String),

    /// Failed to read or parse a font
    #[error("Font load failed: {0}")]
    FontLoad(String),

    /// A label could not be measured with the selected font
    #[error("Text measurement failed: {0}")]
    TextMeasure(String),

    /// Failed to render or serialize a canvas
    #[error("Rendering failed: {0}")]
    Render(String),

    /// Invalid configuration
    #[error("Invalid configuration: {0}")]
    Config(String),

    /// I/O error while writing output
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

#[cfg(feature = "drawn")]
impl From<image::ImageError> for Error {
    fn from(err: image::ImageError) -> Self {
        Error::Render(err.to_string())
    }
}
