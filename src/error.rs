//! Error types

use thiserror::Error;

/// Result type alias for splash rendering
pub type Result<T> = std::result::Result<T, Error>;

/// Errors raised while configuring, rendering or writing a splash image
///
/// Degenerate geometry is never an error; fills skip it silently.
#[derive(Error, Debug)]
pub enum Error {
    /// Color string is not `#RGB` or `#RRGGBB`
    #[error("Unsupported CSS hex color: {0:?}")]
    InvalidColor(String),

    /// Canvas or logo settings out of range
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// No font matched the request
    #[error("Font not found: {0}")]
    FontNotFound(String),

    /// FreeType failed to load a face or glyph
    #[error("Font error: {0}")]
    Font(#[from] freetype::Error),

    /// Writing an output file failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Encoding the preview image failed
    #[error("Image error: {0}")]
    Image(#[from] image::ImageError),
}
