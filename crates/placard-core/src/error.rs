//! Error types for Placard
//!
//! The layout engine itself is total and never produces these. They exist
//! for the edges: loading fonts and configuration, decoding graphics,
//! encoding and writing finished cards.

use thiserror::Error;

pub type Result<T> = std::result::Result<T, PlacardError>;

/// Main error type for Placard
#[derive(Debug, Error)]
pub enum PlacardError {
    #[error("Font loading failed: {0}")]
    FontLoad(#[from] FontLoadError),

    #[error("Rendering failed: {0}")]
    RenderingFailed(#[from] RenderError),

    #[error("Export failed: {0}")]
    ExportFailed(#[from] ExportError),

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Font loading errors
#[derive(Debug, Error)]
pub enum FontLoadError {
    #[error("Font file not found: {0}")]
    FileNotFound(String),

    #[error("Invalid font data")]
    InvalidData,

    #[error("Font has no outline glyphs: {0}")]
    NoOutlines(String),
}

/// Rendering errors
#[derive(Debug, Error)]
pub enum RenderError {
    #[error("Invalid dimensions: {width}x{height}")]
    InvalidDimensions { width: u32, height: u32 },

    #[error("Image decoding failed: {0}")]
    ImageDecode(String),
}

/// Export errors
#[derive(Debug, Error)]
pub enum ExportError {
    #[error("Encoding failed: {0}")]
    EncodingFailed(String),

    #[error("Write failed: {0}")]
    WriteFailed(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_nested_errors_convert_into_top_level() {
        let err: PlacardError = FontLoadError::FileNotFound("/nope.ttf".into()).into();
        assert!(matches!(err, PlacardError::FontLoad(_)));
        assert_eq!(
            err.to_string(),
            "Font loading failed: Font file not found: /nope.ttf"
        );

        let err: PlacardError = RenderError::InvalidDimensions {
            width: 0,
            height: 960,
        }
        .into();
        assert_eq!(err.to_string(), "Rendering failed: Invalid dimensions: 0x960");
    }
}
