//! PNG export format
//!
//! Finished cards are opaque RGB and are written losslessly with the
//! `image` crate.

use image::{ExtendedColorType, ImageEncoder};
use placard_core::{
    error::{ExportError, Result},
    traits::Exporter,
    types::{BitmapData, BitmapFormat},
};

/// Encode bitmap data to PNG format.
///
/// RGB bitmaps stay three-channel; RGBA bitmaps keep their alpha.
pub fn encode_bitmap_to_png(bitmap: &BitmapData) -> Result<Vec<u8>> {
    // Validate buffer size before processing
    let expected_size = bitmap.expected_len();
    if bitmap.data.len() != expected_size {
        return Err(ExportError::EncodingFailed(format!(
            "Buffer mismatch: expected {} bytes for {}x{} {:?}, got {}",
            expected_size,
            bitmap.width,
            bitmap.height,
            bitmap.format,
            bitmap.data.len()
        ))
        .into());
    }

    let color_type = match bitmap.format {
        BitmapFormat::Rgb8 => ExtendedColorType::Rgb8,
        BitmapFormat::Rgba8 => ExtendedColorType::Rgba8,
    };

    let mut png_data = Vec::new();
    let encoder = image::codecs::png::PngEncoder::new_with_quality(
        &mut png_data,
        image::codecs::png::CompressionType::Default,
        image::codecs::png::FilterType::Sub,
    );

    encoder
        .write_image(&bitmap.data, bitmap.width, bitmap.height, color_type)
        .map_err(|e| ExportError::EncodingFailed(format!("PNG encoding failed: {}", e)))?;

    Ok(png_data)
}

/// PNG exporter for finished cards
///
/// # Examples
///
/// ```
/// use placard_export::PngExporter;
/// let exporter = PngExporter::new();
/// ```
pub struct PngExporter;

impl PngExporter {
    /// Create a new PNG exporter
    pub fn new() -> Self {
        Self
    }
}

impl Exporter for PngExporter {
    fn name(&self) -> &'static str {
        "png"
    }

    fn export(&self, bitmap: &BitmapData) -> Result<Vec<u8>> {
        encode_bitmap_to_png(bitmap)
    }

    fn extension(&self) -> &'static str {
        "png"
    }

    fn mime_type(&self) -> &'static str {
        "image/png"
    }
}

impl Default for PngExporter {
    fn default() -> Self {
        Self::new()
    }
}
