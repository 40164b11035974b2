//! The optional graphic at the top of the card

use std::path::Path;

use image::imageops::FilterType;

use placard_core::{
    error::{RenderError, Result},
    types::{BitmapData, BitmapFormat},
};

/// A decoded monogram, already scaled to its target width
///
/// Decoded once per batch and pasted into every card.
#[derive(Debug, Clone, PartialEq)]
pub struct Monogram {
    bitmap: BitmapData,
}

impl Monogram {
    /// Loads and scales the image at `path`, or None when it is missing
    /// or cannot be decoded
    pub fn load(path: impl AsRef<Path>, target_width: u32) -> Option<Self> {
        let path = path.as_ref();
        if !path.is_file() {
            log::warn!("Monogram {} not found; cards will omit it", path.display());
            return None;
        }

        match Self::decode(path, target_width) {
            Ok(monogram) => {
                log::info!(
                    "Monogram {} scaled to {}x{}",
                    path.display(),
                    monogram.width(),
                    monogram.height()
                );
                Some(monogram)
            },
            Err(e) => {
                log::warn!("Monogram {} unusable: {}; cards will omit it", path.display(), e);
                None
            },
        }
    }

    /// Strict variant of [`Monogram::load`] that reports why it failed
    pub fn decode(path: impl AsRef<Path>, target_width: u32) -> Result<Self> {
        let image = image::open(path.as_ref())
            .map_err(|e| RenderError::ImageDecode(e.to_string()))?
            .to_rgba8();
        Self::from_rgba(image, target_width)
    }

    /// Scales decoded RGBA pixels to `target_width`, keeping the aspect ratio
    ///
    /// The height is rounded down, never below one pixel.
    pub fn from_rgba(image: image::RgbaImage, target_width: u32) -> Result<Self> {
        let (width, height) = image.dimensions();
        if width == 0 || height == 0 || target_width == 0 {
            return Err(RenderError::InvalidDimensions { width, height }.into());
        }

        let target_height = scaled_height(width, height, target_width);
        let resized = image::imageops::resize(&image, target_width, target_height, FilterType::Lanczos3);

        Ok(Self {
            bitmap: BitmapData {
                width: target_width,
                height: target_height,
                format: BitmapFormat::Rgba8,
                data: resized.into_raw(),
            },
        })
    }

    pub fn width(&self) -> u32 {
        self.bitmap.width
    }

    pub fn height(&self) -> u32 {
        self.bitmap.height
    }

    /// Straight-alpha RGBA pixels
    pub fn bitmap(&self) -> &BitmapData {
        &self.bitmap
    }
}

/// `⌊height × target / width⌋`, at least 1
fn scaled_height(width: u32, height: u32, target_width: u32) -> u32 {
    ((height as u64 * target_width as u64) / width as u64).max(1) as u32
}
