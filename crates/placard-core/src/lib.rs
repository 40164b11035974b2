//! Placard Core: the shared vocabulary of the card renderer
//!
//! A card is composed in three hops: fonts are resolved once, the layout
//! engine paints every block onto a fixed-size surface while threading a
//! vertical cursor, and the finished bitmap is handed to an exporter.
//! This crate holds what all three agree on.
//!
//! ## The Traits
//!
//! - [`FontRef`] - A sized font that can measure and rasterize a string
//! - [`Surface`] - A raster target the layout engine paints on
//! - [`Exporter`] - Turns a finished bitmap into file bytes
//!
//! Styling lives in [`LayoutConfig`], an immutable value passed into the
//! engine so alternate themes and canvas sizes need no code changes.

pub mod config;
pub mod error;
pub mod traits;

pub use config::LayoutConfig;
pub use error::{PlacardError, Result};
pub use traits::{Exporter, FontHandle, FontRef, Surface};

use serde::{Deserialize, Serialize};

/// The data structures passed between fonts, layout and canvas
pub mod types {
    /// A position in canvas pixels, y growing downwards
    #[derive(Debug, Clone, Copy, PartialEq, Default)]
    pub struct Point {
        pub x: f32,
        pub y: f32,
    }

    impl Point {
        pub const fn new(x: f32, y: f32) -> Self {
            Self { x, y }
        }
    }

    /// Pixel size of a string's painted bounding box
    #[derive(Debug, Clone, Copy, PartialEq, Default)]
    pub struct TextExtent {
        pub width: f32,
        pub height: f32,
    }

    impl TextExtent {
        pub const fn new(width: f32, height: f32) -> Self {
            Self { width, height }
        }
    }

    /// Anti-aliased coverage for a painted string, positioned in canvas pixels
    #[derive(Debug, Clone, PartialEq)]
    pub struct TextMask {
        /// Canvas column of the mask's first pixel (may be negative)
        pub left: i32,
        /// Canvas row of the mask's first pixel (may be negative)
        pub top: i32,
        pub width: u32,
        pub height: u32,
        /// One byte of coverage per pixel, row-major
        pub coverage: Vec<u8>,
    }

    /// Raw pixel data
    #[derive(Debug, Clone, PartialEq)]
    pub struct BitmapData {
        pub width: u32,
        pub height: u32,
        pub format: BitmapFormat,
        pub data: Vec<u8>,
    }

    /// How pixels are arranged in the bitmap
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub enum BitmapFormat {
        /// Straight (non-premultiplied) alpha
        Rgba8,
        /// Opaque
        Rgb8,
    }

    impl BitmapFormat {
        pub const fn bytes_per_pixel(self) -> usize {
            match self {
                BitmapFormat::Rgba8 => 4,
                BitmapFormat::Rgb8 => 3,
            }
        }
    }

    impl BitmapData {
        /// Byte length the pixel buffer must have for its dimensions
        pub fn expected_len(&self) -> usize {
            self.width as usize * self.height as usize * self.format.bytes_per_pixel()
        }
    }
}

/// Running vertical offset where the next block begins painting
///
/// Draw steps take a cursor by value and hand back the advanced one, so a
/// step can be tested alone by comparing the cursor it returns with the one
/// it was given.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default)]
pub struct LayoutCursor(f32);

impl LayoutCursor {
    pub const fn at(y: f32) -> Self {
        Self(y)
    }

    pub const fn y(self) -> f32 {
        self.0
    }

    /// A new cursor `dy` pixels further down
    #[must_use]
    pub fn advance(self, dy: f32) -> Self {
        Self(self.0 + dy)
    }
}

/// Simple RGBA color that works everywhere
///
/// Serialized as `#rrggbb` (or `#rrggbbaa` when not opaque).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self::rgba(r, g, b, 255)
    }

    pub const fn black() -> Self {
        Self::rgb(0, 0, 0)
    }

    pub const fn white() -> Self {
        Self::rgb(255, 255, 255)
    }

    /// Parse `RRGGBB` or `RRGGBBAA`, with or without a leading `#`
    pub fn from_hex(hex: &str) -> Option<Self> {
        let hex = hex.trim().trim_start_matches('#');
        if !hex.is_ascii() {
            return None;
        }
        let channel = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).ok();
        match hex.len() {
            6 => Some(Self::rgb(channel(0)?, channel(2)?, channel(4)?)),
            8 => Some(Self::rgba(channel(0)?, channel(2)?, channel(4)?, channel(6)?)),
            _ => None,
        }
    }

    pub fn to_hex(self) -> String {
        if self.a == 255 {
            format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
        } else {
            format!("#{:02x}{:02x}{:02x}{:02x}", self.r, self.g, self.b, self.a)
        }
    }
}

impl TryFrom<String> for Color {
    type Error = String;

    fn try_from(value: String) -> std::result::Result<Self, Self::Error> {
        Color::from_hex(&value).ok_or_else(|| format!("invalid color '{}'", value))
    }
}

impl From<Color> for String {
    fn from(color: Color) -> Self {
        color.to_hex()
    }
}
