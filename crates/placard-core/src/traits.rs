//! The contracts that tie fonts, surfaces and encoders together
//!
//! - [`FontRef`] - A font loaded at one fixed size: measures and rasterizes text
//! - [`Surface`] - Something the layout engine can paint on
//! - [`Exporter`] - Where finished bitmaps become files

use crate::{
    error::Result,
    types::{BitmapData, Point, TextExtent, TextMask},
    Color,
};
use std::sync::Arc;

/// Shared, immutable handle to a resolved font.
///
/// Resolved once at startup and shared read-only by every render, on any
/// number of threads.
pub type FontHandle = Arc<dyn FontRef>;

/// A font at a fixed pixel size
///
/// Painting a string at `origin` puts the font's ascender line at
/// `origin.y` and the pen start at `origin.x`. Measurement and
/// rasterization must agree on that convention, since the layout engine
/// centers with one and paints with the other.
///
/// ```ignore
/// struct BoxFont;
///
/// impl FontRef for BoxFont {
///     fn name(&self) -> &str { "box" }
///     fn size(&self) -> f32 { 10.0 }
///     fn line_height(&self) -> f32 { 10.0 }
///     fn measure(&self, text: &str) -> TextExtent {
///         TextExtent::new(text.chars().count() as f32 * 10.0, 10.0)
///     }
///     fn rasterize(&self, _text: &str, _origin: Point) -> Option<TextMask> {
///         None
///     }
/// }
/// ```
pub trait FontRef: Send + Sync {
    /// Where this font came from, used in logs
    fn name(&self) -> &str;

    /// Requested pixel size
    fn size(&self) -> f32;

    /// Height reported for strings with no ink (empty or all whitespace)
    fn line_height(&self) -> f32;

    /// Tightest painted bounding box of `text`
    ///
    /// Never fails. An empty string measures as `(0, line_height)`.
    fn measure(&self, text: &str) -> TextExtent;

    /// Coverage mask for `text` painted at `origin`, in canvas pixels
    ///
    /// `None` when the string has no ink.
    fn rasterize(&self, text: &str, origin: Point) -> Option<TextMask>;

    /// True for the built-in font substituted when no candidate resolved
    fn is_fallback(&self) -> bool {
        false
    }
}

/// A paintable raster target
///
/// The canvas implements this for real output; tests implement it to
/// record draw calls.
pub trait Surface {
    /// Surface width in pixels
    fn width(&self) -> u32;

    /// Surface height in pixels
    fn height(&self) -> u32;

    /// Paint one line of text with its pen start and ascender line at `origin`
    fn draw_text(&mut self, text: &str, font: &dyn FontRef, origin: Point, color: Color);

    /// Paint a one pixel high horizontal rule from `x0` to `x1`
    fn draw_hline(&mut self, x0: f32, x1: f32, y: f32, color: Color);

    /// Composite an RGBA image with its top-left corner at `(x, y)`
    fn paste(&mut self, image: &BitmapData, x: i32, y: i32);
}

/// The final step: pixels become files
pub trait Exporter: Send + Sync {
    /// Who are you?
    fn name(&self) -> &'static str;

    /// Encode the finished bitmap as bytes
    fn export(&self, bitmap: &BitmapData) -> Result<Vec<u8>>;

    /// What file extension should be used?
    fn extension(&self) -> &'static str;

    /// What MIME type identifies your format?
    fn mime_type(&self) -> &'static str;
}
