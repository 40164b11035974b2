//! Skia Canvas - the raster surface a card is painted on
//!
//! A [`Canvas`] is a fixed-size tiny-skia pixmap filled with an opaque
//! background. The layout engine paints on it through the
//! [`Surface`] trait: text arrives as coverage masks from the font and is
//! composited in the fill color, rules are filled as one pixel rectangles,
//! and the monogram is pasted using its own alpha.
//!
//! Pixels are kept premultiplied while painting and are demultiplied once,
//! when the finished card is turned into an opaque RGB bitmap.

use tiny_skia::{Paint, Pixmap, Rect, Transform};

use placard_core::{
    config::CanvasConfig,
    error::{RenderError, Result},
    traits::{FontRef, Surface},
    types::{BitmapData, BitmapFormat, Point, TextMask},
    Color,
};

pub mod monogram;

pub use monogram::Monogram;

/// One card's worth of pixels
pub struct Canvas {
    pixmap: Pixmap,
}

impl Canvas {
    /// Creates a canvas filled with `background`
    pub fn new(width: u32, height: u32, background: Color) -> Result<Self> {
        let mut pixmap =
            Pixmap::new(width, height).ok_or(RenderError::InvalidDimensions { width, height })?;
        pixmap.fill(tiny_skia::Color::from_rgba8(
            background.r,
            background.g,
            background.b,
            background.a,
        ));
        Ok(Self { pixmap })
    }

    pub fn from_config(config: &CanvasConfig) -> Result<Self> {
        Self::new(config.width, config.height, config.background)
    }

    /// Straight-alpha color of one pixel, None outside the canvas
    pub fn pixel(&self, x: u32, y: u32) -> Option<Color> {
        // Pixmap::pixel only bounds-checks the flat index
        if x >= self.pixmap.width() || y >= self.pixmap.height() {
            return None;
        }
        let px = self.pixmap.pixel(x, y)?.demultiply();
        Some(Color::rgba(px.red(), px.green(), px.blue(), px.alpha()))
    }

    /// Copy of the pixels as straight-alpha RGBA
    pub fn to_rgba(&self) -> BitmapData {
        let mut data = self.pixmap.data().to_vec();
        demultiply(&mut data);
        BitmapData {
            width: self.pixmap.width(),
            height: self.pixmap.height(),
            format: BitmapFormat::Rgba8,
            data,
        }
    }

    /// Finalizes the card as an opaque RGB bitmap
    pub fn into_bitmap(self) -> BitmapData {
        let width = self.pixmap.width();
        let height = self.pixmap.height();
        let mut rgba = self.pixmap.take();
        demultiply(&mut rgba);

        let data = rgba
            .chunks_exact(4)
            .flat_map(|px| [px[0], px[1], px[2]])
            .collect();

        BitmapData {
            width,
            height,
            format: BitmapFormat::Rgb8,
            data,
        }
    }

    /// Source-over one premultiplied pixel at canvas coordinates
    fn blend(&mut self, x: i32, y: i32, src: [u32; 4]) {
        let width = self.pixmap.width() as i32;
        let height = self.pixmap.height() as i32;
        if x < 0 || y < 0 || x >= width || y >= height || src[3] == 0 {
            return;
        }

        let idx = (y as usize * width as usize + x as usize) * 4;
        let canvas = self.pixmap.data_mut();
        let dst_a = canvas[idx + 3] as u32;
        let inv_a = 255 - src[3];

        canvas[idx] = ((src[0] + canvas[idx] as u32 * inv_a / 255).min(255)) as u8;
        canvas[idx + 1] = ((src[1] + canvas[idx + 1] as u32 * inv_a / 255).min(255)) as u8;
        canvas[idx + 2] = ((src[2] + canvas[idx + 2] as u32 * inv_a / 255).min(255)) as u8;
        canvas[idx + 3] = ((src[3] + dst_a * inv_a / 255).min(255)) as u8;
    }

    fn composite_mask(&mut self, mask: &TextMask, color: Color) {
        for my in 0..mask.height {
            for mx in 0..mask.width {
                let coverage = mask.coverage[my as usize * mask.width as usize + mx as usize] as u32;
                if coverage == 0 {
                    continue;
                }

                let src_a = coverage * color.a as u32 / 255;
                let src = [
                    color.r as u32 * src_a / 255,
                    color.g as u32 * src_a / 255,
                    color.b as u32 * src_a / 255,
                    src_a,
                ];
                self.blend(mask.left + mx as i32, mask.top + my as i32, src);
            }
        }
    }
}

impl Surface for Canvas {
    fn width(&self) -> u32 {
        self.pixmap.width()
    }

    fn height(&self) -> u32 {
        self.pixmap.height()
    }

    fn draw_text(&mut self, text: &str, font: &dyn FontRef, origin: Point, color: Color) {
        let Some(mask) = font.rasterize(text, origin) else {
            log::debug!("Canvas: nothing to paint for {:?}", text);
            return;
        };
        if mask.coverage.len() != mask.width as usize * mask.height as usize {
            log::warn!(
                "Canvas: {} returned a {}x{} mask with {} bytes; skipping",
                font.name(),
                mask.width,
                mask.height,
                mask.coverage.len()
            );
            return;
        }
        self.composite_mask(&mask, color);
    }

    fn draw_hline(&mut self, x0: f32, x1: f32, y: f32, color: Color) {
        // Both endpoints are painted
        let left = x0.min(x1).round();
        let right = x0.max(x1).round();
        let Some(rect) = Rect::from_xywh(left, y.round(), right - left + 1.0, 1.0) else {
            return;
        };

        let mut paint = Paint::default();
        paint.set_color_rgba8(color.r, color.g, color.b, color.a);
        paint.anti_alias = false;
        self.pixmap.fill_rect(rect, &paint, Transform::identity(), None);
    }

    fn paste(&mut self, image: &BitmapData, x: i32, y: i32) {
        if image.data.len() != image.expected_len() {
            log::warn!(
                "Canvas: pasted image is {}x{} but has {} bytes; skipping",
                image.width,
                image.height,
                image.data.len()
            );
            return;
        }

        let bpp = image.format.bytes_per_pixel();
        for iy in 0..image.height {
            for ix in 0..image.width {
                let idx = (iy as usize * image.width as usize + ix as usize) * bpp;
                let px = &image.data[idx..idx + bpp];
                let a = match image.format {
                    BitmapFormat::Rgba8 => px[3] as u32,
                    BitmapFormat::Rgb8 => 255,
                };
                let src = [
                    px[0] as u32 * a / 255,
                    px[1] as u32 * a / 255,
                    px[2] as u32 * a / 255,
                    a,
                ];
                self.blend(x + ix as i32, y + iy as i32, src);
            }
        }
    }
}

/// Premultiplied RGBA to straight RGBA, in place
fn demultiply(data: &mut [u8]) {
    for px in data.chunks_exact_mut(4) {
        let a = px[3];
        if a == 0 {
            px[0] = 0;
            px[1] = 0;
            px[2] = 0;
            continue;
        }
        let a_u = a as u32;
        px[0] = ((px[0] as u32 * 255 + a_u / 2) / a_u).min(255) as u8;
        px[1] = ((px[1] as u32 * 255 + a_u / 2) / a_u).min(255) as u8;
        px[2] = ((px[2] as u32 * 255 + a_u / 2) / a_u).min(255) as u8;
    }
}
