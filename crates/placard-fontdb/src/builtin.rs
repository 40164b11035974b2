//! The font of last resort
//!
//! When no candidate file for a role can be loaded, the card still gets
//! painted with one of embedded-graphics' fixed-cell Latin-1 bitmap fonts,
//! picked by the requested pixel size. Characters outside Latin-1 paint as
//! the font's replacement glyph.

use embedded_graphics::{
    mono_font::{
        iso_8859_1::{FONT_10X20, FONT_6X10, FONT_7X13, FONT_8X13, FONT_9X15},
        MonoFont, MonoTextStyle,
    },
    pixelcolor::BinaryColor,
    prelude::*,
    text::{Baseline, Text},
};

use placard_core::{
    traits::FontRef,
    types::{Point as CanvasPoint, TextExtent, TextMask},
};

/// Built-in bitmap font, always available
#[derive(Clone, Copy)]
pub struct BuiltinFont {
    font: &'static MonoFont<'static>,
    size: f32,
}

impl BuiltinFont {
    /// Picks the closest cell size for a requested pixel size
    pub fn for_size(size: f32) -> Self {
        let font = if size >= 24.0 {
            &FONT_10X20
        } else if size >= 18.0 {
            &FONT_9X15
        } else if size >= 14.0 {
            &FONT_8X13
        } else if size >= 11.0 {
            &FONT_7X13
        } else {
            &FONT_6X10
        };
        Self { font, size }
    }

    /// Horizontal distance from one cell start to the next
    pub fn cell_advance(&self) -> u32 {
        self.font.character_size.width + self.font.character_spacing
    }

    pub fn cell_height(&self) -> u32 {
        self.font.character_size.height
    }

    fn style(&self) -> MonoTextStyle<'static, BinaryColor> {
        MonoTextStyle::new(self.font, BinaryColor::On)
    }
}

impl std::fmt::Debug for BuiltinFont {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BuiltinFont")
            .field("cell", &self.font.character_size)
            .field("size", &self.size)
            .finish()
    }
}

impl FontRef for BuiltinFont {
    fn name(&self) -> &str {
        "builtin"
    }

    fn size(&self) -> f32 {
        self.size
    }

    fn line_height(&self) -> f32 {
        self.cell_height() as f32
    }

    fn measure(&self, text: &str) -> TextExtent {
        let cells = text.chars().count() as u32;
        if cells == 0 {
            return TextExtent::new(0.0, self.line_height());
        }
        // No trailing spacing after the last cell
        let width = cells * self.cell_advance() - self.font.character_spacing;
        TextExtent::new(width as f32, self.line_height())
    }

    fn rasterize(&self, text: &str, origin: CanvasPoint) -> Option<TextMask> {
        let extent = self.measure(text);
        let width = extent.width as u32;
        let height = extent.height as u32;
        if width == 0 || height == 0 {
            return None;
        }

        let mut target = MaskTarget::new(width, height);
        Text::with_baseline(text, Point::zero(), self.style(), Baseline::Top)
            .draw(&mut target)
            .ok()?;

        if target.coverage.iter().all(|&c| c == 0) {
            return None;
        }

        Some(TextMask {
            left: origin.x.round() as i32,
            top: origin.y.round() as i32,
            width,
            height,
            coverage: target.coverage,
        })
    }

    fn is_fallback(&self) -> bool {
        true
    }
}

/// One-byte-per-pixel draw target that records lit pixels as full coverage
struct MaskTarget {
    size: Size,
    coverage: Vec<u8>,
}

impl MaskTarget {
    fn new(width: u32, height: u32) -> Self {
        Self {
            size: Size::new(width, height),
            coverage: vec![0; (width * height) as usize],
        }
    }
}

impl OriginDimensions for MaskTarget {
    fn size(&self) -> Size {
        self.size
    }
}

impl DrawTarget for MaskTarget {
    type Color = BinaryColor;
    type Error = core::convert::Infallible;

    fn draw_iter<I>(&mut self, pixels: I) -> Result<(), Self::Error>
    where
        I: IntoIterator<Item = Pixel<Self::Color>>,
    {
        let w = self.size.width as i32;
        let h = self.size.height as i32;
        for Pixel(point, color) in pixels {
            if point.x < 0 || point.y < 0 || point.x >= w || point.y >= h {
                continue;
            }
            let idx = (point.y as u32 * self.size.width + point.x as u32) as usize;
            self.coverage[idx] = match color {
                BinaryColor::On => 255,
                BinaryColor::Off => 0,
            };
        }
        Ok(())
    }
}
