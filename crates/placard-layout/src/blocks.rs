//! Painting text relative to the canvas center or to an anchor

use placard_core::{
    traits::{FontRef, Surface},
    types::Point,
    Color, LayoutCursor,
};

use crate::wrap::wrap_text;

/// Gap between wrapped lines when a block does not set its own
pub const DEFAULT_LINE_SPACING: f32 = 6.0;

/// One or more lines painted with a single font, color and alignment
#[derive(Clone, Copy)]
pub struct TextBlock<'a> {
    pub text: &'a str,
    pub font: &'a dyn FontRef,
    pub color: Color,
    /// Wrap width; the surface width when None
    pub max_width: Option<f32>,
    pub line_spacing: f32,
}

impl<'a> TextBlock<'a> {
    pub fn new(text: &'a str, font: &'a dyn FontRef, color: Color) -> Self {
        Self {
            text,
            font,
            color,
            max_width: None,
            line_spacing: DEFAULT_LINE_SPACING,
        }
    }

    #[must_use]
    pub fn max_width(mut self, max_width: f32) -> Self {
        self.max_width = Some(max_width);
        self
    }

    #[must_use]
    pub fn line_spacing(mut self, line_spacing: f32) -> Self {
        self.line_spacing = line_spacing;
        self
    }
}

impl std::fmt::Debug for TextBlock<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TextBlock")
            .field("text", &self.text)
            .field("font", &self.font.name())
            .field("color", &self.color)
            .field("max_width", &self.max_width)
            .field("line_spacing", &self.line_spacing)
            .finish()
    }
}

/// Wraps `block` and paints each line centered on the surface width
///
/// Lines start at `cursor` and step down by their measured height plus the
/// block's line spacing. The returned cursor sits at the bottom of the last
/// line, without the trailing spacing, so the caller decides the gap to the
/// next block.
pub fn draw_centered<S: Surface + ?Sized>(
    surface: &mut S,
    block: &TextBlock<'_>,
    cursor: LayoutCursor,
) -> LayoutCursor {
    let canvas_width = surface.width() as f32;
    let lines = wrap_text(
        block.text,
        block.font,
        block.max_width.unwrap_or(canvas_width),
    );

    let mut y = cursor.y();
    for line in &lines {
        let extent = block.font.measure(line);
        let x = (canvas_width - extent.width) / 2.0;
        surface.draw_text(line, block.font, Point::new(x, y), block.color);
        y += extent.height + block.line_spacing;
    }

    LayoutCursor::at(y - block.line_spacing)
}

/// Paints a single unwrapped line centered on `anchor_x`
pub fn draw_centered_at<S: Surface + ?Sized>(
    surface: &mut S,
    text: &str,
    font: &dyn FontRef,
    color: Color,
    anchor_x: f32,
    y: f32,
) {
    let width = font.measure(text).width;
    surface.draw_text(text, font, Point::new(anchor_x - width / 2.0, y), color);
}
