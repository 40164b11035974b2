//! Where fonts come from: resolution, measurement and fallback
//!
//! Each text role on a card (header, guest name, date, ...) names an
//! ordered list of candidate font files and a pixel size. The resolver
//! walks that list once at startup and hands back an immutable
//! [`FontHandle`](placard_core::FontHandle); when nothing on the list can
//! be loaded it substitutes a built-in bitmap font instead of failing.
//!
//! ## Memory Management
//!
//! Fonts keep their raw bytes behind an `Arc` and create a parsing view
//! on demand, so one file shared by several roles at different sizes is
//! read from disk once.

use std::fs;
use std::path::Path;
use std::sync::Arc;

use kurbo::{BezPath, PathEl, Shape};
use skrifa::{
    instance::{LocationRef, Size},
    outline::{DrawSettings, OutlinePen},
    raw::TableProvider,
    FontRef as SkrifaFontRef, GlyphId, MetadataProvider,
};

use placard_core::{
    error::{FontLoadError, Result},
    traits::FontRef,
    types::{Point, TextExtent, TextMask},
};

pub mod builtin;
pub mod resolver;
pub mod roles;

pub use builtin::BuiltinFont;
pub use resolver::{resolve_font, FontResolver, MAX_FONT_FILE_SIZE};
pub use roles::{FontPlan, FontRole, FontSet, FontSpec};

/// An outline font (TrueType or CFF) loaded at one pixel size
pub struct Font {
    data: Arc<Vec<u8>>,
    face_index: u32,
    name: String,
    size: f32,
    units_per_em: u16,
    /// Distance from the ascender line to the baseline, in pixels
    ascent: f32,
    /// Baseline to descender line, in pixels (negative below the baseline)
    descent: f32,
}

impl Font {
    /// Opens a font file from disk at the given pixel size
    pub fn from_file(path: impl AsRef<Path>, size: f32) -> Result<Self> {
        let path = path.as_ref();
        let data = fs::read(path)
            .map_err(|_| FontLoadError::FileNotFound(path.display().to_string()))?;

        Self::from_data(Arc::new(data), path.display().to_string(), size)
    }

    /// Turns raw font bytes into a sized font
    pub fn from_data(data: Arc<Vec<u8>>, name: impl Into<String>, size: f32) -> Result<Self> {
        Self::from_data_index(data, 0, name, size)
    }

    /// Same as [`Font::from_data`] for a specific face of a TTC collection
    pub fn from_data_index(
        data: Arc<Vec<u8>>,
        face_index: u32,
        name: impl Into<String>,
        size: f32,
    ) -> Result<Self> {
        let name = name.into();
        let font_ref =
            SkrifaFontRef::from_index(&data, face_index).map_err(|_| FontLoadError::InvalidData)?;

        let units_per_em = font_ref
            .head()
            .map(|head| head.units_per_em())
            .unwrap_or(1000);

        let has_outlines =
            font_ref.glyf().is_ok() || font_ref.cff().is_ok() || font_ref.cff2().is_ok();
        if !has_outlines {
            return Err(FontLoadError::NoOutlines(name).into());
        }

        let metrics = font_ref.metrics(Size::new(size), LocationRef::default());
        let (ascent, descent) = if metrics.ascent > 0.0 {
            (metrics.ascent, metrics.descent)
        } else {
            // Broken vertical metrics; fall back to a typical Latin split
            (size * 0.8, -size * 0.2)
        };

        Ok(Font {
            data,
            face_index,
            name,
            size,
            units_per_em,
            ascent,
            descent,
        })
    }

    /// Returns the face index for TTC collections (0 for single fonts)
    pub fn face_index(&self) -> u32 {
        self.face_index
    }

    pub fn units_per_em(&self) -> u16 {
        self.units_per_em
    }

    /// Creates a FontRef on-demand for parsing operations
    fn font_ref(&self) -> Option<SkrifaFontRef<'_>> {
        SkrifaFontRef::from_index(&self.data, self.face_index).ok()
    }

    /// Lays `text` out left to right by advance width and collects every
    /// glyph outline into one y-down path.
    ///
    /// The pen starts at `origin.x`; the ascender line sits at `origin.y`.
    fn text_path(&self, text: &str, origin: Point) -> Option<BezPath> {
        let font = self.font_ref()?;
        let size = Size::new(self.size);
        let charmap = font.charmap();
        let glyph_metrics = font.glyph_metrics(size, LocationRef::default());
        let outlines = font.outline_glyphs();

        let mut path = BezPath::new();
        let mut pen_x = origin.x as f64;
        let baseline = (origin.y + self.ascent) as f64;

        for ch in text.chars() {
            let glyph_id = charmap.map(ch).unwrap_or(GlyphId::NOTDEF);
            if let Some(glyph) = outlines.get(glyph_id) {
                let mut pen = PathPen {
                    path: &mut path,
                    dx: pen_x,
                    baseline,
                };
                let settings = DrawSettings::unhinted(size, LocationRef::default());
                if let Err(err) = glyph.draw(settings, &mut pen) {
                    log::debug!("{}: outline for {:?} failed: {:?}", self.name, ch, err);
                }
            }
            pen_x += glyph_metrics.advance_width(glyph_id).unwrap_or(0.0) as f64;
        }

        Some(path)
    }

    /// Pixel-aligned ink box of a path, or None when nothing would be painted
    fn ink_box(path: &BezPath) -> Option<kurbo::Rect> {
        let has_segments = path
            .elements()
            .iter()
            .any(|el| !matches!(el, PathEl::MoveTo(_) | PathEl::ClosePath));
        if !has_segments {
            return None;
        }

        let bbox = path.bounding_box();
        if !(bbox.x0.is_finite() && bbox.y0.is_finite() && bbox.x1.is_finite() && bbox.y1.is_finite())
        {
            return None;
        }
        let snapped = kurbo::Rect::new(
            bbox.x0.floor(),
            bbox.y0.floor(),
            bbox.x1.ceil(),
            bbox.y1.ceil(),
        );
        if snapped.width() <= 0.0 || snapped.height() <= 0.0 {
            return None;
        }
        Some(snapped)
    }
}

impl FontRef for Font {
    fn name(&self) -> &str {
        &self.name
    }

    fn size(&self) -> f32 {
        self.size
    }

    fn line_height(&self) -> f32 {
        (self.ascent - self.descent).ceil()
    }

    fn measure(&self, text: &str) -> TextExtent {
        self.text_path(text, Point::default())
            .as_ref()
            .and_then(Self::ink_box)
            .map(|rect| TextExtent::new(rect.width() as f32, rect.height() as f32))
            .unwrap_or_else(|| TextExtent::new(0.0, self.line_height()))
    }

    fn rasterize(&self, text: &str, origin: Point) -> Option<TextMask> {
        use tiny_skia::{FillRule, Paint, PathBuilder, Pixmap, Transform};

        let path = self.text_path(text, origin)?;
        let bbox = Self::ink_box(&path)?;
        let width = bbox.width() as u32;
        let height = bbox.height() as u32;

        // Translate kurbo's path format into tiny-skia's native format
        let mut builder = PathBuilder::new();
        for element in path.elements() {
            match *element {
                PathEl::MoveTo(p) => builder.move_to(p.x as f32, p.y as f32),
                PathEl::LineTo(p) => builder.line_to(p.x as f32, p.y as f32),
                PathEl::QuadTo(ctrl, end) => {
                    builder.quad_to(ctrl.x as f32, ctrl.y as f32, end.x as f32, end.y as f32)
                },
                PathEl::CurveTo(c1, c2, end) => builder.cubic_to(
                    c1.x as f32,
                    c1.y as f32,
                    c2.x as f32,
                    c2.y as f32,
                    end.x as f32,
                    end.y as f32,
                ),
                PathEl::ClosePath => builder.close(),
            }
        }
        let skia_path = builder.finish()?;

        let mut pixmap = Pixmap::new(width, height)?;
        let paint = Paint {
            anti_alias: true,
            ..Default::default()
        };
        // Shift so the pixel-aligned bbox lands at the pixmap origin
        let transform = Transform::from_translate(-bbox.x0 as f32, -bbox.y0 as f32);
        pixmap.fill_path(&skia_path, &paint, FillRule::Winding, transform, None);

        // Extract just the alpha channel
        let coverage = pixmap.data().chunks_exact(4).map(|px| px[3]).collect();

        log::debug!(
            "{}: rasterized {:?} into {}x{} at ({}, {})",
            self.name,
            text,
            width,
            height,
            bbox.x0,
            bbox.y0
        );

        Some(TextMask {
            left: bbox.x0 as i32,
            top: bbox.y0 as i32,
            width,
            height,
            coverage,
        })
    }
}

/// Collects skrifa outline commands into a kurbo path, flipping y so the
/// result is in canvas (y-down) coordinates.
struct PathPen<'a> {
    path: &'a mut BezPath,
    dx: f64,
    baseline: f64,
}

impl PathPen<'_> {
    fn map(&self, x: f32, y: f32) -> kurbo::Point {
        kurbo::Point::new(self.dx + x as f64, self.baseline - y as f64)
    }
}

impl OutlinePen for PathPen<'_> {
    fn move_to(&mut self, x: f32, y: f32) {
        let p = self.map(x, y);
        self.path.move_to(p);
    }

    fn line_to(&mut self, x: f32, y: f32) {
        let p = self.map(x, y);
        self.path.line_to(p);
    }

    fn quad_to(&mut self, cx0: f32, cy0: f32, x: f32, y: f32) {
        let c = self.map(cx0, cy0);
        let p = self.map(x, y);
        self.path.quad_to(c, p);
    }

    fn curve_to(&mut self, cx0: f32, cy0: f32, cx1: f32, cy1: f32, x: f32, y: f32) {
        let c0 = self.map(cx0, cy0);
        let c1 = self.map(cx1, cy1);
        let p = self.map(x, y);
        self.path.curve_to(c0, c1, p);
    }

    fn close(&mut self) {
        self.path.close_path();
    }
}
