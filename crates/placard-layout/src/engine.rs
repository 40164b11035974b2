//! The card, top to bottom
//!
//! [`LayoutEngine::compose`] runs a fixed sequence of steps. Each step takes
//! the cursor where it should start and returns the cursor where the next
//! one starts, gap included, so every step can be checked on its own.

use placard_core::{
    traits::Surface,
    types::BitmapData,
    Color, LayoutConfig, LayoutCursor,
};
use placard_fontdb::{FontRole, FontSet};

use crate::{
    blocks::{draw_centered, draw_centered_at, TextBlock},
    content::InvitationContent,
};

/// Lays out one card per guest from a shared theme and wording
#[derive(Debug, Clone, Default)]
pub struct LayoutEngine {
    config: LayoutConfig,
    content: InvitationContent,
}

impl LayoutEngine {
    pub fn new(config: LayoutConfig, content: InvitationContent) -> Self {
        Self { config, content }
    }

    pub fn config(&self) -> &LayoutConfig {
        &self.config
    }

    pub fn content(&self) -> &InvitationContent {
        &self.content
    }

    /// Paints the whole card for `guest` and returns the cursor below the
    /// closing line
    ///
    /// `monogram` must already be scaled to its display size.
    pub fn compose<S: Surface + ?Sized>(
        &self,
        surface: &mut S,
        guest: &str,
        fonts: &FontSet,
        monogram: Option<&BitmapData>,
    ) -> LayoutCursor {
        let cursor = LayoutCursor::at(self.config.spacing.top_margin);
        let cursor = self.draw_monogram(surface, monogram, cursor);
        let cursor = self.draw_title(surface, fonts, cursor);
        let cursor = self.draw_guest(surface, fonts, guest, cursor);
        let cursor = self.draw_divider(surface, cursor);
        let cursor = self.draw_ceremony(surface, fonts, cursor);
        let cursor = self.draw_couple(surface, fonts, cursor);
        let cursor = self.draw_time(surface, fonts, cursor);
        let cursor = self.draw_date_columns(surface, fonts, cursor);
        let cursor = self.draw_lunar_date(surface, fonts, cursor);
        let cursor = self.draw_venue(surface, fonts, cursor);
        let cursor = self.draw_families(surface, fonts, cursor);
        let end = self.draw_closing(surface, fonts, cursor);

        if end.y() > surface.height() as f32 {
            log::warn!(
                "Card for {:?} runs to y={} past the {}px canvas",
                guest,
                end.y(),
                surface.height()
            );
        }
        end
    }

    fn centered<S: Surface + ?Sized>(
        &self,
        surface: &mut S,
        fonts: &FontSet,
        role: FontRole,
        text: &str,
        color: Color,
        cursor: LayoutCursor,
    ) -> LayoutCursor {
        let block = TextBlock::new(text, &**fonts.get(role), color)
            .line_spacing(self.config.spacing.line_spacing);
        draw_centered(surface, &block, cursor)
    }

    /// Pastes the monogram centered at the cursor; only a gap when absent
    pub fn draw_monogram<S: Surface + ?Sized>(
        &self,
        surface: &mut S,
        monogram: Option<&BitmapData>,
        cursor: LayoutCursor,
    ) -> LayoutCursor {
        let spacing = &self.config.spacing;
        let Some(image) = monogram else {
            return cursor.advance(spacing.missing_monogram_gap);
        };

        let x = (surface.width() as i32 - image.width as i32) / 2;
        surface.paste(image, x, cursor.y() as i32);
        cursor.advance(image.height as f32 + spacing.monogram_gap)
    }

    pub fn draw_title<S: Surface + ?Sized>(
        &self,
        surface: &mut S,
        fonts: &FontSet,
        cursor: LayoutCursor,
    ) -> LayoutCursor {
        let color = self.config.palette.text;
        self.centered(surface, fonts, FontRole::Header, &self.content.title, color, cursor)
            .advance(self.config.spacing.after_title)
    }

    /// The guest's name, wrapped inside the canvas margins
    pub fn draw_guest<S: Surface + ?Sized>(
        &self,
        surface: &mut S,
        fonts: &FontSet,
        guest: &str,
        cursor: LayoutCursor,
    ) -> LayoutCursor {
        let spacing = &self.config.spacing;
        let block = TextBlock::new(guest, &**fonts.get(FontRole::Guest), self.config.palette.text_dark)
            .max_width(surface.width() as f32 - spacing.guest_width_inset)
            .line_spacing(spacing.guest_line_spacing);
        draw_centered(surface, &block, cursor).advance(spacing.after_guest)
    }

    /// A plain centered rule, not text
    pub fn draw_divider<S: Surface + ?Sized>(
        &self,
        surface: &mut S,
        cursor: LayoutCursor,
    ) -> LayoutCursor {
        let spacing = &self.config.spacing;
        let cursor = cursor.advance(spacing.divider_margin);
        let width = surface.width() as f32;
        surface.draw_hline(
            (width - spacing.divider_width) / 2.0,
            (width + spacing.divider_width) / 2.0,
            cursor.y(),
            self.config.palette.divider,
        );
        cursor.advance(spacing.after_divider)
    }

    pub fn draw_ceremony<S: Surface + ?Sized>(
        &self,
        surface: &mut S,
        fonts: &FontSet,
        cursor: LayoutCursor,
    ) -> LayoutCursor {
        let spacing = &self.config.spacing;
        let color = self.config.palette.text;
        let mut cursor = cursor;
        for (idx, line) in self.content.ceremony.iter().enumerate() {
            if idx > 0 {
                cursor = cursor.advance(spacing.between_ceremony_lines);
            }
            cursor = self.centered(surface, fonts, FontRole::Small, line, color, cursor);
        }
        cursor.advance(spacing.after_ceremony)
    }

    /// Both names with the ampersand as its own centered block between them
    pub fn draw_couple<S: Surface + ?Sized>(
        &self,
        surface: &mut S,
        fonts: &FontSet,
        cursor: LayoutCursor,
    ) -> LayoutCursor {
        let spacing = &self.config.spacing;
        let accent = self.config.palette.accent;
        let content = &self.content;

        let cursor = self.centered(surface, fonts, FontRole::Couple, &content.bride, accent, cursor);
        let cursor = cursor.advance(spacing.ampersand_gap);
        let cursor = self.centered(surface, fonts, FontRole::Amp, &content.ampersand, accent, cursor);
        let cursor = cursor.advance(spacing.ampersand_gap);
        self.centered(surface, fonts, FontRole::Couple, &content.groom, accent, cursor)
            .advance(spacing.after_couple)
    }

    pub fn draw_time<S: Surface + ?Sized>(
        &self,
        surface: &mut S,
        fonts: &FontSet,
        cursor: LayoutCursor,
    ) -> LayoutCursor {
        let color = self.config.palette.text;
        self.centered(surface, fonts, FontRole::Small, &self.content.time, color, cursor)
            .advance(self.config.spacing.after_time)
    }

    /// Horizontal centers of `count` equal columns, centered as a group
    pub fn column_centers(&self, canvas_width: f32, count: usize) -> Vec<f32> {
        let spacing = &self.config.spacing;
        let column = spacing.date_column_width;
        let gap = spacing.date_column_gap;
        let total = column * count as f32 + gap * count.saturating_sub(1) as f32;
        let start_x = (canvas_width - total) / 2.0;

        (0..count)
            .map(|idx| start_x + column / 2.0 + idx as f32 * (column + gap))
            .collect()
    }

    /// Label-over-value columns
    ///
    /// Row heights come from the first column's label and value so every
    /// column shares one baseline grid.
    pub fn draw_date_columns<S: Surface + ?Sized>(
        &self,
        surface: &mut S,
        fonts: &FontSet,
        cursor: LayoutCursor,
    ) -> LayoutCursor {
        let spacing = &self.config.spacing;
        let palette = &self.config.palette;
        let label_font = &**fonts.get(FontRole::Label);
        let date_font = &**fonts.get(FontRole::Date);

        let columns = &self.content.date;
        let label_height = self.label_height(fonts);
        let value_height = columns
            .first()
            .map(|c| date_font.measure(&c.value).height)
            .unwrap_or_else(|| date_font.line_height());

        let y = cursor.y();
        let value_y = y + label_height + spacing.label_inset;
        let centers = self.column_centers(surface.width() as f32, columns.len());
        for (column, center_x) in columns.iter().zip(centers) {
            draw_centered_at(surface, &column.label, label_font, palette.text, center_x, y);
            draw_centered_at(surface, &column.value, date_font, palette.text_dark, center_x, value_y);
        }

        LayoutCursor::at(value_y + value_height + spacing.after_date)
    }

    pub fn draw_lunar_date<S: Surface + ?Sized>(
        &self,
        surface: &mut S,
        fonts: &FontSet,
        cursor: LayoutCursor,
    ) -> LayoutCursor {
        let color = self.config.palette.text;
        self.centered(surface, fonts, FontRole::Small, &self.content.lunar_date, color, cursor)
            .advance(self.config.spacing.after_lunar_date)
    }

    /// Venue header, name in its own font, then the address
    pub fn draw_venue<S: Surface + ?Sized>(
        &self,
        surface: &mut S,
        fonts: &FontSet,
        cursor: LayoutCursor,
    ) -> LayoutCursor {
        let spacing = &self.config.spacing;
        let palette = &self.config.palette;
        let content = &self.content;

        let cursor = self.centered(surface, fonts, FontRole::Small, &content.venue_header, palette.text, cursor);
        let cursor = cursor.advance(spacing.venue_line_gap);
        let cursor = self.centered(surface, fonts, FontRole::Venue, &content.venue_name, palette.text_dark, cursor);
        let cursor = cursor.advance(spacing.venue_line_gap);
        self.centered(surface, fonts, FontRole::Small, &content.venue_address, palette.text, cursor)
            .advance(spacing.after_venue)
    }

    /// Two columns anchored at fractions of the canvas width
    ///
    /// Detail lines are stacked on a grid derived from the height of the
    /// bride's side first line, so both columns stay level.
    pub fn draw_families<S: Surface + ?Sized>(
        &self,
        surface: &mut S,
        fonts: &FontSet,
        cursor: LayoutCursor,
    ) -> LayoutCursor {
        let spacing = &self.config.spacing;
        let color = self.config.palette.text;
        let label_font = &**fonts.get(FontRole::Label);
        let name_font = &**fonts.get(FontRole::Small);

        let width = surface.width() as f32;
        let columns = [
            (&self.content.bride_family, width * spacing.family_left_anchor),
            (&self.content.groom_family, width * spacing.family_right_anchor),
        ];

        let y = cursor.y();
        for (family, anchor) in &columns {
            draw_centered_at(surface, &family.label, label_font, color, *anchor, y);
        }

        let label_height = self.label_height(fonts);
        let rows = columns
            .iter()
            .map(|(family, _)| family.lines.len())
            .max()
            .unwrap_or(0);
        if rows == 0 {
            return LayoutCursor::at(y + label_height + spacing.after_family);
        }

        let name_height = columns
            .iter()
            .find_map(|(family, _)| family.lines.first())
            .map(|line| name_font.measure(line).height)
            .unwrap_or_else(|| name_font.line_height());

        let mut row_y = y + label_height + spacing.label_inset;
        for row in 0..rows {
            if row > 0 {
                row_y += name_height + spacing.family_line_gap;
            }
            for (family, anchor) in &columns {
                if let Some(line) = family.lines.get(row) {
                    draw_centered_at(surface, line, name_font, color, *anchor, row_y);
                }
            }
        }

        LayoutCursor::at(row_y + name_height + spacing.after_family)
    }

    /// The last line; the returned cursor is its bottom edge
    pub fn draw_closing<S: Surface + ?Sized>(
        &self,
        surface: &mut S,
        fonts: &FontSet,
        cursor: LayoutCursor,
    ) -> LayoutCursor {
        let color = self.config.palette.text;
        self.centered(surface, fonts, FontRole::Small, &self.content.closing, color, cursor)
    }

    /// Height of the first date label, shared by every labelled row
    fn label_height(&self, fonts: &FontSet) -> f32 {
        let label_font = fonts.get(FontRole::Label);
        match self.content.date.first() {
            Some(column) => label_font.measure(&column.label).height,
            None => label_font.line_height(),
        }
    }
}
