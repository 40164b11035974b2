//! Theme configuration: canvas, palette and spacing
//!
//! Every constant the layout engine uses lives here. The defaults
//! reproduce the reference card exactly; a JSON file can override any
//! subset of fields.

use crate::{
    error::{PlacardError, Result},
    Color,
};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Largest canvas side a theme may ask for, in pixels
pub const MAX_CANVAS_SIDE: u32 = 16_384;

/// Complete styling for one card design
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct LayoutConfig {
    pub canvas: CanvasConfig,
    pub palette: Palette,
    pub spacing: Spacing,
}

/// Fixed surface every card is painted on
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CanvasConfig {
    pub width: u32,
    pub height: u32,
    pub background: Color,
}

impl Default for CanvasConfig {
    fn default() -> Self {
        Self {
            width: 680,
            height: 960,
            background: Color::white(),
        }
    }
}

/// Fill colors by purpose
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Palette {
    /// Body text
    pub text: Color,
    /// Emphasised text: guest name, date values, venue name
    pub text_dark: Color,
    /// Couple names and the ampersand
    pub accent: Color,
    /// Horizontal rule under the guest name
    pub divider: Color,
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            text: Color::rgb(122, 111, 93),
            text_dark: Color::rgb(90, 79, 61),
            accent: Color::rgb(139, 157, 195),
            divider: Color::rgb(196, 181, 160),
        }
    }
}

/// Gaps and geometry between blocks, in canvas pixels
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Spacing {
    /// Cursor start
    pub top_margin: f32,
    /// Width the monogram is scaled to
    pub monogram_width: u32,
    /// Gap below a pasted monogram
    pub monogram_gap: f32,
    /// Gap used instead of the monogram when there is none
    pub missing_monogram_gap: f32,
    /// Space between wrapped lines of an ordinary block
    pub line_spacing: f32,
    /// Space between wrapped lines of the guest name
    pub guest_line_spacing: f32,
    /// Guest name wraps at canvas width minus this
    pub guest_width_inset: f32,
    pub after_title: f32,
    pub after_guest: f32,
    /// Extra space above the divider rule
    pub divider_margin: f32,
    pub divider_width: f32,
    pub after_divider: f32,
    pub between_ceremony_lines: f32,
    pub after_ceremony: f32,
    /// Gap on either side of the ampersand
    pub ampersand_gap: f32,
    pub after_couple: f32,
    pub after_time: f32,
    pub date_column_width: f32,
    pub date_column_gap: f32,
    /// Gap between a column label and the value or names below it
    pub label_inset: f32,
    pub after_date: f32,
    pub after_lunar_date: f32,
    pub venue_line_gap: f32,
    pub after_venue: f32,
    /// Family column centers as fractions of the canvas width
    pub family_left_anchor: f32,
    pub family_right_anchor: f32,
    /// Gap between stacked family detail lines
    pub family_line_gap: f32,
    pub after_family: f32,
}

impl Default for Spacing {
    fn default() -> Self {
        Self {
            top_margin: 40.0,
            monogram_width: 170,
            monogram_gap: 20.0,
            missing_monogram_gap: 20.0,
            line_spacing: 6.0,
            guest_line_spacing: 8.0,
            guest_width_inset: 120.0,
            after_title: 20.0,
            after_guest: 25.0,
            divider_margin: 15.0,
            divider_width: 500.0,
            after_divider: 25.0,
            between_ceremony_lines: 10.0,
            after_ceremony: 28.0,
            ampersand_gap: 6.0,
            after_couple: 26.0,
            after_time: 12.0,
            date_column_width: 100.0,
            date_column_gap: 48.0,
            label_inset: 8.0,
            after_date: 12.0,
            after_lunar_date: 24.0,
            venue_line_gap: 8.0,
            after_venue: 24.0,
            family_left_anchor: 0.25,
            family_right_anchor: 0.75,
            family_line_gap: 4.0,
            after_family: 26.0,
        }
    }
}

impl LayoutConfig {
    /// Read a theme from a JSON file; missing fields keep their defaults
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path)?;
        let config: LayoutConfig = serde_json::from_str(&raw).map_err(|e| {
            PlacardError::ConfigError(format!("{}: {}", path.display(), e))
        })?;
        config.validate()?;
        log::debug!("Loaded theme from {}", path.display());
        Ok(config)
    }

    /// Reject themes the engine cannot paint
    pub fn validate(&self) -> Result<()> {
        if self.canvas.width == 0 || self.canvas.height == 0 {
            return Err(PlacardError::ConfigError(format!(
                "canvas must be non-empty, got {}x{}",
                self.canvas.width, self.canvas.height
            )));
        }
        if self.canvas.width > MAX_CANVAS_SIDE || self.canvas.height > MAX_CANVAS_SIDE {
            return Err(PlacardError::ConfigError(format!(
                "canvas sides are limited to {}px, got {}x{}",
                MAX_CANVAS_SIDE, self.canvas.width, self.canvas.height
            )));
        }
        if self.spacing.monogram_width == 0 {
            return Err(PlacardError::ConfigError(
                "monogram_width must be positive".into(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_reference_card() {
        let config = LayoutConfig::default();
        assert_eq!((config.canvas.width, config.canvas.height), (680, 960));
        assert_eq!(config.spacing.guest_width_inset, 120.0);
        assert_eq!(config.palette.divider.to_hex(), "#c4b5a0");
        assert_eq!(config.spacing.date_column_width, 100.0);
        assert_eq!(config.spacing.date_column_gap, 48.0);
    }

    #[test]
    fn test_partial_json_keeps_defaults() {
        let config: LayoutConfig =
            serde_json::from_str(r##"{"canvas": {"width": 400}, "palette": {"accent": "#112233"}}"##)
                .unwrap();
        assert_eq!(config.canvas.width, 400);
        assert_eq!(config.canvas.height, 960);
        assert_eq!(config.palette.accent, Color::rgb(0x11, 0x22, 0x33));
        assert_eq!(config.palette.text, Palette::default().text);
        assert_eq!(config.spacing, Spacing::default());
    }

    #[test]
    fn test_validate_rejects_empty_canvas() {
        let mut config = LayoutConfig::default();
        config.canvas.height = 0;
        assert!(matches!(config.validate(), Err(PlacardError::ConfigError(_))));
    }

    #[test]
    fn test_validate_rejects_oversized_canvas() {
        let mut config = LayoutConfig::default();
        config.canvas.width = 40_000;
        config.canvas.height = 40_000;
        assert!(matches!(config.validate(), Err(PlacardError::ConfigError(_))));

        config.canvas.width = MAX_CANVAS_SIDE;
        config.canvas.height = MAX_CANVAS_SIDE;
        assert!(config.validate().is_ok());
    }
}
