//! How large a card appears once embedded in a spreadsheet
//!
//! The card keeps its aspect ratio against a fixed display height, small
//! enough that the row stays under the 409 point row limit.

use serde::{Deserialize, Serialize};

/// Display height of an embedded card, in pixels
pub const EMBED_HEIGHT: u32 = 540;

/// Points per pixel for row heights
const POINTS_PER_PIXEL: f32 = 0.75;

/// Display size of an embedded card
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmbedSize {
    pub width: u32,
    pub height: u32,
}

impl EmbedSize {
    /// Scales a canvas to `target_height`, rounding the width down
    pub fn for_canvas(canvas_width: u32, canvas_height: u32, target_height: u32) -> Self {
        let width = if canvas_height == 0 {
            0
        } else {
            (canvas_width as u64 * target_height as u64 / canvas_height as u64) as u32
        };
        Self {
            width,
            height: target_height,
        }
    }

    /// Row height in points that fits the card exactly
    pub fn row_height(&self) -> f32 {
        self.height as f32 * POINTS_PER_PIXEL
    }

    /// Column width in character units, two decimals, never below 10
    pub fn column_width(&self) -> f64 {
        let chars = (self.width as f64 - 5.0) / 7.0;
        ((chars * 100.0).round() / 100.0).max(10.0)
    }
}

impl Default for EmbedSize {
    fn default() -> Self {
        Self::for_canvas(680, 960, EMBED_HEIGHT)
    }
}
