//! Placard Layout: from a guest's name to a painted card
//!
//! Three layers, each usable on its own:
//!
//! - [`wrap_text`] breaks a string into lines by measured width
//! - [`draw_centered`] and [`draw_centered_at`] paint lines centered on the
//!   surface or on an anchor
//! - [`LayoutEngine`] runs the fixed card sequence, threading a
//!   [`LayoutCursor`](placard_core::LayoutCursor) from block to block
//!
//! Nothing here can fail. Fonts were resolved (with fallback) before the
//! engine sees them, and degenerate text has defined output.
//!
//! ```ignore
//! let fonts = FontResolver::new().resolve_plan(&FontPlan::default());
//! let engine = LayoutEngine::new(LayoutConfig::default(), InvitationContent::default());
//! let mut canvas = Canvas::from_config(&engine.config().canvas)?;
//! engine.compose(&mut canvas, "Anh Minh", &fonts, None);
//! ```

pub mod blocks;
pub mod content;
pub mod engine;
pub mod wrap;

pub use blocks::{draw_centered, draw_centered_at, TextBlock, DEFAULT_LINE_SPACING};
pub use content::{DateColumn, FamilyColumn, InvitationContent};
pub use engine::LayoutEngine;
pub use wrap::wrap_text;

#[cfg(test)]
mod proptests;
