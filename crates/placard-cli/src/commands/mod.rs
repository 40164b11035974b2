//! Command implementations and the card renderer they share

pub mod batch;
pub mod fonts;
pub mod render;

use anyhow::{Context, Result};

use placard_core::{types::BitmapData, LayoutConfig};
use placard_fontdb::{FontPlan, FontResolver, FontSet};
use placard_layout::{InvitationContent, LayoutEngine};
use placard_render_skia::{Canvas, Monogram};

use crate::cli::StyleArgs;

/// Loads the font plan from `path`, or the default plan
pub fn load_font_plan(path: Option<&std::path::Path>) -> Result<FontPlan> {
    match path {
        Some(path) => FontPlan::from_json_file(path)
            .with_context(|| format!("Failed to load font plan {}", path.display())),
        None => Ok(FontPlan::default()),
    }
}

/// Everything needed to paint cards, prepared once and shared by all of them
pub struct CardRenderer {
    engine: LayoutEngine,
    fonts: FontSet,
    monogram: Option<Monogram>,
}

impl CardRenderer {
    /// Loads theme, wording and fonts, and decodes the monogram
    pub fn from_style(style: &StyleArgs) -> Result<Self> {
        let config = match &style.theme {
            Some(path) => LayoutConfig::from_json_file(path)
                .with_context(|| format!("Failed to load theme {}", path.display()))?,
            None => LayoutConfig::default(),
        };
        let content = match &style.content {
            Some(path) => InvitationContent::from_json_file(path)
                .with_context(|| format!("Failed to load card content {}", path.display()))?,
            None => InvitationContent::default(),
        };

        let plan = load_font_plan(style.fonts.as_deref())?;
        let fonts = FontResolver::new().resolve_plan(&plan);
        let fallback = fonts.fallback_roles();
        if !fallback.is_empty() {
            log::warn!(
                "Using the built-in font for: {}",
                fallback
                    .iter()
                    .map(|role| role.as_str())
                    .collect::<Vec<_>>()
                    .join(", ")
            );
        }

        let monogram = style
            .monogram
            .as_ref()
            .and_then(|path| Monogram::load(path, config.spacing.monogram_width));

        Ok(Self {
            engine: LayoutEngine::new(config, content),
            fonts,
            monogram,
        })
    }

    pub fn config(&self) -> &LayoutConfig {
        self.engine.config()
    }

    /// Paints the card for `guest` and returns it as opaque RGB
    pub fn render(&self, guest: &str) -> Result<BitmapData> {
        let mut canvas = Canvas::from_config(&self.engine.config().canvas)
            .context("Failed to allocate canvas")?;
        self.engine.compose(
            &mut canvas,
            guest,
            &self.fonts,
            self.monogram.as_ref().map(Monogram::bitmap),
        );
        Ok(canvas.into_bitmap())
    }
}
