//! Render command: one card for one guest

use std::fs;
use std::time::Instant;

use anyhow::{Context, Result};

use placard_core::Exporter;
use placard_export::PngExporter;

use super::CardRenderer;
use crate::cli::RenderArgs;

pub fn run(args: &RenderArgs) -> Result<()> {
    let start = Instant::now();
    let renderer = CardRenderer::from_style(&args.style)?;

    let bitmap = renderer.render(&args.name)?;
    let bytes = PngExporter::new()
        .export(&bitmap)
        .context("Failed to encode card")?;

    if let Some(parent) = args.output.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create {}", parent.display()))?;
    }
    fs::write(&args.output, &bytes)
        .with_context(|| format!("Failed to write {}", args.output.display()))?;

    log::info!("Rendered in {:.1?}", start.elapsed());
    println!(
        "Wrote {} ({}x{}, {} bytes)",
        args.output.display(),
        bitmap.width,
        bitmap.height,
        bytes.len()
    );
    Ok(())
}
