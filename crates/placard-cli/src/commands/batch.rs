//! Batch command: one card per guest list record, in parallel
//!
//! Theme, fonts and monogram are prepared once and shared read-only by
//! the workers. A record that fails is reported and skipped; the others
//! still land on disk and in the manifest.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Instant;

use anyhow::{bail, Context, Result};
use rayon::prelude::*;

use placard_export::{AssetSink, EmbedSize, ManifestEntry, EMBED_HEIGHT};

use super::CardRenderer;
use crate::cli::BatchArgs;
use crate::records::{read_records, Record};

const PROGRESS_EVERY: usize = 50;

pub fn run(args: &BatchArgs) -> Result<()> {
    let start = Instant::now();

    if args.jobs > 0 {
        rayon::ThreadPoolBuilder::new()
            .num_threads(args.jobs)
            .build_global()
            .context("Failed to initialize thread pool")?;
    }

    let records = read_records(&args.input, args.format)?;
    let renderer = CardRenderer::from_style(&args.style)?;

    let canvas = &renderer.config().canvas;
    let embed = EmbedSize::for_canvas(canvas.width, canvas.height, EMBED_HEIGHT);
    let sink = AssetSink::png(&args.output, embed)
        .with_context(|| format!("Failed to prepare {}", args.output.display()))?;

    let total = records.len();
    let done = AtomicUsize::new(0);

    let results: Vec<(&Record, Result<ManifestEntry>)> = records
        .par_iter()
        .map(|record| {
            let result = renderer
                .render(&record.name)
                .and_then(|bitmap| {
                    sink.write(record.id, &record.name, &bitmap)
                        .map_err(anyhow::Error::from)
                });
            let n = done.fetch_add(1, Ordering::Relaxed) + 1;
            if n % PROGRESS_EVERY == 0 {
                log::info!("Generated {}/{}", n, total);
            }
            (record, result)
        })
        .collect();

    let mut entries = Vec::with_capacity(total);
    let mut failed = 0usize;
    for (record, result) in results {
        match result {
            Ok(entry) => entries.push(entry),
            Err(e) => {
                failed += 1;
                log::error!("Record {} ({}): {:#}", record.id, record.name, e);
            },
        }
    }

    let manifest = sink
        .write_manifest(&entries)
        .context("Failed to write manifest")?;

    log::info!("Batch finished in {:.1?}", start.elapsed());
    println!("Done. Generated {} invitations.", entries.len());
    println!("  Cards:    {}", sink.dir().display());
    println!("  Manifest: {}", manifest.display());

    if failed > 0 {
        bail!("{} of {} records failed", failed, total);
    }
    Ok(())
}
