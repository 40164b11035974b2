//! Writing cards to a directory and describing them for the packager
//!
//! Every written card gets a [`ManifestEntry`]. The manifest is one JSON
//! object per line and carries everything a spreadsheet packager needs to
//! anchor the image: file name, display size, row height and column width.

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use placard_core::{
    error::{ExportError, Result},
    traits::Exporter,
    types::BitmapData,
};

use crate::{naming::asset_file_name, EmbedSize, PngExporter};

/// One line of `manifest.jsonl`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ManifestEntry {
    pub id: u64,
    pub name: String,
    pub file: String,
    pub embed_width: u32,
    pub embed_height: u32,
    pub row_height: f32,
    pub column_width: f64,
}

/// Encodes finished cards and writes them under one directory
pub struct AssetSink<E: Exporter = PngExporter> {
    dir: PathBuf,
    exporter: E,
    embed: EmbedSize,
}

impl AssetSink<PngExporter> {
    /// PNG sink, creating `dir` if needed
    pub fn png(dir: impl Into<PathBuf>, embed: EmbedSize) -> Result<Self> {
        Self::new(dir, PngExporter::new(), embed)
    }
}

impl<E: Exporter> AssetSink<E> {
    pub fn new(dir: impl Into<PathBuf>, exporter: E, embed: EmbedSize) -> Result<Self> {
        let dir = dir.into();
        fs::create_dir_all(&dir).map_err(|e| {
            ExportError::WriteFailed(format!("cannot create {}: {}", dir.display(), e))
        })?;
        Ok(Self { dir, exporter, embed })
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    pub fn file_name(&self, id: u64, name: &str) -> String {
        asset_file_name(id, name, self.exporter.extension())
    }

    /// Encodes `bitmap` and writes it as the card for record `id`
    pub fn write(&self, id: u64, name: &str, bitmap: &BitmapData) -> Result<ManifestEntry> {
        let file = self.file_name(id, name);
        let path = self.dir.join(&file);
        let bytes = self.exporter.export(bitmap)?;
        fs::write(&path, &bytes)
            .map_err(|e| ExportError::WriteFailed(format!("{}: {}", path.display(), e)))?;
        log::debug!("Wrote {} ({} bytes)", path.display(), bytes.len());

        Ok(ManifestEntry {
            id,
            name: name.to_string(),
            file,
            embed_width: self.embed.width,
            embed_height: self.embed.height,
            row_height: self.embed.row_height(),
            column_width: self.embed.column_width(),
        })
    }

    /// Writes `entries` as `manifest.jsonl` in the sink directory
    pub fn write_manifest(&self, entries: &[ManifestEntry]) -> Result<PathBuf> {
        let path = self.dir.join("manifest.jsonl");
        write_manifest(&path, entries)?;
        Ok(path)
    }
}

/// One JSON object per line, in the order given
pub fn write_manifest(path: &Path, entries: &[ManifestEntry]) -> Result<()> {
    let mut out = Vec::new();
    for entry in entries {
        serde_json::to_writer(&mut out, entry)
            .map_err(|e| ExportError::EncodingFailed(e.to_string()))?;
        writeln!(&mut out)?;
    }
    fs::write(path, out)
        .map_err(|e| ExportError::WriteFailed(format!("{}: {}", path.display(), e)))?;
    Ok(())
}
