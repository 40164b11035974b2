//! Export module for Placard
//!
//! Everything that happens to a card after it is painted: PNG encoding,
//! naming the file, and sizing it for embedding in a spreadsheet.

pub mod embed;
pub mod naming;
pub mod png;
pub mod sink;

pub use embed::{EmbedSize, EMBED_HEIGHT};
pub use naming::{asset_file_name, normalize_name, safe_slug};
pub use png::{encode_bitmap_to_png, PngExporter};
pub use sink::{write_manifest, AssetSink, ManifestEntry};
