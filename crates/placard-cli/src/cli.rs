//! CLI argument definitions using Clap v4

use clap::{Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// Placard - personalised invitation cards from a guest list
#[derive(Parser, Debug)]
#[command(name = "placard")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Log font resolution and batch progress (RUST_LOG overrides)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Render a single card
    #[command(alias = "r")]
    Render(RenderArgs),

    /// Render a card for every record in a guest list
    #[command(alias = "b")]
    Batch(BatchArgs),

    /// Show which font file each role resolves to
    Fonts(FontsArgs),
}

/// Styling shared by every command that paints
#[derive(Args, Debug, Clone, Default)]
pub struct StyleArgs {
    /// Monogram image (PNG or JPEG) pasted at the top of the card
    #[arg(short = 'm', long = "monogram")]
    pub monogram: Option<PathBuf>,

    /// Theme JSON: canvas, palette and spacing overrides
    #[arg(long = "theme")]
    pub theme: Option<PathBuf>,

    /// Card wording JSON
    #[arg(long = "content")]
    pub content: Option<PathBuf>,

    /// Font plan JSON: candidate files and sizes per role
    #[arg(long = "fonts")]
    pub fonts: Option<PathBuf>,
}

/// Arguments for the render command
#[derive(Args, Debug)]
pub struct RenderArgs {
    /// Guest name as it should appear on the card
    pub name: String,

    /// Output PNG path
    #[arg(short = 'o', long = "output", default_value = "invitation.png")]
    pub output: PathBuf,

    #[command(flatten)]
    pub style: StyleArgs,
}

/// How a guest list file is laid out
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecordFormat {
    /// One name per line
    Text,
    /// One `{"id": .., "name": ..}` object per line
    Jsonl,
}

/// Arguments for the batch command
#[derive(Args, Debug)]
pub struct BatchArgs {
    /// Guest list: plain text or JSONL
    #[arg(short = 'i', long = "input")]
    pub input: PathBuf,

    /// Guest list format (guessed from the extension when omitted)
    #[arg(long = "format")]
    pub format: Option<RecordFormat>,

    /// Output directory for cards and manifest.jsonl
    #[arg(short = 'o', long = "output", default_value = "generated_invitations")]
    pub output: PathBuf,

    /// Number of parallel worker threads (0 = auto)
    #[arg(short = 'j', long = "jobs", default_value_t = 0)]
    pub jobs: usize,

    #[command(flatten)]
    pub style: StyleArgs,
}

/// Arguments for the fonts command
#[derive(Args, Debug)]
pub struct FontsArgs {
    /// Font plan JSON: candidate files and sizes per role
    #[arg(long = "fonts")]
    pub fonts: Option<PathBuf>,

    /// Print the resolution as JSON
    #[arg(long)]
    pub json: bool,
}
