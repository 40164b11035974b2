//! Placard CLI - render personalised invitation cards

mod cli;
mod commands;
mod records;

use anyhow::Result;
use clap::Parser;

use cli::{Cli, Commands};

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logger(cli.verbose);

    match cli.command {
        Commands::Render(args) => commands::render::run(&args),
        Commands::Batch(args) => commands::batch::run(&args),
        Commands::Fonts(args) => commands::fonts::run(&args),
    }
}

/// Warnings only by default; `--verbose` adds progress. An explicit
/// `RUST_LOG` wins over both.
fn init_logger(verbose: bool) {
    let mut builder = env_logger::Builder::from_default_env();
    if std::env::var_os("RUST_LOG").is_none() {
        if verbose {
            builder.filter_level(log::LevelFilter::Info);
        } else {
            builder.filter_level(log::LevelFilter::Warn);
        }
    }
    builder.init();
}
