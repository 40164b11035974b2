//! Fonts command: show what each text role resolved to

use anyhow::{Context, Result};
use serde::Serialize;

use placard_fontdb::{FontResolver, FontRole};

use super::load_font_plan;
use crate::cli::FontsArgs;

#[derive(Debug, Serialize)]
struct RoleReport {
    role: &'static str,
    size: f32,
    font: String,
    fallback: bool,
}

pub fn run(args: &FontsArgs) -> Result<()> {
    let plan = load_font_plan(args.fonts.as_deref())?;
    let fonts = FontResolver::new().resolve_plan(&plan);

    let reports: Vec<RoleReport> = FontRole::ALL
        .into_iter()
        .map(|role| {
            let font = fonts.get(role);
            RoleReport {
                role: role.as_str(),
                size: font.size(),
                font: font.name().to_string(),
                fallback: font.is_fallback(),
            }
        })
        .collect();

    if args.json {
        let json = serde_json::to_string_pretty(&reports).context("Failed to encode report")?;
        println!("{}", json);
        return Ok(());
    }

    println!("{:<10} {:>6}  FONT", "ROLE", "SIZE");
    for report in &reports {
        let marker = if report.fallback { " (built-in)" } else { "" };
        println!(
            "{:<10} {:>6.1}  {}{}",
            report.role, report.size, report.font, marker
        );
    }
    Ok(())
}
