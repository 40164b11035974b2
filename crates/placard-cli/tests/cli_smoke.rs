//! CLI Smoke Tests
//!
//! Runs the `placard` binary end to end:
//! - `render`: one card to a PNG
//! - `batch`: a guest list to a directory of cards plus manifest
//! - `fonts`: the per-role font report
//!
//! Fonts resolve against whatever the host has installed; every assertion
//! here holds on the built-in fallback too.

use std::fs;
use std::path::{Path, PathBuf};
use std::process::{Command, Output};

fn placard_binary() -> PathBuf {
    PathBuf::from(env!("CARGO_BIN_EXE_placard"))
}

/// Fresh scratch directory for one test
fn temp_dir(tag: &str) -> PathBuf {
    let id = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .unwrap()
        .as_nanos();
    let dir = std::env::temp_dir().join(format!("placard_cli_{}_{}", tag, id));
    fs::create_dir_all(&dir).unwrap();
    dir
}

fn run(args: &[&str]) -> Output {
    Command::new(placard_binary())
        .args(args)
        .env_remove("RUST_LOG")
        .output()
        .expect("Failed to execute placard")
}

/// Width and height from a PNG's IHDR chunk
fn png_size(path: &Path) -> (u32, u32) {
    let bytes = fs::read(path).unwrap();
    assert_eq!(&bytes[..8], b"\x89PNG\r\n\x1a\n", "not a PNG: {}", path.display());
    let width = u32::from_be_bytes([bytes[16], bytes[17], bytes[18], bytes[19]]);
    let height = u32::from_be_bytes([bytes[20], bytes[21], bytes[22], bytes[23]]);
    (width, height)
}

// ============================================================================
// Help
// ============================================================================

#[test]
fn test_help_lists_commands() {
    let output = run(&["--help"]);
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    for command in ["render", "batch", "fonts"] {
        assert!(stdout.contains(command), "help should mention {}", command);
    }
}

// ============================================================================
// Render
// ============================================================================

#[test]
fn test_render_writes_reference_sized_png() {
    let dir = temp_dir("render");
    let out = dir.join("card.png");

    let output = run(&["render", "Anh Nguyễn Văn Minh", "-o", out.to_str().unwrap()]);
    assert!(
        output.status.success(),
        "render failed: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    assert_eq!(png_size(&out), (680, 960));

    fs::remove_dir_all(&dir).ok();
}

#[test]
fn test_render_without_monogram_file_still_succeeds() {
    let dir = temp_dir("nomono");
    let out = dir.join("card.png");
    let missing = dir.join("no_such_monogram.jpg");

    let output = run(&[
        "render",
        "Chị Hoa",
        "-o",
        out.to_str().unwrap(),
        "--monogram",
        missing.to_str().unwrap(),
    ]);
    assert!(output.status.success(), "missing monogram must not be fatal");
    assert!(out.is_file());

    fs::remove_dir_all(&dir).ok();
}

#[test]
fn test_render_honours_theme_canvas() {
    let dir = temp_dir("theme");
    let theme = dir.join("theme.json");
    fs::write(&theme, r#"{"canvas": {"width": 400, "height": 600}}"#).unwrap();
    let out = dir.join("card.png");

    let output = run(&[
        "render",
        "Anh Minh",
        "-o",
        out.to_str().unwrap(),
        "--theme",
        theme.to_str().unwrap(),
    ]);
    assert!(output.status.success());
    assert_eq!(png_size(&out), (400, 600));

    fs::remove_dir_all(&dir).ok();
}

#[test]
fn test_render_rejects_empty_canvas_theme() {
    let dir = temp_dir("badtheme");
    let theme = dir.join("theme.json");
    fs::write(&theme, r#"{"canvas": {"width": 0}}"#).unwrap();
    let out = dir.join("card.png");

    let output = run(&[
        "render",
        "Anh Minh",
        "-o",
        out.to_str().unwrap(),
        "--theme",
        theme.to_str().unwrap(),
    ]);
    assert!(!output.status.success());
    assert!(!out.exists());

    fs::remove_dir_all(&dir).ok();
}

// ============================================================================
// Batch
// ============================================================================

#[test]
fn test_batch_from_text_list() {
    let dir = temp_dir("batch");
    let input = dir.join("guests.txt");
    fs::write(&input, "Anh Minh\n\nChị Hoa\n").unwrap();
    let out = dir.join("cards");

    let output = run(&[
        "batch",
        "-i",
        input.to_str().unwrap(),
        "-o",
        out.to_str().unwrap(),
        "-j",
        "2",
    ]);
    assert!(
        output.status.success(),
        "batch failed: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Generated 2 invitations"));

    assert_eq!(png_size(&out.join("invitation_1_anh_minh.png")), (680, 960));
    assert_eq!(png_size(&out.join("invitation_3_chi_hoa.png")), (680, 960));

    let manifest = fs::read_to_string(out.join("manifest.jsonl")).unwrap();
    let entries: Vec<serde_json::Value> = manifest
        .lines()
        .map(|line| serde_json::from_str(line).unwrap())
        .collect();
    assert_eq!(entries.len(), 2);
    let mut ids: Vec<u64> = entries.iter().map(|e| e["id"].as_u64().unwrap()).collect();
    ids.sort_unstable();
    assert_eq!(ids, vec![1, 3]);
    for entry in &entries {
        assert_eq!(entry["embed_width"], 382);
        assert_eq!(entry["embed_height"], 540);
    }

    fs::remove_dir_all(&dir).ok();
}

#[test]
fn test_batch_rejects_malformed_jsonl() {
    let dir = temp_dir("badjsonl");
    let input = dir.join("guests.jsonl");
    fs::write(&input, "{\"name\": \"Anh Minh\"}\n{oops\n").unwrap();
    let out = dir.join("cards");

    let output = run(&["batch", "-i", input.to_str().unwrap(), "-o", out.to_str().unwrap()]);
    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Line 2"), "error should name the line: {}", stderr);

    fs::remove_dir_all(&dir).ok();
}

#[test]
fn test_batch_missing_input_fails() {
    let dir = temp_dir("noinput");
    let output = run(&[
        "batch",
        "-i",
        dir.join("absent.txt").to_str().unwrap(),
        "-o",
        dir.join("cards").to_str().unwrap(),
    ]);
    assert!(!output.status.success());

    fs::remove_dir_all(&dir).ok();
}

// ============================================================================
// Fonts
// ============================================================================

#[test]
fn test_fonts_lists_every_role() {
    let output = run(&["fonts"]);
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    for role in ["header", "guest", "small", "couple", "amp", "label", "date", "venue"] {
        assert!(stdout.contains(role), "missing role {}", role);
    }
}

#[test]
fn test_fonts_json_with_unresolvable_plan() {
    let dir = temp_dir("fontsjson");
    let plan = dir.join("fonts.json");
    fs::write(
        &plan,
        r#"{"guest": {"candidates": ["/nonexistent/font.ttf"], "size": 28.0}}"#,
    )
    .unwrap();

    let output = run(&["fonts", "--json", "--fonts", plan.to_str().unwrap()]);
    assert!(output.status.success());
    let report: Vec<serde_json::Value> = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(report.len(), 8);
    let guest = report.iter().find(|r| r["role"] == "guest").unwrap();
    assert_eq!(guest["fallback"], true);
    assert_eq!(guest["size"], 28.0);

    fs::remove_dir_all(&dir).ok();
}
