//! Guest lists: which names get a card
//!
//! Blank names are skipped here, before anything is painted. Every kept
//! record carries an id used in its file name; by default that is the
//! 1-based line number, so the id points back at the source row.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use anyhow::{Context, Result};
use serde::Deserialize;

use crate::cli::RecordFormat;

/// One guest to render
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record {
    pub id: u64,
    pub name: String,
}

#[derive(Debug, Deserialize)]
struct JsonRecord {
    #[serde(default)]
    id: Option<u64>,
    #[serde(default)]
    name: Option<String>,
}

/// Guesses the format from the file extension; anything unknown is text
pub fn detect_format(path: &Path) -> RecordFormat {
    match path
        .extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| ext.to_ascii_lowercase())
        .as_deref()
    {
        Some("jsonl") | Some("json") | Some("ndjson") => RecordFormat::Jsonl,
        _ => RecordFormat::Text,
    }
}

/// Reads every non-blank record from `path`
pub fn read_records(path: &Path, format: Option<RecordFormat>) -> Result<Vec<Record>> {
    let format = format.unwrap_or_else(|| detect_format(path));
    let file = File::open(path)
        .with_context(|| format!("Failed to open guest list {}", path.display()))?;
    parse_records(BufReader::new(file), format)
        .with_context(|| format!("Failed to read guest list {}", path.display()))
}

pub fn parse_records(reader: impl BufRead, format: RecordFormat) -> Result<Vec<Record>> {
    let mut records = Vec::new();
    let mut skipped = 0usize;

    for (idx, line) in reader.lines().enumerate() {
        let line_no = idx as u64 + 1;
        let line = line.with_context(|| format!("Failed to read line {}", line_no))?;
        // A UTF-8 BOM on the first line is not part of the name
        let line = line.trim_start_matches('\u{feff}');

        let (id, name) = match format {
            RecordFormat::Text => (line_no, line.to_string()),
            RecordFormat::Jsonl => {
                if line.trim().is_empty() {
                    continue;
                }
                let record: JsonRecord = serde_json::from_str(line)
                    .with_context(|| format!("Line {}: invalid JSON record", line_no))?;
                (record.id.unwrap_or(line_no), record.name.unwrap_or_default())
            },
        };

        let name = name.trim();
        if name.is_empty() {
            log::debug!("Skipping line {}: no name", line_no);
            skipped += 1;
            continue;
        }
        records.push(Record {
            id,
            name: name.to_string(),
        });
    }

    log::info!("Read {} record(s), skipped {} blank", records.len(), skipped);
    Ok(records)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn test_text_records_use_line_numbers() {
        let input = "Anh Minh\n\n   \n  Chị Hoa  \n";
        let records = parse_records(Cursor::new(input), RecordFormat::Text).unwrap();
        assert_eq!(
            records,
            vec![
                Record { id: 1, name: "Anh Minh".into() },
                Record { id: 4, name: "Chị Hoa".into() },
            ]
        );
    }

    #[test]
    fn test_jsonl_records_keep_explicit_ids() {
        let input = r#"{"id": 12, "name": "Bác Tư"}
{"name": "Cô Lan"}

{"id": 15, "name": "   "}
{"id": 16}
"#;
        let records = parse_records(Cursor::new(input), RecordFormat::Jsonl).unwrap();
        assert_eq!(
            records,
            vec![
                Record { id: 12, name: "Bác Tư".into() },
                Record { id: 2, name: "Cô Lan".into() },
            ]
        );
    }

    #[test]
    fn test_malformed_jsonl_names_the_line() {
        let input = "{\"name\": \"ok\"}\n{not json}\n";
        let err = parse_records(Cursor::new(input), RecordFormat::Jsonl).unwrap_err();
        assert!(format!("{:#}", err).contains("Line 2"));
    }

    #[test]
    fn test_bom_is_ignored() {
        let records = parse_records(Cursor::new("\u{feff}Anh Minh\n"), RecordFormat::Text).unwrap();
        assert_eq!(records[0].name, "Anh Minh");
    }

    #[test]
    fn test_format_detection() {
        assert_eq!(detect_format(Path::new("guests.JSONL")), RecordFormat::Jsonl);
        assert_eq!(detect_format(Path::new("guests.json")), RecordFormat::Jsonl);
        assert_eq!(detect_format(Path::new("guests.txt")), RecordFormat::Text);
        assert_eq!(detect_format(Path::new("guests")), RecordFormat::Text);
    }
}
