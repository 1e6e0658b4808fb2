use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fs;
use std::path::Path;

use crate::results::Record;

/// Serialization format for the saved list
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Plain text, one numbered block per record
    Txt,
    /// Pretty-printed JSON document
    Json,
    /// Comma-separated values with a header row
    Csv,
}

/// Serialize the record list to the destination path.
///
/// Any I/O failure is an error; no partial-file cleanup is attempted
/// beyond what the underlying write gives.
pub fn write_records(
    records: &[Record],
    path: impl AsRef<Path>,
    format: OutputFormat,
) -> Result<(), Box<dyn Error>> {
    let path = path.as_ref();

    match format {
        OutputFormat::Txt => fs::write(path, to_latin1(&render_txt(records)))?,
        OutputFormat::Json => fs::write(path, serde_json::to_string_pretty(records)?)?,
        OutputFormat::Csv => fs::write(path, render_csv(records))?,
    }

    ::log::debug!("Wrote {} records to {}", records.len(), path.display());
    Ok(())
}

/// Print the list to stdout in the plain-text shape
pub fn display_records(records: &[Record]) {
    for record in records {
        println!("{}) {}", record.rank, record.title);
        println!("Description: {}\n", record.description);
    }
}

/// Render the plain-text format
fn render_txt(records: &[Record]) -> String {
    let mut out = String::new();
    for record in records {
        out.push_str(&format!(
            "{}) {}\nDescription: {}\n\n",
            record.rank, record.title, record.description
        ));
    }
    out
}

/// Encode text as Latin-1 bytes. Characters outside the Latin-1 range
/// degrade to '?' rather than failing the write.
fn to_latin1(text: &str) -> Vec<u8> {
    text.chars()
        .map(|c| {
            let code = c as u32;
            if code <= 0xFF { code as u8 } else { b'?' }
        })
        .collect()
}

/// Render the CSV format with a header row
fn render_csv(records: &[Record]) -> String {
    let mut csv = String::from("rank,title,description\n");
    for record in records {
        csv.push_str(&format!(
            "{},{},{}\n",
            record.rank,
            escape_csv(&record.title),
            escape_csv(&record.description)
        ));
    }
    csv
}

/// Quote a field when it contains a delimiter, quote or newline
fn escape_csv(field: &str) -> String {
    if field.contains(',') || field.contains('"') || field.contains('\n') {
        format!("\"{}\"", field.replace('"', "\"\""))
    } else {
        field.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_records() -> Vec<Record> {
        vec![
            Record::new(1, "A".to_string(), "descA".to_string()),
            Record::new(2, "B".to_string(), "descB".to_string()),
        ]
    }

    /// Minimal CSV reader used to verify the writer round-trips
    fn parse_csv(input: &str) -> Vec<(usize, String, String)> {
        let mut rows: Vec<Vec<String>> = Vec::new();
        let mut fields: Vec<String> = Vec::new();
        let mut field = String::new();
        let mut in_quotes = false;
        let mut chars = input.chars().peekable();

        while let Some(c) = chars.next() {
            if in_quotes {
                if c == '"' {
                    if chars.peek() == Some(&'"') {
                        chars.next();
                        field.push('"');
                    } else {
                        in_quotes = false;
                    }
                } else {
                    field.push(c);
                }
            } else {
                match c {
                    '"' => in_quotes = true,
                    ',' => fields.push(std::mem::take(&mut field)),
                    '\n' => {
                        fields.push(std::mem::take(&mut field));
                        rows.push(std::mem::take(&mut fields));
                    }
                    _ => field.push(c),
                }
            }
        }

        rows.into_iter()
            .skip(1) // header
            .map(|row| (row[0].parse().unwrap(), row[1].clone(), row[2].clone()))
            .collect()
    }

    #[test]
    fn test_txt_format_shape() {
        let txt = render_txt(&sample_records());
        assert_eq!(txt, "1) A\nDescription: descA\n\n2) B\nDescription: descB\n\n");
    }

    #[test]
    fn test_latin1_passes_through_western_characters() {
        // U+00E9 fits in Latin-1 and keeps its code point as the byte value
        let bytes = to_latin1("Am\u{e9}lie");
        assert_eq!(bytes, vec![b'A', b'm', 0xE9, b'l', b'i', b'e']);
    }

    #[test]
    fn test_latin1_degrades_wide_characters() {
        let bytes = to_latin1("a\u{2603}b");
        assert_eq!(bytes, vec![b'a', b'?', b'b']);
    }

    #[test]
    fn test_json_is_pretty_printed_with_literal_non_ascii() {
        let records = vec![Record::new(
            1,
            "Am\u{e9}lie".to_string(),
            "caf\u{e9} scene".to_string(),
        )];
        let json = serde_json::to_string_pretty(&records).unwrap();

        // Indented, self-describing, non-ASCII kept literal (not \u-escaped)
        assert!(json.contains("\"rank\": 1"));
        assert!(json.contains("Am\u{e9}lie"));
        assert!(!json.contains("\\u"));

        let parsed: Vec<Record> = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, records);
    }

    #[test]
    fn test_csv_has_header_and_plain_rows() {
        let csv = render_csv(&sample_records());
        assert_eq!(csv, "rank,title,description\n1,A,descA\n2,B,descB\n");
    }

    #[test]
    fn test_csv_round_trip_preserves_fields() {
        let records = vec![
            Record::new(1, "Comma, in title".to_string(), "He said \"go\"".to_string()),
            Record::new(2, "Plain".to_string(), "Line one\nline two".to_string()),
            Record::new(3, "Empty desc".to_string(), String::new()),
        ];

        let parsed = parse_csv(&render_csv(&records));

        assert_eq!(parsed.len(), records.len());
        for (record, (rank, title, description)) in records.iter().zip(&parsed) {
            assert_eq!(record.rank, *rank);
            assert_eq!(&record.title, title);
            assert_eq!(&record.description, description);
        }
    }

    #[test]
    fn test_write_records_creates_the_destination_file() {
        let path = std::env::temp_dir().join(format!("toplist-out-{}.txt", std::process::id()));

        write_records(&sample_records(), &path, OutputFormat::Txt).unwrap();
        let written = fs::read(&path).unwrap();
        assert_eq!(written, to_latin1(&render_txt(&sample_records())));

        let _ = fs::remove_file(&path);
    }

    #[test]
    fn test_write_records_surfaces_io_failure() {
        let path = std::env::temp_dir().join("toplist-no-such-dir/out.txt");
        assert!(write_records(&sample_records(), &path, OutputFormat::Txt).is_err());
    }
}
