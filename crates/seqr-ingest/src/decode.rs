//! Delimited text decoding.

use csv::{ReaderBuilder, Trim};

use crate::error::{IngestError, Result};

/// A decoded file: the header row and every data row.
///
/// Empty lines are dropped by the reader. A record whose fields are all
/// blank is kept so it can be validated like any other row.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DecodedTable {
    pub header: Vec<String>,
    pub records: Vec<Vec<String>>,
}

impl DecodedTable {
    /// One message per record whose field count differs from the header.
    pub fn structural_errors(&self) -> Vec<String> {
        let expected = self.header.len();
        self.records
            .iter()
            .enumerate()
            .filter_map(|(index, fields)| {
                let parsed = fields.len();
                let problem = if parsed < expected {
                    "Too few fields"
                } else if parsed > expected {
                    "Too many fields"
                } else {
                    return None;
                };
                Some(format!(
                    "(Row {index}) {problem}: expected {expected} fields but parsed {parsed}"
                ))
            })
            .collect()
    }
}

/// Choose the field delimiter from the first line: tab when it holds more
/// unquoted tabs than commas, comma otherwise.
pub fn detect_delimiter(bytes: &[u8]) -> u8 {
    let mut tabs = 0usize;
    let mut commas = 0usize;
    let mut quoted = false;
    for &byte in bytes {
        match byte {
            b'"' => quoted = !quoted,
            b'\n' | b'\r' if !quoted => break,
            b'\t' if !quoted => tabs += 1,
            b',' if !quoted => commas += 1,
            _ => {}
        }
    }
    if tabs > commas { b'\t' } else { b',' }
}

fn normalize_header(raw: &str) -> String {
    raw.trim_matches('\u{feff}').trim().to_string()
}

/// Decode `bytes` as delimited UTF-8 text with a header row.
///
/// Field counts may vary between records; they are checked afterwards
/// against the header so every offending row can be reported.
pub fn decode_table(name: &str, bytes: &[u8], delimiter: u8) -> Result<DecodedTable> {
    let decode_error = |source| IngestError::Decode {
        name: name.to_string(),
        source,
    };

    let mut reader = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .delimiter(delimiter)
        .trim(Trim::None)
        .from_reader(bytes);

    let header: Vec<String> = reader
        .headers()
        .map_err(decode_error)?
        .iter()
        .map(normalize_header)
        .collect();

    let mut records = Vec::new();
    for record in reader.records() {
        let record = record.map_err(decode_error)?;
        records.push(record.iter().map(str::to_string).collect());
    }

    Ok(DecodedTable { header, records })
}
