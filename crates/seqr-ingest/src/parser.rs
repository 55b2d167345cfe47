//! Template file parsing: source checks, decoding and row validation.

use std::io::Read;
use std::path::Path;
use std::sync::Arc;

use tracing::{debug, info_span, warn};

use seqr_model::{ParseResult, RawRecord};
use seqr_standards::TemplateKind;
use seqr_validate::{TemplateSchema, validate_rows};

use crate::decode::{DecodedTable, decode_table, detect_delimiter};
use crate::error::{IngestError, Result};
use crate::options::ParserOptions;
use crate::source::{
    TemplateSource, UNSUPPORTED_FILE_MESSAGE, check_encoding, check_size, is_supported_path,
};

/// File-level message when the header is not exactly the template's columns.
pub const INVALID_HEADER_MESSAGE: &str = "File contains invalid columns in header";

/// Parses uploaded template files against one schema.
///
/// Cloning is cheap and clones share the schema, so a parser can be handed
/// to worker threads freely.
#[derive(Debug, Clone)]
pub struct TemplateFileParser {
    schema: Arc<TemplateSchema>,
    options: ParserOptions,
}

impl TemplateFileParser {
    pub fn new(schema: impl Into<Arc<TemplateSchema>>) -> Self {
        Self::with_options(schema, ParserOptions::default())
    }

    pub fn with_options(schema: impl Into<Arc<TemplateSchema>>, options: ParserOptions) -> Self {
        Self {
            schema: schema.into(),
            options,
        }
    }

    /// Parser for one of the standard templates.
    pub fn for_kind(kind: TemplateKind, options: ParserOptions) -> Self {
        Self::with_options(kind.schema().clone(), options)
    }

    pub fn schema(&self) -> &TemplateSchema {
        &self.schema
    }

    pub fn options(&self) -> ParserOptions {
        self.options
    }

    /// Parse and validate a whole file.
    ///
    /// Problems with the file's content (type, header, row shape, cells)
    /// come back as an invalid [`ParseResult`]. `Err` means the file could
    /// not be read: too large, not UTF-8, or malformed delimited text.
    pub fn parse(&self, source: &TemplateSource) -> Result<ParseResult> {
        let span = info_span!(
            "parse_template",
            template = self.schema.name(),
            file = source.name()
        );
        let _guard = span.enter();

        if !source.has_supported_extension() {
            warn!("rejected file with unsupported extension");
            return Ok(unsupported_file());
        }
        check_size(source.name(), source.len(), self.options.max_file_size)?;
        check_encoding(source)?;

        let delimiter = detect_delimiter(source.bytes());
        debug!(
            delimiter = %char::from(delimiter).escape_default(),
            bytes = source.len(),
            "decoding template"
        );
        let table = decode_table(source.name(), source.bytes(), delimiter)?;
        Ok(self.validate_table(table))
    }

    /// Read `path` and parse it. The extension is checked before the file
    /// is opened.
    pub fn parse_path(&self, path: impl AsRef<Path>) -> Result<ParseResult> {
        let path = path.as_ref();
        if !is_supported_path(path) {
            return Ok(unsupported_file());
        }
        let source = TemplateSource::from_path_with_limit(path, self.options.max_file_size)?;
        self.parse(&source)
    }

    /// Read everything from `reader` and parse it as a file called `name`.
    pub fn parse_reader<R: Read>(&self, name: &str, reader: R) -> Result<ParseResult> {
        let mut bytes = Vec::new();
        reader
            .take(self.options.max_file_size.saturating_add(1))
            .read_to_end(&mut bytes)
            .map_err(|e| IngestError::FileRead {
                path: name.into(),
                source: e,
            })?;
        self.parse(&TemplateSource::from_bytes(name, bytes))
    }

    /// [`parse`](Self::parse) on the tokio blocking pool.
    ///
    /// The future resolves exactly once, with either the result or the
    /// failure.
    pub async fn parse_async(&self, source: TemplateSource) -> Result<ParseResult> {
        let parser = self.clone();
        tokio::task::spawn_blocking(move || parser.parse(&source))
            .await
            .map_err(|source| IngestError::Worker { source })?
    }

    fn validate_table(&self, table: DecodedTable) -> ParseResult {
        if !self.schema.matches_header(&table.header) {
            let diff = self.schema.header_diff(&table.header);
            warn!(
                missing = ?diff.missing,
                unexpected = ?diff.unexpected,
                "header does not match template"
            );
            return ParseResult::rejected(table.header, vec![INVALID_HEADER_MESSAGE.to_string()]);
        }

        let structural = table.structural_errors();
        if !structural.is_empty() {
            warn!(rows = structural.len(), "rows do not match header width");
            return ParseResult::rejected(table.header, structural);
        }

        let DecodedTable { header, records } = table;
        let records: Vec<RawRecord> = records
            .into_iter()
            .map(|fields| RawRecord::keyed_from(header.iter().cloned(), fields))
            .collect();
        let rows = validate_rows(&self.schema, &records, self.options.enforce_unique);
        let result = ParseResult::from_rows(header, rows);
        debug!(
            rows = result.rows.len(),
            invalid = result.invalid_row_count(),
            "validated template rows"
        );
        result
    }
}

fn unsupported_file() -> ParseResult {
    ParseResult::rejected(Vec::new(), vec![UNSUPPORTED_FILE_MESSAGE.to_string()])
}
