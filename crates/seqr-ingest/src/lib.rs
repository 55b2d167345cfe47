//! Template file ingestion.
//!
//! [`TemplateFileParser`] turns an uploaded CSV or TSV file into a
//! [`seqr_model::ParseResult`]: it checks the file type, size and encoding,
//! decodes the delimited text, checks the header against the schema and the
//! row widths against the header, then validates every row.

pub mod decode;
pub mod error;
pub mod options;
pub mod parser;
pub mod source;

pub use decode::{DecodedTable, decode_table, detect_delimiter};
pub use error::{IngestError, Result};
pub use options::{MAX_FILE_SIZE_ENV, MAX_TEMPLATE_FILE_SIZE, ParserOptions};
pub use parser::{INVALID_HEADER_MESSAGE, TemplateFileParser};
pub use source::{
    SUPPORTED_EXTENSIONS, TemplateSource, UNSUPPORTED_FILE_MESSAGE, is_supported_path,
};
