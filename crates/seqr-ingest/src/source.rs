//! Template sources and the checks that run before decoding.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use crate::error::{IngestError, Result};

/// File extensions accepted for upload, compared case-insensitively.
pub const SUPPORTED_EXTENSIONS: [&str; 2] = ["csv", "tsv"];

/// File-level message for sources whose name has no supported extension.
pub const UNSUPPORTED_FILE_MESSAGE: &str = "Please upload a TSV or CSV file.";

/// An uploaded file: its display name and raw contents.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TemplateSource {
    name: String,
    bytes: Vec<u8>,
}

impl TemplateSource {
    pub fn from_bytes(name: impl Into<String>, bytes: impl Into<Vec<u8>>) -> Self {
        Self {
            name: name.into(),
            bytes: bytes.into(),
        }
    }

    /// Read a file from disk. The source is named after the file name.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        Self::from_path_with_limit(path, u64::MAX)
    }

    /// Read a file from disk, refusing files larger than `max_size` before
    /// reading their contents.
    pub fn from_path_with_limit(path: impl AsRef<Path>, max_size: u64) -> Result<Self> {
        let path = path.as_ref();
        let name = display_name(path);
        let metadata =
            std::fs::metadata(path).map_err(|e| IngestError::from_io(path.to_path_buf(), e))?;
        check_size(&name, metadata.len(), max_size)?;

        let mut bytes = Vec::new();
        File::open(path)
            .and_then(|mut file| file.read_to_end(&mut bytes))
            .map_err(|e| IngestError::from_io(path.to_path_buf(), e))?;
        Ok(Self { name, bytes })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn bytes(&self) -> &[u8] {
        &self.bytes
    }

    pub fn len(&self) -> u64 {
        self.bytes.len() as u64
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    /// Lower-cased extension of the source name, if any.
    pub fn extension(&self) -> Option<String> {
        Path::new(&self.name)
            .extension()
            .and_then(|ext| ext.to_str())
            .map(str::to_ascii_lowercase)
    }

    pub fn has_supported_extension(&self) -> bool {
        has_supported_extension(&self.name)
    }
}

pub(crate) fn has_supported_extension(name: &str) -> bool {
    Path::new(name)
        .extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| {
            SUPPORTED_EXTENSIONS
                .iter()
                .any(|supported| ext.eq_ignore_ascii_case(supported))
        })
}

/// Whether the file name of `path` carries a supported extension. Nothing
/// is read from disk.
pub fn is_supported_path(path: &Path) -> bool {
    has_supported_extension(&display_name(path))
}

pub(crate) fn display_name(path: &Path) -> String {
    path.file_name()
        .map_or_else(|| path.display().to_string(), |name| name.to_string_lossy().into_owned())
}

pub(crate) fn check_size(name: &str, size: u64, max_size: u64) -> Result<()> {
    if size > max_size {
        return Err(IngestError::FileTooLarge {
            name: name.to_string(),
            size,
            max_size,
        });
    }
    Ok(())
}

/// Reject sources that start with a UTF-16 byte order mark.
///
/// A UTF-8 byte order mark is accepted and removed from the header later.
pub(crate) fn check_encoding(source: &TemplateSource) -> Result<()> {
    let encoding = match source.bytes() {
        [0xFF, 0xFE, ..] => "UTF-16 LE",
        [0xFE, 0xFF, ..] => "UTF-16 BE",
        _ => return Ok(()),
    };
    Err(IngestError::UnsupportedEncoding {
        name: source.name().to_string(),
        encoding,
    })
}
