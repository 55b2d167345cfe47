//! Error types for template file ingestion.
//!
//! Only conditions that stop a file from being read at all are errors here.
//! Header, structure and cell problems are reported inside the parse result.

use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum IngestError {
    #[error("template file not found: {path}")]
    FileNotFound { path: PathBuf },

    #[error("failed to read template file {path}: {source}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("template file {name} is too large ({size} bytes, limit {max_size})")]
    FileTooLarge { name: String, size: u64, max_size: u64 },

    /// The file starts with a byte order mark of an encoding other than UTF-8.
    #[error("template file {name} is {encoding}; save it as UTF-8")]
    UnsupportedEncoding {
        name: String,
        encoding: &'static str,
    },

    /// The csv reader failed, including on invalid UTF-8.
    #[error("failed to decode {name}: {source}")]
    Decode {
        name: String,
        #[source]
        source: csv::Error,
    },

    /// The blocking worker panicked or was cancelled.
    #[error("template parse worker failed: {source}")]
    Worker {
        #[source]
        source: tokio::task::JoinError,
    },
}

impl IngestError {
    pub(crate) fn from_io(path: PathBuf, error: std::io::Error) -> Self {
        if error.kind() == std::io::ErrorKind::NotFound {
            Self::FileNotFound { path }
        } else {
            Self::FileRead {
                path,
                source: error,
            }
        }
    }
}

pub type Result<T> = std::result::Result<T, IngestError>;
