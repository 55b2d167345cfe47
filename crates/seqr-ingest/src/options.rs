use serde::{Deserialize, Serialize};
use tracing::warn;

/// Largest template accepted by default (500 MiB).
pub const MAX_TEMPLATE_FILE_SIZE: u64 = 500 * 1024 * 1024;

/// Environment variable overriding [`MAX_TEMPLATE_FILE_SIZE`].
pub const MAX_FILE_SIZE_ENV: &str = "SEQR_TEMPLATE_MAX_BYTES";

/// Parser configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ParserOptions {
    /// Sources larger than this many bytes fail before decoding.
    pub max_file_size: u64,
    /// Apply cross-row uniqueness for columns marked unique.
    pub enforce_unique: bool,
}

impl Default for ParserOptions {
    fn default() -> Self {
        Self {
            max_file_size: MAX_TEMPLATE_FILE_SIZE,
            enforce_unique: true,
        }
    }
}

impl ParserOptions {
    /// Defaults, with the size limit taken from `SEQR_TEMPLATE_MAX_BYTES`
    /// when it holds a valid byte count.
    pub fn from_env() -> Self {
        let raw = std::env::var(MAX_FILE_SIZE_ENV).ok();
        Self::default().with_env_size(raw.as_deref())
    }

    fn with_env_size(self, raw: Option<&str>) -> Self {
        let Some(raw) = raw else {
            return self;
        };
        match parse_byte_count(raw) {
            Some(max_file_size) => self.with_max_file_size(max_file_size),
            None => {
                warn!(variable = MAX_FILE_SIZE_ENV, value = raw, "ignoring invalid size limit");
                self
            }
        }
    }

    #[must_use]
    pub fn with_max_file_size(mut self, max_file_size: u64) -> Self {
        self.max_file_size = max_file_size;
        self
    }

    #[must_use]
    pub fn with_enforce_unique(mut self, enforce_unique: bool) -> Self {
        self.enforce_unique = enforce_unique;
        self
    }
}

fn parse_byte_count(raw: &str) -> Option<u64> {
    raw.trim().replace('_', "").parse::<u64>().ok().filter(|n| *n > 0)
}
