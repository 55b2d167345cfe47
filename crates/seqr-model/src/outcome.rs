//! Per-cell, per-row and per-file validation results.
//!
//! These are immutable value records created fresh by every parse. Validity
//! flags are derived in the constructors and never set independently.

use serde::{Deserialize, Serialize};

use crate::value::TypedValue;

/// Summary error attached to a file when at least one row is invalid.
pub const INVALID_ROWS_MESSAGE: &str = "Some rows contain invalid information";

/// The identity of a template column, carried alongside every cell result.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ColumnIdentity {
    /// Stable identifier (e.g. `familyId`).
    pub id: String,
    /// Header label as it appears in the file (e.g. `Family ID`).
    pub key: String,
    /// Position of the column in positional rows and in the schema.
    pub index: usize,
    pub required: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CellOutcome {
    pub value: Option<TypedValue>,
    pub errors: Vec<String>,
    pub valid: bool,
}

impl CellOutcome {
    pub fn new(value: Option<TypedValue>, errors: Vec<String>) -> Self {
        let valid = errors.is_empty();
        Self {
            value,
            errors,
            valid,
        }
    }

    /// Append further diagnostics (e.g. cross-row checks) and recompute validity.
    #[must_use]
    pub fn with_errors(mut self, errors: impl IntoIterator<Item = String>) -> Self {
        self.errors.extend(errors);
        self.valid = self.errors.is_empty();
        self
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ColumnOutcome {
    pub column: ColumnIdentity,
    pub outcome: CellOutcome,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RowOutcome {
    /// 0-based position in the data section (header excluded).
    pub index: usize,
    pub columns: Vec<ColumnOutcome>,
    pub valid: bool,
}

impl RowOutcome {
    pub fn new(index: usize, columns: Vec<ColumnOutcome>) -> Self {
        let valid = columns.iter().all(|column| column.outcome.valid);
        Self {
            index,
            columns,
            valid,
        }
    }

    /// Look up a cell by column id.
    pub fn cell(&self, id: &str) -> Option<&CellOutcome> {
        self.columns
            .iter()
            .find(|column| column.column.id == id)
            .map(|column| &column.outcome)
    }

    /// All cell errors of this row as `(header label, message)` pairs.
    pub fn errors(&self) -> impl Iterator<Item = (&str, &str)> {
        self.columns.iter().flat_map(|column| {
            column
                .outcome
                .errors
                .iter()
                .map(move |error| (column.column.key.as_str(), error.as_str()))
        })
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ParseResult {
    /// Header fields as read from the file.
    pub header: Vec<String>,
    pub rows: Vec<RowOutcome>,
    pub valid: bool,
    /// File-level or aggregate messages.
    pub errors: Vec<String>,
}

impl ParseResult {
    /// A file rejected before row validation (precondition, header or structure).
    pub fn rejected(header: Vec<String>, errors: Vec<String>) -> Self {
        Self {
            header,
            rows: Vec::new(),
            valid: false,
            errors,
        }
    }

    /// A fully validated file. Row-level detail stays on the rows; the file
    /// only carries one summary message when any row is invalid.
    pub fn from_rows(header: Vec<String>, rows: Vec<RowOutcome>) -> Self {
        let valid = rows.iter().all(|row| row.valid);
        let errors = if valid {
            Vec::new()
        } else {
            vec![INVALID_ROWS_MESSAGE.to_string()]
        };
        Self {
            header,
            rows,
            valid,
            errors,
        }
    }

    pub fn invalid_row_count(&self) -> usize {
        self.rows.iter().filter(|row| !row.valid).count()
    }

    pub fn invalid_rows(&self) -> impl Iterator<Item = &RowOutcome> {
        self.rows.iter().filter(|row| !row.valid)
    }
}
