//! Field coercion.
//!
//! Converts raw cell text into typed values. Every function is total: input
//! that cannot be interpreted becomes absence (`None` or an empty list),
//! never an error. Deciding whether absence is a problem is the job of the
//! validators attached to the column.

use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

use seqr_model::TypedValue;

/// Separator used by list columns unless a template says otherwise.
pub const DEFAULT_LIST_SEPARATOR: char = ',';

static YEAR_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[0-9]{4}").expect("Invalid year regex"));

/// Trimmed text; empty or whitespace-only input is absent.
pub fn parse_string(value: Option<&str>) -> Option<String> {
    let trimmed = value?.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

/// Split on `separator`, trim parts, drop empty parts and keep the first
/// occurrence of each distinct part.
pub fn parse_string_list(value: Option<&str>, separator: char) -> Vec<String> {
    let Some(value) = value else {
        return Vec::new();
    };
    let mut items: Vec<String> = Vec::new();
    for part in value.split(separator).map(str::trim) {
        if part.is_empty() || items.iter().any(|item| item == part) {
            continue;
        }
        items.push(part.to_string());
    }
    items
}

/// Finite decimal number; empty text, NaN and infinities are absent.
pub fn parse_number(value: Option<&str>) -> Option<f64> {
    let trimmed = value?.trim();
    if trimmed.is_empty() {
        return None;
    }
    trimmed.parse::<f64>().ok().filter(|number| number.is_finite())
}

/// Case-insensitive `true` / `false`. Any other text is ambiguous and absent.
pub fn parse_boolean(value: Option<&str>) -> Option<bool> {
    let trimmed = value?.trim();
    if trimmed.eq_ignore_ascii_case("true") {
        Some(true)
    } else if trimmed.eq_ignore_ascii_case("false") {
        Some(false)
    } else {
        None
    }
}

/// The first run of four digits anywhere in the text.
pub fn parse_year(value: Option<&str>) -> Option<String> {
    YEAR_REGEX
        .find(value?.trim())
        .map(|found| found.as_str().to_string())
}

/// Coercion strategy attached to a template column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Coercer {
    #[default]
    Text,
    TextList {
        separator: char,
    },
    Number,
    Boolean,
    Year,
}

impl Coercer {
    /// List coercion with the default `,` separator.
    pub const fn text_list() -> Self {
        Self::TextList {
            separator: DEFAULT_LIST_SEPARATOR,
        }
    }

    /// Convert a raw cell. List coercion always yields a value (possibly an
    /// empty list); the others yield `None` for uninterpretable input.
    pub fn coerce(self, raw: Option<&str>) -> Option<TypedValue> {
        match self {
            Self::Text => parse_string(raw).map(TypedValue::Text),
            Self::TextList { separator } => {
                Some(TypedValue::TextList(parse_string_list(raw, separator)))
            }
            Self::Number => parse_number(raw).map(TypedValue::Number),
            Self::Boolean => parse_boolean(raw).map(TypedValue::Boolean),
            Self::Year => parse_year(raw).map(TypedValue::Text),
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Self::Text => "text",
            Self::TextList { .. } => "text list",
            Self::Number => "number",
            Self::Boolean => "boolean",
            Self::Year => "year",
        }
    }
}
