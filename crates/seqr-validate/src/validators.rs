//! Cell validators.
//!
//! Each check comes as a singular function over one value and a collection
//! function applied element-wise to list cells. Every function takes an
//! optional message that replaces the generated one. Absent or empty values
//! pass every check except the presence check.

use std::sync::LazyLock;

use regex::Regex;

use seqr_model::TypedValue;

use crate::vocabulary::{
    INHERITANCE_MODE, ONSET_AGE, PEDIGREE_AFFECTED_STATUS, PEDIGREE_SEX, Vocabulary,
};

static HPO_TERM_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^HP:[0-9]{7}$").expect("Invalid HPO term regex"));

static OMIM_TERM_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^OMIM:[0-9]+$").expect("Invalid OMIM term regex"));

/// Error when a value is absent or empty.
pub fn validate_present(value: Option<&TypedValue>, message: &str) -> Option<String> {
    match value {
        Some(value) if !value.is_empty() => None,
        _ => Some(message.to_string()),
    }
}

pub fn validate_hpo_term(value: &str, message: Option<&str>) -> Option<String> {
    validate_pattern(value, &HPO_TERM_REGEX, message, "is not a valid HPO term")
}

pub fn validate_hpo_terms(values: &[String], message: Option<&str>) -> Vec<String> {
    values
        .iter()
        .filter_map(|value| validate_hpo_term(value, message))
        .collect()
}

pub fn validate_omim_term(value: &str, message: Option<&str>) -> Option<String> {
    validate_pattern(value, &OMIM_TERM_REGEX, message, "is not a valid OMIM term")
}

pub fn validate_omim_terms(values: &[String], message: Option<&str>) -> Vec<String> {
    values
        .iter()
        .filter_map(|value| validate_omim_term(value, message))
        .collect()
}

pub fn validate_onset_category(value: &str, message: Option<&str>) -> Option<String> {
    validate_vocabulary_term(value, &ONSET_AGE, message)
}

pub fn validate_mode_of_inheritance_term(value: &str, message: Option<&str>) -> Option<String> {
    validate_vocabulary_term(value, &INHERITANCE_MODE, message)
}

pub fn validate_mode_of_inheritance_terms(values: &[String], message: Option<&str>) -> Vec<String> {
    values
        .iter()
        .filter_map(|value| validate_mode_of_inheritance_term(value, message))
        .collect()
}

pub fn validate_sex_code(value: &str, message: Option<&str>) -> Option<String> {
    validate_vocabulary_term(value, &PEDIGREE_SEX, message)
}

pub fn validate_affected_status_code(value: &str, message: Option<&str>) -> Option<String> {
    validate_vocabulary_term(value, &PEDIGREE_AFFECTED_STATUS, message)
}

/// Membership of `value` in `vocabulary`, case-insensitive.
pub fn validate_vocabulary_term(
    value: &str,
    vocabulary: &Vocabulary,
    message: Option<&str>,
) -> Option<String> {
    if value.trim().is_empty() || vocabulary.contains(value) {
        return None;
    }
    Some(message.map_or_else(
        || format!("'{value}' is not one of {}", vocabulary.listing()),
        str::to_string,
    ))
}

fn validate_pattern(
    value: &str,
    pattern: &Regex,
    message: Option<&str>,
    problem: &str,
) -> Option<String> {
    if value.trim().is_empty() || pattern.is_match(&value.trim().to_uppercase()) {
        return None;
    }
    Some(message.map_or_else(|| format!("'{value}' {problem}"), str::to_string))
}

/// Validation strategy attached to a template column.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Validator {
    /// The coerced value must be present and non-empty.
    Present { message: String },
    HpoTerm { message: Option<String> },
    OmimTerm { message: Option<String> },
    /// Membership in a fixed controlled vocabulary.
    Vocabulary {
        vocabulary: Vocabulary,
        message: Option<String>,
    },
}

impl Validator {
    pub fn present(message: impl Into<String>) -> Self {
        Self::Present {
            message: message.into(),
        }
    }

    pub fn hpo_term() -> Self {
        Self::HpoTerm { message: None }
    }

    pub fn omim_term() -> Self {
        Self::OmimTerm { message: None }
    }

    pub fn onset_category() -> Self {
        Self::vocabulary(ONSET_AGE)
    }

    pub fn mode_of_inheritance() -> Self {
        Self::vocabulary(INHERITANCE_MODE)
    }

    pub fn sex_code() -> Self {
        Self::vocabulary(PEDIGREE_SEX)
    }

    pub fn affected_status_code() -> Self {
        Self::vocabulary(PEDIGREE_AFFECTED_STATUS)
    }

    pub fn vocabulary(vocabulary: Vocabulary) -> Self {
        Self::Vocabulary {
            vocabulary,
            message: None,
        }
    }

    /// Replace the generated message of a format or vocabulary check.
    #[must_use]
    pub fn with_message(self, message: impl Into<String>) -> Self {
        let message = message.into();
        match self {
            Self::Present { .. } => Self::Present { message },
            Self::HpoTerm { .. } => Self::HpoTerm {
                message: Some(message),
            },
            Self::OmimTerm { .. } => Self::OmimTerm {
                message: Some(message),
            },
            Self::Vocabulary { vocabulary, .. } => Self::Vocabulary {
                vocabulary,
                message: Some(message),
            },
        }
    }

    /// Run the check. List values are checked element-wise and every failing
    /// element contributes one message.
    pub fn validate(&self, value: Option<&TypedValue>) -> Vec<String> {
        if let Self::Present { message } = self {
            return validate_present(value, message).into_iter().collect();
        }
        match value {
            None => Vec::new(),
            Some(TypedValue::TextList(items)) => items
                .iter()
                .filter_map(|item| self.validate_term(item))
                .collect(),
            Some(TypedValue::Text(text)) => self.validate_term(text).into_iter().collect(),
            Some(other) => self.validate_term(&other.to_string()).into_iter().collect(),
        }
    }

    fn validate_term(&self, value: &str) -> Option<String> {
        match self {
            Self::Present { .. } => None,
            Self::HpoTerm { message } => validate_hpo_term(value, message.as_deref()),
            Self::OmimTerm { message } => validate_omim_term(value, message.as_deref()),
            Self::Vocabulary {
                vocabulary,
                message,
            } => validate_vocabulary_term(value, vocabulary, message.as_deref()),
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::Present { .. } => "present",
            Self::HpoTerm { .. } => "HPO term",
            Self::OmimTerm { .. } => "OMIM term",
            Self::Vocabulary { vocabulary, .. } => vocabulary.name,
        }
    }
}
