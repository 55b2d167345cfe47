//! Raw input rows.
//!
//! A row reaches the validator either positionally (PED-style files, or any
//! caller that already split the line) or keyed by header label (decoded CSV
//! with a header row). The shape is resolved once, here, so column rules only
//! ever see one of the two variants.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::ModelError;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum RawRecord {
    Positional(Vec<String>),
    Keyed(BTreeMap<String, String>),
}

impl RawRecord {
    /// Read the raw field for a column.
    ///
    /// Positional records are read at `index`, keyed records at `key`.
    /// A field that does not exist reads as absent.
    pub fn field(&self, index: usize, key: &str) -> Option<&str> {
        match self {
            Self::Positional(fields) => fields.get(index).map(String::as_str),
            Self::Keyed(fields) => fields.get(key).map(String::as_str),
        }
    }

    pub fn len(&self) -> usize {
        match self {
            Self::Positional(fields) => fields.len(),
            Self::Keyed(fields) => fields.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Build a keyed record by zipping a header with a row of fields.
    ///
    /// Extra fields without a header label are dropped; missing trailing
    /// fields are simply absent.
    pub fn keyed_from<H, F>(header: H, fields: F) -> Self
    where
        H: IntoIterator,
        H::Item: Into<String>,
        F: IntoIterator,
        F::Item: Into<String>,
    {
        Self::Keyed(
            header
                .into_iter()
                .map(Into::into)
                .zip(fields.into_iter().map(Into::into))
                .collect(),
        )
    }
}

impl From<Vec<String>> for RawRecord {
    fn from(fields: Vec<String>) -> Self {
        Self::Positional(fields)
    }
}

impl From<BTreeMap<String, String>> for RawRecord {
    fn from(fields: BTreeMap<String, String>) -> Self {
        Self::Keyed(fields)
    }
}

impl TryFrom<Value> for RawRecord {
    type Error = ModelError;

    /// Accept a JSON array or object; anything else violates the row contract.
    fn try_from(value: Value) -> Result<Self, Self::Error> {
        match value {
            Value::Array(items) => items
                .into_iter()
                .enumerate()
                .map(|(idx, item)| scalar_to_string(item, &idx.to_string()))
                .collect::<Result<Vec<_>, _>>()
                .map(Self::Positional),
            Value::Object(entries) => entries
                .into_iter()
                .map(|(key, item)| {
                    let text = scalar_to_string(item, &key)?;
                    Ok((key, text))
                })
                .collect::<Result<BTreeMap<_, _>, _>>()
                .map(Self::Keyed),
            other => Err(ModelError::UnsupportedRecordShape {
                found: json_kind(&other),
            }),
        }
    }
}

fn scalar_to_string(value: Value, field: &str) -> Result<String, ModelError> {
    match value {
        Value::Null => Ok(String::new()),
        Value::Bool(flag) => Ok(flag.to_string()),
        Value::Number(number) => Ok(number.to_string()),
        Value::String(text) => Ok(text),
        other => Err(ModelError::NonScalarField {
            field: field.to_string(),
            found: json_kind(&other),
        }),
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
