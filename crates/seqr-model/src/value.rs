use std::fmt;

use serde::{Deserialize, Serialize};

/// A cell value after coercion.
///
/// Serialized untagged so that renderers receive plain JSON scalars and arrays.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum TypedValue {
    Boolean(bool),
    Number(f64),
    Text(String),
    TextList(Vec<String>),
}

impl TypedValue {
    /// True for empty text and empty lists. Booleans and numbers are never empty.
    pub fn is_empty(&self) -> bool {
        match self {
            Self::Text(text) => text.trim().is_empty(),
            Self::TextList(items) => items.is_empty(),
            Self::Boolean(_) | Self::Number(_) => false,
        }
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(text) => Some(text),
            _ => None,
        }
    }

    pub fn as_list(&self) -> Option<&[String]> {
        match self {
            Self::TextList(items) => Some(items),
            _ => None,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Boolean(value) => Some(*value),
            _ => None,
        }
    }

    pub fn as_number(&self) -> Option<f64> {
        match self {
            Self::Number(value) => Some(*value),
            _ => None,
        }
    }
}

impl fmt::Display for TypedValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Boolean(value) => write!(f, "{value}"),
            Self::Number(value) => write!(f, "{value}"),
            Self::Text(text) => f.write_str(text),
            Self::TextList(items) => f.write_str(&items.join(", ")),
        }
    }
}

impl From<String> for TypedValue {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<&str> for TypedValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<Vec<String>> for TypedValue {
    fn from(value: Vec<String>) -> Self {
        Self::TextList(value)
    }
}

impl From<bool> for TypedValue {
    fn from(value: bool) -> Self {
        Self::Boolean(value)
    }
}

impl From<f64> for TypedValue {
    fn from(value: f64) -> Self {
        Self::Number(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn emptiness() {
        assert!(TypedValue::from("  ").is_empty());
        assert!(TypedValue::TextList(vec![]).is_empty());
        assert!(!TypedValue::from(false).is_empty());
        assert!(!TypedValue::from(0.0).is_empty());
        assert!(!TypedValue::from(vec!["HP:0000001".to_string()]).is_empty());
    }

    #[test]
    fn serializes_untagged() {
        let list = TypedValue::from(vec!["a".to_string(), "b".to_string()]);
        assert_eq!(serde_json::to_string(&list).unwrap(), r#"["a","b"]"#);
        assert_eq!(
            serde_json::to_string(&TypedValue::from(true)).unwrap(),
            "true"
        );
        assert_eq!(
            serde_json::to_string(&TypedValue::from("1998")).unwrap(),
            r#""1998""#
        );
    }
}
