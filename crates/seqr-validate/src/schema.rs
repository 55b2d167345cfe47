//! Template schemas: the ordered columns of one document type.

use std::collections::BTreeSet;

use serde::Serialize;

use crate::column::{ColumnBuilder, ColumnDefinition};
use crate::error::{Result, SchemaError};

#[derive(Debug, Clone, PartialEq)]
pub struct TemplateSchema {
    name: String,
    columns: Vec<ColumnDefinition>,
}

/// Header columns that differ from a schema.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct HeaderDiff {
    /// Schema columns absent from the header, in schema order.
    pub missing: Vec<String>,
    /// Header fields the schema does not know, in header order.
    pub unexpected: Vec<String>,
}

impl HeaderDiff {
    pub fn is_empty(&self) -> bool {
        self.missing.is_empty() && self.unexpected.is_empty()
    }
}

impl TemplateSchema {
    pub fn builder(name: impl Into<String>) -> SchemaBuilder {
        SchemaBuilder {
            name: name.into(),
            columns: Vec::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn columns(&self) -> &[ColumnDefinition] {
        &self.columns
    }

    pub fn column(&self, id: &str) -> Option<&ColumnDefinition> {
        self.columns.iter().find(|column| column.id() == id)
    }

    /// Header labels in schema order.
    pub fn keys(&self) -> Vec<&str> {
        self.columns.iter().map(ColumnDefinition::key).collect()
    }

    pub fn len(&self) -> usize {
        self.columns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }

    /// Whether `header` holds exactly the schema's labels, in any order.
    pub fn matches_header(&self, header: &[String]) -> bool {
        let mut expected = self.keys();
        let mut actual: Vec<&str> = header.iter().map(String::as_str).collect();
        expected.sort_unstable();
        actual.sort_unstable();
        expected == actual
    }

    pub fn header_diff(&self, header: &[String]) -> HeaderDiff {
        let present: BTreeSet<&str> = header.iter().map(String::as_str).collect();
        let known: BTreeSet<&str> = self.keys().into_iter().collect();
        HeaderDiff {
            missing: self
                .keys()
                .into_iter()
                .filter(|key| !present.contains(key))
                .map(str::to_string)
                .collect(),
            unexpected: header
                .iter()
                .filter(|field| !known.contains(field.as_str()))
                .cloned()
                .collect(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct SchemaBuilder {
    name: String,
    columns: Vec<ColumnBuilder>,
}

impl SchemaBuilder {
    #[must_use]
    pub fn column(mut self, column: ColumnBuilder) -> Self {
        self.columns.push(column);
        self
    }

    /// Assign positions in declaration order and reject duplicate ids or labels.
    pub fn build(self) -> Result<TemplateSchema> {
        if self.columns.is_empty() {
            return Err(SchemaError::Empty {
                template: self.name,
            });
        }
        let mut ids = BTreeSet::new();
        let mut keys = BTreeSet::new();
        for column in &self.columns {
            if !ids.insert(column.id()) {
                return Err(SchemaError::DuplicateId {
                    template: self.name.clone(),
                    id: column.id().to_string(),
                });
            }
            if !keys.insert(column.key()) {
                return Err(SchemaError::DuplicateKey {
                    template: self.name.clone(),
                    key: column.key().to_string(),
                });
            }
        }
        let columns = self
            .columns
            .into_iter()
            .enumerate()
            .map(|(index, column)| column.build(index))
            .collect();
        Ok(TemplateSchema {
            name: self.name,
            columns,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn schema() -> TemplateSchema {
        TemplateSchema::builder("Family")
            .column(ColumnDefinition::builder("familyId", "Family ID").required())
            .column(ColumnDefinition::builder("displayName", "Display Name"))
            .build()
            .unwrap()
    }

    fn header(fields: &[&str]) -> Vec<String> {
        fields.iter().map(|f| (*f).to_string()).collect()
    }

    #[test]
    fn indexes_follow_declaration_order() {
        let schema = schema();
        for (position, column) in schema.columns().iter().enumerate() {
            assert_eq!(column.index(), position);
        }
        assert_eq!(schema.keys(), vec!["Family ID", "Display Name"]);
    }

    #[test]
    fn header_match_ignores_order() {
        let schema = schema();
        assert!(schema.matches_header(&header(&["Display Name", "Family ID"])));
        assert!(!schema.matches_header(&header(&["Family ID"])));
        assert!(!schema.matches_header(&header(&["Family ID", "Display Name", "Family ID"])));
    }

    #[test]
    fn diff_reports_both_sides() {
        let diff = schema().header_diff(&header(&["Family ID", "Name"]));
        assert_eq!(diff.missing, vec!["Display Name"]);
        assert_eq!(diff.unexpected, vec!["Name"]);
        assert!(!diff.is_empty());
    }

    #[test]
    fn duplicates_are_rejected() {
        let err = TemplateSchema::builder("Broken")
            .column(ColumnDefinition::builder("a", "A"))
            .column(ColumnDefinition::builder("a", "B"))
            .build()
            .unwrap_err();
        assert_eq!(
            err,
            SchemaError::DuplicateId {
                template: "Broken".to_string(),
                id: "a".to_string()
            }
        );

        let err = TemplateSchema::builder("Broken")
            .column(ColumnDefinition::builder("a", "A"))
            .column(ColumnDefinition::builder("b", "A"))
            .build()
            .unwrap_err();
        assert!(matches!(err, SchemaError::DuplicateKey { .. }));

        assert!(matches!(
            TemplateSchema::builder("Empty").build(),
            Err(SchemaError::Empty { .. })
        ));
    }
}
