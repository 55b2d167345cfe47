//! Column rules: one template column bound to its coercion and checks.

use seqr_model::{CellOutcome, ColumnIdentity, RawRecord};

use crate::coerce::Coercer;
use crate::validators::Validator;

/// An immutable template column.
///
/// Built through [`ColumnDefinition::builder`]; the position is assigned
/// when the column is added to a [`crate::TemplateSchema`].
#[derive(Debug, Clone, PartialEq)]
pub struct ColumnDefinition {
    identity: ColumnIdentity,
    coercer: Coercer,
    validators: Vec<Validator>,
    unique: bool,
}

impl ColumnDefinition {
    pub fn builder(id: impl Into<String>, key: impl Into<String>) -> ColumnBuilder {
        ColumnBuilder::new(id, key)
    }

    pub fn identity(&self) -> &ColumnIdentity {
        &self.identity
    }

    pub fn id(&self) -> &str {
        &self.identity.id
    }

    pub fn key(&self) -> &str {
        &self.identity.key
    }

    pub fn index(&self) -> usize {
        self.identity.index
    }

    pub fn is_required(&self) -> bool {
        self.identity.required
    }

    /// Whether values must be distinct across all rows of a file.
    pub fn is_unique(&self) -> bool {
        self.unique
    }

    pub fn coercer(&self) -> Coercer {
        self.coercer
    }

    pub fn validators(&self) -> &[Validator] {
        &self.validators
    }

    /// Read, coerce and check this column's cell in `record`.
    ///
    /// Every validator runs in declaration order and all messages are kept.
    pub fn parse(&self, record: &RawRecord) -> CellOutcome {
        let raw = record.field(self.identity.index, &self.identity.key);
        let value = self.coercer.coerce(raw);
        let errors = self
            .validators
            .iter()
            .flat_map(|validator| validator.validate(value.as_ref()))
            .collect();
        CellOutcome::new(value, errors)
    }
}

#[derive(Debug, Clone)]
pub struct ColumnBuilder {
    id: String,
    key: String,
    required: Option<String>,
    coercer: Coercer,
    validators: Vec<Validator>,
    unique: bool,
}

impl ColumnBuilder {
    fn new(id: impl Into<String>, key: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            key: key.into(),
            required: None,
            coercer: Coercer::default(),
            validators: Vec::new(),
            unique: false,
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    /// Mark the column required with the message `"<key> must be present."`.
    #[must_use]
    pub fn required(self) -> Self {
        let message = format!("{} must be present.", self.key);
        self.required_with_message(message)
    }

    #[must_use]
    pub fn required_with_message(mut self, message: impl Into<String>) -> Self {
        self.required = Some(message.into());
        self
    }

    #[must_use]
    pub fn coercer(mut self, coercer: Coercer) -> Self {
        self.coercer = coercer;
        self
    }

    #[must_use]
    pub fn validator(mut self, validator: Validator) -> Self {
        self.validators.push(validator);
        self
    }

    #[must_use]
    pub fn unique(mut self) -> Self {
        self.unique = true;
        self
    }

    /// Finish the column at `index`. The presence check, when required,
    /// runs before every other validator.
    pub(crate) fn build(self, index: usize) -> ColumnDefinition {
        let required = self.required.is_some();
        let mut validators = Vec::with_capacity(self.validators.len() + 1);
        if let Some(message) = self.required {
            validators.push(Validator::present(message));
        }
        validators.extend(self.validators);
        ColumnDefinition {
            identity: ColumnIdentity {
                id: self.id,
                key: self.key,
                index,
                required,
            },
            coercer: self.coercer,
            validators,
            unique: self.unique,
        }
    }
}

#[cfg(test)]
mod tests {
    use seqr_model::TypedValue;

    use super::*;

    fn hpo_column() -> ColumnDefinition {
        ColumnDefinition::builder("hpoTermsPresent", "HPO Terms (present)")
            .coercer(Coercer::text_list())
            .validator(Validator::hpo_term())
            .build(2)
    }

    #[test]
    fn reads_positional_and_keyed_rows() {
        let column = ColumnDefinition::builder("familyId", "Family ID")
            .required()
            .build(0);

        let positional = RawRecord::from(vec![" F1 ".to_string()]);
        assert_eq!(
            column.parse(&positional).value,
            Some(TypedValue::from("F1"))
        );

        let keyed = RawRecord::keyed_from(["Family ID"], ["F2"]);
        assert_eq!(column.parse(&keyed).value, Some(TypedValue::from("F2")));
    }

    #[test]
    fn required_column_reports_missing_value() {
        let column = ColumnDefinition::builder("familyId", "Family ID")
            .required_with_message("A family ID must be present.")
            .build(0);
        let outcome = column.parse(&RawRecord::from(vec!["   ".to_string()]));
        assert!(!outcome.valid);
        assert_eq!(outcome.value, None);
        assert_eq!(outcome.errors, vec!["A family ID must be present."]);
        assert!(column.is_required());
    }

    #[test]
    fn list_errors_are_flattened() {
        let outcome = hpo_column().parse(&RawRecord::keyed_from(
            ["HPO Terms (present)"],
            ["HP:0000001, HP:12,BAD"],
        ));
        assert!(!outcome.valid);
        assert_eq!(
            outcome.errors,
            vec![
                "'HP:12' is not a valid HPO term".to_string(),
                "'BAD' is not a valid HPO term".to_string(),
            ]
        );
    }

    #[test]
    fn optional_empty_list_is_valid() {
        let outcome = hpo_column().parse(&RawRecord::Positional(vec![]));
        assert!(outcome.valid);
        assert_eq!(outcome.value, Some(TypedValue::TextList(vec![])));
    }

    #[test]
    fn presence_runs_first() {
        let column = ColumnDefinition::builder("sex", "Sex")
            .validator(Validator::sex_code())
            .required()
            .build(4);
        assert!(matches!(column.validators()[0], Validator::Present { .. }));
        assert_eq!(column.validators().len(), 2);
    }
}
