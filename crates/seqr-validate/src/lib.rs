//! Column rules and row validation for seqr template files.
//!
//! - [`coerce`]: raw cell text to typed values
//! - [`validators`], [`vocabulary`], [`unique`]: diagnostics over coerced values
//! - [`column`]: a column bound to its coercer and validators
//! - [`row`]: all columns of a schema applied to records
//! - [`schema`]: the ordered columns of one document type

pub mod coerce;
pub mod column;
pub mod error;
pub mod row;
pub mod schema;
pub mod unique;
pub mod validators;
pub mod vocabulary;

pub use coerce::{
    Coercer, DEFAULT_LIST_SEPARATOR, parse_boolean, parse_number, parse_string,
    parse_string_list, parse_year,
};
pub use column::{ColumnBuilder, ColumnDefinition};
pub use error::{Result, SchemaError};
pub use row::{validate_row, validate_rows};
pub use schema::{HeaderDiff, SchemaBuilder, TemplateSchema};
pub use unique::{unique_violations, validate_unique};
pub use validators::{
    Validator, validate_affected_status_code, validate_hpo_term, validate_hpo_terms,
    validate_mode_of_inheritance_term, validate_mode_of_inheritance_terms, validate_omim_term,
    validate_omim_terms, validate_onset_category, validate_present, validate_sex_code,
    validate_vocabulary_term,
};
pub use vocabulary::{Term, Vocabulary};
