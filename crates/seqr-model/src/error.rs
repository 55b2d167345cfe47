use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ModelError {
    /// A record handed to the validator was neither an array nor an object.
    #[error("expected an array or an object for a template row, but received {found}")]
    UnsupportedRecordShape { found: &'static str },

    /// A field inside a record was itself an array or an object.
    #[error("field {field} must be a scalar value, but received {found}")]
    NonScalarField { field: String, found: &'static str },
}

pub type Result<T> = std::result::Result<T, ModelError>;
