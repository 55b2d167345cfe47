use thiserror::Error;

/// Errors raised while assembling a template schema.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SchemaError {
    #[error("template {template} has no columns")]
    Empty { template: String },

    #[error("template {template} declares column id {id} more than once")]
    DuplicateId { template: String, id: String },

    #[error("template {template} declares header {key} more than once")]
    DuplicateKey { template: String, key: String },
}

pub type Result<T> = std::result::Result<T, SchemaError>;
