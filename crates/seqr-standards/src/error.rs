#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum StandardsError {
    #[error("unknown template type {name} (expected family, individual-metadata or pedigree)")]
    UnknownTemplate { name: String },
}
