#![deny(unsafe_code)]

pub mod error;
mod family;
mod individual;
pub mod kind;
mod pedigree;

pub use crate::error::StandardsError;
pub use crate::kind::TemplateKind;

/// Shortcut for `TemplateKind::Family.schema()`.
pub fn family() -> &'static seqr_validate::TemplateSchema {
    TemplateKind::Family.schema()
}

/// Shortcut for `TemplateKind::IndividualMetadata.schema()`.
pub fn individual_metadata() -> &'static seqr_validate::TemplateSchema {
    TemplateKind::IndividualMetadata.schema()
}

/// Shortcut for `TemplateKind::Pedigree.schema()`.
pub fn pedigree() -> &'static seqr_validate::TemplateSchema {
    TemplateKind::Pedigree.schema()
}
