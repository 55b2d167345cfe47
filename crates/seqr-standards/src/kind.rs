use std::fmt;
use std::str::FromStr;
use std::sync::LazyLock;

use serde::{Deserialize, Serialize};

use seqr_validate::TemplateSchema;

use crate::error::StandardsError;
use crate::family::family_schema;
use crate::individual::individual_schema;
use crate::pedigree::pedigree_schema;

static FAMILY: LazyLock<TemplateSchema> = LazyLock::new(family_schema);
static INDIVIDUAL_METADATA: LazyLock<TemplateSchema> = LazyLock::new(individual_schema);
static PEDIGREE: LazyLock<TemplateSchema> = LazyLock::new(pedigree_schema);

/// The document type an upload is validated as.
///
/// Callers always choose the kind; it is never inferred from file content.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TemplateKind {
    Family,
    IndividualMetadata,
    Pedigree,
}

impl TemplateKind {
    pub const ALL: [TemplateKind; 3] = [Self::Family, Self::IndividualMetadata, Self::Pedigree];

    /// Human-readable name, also used as the schema name.
    pub fn label(self) -> &'static str {
        match self {
            Self::Family => "Family metadata",
            Self::IndividualMetadata => "Individual metadata",
            Self::Pedigree => "Pedigree",
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Family => "family",
            Self::IndividualMetadata => "individual-metadata",
            Self::Pedigree => "pedigree",
        }
    }

    /// The shared schema for this kind, built on first use.
    pub fn schema(self) -> &'static TemplateSchema {
        match self {
            Self::Family => &FAMILY,
            Self::IndividualMetadata => &INDIVIDUAL_METADATA,
            Self::Pedigree => &PEDIGREE,
        }
    }
}

impl fmt::Display for TemplateKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TemplateKind {
    type Err = StandardsError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().replace('_', "-").as_str() {
            "family" | "families" => Ok(Self::Family),
            "individual" | "individual-metadata" | "individuals" => Ok(Self::IndividualMetadata),
            "pedigree" | "ped" => Ok(Self::Pedigree),
            _ => Err(StandardsError::UnknownTemplate {
                name: value.to_string(),
            }),
        }
    }
}
