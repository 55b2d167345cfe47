//! PED-style individual template.
//!
//! Sex and affected status stay raw coded characters (`M`/`F`/`U`,
//! `A`/`N`/`U`, or the numeric PED codes); they are checked, not converted.

use seqr_validate::{ColumnDefinition, TemplateSchema, Validator};

use crate::kind::TemplateKind;

pub(crate) fn pedigree_schema() -> TemplateSchema {
    TemplateSchema::builder(TemplateKind::Pedigree.label())
        .column(
            ColumnDefinition::builder("familyId", "Family ID")
                .required_with_message("A family ID must be present."),
        )
        .column(
            ColumnDefinition::builder("individualId", "Individual ID")
                .required_with_message("An individual ID must be present.")
                .unique(),
        )
        .column(ColumnDefinition::builder("paternalId", "Paternal ID"))
        .column(ColumnDefinition::builder("maternalId", "Maternal ID"))
        .column(
            ColumnDefinition::builder("sex", "Sex")
                .required_with_message("Sex must be present.")
                .validator(Validator::sex_code()),
        )
        .column(
            ColumnDefinition::builder("affected", "Affected Status")
                .required_with_message("Affected status must be present.")
                .validator(Validator::affected_status_code()),
        )
        .column(ColumnDefinition::builder("notes", "Notes"))
        .build()
        .expect("pedigree template columns are distinct")
}
