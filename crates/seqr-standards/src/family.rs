use seqr_validate::{Coercer, ColumnDefinition, TemplateSchema};

use crate::kind::TemplateKind;

pub(crate) fn family_schema() -> TemplateSchema {
    TemplateSchema::builder(TemplateKind::Family.label())
        .column(
            ColumnDefinition::builder("familyId", "Family ID")
                .required_with_message("A family ID must be present.")
                .unique(),
        )
        .column(ColumnDefinition::builder("displayName", "Display Name"))
        .column(ColumnDefinition::builder("description", "Description"))
        .column(
            ColumnDefinition::builder("codedPhenotype", "Coded Phenotype")
                .coercer(Coercer::text_list()),
        )
        .build()
        .expect("family template columns are distinct")
}
