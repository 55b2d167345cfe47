//! Individual metadata template (phenotypes, demographics, assisted reproduction).

use seqr_validate::{Coercer, ColumnBuilder, ColumnDefinition, TemplateSchema, Validator};

use crate::kind::TemplateKind;

fn flag(id: &str, key: &str) -> ColumnBuilder {
    ColumnDefinition::builder(id, key).coercer(Coercer::Boolean)
}

fn list(id: &str, key: &str) -> ColumnBuilder {
    ColumnDefinition::builder(id, key).coercer(Coercer::text_list())
}

fn year(id: &str, key: &str) -> ColumnBuilder {
    ColumnDefinition::builder(id, key).coercer(Coercer::Year)
}

pub(crate) fn individual_schema() -> TemplateSchema {
    TemplateSchema::builder(TemplateKind::IndividualMetadata.label())
        .column(
            ColumnDefinition::builder("familyId", "Family ID")
                .required_with_message("A family ID must be present."),
        )
        .column(
            ColumnDefinition::builder("individualId", "Individual ID")
                .required_with_message("An individual ID must be present.")
                .unique(),
        )
        .column(list("hpoTermsPresent", "HPO Terms (present)").validator(Validator::hpo_term()))
        .column(list("hpoTermsAbsent", "HPO Terms (absent)").validator(Validator::hpo_term()))
        .column(year("birthYear", "Birth Year"))
        .column(year("deathYear", "Death Year"))
        .column(
            ColumnDefinition::builder("ageOfOnset", "Age of Onset")
                .validator(Validator::onset_category()),
        )
        .column(ColumnDefinition::builder("individualNotes", "Individual Notes"))
        .column(flag("consanguinity", "Consanguinity"))
        .column(flag("otherAffectedRelatives", "Other Affected Relatives"))
        .column(
            list("expectedInheritanceMode", "Expected Mode of Inheritance")
                .validator(Validator::mode_of_inheritance()),
        )
        .column(flag("fertilityMedications", "Fertility medications"))
        .column(flag("intrauterineInsemination", "Intrauterine insemination"))
        .column(flag("inVitroFertilization", "In vitro fertilization"))
        .column(flag(
            "intraCytoplasmicSpermInjection",
            "Intra-cytoplasmic sperm injection",
        ))
        .column(flag("gestationalSurrogacy", "Gestational surrogacy"))
        .column(flag("donorEgg", "Donor egg"))
        .column(flag("donorSperm", "Donor sperm"))
        .column(list("maternalAncestry", "Maternal Ancestry"))
        .column(list("paternalAncestry", "Paternal Ancestry"))
        .column(
            list("preDiscoveryOmimDisorders", "Pre-discovery OMIM disorders")
                .validator(Validator::omim_term()),
        )
        .column(list("previouslyTestedGenes", "Previously Tested Genes"))
        .column(list("candidateGenes", "Candidate Genes"))
        .build()
        .expect("individual template columns are distinct")
}
