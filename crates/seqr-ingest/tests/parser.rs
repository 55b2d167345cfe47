use seqr_ingest::{
    INVALID_HEADER_MESSAGE, IngestError, ParserOptions, TemplateFileParser, TemplateSource,
    UNSUPPORTED_FILE_MESSAGE,
};
use seqr_model::{INVALID_ROWS_MESSAGE, TypedValue};
use seqr_standards::TemplateKind;

const FAMILY_HEADER: &str = "Family ID,Display Name,Description,Coded Phenotype";
const PEDIGREE_HEADER: &str =
    "Family ID\tIndividual ID\tPaternal ID\tMaternal ID\tSex\tAffected Status\tNotes";

fn parser(kind: TemplateKind) -> TemplateFileParser {
    TemplateFileParser::for_kind(kind, ParserOptions::default())
}

fn csv(name: &str, lines: &[&str]) -> TemplateSource {
    TemplateSource::from_bytes(name, format!("{}\n", lines.join("\n")))
}

fn individual_header() -> Vec<String> {
    TemplateKind::IndividualMetadata
        .schema()
        .keys()
        .into_iter()
        .map(|key| {
            if key.contains(',') {
                format!("\"{key}\"")
            } else {
                key.to_string()
            }
        })
        .collect()
}

fn individual_row(overrides: &[(&str, &str)]) -> String {
    TemplateKind::IndividualMetadata
        .schema()
        .keys()
        .into_iter()
        .map(|key| match key {
            "Family ID" => "F1".to_string(),
            "Individual ID" => "I1".to_string(),
            _ => overrides
                .iter()
                .find(|(name, _)| *name == key)
                .map_or_else(String::new, |(_, value)| format!("\"{value}\"")),
        })
        .collect::<Vec<_>>()
        .join(",")
}

#[test]
fn family_file_is_valid_and_lists_are_deduplicated() {
    let source = csv("families.csv", &[FAMILY_HEADER, "F1,,,\"HP1,HP1,HP2\""]);
    let result = parser(TemplateKind::Family).parse(&source).unwrap();

    assert!(result.valid);
    assert!(result.errors.is_empty());
    assert_eq!(result.rows.len(), 1);
    assert_eq!(
        result.rows[0].cell("codedPhenotype").unwrap().value,
        Some(TypedValue::from(vec!["HP1".to_string(), "HP2".to_string()]))
    );
    assert_eq!(result.rows[0].cell("displayName").unwrap().value, None);
}

#[test]
fn missing_header_column_rejects_file() {
    let header = individual_header()
        .into_iter()
        .filter(|key| key != "HPO Terms (present)")
        .collect::<Vec<_>>()
        .join(",");
    let source = csv("individuals.csv", &[&header, "F1,I1"]);
    let result = parser(TemplateKind::IndividualMetadata)
        .parse(&source)
        .unwrap();

    assert!(!result.valid);
    assert!(result.rows.is_empty());
    assert_eq!(result.errors, vec![INVALID_HEADER_MESSAGE]);
    assert_eq!(result.header.len(), 22);
}

#[test]
fn invalid_hpo_terms_are_reported_per_term() {
    let header = individual_header().join(",");
    let row = individual_row(&[("HPO Terms (present)", "HP:12,BAD")]);
    let source = csv("individuals.csv", &[&header, &row]);
    let result = parser(TemplateKind::IndividualMetadata)
        .parse(&source)
        .unwrap();

    assert!(!result.valid);
    assert_eq!(result.errors, vec![INVALID_ROWS_MESSAGE]);
    let cell = result.rows[0].cell("hpoTermsPresent").unwrap();
    assert!(!cell.valid);
    assert_eq!(
        cell.errors,
        vec![
            "'HP:12' is not a valid HPO term",
            "'BAD' is not a valid HPO term"
        ]
    );
}

#[test]
fn pedigree_requires_sex_and_affected_status() {
    let source = csv("pedigree.tsv", &[PEDIGREE_HEADER, "F1\tI1\t\t\t\t\t"]);
    let result = parser(TemplateKind::Pedigree).parse(&source).unwrap();

    let row = &result.rows[0];
    assert!(!row.valid);
    let errors: Vec<(&str, &str)> = row.errors().collect();
    assert_eq!(
        errors,
        vec![
            ("Sex", "Sex must be present."),
            ("Affected Status", "Affected status must be present."),
        ]
    );
}

#[test]
fn unsupported_extension_never_reaches_decoder() {
    // Bytes that would fail both the encoding check and UTF-8 decoding.
    let source = TemplateSource::from_bytes("families.xlsx", vec![0xFF, 0xFE, 0x00, 0xD8]);
    let result = parser(TemplateKind::Family).parse(&source).unwrap();

    assert!(!result.valid);
    assert!(result.header.is_empty());
    assert!(result.rows.is_empty());
    assert_eq!(result.errors, vec![UNSUPPORTED_FILE_MESSAGE]);
}

#[test]
fn duplicate_family_ids_flag_both_rows() {
    let source = csv("families.csv", &[FAMILY_HEADER, "F1,a,,", "F2,b,,", "F1,c,,"]);
    let result = parser(TemplateKind::Family).parse(&source).unwrap();

    assert!(!result.valid);
    assert_eq!(result.invalid_row_count(), 2);
    for index in [0, 2] {
        assert_eq!(
            result.rows[index].cell("familyId").unwrap().errors,
            vec!["'F1' is not unique, and was counted 2 times"]
        );
    }
    assert!(result.rows[1].valid);

    let lenient = TemplateFileParser::for_kind(
        TemplateKind::Family,
        ParserOptions::default().with_enforce_unique(false),
    );
    assert!(lenient.parse(&source).unwrap().valid);
}

#[test]
fn parsing_is_idempotent() {
    let source = csv("families.csv", &[FAMILY_HEADER, "F1,,,x", "F1,,,y", ",,,"]);
    let parser = parser(TemplateKind::Family);
    assert_eq!(parser.parse(&source).unwrap(), parser.parse(&source).unwrap());
}

#[test]
fn header_order_does_not_change_outcomes() {
    let parser = parser(TemplateKind::Family);
    let ordered = csv("a.csv", &[FAMILY_HEADER, "F1,Smith,,\"HP1, HP2\""]);
    let shuffled = csv(
        "b.csv",
        &[
            "Coded Phenotype,Description,Family ID,Display Name",
            "\"HP1, HP2\",,F1,Smith",
        ],
    );
    let ordered = parser.parse(&ordered).unwrap();
    let shuffled = parser.parse(&shuffled).unwrap();

    assert!(ordered.valid && shuffled.valid);
    assert_eq!(ordered.rows, shuffled.rows);
}

#[test]
fn ragged_rows_reject_file_before_cell_validation() {
    let source = csv("families.csv", &[FAMILY_HEADER, "F1,,", "F2,,,", "F3,,,,"]);
    let result = parser(TemplateKind::Family).parse(&source).unwrap();

    assert!(!result.valid);
    assert!(result.rows.is_empty());
    assert_eq!(
        result.errors,
        vec![
            "(Row 0) Too few fields: expected 4 fields but parsed 3",
            "(Row 2) Too many fields: expected 4 fields but parsed 5",
        ]
    );
}

#[test]
fn header_problems_win_over_ragged_rows() {
    let source = csv("families.csv", &["Family ID,Name", "F1"]);
    let result = parser(TemplateKind::Family).parse(&source).unwrap();
    assert_eq!(result.errors, vec![INVALID_HEADER_MESSAGE]);
}

#[test]
fn byte_order_mark_and_padding_in_header_are_ignored() {
    let source = TemplateSource::from_bytes(
        "families.CSV",
        "\u{feff}Family ID , Display Name,Description,Coded Phenotype\r\nF1,,,\r\n",
    );
    let result = parser(TemplateKind::Family).parse(&source).unwrap();
    assert!(result.valid, "{:?}", result.errors);
    assert_eq!(result.header[0], "Family ID");
}

#[test]
fn empty_file_has_invalid_header() {
    let source = TemplateSource::from_bytes("families.csv", "");
    let result = parser(TemplateKind::Family).parse(&source).unwrap();
    assert_eq!(result.errors, vec![INVALID_HEADER_MESSAGE]);
}

#[test]
fn header_only_file_is_valid() {
    let source = csv("families.csv", &[FAMILY_HEADER]);
    let result = parser(TemplateKind::Family).parse(&source).unwrap();
    assert!(result.valid);
    assert!(result.rows.is_empty());
}

#[test]
fn utf16_file_fails() {
    let mut bytes = vec![0xFF, 0xFE];
    for unit in "Family ID\n".encode_utf16() {
        bytes.extend_from_slice(&unit.to_le_bytes());
    }
    let err = parser(TemplateKind::Family)
        .parse(&TemplateSource::from_bytes("families.csv", bytes))
        .unwrap_err();
    assert!(matches!(
        err,
        IngestError::UnsupportedEncoding {
            encoding: "UTF-16 LE",
            ..
        }
    ));
}

#[test]
fn invalid_utf8_fails() {
    let mut bytes = format!("{FAMILY_HEADER}\nF1,").into_bytes();
    bytes.extend_from_slice(&[0xC3, 0x28]);
    bytes.extend_from_slice(b",,\n");
    let err = parser(TemplateKind::Family)
        .parse(&TemplateSource::from_bytes("families.csv", bytes))
        .unwrap_err();
    assert!(matches!(err, IngestError::Decode { .. }));
}

#[test]
fn oversized_file_fails() {
    let parser = TemplateFileParser::for_kind(
        TemplateKind::Family,
        ParserOptions::default().with_max_file_size(16),
    );
    let source = csv("families.csv", &[FAMILY_HEADER]);
    assert!(matches!(
        parser.parse(&source),
        Err(IngestError::FileTooLarge { max_size: 16, .. })
    ));
    assert!(matches!(
        parser.parse_reader("families.csv", source.bytes()),
        Err(IngestError::FileTooLarge { .. })
    ));
}

#[test]
fn reads_files_from_disk() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("pedigree.tsv");
    std::fs::write(&path, format!("{PEDIGREE_HEADER}\nF1\tI1\t\t\tF\tA\t\n")).unwrap();

    let result = parser(TemplateKind::Pedigree).parse_path(&path).unwrap();
    assert!(result.valid, "{:?}", result.errors);
    assert_eq!(
        result.rows[0].cell("sex").unwrap().value,
        Some(TypedValue::from("F"))
    );

    // The extension is checked before the file is opened.
    let result = parser(TemplateKind::Pedigree)
        .parse_path(dir.path().join("missing.ped"))
        .unwrap();
    assert_eq!(result.errors, vec![UNSUPPORTED_FILE_MESSAGE]);

    assert!(matches!(
        parser(TemplateKind::Pedigree).parse_path(dir.path().join("missing.tsv")),
        Err(IngestError::FileNotFound { .. })
    ));
}

#[test]
fn all_blank_records_are_validated() {
    let source = csv("families.csv", &[FAMILY_HEADER, "F1,,,", ",,,", "", "F2,,,"]);
    let result = parser(TemplateKind::Family).parse(&source).unwrap();

    assert!(!result.valid);
    assert_eq!(result.errors, vec![INVALID_ROWS_MESSAGE]);
    assert_eq!(result.rows.len(), 3);
    assert!(result.rows[0].valid);
    assert_eq!(result.rows[1].index, 1);
    assert_eq!(
        result.rows[1].cell("familyId").unwrap().errors,
        vec!["A family ID must be present."]
    );
    assert!(result.rows[2].valid);
}

#[test]
fn result_serializes_for_renderers() {
    let source = csv("families.csv", &[FAMILY_HEADER, ",x,,"]);
    let result = parser(TemplateKind::Family).parse(&source).unwrap();
    let json = serde_json::to_value(&result).unwrap();
    assert_eq!(json["valid"], false);
    assert_eq!(json["errors"][0], INVALID_ROWS_MESSAGE);
    assert_eq!(
        json["rows"][0]["columns"][0]["outcome"]["errors"][0],
        "A family ID must be present."
    );
}

#[tokio::test]
async fn async_parse_matches_sync_parse() {
    let parser = parser(TemplateKind::Family);
    let source = csv("families.csv", &[FAMILY_HEADER, "F1,,,", "F1,,,"]);
    let expected = parser.parse(&source).unwrap();
    let actual = parser.parse_async(source).await.unwrap();
    assert_eq!(actual, expected);
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn concurrent_parses_are_independent() {
    let parser = parser(TemplateKind::Family);
    let handles: Vec<_> = (0..8)
        .map(|n| {
            let parser = parser.clone();
            let source = csv(
                &format!("families-{n}.csv"),
                &[FAMILY_HEADER, &format!("F{n},,,"), "F,,,", "F,,,"],
            );
            tokio::spawn(async move { parser.parse_async(source).await })
        })
        .collect();

    for (n, handle) in handles.into_iter().enumerate() {
        let result = handle.await.unwrap().unwrap();
        assert_eq!(result.rows.len(), 3);
        assert!(result.rows[0].valid);
        assert_eq!(result.invalid_row_count(), 2);
        assert_eq!(
            result.rows[0].cell("familyId").unwrap().value,
            Some(TypedValue::from(format!("F{n}")))
        );
    }
}

#[tokio::test]
async fn async_failures_resolve_as_errors() {
    let parser = parser(TemplateKind::Family);
    let source = TemplateSource::from_bytes("families.csv", vec![0xFE, 0xFF, 0, b'F']);
    assert!(matches!(
        parser.parse_async(source).await,
        Err(IngestError::UnsupportedEncoding { .. })
    ));
}
