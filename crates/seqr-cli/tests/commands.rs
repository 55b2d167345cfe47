use seqr_cli::commands::{parser_options, render_json, run_validate};
use seqr_cli::summary::{Issue, collect_issues, columns_table, issue_table};
use seqr_ingest::MAX_TEMPLATE_FILE_SIZE;
use seqr_standards::TemplateKind;

const FAMILY_HEADER: &str = "Family ID,Display Name,Description,Coded Phenotype";

fn write_file(dir: &tempfile::TempDir, name: &str, contents: &str) -> std::path::PathBuf {
    let path = dir.path().join(name);
    std::fs::write(&path, contents).unwrap();
    path
}

fn render(issues: &[Issue]) -> String {
    issues
        .iter()
        .map(|issue| {
            format!(
                "{} | {} | {}",
                issue.row.map_or_else(|| "file".to_string(), |row| row.to_string()),
                issue.column.as_deref().unwrap_or("-"),
                issue.message
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}

#[test]
fn options_from_flags() {
    let options = parser_options(Some(1024), true);
    assert_eq!(options.max_file_size, 1024);
    assert!(!options.enforce_unique);

    let options = parser_options(None, false);
    assert!(options.enforce_unique);
    assert!(options.max_file_size > 0);
    if std::env::var_os(seqr_ingest::MAX_FILE_SIZE_ENV).is_none() {
        assert_eq!(options.max_file_size, MAX_TEMPLATE_FILE_SIZE);
    }
}

#[test]
fn validate_reports_every_problem() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_file(
        &dir,
        "families.csv",
        &format!("{FAMILY_HEADER}\nF1,,,\nF1,,,\n,Smith,,\n"),
    );
    let result = run_validate(TemplateKind::Family, &path, parser_options(None, false)).unwrap();
    assert!(!result.valid);

    insta::assert_snapshot!(render(&collect_issues(&result)), @r"
    file | - | Some rows contain invalid information
    0 | Family ID | 'F1' is not unique, and was counted 2 times
    1 | Family ID | 'F1' is not unique, and was counted 2 times
    2 | Family ID | A family ID must be present.
    ");

    let table = issue_table(&collect_issues(&result)).to_string();
    assert!(table.contains("A family ID must be present."));
}

#[test]
fn duplicates_can_be_allowed() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_file(&dir, "families.csv", &format!("{FAMILY_HEADER}\nF1,,,\nF1,,,\n"));
    let result = run_validate(TemplateKind::Family, &path, parser_options(None, true)).unwrap();
    assert!(result.valid);
    assert!(collect_issues(&result).is_empty());
}

#[test]
fn wrong_extension_is_reported_not_failed() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_file(&dir, "families.xlsx", "not a spreadsheet");
    let result = run_validate(TemplateKind::Family, &path, parser_options(None, false)).unwrap();
    assert_eq!(
        render(&collect_issues(&result)),
        "file | - | Please upload a TSV or CSV file."
    );
}

#[test]
fn wrong_extension_is_reported_without_reading() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("families.xlsx");
    let result = run_validate(TemplateKind::Family, &path, parser_options(None, false)).unwrap();
    assert!(!result.valid);
    assert_eq!(
        render(&collect_issues(&result)),
        "file | - | Please upload a TSV or CSV file."
    );

    let oversized = write_file(&dir, "families.ods", &"x".repeat(64));
    let options = parser_options(Some(8), false);
    let result = run_validate(TemplateKind::Family, &oversized, options).unwrap();
    assert_eq!(result.errors, vec!["Please upload a TSV or CSV file."]);
}

#[test]
fn missing_file_fails_with_context() {
    let dir = tempfile::tempdir().unwrap();
    let error = run_validate(
        TemplateKind::Pedigree,
        &dir.path().join("pedigree.tsv"),
        parser_options(None, false),
    )
    .unwrap_err();
    assert!(format!("{error:#}").starts_with("read template: "));
    assert!(format!("{error:#}").contains("template file not found"));
}

#[test]
fn json_output_round_trips() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_file(&dir, "families.csv", &format!("{FAMILY_HEADER}\nF1,A,,\"x, y\"\n"));
    let result = run_validate(TemplateKind::Family, &path, parser_options(None, false)).unwrap();
    let json = render_json(&result).unwrap();
    let parsed: seqr_model::ParseResult = serde_json::from_str(&json).unwrap();
    assert_eq!(parsed, result);
}

#[test]
fn columns_table_lists_checks() {
    let table = columns_table(TemplateKind::IndividualMetadata.schema()).to_string();
    assert!(table.contains("HPO Terms (present)"));
    assert!(table.contains("HPO term"));
    assert!(table.contains("mode of inheritance"));
    assert!(table.contains("year"));
}
