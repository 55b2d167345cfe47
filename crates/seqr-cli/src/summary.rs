//! Terminal rendering of parse results and template layouts.

use std::path::Path;

use comfy_table::modifiers::{UTF8_ROUND_CORNERS, UTF8_SOLID_INNER_BORDERS};
use comfy_table::presets::{UTF8_FULL, UTF8_FULL_CONDENSED};
use comfy_table::{
    Attribute, Cell, CellAlignment, Color, ColumnConstraint, ContentArrangement, Table, Width,
};

use seqr_model::ParseResult;
use seqr_standards::TemplateKind;
use seqr_validate::TemplateSchema;

/// One reported problem: the row it belongs to (if any), the column label
/// and the message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Issue {
    pub row: Option<usize>,
    pub column: Option<String>,
    pub message: String,
}

/// Every problem in `result`: file-level messages first, then cell errors
/// in row and column order.
pub fn collect_issues(result: &ParseResult) -> Vec<Issue> {
    let file_level = result.errors.iter().map(|message| Issue {
        row: None,
        column: None,
        message: message.clone(),
    });
    let cells = result.invalid_rows().flat_map(|row| {
        row.errors().map(|(key, message)| Issue {
            row: Some(row.index),
            column: Some(key.to_string()),
            message: message.to_string(),
        })
    });
    file_level.chain(cells).collect()
}

pub fn print_result(file: &Path, kind: TemplateKind, result: &ParseResult) {
    println!("File: {}", file.display());
    println!("Template: {}", kind.label());
    let status = if result.valid { "valid" } else { "invalid" };
    println!(
        "Rows: {} ({} invalid), status: {status}",
        result.rows.len(),
        result.invalid_row_count()
    );
    let issues = collect_issues(result);
    if issues.is_empty() {
        return;
    }
    println!();
    println!("{}", issue_table(&issues));
}

pub fn issue_table(issues: &[Issue]) -> Table {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Row"),
        header_cell("Column"),
        header_cell("Message"),
    ]);
    apply_issue_table_style(&mut table);
    align_column(&mut table, 0, CellAlignment::Right);
    for issue in issues {
        let row_cell = match issue.row {
            Some(index) => Cell::new(index),
            None => dim_cell("file"),
        };
        let column_cell = match &issue.column {
            Some(column) => Cell::new(column).fg(Color::Blue),
            None => dim_cell("-"),
        };
        let message_cell = if issue.row.is_some() {
            Cell::new(&issue.message)
        } else {
            Cell::new(&issue.message)
                .fg(Color::Red)
                .add_attribute(Attribute::Bold)
        };
        table.add_row(vec![row_cell, column_cell, message_cell]);
    }
    table
}

pub fn print_columns(kind: TemplateKind) {
    println!("Template: {}", kind.label());
    println!("{}", columns_table(kind.schema()));
}

pub fn columns_table(schema: &TemplateSchema) -> Table {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("#"),
        header_cell("Column"),
        header_cell("Type"),
        header_cell("Required"),
        header_cell("Unique"),
        header_cell("Checks"),
    ]);
    apply_table_style(&mut table);
    align_column(&mut table, 0, CellAlignment::Right);
    align_column(&mut table, 3, CellAlignment::Center);
    align_column(&mut table, 4, CellAlignment::Center);
    for column in schema.columns() {
        let checks: Vec<&str> = column
            .validators()
            .iter()
            .map(|validator| validator.name())
            .filter(|name| *name != "present")
            .collect();
        table.add_row(vec![
            Cell::new(column.index()),
            Cell::new(column.key()).add_attribute(Attribute::Bold),
            Cell::new(column.coercer().name()),
            flag_cell(column.is_required()),
            flag_cell(column.is_unique()),
            if checks.is_empty() {
                dim_cell("-")
            } else {
                Cell::new(checks.join(", "))
            },
        ]);
    }
    table
}

fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(120);
}

fn apply_issue_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .apply_modifier(UTF8_SOLID_INNER_BORDERS)
        .set_content_arrangement(ContentArrangement::DynamicFullWidth)
        .set_width(140);
    table.set_constraints(vec![
        ColumnConstraint::LowerBoundary(Width::Fixed(5)),
        ColumnConstraint::UpperBoundary(Width::Percentage(30)),
        ColumnConstraint::UpperBoundary(Width::Percentage(65)),
    ]);
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}

fn flag_cell(set: bool) -> Cell {
    if set {
        Cell::new("✓")
            .fg(Color::Green)
            .add_attribute(Attribute::Bold)
    } else {
        dim_cell("-")
    }
}

fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

fn dim_cell<T: ToString>(value: T) -> Cell {
    Cell::new(value).fg(Color::DarkGrey)
}
