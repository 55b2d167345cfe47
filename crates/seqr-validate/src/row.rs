//! Row validation: every column rule of a schema applied to one record.

use seqr_model::{CellOutcome, ColumnOutcome, RawRecord, RowOutcome, TypedValue};
use tracing::trace;

use crate::schema::TemplateSchema;
use crate::unique::unique_violations;

/// Validate a single record against every column, in schema order.
///
/// Cross-row constraints are not evaluated here; see [`validate_rows`].
pub fn validate_row(schema: &TemplateSchema, index: usize, record: &RawRecord) -> RowOutcome {
    assemble_row(schema, index, parse_cells(schema, record))
}

/// Validate all records of a file, then apply column uniqueness.
///
/// Outcomes keep the order of `records`; indexes are 0-based positions.
pub fn validate_rows<'a, I>(
    schema: &TemplateSchema,
    records: I,
    enforce_unique: bool,
) -> Vec<RowOutcome>
where
    I: IntoIterator<Item = &'a RawRecord>,
{
    let mut cells: Vec<Vec<CellOutcome>> = records
        .into_iter()
        .map(|record| parse_cells(schema, record))
        .collect();

    if enforce_unique {
        apply_uniqueness(schema, &mut cells);
    }

    cells
        .into_iter()
        .enumerate()
        .map(|(index, row)| {
            let outcome = assemble_row(schema, index, row);
            if !outcome.valid {
                trace!(row = index, errors = outcome.errors().count(), "invalid row");
            }
            outcome
        })
        .collect()
}

fn assemble_row(schema: &TemplateSchema, index: usize, cells: Vec<CellOutcome>) -> RowOutcome {
    let columns = schema
        .columns()
        .iter()
        .zip(cells)
        .map(|(column, outcome)| ColumnOutcome {
            column: column.identity().clone(),
            outcome,
        })
        .collect();
    RowOutcome::new(index, columns)
}

fn parse_cells(schema: &TemplateSchema, record: &RawRecord) -> Vec<CellOutcome> {
    schema
        .columns()
        .iter()
        .map(|column| column.parse(record))
        .collect()
}

fn apply_uniqueness(schema: &TemplateSchema, cells: &mut [Vec<CellOutcome>]) {
    for (position, column) in schema.columns().iter().enumerate() {
        if !column.is_unique() {
            continue;
        }
        let values: Vec<Option<String>> = cells
            .iter()
            .map(|row| row[position].value.as_ref().and_then(unique_key))
            .collect();
        let violations = unique_violations(&values, None);
        for (row, violation) in cells.iter_mut().zip(violations) {
            let Some(message) = violation else {
                continue;
            };
            row[position] = row[position].clone().with_errors([message]);
        }
    }
}

fn unique_key(value: &TypedValue) -> Option<String> {
    if value.is_empty() {
        return None;
    }
    Some(value.to_string().trim().to_string())
}
