//! Uniqueness across a whole column.
//!
//! Unlike the cell validators, uniqueness can only be decided once every row
//! of a file has been read, so these functions take the full column.

use std::collections::HashMap;
use std::fmt::Display;
use std::hash::Hash;

fn count_occurrences<T: Eq + Hash>(collection: &[T]) -> HashMap<&T, usize> {
    let mut counts = HashMap::new();
    for item in collection {
        *counts.entry(item).or_insert(0usize) += 1;
    }
    counts
}

fn duplicate_message<T: Display>(value: &T, count: usize, message: Option<&str>) -> String {
    message.map_or_else(
        || format!("'{value}' is not unique, and was counted {count} times"),
        str::to_string,
    )
}

/// One error per occurrence of every value counted more than once, in
/// collection order.
pub fn validate_unique<T>(collection: &[T], message: Option<&str>) -> Vec<String>
where
    T: Eq + Hash + Display,
{
    let counts = count_occurrences(collection);
    collection
        .iter()
        .filter_map(|item| {
            let count = counts[item];
            (count > 1).then(|| duplicate_message(item, count, message))
        })
        .collect()
}

/// Like [`validate_unique`], but parallel to the input so each error can be
/// attached to the cell it came from. Absent values are never duplicates.
pub fn unique_violations(values: &[Option<String>], message: Option<&str>) -> Vec<Option<String>> {
    let present: Vec<&String> = values.iter().flatten().collect();
    let counts = count_occurrences(&present);
    values
        .iter()
        .map(|value| {
            let value = value.as_ref()?;
            let count = counts[&value];
            (count > 1).then(|| duplicate_message(value, count, message))
        })
        .collect()
}
