//! Categorical counts and numeric series

use itertools::Itertools;
use rustc_hash::FxHashMap;
use std::cmp::Reverse;
use std::hash::Hash;

use crate::models::dataset::CategoryCounts;
use crate::models::field::Field;
use crate::models::row::FlatRow;

/// Count occurrences of each distinct value
///
/// Entries come out by descending count; ties keep the order in which the
/// values were first seen.
pub fn ordered_counts<K, I>(values: I) -> Vec<(K, u64)>
where
    K: Hash + Eq + Clone,
    I: IntoIterator<Item = K>,
{
    let mut index: FxHashMap<K, usize> = FxHashMap::default();
    let mut entries: Vec<(K, u64)> = Vec::new();

    for value in values {
        if let Some(&i) = index.get(&value) {
            entries[i].1 += 1;
        } else {
            index.insert(value.clone(), entries.len());
            entries.push((value, 1));
        }
    }

    entries
        .into_iter()
        .sorted_by_key(|(_, count)| Reverse(*count))
        .collect()
}

/// Count the non-null values of a column
#[must_use]
pub fn category_counts(rows: &[FlatRow], field: Field) -> CategoryCounts {
    CategoryCounts::from_entries(ordered_counts(rows.iter().filter_map(|row| row.label(field))))
}

/// All non-null values of a numeric column, in row order
#[must_use]
pub fn numeric_series(rows: &[FlatRow], field: Field) -> Vec<i32> {
    rows.iter().filter_map(|row| row.number(field)).collect()
}
