//! Name filter over the loaded page
//!
//! Pure functions: same query and records always give the same view, and the
//! records are never touched.

use crate::listing::CharacterRecord;

/// Indices of records whose name contains `query`, ignoring case
///
/// Order follows `records`. An empty query matches everything.
pub fn matching_indices(query: &str, records: &[CharacterRecord]) -> Vec<usize> {
    if query.is_empty() {
        return (0..records.len()).collect();
    }

    let needle = query.to_lowercase();
    records
        .iter()
        .enumerate()
        .filter(|(_, record)| record.name.to_lowercase().contains(&needle))
        .map(|(idx, _)| idx)
        .collect()
}
