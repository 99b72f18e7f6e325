use std::collections::BTreeMap;

use serde::Serialize;

use crate::table::{KeyMode, LinkTable, PairKey};

/// Records sharing a join key that occurs more than once in one table.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DuplicateGroup {
    pub key: PairKey,
    pub count: usize,
    /// Zero-based row indices of every occurrence, in input order.
    pub rows: Vec<usize>,
}

/// Find join keys occurring more than once in `table`.
///
/// Read-only diagnostic; groups are returned in key order.
pub fn find_duplicates(table: &LinkTable, mode: KeyMode) -> Vec<DuplicateGroup> {
    let mut by_key: BTreeMap<PairKey, Vec<usize>> = BTreeMap::new();
    for (i, record) in table.records.iter().enumerate() {
        by_key.entry(record.key(mode)).or_default().push(i);
    }

    by_key
        .into_iter()
        .filter(|(_, rows)| rows.len() > 1)
        .map(|(key, rows)| DuplicateGroup {
            key,
            count: rows.len(),
            rows,
        })
        .collect()
}
