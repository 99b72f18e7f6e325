//! Corrected-table generation.
//!
//! Produces a copy of the left table where the right table's port values win
//! and links recorded only on the right are appended. Reconciling the result
//! against the same right table shows no missing-in-left entries and no port
//! mismatches, provided the right table has no internal duplicate keys.

use std::collections::{HashMap, HashSet};

use crate::reconcile::engine::{corrected_right_ports, ReconcileOptions};
use crate::table::{KeyMode, LinkRecord, LinkTable, PairKey};

/// Build a corrected copy of `left`. The caller's tables are never mutated.
///
/// For every key present in both tables, the left record keeps its endpoint
/// order and passthrough columns but takes the right record's
/// direction-corrected ports. Keys present only on the right are appended,
/// canonicalized when direction is ignored. The output is de-duplicated by
/// the active join key, keeping the earliest entry.
pub fn generate_fix(left: &LinkTable, right: &LinkTable, opts: &ReconcileOptions) -> LinkTable {
    let mode = opts.key_mode();

    let mut right_first: HashMap<PairKey, usize> = HashMap::new();
    for (i, record) in right.records.iter().enumerate() {
        right_first.entry(record.key(mode)).or_insert(i);
    }

    let mut extra_columns = left.extra_columns.clone();
    for column in &right.extra_columns {
        if !extra_columns.contains(column) {
            extra_columns.push(column.clone());
        }
    }

    let mut fixed = LinkTable {
        name: format!("{} (fixed)", left.name),
        extra_columns,
        records: Vec::new(),
    };
    let mut seen: HashSet<PairKey> = HashSet::new();

    for record in &left.records {
        let key = record.key(mode);
        if !seen.insert(key.clone()) {
            continue;
        }
        let mut out = record.clone();
        if let Some(&i) = right_first.get(&key) {
            let (source_port, destination_port) =
                corrected_right_ports(record, &right.records[i], mode);
            out.source_port = source_port;
            out.destination_port = destination_port;
        }
        fixed.records.push(out);
    }

    for record in &right.records {
        let key = record.key(mode);
        if !seen.insert(key) {
            continue;
        }
        fixed.records.push(canonicalize(record, mode));
    }

    fixed
}

fn canonicalize(record: &LinkRecord, mode: KeyMode) -> LinkRecord {
    let mut out = record.clone();
    if mode == KeyMode::Normalized && out.destination_ne < out.source_ne {
        std::mem::swap(&mut out.source_ne, &mut out.destination_ne);
        std::mem::swap(&mut out.source_port, &mut out.destination_port);
    }
    out
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::generate_fix;
    use crate::reconcile::engine::{reconcile_with_options, ReconcileOptions};
    use crate::reconcile::result::{MatchStatus, PortComparison};
    use crate::table::{LinkRecord, LinkTable, PortValue};

    fn record(src: &str, dst: &str, sport: &str, dport: &str) -> LinkRecord {
        LinkRecord {
            source_ne: src.to_string(),
            destination_ne: dst.to_string(),
            source_port: PortValue::from_raw(sport),
            destination_port: PortValue::from_raw(dport),
            extras: Vec::new(),
        }
    }

    fn table(name: &str, records: Vec<LinkRecord>) -> LinkTable {
        LinkTable {
            name: name.to_string(),
            extra_columns: Vec::new(),
            records,
        }
    }

    fn insensitive() -> ReconcileOptions {
        ReconcileOptions {
            direction_sensitive: false,
        }
    }

    #[test]
    fn mismatched_ports_take_the_right_values() {
        let left = table("left", vec![record("A", "B", "1", "2")]);
        let right = table("right", vec![record("A", "B", "1", "9")]);

        let fixed = generate_fix(&left, &right, &ReconcileOptions::default());
        assert_eq!(
            fixed.records[0].destination_port,
            PortValue::Named("9".to_string())
        );
    }

    #[test]
    fn reversed_right_ports_are_corrected_before_overwrite() {
        let left = table("left", vec![record("A", "B", "1", "2")]);
        let right = table("right", vec![record("B", "A", "9", "1")]);

        let fixed = generate_fix(&left, &right, &insensitive());
        // Right lists B first, so its source port belongs to the left
        // record's destination side.
        assert_eq!(fixed.records[0].source_ne, "A");
        assert_eq!(
            fixed.records[0].source_port,
            PortValue::Named("1".to_string())
        );
        assert_eq!(
            fixed.records[0].destination_port,
            PortValue::Named("9".to_string())
        );
    }

    #[test]
    fn self_loop_ports_keep_left_orientation_when_they_agree() {
        let left = table("left", vec![record("A", "A", "1", "2")]);
        let right = table("right", vec![record("A", "A", "2", "1")]);

        let fixed = generate_fix(&left, &right, &insensitive());
        assert_eq!(
            fixed.records[0].source_port,
            PortValue::Named("1".to_string())
        );
        assert_eq!(
            fixed.records[0].destination_port,
            PortValue::Named("2".to_string())
        );
    }

    #[test]
    fn right_only_links_are_appended_canonicalized() {
        let left = table("left", vec![record("A", "B", "1", "2")]);
        let right = table(
            "right",
            vec![record("A", "B", "1", "2"), record("Z", "C", "5", "6")],
        );

        let fixed = generate_fix(&left, &right, &insensitive());
        assert_eq!(fixed.records.len(), 2);
        assert_eq!(fixed.records[1].source_ne, "C");
        assert_eq!(fixed.records[1].destination_ne, "Z");
        assert_eq!(
            fixed.records[1].source_port,
            PortValue::Named("6".to_string())
        );
    }

    #[test]
    fn duplicate_left_keys_keep_the_earliest_entry() {
        let left = table(
            "left",
            vec![record("A", "B", "1", "2"), record("B", "A", "9", "9")],
        );
        let right = table("right", vec![record("A", "B", "1", "2")]);

        let fixed = generate_fix(&left, &right, &insensitive());
        assert_eq!(fixed.records.len(), 1);
        assert_eq!(fixed.records[0].source_ne, "A");
    }

    #[test]
    fn fixing_then_reconciling_converges() {
        let left = table(
            "left",
            vec![record("A", "B", "1", "2"), record("C", "D", "3", "4")],
        );
        let right = table(
            "right",
            vec![
                record("B", "A", "2", "7"),
                record("E", "F", "5", "6"),
                record("C", "D", "3", "4"),
            ],
        );
        let opts = insensitive();

        let fixed = generate_fix(&left, &right, &opts);
        let outcome = reconcile_with_options(&fixed, &right, &opts);

        assert!(outcome
            .entries
            .iter()
            .all(|e| e.match_status != MatchStatus::OnlyInRight));
        assert!(outcome
            .entries
            .iter()
            .all(|e| !matches!(e.port_comparison, PortComparison::PortMismatch { .. })));
    }

    #[test]
    fn passthrough_columns_from_both_tables_are_merged() {
        let mut left = table("left", vec![record("A", "B", "1", "2")]);
        left.extra_columns = vec!["Region".to_string()];
        let mut right = table("right", vec![record("C", "D", "3", "4")]);
        right.extra_columns = vec!["Notes".to_string()];

        let fixed = generate_fix(&left, &right, &ReconcileOptions::default());
        assert_eq!(fixed.extra_columns, vec!["Region", "Notes"]);
        assert_eq!(fixed.name, "left (fixed)");
    }
}
