//! Outer join of two link tables and per-key classification.
//!
//! Every input record from either table anchors exactly one output entry.
//! For a key with duplicates on a side, each left record is paired against
//! the first right record (a first-match lookup, not a cross product) and
//! right records beyond the first are paired against the first left record,
//! so none are dropped. Duplicate keys are additionally surfaced as
//! [`AmbiguousKey`] warnings rather than resolved silently.

use std::collections::HashMap;

use crate::reconcile::result::{
    AmbiguousKey, MatchStatus, PortComparison, ReconEntry, ReconOutcome, Side,
};
use crate::table::{KeyMode, LinkRecord, LinkTable, PairKey, PortValue};

/// Configures reconciliation behavior.
#[derive(Debug, Clone, Copy)]
pub struct ReconcileOptions {
    /// When false, A->B in one table matches B->A in the other.
    pub direction_sensitive: bool,
}

impl Default for ReconcileOptions {
    fn default() -> Self {
        Self {
            direction_sensitive: true,
        }
    }
}

impl ReconcileOptions {
    pub fn key_mode(&self) -> KeyMode {
        if self.direction_sensitive {
            KeyMode::Directional
        } else {
            KeyMode::Normalized
        }
    }
}

/// Reconcile two link tables with default options.
pub fn reconcile(left: &LinkTable, right: &LinkTable) -> ReconOutcome {
    reconcile_with_options(left, right, &ReconcileOptions::default())
}

/// Reconcile two link tables with custom options.
pub fn reconcile_with_options(
    left: &LinkTable,
    right: &LinkTable,
    opts: &ReconcileOptions,
) -> ReconOutcome {
    let mode = opts.key_mode();

    // Group record indices by key, keeping first-appearance order: left keys
    // first, then keys seen only in the right table.
    let mut key_order: Vec<PairKey> = Vec::new();
    let mut left_by_key: HashMap<PairKey, Vec<usize>> = HashMap::new();
    for (i, record) in left.records.iter().enumerate() {
        let key = record.key(mode);
        let slot = left_by_key.entry(key.clone()).or_default();
        if slot.is_empty() {
            key_order.push(key);
        }
        slot.push(i);
    }

    let mut right_by_key: HashMap<PairKey, Vec<usize>> = HashMap::new();
    for (i, record) in right.records.iter().enumerate() {
        let key = record.key(mode);
        let slot = right_by_key.entry(key.clone()).or_default();
        if slot.is_empty() && !left_by_key.contains_key(&key) {
            key_order.push(key);
        }
        slot.push(i);
    }

    let mut entries = Vec::new();
    let mut warnings = Vec::new();

    for key in &key_order {
        let lefts = left_by_key.get(key).map(Vec::as_slice).unwrap_or(&[]);
        let rights = right_by_key.get(key).map(Vec::as_slice).unwrap_or(&[]);

        if lefts.len() > 1 {
            warnings.push(AmbiguousKey {
                side: Side::Left,
                key: key.clone(),
                count: lefts.len(),
            });
        }
        if rights.len() > 1 {
            warnings.push(AmbiguousKey {
                side: Side::Right,
                key: key.clone(),
                count: rights.len(),
            });
        }

        match (lefts.first(), rights.first()) {
            (Some(_), None) => {
                for &i in lefts {
                    entries.push(one_sided_entry(&left.records[i], MatchStatus::OnlyInLeft));
                }
            }
            (None, Some(_)) => {
                for &i in rights {
                    entries.push(one_sided_entry(&right.records[i], MatchStatus::OnlyInRight));
                }
            }
            (Some(&l0), Some(&r0)) => {
                for &i in lefts {
                    entries.push(matched_entry(&left.records[i], &right.records[r0], mode));
                }
                for &j in &rights[1..] {
                    entries.push(matched_entry(&left.records[l0], &right.records[j], mode));
                }
            }
            (None, None) => {}
        }
    }

    ReconOutcome { entries, warnings }
}

/// Right-table port values oriented to match the left record's endpoint
/// order. In normalized mode a reversed right record has its ports swapped
/// so each port stays adjacent to its NE.
pub(crate) fn corrected_right_ports(
    left: &LinkRecord,
    right: &LinkRecord,
    mode: KeyMode,
) -> (PortValue, PortValue) {
    if mode == KeyMode::Normalized {
        if right.is_reversed_of(left) {
            return (right.destination_port.clone(), right.source_port.clone());
        }
        // A self-loop lists the same NE on both ends, so the endpoints alone
        // cannot say which way the right record is oriented. Keep the
        // straight orientation unless only the swapped one agrees with the
        // left record's ports.
        if left.source_ne == left.destination_ne
            && (left.source_port != right.source_port
                || left.destination_port != right.destination_port)
            && left.source_port == right.destination_port
            && left.destination_port == right.source_port
        {
            return (right.destination_port.clone(), right.source_port.clone());
        }
    }
    (right.source_port.clone(), right.destination_port.clone())
}

fn matched_entry(left: &LinkRecord, right: &LinkRecord, mode: KeyMode) -> ReconEntry {
    let (right_source_port, right_destination_port) = corrected_right_ports(left, right, mode);

    let source_differs = left.source_port != right_source_port;
    let destination_differs = left.destination_port != right_destination_port;

    let port_comparison = if !source_differs && !destination_differs {
        PortComparison::PortsMatched
    } else {
        let mut parts = Vec::new();
        if source_differs {
            parts.push(format!("Source Port (Right): {right_source_port}"));
        }
        if destination_differs {
            parts.push(format!("Destination Port (Right): {right_destination_port}"));
        }
        PortComparison::PortMismatch {
            description: parts.join(", "),
        }
    };

    ReconEntry {
        source_ne: left.source_ne.clone(),
        destination_ne: left.destination_ne.clone(),
        source_port_left: Some(left.source_port.clone()),
        source_port_right: Some(right_source_port),
        destination_port_left: Some(left.destination_port.clone()),
        destination_port_right: Some(right_destination_port),
        match_status: MatchStatus::Matched,
        port_comparison,
    }
}

fn one_sided_entry(record: &LinkRecord, status: MatchStatus) -> ReconEntry {
    let (source_left, source_right, destination_left, destination_right) = match status {
        MatchStatus::OnlyInLeft => (
            Some(record.source_port.clone()),
            None,
            Some(record.destination_port.clone()),
            None,
        ),
        _ => (
            None,
            Some(record.source_port.clone()),
            None,
            Some(record.destination_port.clone()),
        ),
    };

    ReconEntry {
        source_ne: record.source_ne.clone(),
        destination_ne: record.destination_ne.clone(),
        source_port_left: source_left,
        source_port_right: source_right,
        destination_port_left: destination_left,
        destination_port_right: destination_right,
        match_status: status,
        port_comparison: PortComparison::NotApplicable,
    }
}
