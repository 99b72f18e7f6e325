use std::fmt::{self, Display, Formatter};

use serde::Serialize;

use crate::table::{PairKey, PortValue};

/// Join outcome for a reconciled key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum MatchStatus {
    /// Key present in both tables.
    Matched,
    /// Key present only in the left table.
    OnlyInLeft,
    /// Key present only in the right table.
    OnlyInRight,
}

impl Display for MatchStatus {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            MatchStatus::Matched => write!(f, "Matched"),
            MatchStatus::OnlyInLeft => write!(f, "Only in Left"),
            MatchStatus::OnlyInRight => write!(f, "Only in Right"),
        }
    }
}

/// Port-level outcome for a reconciled key.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type")]
pub enum PortComparison {
    /// Both port fields agree after normalization.
    PortsMatched,
    /// One or both port fields differ; the description names the differing
    /// side(s) and the right-table value(s).
    PortMismatch { description: String },
    /// Key was not present on both sides, so no comparison applies.
    NotApplicable,
}

impl Display for PortComparison {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            PortComparison::PortsMatched => write!(f, "Ports Matched"),
            PortComparison::PortMismatch { description } => write!(f, "{description}"),
            PortComparison::NotApplicable => write!(f, "N/A"),
        }
    }
}

/// One reconciled output row.
///
/// `None` port values mean the side was absent from the join; a present but
/// unrecorded port is carried as [`PortValue::Absent`].
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReconEntry {
    pub source_ne: String,
    pub destination_ne: String,
    pub source_port_left: Option<PortValue>,
    pub source_port_right: Option<PortValue>,
    pub destination_port_left: Option<PortValue>,
    pub destination_port_right: Option<PortValue>,
    pub match_status: MatchStatus,
    pub port_comparison: PortComparison,
}

/// Which input table a warning refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Side {
    Left,
    Right,
}

impl Display for Side {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Side::Left => write!(f, "left"),
            Side::Right => write!(f, "right"),
        }
    }
}

/// A join key seen more than once on one side. First-match pairing was
/// applied; the duplicate rows need manual review.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AmbiguousKey {
    pub side: Side,
    pub key: PairKey,
    pub count: usize,
}

/// Everything produced by one reconciliation run.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReconOutcome {
    pub entries: Vec<ReconEntry>,
    pub warnings: Vec<AmbiguousKey>,
}
