use std::fmt::{self, Display, Formatter};

use serde::{Serialize, Serializer};

/// Placeholder tokens treated as "no port recorded" on ingest.
pub const ABSENT_TOKENS: [&str; 5] = ["N/A", "NA", "n/a", "N/a", ""];

/// A port field after ingest normalization.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum PortValue {
    /// No port recorded (any of the recognized placeholder tokens).
    Absent,
    /// A concrete port identifier, treated as an opaque string.
    Named(String),
}

impl PortValue {
    /// Normalize a raw cell into a port value.
    pub fn from_raw(raw: &str) -> Self {
        let trimmed = raw.trim();
        if ABSENT_TOKENS.contains(&trimmed) {
            PortValue::Absent
        } else {
            PortValue::Named(trimmed.to_string())
        }
    }

    pub fn is_absent(&self) -> bool {
        matches!(self, PortValue::Absent)
    }
}

impl Display for PortValue {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            PortValue::Absent => write!(f, "N/A"),
            PortValue::Named(port) => write!(f, "{port}"),
        }
    }
}

impl Serialize for PortValue {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// Controls how a record's join key is derived from its endpoints.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyMode {
    /// A->B and B->A are distinct links.
    Directional,
    /// A->B and B->A are the same link; endpoints are canonicalized by sort.
    Normalized,
}

/// Join identity for a link record: an NE pair, canonicalized or not
/// depending on [`KeyMode`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct PairKey {
    pub first: String,
    pub second: String,
}

impl PairKey {
    pub fn for_record(record: &LinkRecord, mode: KeyMode) -> Self {
        match mode {
            KeyMode::Directional => PairKey {
                first: record.source_ne.clone(),
                second: record.destination_ne.clone(),
            },
            KeyMode::Normalized => {
                if record.destination_ne < record.source_ne {
                    PairKey {
                        first: record.destination_ne.clone(),
                        second: record.source_ne.clone(),
                    }
                } else {
                    PairKey {
                        first: record.source_ne.clone(),
                        second: record.destination_ne.clone(),
                    }
                }
            }
        }
    }
}

impl Display for PairKey {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{} -> {}", self.first, self.second)
    }
}

/// One link row: two NE endpoints, their ports, and untouched passthrough
/// columns.
#[derive(Debug, Clone, PartialEq)]
pub struct LinkRecord {
    pub source_ne: String,
    pub destination_ne: String,
    pub source_port: PortValue,
    pub destination_port: PortValue,
    /// (column, value) pairs for columns the engine does not interpret.
    pub extras: Vec<(String, String)>,
}

impl LinkRecord {
    pub fn key(&self, mode: KeyMode) -> PairKey {
        PairKey::for_record(self, mode)
    }

    /// True when this record lists the endpoints in the opposite order
    /// relative to `other`.
    pub fn is_reversed_of(&self, other: &LinkRecord) -> bool {
        self.source_ne != other.source_ne
            && self.source_ne == other.destination_ne
            && self.destination_ne == other.source_ne
    }

    /// Look up a passthrough column value by name.
    pub fn extra(&self, column: &str) -> Option<&str> {
        self.extras
            .iter()
            .find(|(name, _)| name == column)
            .map(|(_, value)| value.as_str())
    }
}

/// An ordered collection of link records from one source table.
#[derive(Debug, Clone, PartialEq)]
pub struct LinkTable {
    /// Label used in diagnostics ("left", "right", or a file name).
    pub name: String,
    /// Passthrough column names, in original header order.
    pub extra_columns: Vec<String>,
    pub records: Vec<LinkRecord>,
}

impl LinkTable {
    pub fn new(name: impl Into<String>) -> Self {
        LinkTable {
            name: name.into(),
            extra_columns: Vec::new(),
            records: Vec::new(),
        }
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
