use thiserror::Error;

use crate::table::{LinkRecord, LinkTable, PortValue};

/// Required columns, exact and case-sensitive.
pub const REQUIRED_COLUMNS: [&str; 4] = [
    "Source NE",
    "Destination NE",
    "Source Port",
    "Destination Port",
];

/// A raw table as produced by the readers: a header row plus string rows.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RawTable {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

/// Structural problems that abort a run before any output is produced.
#[derive(Debug, Error)]
pub enum SchemaError {
    /// One or more required columns are absent from the input table.
    #[error("{table}: missing required column(s): {}", columns.join(", "))]
    MissingColumns { table: String, columns: Vec<String> },
}

/// Normalize a raw table into a [`LinkTable`].
///
/// Verifies the required columns are present, rewrites placeholder port
/// tokens to [`PortValue::Absent`], and attaches any remaining columns to
/// their record as passthrough extras. Rows with both NE cells empty are
/// dropped as unusable.
pub fn normalize(raw: &RawTable, table_name: &str) -> Result<LinkTable, SchemaError> {
    let position = |name: &str| raw.headers.iter().position(|h| h == name);

    let src = position("Source NE");
    let dst = position("Destination NE");
    let sport = position("Source Port");
    let dport = position("Destination Port");

    let (Some(src), Some(dst), Some(sport), Some(dport)) = (src, dst, sport, dport) else {
        let columns = REQUIRED_COLUMNS
            .iter()
            .filter(|&name| position(name).is_none())
            .map(ToString::to_string)
            .collect();
        return Err(SchemaError::MissingColumns {
            table: table_name.to_string(),
            columns,
        });
    };

    let required = [src, dst, sport, dport];
    let extra_columns: Vec<String> = raw
        .headers
        .iter()
        .enumerate()
        .filter(|(i, _)| !required.contains(i))
        .map(|(_, h)| h.clone())
        .collect();

    let mut table = LinkTable {
        name: table_name.to_string(),
        extra_columns,
        records: Vec::new(),
    };

    for row in &raw.rows {
        let cell = |i: usize| row.get(i).map(String::as_str).unwrap_or("").trim();

        let source_ne = cell(src).to_string();
        let destination_ne = cell(dst).to_string();
        if source_ne.is_empty() && destination_ne.is_empty() {
            continue;
        }

        let extras = raw
            .headers
            .iter()
            .enumerate()
            .filter(|(i, _)| !required.contains(i))
            .map(|(i, h)| (h.clone(), cell(i).to_string()))
            .collect();

        table.records.push(LinkRecord {
            source_ne,
            destination_ne,
            source_port: PortValue::from_raw(cell(sport)),
            destination_port: PortValue::from_raw(cell(dport)),
            extras,
        });
    }

    Ok(table)
}
