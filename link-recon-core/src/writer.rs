use std::fs;
use std::io;
use std::path::Path;

use thiserror::Error;

use crate::normalize::REQUIRED_COLUMNS;
use crate::reconcile::result::ReconEntry;
use crate::table::{LinkTable, PortValue};

/// Errors that can occur while writing CSV output.
#[derive(Debug, Error)]
pub enum WriteError {
    /// Failed to serialize CSV rows.
    #[error("failed to write CSV: {0}")]
    Csv(#[from] csv::Error),
    /// Failed to write the output file.
    #[error("failed to write output file: {0}")]
    Io(#[from] io::Error),
}

/// Column order of the reconciliation report.
pub const REPORT_COLUMNS: [&str; 8] = [
    "Source NE",
    "Destination NE",
    "Source Port (Left)",
    "Source Port (Right)",
    "Destination Port (Left)",
    "Destination Port (Right)",
    "Match Status",
    "Port Comparison",
];

/// Serialize reconciliation entries as CSV bytes.
pub fn report_csv(entries: &[ReconEntry]) -> Result<Vec<u8>, WriteError> {
    let mut writer = csv::Writer::from_writer(Vec::new());
    writer.write_record(REPORT_COLUMNS)?;

    for entry in entries {
        writer.write_record(&[
            entry.source_ne.clone(),
            entry.destination_ne.clone(),
            display_port(&entry.source_port_left),
            display_port(&entry.source_port_right),
            display_port(&entry.destination_port_left),
            display_port(&entry.destination_port_right),
            entry.match_status.to_string(),
            entry.port_comparison.to_string(),
        ])?;
    }

    finish(writer)
}

/// Serialize reconciliation entries and write them to `path`.
pub fn write_report_csv(entries: &[ReconEntry], path: &Path) -> Result<(), WriteError> {
    let bytes = report_csv(entries)?;
    fs::write(path, bytes)?;
    Ok(())
}

/// Serialize a link table as CSV bytes: required columns first, then
/// passthrough columns in table order.
pub fn table_csv(table: &LinkTable) -> Result<Vec<u8>, WriteError> {
    let mut writer = csv::Writer::from_writer(Vec::new());

    let mut header: Vec<String> = REQUIRED_COLUMNS.iter().map(ToString::to_string).collect();
    header.extend(table.extra_columns.iter().cloned());
    writer.write_record(&header)?;

    for record in &table.records {
        let mut row = vec![
            record.source_ne.clone(),
            record.destination_ne.clone(),
            record.source_port.to_string(),
            record.destination_port.to_string(),
        ];
        for column in &table.extra_columns {
            row.push(record.extra(column).unwrap_or("").to_string());
        }
        writer.write_record(&row)?;
    }

    finish(writer)
}

/// Serialize a link table and write it to `path`.
pub fn write_table_csv(table: &LinkTable, path: &Path) -> Result<(), WriteError> {
    let bytes = table_csv(table)?;
    fs::write(path, bytes)?;
    Ok(())
}

fn finish(mut writer: csv::Writer<Vec<u8>>) -> Result<Vec<u8>, WriteError> {
    writer.flush()?;
    writer
        .into_inner()
        .map_err(|err| WriteError::Io(io::Error::other(err.to_string())))
}

fn display_port(port: &Option<PortValue>) -> String {
    match port {
        Some(port) => port.to_string(),
        None => String::new(),
    }
}
