use std::fs::File;
use std::path::Path;

use calamine::{open_workbook_auto, Data, Reader as WorkbookReader};
use thiserror::Error;

use crate::normalize::RawTable;

/// Errors that can occur while reading a table file.
#[derive(Debug, Error)]
pub enum ReadError {
    /// Failed to open or read the input file.
    #[error("failed to read table file: {0}")]
    Io(#[from] std::io::Error),
    /// Input CSV could not be parsed.
    #[error("failed to parse CSV: {0}")]
    Csv(#[from] csv::Error),
    /// Input workbook could not be opened or decoded.
    #[error("failed to open workbook: {0}")]
    Workbook(#[from] calamine::Error),
    /// Workbook has no worksheets to read.
    #[error("workbook contains no worksheets")]
    NoWorksheet,
}

/// Read a table file into a [`RawTable`], dispatching on extension.
///
/// `.xlsx`, `.xlsm`, and `.xls` are read as workbooks (first worksheet);
/// anything else is treated as CSV.
pub fn read_table(path: &Path) -> Result<RawTable, ReadError> {
    match path.extension().and_then(|ext| ext.to_str()) {
        Some("xlsx") | Some("xlsm") | Some("xls") => read_workbook(path),
        _ => read_csv(path),
    }
}

/// Read a CSV file into a [`RawTable`].
pub fn read_csv(path: &Path) -> Result<RawTable, ReadError> {
    read_csv_input(File::open(path)?)
}

/// Read CSV bytes into a [`RawTable`].
pub fn read_csv_bytes(bytes: &[u8]) -> Result<RawTable, ReadError> {
    read_csv_input(bytes)
}

fn read_csv_input<R: std::io::Read>(input: R) -> Result<RawTable, ReadError> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(input);

    let headers = reader.headers()?.iter().map(str::to_string).collect();

    let mut rows = Vec::new();
    for record in reader.records() {
        let record = record?;
        rows.push(record.iter().map(str::to_string).collect());
    }

    Ok(RawTable { headers, rows })
}

/// Read the first worksheet of an Excel workbook into a [`RawTable`].
pub fn read_workbook(path: &Path) -> Result<RawTable, ReadError> {
    let mut workbook = open_workbook_auto(path)?;
    let range = workbook
        .worksheet_range_at(0)
        .ok_or(ReadError::NoWorksheet)??;

    let mut sheet_rows = range.rows();
    let headers = match sheet_rows.next() {
        Some(row) => row.iter().map(cell_to_string).collect(),
        None => Vec::new(),
    };
    let rows = sheet_rows
        .map(|row| row.iter().map(cell_to_string).collect())
        .collect();

    Ok(RawTable { headers, rows })
}

fn cell_to_string(cell: &Data) -> String {
    match cell {
        Data::Empty => String::new(),
        other => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use std::fs;

    use pretty_assertions::assert_eq;
    use tempfile::tempdir;

    use super::{read_csv_bytes, read_table};

    #[test]
    fn csv_bytes_parse_into_headers_and_rows() {
        let table = read_csv_bytes(
            b"Source NE,Destination NE,Source Port,Destination Port\nA,B,1,2\nC,D,3,4\n",
        )
        .expect("parse");
        assert_eq!(table.headers[0], "Source NE");
        assert_eq!(table.rows.len(), 2);
        assert_eq!(table.rows[1], vec!["C", "D", "3", "4"]);
    }

    #[test]
    fn short_rows_are_tolerated() {
        let table =
            read_csv_bytes(b"Source NE,Destination NE,Source Port,Destination Port\nA,B\n")
                .expect("parse");
        assert_eq!(table.rows[0], vec!["A", "B"]);
    }

    #[test]
    fn unknown_extensions_fall_back_to_csv() {
        let dir = tempdir().expect("tempdir");
        let path = dir.path().join("links.txt");
        fs::write(
            &path,
            "Source NE,Destination NE,Source Port,Destination Port\nA,B,1,2\n",
        )
        .expect("write");

        let table = read_table(&path).expect("read");
        assert_eq!(table.rows.len(), 1);
    }
}
