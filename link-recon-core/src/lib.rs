//! Generic link-table reconciliation primitives used by higher-level tools.

pub mod duplicates;
pub mod fix;
pub mod format;
pub mod normalize;
pub mod reader;
pub mod reconcile;
pub mod table;
pub mod writer;

pub use duplicates::{find_duplicates, DuplicateGroup};
pub use fix::generate_fix;
pub use format::{format_json, format_summary, format_text};
pub use normalize::{normalize, RawTable, SchemaError, REQUIRED_COLUMNS};
pub use reader::{read_csv, read_csv_bytes, read_table, read_workbook, ReadError};
pub use reconcile::{
    reconcile, reconcile_with_options, AmbiguousKey, MatchStatus, PortComparison, ReconEntry,
    ReconOutcome, ReconcileOptions, Side,
};
pub use table::{KeyMode, LinkRecord, LinkTable, PairKey, PortValue};
pub use writer::{report_csv, table_csv, write_report_csv, write_table_csv, WriteError};
