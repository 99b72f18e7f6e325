use std::path::Path;

use anyhow::{Context, Result};
use link_recon_core::{normalize, read_table, LinkTable};

/// Read and normalize one table file, labelling diagnostics with the file
/// name. An empty table is reported on stderr but is not an error; the run
/// proceeds and the empty side shows up as all-missing.
pub fn load_table(path: &Path) -> Result<LinkTable> {
    let raw = read_table(path).with_context(|| format!("failed to read {}", path.display()))?;

    let name = path
        .file_name()
        .and_then(|n| n.to_str())
        .unwrap_or("table")
        .to_string();

    let table = normalize(&raw, &name)?;
    if table.is_empty() {
        eprintln!("warning: {name} has no usable records after normalization");
    }
    Ok(table)
}
