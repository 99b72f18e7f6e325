use colored::Colorize;
use link_recon_core::{format_summary, format_text, AmbiguousKey, DuplicateGroup, ReconEntry};

/// Render reconciliation entries for terminal output.
pub fn render_text(entries: &[ReconEntry]) -> String {
    let raw = format_text(entries);
    let mut out = Vec::new();

    for line in raw.lines() {
        let colored = if line.starts_with('+') {
            line.green().to_string()
        } else if line.starts_with('-') {
            line.red().to_string()
        } else if line.starts_with('~') {
            line.yellow().to_string()
        } else {
            line.to_string()
        };
        out.push(colored);
    }

    out.join("\n")
}

/// Render summary counts for terminal output.
pub fn render_summary(entries: &[ReconEntry]) -> String {
    format_summary(entries).cyan().to_string()
}

/// Render duplicate-key warnings raised during reconciliation.
pub fn render_warnings(warnings: &[AmbiguousKey]) -> String {
    warnings
        .iter()
        .map(|warning| {
            format!(
                "warning: duplicate key {} on {} side (count={}); first match was paired",
                warning.key, warning.side, warning.count
            )
            .magenta()
            .to_string()
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Render duplicate groups found in a single table.
pub fn render_dupes(groups: &[DuplicateGroup]) -> String {
    if groups.is_empty() {
        return "no duplicate keys".to_string();
    }

    let mut out = Vec::new();
    for group in groups {
        out.push(format!(
            "- {} count={} rows={:?}",
            group.key, group.count, group.rows
        ));
    }
    out.join("\n")
}
