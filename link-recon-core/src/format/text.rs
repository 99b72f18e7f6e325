use crate::reconcile::result::{MatchStatus, PortComparison, ReconEntry};

/// Format reconciliation entries as plain text.
pub fn format_text(entries: &[ReconEntry]) -> String {
    let mut lines = Vec::with_capacity(entries.len());
    for entry in entries {
        let pair = format!("{} -> {}", entry.source_ne, entry.destination_ne);
        match (&entry.match_status, &entry.port_comparison) {
            (MatchStatus::OnlyInLeft, _) => lines.push(format!("- {pair}")),
            (MatchStatus::OnlyInRight, _) => lines.push(format!("+ {pair}")),
            (MatchStatus::Matched, PortComparison::PortMismatch { description }) => {
                lines.push(format!("~ {pair}"));
                lines.push(format!("  {description}"));
            }
            (MatchStatus::Matched, _) => lines.push(format!("= {pair}")),
        }
    }
    lines.join("\n")
}

/// Format a simple summary of entry counts.
pub fn format_summary(entries: &[ReconEntry]) -> String {
    let mut matched = 0;
    let mut port_mismatch = 0;
    let mut only_left = 0;
    let mut only_right = 0;

    for entry in entries {
        match entry.match_status {
            MatchStatus::Matched => {
                if matches!(entry.port_comparison, PortComparison::PortMismatch { .. }) {
                    port_mismatch += 1;
                } else {
                    matched += 1;
                }
            }
            MatchStatus::OnlyInLeft => only_left += 1,
            MatchStatus::OnlyInRight => only_right += 1,
        }
    }

    format!(
        "matched={matched} port_mismatch={port_mismatch} only_left={only_left} only_right={only_right}"
    )
}
