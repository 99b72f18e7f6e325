use crate::reconcile::result::ReconOutcome;

/// Format a reconciliation outcome as JSON.
pub fn format_json(outcome: &ReconOutcome) -> String {
    serde_json::to_string_pretty(outcome).unwrap_or_else(|_| "{}".to_string())
}
