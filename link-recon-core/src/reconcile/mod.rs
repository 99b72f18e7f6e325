//! Core link-table reconciliation.

pub mod engine;
pub mod result;

pub use engine::{reconcile, reconcile_with_options, ReconcileOptions};
pub use result::{AmbiguousKey, MatchStatus, PortComparison, ReconEntry, ReconOutcome, Side};
