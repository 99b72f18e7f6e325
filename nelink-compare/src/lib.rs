//! Network element link-export comparison.
//!
//! Inventory exports of the same network from two systems rarely agree: one
//! side records links the other has lost, link direction is written
//! inconsistently, and port assignments drift. This crate wraps the
//! `link-recon-core` engine with file loading and terminal presentation so
//! those disagreements can be reviewed and, optionally, auto-corrected.
//!
//! - [`load`] — read and normalize one table file, with diagnostics named
//!   after the file
//! - [`report`] — colored terminal rendering of entries, warnings, and
//!   duplicate groups
//!
//! All reconciliation semantics live in `link-recon-core`; this crate only
//! decides how results look and when a run counts as failed.

pub mod load;
pub mod report;
