//! Audit support: before/after diffing for audited mutations

mod diff;

pub use diff::{compute_diff, snapshot, Snapshot, MISSING_VALUE, NO_CHANGES};
