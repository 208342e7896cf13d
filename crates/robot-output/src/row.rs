//! Flat row type shared by all backends.

use robot_sim::TrialRecord;

/// One comparison trial, flattened for tabular output.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TrialRow {
    pub trial:       u32,
    pub parcels:     u64,
    pub turns_a:     u64,
    pub turns_b:     u64,
    pub wasted_a:    u64,
    pub wasted_b:    u64,
    pub converged_a: bool,
    pub converged_b: bool,
}

impl TrialRow {
    /// Column names, in write order.
    pub const HEADER: [&'static str; 8] = [
        "trial", "parcels", "turns_a", "turns_b", "wasted_a", "wasted_b", "converged_a", "converged_b",
    ];
}

impl From<&TrialRecord> for TrialRow {
    fn from(r: &TrialRecord) -> Self {
        Self {
            trial:       r.trial.0,
            parcels:     r.parcels as u64,
            turns_a:     r.turns_a,
            turns_b:     r.turns_b,
            wasted_a:    r.wasted_a,
            wasted_b:    r.wasted_b,
            converged_a: r.converged_a,
            converged_b: r.converged_b,
        }
    }
}
