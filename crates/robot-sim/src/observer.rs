//! Observer trait for progress reporting and data collection.

use robot_core::LocationId;
use robot_village::VillageState;
use tracing::{debug, trace};

use crate::{RunReport, TrialRecord};

/// Callbacks invoked by [`run_observed`][crate::run_observed] and
/// [`compare`][crate::compare].
///
/// All methods have default no-op implementations so implementors only need
/// to override what they care about.
///
/// # Example — delivery counter
///
/// ```rust,ignore
/// struct Deliveries(usize);
///
/// impl SimObserver for Deliveries {
///     fn on_delivery(&mut self, _turn: u64, count: usize) {
///         self.0 += count;
///     }
/// }
/// ```
pub trait SimObserver {
    /// Called after every turn.  `before == after` for a wasted turn.
    fn on_turn(
        &mut self,
        _turn:      u64,
        _direction: LocationId,
        _before:    &VillageState,
        _after:     &VillageState,
    ) {}

    /// Called when a turn delivers `count` parcels.
    fn on_delivery(&mut self, _turn: u64, _count: usize) {}

    /// Called once when a run stops, delivered or not.
    fn on_run_end(&mut self, _report: &RunReport) {}

    /// Called once per comparison trial, in trial order.
    fn on_trial_end(&mut self, _record: &TrialRecord) {}
}

/// A [`SimObserver`] that does nothing.
pub struct NoopObserver;

impl SimObserver for NoopObserver {}

/// Forwards every callback to `tracing`: turns at `TRACE`, runs and trials
/// at `DEBUG`.
pub struct TracingObserver;

impl SimObserver for TracingObserver {
    fn on_turn(
        &mut self,
        turn:      u64,
        direction: LocationId,
        before:    &VillageState,
        after:     &VillageState,
    ) {
        trace!(
            turn,
            from      = before.place().0,
            to        = direction.0,
            moved     = before.place() != after.place(),
            remaining = after.parcel_count(),
            "turn"
        );
    }

    fn on_delivery(&mut self, turn: u64, count: usize) {
        trace!(turn, count, "delivered");
    }

    fn on_run_end(&mut self, report: &RunReport) {
        debug!(
            turns     = report.turns,
            wasted    = report.wasted_turns,
            delivered = report.delivered,
            "run finished"
        );
    }

    fn on_trial_end(&mut self, record: &TrialRecord) {
        debug!(
            trial       = record.trial.0,
            turns_a     = record.turns_a,
            turns_b     = record.turns_b,
            converged_a = record.converged_a,
            converged_b = record.converged_b,
            "trial finished"
        );
    }
}
