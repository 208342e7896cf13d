//! Drive one strategy until every parcel is delivered.

use robot_core::TrialRng;
use robot_strategy::{Strategy, TurnContext};
use robot_village::{RoadGraph, VillageState};

use crate::{NoopObserver, SimError, SimObserver, SimResult};

/// Optional bounds on a run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunLimits {
    /// Stop after this many turns.  `None` runs until delivery, however long
    /// that takes.
    pub turn_limit: Option<u64>,
}

impl RunLimits {
    pub fn unbounded() -> Self {
        Self { turn_limit: None }
    }

    pub fn capped(turns: u64) -> Self {
        Self { turn_limit: Some(turns) }
    }
}

/// What a run cost.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunReport {
    /// Turns taken, wasted ones included.
    pub turns: u64,
    /// Turns whose direction had no road from the current place.
    pub wasted_turns: u64,
    /// Parcels delivered during the run.
    pub delivered: usize,
}

/// Run `strategy` from `state` until no parcels remain and return the number
/// of turns taken.
///
/// A state with no parcels returns 0 without consulting the strategy.
///
/// There is no turn limit: a strategy that never delivers everything (one
/// that only issues impossible moves, or a fixed route that misses an
/// address) makes this loop forever.  Bounding the run is the caller's job;
/// use [`run_observed`] with [`RunLimits::capped`] for that.
pub fn run<S: Strategy>(
    graph:    &RoadGraph,
    state:    VillageState,
    strategy: &S,
    memory:   S::Memory,
    rng:      &mut TrialRng,
) -> u64 {
    let (report, _) = drive(graph, state, strategy, memory, rng, None, &mut NoopObserver);
    report.turns
}

/// Like [`run`], with an optional turn cap and observer callbacks.
///
/// Returns [`SimError::DidNotConverge`] if the cap is reached with parcels
/// still outstanding.
pub fn run_observed<S: Strategy, O: SimObserver>(
    graph:    &RoadGraph,
    state:    VillageState,
    strategy: &S,
    memory:   S::Memory,
    rng:      &mut TrialRng,
    limits:   RunLimits,
    observer: &mut O,
) -> SimResult<RunReport> {
    let (report, last) = drive(graph, state, strategy, memory, rng, limits.turn_limit, observer);
    if !last.is_delivered() {
        return Err(SimError::DidNotConverge {
            turns:     report.turns,
            remaining: last.parcel_count(),
        });
    }
    Ok(report)
}

/// Like [`run_observed`] without an observer, reporting a run that hits the
/// cap as `(report, false)` instead of an error.
pub(crate) fn run_limited<S: Strategy>(
    graph:    &RoadGraph,
    state:    VillageState,
    strategy: &S,
    memory:   S::Memory,
    rng:      &mut TrialRng,
    limits:   RunLimits,
) -> (RunReport, bool) {
    let (report, last) = drive(graph, state, strategy, memory, rng, limits.turn_limit, &mut NoopObserver);
    (report, last.is_delivered())
}

/// The turn loop.  Returns the report and the final state.
fn drive<S: Strategy, O: SimObserver>(
    graph:      &RoadGraph,
    mut state:  VillageState,
    strategy:   &S,
    mut memory: S::Memory,
    rng:        &mut TrialRng,
    turn_limit: Option<u64>,
    observer:   &mut O,
) -> (RunReport, VillageState) {
    let initial = state.parcel_count();
    let mut report = RunReport::default();

    loop {
        if state.is_delivered() {
            break;
        }
        if turn_limit.is_some_and(|cap| report.turns >= cap) {
            break;
        }

        let turn = report.turns;
        let mv = strategy.decide(&TurnContext::new(turn, graph, &state), memory, rng);
        match state.try_move(graph, mv.direction) {
            Some(next) => {
                observer.on_turn(turn, mv.direction, &state, &next);
                let delivered = state.parcel_count() - next.parcel_count();
                if delivered > 0 {
                    observer.on_delivery(turn, delivered);
                }
                state = next;
            }
            None => {
                report.wasted_turns += 1;
                observer.on_turn(turn, mv.direction, &state, &state);
            }
        }
        memory = mv.memory;
        report.turns += 1;
    }

    report.delivered = initial - state.parcel_count();
    observer.on_run_end(&report);
    (report, state)
}
