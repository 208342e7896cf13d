//! The `Strategy` trait — the main extension point for user code.

use robot_core::{LocationId, TrialRng};
use robot_village::{RoadGraph, VillageState};

/// A read-only view of the world passed to every [`Strategy::decide`] call.
pub struct TurnContext<'a> {
    /// Zero-based turn number within the current run.
    pub turn: u64,

    /// The road network.  Shared, never mutated.
    pub graph: &'a RoadGraph,

    /// The state the robot is deciding from.
    pub state: &'a VillageState,
}

impl<'a> TurnContext<'a> {
    #[inline]
    pub fn new(turn: u64, graph: &'a RoadGraph, state: &'a VillageState) -> Self {
        Self { turn, graph, state }
    }
}

/// A strategy's answer for one turn: where to drive, and the memory to hand
/// back on the next turn.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Move<M> {
    /// Intended next location.  Not checked here: a direction with no road
    /// from the current place costs a turn and changes nothing.
    pub direction: LocationId,
    pub memory:    M,
}

impl<M> Move<M> {
    #[inline]
    pub fn new(direction: LocationId, memory: M) -> Self {
        Self { direction, memory }
    }

    /// Spend the turn without moving.
    #[inline]
    pub fn stay(memory: M) -> Self {
        Self { direction: LocationId::INVALID, memory }
    }
}

/// Pluggable robot behaviour.
///
/// # Memory
///
/// The runner owns the memory value.  It passes the current memory in by
/// value and stores whatever comes back in [`Move::memory`].  Runs start
/// from empty memory (`()` or `Route::new()`), which makes route-following
/// strategies plan from scratch.
///
/// # Thread safety
///
/// Strategies hold configuration only, so they must be `Send + Sync`; the
/// comparison harness may share one strategy across trial threads.
///
/// # Example
///
/// ```rust,ignore
/// struct StayHome;
///
/// impl Strategy for StayHome {
///     type Memory = ();
///     fn name(&self) -> &str { "stay-home" }
///     fn decide(&self, _ctx: &TurnContext<'_>, memory: (), _rng: &mut TrialRng) -> Move<()> {
///         Move::stay(memory)
///     }
/// }
/// ```
pub trait Strategy: Send + Sync {
    /// Private per-run state threaded through turns.
    type Memory: Clone + Send + Sync;

    /// Short label used in reports and log lines.
    fn name(&self) -> &str;

    /// Choose the next move from `ctx.state`.
    fn decide(
        &self,
        ctx:    &TurnContext<'_>,
        memory: Self::Memory,
        rng:    &mut TrialRng,
    ) -> Move<Self::Memory>;
}

impl<S: Strategy + ?Sized> Strategy for &S {
    type Memory = S::Memory;

    fn name(&self) -> &str {
        (**self).name()
    }

    fn decide(
        &self,
        ctx:    &TurnContext<'_>,
        memory: Self::Memory,
        rng:    &mut TrialRng,
    ) -> Move<Self::Memory> {
        (**self).decide(ctx, memory, rng)
    }
}
