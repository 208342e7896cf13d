//! A robot that wanders.

use robot_core::{LocationId, TrialRng};

use crate::{Move, Strategy, TurnContext};

/// Drives down a uniformly random road from the current place each turn.
///
/// Uses no memory.  Every location in a connected village has a road, so
/// every move is valid; an isolated location makes the robot wait.
#[derive(Debug, Clone, Copy, Default)]
pub struct RandomStrategy;

impl Strategy for RandomStrategy {
    type Memory = ();

    fn name(&self) -> &str {
        "random"
    }

    fn decide(&self, ctx: &TurnContext<'_>, memory: (), rng: &mut TrialRng) -> Move<()> {
        let direction = rng
            .choose(ctx.graph.neighbors(ctx.state.place()))
            .copied()
            .unwrap_or(LocationId::INVALID);
        Move::new(direction, memory)
    }
}
