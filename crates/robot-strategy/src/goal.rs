//! A robot that plans routes towards its parcels.

use robot_core::TrialRng;
use robot_village::{BreadthFirst, Route, RouteFinder, VillageError};
use tracing::{debug, warn};

use crate::{Move, Strategy, StrategyError, StrategyResult, TurnContext};

/// Routes to the first outstanding parcel: first to pick it up, then to its
/// address.
///
/// Memory is the rest of the planned route; a new route is planned only when
/// it runs out.  Always the parcel at index 0, not the nearest one.
#[derive(Debug, Clone, Default)]
pub struct GoalOrientedStrategy<F: RouteFinder = BreadthFirst> {
    finder: F,
}

impl GoalOrientedStrategy {
    pub fn new() -> Self {
        Self { finder: BreadthFirst }
    }
}

impl<F: RouteFinder> GoalOrientedStrategy<F> {
    pub fn with_finder(finder: F) -> Self {
        Self { finder }
    }

    /// Plan a fresh route towards the first parcel.
    pub fn plan(&self, ctx: &TurnContext<'_>) -> StrategyResult<Route> {
        let place = ctx.state.place();
        let parcel = ctx.state.parcels().first().ok_or(StrategyError::NothingToPlan)?;
        let target = if parcel.place != place { parcel.place } else { parcel.address };
        let route = if target == place {
            // A held parcel that is already at its address: drive out along
            // the first road and back, carrying it home again.
            let out = *ctx
                .graph
                .neighbors(place)
                .first()
                .ok_or(VillageError::NoRoute { from: place, to: target })?;
            Route::from(vec![out, place])
        } else {
            self.finder.find_route(ctx.graph, place, target)?
        };
        debug!(
            turn  = ctx.turn,
            from  = ctx.graph.display_name(place),
            to    = ctx.graph.display_name(target),
            stops = route.len(),
            "planned route"
        );
        Ok(route)
    }
}

impl<F: RouteFinder> Strategy for GoalOrientedStrategy<F> {
    type Memory = Route;

    fn name(&self) -> &str {
        "goal-oriented"
    }

    fn decide(&self, ctx: &TurnContext<'_>, memory: Route, _rng: &mut TrialRng) -> Move<Route> {
        let route = if memory.is_empty() {
            match self.plan(ctx) {
                Ok(route) => route,
                Err(e) => {
                    // Waiting is harmless; the runner's turn limit (if any)
                    // ends a robot that can never make progress.
                    warn!(turn = ctx.turn, error = %e, "goal-oriented robot cannot plan");
                    return Move::stay(Route::new());
                }
            }
        } else {
            memory
        };
        match route.split_first() {
            Some((direction, rest)) => Move::new(direction, rest),
            None => Move::stay(Route::new()),
        }
    }
}
