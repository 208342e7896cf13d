//! A robot that follows the mail route.

use robot_core::TrialRng;
use robot_village::{RoadGraph, Route};

use crate::{Move, Strategy, StrategyError, StrategyResult, TurnContext};

/// Loops over a fixed sequence of locations, ignoring the parcels.
///
/// Memory is the rest of the current lap; when it runs out the full route is
/// loaded again.  The route is not checked against the road graph: a stop
/// that is not adjacent to the previous one turns into a wasted turn.
#[derive(Debug, Clone)]
pub struct FixedRouteStrategy {
    route: Route,
}

impl FixedRouteStrategy {
    pub fn new(route: Route) -> StrategyResult<Self> {
        if route.is_empty() {
            return Err(StrategyError::EmptyRoute);
        }
        Ok(Self { route })
    }

    /// Resolve a route given by location names.
    pub fn from_names<S: AsRef<str>>(graph: &RoadGraph, names: &[S]) -> StrategyResult<Self> {
        let route = names
            .iter()
            .map(|n| graph.require(n.as_ref()))
            .collect::<Result<Route, _>>()?;
        Self::new(route)
    }

    pub fn route(&self) -> &Route {
        &self.route
    }
}

impl Strategy for FixedRouteStrategy {
    type Memory = Route;

    fn name(&self) -> &str {
        "fixed-route"
    }

    fn decide(&self, _ctx: &TurnContext<'_>, memory: Route, _rng: &mut TrialRng) -> Move<Route> {
        let lap = if memory.is_empty() { self.route.clone() } else { memory };
        match lap.split_first() {
            Some((direction, rest)) => Move::new(direction, rest),
            None => Move::stay(Route::new()),
        }
    }
}
