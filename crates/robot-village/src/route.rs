//! Routing trait and the default breadth-first search.
//!
//! # Pluggability
//!
//! Strategies call routing through the [`RouteFinder`] trait, so a caller can
//! swap in another search without touching the strategies.  Roads have no
//! length: every road costs one turn, so a breadth-first search already
//! yields shortest routes.

use std::collections::VecDeque;

use robot_core::LocationId;

use crate::{RoadGraph, VillageError, VillageResult};

// ── Route ─────────────────────────────────────────────────────────────────────

/// Locations still to visit, in order, excluding the current place.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Route {
    stops: VecDeque<LocationId>,
}

impl Route {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.stops.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stops.is_empty()
    }

    /// The next stop.
    pub fn first(&self) -> Option<LocationId> {
        self.stops.front().copied()
    }

    /// The final stop.
    pub fn destination(&self) -> Option<LocationId> {
        self.stops.back().copied()
    }

    /// Split into the next stop and the rest of the route.
    pub fn split_first(mut self) -> Option<(LocationId, Route)> {
        let head = self.stops.pop_front()?;
        Some((head, self))
    }

    pub fn iter(&self) -> impl Iterator<Item = LocationId> + '_ {
        self.stops.iter().copied()
    }
}

impl FromIterator<LocationId> for Route {
    fn from_iter<I: IntoIterator<Item = LocationId>>(iter: I) -> Self {
        Self { stops: iter.into_iter().collect() }
    }
}

impl From<Vec<LocationId>> for Route {
    fn from(stops: Vec<LocationId>) -> Self {
        Self { stops: stops.into() }
    }
}

// ── RouteFinder trait ─────────────────────────────────────────────────────────

/// Pluggable route search.
///
/// Implementations must be `Send + Sync` so one finder can serve strategies
/// running on several threads.
pub trait RouteFinder: Send + Sync {
    /// Compute a route from `from` to `to`.
    ///
    /// `from == to` yields the empty route.  An unreachable `to` yields
    /// [`VillageError::NoRoute`].
    fn find_route(&self, graph: &RoadGraph, from: LocationId, to: LocationId) -> VillageResult<Route>;
}

/// Breadth-first search over the road graph.
///
/// Among several shortest routes, the first one discovered in neighbour
/// order wins, so results are deterministic for a given graph.
#[derive(Debug, Clone, Copy, Default)]
pub struct BreadthFirst;

impl RouteFinder for BreadthFirst {
    fn find_route(&self, graph: &RoadGraph, from: LocationId, to: LocationId) -> VillageResult<Route> {
        breadth_first(graph, from, to)
    }
}

/// Shortest route from `from` to `to` using [`BreadthFirst`].
pub fn find_route(graph: &RoadGraph, from: LocationId, to: LocationId) -> VillageResult<Route> {
    breadth_first(graph, from, to)
}

// ── BFS internals ─────────────────────────────────────────────────────────────

/// One entry of the work list.  `parent` indexes the entry `at` was reached
/// from; the start entry has none.
struct WorkItem {
    at:     LocationId,
    parent: Option<usize>,
}

fn breadth_first(graph: &RoadGraph, from: LocationId, to: LocationId) -> VillageResult<Route> {
    for id in [from, to] {
        if !graph.contains(id) {
            return Err(VillageError::UnknownLocationId(id));
        }
    }
    if from == to {
        return Ok(Route::new());
    }

    // The work list is both the FIFO queue and the record of every location
    // ever enqueued; `queued` mirrors it for O(1) membership checks.
    let mut work   = vec![WorkItem { at: from, parent: None }];
    let mut queued = vec![false; graph.location_count()];
    queued[from.index()] = true;

    let mut i = 0;
    while i < work.len() {
        let at = work[i].at;
        for &place in graph.neighbors(at) {
            if place == to {
                return Ok(reconstruct(&work, i, to));
            }
            if !queued[place.index()] {
                queued[place.index()] = true;
                work.push(WorkItem { at: place, parent: Some(i) });
            }
        }
        i += 1;
    }

    Err(VillageError::NoRoute { from, to })
}

/// Walk parent links back from entry `last` and append `to`.
fn reconstruct(work: &[WorkItem], last: usize, to: LocationId) -> Route {
    let mut stops = vec![to];
    let mut cur = Some(last);
    while let Some(i) = cur {
        let item = &work[i];
        if item.parent.is_none() {
            break; // start location is not part of the route
        }
        stops.push(item.at);
        cur = item.parent;
    }
    stops.reverse();
    Route::from(stops)
}
