//! Parcels and the immutable village state.
//!
//! A [`VillageState`] is a value: every move produces a new state and leaves
//! the old one untouched, so earlier states stay valid and comparable.

use robot_core::{LocationId, TrialRng};

use crate::{RoadGraph, VillageError, VillageResult};

// ── Parcel ────────────────────────────────────────────────────────────────────

/// A parcel sitting at `place` that must end up at `address`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Parcel {
    pub place:   LocationId,
    pub address: LocationId,
}

impl Parcel {
    pub fn new(place: LocationId, address: LocationId) -> Self {
        Self { place, address }
    }

    #[inline]
    pub fn is_delivered(&self) -> bool {
        self.place == self.address
    }
}

// ── VillageState ──────────────────────────────────────────────────────────────

/// Where the robot is and which parcels are still outstanding.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VillageState {
    place:   LocationId,
    parcels: Vec<Parcel>,
}

impl VillageState {
    pub fn new(place: LocationId, parcels: Vec<Parcel>) -> Self {
        Self { place, parcels }
    }

    /// A village with `parcel_count` parcels placed uniformly at random.
    ///
    /// Each parcel gets a uniform random address, then a uniform random place
    /// redrawn until it differs from the address.  The robot starts at
    /// `start`.
    pub fn random(
        graph:        &RoadGraph,
        start:        LocationId,
        parcel_count: usize,
        rng:          &mut TrialRng,
    ) -> VillageResult<Self> {
        if !graph.contains(start) {
            return Err(VillageError::UnknownLocationId(start));
        }
        let n = graph.location_count() as u32;
        if parcel_count > 0 && n < 2 {
            return Err(VillageError::TooFewLocations(n as usize));
        }

        let mut parcels = Vec::with_capacity(parcel_count);
        for _ in 0..parcel_count {
            let address = LocationId(rng.gen_range(0..n));
            let place = loop {
                let p = LocationId(rng.gen_range(0..n));
                if p != address {
                    break p;
                }
            };
            parcels.push(Parcel { place, address });
        }
        Ok(Self { place: start, parcels })
    }

    #[inline]
    pub fn place(&self) -> LocationId {
        self.place
    }

    #[inline]
    pub fn parcels(&self) -> &[Parcel] {
        &self.parcels
    }

    #[inline]
    pub fn parcel_count(&self) -> usize {
        self.parcels.len()
    }

    /// `true` once every parcel has been delivered.
    #[inline]
    pub fn is_delivered(&self) -> bool {
        self.parcels.is_empty()
    }

    /// Parcels the robot is holding (those at its current place).
    pub fn carried(&self) -> impl Iterator<Item = &Parcel> + '_ {
        self.parcels.iter().filter(move |p| p.place == self.place)
    }

    // ── Transition ────────────────────────────────────────────────────────

    /// Drive to `destination`.
    ///
    /// If no road leads there from the current place the move is ignored and
    /// an identical state is returned.  Otherwise the robot and every parcel
    /// it holds move to `destination`, and parcels that have reached their
    /// address are dropped.
    pub fn apply_move(&self, graph: &RoadGraph, destination: LocationId) -> VillageState {
        self.try_move(graph, destination)
            .unwrap_or_else(|| self.clone())
    }

    /// Like [`apply_move`](Self::apply_move), but returns `None` for a move
    /// along a road that does not exist.
    pub fn try_move(&self, graph: &RoadGraph, destination: LocationId) -> Option<VillageState> {
        if !graph.is_road(self.place, destination) {
            return None;
        }
        let parcels = self
            .parcels
            .iter()
            .map(|p| {
                if p.place == self.place {
                    Parcel { place: destination, address: p.address }
                } else {
                    *p
                }
            })
            .filter(|p| !p.is_delivered())
            .collect();
        Some(VillageState { place: destination, parcels })
    }
}
