//! Village error type.

use thiserror::Error;

use robot_core::LocationId;

/// Errors produced by `robot-village`.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum VillageError {
    #[error("no route from {from} to {to}")]
    NoRoute { from: LocationId, to: LocationId },

    #[error("unknown location {0:?}")]
    UnknownLocation(String),

    #[error("{0} is not a location of this graph")]
    UnknownLocationId(LocationId),

    #[error("malformed road descriptor {0:?}, expected \"A-B\"")]
    MalformedRoad(String),

    #[error("parcels need at least 2 locations, graph has {0}")]
    TooFewLocations(usize),
}

pub type VillageResult<T> = Result<T, VillageError>;
