//! The village: eleven places and fourteen two-way roads.

use robot_village::{RoadGraph, VillageResult};

pub const ROADS: [&str; 14] = [
    "Alice's House-Bob's House",   "Alice's House-Cabin",
    "Alice's House-Post Office",   "Bob's House-Town Hall",
    "Daria's House-Ernie's House", "Daria's House-Town Hall",
    "Ernie's House-Grete's House", "Grete's House-Farm",
    "Grete's House-Shop",          "Marketplace-Farm",
    "Marketplace-Post Office",     "Marketplace-Shop",
    "Marketplace-Town Hall",       "Shop-Town Hall",
];

/// A lap that passes every place, starting and ending at the Post Office.
pub const MAIL_ROUTE: [&str; 13] = [
    "Alice's House", "Cabin", "Alice's House", "Bob's House",
    "Town Hall", "Daria's House", "Ernie's House",
    "Grete's House", "Shop", "Grete's House", "Farm",
    "Marketplace", "Post Office",
];

pub fn build_village() -> VillageResult<RoadGraph> {
    RoadGraph::from_roads(&ROADS[..])
}
