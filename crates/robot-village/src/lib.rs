//! `robot-village` — the village the robot works in.
//!
//! # Crate layout
//!
//! | Module    | Contents                                                   |
//! |-----------|------------------------------------------------------------|
//! | [`graph`] | `RoadGraph` (CSR adjacency + name index), `RoadGraphBuilder` |
//! | [`state`] | `Parcel`, `VillageState` and its move transition           |
//! | [`route`] | `RouteFinder` trait, `Route`, `BreadthFirst`               |
//! | [`error`] | `VillageError`, `VillageResult<T>`                         |
//!
//! # Feature flags
//!
//! | Flag      | Effect                                                     |
//! |-----------|------------------------------------------------------------|
//! | `fx-hash` | FxHash instead of SipHash for name → id lookups.           |
//! | `serde`   | Derives `Serialize`/`Deserialize` on `Parcel`.             |

pub mod error;
pub mod graph;
pub mod route;
pub mod state;


pub use error::{VillageError, VillageResult};
pub use graph::{RoadGraph, RoadGraphBuilder};
pub use route::{find_route, BreadthFirst, Route, RouteFinder};
pub use state::{Parcel, VillageState};
