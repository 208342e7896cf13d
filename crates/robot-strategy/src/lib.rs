//! `robot-strategy` — how the robot decides where to go next.
//!
//! # Crate layout
//!
//! | Module          | Contents                                                |
//! |-----------------|---------------------------------------------------------|
//! | [`model`]       | `Strategy` trait, `Move`, `TurnContext<'a>`             |
//! | [`random`]      | `RandomStrategy` — wander to a random neighbour         |
//! | [`fixed_route`] | `FixedRouteStrategy` — loop a precomputed mail route    |
//! | [`goal`]        | `GoalOrientedStrategy` — route to the first parcel's goal |
//! | [`error`]       | `StrategyError`, `StrategyResult<T>`                    |
//!
//! # Design notes
//!
//! A strategy is a pure decision function of `(state, memory)`.  Memory is
//! an associated type owned by the caller and threaded from one turn to the
//! next, so a strategy value holds only configuration and can be shared by
//! reference across concurrent runs.

pub mod error;
pub mod fixed_route;
pub mod goal;
pub mod model;
pub mod random;


pub use error::{StrategyError, StrategyResult};
pub use fixed_route::FixedRouteStrategy;
pub use goal::GoalOrientedStrategy;
pub use model::{Move, Strategy, TurnContext};
pub use random::RandomStrategy;
