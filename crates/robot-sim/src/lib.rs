//! `robot-sim` — run loop and strategy comparison.
//!
//! # Run loop
//!
//! ```text
//! turn = 0
//! loop:
//!   ① Done?    — no parcels left → return turn
//!   ② Cap?     — turn limit reached → DidNotConverge
//!   ③ Decide   — strategy.decide(state, memory) → Move
//!   ④ Apply    — state = state.apply_move(direction)   (no road: wasted turn)
//!   ⑤ Remember — memory = move.memory; turn += 1
//! ```
//!
//! # Comparison
//!
//! [`compare`] generates `config.trials` random villages and runs both
//! strategies on each one, from the same starting state.
//!
//! # Cargo features
//!
//! | Feature    | Effect                                                 |
//! |------------|--------------------------------------------------------|
//! | `parallel` | Runs comparison trials on Rayon's thread pool.         |
//!
//! # Quick-start
//!
//! ```rust,ignore
//! use robot_core::CompareConfig;
//! use robot_sim::{compare, Contestant, NoopObserver};
//! use robot_strategy::{FixedRouteStrategy, GoalOrientedStrategy};
//! use robot_village::Route;
//!
//! let mail = FixedRouteStrategy::from_names(&graph, &MAIL_ROUTE)?;
//! let goal = GoalOrientedStrategy::new();
//! let result = compare(
//!     &graph,
//!     &CompareConfig::default(),
//!     Contestant::new(&mail, Route::new()),
//!     Contestant::new(&goal, Route::new()),
//!     &mut NoopObserver,
//! )?;
//! println!("{result}");
//! ```

pub mod error;
pub mod harness;
pub mod observer;
pub mod runner;

#[cfg(test)]
mod tests;

pub use error::{SimError, SimResult};
pub use harness::{compare, Comparison, Contestant, StrategySummary, TrialRecord};
pub use observer::{NoopObserver, SimObserver, TracingObserver};
pub use runner::{run, run_observed, RunLimits, RunReport};
