//! `robot-core` — foundational types shared by every `robot-*` crate.
//!
//! This crate has no `robot-*` dependencies and minimal external ones (only
//! `rand` and `thiserror`, plus optional `serde`).
//!
//! # What lives here
//!
//! | Module     | Contents                                       |
//! |------------|------------------------------------------------|
//! | [`ids`]    | `LocationId`, `TrialId`                        |
//! | [`rng`]    | `TrialRng` (per-trial, deterministic)          |
//! | [`config`] | `CompareConfig`                                |
//! | [`error`]  | `CoreError`, `CoreResult`                      |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                     |
//! |---------|------------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to ids and `CompareConfig`. |

pub mod config;
pub mod error;
pub mod ids;
pub mod rng;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use config::CompareConfig;
pub use error::{CoreError, CoreResult};
pub use ids::{LocationId, TrialId};
pub use rng::TrialRng;
