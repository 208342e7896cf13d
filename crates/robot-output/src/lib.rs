//! `robot-output` — comparison output writers.
//!
//! | Type                 | Role                                                   |
//! |----------------------|--------------------------------------------------------|
//! | [`TrialWriter`]      | Backend trait: one row per trial, then `finish`        |
//! | [`CsvTrialWriter`]   | CSV backend                                            |
//! | [`TrialLogObserver`] | `SimObserver` that feeds a `TrialWriter`               |
//!
//! # Usage
//!
//! ```rust,ignore
//! use robot_output::{CsvTrialWriter, TrialLogObserver};
//!
//! let writer = CsvTrialWriter::create(Path::new("trials.csv"))?;
//! let mut obs = TrialLogObserver::new(writer);
//! let result = compare(&graph, &config, a, b, &mut obs)?;
//! obs.finish()?;
//! ```

pub mod csv;
pub mod error;
pub mod observer;
pub mod row;
pub mod writer;


pub use csv::CsvTrialWriter;
pub use error::{OutputError, OutputResult};
pub use observer::TrialLogObserver;
pub use row::TrialRow;
pub use writer::TrialWriter;
