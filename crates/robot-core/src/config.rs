//! Comparison configuration.

use crate::{CoreError, CoreResult};

/// Parameters of one strategy comparison.
///
/// Typically built with `..Default::default()` in code, or loaded from a JSON
/// file by the application crate (enable the `serde` feature).
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct CompareConfig {
    /// Number of random villages to generate.  Both strategies run on each.
    pub trials: u32,

    /// Parcels per generated village.
    pub parcel_count: usize,

    /// Name of the location every robot starts from.
    pub start: String,

    /// Master RNG seed.  The same seed always produces identical results.
    pub seed: u64,

    /// Abort a run that has not delivered everything after this many turns.
    /// `None` lets runs go on forever.
    pub turn_limit: Option<u64>,
}

impl Default for CompareConfig {
    fn default() -> Self {
        Self {
            trials:       100,
            parcel_count: 5,
            start:        "Post Office".to_owned(),
            seed:         42,
            turn_limit:   None,
        }
    }
}

impl CompareConfig {
    pub fn validate(&self) -> CoreResult<()> {
        if self.trials == 0 {
            return Err(CoreError::Config("trials must be at least 1".into()));
        }
        if self.start.is_empty() {
            return Err(CoreError::Config("start location must be named".into()));
        }
        if self.turn_limit == Some(0) {
            return Err(CoreError::Config("turn_limit of 0 can never converge".into()));
        }
        Ok(())
    }
}
