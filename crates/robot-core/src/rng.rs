//! Deterministic per-trial RNG.
//!
//! A comparison hands trial `i` a generator derived from the configured seed
//! and `i` alone.  That one generator places the trial's parcels and then
//! serves both robots' runs, in that order, so a trial's numbers never depend
//! on which other trials ran before it or on which thread runs it.
//!
//! Deriving the seed multiplies the trial index by the 64-bit golden-ratio
//! constant before XOR-ing it into the configured seed, so neighbouring
//! trials start from unrelated `SmallRng` states.

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use crate::TrialId;

/// 64-bit fractional golden-ratio constant for seed mixing.
const MIXING_CONSTANT: u64 = 0x9e37_79b9_7f4a_7c15;

/// Per-trial deterministic RNG.
///
/// Owned by a single trial; never shared between workers.
pub struct TrialRng(SmallRng);

impl TrialRng {
    /// Seed deterministically from the run's global seed and a trial ID.
    pub fn new(global_seed: u64, trial: TrialId) -> Self {
        let seed = global_seed ^ (trial.0 as u64).wrapping_mul(MIXING_CONSTANT);
        TrialRng(SmallRng::seed_from_u64(seed))
    }

    /// Seed directly, for one-off runs outside a comparison.
    pub fn from_seed(seed: u64) -> Self {
        TrialRng(SmallRng::seed_from_u64(seed))
    }

    /// Generate a value uniformly in `range`.
    #[inline]
    pub fn gen_range<T, R>(&mut self, range: R) -> T
    where
        T: rand::distributions::uniform::SampleUniform,
        R: rand::distributions::uniform::SampleRange<T>,
    {
        self.0.gen_range(range)
    }

    /// Choose a random element from a slice.
    /// Returns `None` if the slice is empty.
    #[inline]
    pub fn choose<'a, T>(&mut self, slice: &'a [T]) -> Option<&'a T> {
        use rand::seq::SliceRandom;
        slice.choose(&mut self.0)
    }
}
