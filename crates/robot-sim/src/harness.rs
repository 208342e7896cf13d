//! Two-strategy comparison over random villages.

use std::fmt;

use robot_core::{CompareConfig, LocationId, TrialId, TrialRng};
use robot_strategy::Strategy;
use robot_village::{RoadGraph, VillageState};
use tracing::{debug, info};

use crate::runner::run_limited;
use crate::{RunLimits, SimObserver, SimResult};

// ── Inputs ────────────────────────────────────────────────────────────────────

/// A strategy entered into a comparison, with the memory each run starts from.
pub struct Contestant<'a, S: Strategy> {
    pub strategy: &'a S,
    pub memory:   S::Memory,
}

impl<'a, S: Strategy> Contestant<'a, S> {
    pub fn new(strategy: &'a S, memory: S::Memory) -> Self {
        Self { strategy, memory }
    }
}

// ── Results ───────────────────────────────────────────────────────────────────

/// Both strategies' results on one random village.
///
/// A run stopped by the turn limit has `converged_* == false`; its `turns_*`
/// is then the limit, not a delivery time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TrialRecord {
    pub trial:       TrialId,
    pub parcels:     usize,
    pub turns_a:     u64,
    pub turns_b:     u64,
    pub wasted_a:    u64,
    pub wasted_b:    u64,
    pub converged_a: bool,
    pub converged_b: bool,
}

/// Aggregate figures for one strategy.
///
/// `mean`, `min` and `max` cover finished runs only.
#[derive(Debug, Clone, PartialEq)]
pub struct StrategySummary {
    pub name: String,
    /// Arithmetic mean of turns per finished trial.
    pub mean: f64,
    /// `mean - 1`, the figure older reports of this experiment printed.
    /// Kept for comparison with them only.
    pub legacy_mean: f64,
    pub min: u64,
    pub max: u64,
    /// Runs stopped by the turn limit before delivering everything.
    pub unfinished: usize,
}

impl StrategySummary {
    fn from_runs(name: &str, runs: impl Iterator<Item = (u64, bool)>) -> Self {
        let (mut count, mut total, mut min, mut max) = (0u64, 0u64, u64::MAX, 0u64);
        let mut unfinished = 0;
        for (t, converged) in runs {
            if !converged {
                unfinished += 1;
                continue;
            }
            count += 1;
            total += t;
            min = min.min(t);
            max = max.max(t);
        }
        let mean = if count == 0 { 0.0 } else { total as f64 / count as f64 };
        Self {
            name: name.to_owned(),
            mean,
            legacy_mean: mean - 1.0,
            min: if count == 0 { 0 } else { min },
            max,
            unfinished,
        }
    }
}

/// The outcome of [`compare`].
#[derive(Debug, Clone, PartialEq)]
pub struct Comparison {
    pub name_a:  String,
    pub name_b:  String,
    /// One record per trial, in trial order.
    pub records: Vec<TrialRecord>,
}

impl Comparison {
    pub fn trials(&self) -> usize {
        self.records.len()
    }

    pub fn summary_a(&self) -> StrategySummary {
        StrategySummary::from_runs(&self.name_a, self.records.iter().map(|r| (r.turns_a, r.converged_a)))
    }

    pub fn summary_b(&self) -> StrategySummary {
        StrategySummary::from_runs(&self.name_b, self.records.iter().map(|r| (r.turns_b, r.converged_b)))
    }
}

impl fmt::Display for Comparison {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let n = self.trials();
        for (label, s) in [("Robot 1", self.summary_a()), ("Robot 2", self.summary_b())] {
            write!(
                f,
                "{label} ({}) averaged {:.2} turns over {n} trials (min {}, max {})",
                s.name, s.mean, s.min, s.max
            )?;
            if s.unfinished > 0 {
                write!(f, ", {} unfinished", s.unfinished)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

// ── compare ───────────────────────────────────────────────────────────────────

/// Run both contestants on `config.trials` random villages.
///
/// Each trial draws one village and runs both strategies on that same
/// village.  All randomness in trial `i` comes from
/// `TrialRng::new(config.seed, TrialId(i))`, so results depend only on the
/// seed, with or without the `parallel` feature.
///
/// A run that reaches `config.turn_limit` does not abort the comparison; it
/// is recorded as unfinished and left out of that strategy's averages.
///
/// `observer.on_trial_end` is called once per trial in trial order; per-turn
/// hooks are not forwarded.
pub fn compare<A, B, O>(
    graph:    &RoadGraph,
    config:   &CompareConfig,
    a:        Contestant<'_, A>,
    b:        Contestant<'_, B>,
    observer: &mut O,
) -> SimResult<Comparison>
where
    A: Strategy,
    B: Strategy,
    O: SimObserver,
{
    config.validate()?;
    let plan = TrialPlan {
        graph,
        start:        graph.require(&config.start)?,
        parcel_count: config.parcel_count,
        seed:         config.seed,
        limits:       RunLimits { turn_limit: config.turn_limit },
    };

    #[cfg(not(feature = "parallel"))]
    let records = {
        let mut records = Vec::with_capacity(config.trials as usize);
        for i in 0..config.trials {
            let record = plan.run(TrialId(i), &a, &b)?;
            observer.on_trial_end(&record);
            records.push(record);
        }
        records
    };

    #[cfg(feature = "parallel")]
    let records = {
        use rayon::prelude::*;

        let records = (0..config.trials)
            .into_par_iter()
            .map(|i| plan.run(TrialId(i), &a, &b))
            .collect::<SimResult<Vec<_>>>()?;
        // Replay in trial order so observers see the sequential sequence.
        for record in &records {
            observer.on_trial_end(record);
        }
        records
    };

    let result = Comparison {
        name_a: a.strategy.name().to_owned(),
        name_b: b.strategy.name().to_owned(),
        records,
    };
    let (sa, sb) = (result.summary_a(), result.summary_b());
    info!(
        trials       = result.trials(),
        mean_a       = sa.mean,
        mean_b       = sb.mean,
        unfinished_a = sa.unfinished,
        unfinished_b = sb.unfinished,
        "comparison finished"
    );
    Ok(result)
}

/// Everything a single trial needs besides the contestants.
struct TrialPlan<'g> {
    graph:        &'g RoadGraph,
    start:        LocationId,
    parcel_count: usize,
    seed:         u64,
    limits:       RunLimits,
}

impl TrialPlan<'_> {
    fn run<A: Strategy, B: Strategy>(
        &self,
        trial: TrialId,
        a:     &Contestant<'_, A>,
        b:     &Contestant<'_, B>,
    ) -> SimResult<TrialRecord> {
        let mut rng = TrialRng::new(self.seed, trial);
        let village = VillageState::random(self.graph, self.start, self.parcel_count, &mut rng)?;

        let (report_a, converged_a) =
            run_limited(self.graph, village.clone(), a.strategy, a.memory.clone(), &mut rng, self.limits);
        let (report_b, converged_b) =
            run_limited(self.graph, village, b.strategy, b.memory.clone(), &mut rng, self.limits);
        debug!(
            trial = trial.0,
            turns_a = report_a.turns,
            turns_b = report_b.turns,
            converged_a,
            converged_b,
            "trial"
        );

        Ok(TrialRecord {
            trial,
            parcels:  self.parcel_count,
            turns_a:  report_a.turns,
            turns_b:  report_b.turns,
            wasted_a: report_a.wasted_turns,
            wasted_b: report_b.wasted_turns,
            converged_a,
            converged_b,
        })
    }
}
