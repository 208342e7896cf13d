//! village — compare a mail-route robot with a goal-oriented one.
//!
//! Usage: `village [config.json] [--csv trials.csv]`
//!
//! Without a config file the defaults apply: 100 trials of 5 parcels each,
//! starting at the Post Office.  Set `RUST_LOG=debug` to see every trial.

mod network;

use std::path::PathBuf;
use std::time::Instant;

use anyhow::{bail, Context, Result};
use tracing_subscriber::EnvFilter;

use robot_core::CompareConfig;
use robot_output::{CsvTrialWriter, TrialLogObserver};
use robot_sim::{compare, Comparison, Contestant, NoopObserver};
use robot_strategy::{FixedRouteStrategy, GoalOrientedStrategy};
use robot_village::Route;

use network::{build_village, MAIL_ROUTE};

// ── Arguments ─────────────────────────────────────────────────────────────────

#[derive(Default)]
struct Args {
    config: Option<PathBuf>,
    csv:    Option<PathBuf>,
}

fn parse_args() -> Result<Args> {
    let mut args = Args::default();
    let mut it = std::env::args().skip(1);
    while let Some(arg) = it.next() {
        if arg == "--csv" {
            let Some(path) = it.next() else {
                bail!("--csv needs a file path");
            };
            args.csv = Some(path.into());
        } else if args.config.is_none() {
            args.config = Some(arg.into());
        } else {
            bail!("unexpected argument `{arg}`");
        }
    }
    Ok(args)
}

fn load_config(path: Option<&PathBuf>) -> Result<CompareConfig> {
    let Some(path) = path else {
        return Ok(CompareConfig::default());
    };
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("reading {}", path.display()))?;
    let config: CompareConfig = serde_json::from_str(&text)
        .with_context(|| format!("parsing {}", path.display()))?;
    Ok(config)
}

// ── main ──────────────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .init();

    let args = parse_args()?;
    let config = load_config(args.config.as_ref())?;

    println!("=== village — delivery robot comparison ===");
    println!(
        "Trials: {}  |  Parcels: {}  |  Start: {}  |  Seed: {}",
        config.trials, config.parcel_count, config.start, config.seed
    );
    println!();

    // 1. Road network.
    let graph = build_village()?;
    println!("Village: {} places, {} roads", graph.location_count(), graph.road_count() / 2);

    // 2. Strategies.
    let mail = FixedRouteStrategy::from_names(&graph, &MAIL_ROUTE[..])?;
    let goal = GoalOrientedStrategy::new();
    let robot1 = Contestant::new(&mail, Route::new());
    let robot2 = Contestant::new(&goal, Route::new());

    // 3. Run, with or without a trial log.
    let t0 = Instant::now();
    let result: Comparison = match &args.csv {
        Some(path) => {
            let writer = CsvTrialWriter::create(path)
                .with_context(|| format!("creating {}", path.display()))?;
            let mut obs = TrialLogObserver::new(writer);
            let result = compare(&graph, &config, robot1, robot2, &mut obs)?;
            obs.finish().with_context(|| format!("writing {}", path.display()))?;
            println!("Trial log: {} rows -> {}", obs.written(), path.display());
            result
        }
        None => compare(&graph, &config, robot1, robot2, &mut NoopObserver)?,
    };
    let elapsed = t0.elapsed();
    println!("Comparison complete in {:.3} s", elapsed.as_secs_f64());
    println!();

    // 4. Summary.
    print!("{result}");
    println!();
    println!(
        "{:<16} {:>8} {:>8} {:>6} {:>6} {:>10}",
        "Robot", "Mean", "Legacy", "Min", "Max", "Unfinished"
    );
    println!("{}", "-".repeat(59));
    for s in [result.summary_a(), result.summary_b()] {
        println!(
            "{:<16} {:>8.2} {:>8.2} {:>6} {:>6} {:>10}",
            s.name, s.mean, s.legacy_mean, s.min, s.max, s.unfinished
        );
    }

    Ok(())
}
