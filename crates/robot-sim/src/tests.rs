//! Unit tests for robot-sim.

#[cfg(test)]
mod helpers {
    use std::sync::Mutex;

    use robot_core::{LocationId, TrialRng};
    use robot_strategy::{GoalOrientedStrategy, Move, Strategy, TurnContext};
    use robot_village::{RoadGraph, Route, VillageState};

    use crate::{RunReport, SimObserver, TrialRecord};

    /// `A — B`.
    pub fn pair() -> RoadGraph {
        RoadGraph::from_roads(&["A-B"][..]).unwrap()
    }

    /// `A — B — C — D`, a line.
    pub fn line() -> RoadGraph {
        RoadGraph::from_roads(&["A-B", "B-C", "C-D"][..]).unwrap()
    }

    pub fn loc(graph: &RoadGraph, name: &str) -> LocationId {
        graph.location(name).unwrap()
    }

    /// Panics if ever asked to decide.
    pub struct Untouchable;

    impl Strategy for Untouchable {
        type Memory = ();
        fn name(&self) -> &str { "untouchable" }
        fn decide(&self, _: &TurnContext<'_>, _: (), _: &mut TrialRng) -> Move<()> {
            panic!("strategy consulted for a state with nothing to deliver");
        }
    }

    /// Never moves.
    pub struct Idle;

    impl Strategy for Idle {
        type Memory = ();
        fn name(&self) -> &str { "idle" }
        fn decide(&self, _: &TurnContext<'_>, memory: (), _: &mut TrialRng) -> Move<()> {
            Move::stay(memory)
        }
    }

    /// Goal-oriented, but records the state it sees on turn 0 of every run.
    #[derive(Default)]
    pub struct Recording {
        inner:      GoalOrientedStrategy,
        pub starts: Mutex<Vec<VillageState>>,
    }

    impl Strategy for Recording {
        type Memory = Route;
        fn name(&self) -> &str { "recording" }
        fn decide(&self, ctx: &TurnContext<'_>, memory: Route, rng: &mut TrialRng) -> Move<Route> {
            if ctx.turn == 0 {
                self.starts.lock().unwrap().push(ctx.state.clone());
            }
            self.inner.decide(ctx, memory, rng)
        }
    }

    #[derive(Default)]
    pub struct Counting {
        pub turns:      u64,
        pub wasted:     u64,
        pub deliveries: usize,
        pub runs:       Vec<RunReport>,
        pub trials:     Vec<TrialRecord>,
    }

    impl SimObserver for Counting {
        fn on_turn(&mut self, _: u64, _: LocationId, before: &VillageState, after: &VillageState) {
            self.turns += 1;
            if before == after {
                self.wasted += 1;
            }
        }
        fn on_delivery(&mut self, _: u64, count: usize) {
            self.deliveries += count;
        }
        fn on_run_end(&mut self, report: &RunReport) {
            self.runs.push(*report);
        }
        fn on_trial_end(&mut self, record: &TrialRecord) {
            self.trials.push(*record);
        }
    }
}

// ── runner ────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod runner_tests {
    use robot_core::TrialRng;
    use robot_strategy::{FixedRouteStrategy, GoalOrientedStrategy, RandomStrategy};
    use robot_village::{Parcel, Route, VillageState};

    use super::helpers::*;
    use crate::{run, run_observed, RunLimits, SimError};

    #[test]
    fn parcel_at_start_is_delivered_in_one_turn() {
        let g = pair();
        let (a, b) = (loc(&g, "A"), loc(&g, "B"));
        let state = VillageState::new(a, vec![Parcel::new(a, b)]);
        let turns = run(&g, state, &GoalOrientedStrategy::new(), Route::new(), &mut TrialRng::from_seed(1));
        assert_eq!(turns, 1);
    }

    #[test]
    fn parcel_elsewhere_needs_a_pickup_trip() {
        let g = pair();
        let (a, b) = (loc(&g, "A"), loc(&g, "B"));
        let state = VillageState::new(a, vec![Parcel::new(b, a)]);
        let turns = run(&g, state, &GoalOrientedStrategy::new(), Route::new(), &mut TrialRng::from_seed(1));
        assert_eq!(turns, 2);
    }

    #[test]
    fn parcel_already_at_its_address_is_carried_out_and_back() {
        let g = pair();
        let a = loc(&g, "A");
        let state = VillageState::new(a, vec![Parcel::new(a, a)]);
        let report = run_observed(
            &g, state, &GoalOrientedStrategy::new(), Route::new(), &mut TrialRng::from_seed(1),
            RunLimits::capped(1_000), &mut crate::NoopObserver,
        )
        .unwrap();
        assert_eq!(report.turns, 2);
        assert_eq!(report.delivered, 1);
    }

    #[test]
    fn nothing_to_deliver_takes_zero_turns() {
        let g = pair();
        let state = VillageState::new(loc(&g, "A"), Vec::new());
        assert_eq!(run(&g, state, &Untouchable, (), &mut TrialRng::from_seed(1)), 0);
    }

    #[test]
    fn fixed_route_walks_the_line() {
        let g = line();
        let (a, d) = (loc(&g, "A"), loc(&g, "D"));
        let mail = FixedRouteStrategy::from_names(&g, &["B", "C", "D", "C", "B", "A"][..]).unwrap();
        let state = VillageState::new(a, vec![Parcel::new(a, d)]);
        assert_eq!(run(&g, state, &mail, Route::new(), &mut TrialRng::from_seed(1)), 3);
    }

    #[test]
    fn random_robot_eventually_delivers() {
        let g = line();
        let (a, d) = (loc(&g, "A"), loc(&g, "D"));
        let state = VillageState::new(a, vec![Parcel::new(d, a), Parcel::new(a, d)]);
        let report = run_observed(
            &g, state, &RandomStrategy, (), &mut TrialRng::from_seed(9),
            RunLimits::capped(100_000), &mut crate::NoopObserver,
        )
        .unwrap();
        assert_eq!(report.delivered, 2);
        assert!(report.turns >= 6);
        assert_eq!(report.wasted_turns, 0);
    }

    #[test]
    fn idle_robot_hits_the_cap() {
        let g = pair();
        let (a, b) = (loc(&g, "A"), loc(&g, "B"));
        let state = VillageState::new(a, vec![Parcel::new(a, b)]);
        let mut obs = Counting::default();
        let err = run_observed(&g, state, &Idle, (), &mut TrialRng::from_seed(1), RunLimits::capped(5), &mut obs)
            .unwrap_err();
        assert!(matches!(err, SimError::DidNotConverge { turns: 5, remaining: 1 }));
        assert_eq!(obs.wasted, 5);
        assert_eq!(obs.runs.len(), 1);
        assert_eq!(obs.runs[0].wasted_turns, 5);
        assert_eq!(obs.runs[0].delivered, 0);
    }

    #[test]
    fn observer_sees_every_turn_and_delivery() {
        let g = line();
        let (a, b, d) = (loc(&g, "A"), loc(&g, "B"), loc(&g, "D"));
        let state = VillageState::new(a, vec![Parcel::new(a, d), Parcel::new(a, b)]);
        let mut obs = Counting::default();
        let report = run_observed(
            &g, state, &GoalOrientedStrategy::new(), Route::new(), &mut TrialRng::from_seed(1),
            RunLimits::unbounded(), &mut obs,
        )
        .unwrap();
        // A → B drops the second parcel on the way, D drops the first.
        assert_eq!(report.turns, 3);
        assert_eq!(obs.turns, 3);
        assert_eq!(obs.deliveries, 2);
        assert_eq!(obs.wasted, 0);
        assert_eq!(obs.runs, vec![report]);
    }
}

// ── harness ───────────────────────────────────────────────────────────────────

#[cfg(test)]
mod harness_tests {
    use robot_core::{CompareConfig, CoreError, TrialId, TrialRng};
    use robot_strategy::{FixedRouteStrategy, GoalOrientedStrategy, RandomStrategy};
    use robot_village::{Route, VillageError, VillageState};

    use super::helpers::*;
    use crate::{compare, run, Contestant, NoopObserver, SimError};

    fn config(trials: u32, seed: u64) -> CompareConfig {
        CompareConfig {
            trials,
            parcel_count: 3,
            start: "A".into(),
            seed,
            turn_limit: Some(10_000),
        }
    }

    fn mail(g: &robot_village::RoadGraph) -> FixedRouteStrategy {
        FixedRouteStrategy::from_names(g, &["B", "C", "D", "C", "B", "A"][..]).unwrap()
    }

    #[test]
    fn single_trial_mean_is_its_turn_count() {
        let g = line();
        let (m, goal) = (mail(&g), GoalOrientedStrategy::new());
        let result = compare(
            &g, &config(1, 7),
            Contestant::new(&m, Route::new()),
            Contestant::new(&goal, Route::new()),
            &mut NoopObserver,
        )
        .unwrap();

        assert_eq!(result.trials(), 1);
        let rec = result.records[0];
        assert_eq!(rec.trial, TrialId(0));
        assert_eq!(rec.parcels, 3);
        let (sa, sb) = (result.summary_a(), result.summary_b());
        assert_eq!(sa.mean, rec.turns_a as f64);
        assert_eq!(sb.mean, rec.turns_b as f64);
        assert_eq!(sa.legacy_mean, sa.mean - 1.0);
        assert_eq!((sa.min, sa.max), (rec.turns_a, rec.turns_a));
        assert_eq!(sa.name, "fixed-route");
        assert_eq!(sb.name, "goal-oriented");
    }

    #[test]
    fn same_seed_same_result() {
        let g = line();
        let (m, goal) = (mail(&g), GoalOrientedStrategy::new());
        let go = |seed| {
            compare(
                &g, &config(20, seed),
                Contestant::new(&m, Route::new()),
                Contestant::new(&goal, Route::new()),
                &mut NoopObserver,
            )
            .unwrap()
        };
        assert_eq!(go(3), go(3));
    }

    #[test]
    fn each_trial_depends_only_on_seed_and_index() {
        let g = line();
        let goal = GoalOrientedStrategy::new();
        let cfg = CompareConfig { turn_limit: None, ..config(8, 17) };
        let result = compare(
            &g, &cfg,
            Contestant::new(&RandomStrategy, ()),
            Contestant::new(&goal, Route::new()),
            &mut NoopObserver,
        )
        .unwrap();

        // Replay every trial on its own, in reverse order.
        let start = loc(&g, "A");
        for rec in result.records.iter().rev() {
            let mut rng = TrialRng::new(17, rec.trial);
            let village = VillageState::random(&g, start, 3, &mut rng).unwrap();
            let turns_a = run(&g, village.clone(), &RandomStrategy, (), &mut rng);
            let turns_b = run(&g, village, &goal, Route::new(), &mut rng);
            assert_eq!((rec.turns_a, rec.turns_b), (turns_a, turns_b), "{:?}", rec.trial);
            assert!(rec.converged_a && rec.converged_b);
        }
    }

    #[test]
    fn capped_runs_are_recorded_not_fatal() {
        let g = line();
        let goal = GoalOrientedStrategy::new();
        let cfg = CompareConfig { turn_limit: Some(1_000), ..config(50, 4) };
        let result = compare(
            &g, &cfg,
            Contestant::new(&Idle, ()),
            Contestant::new(&goal, Route::new()),
            &mut NoopObserver,
        )
        .unwrap();

        assert_eq!(result.trials(), 50);
        for rec in &result.records {
            assert!(!rec.converged_a);
            assert_eq!((rec.turns_a, rec.wasted_a), (1_000, 1_000));
            assert!(rec.converged_b);
        }
        let (sa, sb) = (result.summary_a(), result.summary_b());
        assert_eq!(sa.unfinished, 50);
        assert_eq!((sa.mean, sa.min, sa.max), (0.0, 0, 0));
        assert_eq!(sb.unfinished, 0);
        assert!(result.to_string().contains("50 unfinished"));
    }

    #[test]
    fn unfinished_runs_stay_out_of_the_mean() {
        let g = line();
        let goal = GoalOrientedStrategy::new();
        let cfg = CompareConfig { turn_limit: Some(8), ..config(50, 9) };
        let result = compare(
            &g, &cfg,
            Contestant::new(&RandomStrategy, ()),
            Contestant::new(&goal, Route::new()),
            &mut NoopObserver,
        )
        .unwrap();

        assert_eq!(result.trials(), 50);
        let finished: Vec<u64> = result
            .records
            .iter()
            .filter(|r| r.converged_a)
            .map(|r| r.turns_a)
            .collect();
        let sa = result.summary_a();
        assert_eq!(sa.unfinished, 50 - finished.len());
        if !finished.is_empty() {
            let expected = finished.iter().sum::<u64>() as f64 / finished.len() as f64;
            assert_eq!(sa.mean, expected);
            assert!(sa.max <= 8);
        }
        for rec in result.records.iter().filter(|r| !r.converged_a) {
            assert_eq!(rec.turns_a, 8);
        }
    }

    #[test]
    fn both_strategies_start_from_the_same_village() {
        let g = line();
        let (a, b) = (Recording::default(), Recording::default());
        compare(
            &g, &config(10, 11),
            Contestant::new(&a, Route::new()),
            Contestant::new(&b, Route::new()),
            &mut NoopObserver,
        )
        .unwrap();

        let mut starts_a = a.starts.into_inner().unwrap();
        let mut starts_b = b.starts.into_inner().unwrap();
        assert_eq!(starts_a.len(), 10);
        // Trials may finish out of order under `parallel`; compare as sets.
        let key = |s: &robot_village::VillageState| format!("{s:?}");
        starts_a.sort_by_key(key);
        starts_b.sort_by_key(key);
        assert_eq!(starts_a, starts_b);
    }

    #[test]
    fn observer_gets_trials_in_order() {
        let g = line();
        let (m, goal) = (mail(&g), GoalOrientedStrategy::new());
        let mut obs = Counting::default();
        let result = compare(
            &g, &config(5, 1),
            Contestant::new(&m, Route::new()),
            Contestant::new(&goal, Route::new()),
            &mut obs,
        )
        .unwrap();
        assert_eq!(obs.trials, result.records);
        let ids: Vec<u32> = obs.trials.iter().map(|r| r.trial.0).collect();
        assert_eq!(ids, vec![0, 1, 2, 3, 4]);
        // Per-run hooks are not forwarded from the harness.
        assert!(obs.runs.is_empty());
    }

    #[test]
    fn unknown_start_is_rejected() {
        let g = line();
        let goal = GoalOrientedStrategy::new();
        let mut cfg = config(1, 1);
        cfg.start = "Nowhere".into();
        let err = compare(
            &g, &cfg,
            Contestant::new(&goal, Route::new()),
            Contestant::new(&goal, Route::new()),
            &mut NoopObserver,
        )
        .unwrap_err();
        assert!(matches!(err, SimError::Village(VillageError::UnknownLocation(ref n)) if n == "Nowhere"));
    }

    #[test]
    fn zero_trials_is_a_config_error() {
        let g = line();
        let goal = GoalOrientedStrategy::new();
        let err = compare(
            &g, &config(0, 1),
            Contestant::new(&goal, Route::new()),
            Contestant::new(&goal, Route::new()),
            &mut NoopObserver,
        )
        .unwrap_err();
        assert!(matches!(err, SimError::Config(CoreError::Config(_))));
    }

    #[test]
    fn display_mentions_both_robots() {
        let g = line();
        let (m, goal) = (mail(&g), GoalOrientedStrategy::new());
        let text = compare(
            &g, &config(4, 2),
            Contestant::new(&m, Route::new()),
            Contestant::new(&goal, Route::new()),
            &mut NoopObserver,
        )
        .unwrap()
        .to_string();
        assert!(text.contains("Robot 1 (fixed-route)"));
        assert!(text.contains("Robot 2 (goal-oriented)"));
        assert!(text.contains("over 4 trials"));
    }
}
