//! Integration tests for the estimators' public contract.
//!
//! Parameter sweeps are driven by seeded sources so every run is
//! reproducible. The hosting tests check that long runs share a
//! single-threaded runtime with other tasks.

#![allow(clippy::unwrap_used)]

use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

use montecarlo_core::{
    EngineSettings, MonteCarloConfig, PiParams, RandomSource, ScriptedSource, SeededSource,
    SimError, WalkParams, estimate_pi, simulate_random_walk,
};
use montecarlo_types::SampledPoint;
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

#[tokio::test]
async fn point_estimates_stay_in_range() {
    let settings = EngineSettings::default();
    for (seed, iterations) in [(1, 1), (2, 3), (3, 999), (4, 1000), (5, 1001), (6, 25_000)] {
        let mut source = SeededSource::from_seed(seed);
        let estimate = estimate_pi(&PiParams::new(iterations), &settings, &mut source)
            .await
            .unwrap();

        assert!(estimate.points_inside <= estimate.points_total);
        assert_eq!(estimate.points_total, iterations);
        assert!((0.0..=4.0).contains(&estimate.estimated_pi));

        let expected_len = iterations.min(settings.point_subset_target);
        assert_eq!(estimate.sample.len() as u64, expected_len);

        for point in &estimate.sample {
            assert!((0.0..=1.0).contains(&point.x));
            assert!((0.0..=1.0).contains(&point.y));
            assert_eq!(
                point.in_circle,
                SampledPoint::distance_to_center(point.x, point.y) <= 0.5
            );
        }
    }
}

#[tokio::test]
async fn point_subset_is_reproducible_for_fixed_seed() {
    let settings = EngineSettings::default();
    let params = PiParams::new(12_345);

    let mut a = SeededSource::from_seed(77);
    let mut b = SeededSource::from_seed(77);
    let first = estimate_pi(&params, &settings, &mut a).await.unwrap();
    let second = estimate_pi(&params, &settings, &mut b).await.unwrap();

    assert_eq!(first, second);
}

#[tokio::test]
async fn walk_invariants_hold_across_parameter_sweep() {
    let settings = EngineSettings::default();
    let mut params_rng = SmallRng::seed_from_u64(2024);

    for case in 0..40u64 {
        let initial_funds = f64::from(params_rng.random_range(0_u32..90));
        let goal = initial_funds + f64::from(params_rng.random_range(1_u32..110));
        let win_probability = params_rng.random_range(0.05..0.95);
        let bet_amount = f64::from(params_rng.random_range(1_u32..10));
        let num_simulations = params_rng.random_range(1_u64..300);
        let params = WalkParams::new(initial_funds, goal, win_probability, bet_amount, num_simulations);

        let mut source = SeededSource::from_seed(case);
        let report = simulate_random_walk(&params, &settings, &mut source)
            .await
            .unwrap();

        assert_eq!(
            report.win_count + report.bankruptcy_count,
            num_simulations,
            "case {case}"
        );
        assert!((0.0..=1.0).contains(&report.win_ratio));
        assert!(report.sample.len() <= params.sample_capacity);
        assert!(report.capped_count <= report.bankruptcy_count);

        for trial in &report.sample {
            assert!(trial.steps <= settings.step_cap);
            assert_eq!(trial.path.len() as u64, trial.steps + 1);
            assert!(
                trial
                    .path
                    .first()
                    .is_some_and(|start| (start - initial_funds).abs() < f64::EPSILON)
            );
            for pair in trial.path.windows(2) {
                if let [prev, next] = pair {
                    assert!(((next - prev).abs() - bet_amount).abs() < 1e-9);
                }
            }
            let last = trial.final_funds().unwrap();
            assert_eq!(trial.won, last >= goal);
        }
    }
}

#[tokio::test]
async fn walk_reports_are_reproducible_for_fixed_seed() {
    let settings = EngineSettings::default();
    let params = WalkParams::new(30.0, 60.0, 0.49, 1.0, 3_000);

    let mut a = SeededSource::from_seed(5);
    let mut b = SeededSource::from_seed(5);
    let first = simulate_random_walk(&params, &settings, &mut a).await.unwrap();
    let second = simulate_random_walk(&params, &settings, &mut b).await.unwrap();

    assert_eq!(first.win_count, second.win_count);
    assert_eq!(first.sample, second.sample);
    assert!(first.average_steps.to_bits() == second.average_steps.to_bits());
}

#[tokio::test]
async fn yield_stride_does_not_change_results() {
    let params = WalkParams::new(10.0, 25.0, 0.5, 1.0, 2_500);
    let eager = EngineSettings {
        yield_stride: 1,
        ..EngineSettings::default()
    };
    let never = EngineSettings {
        yield_stride: 0,
        ..EngineSettings::default()
    };

    let mut a = SeededSource::from_seed(13);
    let mut b = SeededSource::from_seed(13);
    let first = simulate_random_walk(&params, &eager, &mut a).await.unwrap();
    let second = simulate_random_walk(&params, &never, &mut b).await.unwrap();

    assert_eq!(first.win_count, second.win_count);
    assert_eq!(first.sample, second.sample);
}

#[tokio::test]
async fn goal_not_above_initial_funds_is_invalid_parameter() {
    let params = WalkParams::new(50.0, 10.0, 0.5, 1.0, 100);
    let mut source = SeededSource::from_seed(1);
    let err = simulate_random_walk(&params, &EngineSettings::default(), &mut source)
        .await
        .err();

    assert!(matches!(
        err,
        Some(SimError::InvalidParameter { field: "goal", .. })
    ));
}

#[tokio::test]
async fn classroom_scenario_single_trial() {
    let params = WalkParams::new(50.0, 100.0, 0.5, 1.0, 1);
    let mut source = SeededSource::from_seed(123);
    let report = simulate_random_walk(&params, &EngineSettings::default(), &mut source)
        .await
        .unwrap();

    assert_eq!(report.sample.len(), 1);
    let trial = report.sample.first().unwrap();
    assert!(trial.path.iter().all(|funds| (0.0..=100.0).contains(funds)));
    assert!(trial.steps <= 1000);
}

#[tokio::test]
async fn scripted_source_drives_classification() {
    let mut source = ScriptedSource::new([0.1, 0.1, 0.9, 0.9, 0.5, 0.5, 0.0, 1.0]);
    let estimate = estimate_pi(&PiParams::new(4), &EngineSettings::default(), &mut source)
        .await
        .unwrap();
    let classes: Vec<bool> = estimate.sample.iter().map(|p| p.in_circle).collect();
    assert_eq!(classes, [false, false, true, false]);
}

#[tokio::test]
async fn long_run_shares_the_runtime() {
    // Current-thread runtime: the ticker only advances while the estimator
    // is suspended at a yield point.
    let ticks = Arc::new(AtomicU64::new(0));
    let counter = Arc::clone(&ticks);
    let ticker = tokio::spawn(async move {
        loop {
            counter.fetch_add(1, Ordering::SeqCst);
            tokio::task::yield_now().await;
        }
    });

    let settings = EngineSettings {
        yield_stride: 100,
        ..EngineSettings::default()
    };
    let mut source = SeededSource::from_seed(3);
    let estimate = estimate_pi(&PiParams::new(10_000), &settings, &mut source)
        .await
        .unwrap();
    ticker.abort();

    assert_eq!(estimate.points_total, 10_000);
    assert!(ticks.load(Ordering::SeqCst) >= 10, "ticker starved");
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn runs_can_be_spawned_on_the_runtime() {
    let handle = tokio::spawn(async {
        let mut source = SeededSource::from_seed(9);
        let params = WalkParams::new(5.0, 15.0, 0.5, 1.0, 1_000);
        simulate_random_walk(&params, &EngineSettings::default(), &mut source).await
    });
    let report = handle.await.unwrap().unwrap();
    assert_eq!(report.win_count + report.bankruptcy_count, 1_000);
}

#[tokio::test]
async fn config_file_settings_flow_into_runs() {
    let config = MonteCarloConfig::parse("sampling:\n  point_subset_target: 10\n").unwrap();
    let settings = config.engine_settings().unwrap();
    let mut source = SeededSource::from_seed(4);
    let estimate = estimate_pi(&PiParams::new(5_000), &settings, &mut source)
        .await
        .unwrap();
    assert_eq!(estimate.sample.len(), 10);
}

#[test]
fn custom_sources_plug_into_the_trait() {
    struct Constant(f64);
    impl RandomSource for Constant {
        fn uniform(&mut self) -> f64 {
            self.0
        }
        fn index(&mut self, _len: usize) -> usize {
            0
        }
    }

    let params = WalkParams::new(2.0, 4.0, 0.5, 1.0, 1);
    let trial = montecarlo_core::simulate_trial(&params, 1000, &mut Constant(0.25));
    assert!(trial.won);
    assert_eq!(trial.steps, 2);
}
