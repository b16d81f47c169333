// Integration tests for the coint_screen crate
// These exercise the pair tester end to end on simulated series, the way a
// worker pool would call it.

#[cfg(test)]
mod integration_tests {
    use coint_screen::pairs::{CointegrationConfig, CointegrationTester, PairTask, run_coint_test};
    use coint_screen::testing::inference::cointegration::min_observations;
    use coint_screen::testing::{CointError, Trend};
    use proptest::prelude::*;
    use rand::distributions::Distribution;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use rayon::prelude::*;
    use statrs::distribution::Normal;

    fn random_walk(rng: &mut StdRng, n: usize) -> Vec<f64> {
        let normal = Normal::standard();
        let mut level = 0.0;
        (0..n)
            .map(|_| {
                level += normal.sample(rng);
                level
            })
            .collect()
    }

    /// seriesA = [1..=n] + noise, seriesB = 2 * seriesA + noise
    fn linear_equilibrium(n: usize, seed: u64) -> (Vec<f64>, Vec<f64>) {
        let mut rng = StdRng::seed_from_u64(seed);
        let normal = Normal::standard();
        let a: Vec<f64> = (1..=n).map(|i| i as f64 + normal.sample(&mut rng)).collect();
        let b: Vec<f64> = a.iter().map(|v| 2.0 * v + normal.sample(&mut rng)).collect();
        (a, b)
    }

    /// Random-walk driver with a stationary spread around it
    fn shared_trend(n: usize, seed: u64) -> (Vec<f64>, Vec<f64>) {
        let mut rng = StdRng::seed_from_u64(seed);
        let noise = Normal::new(0.0, 0.3).unwrap();
        let driver = random_walk(&mut rng, n);
        let a: Vec<f64> = driver.iter().map(|v| v + noise.sample(&mut rng)).collect();
        let b: Vec<f64> = driver.iter().map(|v| 0.8 * v + 10.0 + noise.sample(&mut rng)).collect();
        (a, b)
    }

    #[test]
    fn test_linear_equilibrium_qualifies() {
        let (a, b) = linear_equilibrium(100, 2024);
        let pair = run_coint_test(PairTask::new(&a, &b, "A", "B")).unwrap();

        let pair = pair.expect("linear equilibrium should be cointegrated");
        println!("linear equilibrium p-value: {}", pair.p_value);
        assert_eq!((pair.label_a, pair.label_b), ("A", "B"));
        assert!(pair.p_value < 0.05);
        assert!((0.0..=1.0).contains(&pair.p_value));
    }

    #[test]
    fn test_shared_stochastic_trend_qualifies() {
        for seed in 0..10 {
            let (a, b) = shared_trend(150, seed);
            let pair = run_coint_test(PairTask::new(&a, &b, seed, seed + 1)).unwrap();
            assert!(pair.is_some(), "seed {} should be cointegrated", seed);
        }
    }

    #[test]
    fn test_independent_random_walks_mostly_absent() {
        let runs = 40;
        let qualifying = (0..runs)
            .filter(|&seed| {
                let mut rng = StdRng::seed_from_u64(10_000 + seed);
                let a = random_walk(&mut rng, 100);
                let b = random_walk(&mut rng, 100);
                run_coint_test(PairTask::new(&a, &b, "A", "B"))
                    .unwrap()
                    .is_some()
            })
            .count();

        println!("{} of {} independent walks qualified", qualifying, runs);
        assert!(qualifying <= 8, "{} of {} independent walks qualified", qualifying, runs);
    }

    #[test]
    fn test_swapping_series_keeps_decision() {
        let (a, b) = shared_trend(200, 77);
        let forward = run_coint_test(PairTask::new(&a, &b, "A", "B")).unwrap().unwrap();
        let backward = run_coint_test(PairTask::new(&b, &a, "B", "A")).unwrap().unwrap();

        assert_eq!((forward.label_a, forward.label_b), ("A", "B"));
        assert_eq!((backward.label_a, backward.label_b), ("B", "A"));
        // Different cointegrating regressions, so the scores need not match
        println!("forward p={} backward p={}", forward.p_value, backward.p_value);
        assert!(forward.p_value < 0.05 && backward.p_value < 0.05);
    }

    #[test]
    fn test_swapping_independent_walks_rarely_flips() {
        let flips = (0..30)
            .filter(|&seed| {
                let mut rng = StdRng::seed_from_u64(500 + seed);
                let a = random_walk(&mut rng, 100);
                let b = random_walk(&mut rng, 100);
                let forward = run_coint_test(PairTask::new(&a, &b, 0, 1)).unwrap();
                let backward = run_coint_test(PairTask::new(&b, &a, 1, 0)).unwrap();
                forward.is_some() != backward.is_some()
            })
            .count();
        assert!(flips <= 5, "decision flipped for {} of 30 swaps", flips);
    }

    #[test]
    fn test_extreme_magnitudes_keep_decision() {
        for seed in 0..10 {
            let mut rng = StdRng::seed_from_u64(3_000 + seed);
            let a = random_walk(&mut rng, 120);
            let b = random_walk(&mut rng, 120);
            let reference = run_coint_test(PairTask::new(&a, &b, "A", "B")).unwrap();

            for factor in [1e160, 1e200, 1e-200] {
                let a_scaled: Vec<f64> = a.iter().map(|v| v * factor).collect();
                let b_scaled: Vec<f64> = b.iter().map(|v| v * factor).collect();
                let scaled = run_coint_test(PairTask::new(&a_scaled, &b_scaled, "A", "B")).unwrap();

                assert_eq!(
                    reference.is_some(),
                    scaled.is_some(),
                    "seed {} factor {}",
                    seed,
                    factor
                );
                if let Some(pair) = scaled {
                    assert!(pair.p_value > 0.0, "seed {} factor {}", seed, factor);
                }
            }
        }
    }

    #[test]
    fn test_minimal_length_does_not_fail() {
        for trend in [
            Trend::None,
            Trend::Constant,
            Trend::ConstantTrend,
            Trend::ConstantQuadraticTrend,
        ] {
            let n = min_observations(trend);
            let a: Vec<f64> = (0..n).map(|i| (i * i) as f64 + 0.5 * (i % 2) as f64).collect();
            let b: Vec<f64> = (0..n).map(|i| i as f64 - 0.7 * ((i + 1) % 3) as f64).collect();
            let config = CointegrationConfig {
                trend,
                ..Default::default()
            };
            let tester = CointegrationTester::new(config).unwrap();
            let outcome = tester.test(PairTask::new(&a, &b, "A", "B"));
            assert!(outcome.is_ok(), "{:?}: {:?}", trend, outcome.err());
        }
    }

    #[test]
    fn test_below_minimal_length_surfaces_failure() {
        let err = run_coint_test(PairTask::new(&[1.0, 2.0], &[3.0, 1.0], "A", "B")).unwrap_err();
        assert_eq!(
            err.downcast_ref::<CointError>(),
            Some(&CointError::InsufficientData {
                expected: 3,
                actual: 2
            })
        );

        let empty: [f64; 0] = [];
        assert!(run_coint_test(PairTask::new(&empty, &empty, "A", "B")).is_err());
    }

    #[test]
    fn test_constant_series_surfaces_failure() {
        let (a, _) = linear_equilibrium(60, 5);
        let flat = vec![100.0; 60];
        let err = run_coint_test(PairTask::new(&a, &flat, "A", "FLAT")).unwrap_err();
        assert_eq!(
            err.downcast_ref::<CointError>(),
            Some(&CointError::ConstantSeries("y1"))
        );
    }

    #[test]
    fn test_concurrent_workers_match_sequential() {
        let tasks: Vec<(Vec<f64>, Vec<f64>, String, String)> = (0..24)
            .map(|i| {
                let (a, b) = if i % 2 == 0 {
                    shared_trend(120, i)
                } else {
                    let mut rng = StdRng::seed_from_u64(i);
                    (random_walk(&mut rng, 120), random_walk(&mut rng, 120))
                };
                (a, b, format!("S{}", i), format!("T{}", i))
            })
            .collect();

        let tester = CointegrationTester::default();
        let screen = |(a, b, la, lb): &(Vec<f64>, Vec<f64>, String, String)| {
            tester
                .test(PairTask::new(a, b, la.clone(), lb.clone()))
                .unwrap()
        };

        let sequential: Vec<_> = tasks.iter().filter_map(screen).collect();
        let mut parallel: Vec<_> = tasks.par_iter().filter_map(screen).collect();
        parallel.sort_by_key(|pair| sequential.iter().position(|s| s.label_a == pair.label_a));

        assert_eq!(sequential, parallel);
        assert!(!sequential.is_empty());
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(32))]

        #[test]
        fn labels_do_not_affect_p_value(label_a in "[A-Z]{1,5}", label_b in "[A-Z]{1,5}", seed in 0u64..1000) {
            let (a, b) = shared_trend(100, seed);
            let reference = run_coint_test(PairTask::new(&a, &b, "A", "B")).unwrap();
            let relabelled = run_coint_test(PairTask::new(&a, &b, label_a.clone(), label_b.clone())).unwrap();

            prop_assert_eq!(reference.is_some(), relabelled.is_some());
            if let (Some(r), Some(x)) = (reference, relabelled) {
                prop_assert_eq!(r.p_value, x.p_value);
                prop_assert_eq!(x.label_a, label_a);
                prop_assert_eq!(x.label_b, label_b);
            }
        }
    }
}
