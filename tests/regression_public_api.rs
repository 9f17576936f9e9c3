//! Regression tests for the public API.
//!
//! Expected values are frozen: the golden first draw for seed 1 is
//! `sin(1 / (1 / 10_000_000)) = sin(1e7)`, and any change in the sequence
//! indicates a regression.
//!
//! Coverage:
//! - `random::sine::{index_to_x, sine_value}`
//! - `random::sine_rand::SineRand`
//! - `random::source::{StdSource, UnitSource, collect_samples}`
//! - `stats::runs`, `stats::chi_squared`, `stats::critical`
//! - `compare::compare`
//! - `error::SineRandError`

use sinerand::random::sine::X_SCALE;
use sinerand::random::sine_rand::DEFAULT_CAPACITY;
use sinerand::stats::chi_squared::Histogram;
use sinerand::stats::critical::{chi_squared_critical, z_critical};
use sinerand::stats::runs::runs_summary;
use sinerand::{
    chi_squared_test, collect_samples, compare, index_to_x, runs_test, runs_test_with,
    sine_value, CompareConfig, RunBoundary, SineRand, SineRandError, StdSource,
};

// ═══════════════════════════════════════════════════════════════════════
// SineRand: golden values and bounded supply
// ═══════════════════════════════════════════════════════════════════════

/// Frozen first values for seed 1 (indices 0..5).
#[test]
fn sine_rand_seed_1_frozen_prefix() {
    let expected = [
        0.4205477931907825,
        0.4205477931907825,
        0.02345753134291706,
        0.14417875462578317,
        0.7795270639555267,
    ];
    let mut rng = SineRand::new(1.0).unwrap();
    for (i, &exp) in expected.iter().enumerate() {
        let val = rng.draw().unwrap();
        assert!(
            (val - exp).abs() < 1e-12,
            "draw()[{}] mismatch for seed=1: {} vs {}",
            i,
            val,
            exp
        );
    }
}

/// Index 0 and index 1 share x = 1e-7, so the first two draws coincide.
#[test]
fn sine_rand_first_two_draws_share_x() {
    let mut rng = SineRand::new(1.0).unwrap();
    let first = rng.draw().unwrap();
    let second = rng.draw().unwrap();
    assert_eq!(first, second);
    assert_eq!(first, (1.0 / (1.0 / X_SCALE)).sin());
}

/// Exactly 100,000 draws succeed and the next one fails.
#[test]
fn sine_rand_exact_capacity() {
    let mut rng = SineRand::new(12345.678).unwrap();
    for i in 0..DEFAULT_CAPACITY {
        let val = rng.draw().unwrap_or_else(|e| panic!("draw {} failed: {}", i, e));
        assert!((0.0..1.0).contains(&val), "draw {} out of range: {}", i, val);
    }
    assert_eq!(
        rng.draw(),
        Err(SineRandError::Exhausted {
            capacity: DEFAULT_CAPACITY
        })
    );
    assert_eq!(
        rng.draw_int(0, 10),
        Err(SineRandError::Exhausted {
            capacity: DEFAULT_CAPACITY
        })
    );
}

/// Two generators with the same seed replay the same full table.
#[test]
fn sine_rand_same_seed_same_sequence() {
    let mut a = SineRand::new(-0.75).unwrap();
    let mut b = SineRand::new(-0.75).unwrap();
    for i in 0..DEFAULT_CAPACITY {
        assert_eq!(
            a.draw().unwrap(),
            b.draw().unwrap(),
            "determinism broken at index {}",
            i
        );
    }
}

/// The table is exactly `sine_value(seed, idx)` in index order.
#[test]
fn sine_rand_matches_value_function() {
    let seed = 987.654;
    let mut rng = SineRand::new(seed).unwrap();
    for idx in 0..1_000 {
        assert_eq!(rng.draw().unwrap(), sine_value(seed, idx));
    }
}

/// A tiny negative sample whose +1 shift rounds to 1.0 comes out as 0.0.
#[test]
fn sine_rand_shift_rounding_stays_below_one() {
    let mut rng = SineRand::with_capacity(-1e-30, 1).unwrap();
    assert_eq!(rng.draw().unwrap(), 0.0);
}

#[test]
fn draw_int_zero_to_ten_over_full_table() {
    let mut rng = SineRand::new(31.4159).unwrap();
    let mut seen = [false; 11];
    for _ in 0..DEFAULT_CAPACITY {
        let val = rng.draw_int(0, 10).unwrap();
        assert!((0..=10).contains(&val), "draw_int out of range: {}", val);
        seen[val as usize] = true;
    }
    assert!(seen.iter().all(|&s| s), "not every integer appeared: {:?}", seen);
}

#[test]
fn draw_int_rejects_inverted_range() {
    let mut rng = SineRand::new(1.0).unwrap();
    assert_eq!(
        rng.draw_int(3, 2),
        Err(SineRandError::InvalidRange { min: 3, max: 2 })
    );
    assert_eq!(rng.remaining(), DEFAULT_CAPACITY);
}

#[test]
fn value_function_range_many_seeds() {
    for seed in [1.0, -1.0, 1e-9, 7.25, 1_700_000_000.0, -98_765.4321] {
        for idx in (-500..500).chain([i64::MIN, i64::MAX]) {
            let val = sine_value(seed, idx);
            assert!(
                (0.0..1.0).contains(&val),
                "seed={}, idx={}: {}",
                seed,
                idx,
                val
            );
        }
    }
}

#[test]
fn index_to_x_is_positive() {
    for idx in [-10_i64, -1, 0, 1, 10, 100_000] {
        assert!(index_to_x(idx) > 0.0);
    }
}

// ═══════════════════════════════════════════════════════════════════════
// Statistical tests
// ═══════════════════════════════════════════════════════════════════════

#[test]
fn runs_alternating_vs_monotonic() {
    let alternating = [1.0, 10.0, 1.0, 10.0, 1.0, 10.0, 1.0, 10.0];
    let monotonic: Vec<f64> = (1..=10).map(f64::from).collect();

    let alt = runs_summary(&alternating, RunBoundary::Linear).unwrap();
    let mono = runs_summary(&monotonic, RunBoundary::Linear).unwrap();

    assert!(alt.runs as f64 > alt.expected_runs);
    assert!((mono.runs as f64) < mono.expected_runs);
    assert_ne!(runs_test(&alternating).unwrap(), runs_test(&monotonic).unwrap());
}

#[test]
fn runs_boundary_choice_matters_for_matching_ends() {
    let values = [0.1, 0.9, 0.8, 0.2, 0.15];
    let linear = runs_test_with(&values, RunBoundary::Linear).unwrap();
    let wrapping = runs_test_with(&values, RunBoundary::Wrapping).unwrap();
    assert_ne!(linear, wrapping);
}

#[test]
fn runs_insufficient_variation() {
    assert_eq!(
        runs_test(&[0.25; 100]),
        Err(SineRandError::InsufficientVariation)
    );
}

#[test]
fn chi_squared_uniform_and_concentrated() {
    let uniform: Vec<f64> = (0..10_000).map(|i| (i as f64 + 0.5) / 10_000.0).collect();
    assert!(chi_squared_test(&uniform).unwrap() < 1e-6);

    let mut concentrated = vec![0.0; 5_000];
    concentrated.push(1.0);
    assert!(chi_squared_test(&concentrated).unwrap() > 1_000.0);
}

#[test]
fn chi_squared_histogram_covers_every_value() {
    let mut rng = SineRand::new(2.5).unwrap();
    let samples = collect_samples(&mut rng, 10_000).unwrap();
    let hist = Histogram::from_samples(&samples, 10).unwrap();
    assert_eq!(hist.total(), 10_000);
    assert_eq!(hist.edges().len(), 11);
}

#[test]
fn reference_prng_passes_at_loose_alpha() {
    // StdRng is a well-tested generator; at alpha = 0.001 a failure on a
    // fixed seed would point at the tests, not the generator.
    let mut source = StdSource::seeded(2024);
    let samples = collect_samples(&mut source, 50_000).unwrap();
    assert!(runs_test(&samples).unwrap() < z_critical(0.001).unwrap());
    assert!(chi_squared_test(&samples).unwrap() < chi_squared_critical(9.0, 0.001).unwrap());
}

// ═══════════════════════════════════════════════════════════════════════
// Comparison report
// ═══════════════════════════════════════════════════════════════════════

#[test]
fn compare_default_sized_report() {
    let config = CompareConfig {
        seed: 1_697_040_000.0,
        ..CompareConfig::default()
    };
    let report = compare(&config).unwrap();
    assert_eq!(report.sine.histogram.iter().sum::<u64>(), 100_000);
    assert_eq!(report.reference.histogram.iter().sum::<u64>(), 100_000);
    assert!(report.sine.runs.z.is_finite());
    assert!(report.sine.chi_squared >= 0.0);
}
