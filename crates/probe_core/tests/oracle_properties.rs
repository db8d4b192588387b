//! Integration tests: every algorithm against the linear-scan oracle.
//!
//! Covers the concrete boundary scenarios plus property-based checks of
//! oracle agreement, idempotence, the blind-variant offset, and probe bounds.

use probe_core::search::{binary_search, line_fit_blind_search, line_fit_search, ENDPOINT_PROBES};
use probe_core::verify::{is_insertion_point, verify_outcome};
use probe_core::{SearchAlgorithm, SearchOutcome};
use proptest::prelude::*;

// ============================================================================
// Concrete Scenarios
// ============================================================================

#[test]
fn test_single_element_sequence() {
    for algorithm in SearchAlgorithm::ALL {
        let hit = algorithm.search(&[5], 5);
        assert!(hit.found, "{}", algorithm);
        assert_eq!(hit.index, 0, "{}", algorithm);

        let miss = algorithm.search(&[5], 3);
        assert!(!miss.found, "{}", algorithm);
        assert_eq!(miss.index, 0, "{}", algorithm);
    }
}

#[test]
fn test_evenly_spaced_hit() {
    let values = [0, 10, 20, 30, 40, 50];
    for algorithm in SearchAlgorithm::ALL {
        let outcome = algorithm.search(&values, 30);
        assert!(outcome.found, "{}", algorithm);
        assert_eq!(outcome.index, 3, "{}", algorithm);
    }
}

#[test]
fn test_evenly_spaced_miss() {
    let values = [0, 10, 20, 30, 40, 50];
    for algorithm in SearchAlgorithm::ALL {
        let outcome = algorithm.search(&values, 25);
        assert!(!outcome.found, "{}", algorithm);
        assert!(
            outcome.index == 2 || outcome.index == 3,
            "{} returned {}",
            algorithm,
            outcome.index
        );
        assert!(is_insertion_point(&values, 25, outcome.index));
    }
}

#[test]
fn test_empty_sequence_is_total() {
    for algorithm in SearchAlgorithm::ALL {
        let outcome = algorithm.search(&[], 42);
        assert!(!outcome.found, "{}", algorithm);
        assert_eq!(outcome.index, 0, "{}", algorithm);
    }
}

#[test]
fn test_outlier_makes_line_fit_lose_to_binary() {
    let mut values: Vec<u64> = (0..100).map(|i| i * 2000 / 99).collect();
    values[99] = 200_000;

    let key = values[97] - 1;
    let line = line_fit_search(&values, key);
    let binary = binary_search(&values, key);

    assert_eq!(line.found, binary.found);
    assert!(
        line.probes > binary.probes,
        "line fit {} probes, binary {} probes",
        line.probes,
        binary.probes
    );
}

#[test]
fn test_every_algorithm_agrees_on_dense_sweep() {
    let values: Vec<u64> = (0..128).map(|i| (i * i * i) / 2000).collect();
    let max = *values.last().unwrap_or(&0);
    for algorithm in SearchAlgorithm::ALL {
        for key in 0..=max + 2 {
            let outcome = algorithm.search(&values, key);
            if let Err(err) = verify_outcome(&values, key, &outcome) {
                panic!("{} key={} -> {:?}: {}", algorithm, key, outcome, err);
            }
        }
    }
}

// ============================================================================
// Property-Based Tests with Proptest
// ============================================================================

/// Sorted sequences over the default value range, length >= 1.
fn sorted_values() -> impl Strategy<Value = Vec<u64>> {
    prop::collection::vec(0u64..=2000, 1..400).prop_map(|mut v| {
        v.sort_unstable();
        v
    })
}

/// Sorted sequences drawn from a tiny alphabet, so duplicates dominate.
fn duplicate_heavy_values() -> impl Strategy<Value = Vec<u64>> {
    prop::collection::vec(0u64..8, 1..200).prop_map(|mut v| {
        v.sort_unstable();
        v
    })
}

/// Smooth curves with an optional outlier, mirroring the benchmark shapes.
fn curved_values() -> impl Strategy<Value = Vec<u64>> {
    (2usize..600, 1u32..=3, any::<bool>()).prop_map(|(len, power, outlier)| {
        let mut values: Vec<u64> = (0..len)
            .map(|i| {
                let x = i as f64 / (len - 1) as f64;
                (x.powi(power as i32) * 2000.0) as u64
            })
            .collect();
        if outlier {
            if let Some(last) = values.last_mut() {
                *last = 200_000;
            }
        }
        values
    })
}

fn check_against_oracle(values: &[u64], key: u64) -> Result<(), TestCaseError> {
    for algorithm in SearchAlgorithm::ALL {
        let outcome = algorithm.search(values, key);
        prop_assert!(
            verify_outcome(values, key, &outcome).is_ok(),
            "{} key={} len={} -> {:?}",
            algorithm,
            key,
            values.len(),
            outcome
        );
    }
    Ok(())
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(300))]

    /// Property test: every algorithm agrees with the oracle on random data.
    #[test]
    fn prop_agrees_with_oracle(values in sorted_values(), key in 0u64..=2100) {
        check_against_oracle(&values, key)?;
    }

    /// Property test: duplicates never break agreement.
    #[test]
    fn prop_agrees_with_oracle_on_duplicates(values in duplicate_heavy_values(), key in 0u64..10) {
        check_against_oracle(&values, key)?;
    }

    /// Property test: curved and outlier shapes never break agreement.
    #[test]
    fn prop_agrees_with_oracle_on_curves(values in curved_values(), key in 0u64..=2100) {
        check_against_oracle(&values, key)?;
    }

    /// Property test: searches carry no hidden state between calls.
    #[test]
    fn prop_idempotent(values in sorted_values(), key in 0u64..=2100) {
        for algorithm in SearchAlgorithm::ALL {
            let first = algorithm.search(&values, key);
            let second = algorithm.search(&values, key);
            prop_assert_eq!(first, second);
        }
    }

    /// Property test: the blind variant costs exactly two more probes.
    #[test]
    fn prop_blind_offset(values in sorted_values(), key in 0u64..=2100) {
        let sighted = line_fit_search(&values, key);
        let blind = line_fit_blind_search(&values, key);
        prop_assert_eq!(blind, SearchOutcome { probes: sighted.probes + ENDPOINT_PROBES, ..sighted });
    }

    /// Property test: binary search stays within ceil(log2(len)) + 1 probes.
    #[test]
    fn prop_binary_probe_bound(values in sorted_values(), key in 0u64..=2100) {
        let bound = (values.len() as f64).log2().ceil() as usize + 1;
        prop_assert!(binary_search(&values, key).probes <= bound);
    }

    /// Property test: interpolating searches never re-read an index.
    #[test]
    fn prop_bracketed_probe_bound(values in curved_values(), key in 0u64..=2100) {
        let bound = values.len().saturating_sub(2);
        for algorithm in [SearchAlgorithm::LineFit, SearchAlgorithm::Hybrid, SearchAlgorithm::Gradient] {
            let outcome = algorithm.search(&values, key);
            prop_assert!(outcome.probes <= bound, "{} used {} probes", algorithm, outcome.probes);
        }
    }
}
