//! End-to-end sweep, perf and report tests.

use probe_core::SearchAlgorithm;
use probe_harness::report::write_report;
use probe_harness::{run_perf, run_sweep, Distribution, HarnessConfig};

// ===== Sweep =====

#[test]
fn test_quick_sweep_verifies_every_algorithm() {
    let config = HarnessConfig::quick();
    let report = run_sweep(&config).unwrap();

    assert!(report.failures.is_empty(), "{:?}", report.failures);
    assert_eq!(report.rows.len(), config.expected_rows());
    assert_eq!(report.samples.len(), Distribution::ALL.len());
}

#[test]
fn test_worker_count_does_not_change_deterministic_rows() {
    let base = HarnessConfig {
        distributions: vec![
            Distribution::Linear,
            Distribution::Quadratic,
            Distribution::Cubic,
        ],
        algorithms: vec![SearchAlgorithm::Binary, SearchAlgorithm::LineFit],
        ..HarnessConfig::quick()
    };
    let single = run_sweep(&HarnessConfig { workers: 1, ..base.clone() }).unwrap();
    let many = run_sweep(&HarnessConfig { workers: 3, ..base }).unwrap();

    let layout = |rows: &[probe_harness::SweepRow]| -> Vec<_> {
        rows.iter()
            .map(|row| (row.distribution, row.algorithm, row.samples))
            .collect()
    };
    assert_eq!(layout(&single.rows), layout(&many.rows));
    assert_eq!(single.samples, many.samples);
}

#[test]
fn test_outlier_hurts_line_fit_but_not_hybrid() {
    let config = HarnessConfig {
        max_samples: 200,
        sample_step: 199,
        runs_per_test: 200,
        distributions: vec![Distribution::LinearOutlier],
        algorithms: vec![
            SearchAlgorithm::Binary,
            SearchAlgorithm::LineFit,
            SearchAlgorithm::Hybrid,
        ],
        ..HarnessConfig::quick()
    };
    let report = run_sweep(&config).unwrap();

    let avg_at = |algorithm| {
        report
            .series(Distribution::LinearOutlier, algorithm)
            .find(|row| row.samples == 200)
            .map(|row| row.avg)
            .unwrap()
    };
    let binary = avg_at(SearchAlgorithm::Binary);
    let line = avg_at(SearchAlgorithm::LineFit);
    let hybrid = avg_at(SearchAlgorithm::Hybrid);

    assert!(line > binary, "line {line} vs binary {binary}");
    assert!(hybrid < line, "hybrid {hybrid} vs line {line}");
}

#[test]
fn test_line_fit_beats_binary_on_linear_data() {
    let config = HarnessConfig {
        max_samples: 1000,
        sample_step: 999,
        runs_per_test: 200,
        distributions: vec![Distribution::Linear],
        algorithms: vec![SearchAlgorithm::Binary, SearchAlgorithm::LineFit],
        ..HarnessConfig::quick()
    };
    let report = run_sweep(&config).unwrap();

    let avg_at = |algorithm| {
        report
            .series(Distribution::Linear, algorithm)
            .last()
            .map(|row| row.avg)
            .unwrap()
    };
    assert!(avg_at(SearchAlgorithm::LineFit) < avg_at(SearchAlgorithm::Binary));
}

// ===== Perf =====

#[test]
fn test_perf_blind_offset() {
    let config = HarnessConfig {
        algorithms: vec![SearchAlgorithm::LineFit, SearchAlgorithm::LineFitBlind],
        ..HarnessConfig::quick()
    };
    let report = run_perf(&config).unwrap();

    let line = report.summary(SearchAlgorithm::LineFit).unwrap();
    let blind = report.summary(SearchAlgorithm::LineFitBlind).unwrap();
    let searches = config.perf_searches * config.distributions.len();
    assert_eq!(blind.probes, line.probes + 2 * searches);
}

// ===== Report =====

#[test]
fn test_sweep_to_csv() {
    let dir = tempfile::tempdir().unwrap();
    let config = HarnessConfig {
        output_dir: dir.path().to_path_buf(),
        csv_headers: true,
        ..HarnessConfig::quick()
    };
    let report = run_sweep(&config).unwrap();
    let (results, samples) = write_report(&config, &report).unwrap();

    let results = std::fs::read_to_string(results).unwrap();
    assert_eq!(results.lines().count(), config.expected_rows() + 1);
    assert!(results
        .lines()
        .nth(1)
        .unwrap()
        .starts_with("\"Random\",\"Linear Search\",1,"));

    let samples = std::fs::read_to_string(samples).unwrap();
    let last_len = config.sample_counts().last().unwrap();
    assert_eq!(
        samples.lines().count(),
        Distribution::ALL.len() * last_len + 1
    );
}
