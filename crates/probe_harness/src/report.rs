//! CSV output of sweep results.
//!
//! Two files, both truncated on write with non-numeric fields quoted:
//!
//! - `results.csv`: `DataDist,SearchFn,Samples,Min,Max,Avg,Single`
//! - `samples.csv`: `Dist,Index,Value`, the last sequence of each distribution
//!
//! Header lines are optional; plotting scripts usually expect none.

use crate::config::HarnessConfig;
use crate::error::Result;
use crate::stats::SweepRow;
use crate::sweep::{DistributionSample, SweepReport};
use csv::{QuoteStyle, Writer, WriterBuilder};
use serde::Serialize;
use std::fs::File;
use std::path::{Path, PathBuf};
use tracing::info;

#[derive(Serialize)]
#[serde(rename_all = "PascalCase")]
struct ResultRecord<'a> {
    data_dist: &'a str,
    search_fn: &'a str,
    samples: usize,
    min: usize,
    max: usize,
    avg: f64,
    single: usize,
}

#[derive(Serialize)]
#[serde(rename_all = "PascalCase")]
struct SampleRecord<'a> {
    dist: &'a str,
    index: usize,
    value: u64,
}

fn writer(path: &Path, headers: bool) -> Result<Writer<File>> {
    Ok(WriterBuilder::new()
        .has_headers(headers)
        .quote_style(QuoteStyle::NonNumeric)
        .from_path(path)?)
}

/// Writes one line per sweep row.
pub fn write_results_csv(path: &Path, rows: &[SweepRow], headers: bool) -> Result<()> {
    let mut out = writer(path, headers)?;
    for row in rows {
        out.serialize(ResultRecord {
            data_dist: row.distribution.name(),
            search_fn: row.algorithm.name(),
            samples: row.samples,
            min: row.min,
            max: row.max,
            avg: row.avg,
            single: row.single,
        })?;
    }
    out.flush()?;
    Ok(())
}

/// Writes one line per element of each sample sequence.
pub fn write_samples_csv(path: &Path, samples: &[DistributionSample], headers: bool) -> Result<()> {
    let mut out = writer(path, headers)?;
    for sample in samples {
        let dist = sample.distribution.name();
        for (index, &value) in sample.values.iter().enumerate() {
            out.serialize(SampleRecord { dist, index, value })?;
        }
    }
    out.flush()?;
    Ok(())
}

/// Writes both CSV files into `config.output_dir`, creating it if needed.
///
/// Returns the results and samples paths.
pub fn write_report(config: &HarnessConfig, report: &SweepReport) -> Result<(PathBuf, PathBuf)> {
    std::fs::create_dir_all(&config.output_dir)?;

    let results = config.results_path();
    let samples = config.samples_path();
    write_results_csv(&results, &report.rows, config.csv_headers)?;
    write_samples_csv(&samples, &report.samples, config.csv_headers)?;

    info!(
        results = %results.display(),
        samples = %samples.display(),
        "reports written"
    );
    Ok((results, samples))
}
