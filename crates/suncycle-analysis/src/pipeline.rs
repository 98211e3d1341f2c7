//! End-to-end analysis over an in-memory table.

use suncycle_stats::{descriptive::DescriptiveStats, ecdf::EmpiricalCdf};

use crate::{
    hypothesis::{self, BinomialTest},
    rank::{self, EventRecord},
    segment::{self, UnpairedEventError},
    table::Table,
};

/// Tunable inputs of one analysis run.
#[derive(Debug, Clone, Default)]
pub struct AnalysisConfig {
    /// Expected number of start markers and of end markers. Observed counts
    /// differing from this produce a diagnostic but do not abort the run;
    /// `None` disables the check.
    pub expected_events: Option<usize>,
}

/// Non-fatal finding collected during a run.
///
/// Diagnostics are returned alongside the result instead of being printed,
/// so callers and tests can assert on them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum Diagnostic {
    #[display(
        "expected {expected} start and {expected} end markers, got {starts} starts and {ends} ends"
    )]
    MarkerCountMismatch {
        expected: usize,
        starts: usize,
        ends: usize,
    },
}

#[derive(Debug, derive_more::Display, derive_more::Error, derive_more::From)]
pub enum AnalysisError {
    Unpaired(UnpairedEventError),
}

/// Everything one run produces.
#[derive(Debug, Clone)]
pub struct AnalysisReport {
    /// Ranked event records, in segmentation order.
    pub events: Vec<EventRecord>,
    /// Two-sided test against the historical median (null p = 0.5).
    pub above_median: BinomialTest,
    /// Upper-tail test against the top quartile (null p = 0.25).
    pub top_quartile: BinomialTest,
    /// Descriptive statistics over the percentile sample; `None` when no
    /// events were paired.
    pub percentile_stats: Option<DescriptiveStats>,
    pub diagnostics: Vec<Diagnostic>,
}

/// Runs segmentation, ranking, and both hypothesis tests over a table.
///
/// Fails only on unpairable markers; marker-count mismatches are reported
/// as diagnostics and the analysis proceeds on whatever pairs exist.
pub fn run(table: &Table, config: &AnalysisConfig) -> Result<AnalysisReport, AnalysisError> {
    let starts = table.start_indices();
    let ends = table.end_indices();

    let mut diagnostics = Vec::new();
    if let Some(expected) = config.expected_events
        && (starts.len() != expected || ends.len() != expected)
    {
        diagnostics.push(Diagnostic::MarkerCountMismatch {
            expected,
            starts: starts.len(),
            ends: ends.len(),
        });
    }

    let intervals = segment::pair_events(&starts, &ends)?;
    let cdf = EmpiricalCdf::new(table.metric_values());
    let events = rank::rank_midpoints(table, &intervals, &cdf);

    let percentiles: Vec<f64> = events.iter().map(|e| e.cycle_percentile).collect();
    Ok(AnalysisReport {
        above_median: hypothesis::above_median(&percentiles),
        top_quartile: hypothesis::top_quartile(&percentiles),
        percentile_stats: DescriptiveStats::new(percentiles),
        events,
        diagnostics,
    })
}
