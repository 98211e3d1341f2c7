//! Midpoint ranking against the historical metric distribution.

use chrono::NaiveDate;
use serde::Serialize;
use suncycle_stats::ecdf::EmpiricalCdf;

use crate::{segment::EventInterval, table::Table};

/// One event interval with its midpoint resolved and ranked.
#[derive(Debug, Clone, Serialize)]
pub struct EventRecord {
    /// The paired interval this record was derived from.
    pub interval: EventInterval,
    /// Midpoint row index.
    pub mid: usize,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub mid_date: NaiveDate,
    /// Metric value at the midpoint row; `None` where the source is missing.
    pub mid_metric: Option<f64>,
    /// Inclusive empirical-CDF rank of `mid_metric` in `[0, 1]`.
    ///
    /// A missing midpoint metric compares less-or-equal with nothing and
    /// ranks at 0.0.
    pub cycle_percentile: f64,
}

/// Resolves and ranks the midpoint of every interval.
///
/// Output order matches the input interval order; sorting for display is a
/// presentation concern and happens in the report layer.
///
/// # Panics
///
/// Panics if an interval's indices fall outside the table. Intervals
/// produced by [`pair_events`](crate::segment::pair_events) over the same
/// table's marker indices are always in range.
#[must_use]
pub fn rank_midpoints(
    table: &Table,
    intervals: &[EventInterval],
    cdf: &EmpiricalCdf,
) -> Vec<EventRecord> {
    intervals
        .iter()
        .map(|&interval| {
            let mid = interval.mid();
            let rows = table.rows();
            let mid_metric = rows[mid].metric;
            EventRecord {
                interval,
                mid,
                start_date: rows[interval.start].date,
                end_date: rows[interval.end].date,
                mid_date: rows[mid].date,
                mid_metric,
                cycle_percentile: mid_metric.map_or(0.0, |value| cdf.fraction_le(value)),
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::table::Observation;

    fn table_with_metrics(metrics: &[Option<f64>]) -> Table {
        let rows = metrics
            .iter()
            .enumerate()
            .map(|(i, &metric)| Observation {
                date: NaiveDate::from_ymd_opt(2024, 1, 1)
                    .unwrap()
                    .checked_add_days(chrono::Days::new(i as u64))
                    .unwrap(),
                metric,
                start_flag: false,
                end_flag: false,
            })
            .collect();
        Table::new(rows).unwrap()
    }

    #[test]
    fn test_three_row_scenario() {
        // start 0, end 2, metrics [1, 2, 3]: mid row 1 holds 2.0 and two of
        // three historical values are <= 2.0.
        let table = table_with_metrics(&[Some(1.0), Some(2.0), Some(3.0)]);
        let cdf = EmpiricalCdf::new(table.metric_values());
        let records = rank_midpoints(&table, &[EventInterval { start: 0, end: 2 }], &cdf);

        assert_eq!(records.len(), 1);
        let record = &records[0];
        assert_eq!(record.mid, 1);
        assert_eq!(record.mid_metric, Some(2.0));
        assert!((record.cycle_percentile - 2.0 / 3.0).abs() < 1e-12);
    }

    #[test]
    fn test_dates_come_from_interval_rows() {
        let table = table_with_metrics(&[Some(1.0), Some(2.0), Some(3.0), Some(4.0)]);
        let cdf = EmpiricalCdf::new(table.metric_values());
        let records = rank_midpoints(&table, &[EventInterval { start: 1, end: 3 }], &cdf);

        let record = &records[0];
        assert_eq!(record.start_date, table.rows()[1].date);
        assert_eq!(record.mid_date, table.rows()[2].date);
        assert_eq!(record.end_date, table.rows()[3].date);
    }

    #[test]
    fn test_missing_midpoint_metric_ranks_at_zero() {
        let table = table_with_metrics(&[Some(1.0), None, Some(3.0)]);
        let cdf = EmpiricalCdf::new(table.metric_values());
        let records = rank_midpoints(&table, &[EventInterval { start: 0, end: 2 }], &cdf);

        assert_eq!(records[0].mid_metric, None);
        assert_eq!(records[0].cycle_percentile, 0.0);
    }

    #[test]
    fn test_output_order_matches_input_order() {
        let table = table_with_metrics(&[Some(5.0), Some(1.0), Some(3.0), Some(2.0)]);
        let cdf = EmpiricalCdf::new(table.metric_values());
        let intervals = [
            EventInterval { start: 2, end: 3 },
            EventInterval { start: 0, end: 1 },
        ];
        let records = rank_midpoints(&table, &intervals, &cdf);
        assert_eq!(records[0].interval, intervals[0]);
        assert_eq!(records[1].interval, intervals[1]);
    }
}
