//! Time-ordered observation table.

use chrono::NaiveDate;
use serde::Serialize;

/// A single sampling-period observation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Observation {
    /// Calendar date of the observation.
    pub date: NaiveDate,
    /// Smoothed sunspot metric; `None` where the source has no value.
    pub metric: Option<f64>,
    /// Marks the first row of an event window.
    pub start_flag: bool,
    /// Marks the last row of an event window.
    pub end_flag: bool,
}

#[derive(Debug, derive_more::Display, derive_more::Error)]
pub enum TableError {
    /// Row dates must be strictly increasing.
    #[display("dates are not strictly increasing at row {row} ({date})")]
    NonIncreasingDate { row: usize, date: NaiveDate },
}

/// An immutable, date-ordered sequence of observations.
///
/// The strictly-increasing-date invariant is checked once at construction;
/// everything downstream may rely on it.
#[derive(Debug, Clone)]
pub struct Table {
    rows: Vec<Observation>,
}

impl Table {
    /// Builds a table, validating that dates are strictly increasing.
    pub fn new(rows: Vec<Observation>) -> Result<Self, TableError> {
        for (row, pair) in rows.windows(2).enumerate() {
            if pair[1].date <= pair[0].date {
                return Err(TableError::NonIncreasingDate {
                    row: row + 1,
                    date: pair[1].date,
                });
            }
        }
        Ok(Self { rows })
    }

    #[must_use]
    pub fn rows(&self) -> &[Observation] {
        &self.rows
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Indices of rows carrying a start marker, in ascending order.
    #[must_use]
    pub fn start_indices(&self) -> Vec<usize> {
        self.flag_indices(|row| row.start_flag)
    }

    /// Indices of rows carrying an end marker, in ascending order.
    #[must_use]
    pub fn end_indices(&self) -> Vec<usize> {
        self.flag_indices(|row| row.end_flag)
    }

    /// All non-missing metric values, in row order.
    pub fn metric_values(&self) -> impl Iterator<Item = f64> + '_ {
        self.rows.iter().filter_map(|row| row.metric)
    }

    fn flag_indices(&self, flag: impl Fn(&Observation) -> bool) -> Vec<usize> {
        self.rows
            .iter()
            .enumerate()
            .filter_map(|(i, row)| flag(row).then_some(i))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn day(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 1, d).unwrap()
    }

    fn obs(d: u32, metric: Option<f64>) -> Observation {
        Observation {
            date: day(d),
            metric,
            start_flag: false,
            end_flag: false,
        }
    }

    #[test]
    fn test_strictly_increasing_dates_accepted() {
        let table = Table::new(vec![obs(1, None), obs(2, None), obs(5, None)]).unwrap();
        assert_eq!(table.len(), 3);
    }

    #[test]
    fn test_duplicate_date_rejected_with_row() {
        let err = Table::new(vec![obs(1, None), obs(3, None), obs(3, None)]).unwrap_err();
        let TableError::NonIncreasingDate { row, date } = err;
        assert_eq!(row, 2);
        assert_eq!(date, day(3));
    }

    #[test]
    fn test_metric_values_skip_missing() {
        let table =
            Table::new(vec![obs(1, Some(1.0)), obs(2, None), obs(3, Some(3.0))]).unwrap();
        assert_eq!(table.metric_values().collect::<Vec<_>>(), vec![1.0, 3.0]);
    }

    #[test]
    fn test_flag_indices() {
        let mut rows = vec![obs(1, None), obs(2, None), obs(3, None), obs(4, None)];
        rows[0].start_flag = true;
        rows[2].start_flag = true;
        rows[1].end_flag = true;
        rows[3].end_flag = true;
        let table = Table::new(rows).unwrap();
        assert_eq!(table.start_indices(), vec![0, 2]);
        assert_eq!(table.end_indices(), vec![1, 3]);
    }
}
