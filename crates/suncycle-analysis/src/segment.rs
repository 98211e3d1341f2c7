//! Pairing of start and end markers into event intervals.

use serde::Serialize;

/// A closed interval of table rows delimiting one event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct EventInterval {
    /// Row index of the start marker.
    pub start: usize,
    /// Row index of the paired end marker; `start <= end`.
    pub end: usize,
}

impl EventInterval {
    /// Midpoint row index, `floor((start + end) / 2)`.
    #[must_use]
    pub fn mid(&self) -> usize {
        self.start + (self.end - self.start) / 2
    }
}

#[derive(Debug, derive_more::Display, derive_more::Error)]
#[display("start marker at row {start} has no end marker at or after it")]
pub struct UnpairedEventError {
    /// Row index of the start marker left without an end.
    pub start: usize,
}

/// Pairs each start index with the nearest end index at or after it.
///
/// Both inputs must be in ascending order (as produced by
/// [`Table::start_indices`](crate::table::Table::start_indices) and
/// [`Table::end_indices`](crate::table::Table::end_indices)). A single
/// cursor walks the end sequence, skipping ends that precede the current
/// start; the cursor does not advance after a pairing, so consecutive
/// starts at or before the same end share it. Each end is skipped at most
/// once, making the whole merge O(n).
pub fn pair_events(
    starts: &[usize],
    ends: &[usize],
) -> Result<Vec<EventInterval>, UnpairedEventError> {
    let mut intervals = Vec::with_capacity(starts.len());
    let mut cursor = 0;
    for &start in starts {
        while ends.get(cursor).is_some_and(|&end| end < start) {
            cursor += 1;
        }
        let Some(&end) = ends.get(cursor) else {
            return Err(UnpairedEventError { start });
        };
        intervals.push(EventInterval { start, end });
    }
    Ok(intervals)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_one_interval_per_start() {
        let intervals = pair_events(&[0, 5, 10], &[2, 7, 12]).unwrap();
        assert_eq!(intervals.len(), 3);
        assert_eq!(
            intervals,
            vec![
                EventInterval { start: 0, end: 2 },
                EventInterval { start: 5, end: 7 },
                EventInterval { start: 10, end: 12 },
            ]
        );
    }

    #[test]
    fn test_mid_within_bounds() {
        let intervals = pair_events(&[0, 3, 9], &[1, 8, 9]).unwrap();
        for interval in intervals {
            assert!(interval.start <= interval.mid());
            assert!(interval.mid() <= interval.end);
        }
    }

    #[test]
    fn test_mid_is_floor_of_average() {
        assert_eq!(EventInterval { start: 2, end: 5 }.mid(), 3);
        assert_eq!(EventInterval { start: 2, end: 6 }.mid(), 4);
        assert_eq!(EventInterval { start: 4, end: 4 }.mid(), 4);
    }

    #[test]
    fn test_pairing_is_deterministic() {
        let starts = [0, 4, 9, 15];
        let ends = [2, 7, 11, 20];
        assert_eq!(
            pair_events(&starts, &ends).unwrap(),
            pair_events(&starts, &ends).unwrap()
        );
    }

    #[test]
    fn test_starts_before_same_end_share_it() {
        // Neither start is preceded by an end, so the cursor never moves.
        let intervals = pair_events(&[0, 1], &[5]).unwrap();
        assert_eq!(intervals[0].end, 5);
        assert_eq!(intervals[1].end, 5);
    }

    #[test]
    fn test_start_and_end_on_same_row() {
        let intervals = pair_events(&[3], &[3]).unwrap();
        assert_eq!(intervals[0], EventInterval { start: 3, end: 3 });
    }

    #[test]
    fn test_trailing_start_is_unpaired() {
        let err = pair_events(&[0, 4], &[2]).unwrap_err();
        assert_eq!(err.start, 4);
    }

    #[test]
    fn test_no_ends_at_all() {
        let err = pair_events(&[7], &[]).unwrap_err();
        assert_eq!(err.start, 7);
    }

    #[test]
    fn test_no_starts_yields_no_intervals() {
        assert!(pair_events(&[], &[1, 2]).unwrap().is_empty());
    }
}
