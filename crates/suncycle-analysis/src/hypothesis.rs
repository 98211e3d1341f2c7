//! Exact binomial significance tests over the percentile sample.

use serde::Serialize;
use suncycle_stats::binomial;

/// Result of one exact binomial test.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct BinomialTest {
    /// Number of sample values exceeding the threshold.
    pub successes: usize,
    /// Sample size.
    pub trials: usize,
    /// Success probability under the null hypothesis.
    pub null_p: f64,
    pub p_value: f64,
}

/// Tests whether events land above the historical median more often than
/// chance.
///
/// Counts percentiles `> 0.5` and runs the two-sided exact binomial test by
/// probability-mass ordering under a null of p = 0.5.
#[must_use]
pub fn above_median(percentiles: &[f64]) -> BinomialTest {
    let successes = count_above(percentiles, 0.5);
    let trials = percentiles.len();
    BinomialTest {
        successes,
        trials,
        null_p: 0.5,
        p_value: binomial::two_sided_by_mass(successes, trials, 0.5),
    }
}

/// Tests whether events concentrate in the top quartile of the historical
/// distribution.
///
/// Counts percentiles `> 0.75` and runs the one-sided upper-tail exact
/// binomial test under a null of p = 0.25.
#[must_use]
pub fn top_quartile(percentiles: &[f64]) -> BinomialTest {
    let successes = count_above(percentiles, 0.75);
    let trials = percentiles.len();
    BinomialTest {
        successes,
        trials,
        null_p: 0.25,
        p_value: binomial::upper_tail(successes, trials, 0.25),
    }
}

fn count_above(percentiles: &[f64], threshold: f64) -> usize {
    percentiles.iter().filter(|p| **p > threshold).count()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_above_median_counts_strictly_greater() {
        // 0.5 itself is not above the median.
        let test = above_median(&[0.2, 0.5, 0.6, 0.9]);
        assert_eq!(test.successes, 2);
        assert_eq!(test.trials, 4);
        assert_eq!(test.null_p, 0.5);
    }

    #[test]
    fn test_top_quartile_counts_strictly_greater() {
        let test = top_quartile(&[0.75, 0.76, 0.9, 0.1]);
        assert_eq!(test.successes, 2);
        assert_eq!(test.null_p, 0.25);
    }

    #[test]
    fn test_balanced_sample_has_p_value_one() {
        let sample: Vec<f64> = (0..13).map(|_| 0.9).chain((0..13).map(|_| 0.1)).collect();
        let test = above_median(&sample);
        assert_eq!(test.successes, 13);
        assert_eq!(test.trials, 26);
        assert!((test.p_value - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_all_in_top_quartile() {
        let sample = vec![0.9; 5];
        let test = top_quartile(&sample);
        assert_eq!(test.successes, 5);
        let expected = 0.25f64.powi(5);
        assert!((test.p_value - expected).abs() < expected * 1e-10);
    }

    #[test]
    fn test_empty_sample() {
        let test = above_median(&[]);
        assert_eq!(test.trials, 0);
        assert_eq!(test.p_value, 1.0);
    }
}
