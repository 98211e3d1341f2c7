/// Descriptive statistics summarizing a dataset.
///
/// This structure contains the count, mean, sample standard deviation, and
/// the five-number summary (min, quartiles, max) for a dataset of `f64`
/// values.
#[derive(Debug, Clone)]
pub struct DescriptiveStats {
    /// The number of values in the dataset.
    pub count: usize,
    /// The arithmetic mean (average) of the dataset.
    pub mean: f64,
    /// The sample standard deviation (n−1 denominator).
    ///
    /// `NaN` for a single-element dataset, where the sample variance is
    /// undefined.
    pub std_dev: f64,
    /// The minimum value in the dataset.
    pub min: f64,
    /// The first quartile (25th percentile, linear interpolation).
    pub q1: f64,
    /// The median (50th percentile, linear interpolation).
    pub median: f64,
    /// The third quartile (75th percentile, linear interpolation).
    pub q3: f64,
    /// The maximum value in the dataset.
    pub max: f64,
}

impl DescriptiveStats {
    /// Computes descriptive statistics from unsorted values.
    ///
    /// This method will sort the values internally before computing
    /// statistics.
    ///
    /// # Returns
    ///
    /// * `Some(DescriptiveStats)` - if the dataset contains at least one value
    /// * `None` - if the dataset is empty
    ///
    /// # Examples
    ///
    /// ```
    /// # use suncycle_stats::descriptive::DescriptiveStats;
    /// let values = [5.0, 2.0, 4.0, 1.0, 3.0];
    /// let stats = DescriptiveStats::new(values).unwrap();
    /// assert_eq!(stats.min, 1.0);
    /// assert_eq!(stats.max, 5.0);
    /// assert_eq!(stats.mean, 3.0);
    /// assert_eq!(stats.q1, 2.0);
    /// ```
    #[must_use]
    pub fn new<I>(values: I) -> Option<Self>
    where
        I: IntoIterator<Item = f64>,
    {
        let mut values = values.into_iter().collect::<Vec<_>>();
        values.sort_by(f64::total_cmp);
        Self::from_sorted(&values)
    }

    /// Computes descriptive statistics from pre-sorted values.
    ///
    /// Use this when you already have sorted data to avoid unnecessary work.
    ///
    /// # Panics
    ///
    /// Panics if `sorted_values` is not sorted in ascending order.
    #[expect(clippy::cast_precision_loss)]
    #[must_use]
    pub fn from_sorted(sorted_values: &[f64]) -> Option<Self> {
        assert!(
            sorted_values.is_sorted_by(|a, b| a <= b),
            "values must be sorted in ascending order"
        );

        let min = *sorted_values.first()?;
        let max = *sorted_values.last()?;
        let count = sorted_values.len();
        let n = count as f64;
        let mean = sorted_values.iter().sum::<f64>() / n;
        let std_dev = if count < 2 {
            f64::NAN
        } else {
            let sum_sq = sorted_values.iter().map(|v| (v - mean).powi(2)).sum::<f64>();
            (sum_sq / (n - 1.0)).sqrt()
        };

        Some(Self {
            count,
            mean,
            std_dev,
            min,
            q1: quantile(sorted_values, 0.25),
            median: quantile(sorted_values, 0.5),
            q3: quantile(sorted_values, 0.75),
            max,
        })
    }
}

/// Computes a quantile from sorted data using linear interpolation between
/// the two nearest order statistics.
///
/// For a dataset with `n` values, the quantile `q` sits at fractional rank
/// `h = (n - 1) * q`; the result interpolates between the values at
/// `floor(h)` and `ceil(h)`.
///
/// # Arguments
///
/// * `sorted_values` - Values sorted in ascending order
/// * `q` - The quantile to compute (0.0 to 1.0)
///
/// # Returns
///
/// The interpolated quantile value. Returns `f64::NAN` if the input is empty.
///
/// # Examples
///
/// ```
/// use suncycle_stats::descriptive::quantile;
///
/// let values = [1.0, 2.0, 3.0, 4.0];
/// assert_eq!(quantile(&values, 0.5), 2.5);
/// assert_eq!(quantile(&values, 0.25), 1.75);
/// ```
#[expect(
    clippy::cast_sign_loss,
    clippy::cast_possible_truncation,
    clippy::cast_precision_loss
)]
#[must_use]
pub fn quantile(sorted_values: &[f64], q: f64) -> f64 {
    if sorted_values.is_empty() {
        return f64::NAN;
    }
    let h = (sorted_values.len() - 1) as f64 * q;
    let lo = h.floor() as usize;
    let hi = h.ceil() as usize;
    let frac = h - h.floor();
    sorted_values[lo] + frac * (sorted_values[hi] - sorted_values[lo])
}
