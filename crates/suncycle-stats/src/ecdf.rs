/// Empirical cumulative distribution function over a historical dataset.
///
/// Evaluation is inclusive: [`fraction_le`](Self::fraction_le) counts values
/// less than *or equal to* the query, so a query equal to the historical
/// maximum ranks at 1.0 and ties share the rank of their last occurrence.
///
/// # Examples
///
/// ```
/// use suncycle_stats::ecdf::EmpiricalCdf;
///
/// let cdf = EmpiricalCdf::new([10.0, 20.0, 30.0, 40.0]);
/// assert_eq!(cdf.fraction_le(30.0), 0.75);
/// assert_eq!(cdf.fraction_le(5.0), 0.0);
/// assert_eq!(cdf.fraction_le(40.0), 1.0);
/// ```
#[derive(Debug, Clone)]
pub struct EmpiricalCdf {
    sorted: Vec<f64>,
}

impl EmpiricalCdf {
    /// Builds the CDF from unsorted values.
    ///
    /// Callers are expected to drop missing observations before building;
    /// this type treats every stored value as a real data point.
    #[must_use]
    pub fn new<I>(values: I) -> Self
    where
        I: IntoIterator<Item = f64>,
    {
        let mut sorted = values.into_iter().collect::<Vec<_>>();
        sorted.sort_by(f64::total_cmp);
        Self { sorted }
    }

    /// Returns the number of values in the distribution.
    #[must_use]
    pub fn len(&self) -> usize {
        self.sorted.len()
    }

    /// Returns `true` if the distribution holds no values.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.sorted.is_empty()
    }

    /// Returns the fraction of stored values that are `<= value`.
    ///
    /// An empty distribution and a `NaN` query both rank at 0.0 (`NaN`
    /// compares less-or-equal with nothing).
    #[expect(clippy::cast_precision_loss)]
    #[must_use]
    pub fn fraction_le(&self, value: f64) -> f64 {
        if self.sorted.is_empty() {
            return 0.0;
        }
        let rank = self.sorted.partition_point(|v| *v <= value);
        rank as f64 / self.sorted.len() as f64
    }
}
