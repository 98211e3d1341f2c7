//! Exact binomial probabilities and significance tests.
//!
//! Sample sizes here are small (tens of events), so probabilities are
//! computed exactly: integer binomial coefficients times `p^i (1-p)^(n-i)`,
//! with no normal approximation.

/// Computes the binomial probability mass function for `i = 0..=n`.
///
/// `pmf(n, p)[i]` is the probability of exactly `i` successes in `n`
/// independent trials with success probability `p`.
///
/// # Panics
///
/// Panics if `p` is outside `[0, 1]`.
///
/// # Examples
///
/// ```
/// use suncycle_stats::binomial::pmf;
///
/// let pmf = pmf(2, 0.5);
/// assert_eq!(pmf, vec![0.25, 0.5, 0.25]);
/// assert_eq!(pmf.iter().sum::<f64>(), 1.0);
/// ```
#[must_use]
pub fn pmf(n: usize, p: f64) -> Vec<f64> {
    assert!((0.0..=1.0).contains(&p), "p must be a probability");
    let q = 1.0 - p;
    (0..=n)
        .map(|i| {
            #[expect(clippy::cast_possible_truncation, clippy::cast_possible_wrap)]
            let (i_exp, rest_exp) = (i as i32, (n - i) as i32);
            choose(n, i) * p.powi(i_exp) * q.powi(rest_exp)
        })
        .collect()
}

/// Two-sided exact binomial test by probability-mass ordering.
///
/// The p-value is the total mass of every outcome whose probability under
/// the null is no greater than that of the observed `k`. This differs from
/// the symmetric-tail two-sided test and can behave asymmetrically when `k`
/// is far from `n * p`; that is intentional and must not be changed.
///
/// # Panics
///
/// Panics if `k > n` or `p` is outside `[0, 1]`.
///
/// # Examples
///
/// ```
/// use suncycle_stats::binomial::two_sided_by_mass;
///
/// // The observed outcome is the most likely one, so everything qualifies.
/// assert_eq!(two_sided_by_mass(1, 2, 0.5), 1.0);
/// ```
#[must_use]
pub fn two_sided_by_mass(k: usize, n: usize, p: f64) -> f64 {
    let pmf = pmf(n, p);
    let observed = pmf[k];
    pmf.iter().filter(|pr| **pr <= observed).sum()
}

/// One-sided upper-tail exact binomial test.
///
/// Returns the probability of observing `k` or more successes in `n` trials
/// under success probability `p`.
///
/// # Panics
///
/// Panics if `k > n` or `p` is outside `[0, 1]`.
///
/// # Examples
///
/// ```
/// use suncycle_stats::binomial::upper_tail;
///
/// assert_eq!(upper_tail(2, 2, 0.25), 0.0625);
/// ```
#[must_use]
pub fn upper_tail(k: usize, n: usize, p: f64) -> f64 {
    pmf(n, p)[k..].iter().sum()
}

/// Exact binomial coefficient `C(n, k)` as an `f64`.
///
/// The multiplicative form keeps every intermediate product integral, so
/// the result is exact for the sample sizes this crate deals with.
#[expect(clippy::cast_precision_loss)]
fn choose(n: usize, k: usize) -> f64 {
    let k = k.min(n - k);
    let mut c: u128 = 1;
    for i in 1..=k {
        c = c * (n - k + i) as u128 / i as u128;
    }
    c as f64
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_choose_known_values() {
        assert_eq!(choose(26, 13), 10_400_600.0);
        assert_eq!(choose(5, 0), 1.0);
        assert_eq!(choose(5, 5), 1.0);
        assert_eq!(choose(6, 2), 15.0);
    }

    #[test]
    fn test_pmf_sums_to_one() {
        for &(n, p) in &[(26, 0.5), (26, 0.25), (13, 0.1)] {
            let total: f64 = pmf(n, p).iter().sum();
            assert!((total - 1.0).abs() < 1e-12, "n={n} p={p} total={total}");
        }
    }

    #[test]
    fn test_two_sided_exact_half_is_one() {
        // k = n/2 has maximum mass under p = 0.5, so every outcome's mass
        // is <= it and the whole distribution is summed.
        let p = two_sided_by_mass(13, 26, 0.5);
        assert!((p - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_two_sided_mass_ordering_is_asymmetric() {
        // n=5, p=0.25: qualifying outcomes for k=0 are i in {0, 3, 4, 5}
        // (pmf[1] and pmf[2] both exceed pmf[0]). Every term is a dyadic
        // rational, so the expected sum is representable exactly.
        let p = two_sided_by_mass(0, 5, 0.25);
        assert!((p - 0.340_820_312_5).abs() < 1e-15);
    }

    #[test]
    fn test_upper_tail_all_successes() {
        // Only i = n satisfies i >= n, so the p-value is p^n.
        let p = upper_tail(26, 26, 0.25);
        let expected = 0.25f64.powi(26);
        assert!((p - expected).abs() < expected * 1e-10);
    }

    #[test]
    fn test_upper_tail_from_zero_is_one() {
        let p = upper_tail(0, 10, 0.25);
        assert!((p - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_degenerate_single_trial() {
        assert_eq!(pmf(1, 0.5), vec![0.5, 0.5]);
        assert_eq!(two_sided_by_mass(0, 1, 0.5), 1.0);
    }
}
