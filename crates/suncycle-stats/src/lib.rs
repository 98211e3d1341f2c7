//! Statistical primitives for the Suncycle project.
//!
//! This crate provides the numeric building blocks used by the event
//! analysis pipeline:
//!
//! - **Descriptive statistics**: count, mean, sample standard deviation,
//!   min, quartiles, max
//! - **Empirical CDF**: inclusive rank of a value against a historical
//!   distribution
//! - **Exact binomial tests**: probability mass function, two-sided test by
//!   probability-mass ordering, and one-sided upper-tail test
//!
//! # Modules
//!
//! - [`descriptive`]: Descriptive statistics for summarizing datasets
//! - [`ecdf`]: Empirical cumulative distribution function
//! - [`binomial`]: Exact binomial probabilities and significance tests
//!
//! # Examples
//!
//! ## Computing descriptive statistics
//!
//! ```
//! use suncycle_stats::descriptive::DescriptiveStats;
//!
//! let values = [1.0, 2.0, 3.0, 4.0, 5.0];
//! let stats = DescriptiveStats::new(values).unwrap();
//! assert_eq!(stats.mean, 3.0);
//! assert_eq!(stats.median, 3.0);
//! ```
//!
//! ## Ranking a value against a distribution
//!
//! ```
//! use suncycle_stats::ecdf::EmpiricalCdf;
//!
//! let cdf = EmpiricalCdf::new([1.0, 2.0, 3.0, 4.0]);
//! assert_eq!(cdf.fraction_le(2.0), 0.5);
//! assert_eq!(cdf.fraction_le(4.0), 1.0);
//! ```
//!
//! ## Running an exact binomial test
//!
//! ```
//! use suncycle_stats::binomial;
//!
//! // 13 of 26 successes is the most likely outcome under p = 0.5, so every
//! // outcome's mass qualifies and the two-sided p-value is 1.
//! let p = binomial::two_sided_by_mass(13, 26, 0.5);
//! assert!((p - 1.0).abs() < 1e-12);
//! ```

pub mod binomial;
pub mod descriptive;
pub mod ecdf;
