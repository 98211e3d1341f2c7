//! Solar-cycle event analysis pipeline.
//!
//! This crate turns a table of weekly solar observations into ranked event
//! records and significance-test results. The pipeline is a single pass
//! with four stages and no feedback loops:
//!
//! 1. **Table** ([`table::Table`]): time-ordered observations with a
//!    smoothed sunspot metric and start/end event markers
//! 2. **Segmentation** ([`segment::pair_events`]): pair each start marker
//!    with the nearest following end marker
//! 3. **Ranking** ([`rank::rank_midpoints`]): evaluate each interval's
//!    midpoint metric as a percentile of the full historical distribution
//! 4. **Hypothesis tests** ([`hypothesis`]): exact binomial tests over the
//!    percentile sample
//!
//! [`pipeline::run`] wires the stages together and collects non-fatal
//! diagnostics (for example, marker counts differing from the configured
//! expectation) as values rather than log lines, so callers and tests can
//! assert on them.
//!
//! # Examples
//!
//! ```
//! use chrono::NaiveDate;
//! use suncycle_analysis::{
//!     pipeline::{self, AnalysisConfig},
//!     table::{Observation, Table},
//! };
//!
//! let rows = (0..3u32)
//!     .map(|i| Observation {
//!         date: NaiveDate::from_ymd_opt(2024, 1, 1 + i).unwrap(),
//!         metric: Some(f64::from(i) + 1.0),
//!         start_flag: i == 0,
//!         end_flag: i == 2,
//!     })
//!     .collect();
//! let table = Table::new(rows).unwrap();
//!
//! let report = pipeline::run(&table, &AnalysisConfig::default()).unwrap();
//! assert_eq!(report.events.len(), 1);
//! assert!((report.events[0].cycle_percentile - 2.0 / 3.0).abs() < 1e-12);
//! ```

pub mod hypothesis;
pub mod pipeline;
pub mod rank;
pub mod segment;
pub mod table;
