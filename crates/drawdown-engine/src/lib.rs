// Allow unwrap/expect in tests - tests should panic on unexpected errors
#![cfg_attr(
    test,
    allow(
        clippy::unwrap_used,
        clippy::expect_used,
        clippy::items_after_statements,
        clippy::default_trait_access
    )
)]

//! Drawdown Engine - Rust Core Library
//!
//! Drawdown-episode detection and summarization for daily portfolio
//! performance series.
//!
//! # Pipeline
//!
//! Data flows one way, raw valuations in and summary statistics out:
//!
//! - [`drawdown_curve`] derives per-day drawdown fractions from raw
//!   valuations via the running peak (skipped when the upstream provider
//!   already supplies drawdown).
//! - [`segment`] partitions the series into [`DrawdownEvent`]s, one per
//!   maximal run of negative drawdown (peak, trough, recovery).
//! - [`summarize`] derives [`DrawdownSummary`] statistics from the event
//!   list: active episode, worst episode, longest completed recovery, and
//!   the average recovery duration.
//! - [`analyze`] runs segmentation and summarization in one call and
//!   bundles the results into a [`DrawdownReport`].
//!
//! Every stage is a pure function of its input: no I/O or shared state,
//! and identical input yields identical output. The surrounding dashboard
//! memoizes on the input series and re-runs the pipeline when the series
//! changes (new owner, new date range, refreshed data).
//!
//! Display formatting (locale, currency, percentage rounding) belongs to
//! the caller; this crate only produces data shapes.

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::pedantic)]

mod config;
mod curve;
mod dates;
mod error;
mod segment;
mod summary;
mod types;

pub use config::SummaryConfig;
pub use curve::drawdown_curve;
pub use error::{SeriesError, validate_series};
pub use segment::segment;
pub use summary::{events_for_summary, significant_events, summarize};
pub use types::{DrawdownEvent, DrawdownReport, DrawdownSummary, PerformancePoint};

/// Run the full pipeline: segment the series, then summarize the episodes.
#[must_use]
pub fn analyze(series: &[PerformancePoint], config: &SummaryConfig) -> DrawdownReport {
    let events = segment(series);
    let summary = summarize(series, &events, config);
    DrawdownReport { events, summary }
}
