//! Episode segmentation over a daily performance series.
//!
//! A single left-to-right pass partitions the series into maximal runs of
//! negative drawdown:
//! - A run opens at the first point with drawdown below zero.
//! - The trough follows the deepest drawdown seen so far; equal depths keep
//!   the earlier date.
//! - A run closes at the first point where drawdown returns to zero (or
//!   above, treated identically), which becomes its recovery date.
//! - A run still open at the end of the series is emitted without a
//!   recovery date (the "active" episode).
//!
//! Absent per-point drawdown is normalized to zero before classification.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use tracing::debug;

use crate::dates::days_between;
use crate::types::{DrawdownEvent, PerformancePoint};

/// Accumulator for the run currently being scanned.
struct OpenEpisode {
    start_date: NaiveDate,
    trough_date: NaiveDate,
    last_date: NaiveDate,
    max_drawdown: Decimal,
}

impl OpenEpisode {
    fn open(date: NaiveDate, drawdown: Decimal) -> Self {
        Self {
            start_date: date,
            trough_date: date,
            last_date: date,
            max_drawdown: drawdown,
        }
    }

    fn deepen(&mut self, date: NaiveDate, drawdown: Decimal) {
        self.last_date = date;
        // Strictly deeper only: a tie keeps the first trough date.
        if drawdown < self.max_drawdown {
            self.max_drawdown = drawdown;
            self.trough_date = date;
        }
    }

    fn close(self, recovery_date: NaiveDate) -> DrawdownEvent {
        DrawdownEvent {
            start_date: self.start_date,
            trough_date: self.trough_date,
            recovery_date: Some(recovery_date),
            max_drawdown: self.max_drawdown,
            days_to_trough: days_between(self.start_date, self.trough_date),
            recovery_days: Some(days_between(self.trough_date, recovery_date)),
            duration_days: days_between(self.start_date, recovery_date),
        }
    }

    fn close_open(self) -> DrawdownEvent {
        DrawdownEvent {
            start_date: self.start_date,
            trough_date: self.trough_date,
            recovery_date: None,
            max_drawdown: self.max_drawdown,
            days_to_trough: days_between(self.start_date, self.trough_date),
            recovery_days: None,
            duration_days: days_between(self.start_date, self.last_date),
        }
    }
}

/// Partition a performance series into drawdown episodes.
///
/// Events come out in chronological order, non-overlapping, one per maximal
/// run of negative drawdown. The series is assumed chronologically sorted
/// with unique dates (see [`crate::validate_series`]); the scan itself is
/// total and never fails on malformed per-point data.
///
/// A series shorter than two points yields no events: a single observation
/// cannot form a transition into or out of drawdown.
#[must_use]
pub fn segment(series: &[PerformancePoint]) -> Vec<DrawdownEvent> {
    if series.len() < 2 {
        return Vec::new();
    }

    let mut events = Vec::new();
    let mut open: Option<OpenEpisode> = None;

    for point in series {
        let drawdown = point.normalized_drawdown();

        if drawdown < Decimal::ZERO {
            if let Some(episode) = open.as_mut() {
                episode.deepen(point.date, drawdown);
            } else {
                open = Some(OpenEpisode::open(point.date, drawdown));
            }
        } else if let Some(episode) = open.take() {
            events.push(episode.close(point.date));
        }
    }

    if let Some(episode) = open.take() {
        events.push(episode.close_open());
    }

    debug!(
        points = series.len(),
        events = events.len(),
        "Segmented performance series"
    );

    events
}
