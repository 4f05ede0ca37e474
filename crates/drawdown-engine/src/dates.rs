//! Calendar-day arithmetic for episode durations.

use chrono::NaiveDate;

/// Whole calendar days from `start` to `end`, clamped to zero.
///
/// Out-of-order inputs yield `0` rather than a negative span.
pub fn days_between(start: NaiveDate, end: NaiveDate) -> i64 {
    (end - start).num_days().max(0)
}
