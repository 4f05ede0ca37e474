//! Series precondition validation.
//!
//! Segmentation and summarization assume a chronologically sorted series
//! with unique dates, and do not check it themselves. Callers wanting the
//! strict contract run [`validate_series`] before analyzing.

use chrono::NaiveDate;
use thiserror::Error;

use crate::types::PerformancePoint;

/// Violation of the documented series preconditions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SeriesError {
    /// Dates must be strictly increasing.
    #[error("Series dates out of order: {previous} is not before {current}")]
    OutOfOrder {
        /// Date of the earlier point.
        previous: NaiveDate,
        /// Date of the offending point.
        current: NaiveDate,
    },
    /// Dates must be unique within a series.
    #[error("Duplicate series date: {date}")]
    DuplicateDate {
        /// The repeated date.
        date: NaiveDate,
    },
}

/// Check that series dates are strictly increasing and unique.
///
/// Returns the first violation encountered, scanning left to right.
pub fn validate_series(series: &[PerformancePoint]) -> Result<(), SeriesError> {
    for pair in series.windows(2) {
        let (previous, current) = (pair[0].date, pair[1].date);
        if current == previous {
            return Err(SeriesError::DuplicateDate { date: current });
        }
        if current < previous {
            return Err(SeriesError::OutOfOrder { previous, current });
        }
    }
    Ok(())
}
