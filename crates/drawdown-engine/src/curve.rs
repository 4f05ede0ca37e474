//! Drawdown curve construction from raw valuations.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use tracing::warn;

use crate::types::PerformancePoint;

/// Build the per-day drawdown series for a raw valuation series.
///
/// Drawdown is the signed fraction below the running peak,
/// `(value - peak) / peak`: zero at or above the peak, negative below it.
/// Dates mirror the input order.
///
/// Points before the first positive valuation carry zero. A non-positive
/// valuation under an established peak is clamped to `-1` and logged; the
/// wider system flags such points as data-quality issues upstream.
#[must_use]
pub fn drawdown_curve(values: &[(NaiveDate, Decimal)]) -> Vec<PerformancePoint> {
    let mut peak = Decimal::ZERO;
    let mut points = Vec::with_capacity(values.len());

    for &(date, value) in values {
        if value > peak {
            peak = value;
        }

        let drawdown = if peak <= Decimal::ZERO {
            Decimal::ZERO
        } else if value <= Decimal::ZERO {
            warn!(%date, %value, "Non-positive valuation below peak, clamping drawdown");
            -Decimal::ONE
        } else {
            (value - peak) / peak
        };

        points.push(PerformancePoint {
            date,
            value,
            drawdown: Some(drawdown),
        });
    }

    points
}
