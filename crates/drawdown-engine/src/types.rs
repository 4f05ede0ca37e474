//! Core types for drawdown episode detection and summarization.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// One trading day's observation of portfolio performance.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PerformancePoint {
    /// Calendar date of the observation. Unique and strictly increasing
    /// within a series (caller contract, see [`crate::validate_series`]).
    pub date: NaiveDate,
    /// Portfolio value (currency-agnostic at this layer).
    pub value: Decimal,
    /// Signed drawdown fraction: `0` at a new high, negative below the
    /// running peak (`-0.12` = 12% below peak). `None` when the upstream
    /// series carries no usable value for the day.
    pub drawdown: Option<Decimal>,
}

impl PerformancePoint {
    /// Drawdown with the absent case coalesced to zero (not in drawdown).
    #[must_use]
    pub fn normalized_drawdown(&self) -> Decimal {
        self.drawdown.unwrap_or(Decimal::ZERO)
    }
}

/// One maximal contiguous run of strictly negative drawdown.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DrawdownEvent {
    /// First date in the run (drawdown first observed negative).
    pub start_date: NaiveDate,
    /// Date of the deepest drawdown in the run. Ties keep the earliest date.
    pub trough_date: NaiveDate,
    /// First date after the run where drawdown returns to zero. `None`
    /// while the run is still open at the end of the series.
    pub recovery_date: Option<NaiveDate>,
    /// Minimum (most negative) drawdown observed in the run. Always `<= 0`.
    pub max_drawdown: Decimal,
    /// Calendar days from `start_date` to `trough_date`.
    pub days_to_trough: i64,
    /// Calendar days from `trough_date` to `recovery_date`. `None` iff
    /// `recovery_date` is `None`.
    pub recovery_days: Option<i64>,
    /// Calendar days from `start_date` to `recovery_date`, or to the last
    /// date seen in the run while it remains open.
    pub duration_days: i64,
}

impl DrawdownEvent {
    /// Check if this episode is still open (no recovery observed yet).
    #[must_use]
    pub const fn is_active(&self) -> bool {
        self.recovery_date.is_none()
    }
}

/// Portfolio-level statistics derived from a series and its episodes.
///
/// Every field is `None` when its input population is empty; callers must
/// handle absence explicitly rather than reading `0` as "no drawdown".
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DrawdownSummary {
    /// Drawdown of the last point in the series (may be `0`). `None` for
    /// an empty series.
    pub current_drawdown: Option<Decimal>,
    /// The open episode, if the series ends mid-drawdown.
    pub active_event: Option<DrawdownEvent>,
    /// Deepest episode among the events selected for summary.
    pub worst_event: Option<DrawdownEvent>,
    /// Completed episode with the longest trough-to-recovery time.
    pub longest_recovery: Option<DrawdownEvent>,
    /// Mean `recovery_days` over completed selected episodes, rounded
    /// half-up to the nearest whole day.
    pub average_recovery_days: Option<i64>,
}

/// Full analysis output: every detected episode plus the derived summary.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DrawdownReport {
    /// Detected episodes in chronological order.
    pub events: Vec<DrawdownEvent>,
    /// Summary statistics over the series and episodes.
    pub summary: DrawdownSummary,
}

impl DrawdownReport {
    /// Export the report as pretty-printed JSON.
    #[must_use]
    pub fn to_json(&self) -> String {
        serde_json::to_string_pretty(self).unwrap_or_default()
    }
}
