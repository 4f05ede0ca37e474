//! Summary statistics over a segmented performance series.

use std::cmp::Reverse;

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};
use tracing::debug;

use crate::config::SummaryConfig;
use crate::types::{DrawdownEvent, DrawdownSummary, PerformancePoint};

/// Episodes whose depth meets or exceeds the significance threshold.
///
/// The threshold is a positive fraction; an episode qualifies when its
/// `max_drawdown <= -threshold`. Order is preserved.
#[must_use]
pub fn significant_events(events: &[DrawdownEvent], threshold: Decimal) -> Vec<DrawdownEvent> {
    events
        .iter()
        .filter(|event| event.max_drawdown <= -threshold)
        .cloned()
        .collect()
}

/// Select the events summary statistics are computed over.
///
/// Significant episodes are preferred; when none qualify, the full list is
/// used instead so statistics are never empty while at least one drawdown
/// occurred.
#[must_use]
pub fn events_for_summary(events: &[DrawdownEvent], threshold: Decimal) -> Vec<DrawdownEvent> {
    let significant = significant_events(events, threshold);
    if significant.is_empty() {
        events.to_vec()
    } else {
        significant
    }
}

/// Derive portfolio-level summary statistics from a series and its episodes.
///
/// - `current_drawdown` reads the last series point (absent drawdown
///   normalized to zero); `None` for an empty series.
/// - `active_event` is the open episode; segmentation emits at most one.
/// - `worst_event`, `longest_recovery`, and `average_recovery_days` are
///   computed over the [`events_for_summary`] selection. Depth ties go to
///   the earlier start date; recovery-length ties go to the earlier trough.
#[must_use]
pub fn summarize(
    series: &[PerformancePoint],
    events: &[DrawdownEvent],
    config: &SummaryConfig,
) -> DrawdownSummary {
    let current_drawdown = series.last().map(PerformancePoint::normalized_drawdown);
    let active_event = events.iter().find(|event| event.is_active()).cloned();

    let selected = events_for_summary(events, config.significance_threshold);

    let worst_event = selected
        .iter()
        .min_by_key(|event| (event.max_drawdown, event.start_date))
        .cloned();

    let completed: Vec<&DrawdownEvent> = selected
        .iter()
        .filter(|event| !event.is_active())
        .collect();

    let longest_recovery = completed
        .iter()
        .max_by_key(|event| (event.recovery_days.unwrap_or(0), Reverse(event.trough_date)))
        .map(|event| (*event).clone());

    let average_recovery_days = mean_recovery_days(&completed);

    debug!(
        events = events.len(),
        selected = selected.len(),
        completed = completed.len(),
        "Summarized drawdown events"
    );

    DrawdownSummary {
        current_drawdown,
        active_event,
        worst_event,
        longest_recovery,
        average_recovery_days,
    }
}

/// Mean recovery duration in whole days, rounded half-up.
fn mean_recovery_days(completed: &[&DrawdownEvent]) -> Option<i64> {
    if completed.is_empty() {
        return None;
    }

    let total: i64 = completed.iter().filter_map(|event| event.recovery_days).sum();
    let mean = Decimal::from(total) / Decimal::from(completed.len() as u64);

    mean.round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero)
        .to_i64()
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use super::*;
    use crate::dates::days_between;

    fn day(n: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 1, n).unwrap()
    }

    fn make_event(
        start: u32,
        trough: u32,
        recovery: Option<u32>,
        max_drawdown_bps: i64,
    ) -> DrawdownEvent {
        let start_date = day(start);
        let trough_date = day(trough);
        let recovery_date = recovery.map(day);

        DrawdownEvent {
            start_date,
            trough_date,
            recovery_date,
            max_drawdown: Decimal::new(max_drawdown_bps, 4),
            days_to_trough: days_between(start_date, trough_date),
            recovery_days: recovery_date.map(|date| days_between(trough_date, date)),
            duration_days: match recovery_date {
                Some(date) => days_between(start_date, date),
                None => days_between(start_date, trough_date),
            },
        }
    }

    fn make_point(n: u32, drawdown_bps: Option<i64>) -> PerformancePoint {
        PerformancePoint {
            date: day(n),
            value: Decimal::new(100, 0),
            drawdown: drawdown_bps.map(|bps| Decimal::new(bps, 4)),
        }
    }

    #[test]
    fn test_empty_inputs_yield_empty_summary() {
        let summary = summarize(&[], &[], &SummaryConfig::default());
        assert_eq!(summary, DrawdownSummary::default());
        assert!(summary.current_drawdown.is_none());
        assert!(summary.average_recovery_days.is_none());
    }

    #[test]
    fn test_current_drawdown_reads_last_point() {
        let series = vec![make_point(1, Some(0)), make_point(2, Some(-1800))];
        let summary = summarize(&series, &[], &SummaryConfig::default());
        assert_eq!(summary.current_drawdown, Some(Decimal::new(-18, 2)));
    }

    #[test]
    fn test_current_drawdown_normalizes_missing_value() {
        let series = vec![make_point(1, Some(-500)), make_point(2, None)];
        let summary = summarize(&series, &[], &SummaryConfig::default());
        assert_eq!(summary.current_drawdown, Some(Decimal::ZERO));
    }

    #[test]
    fn test_active_event_comes_from_full_event_list() {
        // The open episode is shallow and fails the threshold, but active
        // selection ignores the significance filter
        let events = vec![make_event(1, 2, Some(3), -2000), make_event(4, 5, None, -300)];
        let summary = summarize(&[], &events, &SummaryConfig::default());

        let Some(active) = summary.active_event else {
            panic!("open episode should be reported active");
        };
        assert_eq!(active.start_date, day(4));
    }

    #[test]
    fn test_significant_events_filters_and_preserves_order() {
        let events = vec![
            make_event(1, 2, Some(3), -1500),
            make_event(4, 5, Some(6), -500),
            make_event(7, 8, Some(9), -1000),
        ];

        let significant = significant_events(&events, Decimal::new(1, 1));
        assert_eq!(significant.len(), 2);
        assert_eq!(significant[0].start_date, day(1));
        assert_eq!(significant[1].start_date, day(7));
    }

    #[test]
    fn test_selection_falls_back_to_all_events() {
        let events = vec![make_event(1, 2, Some(3), -200), make_event(4, 5, Some(6), -400)];

        let selected = events_for_summary(&events, Decimal::new(1, 1));
        assert_eq!(selected.len(), 2);
    }

    #[test]
    fn test_summary_statistics_use_selected_events_only() {
        // Deep episode recovers in 4 days, shallow in 1; the shallow one is
        // below the threshold so the average must be 4, not 3 (the
        // rounded-up mean over both)
        let events = vec![make_event(1, 2, Some(6), -2000), make_event(8, 9, Some(10), -500)];
        let summary = summarize(&[], &events, &SummaryConfig::default());

        let Some(worst) = summary.worst_event else {
            panic!("worst event should exist");
        };
        assert_eq!(worst.start_date, day(1));
        assert_eq!(summary.average_recovery_days, Some(4));

        let Some(longest) = summary.longest_recovery else {
            panic!("longest recovery should exist");
        };
        assert_eq!(longest.start_date, day(1));
    }

    #[test]
    fn test_worst_event_tie_breaks_on_earlier_start() {
        let events = vec![make_event(5, 6, Some(7), -1200), make_event(1, 2, Some(3), -1200)];
        let summary = summarize(&[], &events, &SummaryConfig::default());

        let Some(worst) = summary.worst_event else {
            panic!("worst event should exist");
        };
        assert_eq!(worst.start_date, day(1));
    }

    #[test]
    fn test_longest_recovery_tie_breaks_on_earlier_trough() {
        // Both episodes take 2 days trough-to-recovery
        let events = vec![make_event(8, 9, Some(11), -1500), make_event(1, 2, Some(4), -1500)];
        let summary = summarize(&[], &events, &SummaryConfig::default());

        let Some(longest) = summary.longest_recovery else {
            panic!("longest recovery should exist");
        };
        assert_eq!(longest.trough_date, day(2));
    }

    #[test]
    fn test_average_recovery_rounds_half_up() {
        // Recovery days 1 and 2: mean 1.5 rounds to 2
        let events = vec![make_event(1, 2, Some(3), -1500), make_event(5, 6, Some(8), -1500)];
        let summary = summarize(&[], &events, &SummaryConfig::default());
        assert_eq!(summary.average_recovery_days, Some(2));
    }

    #[test]
    fn test_no_completed_events_yield_no_recovery_statistics() {
        let events = vec![make_event(1, 2, None, -2500)];
        let summary = summarize(&[], &events, &SummaryConfig::default());

        assert!(summary.longest_recovery.is_none());
        assert!(summary.average_recovery_days.is_none());
        let Some(worst) = summary.worst_event else {
            panic!("open episode still counts for depth");
        };
        assert!(worst.is_active());
    }
}
