//! Engine configuration types.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Summary aggregation configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SummaryConfig {
    /// Minimum episode depth, as a positive fraction, for an episode to
    /// count as significant. An episode qualifies when its `max_drawdown`
    /// is at or below the negated threshold.
    pub significance_threshold: Decimal,
}

impl Default for SummaryConfig {
    fn default() -> Self {
        Self {
            significance_threshold: Decimal::new(1, 1), // 0.1 (10%)
        }
    }
}
