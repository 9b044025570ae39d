//! Headline quote figures for the most recent bar

use serde::{Deserialize, Serialize};

use crate::DailyBar;

/// Last close and its change from the previous session
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct QuoteSummary {
    pub last_close: f64,
    /// Previous session close; equals `last_close` for a single-bar series
    pub previous_close: f64,
    pub change: f64,
    /// Percent change, 0 when the previous close is not positive
    pub change_pct: f64,
}

impl QuoteSummary {
    /// Summarise the last two bars, `None` for an empty series
    pub fn from_bars(bars: &[DailyBar]) -> Option<Self> {
        let last_close = bars.last()?.close();
        let previous_close = bars
            .len()
            .checked_sub(2)
            .map(|i| bars[i].close())
            .unwrap_or(last_close);

        let change = last_close - previous_close;
        let change_pct = if previous_close > 0.0 {
            change / previous_close * 100.0
        } else {
            0.0
        };

        Some(Self {
            last_close,
            previous_close,
            change,
            change_pct,
        })
    }

    /// True for a flat or rising session
    pub fn is_positive(&self) -> bool {
        self.change >= 0.0
    }
}
