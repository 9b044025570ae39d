//! # Daily Series
//!
//! `daily_series` produces reproducible synthetic daily OHLCV (Open, High,
//! Low, Close, Volume) bars for a ticker symbol. The same ticker, day count and
//! end date always give the same bars.
//!
//! ## Usage Example
//!
//! ```
//! use chrono::NaiveDate;
//! use daily_series::SeriesGenerator;
//!
//! let generator = SeriesGenerator::default();
//! let end = NaiveDate::from_ymd_opt(2024, 3, 15).unwrap();
//! let bars = generator.generate_until("AAPL", 30, end).unwrap();
//!
//! assert!(!bars.is_empty());
//! assert_eq!(bars.last().unwrap().date, end);
//! ```

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use thiserror::Error;

pub mod calendar;
pub mod generator;
pub mod summary;
pub mod tickers;

pub use calendar::{is_weekend, roll_to_weekday, HistoryPeriod};
pub use generator::{SeriesGenerator, MA_LONG_WINDOW, MA_SHORT_WINDOW};
pub use summary::QuoteSummary;
pub use tickers::{TickerProfile, TickerTable, POPULAR_TICKERS};

/// Errors that can occur while building a series
#[derive(Error, Debug)]
pub enum SeriesError {
    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for series operations
pub type Result<T> = std::result::Result<T, SeriesError>;

/// Represents OHLCV (Open, High, Low, Close, Volume) data for a specific time period
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct OhlcvData {
    /// Open price
    pub open: f64,
    /// High price
    pub high: f64,
    /// Low price
    pub low: f64,
    /// Close price
    pub close: f64,
    /// Volume
    pub volume: u64,
}

/// One trading day with its trailing moving averages
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DailyBar {
    /// Trading date, never a Saturday or Sunday
    pub date: NaiveDate,
    /// OHLCV data
    #[serde(flatten)]
    pub data: OhlcvData,
    /// Mean close over the trailing 50 bars, including this one
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ma50: Option<f64>,
    /// Mean close over the trailing 200 bars, including this one
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ma200: Option<f64>,
}

impl DailyBar {
    /// Create a bar without moving averages
    pub fn new(date: NaiveDate, data: OhlcvData) -> Self {
        Self {
            date,
            data,
            ma50: None,
            ma200: None,
        }
    }

    /// Close price
    pub fn close(&self) -> f64 {
        self.data.close
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn bar() -> DailyBar {
        DailyBar::new(
            NaiveDate::from_ymd_opt(2024, 3, 15).unwrap(),
            OhlcvData {
                open: 100.5,
                high: 102.0,
                low: 99.75,
                close: 101.25,
                volume: 12_345_678,
            },
        )
    }

    #[test]
    fn test_bar_serializes_flat() {
        let json = serde_json::to_value(bar()).unwrap();

        assert_eq!(json["date"], "2024-03-15");
        assert_eq!(json["close"], 101.25);
        assert_eq!(json["volume"], 12_345_678);
        assert!(json.get("ma50").is_none());
    }

    #[test]
    fn test_bar_json_round_trip_keeps_averages() {
        let mut original = bar();
        original.ma50 = Some(100.1);
        original.ma200 = Some(98.7);

        let text = serde_json::to_string(&original).unwrap();
        let parsed: DailyBar = serde_json::from_str(&text).unwrap();
        assert_eq!(parsed, original);
        assert_eq!(parsed.close(), 101.25);
    }
}
