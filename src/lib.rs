//! # Tickercast
//!
//! `tickercast` synthesizes reproducible stock price histories and produces
//! short-horizon forecasts with back-tested accuracy metrics. There is no real
//! market data: every series is derived from the ticker symbol alone.
//!
//! ## Example
//!
//! ```
//! use tickercast::{generate, predict, resolve_display_name, ModelVariant};
//!
//! let history = generate("AAPL", 180).unwrap();
//! let prediction = predict(&history, 7, ModelVariant::Linear).unwrap();
//!
//! assert_eq!(prediction.future().count(), 7);
//! assert_eq!(resolve_display_name("aapl"), "Apple Inc.");
//! ```

pub use daily_series::{
    DailyBar, HistoryPeriod, OhlcvData, QuoteSummary, SeriesError, SeriesGenerator, TickerProfile,
    TickerTable, POPULAR_TICKERS,
};
pub use forecast_engine::{
    ForecastConfig, ForecastError, ForecastPoint, Forecaster, ForecasterSettings, ModelMetrics,
    ModelVariant, Prediction, Segment,
};

/// Generate a synthetic daily history for `ticker` covering the last `days`
/// calendar days up to today, using the built-in ticker table.
///
/// Weekends produce no bar, so a one or two day window that falls entirely
/// on a weekend returns an empty series. [`predict`] rejects an empty history
/// with [`ForecastError::InvalidParameter`].
///
/// # Examples
///
/// ```
/// let bars = tickercast::generate("TSLA", 30).unwrap();
/// assert!(bars.len() <= 30);
/// ```
pub fn generate(ticker: &str, days: u32) -> Result<Vec<DailyBar>, SeriesError> {
    SeriesGenerator::default().generate(ticker, days)
}

/// Back-test the tail of `history` and forecast `horizon_days` future days.
pub fn predict(
    history: &[DailyBar],
    horizon_days: u32,
    variant: ModelVariant,
) -> Result<Prediction, ForecastError> {
    Forecaster::new().predict(history, horizon_days, variant)
}

/// Company name for `ticker`, or the upper-cased ticker when unknown.
///
/// # Examples
///
/// ```
/// assert_eq!(tickercast::resolve_display_name("msft"), "Microsoft Corp.");
/// assert_eq!(tickercast::resolve_display_name("xyz"), "XYZ");
/// ```
pub fn resolve_display_name(ticker: &str) -> String {
    TickerTable::default().display_name(ticker)
}
