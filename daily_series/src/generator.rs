//! Synthetic daily bar generation
//!
//! Walks backward from the end date one calendar day at a time, skipping
//! weekends, and compounds a seeded daily change onto the ticker's base price.
//! The seed offset for a day is its distance in calendar days from the end
//! date, so weekend days consume an offset without producing a bar.

use chrono::{Days, Local, NaiveDate};
use tracing::debug;
use trade_math::{deterministic_noise, round_price, ticker_seed, trailing_means, NoiseSite};

use crate::calendar::is_weekend;
use crate::tickers::TickerTable;
use crate::{DailyBar, OhlcvData, Result, SeriesError};

/// Window of the short moving average
pub const MA_SHORT_WINDOW: usize = 50;
/// Window of the long moving average
pub const MA_LONG_WINDOW: usize = 200;

/// Centre of the daily draw; slightly below 0.5 gives a mild upward drift
const CHANGE_CENTRE: f64 = 0.48;
/// Maximum open offset from the running price, as a fraction (±0.25%)
const OPEN_SPREAD: f64 = 0.005;
/// Share of the daily range added above the high body and below the low body
const WICK_SHARE: f64 = 0.4;
const BASE_VOLUME: f64 = 10_000_000.0;
const VOLUME_SPAN: f64 = 50_000_000.0;
/// Upper bound on up-front allocation; longer series grow as they go
const PREALLOCATED_BARS: u32 = 366;

/// Deterministic OHLCV series generator
#[derive(Debug, Clone, Default)]
pub struct SeriesGenerator {
    tickers: TickerTable,
}

impl SeriesGenerator {
    /// Create a generator over a custom ticker table
    pub fn new(tickers: TickerTable) -> Self {
        Self { tickers }
    }

    /// Company name for `ticker`, or the upper-cased ticker when unknown
    pub fn display_name(&self, ticker: &str) -> String {
        self.tickers.display_name(ticker)
    }

    /// Generate bars covering the last `days` calendar days up to today
    pub fn generate(&self, ticker: &str, days: u32) -> Result<Vec<DailyBar>> {
        self.generate_until(ticker, days, Local::now().date_naive())
    }

    /// Generate bars covering `days` calendar days ending at `end` (inclusive).
    ///
    /// Returns one bar per weekday in ascending date order. Fewer than `days`
    /// bars come back whenever the range contains a weekend; a range made only
    /// of weekend days yields an empty series.
    pub fn generate_until(
        &self,
        ticker: &str,
        days: u32,
        end: NaiveDate,
    ) -> Result<Vec<DailyBar>> {
        if days == 0 {
            return Err(SeriesError::InvalidParameter(
                "Day count must be at least 1".to_string(),
            ));
        }
        let span = u64::from(days) - 1;
        if end.checked_sub_days(Days::new(span)).is_none() {
            return Err(SeriesError::InvalidParameter(format!(
                "{} days before {} is out of the calendar range",
                span, end
            )));
        }

        let profile = self.tickers.resolve(ticker);
        let seed = ticker_seed(ticker) as f64;
        let mut price = profile.base_price;
        let mut bars = Vec::with_capacity(days.min(PREALLOCATED_BARS) as usize);

        for offset in (0..days as u64).rev() {
            let date = end.checked_sub_days(Days::new(offset)).ok_or_else(|| {
                SeriesError::InvalidParameter(format!(
                    "{} days before {} is out of the calendar range",
                    offset, end
                ))
            })?;
            if is_weekend(date) {
                continue;
            }

            let draw_seed = seed + (offset * 3) as f64;
            let rand1 = deterministic_noise(NoiseSite::SeriesDraw, draw_seed);
            let rand2 = deterministic_noise(NoiseSite::SeriesDraw, draw_seed + 1.0);
            let rand3 = deterministic_noise(NoiseSite::SeriesDraw, draw_seed + 2.0);

            let change = (rand1 - CHANGE_CENTRE) * 2.0 * profile.volatility + profile.trend_bias;
            price *= 1.0 + change;

            let daily_range = price * profile.volatility * (0.5 + rand2);
            let open = price * (1.0 + (rand3 - 0.5) * OPEN_SPREAD);
            let high = open.max(price) + daily_range * WICK_SHARE;
            let low = open.min(price) - daily_range * WICK_SHARE;
            let volume = (BASE_VOLUME + rand1 * VOLUME_SPAN).floor() as u64;

            bars.push(DailyBar::new(
                date,
                OhlcvData {
                    open: round_price(open),
                    high: round_price(high),
                    low: round_price(low),
                    close: round_price(price),
                    volume,
                },
            ));
        }

        attach_moving_averages(&mut bars);

        debug!(
            ticker,
            days,
            points = bars.len(),
            last_close = ?bars.last().map(DailyBar::close),
            "generated synthetic series"
        );

        Ok(bars)
    }
}

/// Fill `ma50`/`ma200` from the (already rounded) closes
fn attach_moving_averages(bars: &mut [DailyBar]) {
    let closes: Vec<f64> = bars.iter().map(DailyBar::close).collect();

    // Both windows are non-zero constants, so the trailing means cannot fail.
    let short = trailing_means(&closes, MA_SHORT_WINDOW).unwrap_or_default();
    let long = trailing_means(&closes, MA_LONG_WINDOW).unwrap_or_default();

    for ((bar, s), l) in bars.iter_mut().zip(short).zip(long) {
        bar.ma50 = Some(round_price(s));
        bar.ma200 = Some(round_price(l));
    }
}
