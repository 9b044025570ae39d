//! Back-tested trend forecaster
//!
//! A least-squares line is fitted through the trailing closes. The tail of the
//! history is re-predicted with seeded jitter around the real closes to score
//! the model, and future days compound the damped slope plus seeded jitter
//! from the last close. The confidence band widens 5% per step.

use chrono::{Days, NaiveDate};
use daily_series::{roll_to_weekday, DailyBar};
use tracing::{debug, trace};
use trade_math::{deterministic_noise, round_price, LinearRegression, NoiseSite};

use crate::config::{ForecastConfig, ForecasterSettings};
use crate::error::{ForecastError, Result};
use crate::metrics::ModelMetrics;
use crate::models::{ModelVariant, VariantProfile};
use crate::prediction::{ForecastPoint, Prediction, Segment};

/// Synthetic ±2% band around back-test predictions
const BACK_TEST_LOWER: f64 = 0.98;
const BACK_TEST_UPPER: f64 = 1.02;
/// Back-test jitter is half as strong as forward jitter
const BACK_TEST_NOISE_SCALE: f64 = 0.5;
const BACK_TEST_SEED_STEP: f64 = 7.3;
const FORWARD_SEED_BASE: f64 = 100.0;
const FORWARD_SEED_STEP: f64 = 17.3;
/// Growth of the confidence band per forward step
const BAND_GROWTH: f64 = 0.05;
/// Upper bound on up-front allocation for the future segment
const PREALLOCATED_STEPS: u32 = 366;

/// Produces back-test and forward predictions from a bar history
#[derive(Debug, Clone, Default)]
pub struct Forecaster {
    settings: ForecasterSettings,
}

impl Forecaster {
    /// Create a forecaster with the default windows
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a forecaster with custom windows
    pub fn with_settings(settings: ForecasterSettings) -> Result<Self> {
        settings.validate()?;
        Ok(Self { settings })
    }

    /// Settings in use
    pub fn settings(&self) -> &ForecasterSettings {
        &self.settings
    }

    /// Forecast using a validated request config
    pub fn predict_with(
        &self,
        history: &[DailyBar],
        config: &ForecastConfig,
    ) -> Result<Prediction> {
        config.validate()?;
        self.predict(history, config.horizon_days, config.variant)
    }

    /// Back-test the tail of `history` and predict `horizon_days` future days.
    ///
    /// `history` must be non-empty and in ascending date order, and
    /// `horizon_days` must be at least 1.
    pub fn predict(
        &self,
        history: &[DailyBar],
        horizon_days: u32,
        variant: ModelVariant,
    ) -> Result<Prediction> {
        let last = history.last().ok_or_else(|| {
            ForecastError::InvalidParameter("History must contain at least one bar".to_string())
        })?;
        if horizon_days == 0 {
            return Err(ForecastError::InvalidParameter(
                "Forecast horizon must be at least 1 day".to_string(),
            ));
        }
        if last.date.checked_add_days(Days::new(u64::from(horizon_days))).is_none() {
            return Err(ForecastError::InvalidParameter(format!(
                "{} days after {} is out of the calendar range",
                horizon_days, last.date
            )));
        }

        let closes: Vec<f64> = history.iter().map(DailyBar::close).collect();
        let n = closes.len();
        let trend = LinearRegression::fit_trailing(&closes, self.settings.trend_window)?;
        let profile = variant.profile();
        let test_size = self.settings.test_size(n);

        debug!(
            points = n,
            horizon_days,
            variant = %variant,
            slope = trend.slope(),
            test_size,
            "running forecast"
        );

        let split = n - test_size;
        let (mut predictions, metrics) =
            back_test(&history[split..], split, trend.y_mean(), &profile)?;

        predictions.extend(forward(
            last.date,
            last.close(),
            n,
            horizon_days,
            trend.slope(),
            &profile,
        )?);

        Ok(Prediction {
            predictions,
            metrics,
        })
    }
}

/// Re-predict the held-out bars and score them. `offset` is the index of the
/// first held-out bar within the full history.
fn back_test(
    held_out: &[DailyBar],
    offset: usize,
    baseline_mean: f64,
    profile: &VariantProfile,
) -> Result<(Vec<ForecastPoint>, ModelMetrics)> {
    let mut points = Vec::with_capacity(held_out.len());
    let mut predicted = Vec::with_capacity(held_out.len());
    let mut actual = Vec::with_capacity(held_out.len());

    for (i, bar) in held_out.iter().enumerate() {
        let seed = (offset + i) as f64 * BACK_TEST_SEED_STEP;
        let jitter = deterministic_noise(NoiseSite::BackTest, seed);
        let close = bar.close();
        let value =
            round_price(close * (1.0 + jitter * profile.noise_factor * BACK_TEST_NOISE_SCALE));

        points.push(ForecastPoint {
            date: bar.date,
            predicted: value,
            lower: round_price(value * BACK_TEST_LOWER),
            upper: round_price(value * BACK_TEST_UPPER),
            segment: Segment::BackTest { actual: close },
        });
        predicted.push(value);
        actual.push(close);
    }

    let metrics = ModelMetrics::evaluate(&predicted, &actual, baseline_mean)?;
    Ok((points, metrics))
}

/// Step forward from the last close. Step `i` is dated `last_date + i` days,
/// rolled past any weekend, so two steps can share a Monday.
fn forward(
    last_date: NaiveDate,
    last_close: f64,
    history_len: usize,
    horizon_days: u32,
    slope: f64,
    profile: &VariantProfile,
) -> Result<Vec<ForecastPoint>> {
    let mut points = Vec::with_capacity(horizon_days.min(PREALLOCATED_STEPS) as usize);
    let mut price = last_close;

    for step in 1..=horizon_days {
        let candidate = last_date
            .checked_add_days(Days::new(u64::from(step)))
            .ok_or_else(|| {
                ForecastError::DataError(format!(
                    "{} days after {} is out of the calendar range",
                    step, last_date
                ))
            })?;
        let date = roll_to_weekday(candidate);

        let seed = history_len as f64 * FORWARD_SEED_BASE + f64::from(step) * FORWARD_SEED_STEP;
        let jitter = deterministic_noise(NoiseSite::ForwardStep, seed);
        let trend_change = slope * profile.trend_damp / price;
        price *= 1.0 + trend_change + jitter * profile.noise_factor;

        let half_width = price * profile.confidence_width * (1.0 + f64::from(step) * BAND_GROWTH);
        trace!(step, %date, price, half_width, "forward step");

        points.push(ForecastPoint {
            date,
            predicted: round_price(price),
            lower: round_price(price - half_width),
            upper: round_price(price + half_width),
            segment: Segment::Future,
        });
    }

    Ok(points)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use daily_series::OhlcvData;

    fn flat_history(len: usize, close: f64) -> Vec<DailyBar> {
        let start = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
        (0..len)
            .map(|i| {
                DailyBar::new(
                    start + chrono::Duration::days(i as i64),
                    OhlcvData {
                        open: close,
                        high: close,
                        low: close,
                        close,
                        volume: 1_000,
                    },
                )
            })
            .collect()
    }

    #[test]
    fn test_empty_history_rejected() {
        let result = Forecaster::new().predict(&[], 7, ModelVariant::Linear);
        assert!(matches!(result, Err(ForecastError::InvalidParameter(_))));
    }

    #[test]
    fn test_zero_horizon_rejected() {
        let result = Forecaster::new().predict(&flat_history(10, 50.0), 0, ModelVariant::Linear);
        assert!(matches!(result, Err(ForecastError::InvalidParameter(_))));
    }

    #[test]
    fn test_single_point_history_is_degenerate_but_valid() {
        let prediction = Forecaster::new()
            .predict(&flat_history(1, 42.0), 3, ModelVariant::Lstm)
            .unwrap();

        assert_eq!(prediction.len(), 3);
        assert!(prediction.predictions.iter().all(|p| p.is_future()));
        assert_eq!(prediction.metrics, ModelMetrics::empty());
    }

    #[test]
    fn test_back_test_formula() {
        let history = flat_history(50, 100.0);
        let prediction = Forecaster::new()
            .predict(&history, 1, ModelVariant::RandomForest)
            .unwrap();

        // 50 * 0.2 = 10 held-out bars starting at index 40
        let back: Vec<_> = prediction.back_test().collect();
        assert_eq!(back.len(), 10);

        let jitter = deterministic_noise(NoiseSite::BackTest, 40.0 * 7.3);
        let expected = round_price(100.0 * (1.0 + jitter * 0.012 * 0.5));
        assert_relative_eq!(back[0].predicted, expected);
        assert_relative_eq!(back[0].lower, round_price(expected * 0.98));
        assert_relative_eq!(back[0].upper, round_price(expected * 1.02));
        assert_eq!(back[0].actual(), Some(100.0));
        assert_eq!(back[0].date, history[40].date);
    }

    #[test]
    fn test_forward_formula_on_flat_history() {
        let history = flat_history(10, 100.0);
        let prediction = Forecaster::new()
            .predict(&history, 2, ModelVariant::Linear)
            .unwrap();
        let future: Vec<_> = prediction.future().collect();

        // Flat closes fit a zero slope, so only jitter moves the price
        let mut price = 100.0;
        for (i, point) in future.iter().enumerate() {
            let step = (i + 1) as f64;
            let jitter = deterministic_noise(NoiseSite::ForwardStep, 10.0 * 100.0 + step * 17.3);
            price *= 1.0 + jitter * 0.008;
            let half = price * 0.03 * (1.0 + step * 0.05);

            assert_relative_eq!(point.predicted, round_price(price));
            assert_relative_eq!(point.lower, round_price(price - half));
            assert_relative_eq!(point.upper, round_price(price + half));
        }
    }

    #[test]
    fn test_predict_with_config() {
        let config = ForecastConfig::new(5, ModelVariant::Lstm).unwrap();
        let prediction = Forecaster::new()
            .predict_with(&flat_history(20, 10.0), &config)
            .unwrap();
        assert_eq!(prediction.future().count(), 5);
        assert_eq!(prediction.back_test().count(), 4);
    }

    #[test]
    fn test_custom_settings() {
        let settings = ForecasterSettings {
            trend_window: 5,
            max_test_size: 3,
            test_ratio: 0.5,
        };
        let forecaster = Forecaster::with_settings(settings).unwrap();
        let prediction = forecaster
            .predict(&flat_history(20, 10.0), 1, ModelVariant::Linear)
            .unwrap();

        assert_eq!(prediction.metrics.samples, 3);
        assert_eq!(forecaster.settings().trend_window, 5);
        assert!(Forecaster::with_settings(ForecasterSettings {
            test_ratio: -0.1,
            ..settings
        })
        .is_err());
    }

    #[test]
    fn test_collapsing_history_inverts_band() {
        let mut history = flat_history(2, 100.0);
        history[1].data.close = 1.0;

        let prediction = Forecaster::new()
            .predict(&history, 1, ModelVariant::Linear)
            .unwrap();
        let step = prediction.future().next().unwrap();

        assert!(step.predicted < 0.0);
        assert!(step.lower > step.upper);
    }

    #[test]
    fn test_horizon_past_calendar_end_rejected() {
        let history = flat_history(3, 10.0);
        let result = Forecaster::new().predict(&history, u32::MAX, ModelVariant::Lstm);
        assert!(matches!(result, Err(ForecastError::InvalidParameter(_))));
    }
}
